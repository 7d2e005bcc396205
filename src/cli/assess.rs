//! `alianza assess`: the interactive love-language test.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;

use crate::assessment::{Assessment, AssessmentResult, Progress};
use crate::profile::UserProfile;

pub fn run(profile_path: &Path) -> anyhow::Result<()> {
    let mut profile = UserProfile::load_from(profile_path).context("loading profile")?;

    let mut assessment = Assessment::new();
    println!(
        "Love-language assessment for {} — {} questions.",
        profile.name,
        assessment.total_questions()
    );
    println!("Pick the statement that resonates more: answer 1 or 2 (q to abort).\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let result = loop {
        let question = assessment
            .current_question()
            .context("assessment has no current question")?;

        println!(
            "Question {}/{}:",
            assessment.current_index() + 1,
            assessment.total_questions()
        );
        println!("  1) {}", question.options[0].text);
        println!("  2) {}", question.options[1].text);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!("stdin closed before the assessment finished");
        };
        let answer = line?;
        let slot = match answer.trim() {
            "1" => 0,
            "2" => 1,
            "q" | "quit" => {
                println!("Assessment aborted; nothing saved.");
                return Ok(());
            }
            _ => {
                println!("Please answer 1 or 2.\n");
                continue;
            }
        };
        println!();

        match assessment.select_option(question.options[slot].category)? {
            Progress::InProgress { .. } => {}
            Progress::Completed(result) => break result,
        }
    };

    print_result(&result);

    profile.love_language = Some(result.dominant);
    profile.scores = Some(result.scores);
    profile.save_to(profile_path).context("saving result")?;
    println!("\nResult saved to {}", profile_path.display());
    Ok(())
}

fn print_result(result: &AssessmentResult) {
    println!("Test completed! Your primary love language is:\n");
    println!("    ★ {} ★\n", result.dominant);
    for (category, score) in result.ranking() {
        println!(
            "  {:<20} {score:>2} pts  {}",
            category.label(),
            "█".repeat(score as usize)
        );
    }
}
