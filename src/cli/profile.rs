//! `alianza profile` subcommands.

use std::path::Path;

use anyhow::Context;
use clap::Args;

use crate::assessment::Category;
use crate::profile::{DiscStyle, UserProfile};

#[derive(Args)]
pub struct InitArgs {
    /// Your name.
    #[arg(long)]
    pub name: String,

    /// Your partner's name.
    #[arg(long)]
    pub partner_name: String,

    /// Your DISC style: dominant, influential, steady or conscientious.
    #[arg(long)]
    pub disc_style: DiscStyle,

    /// Your enneagram type (1-9).
    #[arg(long)]
    pub enneagram_type: u8,

    /// Years married.
    #[arg(long)]
    pub years_married: u32,

    /// Your partner's love language, if already known:
    /// words, acts, gifts, time or touch.
    #[arg(long)]
    pub partner_love_language: Option<Category>,
}

pub fn init(path: &Path, args: InitArgs) -> anyhow::Result<()> {
    let profile = UserProfile {
        name: args.name,
        partner_name: args.partner_name,
        disc_style: args.disc_style,
        enneagram_type: args.enneagram_type,
        years_married: args.years_married,
        love_language: None,
        partner_love_language: args.partner_love_language,
        scores: None,
    };
    profile.save_to(path).context("saving profile")?;
    println!("Profile saved to {}", path.display());
    println!("Next: run `alianza assess` to discover your love language.");
    Ok(())
}

pub fn show(path: &Path) -> anyhow::Result<()> {
    let profile = UserProfile::load_from(path).context("loading profile")?;

    println!("{} & {}", profile.name, profile.partner_name);
    println!("  DISC style:       {}", profile.disc_style);
    println!("  Enneagram type:   {}", profile.enneagram_type);
    println!("  Years married:    {}", profile.years_married);
    match profile.love_language {
        Some(language) => println!("  Love language:    {language}"),
        None => println!("  Love language:    not assessed yet (run `alianza assess`)"),
    }
    match profile.partner_love_language {
        Some(language) => println!("  Partner language: {language}"),
        None => println!("  Partner language: unknown"),
    }
    if let Some(scores) = &profile.scores {
        println!("  Last assessment:");
        for (category, score) in scores.ranking() {
            println!("    {:<20} {score:>2} pts", category.label());
        }
    }
    Ok(())
}
