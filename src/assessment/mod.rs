//! Love-language assessment engine.
//!
//! A forced-choice psychometric test: a fixed bank of questions, each
//! offering exactly two options tagged with a category. Answering increments
//! the chosen category's tally; after the last question the engine finalizes
//! into an [`AssessmentResult`]. The engine is synchronous and has no side
//! effects; persisting the result is the caller's job.
//!
//! The state machine is `AwaitingAnswer(index)` → `AwaitingAnswer(index+1)`
//! → ... → `Completed`. Completed is terminal: retaking the test means
//! constructing a new [`Assessment`]. Misuse (answering past completion, or
//! picking a category the current question does not offer) is rejected with
//! a typed error instead of being left to caller discipline.

pub mod bank;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// A love-language category.
///
/// Closed set; declaration order is the stable tie-break order used when two
/// categories finish with the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Words,
    Acts,
    Gifts,
    Time,
    Touch,
}

impl Category {
    /// All categories, in tie-break order.
    pub const ALL: [Category; 5] = [
        Category::Words,
        Category::Acts,
        Category::Gifts,
        Category::Time,
        Category::Touch,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Category::Words => "Words of Affirmation",
            Category::Acts => "Acts of Service",
            Category::Gifts => "Gifts",
            Category::Time => "Quality Time",
            Category::Touch => "Physical Touch",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "words" => Ok(Category::Words),
            "acts" => Ok(Category::Acts),
            "gifts" => Ok(Category::Gifts),
            "time" => Ok(Category::Time),
            "touch" => Ok(Category::Touch),
            other => Err(format!(
                "unknown category {other:?} (expected words, acts, gifts, time or touch)"
            )),
        }
    }
}

/// One selectable option of a question.
#[derive(Debug, Clone, Copy)]
pub struct QuestionOption {
    pub text: &'static str,
    pub category: Category,
}

/// A forced-choice question: exactly two options.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub options: [QuestionOption; 2],
}

/// Per-category tallies accumulated during an assessment run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMap {
    pub words: u32,
    pub acts: u32,
    pub gifts: u32,
    pub time: u32,
    pub touch: u32,
}

impl ScoreMap {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Words => self.words,
            Category::Acts => self.acts,
            Category::Gifts => self.gifts,
            Category::Time => self.time,
            Category::Touch => self.touch,
        }
    }

    fn increment(&mut self, category: Category) {
        let slot = match category {
            Category::Words => &mut self.words,
            Category::Acts => &mut self.acts,
            Category::Gifts => &mut self.gifts,
            Category::Time => &mut self.time,
            Category::Touch => &mut self.touch,
        };
        *slot += 1;
    }

    /// Sum of all tallies. Equals the number of questions answered.
    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Entries in tie-break (declaration) order.
    pub fn entries(&self) -> [(Category, u32); 5] {
        [
            (Category::Words, self.words),
            (Category::Acts, self.acts),
            (Category::Gifts, self.gifts),
            (Category::Time, self.time),
            (Category::Touch, self.touch),
        ]
    }

    /// The category with the highest tally. On a tie, the one declared first
    /// in [`Category::ALL`] wins, so the outcome is deterministic.
    pub fn dominant(&self) -> Category {
        let mut best = Category::ALL[0];
        for &category in &Category::ALL[1..] {
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }

    /// All categories ranked by descending tally, ties in declaration order.
    pub fn ranking(&self) -> Vec<(Category, u32)> {
        let mut entries = self.entries().to_vec();
        // Stable sort keeps declaration order within equal scores.
        entries.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
        entries
    }
}

/// The finalized outcome of an assessment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentResult {
    pub scores: ScoreMap,
    pub dominant: Category,
}

impl AssessmentResult {
    /// Ranking for presentation, highest score first.
    pub fn ranking(&self) -> Vec<(Category, u32)> {
        self.scores.ranking()
    }
}

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// More questions remain.
    InProgress { answered: usize, total: usize },
    /// The last question was answered; the run is finalized.
    Completed(AssessmentResult),
}

/// A single run of the assessment.
pub struct Assessment {
    questions: &'static [Question],
    index: usize,
    scores: ScoreMap,
    completed: bool,
}

impl Assessment {
    /// Start a fresh run over the standard bank.
    pub fn new() -> Self {
        Self {
            questions: &bank::QUESTIONS,
            index: 0,
            scores: ScoreMap::default(),
            completed: false,
        }
    }

    /// The question awaiting an answer, or `None` once completed.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.completed {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Total number of questions in the bank.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Answer the current question by choosing one of its two categories.
    ///
    /// Fails with [`AssessmentError::InvalidOption`] if `category` is not
    /// offered by the current question, and with
    /// [`AssessmentError::AlreadyCompleted`] if the run is already finalized;
    /// neither failure mutates the tallies.
    pub fn select_option(
        &mut self,
        category: Category,
    ) -> std::result::Result<Progress, AssessmentError> {
        if self.completed {
            return Err(AssessmentError::AlreadyCompleted);
        }
        let question = &self.questions[self.index];
        if !question.options.iter().any(|o| o.category == category) {
            return Err(AssessmentError::InvalidOption {
                question: self.index + 1,
                category,
            });
        }

        self.scores.increment(category);

        if self.index + 1 == self.questions.len() {
            self.completed = true;
            let result = AssessmentResult {
                dominant: self.scores.dominant(),
                scores: self.scores.clone(),
            };
            tracing::debug!(dominant = %result.dominant, "assessment completed");
            Ok(Progress::Completed(result))
        } else {
            self.index += 1;
            Ok(Progress::InProgress {
                answered: self.index,
                total: self.questions.len(),
            })
        }
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Drive a full run by always picking the given option slot (0 or 1).
    fn run_with_slot(slot: usize) -> AssessmentResult {
        let mut assessment = Assessment::new();
        loop {
            let question = assessment
                .current_question()
                .expect("ran out of questions before completion");
            let category = question.options[slot].category;
            match assessment.select_option(category).expect("valid answer") {
                Progress::InProgress { .. } => continue,
                Progress::Completed(result) => return result,
            }
        }
    }

    /// Drive a full run with an explicit per-question category choice.
    fn run_with_choices(choices: &[Category]) -> AssessmentResult {
        let mut assessment = Assessment::new();
        assert_eq!(choices.len(), assessment.total_questions());
        let mut result = None;
        for &category in choices {
            match assessment.select_option(category).expect("valid answer") {
                Progress::InProgress { .. } => {}
                Progress::Completed(r) => result = Some(r),
            }
        }
        result.expect("assessment should complete after the last choice")
    }

    #[test]
    fn full_run_total_equals_question_count() {
        let result = run_with_slot(0);
        assert_eq!(result.scores.total(), 20);
        for (_, score) in result.scores.entries() {
            assert!(score <= 20);
        }
    }

    #[test]
    fn always_first_option_is_touch_dominant() {
        let result = run_with_slot(0);
        assert_eq!(result.scores.touch, 5);
        assert_eq!(result.dominant, Category::Touch);
    }

    #[test]
    fn always_second_option_is_acts_dominant() {
        let result = run_with_slot(1);
        assert_eq!(result.scores.acts, 5);
        assert_eq!(result.dominant, Category::Acts);
    }

    #[test]
    fn progress_reports_answered_and_total() {
        let mut assessment = Assessment::new();
        let first = assessment.current_question().unwrap().options[0].category;
        match assessment.select_option(first).unwrap() {
            Progress::InProgress { answered, total } => {
                assert_eq!(answered, 1);
                assert_eq!(total, 20);
            }
            Progress::Completed(_) => panic!("completed after one answer"),
        }
    }

    #[test]
    fn rejects_category_not_offered_by_current_question() {
        let mut assessment = Assessment::new();
        // Question 1 offers Words and Touch.
        let err = assessment.select_option(Category::Gifts).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::InvalidOption {
                question: 1,
                category: Category::Gifts
            }
        ));
        // The failed call must not have advanced or scored anything.
        assert_eq!(assessment.current_index(), 0);
        let progress = assessment.select_option(Category::Words).unwrap();
        assert_eq!(
            progress,
            Progress::InProgress {
                answered: 1,
                total: 20
            }
        );
    }

    #[test]
    fn rejects_answers_after_completion_without_mutating_scores() {
        let mut assessment = Assessment::new();
        let mut finalized = None;
        for _ in 0..20 {
            let category = assessment.current_question().unwrap().options[0].category;
            if let Progress::Completed(result) = assessment.select_option(category).unwrap() {
                finalized = Some(result);
            }
        }
        let finalized = finalized.expect("run should complete");

        let err = assessment.select_option(Category::Words).unwrap_err();
        assert!(matches!(err, AssessmentError::AlreadyCompleted));
        assert!(assessment.current_question().is_none());
        // The rejected call must not have touched the finalized tallies.
        assert_eq!(assessment.scores, finalized.scores);
    }

    // Two different answer sequences producing the identical tied score map
    // {words: 6, acts: 4, gifts: 2, time: 2, touch: 6} must pick the same
    // dominant category: Words, the first of the tied pair in declaration
    // order.
    #[test]
    fn tie_break_is_deterministic_across_answer_orders() {
        use Category::{Acts as A, Gifts as G, Time as Ti, Touch as T, Words as W};

        let first = run_with_choices(&[
            W, A, W, T, G, W, T, W, A, T, G, T, A, T, Ti, T, W, W, A, Ti,
        ]);
        let second = run_with_choices(&[
            T, A, W, T, A, W, T, W, A, T, G, W, Ti, T, Ti, T, W, W, A, G,
        ]);

        assert_eq!(first.scores, second.scores);
        assert_eq!(first.scores.words, 6);
        assert_eq!(first.scores.touch, 6);
        assert_eq!(first.dominant, Category::Words);
        assert_eq!(second.dominant, Category::Words);
    }

    #[test]
    fn ranking_is_descending_with_stable_ties() {
        let scores = ScoreMap {
            words: 3,
            acts: 7,
            gifts: 3,
            time: 0,
            touch: 7,
        };
        let ranking = scores.ranking();
        assert_eq!(
            ranking,
            vec![
                (Category::Acts, 7),
                (Category::Touch, 7),
                (Category::Words, 3),
                (Category::Gifts, 3),
                (Category::Time, 0),
            ]
        );
        assert_eq!(scores.dominant(), Category::Acts);
    }

    #[test]
    fn dominant_of_all_zero_is_first_category() {
        assert_eq!(ScoreMap::default().dominant(), Category::Words);
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            let tag = serde_json::to_string(&category).unwrap();
            let tag = tag.trim_matches('"');
            assert_eq!(tag.parse::<Category>().unwrap(), category);
        }
        assert!("wordz".parse::<Category>().is_err());
    }
}
