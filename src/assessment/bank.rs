//! The fixed forced-choice question bank.
//!
//! Twenty questions, two options each, eight appearances per category.
//! The bank is data, not logic: changing it changes the instrument, so the
//! pairings below are kept exactly as published.

use super::{Category, Question, QuestionOption};

const fn option(text: &'static str, category: Category) -> QuestionOption {
    QuestionOption { text, category }
}

const fn question(first: QuestionOption, second: QuestionOption) -> Question {
    Question {
        options: [first, second],
    }
}

/// The full assessment bank, in presentation order.
pub static QUESTIONS: [Question; 20] = [
    question(
        option("I like receiving love notes.", Category::Words),
        option("I like being hugged.", Category::Touch),
    ),
    question(
        option("I like spending time alone with my partner.", Category::Time),
        option(
            "I feel loved when my partner helps me with chores.",
            Category::Acts,
        ),
    ),
    question(
        option("I like receiving small gifts.", Category::Gifts),
        option(
            "I like my partner telling me how much they appreciate me.",
            Category::Words,
        ),
    ),
    question(
        option("I like walking hand in hand.", Category::Touch),
        option(
            "I appreciate my partner listening without interrupting.",
            Category::Time,
        ),
    ),
    question(
        option(
            "It makes me happy when my partner does the dishes for me.",
            Category::Acts,
        ),
        option(
            "I love receiving little surprises for no reason.",
            Category::Gifts,
        ),
    ),
    question(
        option(
            "I like my partner congratulating me on my achievements.",
            Category::Words,
        ),
        option(
            "I appreciate my partner doing something they know I dislike doing.",
            Category::Acts,
        ),
    ),
    question(
        option("I like us being physically close.", Category::Touch),
        option("I like my partner surprising me with a gift.", Category::Gifts),
    ),
    question(
        option(
            "I like going out for dinner or a walk, just the two of us.",
            Category::Time,
        ),
        option(
            "I like my partner telling me: 'I am proud of you.'",
            Category::Words,
        ),
    ),
    question(
        option(
            "I feel loved when I receive an unexpected gift.",
            Category::Gifts,
        ),
        option(
            "I feel loved when my partner helps me with the cleaning.",
            Category::Acts,
        ),
    ),
    question(
        option(
            "I like my partner touching my shoulder or back.",
            Category::Touch,
        ),
        option(
            "I like my partner giving me their full attention.",
            Category::Time,
        ),
    ),
    question(
        option(
            "I value my partner making the effort to finish household tasks.",
            Category::Acts,
        ),
        option(
            "I value my partner bringing me something special from the store.",
            Category::Gifts,
        ),
    ),
    question(
        option("I like my partner saying sweet things to me.", Category::Words),
        option("I like us sitting together on the couch.", Category::Touch),
    ),
    question(
        option(
            "I would rather take a trip together than receive an expensive gift.",
            Category::Time,
        ),
        option("I like my partner helping me when I am tired.", Category::Acts),
    ),
    question(
        option("I like receiving long hugs.", Category::Touch),
        option(
            "I like my partner noticing when I do something well.",
            Category::Words,
        ),
    ),
    question(
        option("I like being given a present on my birthday.", Category::Gifts),
        option("I like being truly listened to.", Category::Time),
    ),
    question(
        option(
            "I like my partner bringing me breakfast in bed.",
            Category::Acts,
        ),
        option("I like physical contact while we talk.", Category::Touch),
    ),
    question(
        option(
            "I like receiving affectionate messages during the day.",
            Category::Words,
        ),
        option("I like us planning a special date together.", Category::Time),
    ),
    question(
        option(
            "I appreciate gifts my partner makes by hand.",
            Category::Gifts,
        ),
        option(
            "I appreciate my partner encouraging me in my projects.",
            Category::Words,
        ),
    ),
    question(
        option(
            "I like getting a kiss when leaving the house.",
            Category::Touch,
        ),
        option(
            "I like my partner offering to run my errands.",
            Category::Acts,
        ),
    ),
    question(
        option(
            "I like spending the weekend together without distractions.",
            Category::Time,
        ),
        option(
            "I like receiving a small token, however little.",
            Category::Gifts,
        ),
    ),
];
