//! Canned replies to free text.

/// Kinds of small talk the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmalltalkTopic {
    Greeting,
    Thanks,
    Status,
}

const GREETING_WORDS: &[&str] = &["привет", "hello", "hi", "хай", "здравствуй"];
const THANKS_WORDS: &[&str] = &["спасибо", "благодарю", "thanks", "thank you"];
const STATUS_WORDS: &[&str] = &["как дела", "как ты", "how are you"];

/// Topics in priority order with their trigger words.
const TABLE: &[(SmalltalkTopic, &[&str])] = &[
    (SmalltalkTopic::Greeting, GREETING_WORDS),
    (SmalltalkTopic::Thanks, THANKS_WORDS),
    (SmalltalkTopic::Status, STATUS_WORDS),
];

/// Classifies free text by case-insensitive substring match.
///
/// The first topic with a matching word wins.
#[must_use]
pub fn classify(text: &str) -> Option<SmalltalkTopic> {
    let text = text.to_lowercase();
    TABLE
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(topic, _)| *topic)
}
