//! Per-topic progression: served words, seen words, and successes.

use std::collections::HashSet;

use crate::value_objects::{Topic, Word};

/// Words served per topic before the topic is complete
pub const MAX_WORDS_PER_TOPIC: u32 = 20;

/// Progress within the active topic.
///
/// Owned by the puzzle engine and mutated only through these methods; the
/// seen-word set is scoped to the current topic and cleared on topic change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSession {
    topic: Option<Topic>,
    seen_words: HashSet<String>,
    words_served: u32,
    success_count: u32,
    max_words: u32,
}

impl TopicSession {
    pub fn new(topic: Option<Topic>) -> Self {
        Self::with_max_words(topic, MAX_WORDS_PER_TOPIC)
    }

    pub fn with_max_words(topic: Option<Topic>, max_words: u32) -> Self {
        Self {
            topic,
            seen_words: HashSet::new(),
            words_served: 0,
            success_count: 0,
            max_words,
        }
    }

    /// Record that `word` was served as a round in this topic.
    ///
    /// The served counter never exceeds the topic cap.
    pub fn record_served(&mut self, word: &Word) {
        self.seen_words.insert(word.as_str().to_string());
        if self.words_served < self.max_words {
            self.words_served += 1;
        }
    }

    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn is_at_capacity(&self) -> bool {
        self.words_served >= self.max_words
    }

    /// Switch to `topic`, clearing every counter and the seen-word set.
    pub fn reset_for_topic(&mut self, topic: Option<Topic>) {
        self.topic = topic;
        self.seen_words.clear();
        self.words_served = 0;
        self.success_count = 0;
    }

    pub fn has_seen(&self, word: &str) -> bool {
        self.seen_words.contains(&word.to_ascii_lowercase())
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    pub fn seen_words(&self) -> &HashSet<String> {
        &self.seen_words
    }

    pub fn words_served(&self) -> u32 {
        self.words_served
    }

    pub fn success_count(&self) -> u32 {
        self.success_count
    }

    pub fn max_words(&self) -> u32 {
        self.max_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).expect("valid word")
    }

    #[test]
    fn records_served_words() {
        let mut session = TopicSession::new(Topic::from_input("animals"));
        session.record_served(&word("cat"));
        assert_eq!(session.words_served(), 1);
        assert!(session.has_seen("cat"));
        assert!(session.has_seen("CAT"));
        assert!(!session.has_seen("dog"));
    }

    #[test]
    fn reaches_capacity_at_max_and_stays_bounded() {
        let mut session = TopicSession::new(None);
        for i in 0..MAX_WORDS_PER_TOPIC {
            assert!(!session.is_at_capacity());
            let text = "a".repeat(i as usize + 1);
            session.record_served(&word(&text));
        }
        assert!(session.is_at_capacity());

        session.record_served(&word("extra"));
        assert_eq!(session.words_served(), MAX_WORDS_PER_TOPIC);
    }

    #[test]
    fn reset_clears_everything_for_new_topic() {
        let mut session = TopicSession::new(Topic::from_input("animals"));
        session.record_served(&word("cat"));
        session.record_success();

        session.reset_for_topic(Topic::from_input("food"));
        assert_eq!(session.topic().map(Topic::as_str), Some("food"));
        assert_eq!(session.words_served(), 0);
        assert_eq!(session.success_count(), 0);
        assert!(session.seen_words().is_empty());
    }

    #[test]
    fn custom_cap_is_honoured() {
        let mut session = TopicSession::with_max_words(None, 2);
        session.record_served(&word("cat"));
        assert!(!session.is_at_capacity());
        session.record_served(&word("dog"));
        assert!(session.is_at_capacity());
    }
}
