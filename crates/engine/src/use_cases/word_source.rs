//! Candidate word lookup.
//!
//! One query per call: a random fill-in-the-blank pattern, an optional topic,
//! and filtering down to playable words. Retrying is the caller's job.

use std::collections::HashSet;
use std::sync::Arc;

use unscramble_domain::{DefinitionSet, SearchPattern, Topic, Word};

use crate::infrastructure::ports::{
    pick_index, LookupEntry, LookupError, LookupQuery, RandomPort, WordLookupPort,
};

/// A playable word with at least one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: Word,
    pub definitions: DefinitionSet,
}

pub struct WordCandidateSource {
    lookup: Arc<dyn WordLookupPort>,
    random: Arc<dyn RandomPort>,
    max_results: u32,
}

impl WordCandidateSource {
    pub fn new(
        lookup: Arc<dyn WordLookupPort>,
        random: Arc<dyn RandomPort>,
        max_results: u32,
    ) -> Self {
        Self {
            lookup,
            random,
            max_results,
        }
    }

    /// Run one lookup with a freshly generated pattern.
    ///
    /// Returns the filtered candidates, possibly empty. Transport and decode
    /// failures are returned as-is.
    pub async fn fetch(
        &self,
        topic: Option<&Topic>,
        excluding: &HashSet<String>,
    ) -> Result<Vec<Candidate>, LookupError> {
        let pattern = SearchPattern::generate(|n| pick_index(self.random.as_ref(), n));
        let query = LookupQuery {
            pattern,
            topic: topic.cloned(),
            max_results: self.max_results,
        };

        tracing::debug!(
            pattern = %pattern,
            topic = ?topic.map(Topic::as_str),
            "Looking up candidate words"
        );

        let entries = self.lookup.lookup(query).await?;
        Ok(filter_candidates(entries, excluding))
    }
}

/// Keep entries that form a valid word, have a definition, and are not excluded.
///
/// Duplicate words keep their first occurrence.
pub fn filter_candidates(entries: Vec<LookupEntry>, excluding: &HashSet<String>) -> Vec<Candidate> {
    let mut kept: HashSet<String> = HashSet::new();
    entries
        .into_iter()
        .filter_map(|entry| {
            let word = Word::new(entry.word).ok()?;
            let definitions = DefinitionSet::from_raw(entry.definitions);
            if definitions.is_empty()
                || excluding.contains(word.as_str())
                || !kept.insert(word.as_str().to_string())
            {
                return None;
            }
            Some(Candidate { word, definitions })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockWordLookupPort;
    use crate::infrastructure::random::FixedRandom;

    fn entry(word: &str, defs: &[&str]) -> LookupEntry {
        LookupEntry::new(word, defs.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn filter_drops_unplayable_entries() {
        let entries = vec![
            entry("cat", &["n\tfeline"]),
            entry("cab", &[]),
            entry("", &["n\tnothing"]),
            entry("ice age", &["n\ta cold period"]),
            entry("co-op", &["n\ta cooperative"]),
            entry("dog", &["n\tcanine"]),
        ];
        let excluding: HashSet<String> = ["dog".to_string()].into();

        let candidates = filter_candidates(entries, &excluding);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].word.as_str(), "cat");
        assert_eq!(candidates[0].definitions.len(), 1);
    }

    #[test]
    fn filter_lowercases_and_dedupes() {
        let entries = vec![
            entry("Cat", &["n\tfeline"]),
            entry("cat", &["n\tanother feline"]),
        ];
        let candidates = filter_candidates(entries, &HashSet::new());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].word.as_str(), "cat");
        assert_eq!(
            candidates[0].definitions.get(0).map(|d| d.gloss()),
            Some("feline")
        );
    }

    #[test]
    fn filter_excludes_seen_words_case_insensitively() {
        let excluding: HashSet<String> = ["cat".to_string()].into();
        let candidates = filter_candidates(vec![entry("CAT", &["n\tfeline"])], &excluding);
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn fetch_sends_generated_pattern_and_topic() {
        let mut lookup = MockWordLookupPort::new();
        lookup
            .expect_lookup()
            .withf(|query| {
                query.pattern.to_string() == "a??"
                    && query.topic.as_ref().map(Topic::as_str) == Some("animals")
                    && query.max_results == 20
            })
            .times(1)
            .returning(|_| Ok(vec![LookupEntry::new("ant", vec!["n\tinsect".to_string()])]));

        let source = WordCandidateSource::new(Arc::new(lookup), Arc::new(FixedRandom(0)), 20);
        let topic = Topic::from_input("Animals");
        let candidates = source
            .fetch(topic.as_ref(), &HashSet::new())
            .await
            .expect("lookup succeeds");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].word.as_str(), "ant");
    }

    #[tokio::test]
    async fn fetch_passes_transport_errors_through() {
        let mut lookup = MockWordLookupPort::new();
        lookup
            .expect_lookup()
            .returning(|_| Err(LookupError::RequestFailed("timeout".to_string())));

        let source = WordCandidateSource::new(Arc::new(lookup), Arc::new(FixedRandom(0)), 20);
        let result = source.fetch(None, &HashSet::new()).await;
        assert_eq!(result, Err(LookupError::RequestFailed("timeout".to_string())));
    }
}
