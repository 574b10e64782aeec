//! Word acquisition with a bounded retry budget.
//!
//! Each attempt asks the candidate source with a new random pattern. Empty
//! results and lookup failures both consume one attempt; after the budget is
//! spent the round gives up instead of retrying forever.

use std::collections::HashSet;
use std::sync::Arc;

use unscramble_domain::Topic;

use crate::infrastructure::ports::{pick_index, LookupError, RandomPort};

use super::word_source::{Candidate, WordCandidateSource};

/// Why an acquisition attempt (or the whole acquisition) produced no word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcquisitionError {
    #[error("No candidate words survived filtering")]
    NoCandidates,
    #[error("Lookup failed: {0}")]
    Transport(#[from] LookupError),
    #[error("No word found after {attempts} attempts")]
    RetryBudgetExhausted { attempts: u32 },
}

pub struct AcquireWord {
    source: WordCandidateSource,
    random: Arc<dyn RandomPort>,
    max_attempts: u32,
}

impl AcquireWord {
    pub fn new(source: WordCandidateSource, random: Arc<dyn RandomPort>, max_attempts: u32) -> Self {
        Self {
            source,
            random,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Find a word for the next round.
    ///
    /// Words in `excluding` are never returned. Only
    /// `AcquisitionError::RetryBudgetExhausted` is returned to the caller.
    pub async fn execute(
        &self,
        topic: Option<Topic>,
        excluding: HashSet<String>,
    ) -> Result<Candidate, AcquisitionError> {
        for attempt in 1..=self.max_attempts {
            match self.attempt(topic.as_ref(), &excluding).await {
                Ok(candidate) => {
                    tracing::debug!(
                        attempt,
                        word = %candidate.word,
                        "Acquired word"
                    );
                    return Ok(candidate);
                }
                Err(AcquisitionError::Transport(e)) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "Word lookup failed"
                    );
                }
                Err(e) => {
                    tracing::debug!(
                        attempt,
                        max_attempts = self.max_attempts,
                        reason = %e,
                        "Word lookup found nothing usable"
                    );
                }
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            topic = ?topic.as_ref().map(Topic::as_str),
            "Giving up on word acquisition"
        );
        Err(AcquisitionError::RetryBudgetExhausted {
            attempts: self.max_attempts,
        })
    }

    async fn attempt(
        &self,
        topic: Option<&Topic>,
        excluding: &HashSet<String>,
    ) -> Result<Candidate, AcquisitionError> {
        let mut candidates = self.source.fetch(topic, excluding).await?;
        if candidates.is_empty() {
            return Err(AcquisitionError::NoCandidates);
        }
        let index = pick_index(self.random.as_ref(), candidates.len());
        Ok(candidates.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{LookupEntry, MockWordLookupPort};
    use crate::infrastructure::random::{FixedRandom, SequenceRandom};

    fn acquire(lookup: MockWordLookupPort, random: Arc<dyn RandomPort>) -> AcquireWord {
        let source = WordCandidateSource::new(Arc::new(lookup), random.clone(), 20);
        AcquireWord::new(source, random, 5)
    }

    fn entry(word: &str) -> LookupEntry {
        LookupEntry::new(word, vec![format!("n\t{} gloss", word)])
    }

    #[tokio::test]
    async fn returns_first_non_empty_result() {
        let mut lookup = MockWordLookupPort::new();
        let mut calls = 0;
        lookup.expect_lookup().times(3).returning(move |_| {
            calls += 1;
            match calls {
                1 => Ok(vec![]),
                2 => Err(LookupError::RequestFailed("503".to_string())),
                _ => Ok(vec![entry("cat")]),
            }
        });

        let candidate = acquire(lookup, Arc::new(FixedRandom(0)))
            .execute(None, HashSet::new())
            .await
            .expect("third attempt succeeds");
        assert_eq!(candidate.word.as_str(), "cat");
    }

    #[tokio::test]
    async fn gives_up_after_budget() {
        let mut lookup = MockWordLookupPort::new();
        lookup.expect_lookup().times(5).returning(|_| Ok(vec![]));

        let result = acquire(lookup, Arc::new(FixedRandom(0)))
            .execute(Topic::from_input("animals"), HashSet::new())
            .await;
        assert_eq!(
            result,
            Err(AcquisitionError::RetryBudgetExhausted { attempts: 5 })
        );
    }

    #[tokio::test]
    async fn malformed_responses_count_as_attempts() {
        let mut lookup = MockWordLookupPort::new();
        lookup
            .expect_lookup()
            .times(5)
            .returning(|_| Err(LookupError::InvalidResponse("not json".to_string())));

        let result = acquire(lookup, Arc::new(FixedRandom(0)))
            .execute(None, HashSet::new())
            .await;
        assert!(matches!(
            result,
            Err(AcquisitionError::RetryBudgetExhausted { .. })
        ));
    }

    #[tokio::test]
    async fn seen_words_only_result_is_an_empty_attempt() {
        let mut lookup = MockWordLookupPort::new();
        lookup.expect_lookup().times(5).returning(|_| Ok(vec![entry("cat")]));

        let excluding: HashSet<String> = ["cat".to_string()].into();
        let result = acquire(lookup, Arc::new(FixedRandom(0)))
            .execute(None, excluding)
            .await;
        assert_eq!(
            result,
            Err(AcquisitionError::RetryBudgetExhausted { attempts: 5 })
        );
    }

    #[tokio::test]
    async fn selects_uniformly_over_filtered_candidates() {
        let mut lookup = MockWordLookupPort::new();
        lookup
            .expect_lookup()
            .times(1)
            .returning(|_| Ok(vec![entry("cat"), entry("dog"), entry("owl")]));

        // Three picks for the search pattern, then one over the three candidates.
        let random = SequenceRandom::new(vec![0, 0, 0, 2]);

        let candidate = acquire(lookup, Arc::new(random))
            .execute(None, HashSet::new())
            .await
            .expect("candidate available");
        assert_eq!(candidate.word.as_str(), "owl");
    }

    #[test]
    fn zero_budget_still_tries_once() {
        let source = WordCandidateSource::new(
            Arc::new(MockWordLookupPort::new()),
            Arc::new(FixedRandom(0)),
            20,
        );
        assert_eq!(AcquireWord::new(source, Arc::new(FixedRandom(0)), 0).max_attempts(), 1);
    }
}
