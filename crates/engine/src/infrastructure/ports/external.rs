//! External service port traits (word lookup, announcements).

use async_trait::async_trait;
use unscramble_domain::{SearchPattern, Topic};

use super::error::LookupError;

// =============================================================================
// Word Lookup
// =============================================================================

/// One query against the dictionary service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    /// Spelling pattern, e.g. `??a?`
    pub pattern: SearchPattern,
    /// Optional "means like" filter
    pub topic: Option<Topic>,
    /// Upper bound on returned entries
    pub max_results: u32,
}

/// Raw dictionary entry as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub word: String,
    /// `partOfSpeech<TAB>gloss` strings, possibly empty
    pub definitions: Vec<String>,
}

impl LookupEntry {
    pub fn new(word: impl Into<String>, definitions: Vec<String>) -> Self {
        Self {
            word: word.into(),
            definitions,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordLookupPort: Send + Sync {
    async fn lookup(&self, query: LookupQuery) -> Result<Vec<LookupEntry>, LookupError>;
}

// =============================================================================
// Announcer
// =============================================================================

/// Speaks (or otherwise announces) round results.
///
/// Fire-and-forget: the engine never waits on an announcement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnnouncerPort: Send + Sync {
    async fn announce(&self, phrase: String);
}
