//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Word lookup (could swap Datamuse -> offline lexicon)
//! - Announcements (could swap log output -> speech)
//! - Random (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use error::LookupError;
pub use external::{AnnouncerPort, LookupEntry, LookupQuery, WordLookupPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockAnnouncerPort, MockWordLookupPort};

#[cfg(test)]
pub use testing::MockRandomPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{pick_index, RandomPort};
