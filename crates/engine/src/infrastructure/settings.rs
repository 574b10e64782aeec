//! Runtime configuration
//!
//! Settings come from environment variables (optionally loaded from a `.env`
//! file by the binary). Every value has a default matching the game's
//! standard rules, so an empty environment is a valid configuration.
//!
//! | variable | default |
//! |---|---|
//! | `UNSCRAMBLE_LOOKUP` | `datamuse` |
//! | `UNSCRAMBLE_LOOKUP_URL` | `https://api.datamuse.com` |
//! | `UNSCRAMBLE_LOOKUP_TIMEOUT_SECS` | `10` |
//! | `UNSCRAMBLE_TOPIC` | none |
//! | `UNSCRAMBLE_MAX_WORDS_PER_TOPIC` | `20` |
//! | `UNSCRAMBLE_MAX_ATTEMPTS` | `5` |
//! | `UNSCRAMBLE_OUTPUT` | `text` |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use unscramble_domain::{Topic, MAX_WORDS_PER_TOPIC};

/// Default lookup service base URL.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://api.datamuse.com";

/// Default lookup request timeout.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Lookup attempts per round before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Results requested per lookup.
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// Feedback delay after a correct guess.
pub const DEFAULT_SUCCESS_DELAY: Duration = Duration::from_millis(1500);

/// Feedback delay after a wrong guess.
pub const DEFAULT_ERROR_DELAY: Duration = Duration::from_millis(1000);

// ============================================================================
// Puzzle Settings
// ============================================================================

/// Rules of a puzzle session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSettings {
    /// Words served per topic before the topic is complete
    pub max_words_per_topic: u32,
    /// Lookup attempts per acquisition
    pub max_attempts: u32,
    /// Results requested per lookup
    pub max_results: u32,
    pub success_delay: Duration,
    pub error_delay: Duration,
    /// Topic of the first round
    pub initial_topic: Option<Topic>,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            max_words_per_topic: MAX_WORDS_PER_TOPIC,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_results: DEFAULT_MAX_RESULTS,
            success_delay: DEFAULT_SUCCESS_DELAY,
            error_delay: DEFAULT_ERROR_DELAY,
            initial_topic: None,
        }
    }
}

impl PuzzleSettings {
    /// Load from process environment variables.
    pub fn from_env() -> Self {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source (used by tests).
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_words_per_topic: parse_or(
                &get,
                "UNSCRAMBLE_MAX_WORDS_PER_TOPIC",
                defaults.max_words_per_topic,
            )
            .max(1),
            max_attempts: parse_or(&get, "UNSCRAMBLE_MAX_ATTEMPTS", defaults.max_attempts).max(1),
            initial_topic: get("UNSCRAMBLE_TOPIC").and_then(|t| Topic::from_input(&t)),
            ..defaults
        }
    }
}

// ============================================================================
// Lookup Settings
// ============================================================================

/// Which word lookup implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupBackend {
    /// Remote Datamuse-compatible HTTP service
    #[default]
    Datamuse,
    /// Built-in word list, no network
    Offline,
}

impl fmt::Display for LookupBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupBackend::Datamuse => write!(f, "datamuse"),
            LookupBackend::Offline => write!(f, "offline"),
        }
    }
}

impl FromStr for LookupBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "datamuse" | "remote" | "http" => Ok(LookupBackend::Datamuse),
            "offline" | "local" | "builtin" => Ok(LookupBackend::Offline),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    pub backend: LookupBackend,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            backend: LookupBackend::default(),
            base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

impl LookupSettings {
    /// Load from process environment variables.
    pub fn from_env() -> Self {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source (used by tests).
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let backend = match get("UNSCRAMBLE_LOOKUP") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Unknown UNSCRAMBLE_LOOKUP, using datamuse");
                LookupBackend::Datamuse
            }),
            None => defaults.backend,
        };
        let timeout_secs = parse_or(
            &get,
            "UNSCRAMBLE_LOOKUP_TIMEOUT_SECS",
            DEFAULT_LOOKUP_TIMEOUT_SECS,
        );
        Self {
            backend,
            base_url: get("UNSCRAMBLE_LOOKUP_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// How the console runner renders snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_env() -> Self {
        Self::from_source(|name| std::env::var(name).ok())
    }

    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        match get("UNSCRAMBLE_OUTPUT") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(raw) if raw.trim().eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(raw) => {
                tracing::warn!(value = %raw, "Unknown UNSCRAMBLE_OUTPUT, using text");
                OutputFormat::Text
            }
            None => OutputFormat::Text,
        }
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr + Copy + fmt::Display,
{
    match get(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(variable = name, value = %raw, default = %default, "Invalid setting, using default");
            default
        }),
        None => default,
    }
}
