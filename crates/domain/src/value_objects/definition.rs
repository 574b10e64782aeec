//! Definitions attached to a word, surfaced to the player as hints.

use serde::{Deserialize, Serialize};

/// A single dictionary definition in `partOfSpeech<TAB>gloss` shape.
///
/// Only the gloss is ever shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    part_of_speech: Option<String>,
    gloss: String,
}

impl Definition {
    /// Parse a raw `pos\tgloss` string.
    ///
    /// A string without a TAB is taken as a bare gloss. Returns `None` when
    /// the gloss would be empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let (part_of_speech, gloss) = match raw.split_once('\t') {
            Some((pos, gloss)) => {
                let pos = pos.trim();
                (
                    (!pos.is_empty()).then(|| pos.to_string()),
                    gloss.trim(),
                )
            }
            None => (None, raw.trim()),
        };
        if gloss.is_empty() {
            return None;
        }
        Some(Self {
            part_of_speech,
            gloss: gloss.to_string(),
        })
    }

    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }

    pub fn gloss(&self) -> &str {
        &self.gloss
    }
}

/// Ordered definitions of one word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionSet(Vec<Definition>);

impl DefinitionSet {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self(definitions)
    }

    /// Build a set from raw lookup strings, dropping entries with no usable gloss.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            raw.into_iter()
                .filter_map(|s| Definition::parse(s.as_ref()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Definition> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.0.iter()
    }
}
