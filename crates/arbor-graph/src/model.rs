use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// AssocEntry
// ─────────────────────────────────────────────

/// One ranked neighbor in a word's association list.
///
/// The pre-built dataset serializes entries as `{"w": <word>, "l": <bool>}`;
/// the serde renames below map that wire format directly onto the model.
/// `strong` marks a high-confidence ("fruiting") relation — it is carried
/// through sampling untouched and only drives color-coding downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssocEntry {
    #[serde(rename = "w")]
    pub word: String,
    #[serde(rename = "l")]
    pub strong: bool,
}

impl AssocEntry {
    pub fn new(word: impl Into<String>, strong: bool) -> Self {
        Self { word: word.into(), strong }
    }

    /// High-confidence ("fruiting") relation.
    pub fn fruiting(word: impl Into<String>) -> Self {
        Self::new(word, true)
    }

    /// Weaker relation.
    pub fn weak(word: impl Into<String>) -> Self {
        Self::new(word, false)
    }
}

// ─────────────────────────────────────────────
// Numeric-word policy
// ─────────────────────────────────────────────

/// Returns true if a word is a numeric string and must never be expanded.
///
/// The embedding source amplifies numeric tokens into degenerate branches,
/// so any word whose trimmed text parses as a float is treated as invalid.
/// Blank words count as numeric too.
pub fn is_numeric(word: &str) -> bool {
    let trimmed = word.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
