//! Word record types.
//!
//! Three stages of the same word flow through a layout call:
//! - [`WeightedWord`]: raw input from the dataset filter UI (frequency,
//!   sentiment, optional category).
//! - [`NormalizedWord`]: sizing/styling attributes derived once per call.
//! - [`PlacedWord`]: the terminal artifact handed back to the renderer,
//!   with canvas coordinates and a placement provenance marker.
//!
//! All three are plain immutable data; nothing here is retained between
//! layout calls.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Sentiment classification attached to each input word.
///
/// The layout core never scores sentiment itself; it only maps an
/// already-assigned class to a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for Sentiment {
    /// Unrecognized sentiment strings map to `Unknown` so a single odd
    /// record cannot fail the whole batch.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Unknown,
        })
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Raw weighted word entry as supplied by the caller.
///
/// Supplied fresh per layout call; the core takes a slice and never
/// mutates or keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedWord {
    /// Display text. Entries with empty/whitespace text are filtered out
    /// during normalization.
    pub text: String,
    /// Occurrence count in the dataset. Expected positive; non-positive
    /// values degrade to weight 0 rather than dropping the word.
    pub frequency: f32,
    /// Sentiment class (drives color).
    #[serde(default)]
    pub sentiment: Sentiment,
    /// Optional category label, passed through for tooltips only.
    #[serde(default)]
    pub category: Option<String>,
}

impl WeightedWord {
    /// Convenience constructor used heavily in tests.
    pub fn new(text: impl Into<String>, frequency: f32, sentiment: Sentiment) -> Self {
        Self {
            text: text.into(),
            frequency,
            sentiment,
            category: None,
        }
    }
}

/// Word with sizing and styling resolved against the batch.
///
/// Computed once per layout call by the normalizer, then consumed by a
/// strategy. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedWord {
    /// Display text (identity key back to the input record).
    pub text: String,
    /// Frequency rescaled against the batch maximum, in [0, 1].
    pub weight: f32,
    /// Font size in pixels, clamped to the configured range.
    pub font_size: f32,
    /// CSS color derived from sentiment.
    pub color: String,
    /// Display opacity: 1.0 for significant words, a muted constant below
    /// the significance threshold.
    pub opacity: f32,
}

/// How a word's final coordinate was obtained.
///
/// `Fallback` placements are exempt from the no-overlap guarantee; the
/// marker makes that exemption visible to callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    /// Found by the strategy's collision-aware search.
    Primary,
    /// Deterministic slot used after the search budget was exhausted.
    /// May overlap other words; termination wins over perfect packing.
    Fallback,
}

/// Positioned, styled word — the terminal layout artifact.
///
/// Coordinates are canvas-space and word-center-anchored. The core holds
/// no reference to these after returning them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    pub text: String,
    pub weight: f32,
    pub font_size: f32,
    pub color: String,
    /// Center X in canvas coordinates.
    pub x: f32,
    /// Center Y in canvas coordinates.
    pub y: f32,
    pub rotation_degrees: f32,
    pub opacity: f32,
    pub placement: PlacementKind,
}

impl PlacedWord {
    /// Build a placed word from its normalized form plus a coordinate.
    pub fn at(
        word: &NormalizedWord,
        x: f32,
        y: f32,
        rotation_degrees: f32,
        placement: PlacementKind,
    ) -> Self {
        Self {
            text: word.text.clone(),
            weight: word.weight,
            font_size: word.font_size,
            color: word.color.clone(),
            x,
            y,
            rotation_degrees,
            opacity: word.opacity,
            placement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_default_is_unknown() {
        assert_eq!(Sentiment::default(), Sentiment::Unknown);
    }

    #[test]
    fn test_sentiment_display() {
        assert_eq!(format!("{}", Sentiment::Positive), "positive");
        assert_eq!(format!("{}", Sentiment::Unknown), "unknown");
    }

    #[test]
    fn test_weighted_word_deserializes_camel_case() {
        let json = r#"{"text":"tesla","frequency":42.0,"sentiment":"positive"}"#;
        let word: WeightedWord = serde_json::from_str(json).unwrap();
        assert_eq!(word.text, "tesla");
        assert_eq!(word.frequency, 42.0);
        assert_eq!(word.sentiment, Sentiment::Positive);
        assert_eq!(word.category, None);
    }

    #[test]
    fn test_weighted_word_unknown_sentiment_string() {
        // Unrecognized sentiment strings fall back to Unknown instead of
        // failing the whole batch.
        let json = r#"{"text":"tesla","frequency":1.0,"sentiment":"mixed"}"#;
        let word: WeightedWord = serde_json::from_str(json).unwrap();
        assert_eq!(word.sentiment, Sentiment::Unknown);
    }

    #[test]
    fn test_placed_word_at_copies_styling() {
        let normalized = NormalizedWord {
            text: "rust".to_string(),
            weight: 0.5,
            font_size: 32.0,
            color: "#4caf50".to_string(),
            opacity: 1.0,
        };
        let placed = PlacedWord::at(&normalized, 10.0, 20.0, 0.0, PlacementKind::Primary);
        assert_eq!(placed.text, "rust");
        assert_eq!(placed.font_size, 32.0);
        assert_eq!(placed.x, 10.0);
        assert_eq!(placed.y, 20.0);
        assert_eq!(placed.placement, PlacementKind::Primary);
    }
}
