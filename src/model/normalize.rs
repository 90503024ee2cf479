//! Word normalization: frequency → weight, weight → font size, sentiment
//! → color, significance → opacity.
//!
//! Pure batch computation run once per layout call. Rescaling is relative
//! to the batch maximum, so the largest word in any batch always reaches
//! full weight regardless of absolute frequencies.

use serde::{Deserialize, Serialize};

use super::word::{NormalizedWord, Sentiment, WeightedWord};

/// Sentiment → CSS color lookup.
///
/// An explicit palette owned by the config rather than ambient theme
/// state, so two layouts with different palettes can coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentPalette {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
    pub unknown: String,
}

impl Default for SentimentPalette {
    fn default() -> Self {
        Self {
            positive: "#4caf50".to_string(),
            negative: "#f44336".to_string(),
            neutral: "#9e9e9e".to_string(),
            unknown: "#cfcfcf".to_string(),
        }
    }
}

impl SentimentPalette {
    /// Look up the color for a sentiment class.
    pub fn color_for(&self, sentiment: Sentiment) -> &str {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Unknown => &self.unknown,
        }
    }
}

/// Configuration for word normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeConfig {
    /// Smallest rendered font size in pixels (default: 16.0).
    pub min_font: f32,
    /// Largest rendered font size in pixels (default: 48.0).
    pub max_font: f32,
    /// Font growth per unit of weight (default: 32.0). A weight-1.0 word
    /// sizes to `min_font + font_scale`, clamped to `max_font`.
    pub font_scale: f32,
    /// Weight at or above which a word renders fully opaque (default: 0.4).
    pub significance_weight: f32,
    /// Opacity for words below the significance threshold (default: 0.75).
    pub muted_opacity: f32,
    /// Sentiment color mapping.
    pub palette: SentimentPalette,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            min_font: 16.0,
            max_font: 48.0,
            font_scale: 32.0,
            significance_weight: 0.4,
            muted_opacity: 0.75,
            palette: SentimentPalette::default(),
        }
    }
}

/// Normalize a batch of weighted words.
///
/// Entries with empty or whitespace-only text are filtered out (never an
/// error). Weight is `frequency / max_frequency` clamped to [0, 1];
/// non-positive or non-finite frequencies degrade to weight 0 instead of
/// dropping the word. An empty batch yields an empty list.
pub fn normalize(words: &[WeightedWord], config: &NormalizeConfig) -> Vec<NormalizedWord> {
    // Filter before taking the max: a dropped record must not drag the
    // rescale, or the heaviest surviving word never reaches weight 1.0.
    let survivors: Vec<&WeightedWord> = words
        .iter()
        .filter(|w| !w.text.trim().is_empty())
        .collect();

    let max_frequency = survivors
        .iter()
        .map(|w| w.frequency)
        .filter(|f| f.is_finite())
        .fold(0.0f32, f32::max);

    survivors
        .into_iter()
        .map(|w| {
            let weight = if max_frequency > 0.0 && w.frequency.is_finite() {
                (w.frequency / max_frequency).clamp(0.0, 1.0)
            } else {
                0.0
            };
            NormalizedWord {
                text: w.text.clone(),
                weight,
                font_size: font_size_for(
                    weight,
                    config.min_font,
                    config.max_font,
                    config.font_scale,
                ),
                color: config.palette.color_for(w.sentiment).to_string(),
                opacity: if weight >= config.significance_weight {
                    1.0
                } else {
                    config.muted_opacity
                },
            }
        })
        .collect()
}

/// Map a [0, 1] weight to a pixel font size: `min + weight * scale`,
/// clamped to `[min, max]`.
pub fn font_size_for(weight: f32, min_font: f32, max_font: f32, font_scale: f32) -> f32 {
    (min_font + weight * font_scale).clamp(min_font, max_font)
}

/// Stable sort by descending weight; ties keep input order.
///
/// Placing heavy words first anchors the largest word at the visual
/// center and keeps the collision search cheap for everything after it.
pub fn sort_by_weight_desc(words: &mut [NormalizedWord]) {
    // sort_by is stable, so equal weights keep input order.
    words.sort_by(|a, b| b.weight.total_cmp(&a.weight));
}
