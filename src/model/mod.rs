//! Word data model and normalization.
//!
//! `word` holds the three record types that flow through a layout call;
//! `normalize` turns raw weighted entries into sized, colored words ready
//! for placement.

pub mod normalize;
pub mod word;

pub use normalize::{
    NormalizeConfig, SentimentPalette, font_size_for, normalize, sort_by_weight_desc,
};
pub use word::{NormalizedWord, PlacedWord, PlacementKind, Sentiment, WeightedWord};
