//! Layout orchestration: validate, normalize, sort, dispatch.
//!
//! `compute_layout` is the single entry point for the whole engine. It is
//! a pure function: every call allocates its own working state, so the
//! same word set can be laid out repeatedly (or concurrently from several
//! dataset views) with different strategies and nothing carries over
//! between calls. The only source of variation is the Random strategy's
//! seeded RNG, and even that is reproducible for identical seeds.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::model::{NormalizeConfig, PlacedWord, WeightedWord, normalize, sort_by_weight_desc};

use super::grid::{GridConfig, place_grid};
use super::random::{RandomConfig, place_random};
use super::spiral::{SpiralConfig, place_spiral};
use super::viewport::Viewport;

/// Which placement strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyId {
    #[default]
    Spiral,
    Random,
    Grid,
}

impl StrategyId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spiral => "spiral",
            Self::Random => "random",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyId {
    type Err = LayoutError;

    /// Unknown ids fail fast — silently defaulting would hide caller
    /// integration bugs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spiral" => Ok(Self::Spiral),
            "random" => Ok(Self::Random),
            "grid" => Ok(Self::Grid),
            other => Err(LayoutError::UnsupportedStrategy(other.to_string())),
        }
    }
}

/// Structural errors a layout call can surface.
///
/// Per-word degradations (filtered empty text, fallback placement) are
/// never errors; only caller programming mistakes land here.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Strategy id not recognized.
    UnsupportedStrategy(String),
    /// Canvas dimensions not positive finite numbers.
    InvalidCanvas { width: f32, height: f32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedStrategy(id) => {
                write!(f, "unsupported layout strategy: {id:?} (expected spiral, random, or grid)")
            }
            Self::InvalidCanvas { width, height } => {
                write!(f, "invalid canvas dimensions: {width} x {height}")
            }
        }
    }
}

impl Error for LayoutError {}

/// Full configuration for one layout call.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub strategy: StrategyId,
    /// Inset kept clear on every canvas edge (default: 16.0).
    pub margin: f32,
    /// Minimum gap between placed words (default: 8.0).
    pub padding: f32,
    /// Seed for the Random strategy's RNG. Ignored by the deterministic
    /// strategies.
    pub seed: u64,
    pub normalize: NormalizeConfig,
    pub spiral: SpiralConfig,
    pub random: RandomConfig,
    pub grid: GridConfig,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            strategy: StrategyId::Spiral,
            margin: 16.0,
            padding: 8.0,
            seed: 0,
            normalize: NormalizeConfig::default(),
            spiral: SpiralConfig::default(),
            random: RandomConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

impl LayoutOptions {
    fn viewport(&self) -> Viewport {
        Viewport {
            width: self.canvas_width,
            height: self.canvas_height,
            margin: self.margin,
            padding: self.padding,
        }
    }
}

/// Compute a full word cloud layout.
///
/// Normalizes the batch, sorts by descending weight (stable), dispatches
/// to the selected strategy, and returns its result unchanged. An empty
/// (or entirely filtered) batch yields `Ok` with an empty list; only bad
/// canvas dimensions error out here — unknown strategy strings are
/// rejected earlier, in `StrategyId::from_str`.
pub fn compute_layout(
    words: &[WeightedWord],
    options: &LayoutOptions,
) -> Result<Vec<PlacedWord>, LayoutError> {
    let width = options.canvas_width;
    let height = options.canvas_height;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(LayoutError::InvalidCanvas { width, height });
    }

    let mut normalized = normalize(words, &options.normalize);
    if normalized.is_empty() {
        return Ok(Vec::new());
    }
    sort_by_weight_desc(&mut normalized);

    let viewport = options.viewport();
    let placed = match options.strategy {
        StrategyId::Spiral => place_spiral(&normalized, &viewport, &options.spiral),
        StrategyId::Random => {
            let mut rng = SmallRng::seed_from_u64(options.seed);
            place_random(&normalized, &viewport, &options.random, &mut rng)
        }
        StrategyId::Grid => place_grid(&normalized, &viewport, &options.grid),
    };

    Ok(placed)
}
