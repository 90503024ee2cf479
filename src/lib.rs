//! Lexiscope - WASM Module
//!
//! This module provides the word-cloud layout core for the Lexiscope
//! dataset exploration tool. It is compiled to WebAssembly and exposes a
//! JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `model`: Word records and batch normalization (weight, font, color)
//! - `spatial`: R-tree collision field for padded-rectangle overlap tests
//! - `layout`: Placement strategies (spiral, random, grid) and the
//!   orchestrator that drives a full layout call
//!
//! The core is pure and synchronous: one call in, one positioned word
//! list out, no state retained between calls. The JS host owns
//! everything else — upload, dataset CRUD, rendering, tooltips.

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

pub mod layout;
pub mod model;
pub mod spatial;

use layout::{LayoutOptions, StrategyId, compute_layout};
use model::{PlacedWord, PlacementKind, WeightedWord};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Main entry point for the layout engine.
///
/// Holds the layout configuration the UI has selected; each `placeWords`
/// call runs the pure core against that configuration and returns a
/// fresh result. Nothing from a previous call survives into the next.
#[wasm_bindgen]
pub struct LexiscopeWasm {
    options: LayoutOptions,
    animation_enabled: bool,
}

#[wasm_bindgen]
impl LexiscopeWasm {
    /// Create an engine with default options (800x600 spiral layout).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            options: LayoutOptions::default(),
            animation_enabled: true,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the target canvas size in pixels.
    #[wasm_bindgen(js_name = setCanvasSize)]
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.options.canvas_width = width;
        self.options.canvas_height = height;
    }

    /// Select the placement strategy: "spiral", "random", or "grid".
    ///
    /// Unknown ids are rejected immediately so integration bugs surface
    /// at configuration time, not mid-render.
    #[wasm_bindgen(js_name = setStrategy)]
    pub fn set_strategy(&mut self, id: &str) -> Result<(), JsError> {
        self.options.strategy = id.parse::<StrategyId>()?;
        Ok(())
    }

    /// Get the currently selected strategy id.
    pub fn strategy(&self) -> String {
        self.options.strategy.as_str().to_string()
    }

    /// Seed for the random strategy. Two layouts with the same seed and
    /// input are identical; pass a fresh seed for a fresh arrangement.
    #[wasm_bindgen(js_name = setSeed)]
    pub fn set_seed(&mut self, seed: u64) {
        self.options.seed = seed;
    }

    /// Set the canvas edge margin in pixels.
    #[wasm_bindgen(js_name = setMargin)]
    pub fn set_margin(&mut self, margin: f32) {
        self.options.margin = margin;
    }

    /// Set the minimum gap between placed words in pixels.
    #[wasm_bindgen(js_name = setPadding)]
    pub fn set_padding(&mut self, padding: f32) {
        self.options.padding = padding;
    }

    /// Toggle staggered fade-in. Consumed by the rendering layer only;
    /// layout math never reads it.
    #[wasm_bindgen(js_name = setAnimationEnabled)]
    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animation_enabled = enabled;
    }

    /// Whether the renderer should animate word entry.
    #[wasm_bindgen(js_name = animationEnabled)]
    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Compute a layout for an array of weighted word records.
    ///
    /// `words` is an array of `{ text, frequency, sentiment?, category? }`
    /// objects. Returns an array of placed words with `x`, `y`,
    /// `fontSize`, `color`, `rotationDegrees`, `opacity`, and `placement`
    /// fields, ordered by descending weight. Words that needed fallback
    /// slots are counted to the console but never fail the call.
    #[wasm_bindgen(js_name = placeWords)]
    pub fn place_words(&self, words: JsValue) -> Result<JsValue, JsError> {
        let words: Vec<WeightedWord> = serde_wasm_bindgen::from_value(words)?;
        let placed = compute_layout(&words, &self.options)?;

        log_fallbacks(&placed);
        Ok(serde_wasm_bindgen::to_value(&placed)?)
    }

    /// Compute a layout and return only the numeric fields as a flat
    /// Float32Array: `[x, y, fontSize, opacity, ...]`, four floats per
    /// word in descending-weight order. Cheaper than `placeWords` when
    /// the renderer only needs to reposition glyphs it already styled.
    #[wasm_bindgen(js_name = placePositions)]
    pub fn place_positions(&self, words: JsValue) -> Result<Float32Array, JsError> {
        let words: Vec<WeightedWord> = serde_wasm_bindgen::from_value(words)?;
        let placed = compute_layout(&words, &self.options)?;

        let mut flat = Vec::with_capacity(placed.len() * 4);
        for word in &placed {
            flat.push(word.x);
            flat.push(word.y);
            flat.push(word.font_size);
            flat.push(word.opacity);
        }
        Ok(Float32Array::from(&flat[..]))
    }
}

impl Default for LexiscopeWasm {
    fn default() -> Self {
        Self::new()
    }
}

/// Report fallback placements to the browser console. Observable, never
/// an error: the layout contract is a coordinate for every valid word.
fn log_fallbacks(placed: &[PlacedWord]) {
    let fallbacks = placed
        .iter()
        .filter(|p| p.placement == PlacementKind::Fallback)
        .count();
    if fallbacks > 0 {
        web_sys::console::warn_1(
            &format!(
                "lexiscope: {fallbacks} of {} words exhausted placement search and used fallback slots",
                placed.len()
            )
            .into(),
        );
    }
}
