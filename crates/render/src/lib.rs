//! Trajectory presentation: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate orbit state; output derives from the sampled
//!   segments and a style alone.
//! - Per-segment color is the style's endpoint colors lerped by the
//!   segment's fraction; the sampler stays presentation-free.

mod renderer;

pub use renderer::{SvgRenderer, TextRenderer, TraceRenderer, TraceStyle};

pub fn crate_info() -> &'static str {
    "orbitmap-render v0.1.0"
}
