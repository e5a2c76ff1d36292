//! Trajectory sampling: bounded (previous, next) segment sequences for
//! inspection and drawing.
//!
//! # Invariants
//! - `sample(start, params, n)` yields exactly `n` segments.
//! - Sampling is a pure function of its inputs: no hidden state, identical
//!   calls reproduce identical sequences.

mod sampler;

pub use sampler::{Segment, Trajectory, sample};

pub fn crate_info() -> &'static str {
    "orbitmap-trace v0.1.0"
}
