//! Orbit kernel: map parameters, the pure step function, and tick drivers.
//!
//! # Invariants
//! - `step` is pure and deterministic: identical inputs give identical output.
//! - All orbit state is caller-owned; the kernel holds no globals.
//! - The reset rule triggers exactly when the squared magnitude strictly
//!   exceeds the configured threshold.

pub mod map;
pub mod orbit;
pub mod scene;

pub use map::{MapParams, step};
pub use orbit::Orbit;
pub use scene::Scene;
