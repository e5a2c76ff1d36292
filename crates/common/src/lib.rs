//! Shared value types for the orbitmap workspace.
//!
//! # Invariants
//! - Everything here is a plain value: no interior mutability, no globals.
//! - Arithmetic produces new values, never mutates in place.

pub mod color;
pub mod complex;
pub mod id;

pub use color::Color;
pub use complex::Complex;
pub use id::OrbitId;
