use orbitmap_common::Complex;
use serde::{Deserialize, Serialize};

/// Parameters of the power map, constant for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapParams {
    /// The additive constant `c`.
    pub c: Complex,
    /// Real exponent fed to the map's power operation.
    pub exponent: f32,
    /// Squared-magnitude threshold; strictly exceeding it resets the state
    /// to zero.
    pub max_dist_sq: f32,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            c: Complex::ZERO,
            exponent: 2.0,
            max_dist_sq: 99_999.0,
        }
    }
}

/// Advance the map one step.
///
/// Computes `z' = map_pow(z, exponent) + c`, then applies the reset rule:
/// if `z'` has squared magnitude strictly greater than `max_dist_sq` the
/// result is [`Complex::ZERO`], otherwise `z'`. Pure, deterministic, and
/// total over finite inputs.
///
/// Non-finite inputs propagate arithmetically. NaN comparisons are false,
/// so a NaN state never triggers the reset rule.
pub fn step(z: Complex, params: &MapParams) -> Complex {
    let next = z.map_pow(params.exponent) + params.c;
    if next.sqr_magnitude() > params.max_dist_sq {
        Complex::ZERO
    } else {
        next
    }
}
