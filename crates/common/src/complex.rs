use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A complex number as an ordered `(re, im)` pair.
///
/// Immutable value type: every operation returns a new value. The squared
/// magnitude of any finite value is a non-negative real.
///
/// The `map_pow` and `map_mul` operations deliberately diverge from the
/// standard operations on the complex field; they are the defining formulas
/// of the power map this workspace iterates. See their docs before "fixing"
/// either one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f32,
    pub im: f32,
}

impl Complex {
    /// The additive identity, also the reset target of the escape rule.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// A value on the real axis.
    pub const fn real(r: f32) -> Self {
        Self { re: r, im: 0.0 }
    }

    /// A value on the imaginary axis.
    pub const fn imaginary(i: f32) -> Self {
        Self { re: 0.0, im: i }
    }

    /// Squared magnitude `re² + im²`.
    pub fn sqr_magnitude(self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    /// The map's power operation: `(re² − im², p·re·im)`.
    ///
    /// This is not general complex exponentiation. The real part matches the
    /// squared-complex expansion while the imaginary part scales the `re·im`
    /// cross term by `p` instead of evaluating `z^p`. Every trajectory the
    /// workspace produces depends on this exact formula; substituting a
    /// mathematically standard power changes the system's behavior.
    pub fn map_pow(self, p: f32) -> Self {
        Self::new(self.re * self.re - self.im * self.im, p * self.re * self.im)
    }

    /// The map's product operation.
    ///
    /// Every term reads `rhs.im`; `rhs.re` is never consulted, so this is
    /// not the field multiplication on the complex numbers. Kept as part of
    /// the map's operation set, not corrected (see DESIGN.md). Nothing else
    /// in the workspace calls it.
    pub fn map_mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.im - self.im * rhs.im,
            self.im * rhs.im + self.re * rhs.im,
        )
    }

    /// As a 2D vector.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.re, self.im)
    }

    /// As a 3D position on the z = 0 plane.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.re, self.im, 0.0)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl From<[f32; 2]> for Complex {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<Complex> for Vec2 {
    fn from(z: Complex) -> Self {
        z.to_vec2()
    }
}
