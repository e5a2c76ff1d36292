use crate::map::{self, MapParams};
use glam::Vec3;
use orbitmap_common::Complex;

/// One iterated orbit: a complex state advanced one step per external tick.
///
/// The orbit owns its state exclusively. Independent orbits never share
/// state, so any number of them can be driven without coordination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    params: MapParams,
    start: Complex,
    z: Complex,
    tick: u64,
}

impl Orbit {
    /// Create an orbit at `start` on tick 0.
    pub fn new(start: Complex, params: MapParams) -> Self {
        Self {
            params,
            start,
            z: start,
            tick: 0,
        }
    }

    pub fn params(&self) -> &MapParams {
        &self.params
    }

    /// The starting value the orbit restarts to.
    pub fn start(&self) -> Complex {
        self.start
    }

    /// Current complex state.
    pub fn z(&self) -> Complex {
        self.z
    }

    /// Ticks advanced since creation or the last restart.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Current state as a 3D position on the z = 0 plane.
    pub fn position(&self) -> Vec3 {
        self.z.to_vec3()
    }

    /// Advance the orbit one tick.
    pub fn step(&mut self) {
        self.z = map::step(self.z, &self.params);
        self.tick += 1;
    }

    /// Reset to the starting value at tick 0.
    pub fn restart(&mut self) {
        tracing::trace!(tick = self.tick, "orbit restarted");
        self.z = self.start;
        self.tick = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orbit_sits_at_start() {
        let orbit = Orbit::new(Complex::new(0.5, 0.0), MapParams::default());
        assert_eq!(orbit.z(), Complex::new(0.5, 0.0));
        assert_eq!(orbit.tick(), 0);
    }

    #[test]
    fn step_advances_tick_and_state() {
        let mut orbit = Orbit::new(Complex::real(0.5), MapParams::default());
        orbit.step();
        assert_eq!(orbit.tick(), 1);
        assert_eq!(orbit.z(), Complex::real(0.25));
    }

    #[test]
    fn position_is_on_the_zero_plane() {
        let mut orbit = Orbit::new(
            Complex::new(0.3, -0.7),
            MapParams {
                c: Complex::new(0.1, 0.1),
                ..MapParams::default()
            },
        );
        orbit.step();
        let p = orbit.position();
        assert_eq!(p.z, 0.0);
        assert_eq!(p.x, orbit.z().re);
        assert_eq!(p.y, orbit.z().im);
    }

    #[test]
    fn restart_returns_to_start() {
        let mut orbit = Orbit::new(Complex::real(0.5), MapParams::default());
        for _ in 0..10 {
            orbit.step();
        }
        orbit.restart();
        assert_eq!(orbit.z(), Complex::real(0.5));
        assert_eq!(orbit.tick(), 0);
    }

    #[test]
    fn independent_orbits_do_not_interact() {
        let params = MapParams {
            c: Complex::new(0.2, 0.0),
            ..MapParams::default()
        };
        let mut a = Orbit::new(Complex::real(0.1), params);
        let mut b = Orbit::new(Complex::real(0.1), params);
        a.step();
        a.step();
        b.step();
        // a advanced twice, b once; b's state is unaffected by a.
        assert_eq!(b.tick(), 1);
        assert_eq!(b.z(), map::step(Complex::real(0.1), &params));
    }
}
