use crate::map::MapParams;
use crate::orbit::Orbit;
use glam::Vec3;
use orbitmap_common::{Complex, OrbitId};
use std::collections::BTreeMap;

/// A set of independent orbits advanced on a shared tick.
///
/// Uses BTreeMap for deterministic iteration order across platforms.
/// Orbits never share state: stepping the scene steps each orbit in
/// isolation, and two scenes built from the same inputs stay identical.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    orbits: BTreeMap<OrbitId, Orbit>,
    tick: u64,
}

impl Scene {
    /// Create an empty scene at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks the scene has advanced.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of orbits in the scene.
    pub fn orbit_count(&self) -> usize {
        self.orbits.len()
    }

    /// Read-only access to all orbits (BTreeMap for deterministic iteration).
    pub fn orbits(&self) -> &BTreeMap<OrbitId, Orbit> {
        &self.orbits
    }

    /// Spawn an orbit at `start`. Returns its id.
    pub fn spawn(&mut self, start: Complex, params: MapParams) -> OrbitId {
        let id = OrbitId::new();
        self.spawn_with_id(id, start, params);
        id
    }

    /// Spawn an orbit with a specific id (used to mirror scenes in tests
    /// and tooling).
    pub fn spawn_with_id(&mut self, id: OrbitId, start: Complex, params: MapParams) {
        self.orbits.insert(id, Orbit::new(start, params));
    }

    /// Remove an orbit. Returns it if it existed.
    pub fn despawn(&mut self, id: OrbitId) -> Option<Orbit> {
        self.orbits.remove(&id)
    }

    pub fn get(&self, id: OrbitId) -> Option<&Orbit> {
        self.orbits.get(&id)
    }

    pub fn get_mut(&mut self, id: OrbitId) -> Option<&mut Orbit> {
        self.orbits.get_mut(&id)
    }

    /// Advance every orbit one tick.
    pub fn step(&mut self) {
        for orbit in self.orbits.values_mut() {
            orbit.step();
        }
        self.tick += 1;
        tracing::trace!(tick = self.tick, orbits = self.orbits.len(), "scene stepped");
    }

    /// Current positions of all orbits, in deterministic id order.
    pub fn positions(&self) -> Vec<(OrbitId, Vec3)> {
        self.orbits
            .iter()
            .map(|(id, orbit)| (*id, orbit.position()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_starts_empty() {
        let scene = Scene::new();
        assert_eq!(scene.tick(), 0);
        assert_eq!(scene.orbit_count(), 0);
    }

    #[test]
    fn spawn_and_despawn() {
        let mut scene = Scene::new();
        let id = scene.spawn(Complex::real(0.5), MapParams::default());
        assert_eq!(scene.orbit_count(), 1);
        assert!(scene.get(id).is_some());

        let orbit = scene.despawn(id);
        assert!(orbit.is_some());
        assert_eq!(scene.orbit_count(), 0);
    }

    #[test]
    fn step_advances_every_orbit() {
        let mut scene = Scene::new();
        let a = scene.spawn(Complex::real(0.5), MapParams::default());
        let b = scene.spawn(Complex::real(0.25), MapParams::default());
        scene.step();
        scene.step();
        assert_eq!(scene.tick(), 2);
        assert_eq!(scene.get(a).map(Orbit::tick), Some(2));
        assert_eq!(scene.get(b).map(Orbit::tick), Some(2));
    }

    #[test]
    fn mirrored_scenes_stay_identical() {
        let params = MapParams {
            c: Complex::new(-0.2, 0.3),
            ..MapParams::default()
        };
        let mut s1 = Scene::new();
        let mut s2 = Scene::new();
        let id = OrbitId::new();
        s1.spawn_with_id(id, Complex::new(0.1, 0.1), params);
        s2.spawn_with_id(id, Complex::new(0.1, 0.1), params);
        for _ in 0..100 {
            s1.step();
            s2.step();
        }
        assert_eq!(s1.positions(), s2.positions());
    }

    #[test]
    fn positions_iterate_in_id_order() {
        let mut scene = Scene::new();
        for i in 0..50 {
            scene.spawn(Complex::real(i as f32 * 0.01), MapParams::default());
        }
        let ids: Vec<OrbitId> = scene.positions().iter().map(|(id, _)| *id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
