use orbitmap_common::Complex;
use orbitmap_kernel::{MapParams, step};
use serde::{Deserialize, Serialize};

/// One line of a sampled trajectory: the state before and after a step,
/// plus the fractional index for caller-side color or intensity mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Complex,
    pub to: Complex,
    /// `i / count` for segment `i`, in [0, 1).
    pub fraction: f32,
}

/// Lazy trajectory iterator. Collecting it equals [`sample`] with the same
/// arguments; building it twice from identical inputs reproduces the
/// identical sequence.
#[derive(Debug, Clone)]
pub struct Trajectory {
    params: MapParams,
    z: Complex,
    index: u32,
    count: u32,
}

impl Trajectory {
    pub fn new(start: Complex, params: MapParams, count: u32) -> Self {
        Self {
            params,
            z: start,
            index: 0,
            count,
        }
    }
}

impl Iterator for Trajectory {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.index >= self.count {
            return None;
        }
        let from = self.z;
        let to = step(from, &self.params);
        let fraction = self.index as f32 / self.count as f32;
        self.z = to;
        self.index += 1;
        Some(Segment { from, to, fraction })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Trajectory {}

/// Sample exactly `count` segments of successive steps starting at `start`.
pub fn sample(start: Complex, params: &MapParams, count: u32) -> Vec<Segment> {
    Trajectory::new(start, *params, count).collect()
}
