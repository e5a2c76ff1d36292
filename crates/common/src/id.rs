use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an orbit in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrbitId(pub Uuid);

impl OrbitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrbitId {
    fn default() -> Self {
        Self::new()
    }
}
