//! Scenario-local Cartesian positions.
//!
//! Cell positions are supplied by the scenario and handed to the simulator
//! unchanged; nothing in this workspace derives placement from them.

use serde::{Deserialize, Serialize};

/// A point in the scenario frame, in metres.  `z` is antenna height.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}
