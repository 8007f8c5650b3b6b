use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one 3D volume: a time point of a view setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId {
    /// Time point id
    pub timepoint: i32,
    /// View setup id
    pub setup: i32,
}

impl ViewId {
    /// Create a view id
    pub const fn new(timepoint: i32, setup: i32) -> Self {
        Self { timepoint, setup }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(t={}, s={})", self.timepoint, self.setup)
    }
}
