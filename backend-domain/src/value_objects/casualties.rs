// Casualty counts attached to an official event

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casualties {
    pub deaths: u32,
    pub injuries: u32,
    pub damaged_homes: u32,
}

impl Casualties {
    pub fn new(deaths: u32, injuries: u32, damaged_homes: u32) -> Self {
        Self {
            deaths,
            injuries,
            damaged_homes,
        }
    }

    /// Absent counts collapse to zero.
    pub fn from_optional(deaths: Option<u32>, injuries: Option<u32>, damaged_homes: Option<u32>) -> Self {
        Self::new(
            deaths.unwrap_or_default(),
            injuries.unwrap_or_default(),
            damaged_homes.unwrap_or_default(),
        )
    }
}
