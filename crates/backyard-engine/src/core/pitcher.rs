use serde::{Deserialize, Serialize};

use super::WeightMap;

/// A pitcher on the roster. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitcher {
    name: String,
    pitch_distribution: WeightMap,
    hot_zones: WeightMap,
}

impl Pitcher {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        pitch_distribution: WeightMap,
        hot_zones: WeightMap,
    ) -> Self {
        Self {
            name: name.into(),
            pitch_distribution,
            hot_zones,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative frequency of each pitch type this pitcher throws.
    #[must_use]
    pub fn pitch_distribution(&self) -> &WeightMap {
        &self.pitch_distribution
    }

    /// Relative frequency of each zone this pitcher locates to.
    #[must_use]
    pub fn hot_zones(&self) -> &WeightMap {
        &self.hot_zones
    }
}
