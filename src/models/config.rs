//! Generation parameters
//!
//! Loaded from TOML; every field falls back to the project defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_EDGE_DISTANCE, DEFAULT_MAX_EXTRA_GENERATION_LOOPS, DEFAULT_MAX_GEN_TIME_MS,
    DEFAULT_MAX_STARS, DEFAULT_MINIMUM_STAR_DISTANCE, DEFAULT_WORLD_SIZE, SECTOR_DIVISIONS,
};
use super::errors::{StarfieldError, StarfieldResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Rejected placements allowed before generation gives up.
    pub max_extra_generation_loops: u64,
    /// Target star count.
    pub max_stars: usize,
    /// Wall-clock budget in milliseconds.
    pub max_gen_time_ms: u64,
    /// Margin kept free of stars along every world edge.
    pub edge_distance: u32,
    /// Requested world size; rounded down to a multiple of 26.
    pub size: u32,
    pub minimum_star_distance: f64,
    /// Confine stars to the inscribed disk, packing them tighter near the center.
    pub radial: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            max_extra_generation_loops: DEFAULT_MAX_EXTRA_GENERATION_LOOPS,
            max_stars: DEFAULT_MAX_STARS,
            max_gen_time_ms: DEFAULT_MAX_GEN_TIME_MS,
            edge_distance: DEFAULT_EDGE_DISTANCE,
            size: DEFAULT_WORLD_SIZE,
            minimum_star_distance: DEFAULT_MINIMUM_STAR_DISTANCE,
            radial: false,
        }
    }
}

impl GenerationConfig {
    pub fn from_toml_str(source: &str) -> StarfieldResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> StarfieldResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StarfieldError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// World size rounded down to the nearest multiple of 26.
    pub fn adjusted_size(&self) -> u32 {
        self.size - self.size % SECTOR_DIVISIONS
    }

    pub fn max_gen_time(&self) -> Duration {
        Duration::from_millis(self.max_gen_time_ms)
    }

    /// Reject configurations that cannot produce a world.
    pub fn validate(&self) -> StarfieldResult<()> {
        let size = self.adjusted_size();
        if size < SECTOR_DIVISIONS {
            return Err(StarfieldError::WorldTooSmall(self.size));
        }
        if self.edge_distance as u64 * 2 > size as u64 {
            return Err(StarfieldError::EdgeDistanceTooLarge {
                edge_distance: self.edge_distance,
                size,
            });
        }
        if !self.minimum_star_distance.is_finite() || self.minimum_star_distance < 0.0 {
            return Err(StarfieldError::InvalidMinimumDistance(
                self.minimum_star_distance,
            ));
        }
        Ok(())
    }
}
