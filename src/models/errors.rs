use std::path::PathBuf;

use super::constants::SECTOR_DIVISIONS;

/// Starfield error types
#[derive(Debug, thiserror::Error)]
pub enum StarfieldError {
    /// World too small to divide into sectors
    #[error("world size {0} is too small: must be at least {min}", min = SECTOR_DIVISIONS)]
    WorldTooSmall(u32),

    /// Edge margin leaves no area to place stars in
    #[error("edge distance {edge_distance} leaves no placement area in a world of size {size}")]
    EdgeDistanceTooLarge { edge_distance: u32, size: u32 },

    /// Minimum star distance is negative or not finite
    #[error("minimum star distance must be a non-negative number, got {0}")]
    InvalidMinimumDistance(f64),

    /// Search radius is negative or not finite
    #[error("search radius must be a non-negative number, got {0}")]
    InvalidRadius(f64),

    /// A sector label could not be parsed
    #[error("invalid sector label: {0:?}")]
    InvalidSectorLabel(String),

    /// A well-formed label that lies outside the grid
    #[error("sector {0} is outside the grid")]
    UnknownSector(String),

    /// No star carries the requested name
    #[error("no star named {0:?}")]
    UnknownStar(String),

    /// Reading a configuration file failed
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was not valid TOML for this schema
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Type alias for Results using StarfieldError
pub type StarfieldResult<T> = Result<T, StarfieldError>;
