//! World model
//!
//! A generated star field: the sector grid, the stars in creation order,
//! per-class counts and the statistics of the run that produced it.

mod generation;
mod statistics;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

use super::config::GenerationConfig;
use super::constants::{SpectralType, NUM_SPECTRAL_TYPES};
use super::errors::{StarfieldError, StarfieldResult};
use super::position::Point;
use super::sector::SectorLabel;
use super::sector_grid::SectorGrid;
use super::star::{Star, StarId};

pub use generation::generate;
pub use statistics::{GenerationStatistics, Termination, TerminationReason};

/// Top-level container for a generated star field.
/// Read-only once generation returns.
pub struct World {
    config: GenerationConfig,
    grid: SectorGrid,
    stars: Vec<Star>,
    spectral_counts: [usize; NUM_SPECTRAL_TYPES],
    largest_star: u32,
    statistics: GenerationStatistics,
}

impl World {
    /// Generate a world from a seed so the same seed always yields the same stars.
    pub fn generate(config: &GenerationConfig, seed: u64) -> StarfieldResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(config, &mut rng)
    }

    pub(crate) fn from_parts(
        config: GenerationConfig,
        grid: SectorGrid,
        stars: Vec<Star>,
        spectral_counts: [usize; NUM_SPECTRAL_TYPES],
        largest_star: u32,
        statistics: GenerationStatistics,
    ) -> Self {
        World {
            config,
            grid,
            stars,
            spectral_counts,
            largest_star,
            statistics,
        }
    }

    // Test-only builder: stars of class M at fixed positions, no spacing checks
    #[cfg(test)]
    pub(crate) fn from_positions(size: u32, positions: &[Point]) -> StarfieldResult<Self> {
        use super::star::star_name;

        let mut grid = SectorGrid::build(size)?;
        let mut stars = Vec::with_capacity(positions.len());
        for position in positions {
            let sector = grid.sector_of(*position);
            let ordinal = grid.require(sector)?.star_count();
            let id = StarId(stars.len());
            grid.assign_star(sector, id)?;
            stars.push(Star::new(
                id,
                star_name(sector, ordinal),
                *position,
                SpectralType::M,
                sector,
            ));
        }
        let mut spectral_counts = [0; NUM_SPECTRAL_TYPES];
        spectral_counts[SpectralType::M as usize] = stars.len();
        let config = GenerationConfig {
            size,
            max_stars: stars.len(),
            ..Default::default()
        };
        Ok(World::from_parts(
            config,
            grid,
            stars,
            spectral_counts,
            SpectralType::M.visual_size(),
            GenerationStatistics::default(),
        ))
    }

    // ========== Accessor Methods ==========

    /// Configuration the world was generated from
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Effective world size (a multiple of 26)
    pub fn size(&self) -> u32 {
        self.grid.size()
    }

    pub fn grid(&self) -> &SectorGrid {
        &self.grid
    }

    /// Stars in creation order
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.get(id.0)
    }

    pub fn star_by_name(&self, name: &str) -> StarfieldResult<&Star> {
        self.stars
            .iter()
            .find(|star| star.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| StarfieldError::UnknownStar(name.to_string()))
    }

    pub fn spectral_count(&self, spectral_type: SpectralType) -> usize {
        self.spectral_counts[spectral_type as usize]
    }

    /// Star count per spectral class, hottest first
    pub fn spectral_counts(&self) -> Vec<(SpectralType, usize)> {
        SpectralType::ALL
            .iter()
            .map(|t| (*t, self.spectral_count(*t)))
            .collect()
    }

    /// Visual size of the largest star generated, 0 for an empty world
    pub fn largest_star_size(&self) -> u32 {
        self.largest_star
    }

    pub fn statistics(&self) -> &GenerationStatistics {
        &self.statistics
    }

    // ========== End Accessor Methods ==========

    pub fn sector_of(&self, point: Point) -> SectorLabel {
        self.grid.sector_of(point)
    }

    pub fn adjacent_sectors(&self, label: SectorLabel, include_self: bool) -> Vec<SectorLabel> {
        self.grid.adjacent_sectors(label, include_self)
    }

    /// Resolve star ids held by sectors into stars.
    pub(crate) fn resolve<'a>(&'a self, ids: &'a [StarId]) -> impl Iterator<Item = &'a Star> + 'a {
        ids.iter().filter_map(move |id| self.star(*id))
    }
}

// Custom Debug that doesn't dump every star
impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("World")
            .field("size", &self.size())
            .field("stars", &self.star_count())
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}
