use std::time::Instant;

use log::{debug, info, trace, warn};
use rand::Rng;

use crate::models::config::GenerationConfig;
use crate::models::constants::{SpectralType, NUM_SPECTRAL_TYPES};
use crate::models::errors::StarfieldResult;
use crate::models::position::Point;
use crate::models::sector::SectorLabel;
use crate::models::sector_grid::SectorGrid;
use crate::models::star::{star_name, Star, StarId};

use super::statistics::{GenerationStatistics, Termination};
use super::World;

/// Mutable state of a single generation run.
struct GenerationContext {
    grid: SectorGrid,
    stars: Vec<Star>,
    spectral_counts: [usize; NUM_SPECTRAL_TYPES],
    largest_star: u32,
    rejected_attempts: u64,
    discarded_outside_disk: u64,
    max_proximity_checks: usize,
}

impl GenerationContext {
    fn new(grid: SectorGrid) -> Self {
        GenerationContext {
            grid,
            stars: Vec::new(),
            spectral_counts: [0; NUM_SPECTRAL_TYPES],
            largest_star: 0,
            rejected_attempts: 0,
            discarded_outside_disk: 0,
            max_proximity_checks: 0,
        }
    }

    /// True if any star in the scanned neighbourhood sits closer than `minimum`.
    fn crowded(&mut self, candidate: Point, sector: SectorLabel, scan_radius: f64, minimum: f64) -> bool {
        let ring = self.grid.neighbourhood(sector, scan_radius);
        let neighbours: Vec<StarId> = ring
            .iter()
            .filter_map(|label| self.grid.sector(*label))
            .flat_map(|s| s.stars().iter().copied())
            .collect();
        self.max_proximity_checks = self.max_proximity_checks.max(neighbours.len());

        neighbours
            .iter()
            .any(|id| candidate.distance_to(self.stars[id.0].position()) < minimum)
    }

    fn place<R: Rng + ?Sized>(
        &mut self,
        position: Point,
        sector: SectorLabel,
        rng: &mut R,
    ) -> StarfieldResult<()> {
        let ordinal = self.grid.require(sector)?.star_count();
        let spectral_type = SpectralType::from_percentile(rng.gen_range(1..=100));
        let id = StarId(self.stars.len());

        self.grid.assign_star(sector, id)?;
        self.spectral_counts[spectral_type as usize] += 1;
        self.largest_star = self.largest_star.max(spectral_type.visual_size());
        self.stars.push(Star::new(
            id,
            star_name(sector, ordinal),
            position,
            spectral_type,
            sector,
        ));
        Ok(())
    }
}

/// Generate a world by rejection sampling.
///
/// Candidates are drawn uniformly inside the edge margin and kept only when
/// no existing star lies closer than the minimum separation. In radial mode
/// candidates outside the inscribed disk are discarded and the separation
/// shrinks linearly towards the center.
///
/// The loop stops at the first of: `max_stars` placed, `max_extra_generation_loops`
/// rejections, or `max_gen_time_ms` elapsed. Hitting a bound is not an error;
/// the returned statistics say which ones fired.
pub fn generate<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> StarfieldResult<World> {
    config.validate()?;
    let start = Instant::now();
    let max_time = config.max_gen_time();

    let size = config.adjusted_size();
    let grid = SectorGrid::build(size)?;
    let scan_depth = grid.ring_depth(config.minimum_star_distance);
    info!(
        "Generating world of size {} ({} stars max, {} minimum separation)",
        size, config.max_stars, config.minimum_star_distance
    );
    debug!("Scanning {} sector ring(s) per candidate", scan_depth);

    let low = config.edge_distance;
    let high = size - config.edge_distance;
    let center = Point::new(size as f64 / 2.0, size as f64 / 2.0);
    let max_distance_from_center = size as f64 / 2.0;

    let mut ctx = GenerationContext::new(grid);
    while ctx.stars.len() < config.max_stars
        && ctx.rejected_attempts < config.max_extra_generation_loops
        && start.elapsed() < max_time
    {
        let candidate = Point::new(rng.gen_range(low..=high) as f64, rng.gen_range(low..=high) as f64);
        let percent_of_max_distance = candidate.distance_to(center) / max_distance_from_center;

        if config.radial && percent_of_max_distance > 1.0 {
            ctx.discarded_outside_disk += 1;
            continue;
        }

        let minimum = if config.radial {
            config.minimum_star_distance * percent_of_max_distance
        } else {
            config.minimum_star_distance
        };

        let sector = ctx.grid.sector_of(candidate);
        if ctx.crowded(candidate, sector, config.minimum_star_distance, minimum) {
            ctx.rejected_attempts += 1;
            trace!("Rejected {} in {}", candidate, sector);
            continue;
        }

        ctx.place(candidate, sector, rng)?;
    }

    let elapsed = start.elapsed();
    let termination = Termination {
        star_limit: ctx.stars.len() >= config.max_stars,
        loop_limit: ctx.rejected_attempts >= config.max_extra_generation_loops,
        time_limit: elapsed >= max_time,
    };

    if termination.loop_limit {
        warn!(
            "Generation stopped: hit loop limit of {}",
            config.max_extra_generation_loops
        );
    }
    if termination.time_limit {
        warn!(
            "Generation stopped: hit max generation time of {}ms",
            config.max_gen_time_ms
        );
    }
    info!(
        "{} stars generated in {:?} with {} rejected attempts",
        ctx.stars.len(),
        elapsed,
        ctx.rejected_attempts
    );

    let statistics = GenerationStatistics {
        elapsed,
        rejected_attempts: ctx.rejected_attempts,
        discarded_outside_disk: ctx.discarded_outside_disk,
        max_proximity_checks: ctx.max_proximity_checks,
        scan_depth,
        termination,
    };

    Ok(World::from_parts(
        config.clone(),
        ctx.grid,
        ctx.stars,
        ctx.spectral_counts,
        ctx.largest_star,
        statistics,
    ))
}
