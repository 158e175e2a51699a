//! Spatial queries
//!
//! Read-only lookups over a generated world, using the sector grid to
//! narrow candidates before exact distance checks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::errors::{StarfieldError, StarfieldResult};
use crate::models::position::Point;
use crate::models::sector::SectorLabel;
use crate::models::star::{Locate, Star};
use crate::models::world::World;

/// Restricts [`random_star`] to stars within `distance` of `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceLimit {
    pub origin: Point,
    pub distance: f64,
}

/// What lies in and around the sector under a point.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSummary {
    pub sector: SectorLabel,
    pub stars_in_sector: usize,
    /// Neighbouring sectors, excluding the sector itself.
    pub adjacent: Vec<SectorLabel>,
    pub stars_in_adjacent: usize,
}

impl SectorSummary {
    pub fn row(&self) -> String {
        self.sector.row_letters()
    }

    pub fn column(&self) -> u32 {
        self.sector.column()
    }

    pub fn total_stars(&self) -> usize {
        self.stars_in_sector + self.stars_in_adjacent
    }
}

fn check_radius(radius: f64) -> StarfieldResult<()> {
    if radius.is_nan() || radius < 0.0 {
        return Err(StarfieldError::InvalidRadius(radius));
    }
    Ok(())
}

/// Stars assigned to one sector, in insertion order.
pub fn stars_in_sector(world: &World, label: SectorLabel) -> StarfieldResult<Vec<&Star>> {
    let sector = world.grid().require(label)?;
    Ok(world.resolve(sector.stars()).collect())
}

/// Stars of several sectors, concatenated in the order the labels are given.
pub fn stars_in_sectors<'w>(
    world: &'w World,
    labels: &[SectorLabel],
) -> StarfieldResult<Vec<&'w Star>> {
    let mut stars = Vec::new();
    for label in labels {
        let sector = world.grid().require(*label)?;
        stars.extend(world.resolve(sector.stars()));
    }
    Ok(stars)
}

/// Stars in the sector under `point` and its immediate neighbours.
pub fn stars_near(world: &World, point: Point) -> Vec<&Star> {
    let sector = world.sector_of(point);
    let labels = world.adjacent_sectors(sector, true);
    labels
        .iter()
        .filter_map(|label| world.grid().sector(*label))
        .flat_map(|s| world.resolve(s.stars()))
        .collect()
}

/// Every star whose distance to `origin` is at most `radius`.
///
/// When `exclude_origin` is set and the origin is itself a star, that star is
/// left out. Results follow
/// [`neighbourhood`](crate::models::sector_grid::SectorGrid::neighbourhood) order, then insertion
/// order within each sector.
pub fn stars_within_radius<'w, L: Locate + ?Sized>(
    world: &'w World,
    origin: &L,
    radius: f64,
    exclude_origin: bool,
) -> StarfieldResult<Vec<&'w Star>> {
    check_radius(radius)?;
    let center = origin.location();
    let excluded = if exclude_origin { origin.star_id() } else { None };

    let grid = world.grid();
    let scan = grid.neighbourhood(grid.sector_of(center), radius);
    let candidates = stars_in_sectors(world, &scan)?;

    Ok(candidates
        .into_iter()
        .filter(|star| Some(star.id()) != excluded)
        .filter(|star| star.position().distance_to(center) <= radius)
        .collect())
}

/// Pick a star uniformly at random, optionally only among those within a
/// distance of an origin. A limit whose distance is not positive draws from
/// every star. `Ok(None)` means there was no candidate.
pub fn random_star<'w, R: Rng + ?Sized>(
    world: &'w World,
    rng: &mut R,
    limit: Option<DistanceLimit>,
) -> StarfieldResult<Option<&'w Star>> {
    match limit {
        Some(limit) if limit.distance > 0.0 => {
            let candidates = stars_within_radius(world, &limit.origin, limit.distance, false)?;
            Ok(candidates.choose(rng).copied())
        }
        _ => Ok(world.stars().choose(rng)),
    }
}

/// Inspect the sector containing `point`.
pub fn inspect(world: &World, point: Point) -> SectorSummary {
    let sector = world.sector_of(point);
    let adjacent = world.adjacent_sectors(sector, false);
    let count = |label: &SectorLabel| world.grid().sector(*label).map_or(0, |s| s.star_count());

    SectorSummary {
        sector,
        stars_in_sector: count(&sector),
        stars_in_adjacent: adjacent.iter().map(count).sum(),
        adjacent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    use crate::models::config::GenerationConfig;
    use crate::models::star::StarId;

    fn world() -> World {
        let config = GenerationConfig {
            max_extra_generation_loops: 100_000,
            max_stars: 400,
            max_gen_time_ms: 60_000,
            edge_distance: 50,
            size: 2600,
            minimum_star_distance: 60.0,
            radial: false,
        };
        World::generate(&config, 42).unwrap()
    }

    fn brute_force(world: &World, center: Point, radius: f64) -> HashSet<StarId> {
        world
            .stars()
            .iter()
            .filter(|s| s.position().distance_to(center) <= radius)
            .map(|s| s.id())
            .collect()
    }

    #[test]
    fn stars_in_sector_matches_assignment() {
        let world = world();
        let star = &world.stars()[0];
        let stars = stars_in_sector(&world, star.sector()).unwrap();
        assert!(stars.iter().any(|s| s.id() == star.id()));
        assert!(stars.iter().all(|s| s.sector() == star.sector()));
    }

    #[test]
    fn stars_in_sector_rejects_unknown_label() {
        let world = world();
        let err = stars_in_sector(&world, SectorLabel::new(30, 1)).unwrap_err();
        assert!(matches!(err, StarfieldError::UnknownSector(_)));
    }

    #[test]
    fn stars_in_sectors_concatenates_in_label_order() {
        let world = world();
        let a = SectorLabel::new(3, 4);
        let b = SectorLabel::new(10, 10);
        let combined = stars_in_sectors(&world, &[b, a]).unwrap();
        let mut expected = stars_in_sector(&world, b).unwrap();
        expected.extend(stars_in_sector(&world, a).unwrap());
        assert_eq!(combined, expected);
    }

    #[test]
    fn within_radius_matches_brute_force() {
        let world = world();
        for (center, radius) in [
            (Point::new(1300.0, 1300.0), 150.0),
            (Point::new(10.0, 10.0), 420.0),
            (Point::new(2599.0, 1200.0), 99.5),
            (Point::new(700.0, 2000.0), 0.0),
            (Point::new(1300.0, 1300.0), 5000.0),
        ] {
            let found: HashSet<StarId> = stars_within_radius(&world, &center, radius, false)
                .unwrap()
                .iter()
                .map(|s| s.id())
                .collect();
            assert_eq!(found, brute_force(&world, center, radius), "center {} radius {}", center, radius);
        }
    }

    #[test]
    fn within_radius_excludes_origin_star_on_request() {
        let world = world();
        let origin = &world.stars()[12];
        let with = stars_within_radius(&world, origin, 200.0, false).unwrap();
        let without = stars_within_radius(&world, origin, 200.0, true).unwrap();
        assert!(with.iter().any(|s| s.id() == origin.id()));
        assert!(without.iter().all(|s| s.id() != origin.id()));
        assert_eq!(with.len(), without.len() + 1);
    }

    #[test]
    fn within_radius_lists_candidates_in_block_order() {
        // Origin in B2; one neighbour shares its sector, another sits in A2
        let positions = [
            Point::new(150.0, 150.0),
            Point::new(190.0, 190.0),
            Point::new(142.0, 94.0),
            Point::new(270.0, 90.0),
        ];
        let world = World::from_positions(2600, &positions).unwrap();
        let origin = &world.stars()[0];
        let names: Vec<&str> = stars_within_radius(&world, origin, 130.0, true)
            .unwrap()
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, ["A2-0", "B2-1"]);
    }

    #[test]
    fn within_radius_rejects_negative_radius() {
        let world = world();
        let err = stars_within_radius(&world, &Point::new(0.0, 0.0), -1.0, false).unwrap_err();
        assert!(matches!(err, StarfieldError::InvalidRadius(_)));
    }

    #[test]
    fn stars_near_covers_adjacent_block() {
        let world = world();
        let point = Point::new(1250.0, 1250.0);
        let near: HashSet<StarId> = stars_near(&world, point).iter().map(|s| s.id()).collect();
        let sector = world.sector_of(point);
        let block = world.adjacent_sectors(sector, true);
        let expected: HashSet<StarId> = world
            .stars()
            .iter()
            .filter(|s| block.contains(&s.sector()))
            .map(|s| s.id())
            .collect();
        assert_eq!(near, expected);
    }

    #[test]
    fn random_star_without_limit_draws_from_all() {
        let world = world();
        let mut rng = StdRng::seed_from_u64(0);
        let star = random_star(&world, &mut rng, None).unwrap();
        assert!(star.is_some());
    }

    #[test]
    fn random_star_respects_limit() {
        let world = world();
        let mut rng = StdRng::seed_from_u64(0);
        let origin = world.stars()[0].position();
        for _ in 0..50 {
            let limit = DistanceLimit { origin, distance: 250.0 };
            let star = random_star(&world, &mut rng, Some(limit)).unwrap().unwrap();
            assert!(star.position().distance_to(origin) <= 250.0);
        }
    }

    #[test]
    fn random_star_without_positive_distance_draws_from_all() {
        let world = world();
        // Inside the empty edge margin: a real limit would find nothing
        let origin = Point::new(0.0, 0.0);
        for distance in [0.0, -25.0, f64::NAN] {
            let mut limited = StdRng::seed_from_u64(9);
            let mut unlimited = StdRng::seed_from_u64(9);
            let limit = DistanceLimit { origin, distance };
            let star = random_star(&world, &mut limited, Some(limit)).unwrap();
            assert!(star.is_some(), "distance {}", distance);
            assert_eq!(star, random_star(&world, &mut unlimited, None).unwrap());
        }
    }

    #[test]
    fn random_star_reports_no_candidate() {
        let world = world();
        let mut rng = StdRng::seed_from_u64(0);
        // Corner inside the edge margin holds no stars
        let limit = DistanceLimit {
            origin: Point::new(0.0, 0.0),
            distance: 10.0,
        };
        assert_eq!(random_star(&world, &mut rng, Some(limit)).unwrap(), None);
    }

    #[test]
    fn random_star_on_empty_world_is_none() {
        let config = GenerationConfig {
            max_stars: 0,
            size: 2600,
            ..Default::default()
        };
        let world = World::generate(&config, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_star(&world, &mut rng, None).unwrap(), None);
    }

    #[test]
    fn inspect_counts_sector_and_neighbours() {
        let world = world();
        let point = Point::new(150.0, 250.0);
        let summary = inspect(&world, point);
        assert_eq!(summary.sector.to_string(), "C2");
        assert_eq!(summary.row(), "C");
        assert_eq!(summary.column(), 2);
        assert_eq!(summary.adjacent.len(), 8);
        assert_eq!(
            summary.stars_in_sector,
            stars_in_sector(&world, summary.sector).unwrap().len()
        );
        assert_eq!(
            summary.stars_in_adjacent,
            stars_in_sectors(&world, &summary.adjacent).unwrap().len()
        );
        assert_eq!(summary.total_stars(), stars_near(&world, point).len());
    }
}
