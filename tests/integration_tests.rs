use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield::io::OutputWriter;
use starfield::ui::presenters::GenerationPresenter;
use starfield::{
    generate, inspect, plan_route, random_star, stars_within_radius, DistanceLimit,
    GenerationConfig, Point, RouteError, SectorLabel, StarfieldError, TerminationReason, World,
};

struct Capture(String);

impl OutputWriter for Capture {
    fn write(&mut self, message: &str) {
        self.0.push_str(message);
    }

    fn writeln(&mut self, message: &str) {
        self.0.push_str(message);
        self.0.push('\n');
    }
}

fn small_config(max_stars: usize) -> GenerationConfig {
    GenerationConfig {
        max_extra_generation_loops: 100_000,
        max_stars,
        max_gen_time_ms: 60_000,
        edge_distance: 100,
        size: 2600,
        minimum_star_distance: 100.0,
        radial: false,
    }
}

#[test]
fn fifty_stars_in_a_small_world() {
    let world = World::generate(&small_config(50), 42).unwrap();

    assert_eq!(world.star_count(), 50);
    assert_eq!(world.grid().delimiter(), 100);
    let termination = world.statistics().termination;
    assert!(termination.star_limit);
    assert!(!termination.loop_limit);
    assert!(!termination.time_limit);
    assert_eq!(termination.reasons(), vec![TerminationReason::StarLimit]);

    for (i, a) in world.stars().iter().enumerate() {
        let p = a.position();
        assert!((100.0..=2500.0).contains(&p.x));
        assert!((100.0..=2500.0).contains(&p.y));
        for b in &world.stars()[i + 1..] {
            assert!(a.distance_to(b) >= 100.0);
        }
    }
}

#[test]
fn grid_partitions_stars() {
    let world = World::generate(&small_config(200), 3).unwrap();
    let total: usize = world.grid().sectors().iter().map(|s| s.star_count()).sum();
    assert_eq!(total, world.star_count());
    for star in world.stars() {
        assert_eq!(world.sector_of(star.position()), star.sector());
    }
}

#[test]
fn spectral_counts_sum_to_star_count() {
    let world = World::generate(&small_config(300), 17).unwrap();
    let total: usize = world.spectral_counts().iter().map(|(_, n)| n).sum();
    assert_eq!(total, world.star_count());
    let largest = world.stars().iter().map(|s| s.visual_size()).max().unwrap();
    assert_eq!(world.largest_star_size(), largest);
}

#[test]
fn same_seed_same_world() {
    let config = small_config(150);
    let a = World::generate(&config, 2024).unwrap();
    let b = World::generate(&config, 2024).unwrap();
    assert_eq!(a.stars(), b.stars());
    assert_eq!(a.statistics().rejected_attempts, b.statistics().rejected_attempts);
}

#[test]
fn generate_with_caller_rng() {
    let mut rng = StdRng::seed_from_u64(99);
    let world = generate(&small_config(30), &mut rng).unwrap();
    assert_eq!(world.star_count(), 30);
    assert_eq!(
        world.stars(),
        World::generate(&small_config(30), 99).unwrap().stars()
    );
}

#[test]
fn invalid_configs_are_rejected_before_generation() {
    let tiny = GenerationConfig {
        size: 25,
        ..Default::default()
    };
    assert!(matches!(World::generate(&tiny, 1), Err(StarfieldError::WorldTooSmall(_))));

    let fat_edges = GenerationConfig {
        size: 2600,
        edge_distance: 1400,
        ..Default::default()
    };
    assert!(matches!(
        World::generate(&fat_edges, 1),
        Err(StarfieldError::EdgeDistanceTooLarge { .. })
    ));

    let negative = GenerationConfig {
        minimum_star_distance: -1.0,
        ..small_config(10)
    };
    assert!(matches!(
        World::generate(&negative, 1),
        Err(StarfieldError::InvalidMinimumDistance(_))
    ));
}

#[test]
fn config_loads_from_toml() {
    let config = GenerationConfig::from_toml_str(
        r#"
        max_stars = 75
        size = 2600
        radial = true
        "#,
    )
    .unwrap();
    assert_eq!(config.max_stars, 75);
    assert!(config.radial);
    assert_eq!(config.edge_distance, 100);

    let world = World::generate(&config, 6).unwrap();
    let center = Point::new(1300.0, 1300.0);
    for star in world.stars() {
        assert!(star.position().distance_to(center) <= 1300.0);
    }
}

#[test]
fn adjacency_at_corner_edge_and_interior() {
    let world = World::generate(&small_config(10), 1).unwrap();
    let label = |s: &str| s.parse::<SectorLabel>().unwrap();
    assert_eq!(world.adjacent_sectors(label("A1"), true).len(), 4);
    assert_eq!(world.adjacent_sectors(label("A5"), true).len(), 6);
    assert_eq!(world.adjacent_sectors(label("M13"), true).len(), 9);
}

#[test]
fn radius_query_agrees_with_brute_force() {
    let world = World::generate(&small_config(250), 12).unwrap();
    let origin = &world.stars()[7];
    let found = stars_within_radius(&world, origin, 350.0, true).unwrap();
    let mut found: Vec<_> = found.iter().map(|s| s.id()).collect();
    found.sort();
    let expected: Vec<_> = world
        .stars()
        .iter()
        .filter(|s| s.id() != origin.id() && s.distance_to(origin) <= 350.0)
        .map(|s| s.id())
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn random_star_respects_limit() {
    let world = World::generate(&small_config(300), 21).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let origin = world.stars()[0].position();
    for _ in 0..50 {
        let limit = DistanceLimit {
            origin,
            distance: 400.0,
        };
        let star = random_star(&world, &mut rng, Some(limit)).unwrap().unwrap();
        assert!(star.position().distance_to(origin) <= 400.0);
    }
}

#[test]
fn single_hop_when_destination_in_range() {
    let world = World::generate(&small_config(100), 8).unwrap();
    let (a, b) = (&world.stars()[0], &world.stars()[1]);
    let route = plan_route(&world, a, b, a.distance_to(b)).unwrap();
    assert_eq!(route.len(), 1);
    assert_eq!(route.origin(), Some(a.id()));
    assert!(route.ends_at(b.id()));
}

#[test]
fn multi_hop_route_is_contiguous() {
    let world = World::generate(&small_config(300), 31).unwrap();
    let (a, b) = (&world.stars()[0], &world.stars()[1]);
    match plan_route(&world, a, b, 400.0) {
        Ok(route) => {
            assert!(route.ends_at(b.id()));
            for pair in route.hops().windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            for hop in route.hops() {
                assert!(hop.distance <= 400.0);
            }
        }
        Err(RouteError::HopLimitExceeded { hops, .. }) => assert_eq!(hops, 1000),
        Err(other) => panic!("unexpected route failure: {other}"),
    }
}

#[test]
fn isolated_star_is_stranded() {
    let world = World::generate(&small_config(2), 4).unwrap();
    let (a, b) = (&world.stars()[0], &world.stars()[1]);
    let range = a.distance_to(b) / 2.0;
    assert!(matches!(
        plan_route(&world, a, b, range),
        Err(RouteError::Stranded { hops: 0, .. })
    ));
}

#[test]
fn inspection_and_report() {
    let world = World::generate(&small_config(80), 10).unwrap();
    let summary = inspect(&world, Point::new(1250.0, 1250.0));
    assert_eq!(summary.sector.to_string(), "M13");
    assert_eq!(summary.adjacent.len(), 8);

    let mut capture = Capture(String::new());
    GenerationPresenter::show_report(&world, &mut capture);
    assert!(capture.0.contains("80 STARS GENERATED"));
}
