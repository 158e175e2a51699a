//! Procedural star field generation
//!
//! Scatters stars across a square world divided into a 26x26 sector grid,
//! keeping every pair of stars a minimum distance apart, and answers
//! spatial questions about the result.
//!
//! # Modules
//!
//! - [`models`] - Domain models (World, SectorGrid, Star, GenerationConfig, etc.)
//! - [`services`] - Spatial queries and multi-hop route planning
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Presenters for reports, sectors and routes
//! - [`cli`] - Command line parsing and dispatch for the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use starfield::{plan_route, GenerationConfig, World};
//!
//! let config = GenerationConfig { max_stars: 500, size: 2600, ..Default::default() };
//! let world = World::generate(&config, 42)?;
//! let (from, to) = (&world.stars()[0], &world.stars()[1]);
//! let route = plan_route(&world, from, to, 300.0)?;
//! println!("{} hops", route.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::config::GenerationConfig;
pub use models::constants::SpectralType;
pub use models::errors::{StarfieldError, StarfieldResult};
pub use models::position::Point;
pub use models::sector::{Sector, SectorLabel};
pub use models::sector_grid::SectorGrid;
pub use models::star::{Locate, Star, StarId};
pub use models::world::{generate, GenerationStatistics, Termination, TerminationReason, World};
pub use services::navigation::{plan_route, Hop, Route, RouteError};
pub use services::spatial::{
    inspect, random_star, stars_in_sector, stars_in_sectors, stars_near, stars_within_radius,
    DistanceLimit, SectorSummary,
};
