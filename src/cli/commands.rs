use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::io::OutputWriter;
use crate::models::config::GenerationConfig;
use crate::models::errors::StarfieldError;
use crate::models::position::Point;
use crate::models::world::generate;
use crate::services::navigation::{plan_route, RouteError};
use crate::services::spatial::{inspect, random_star, DistanceLimit};
use crate::ui::presenters::{GenerationPresenter, RoutePresenter, SectorPresenter, StarPresenter};

use super::args::Command;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Starfield(#[from] StarfieldError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Generate a world from `config` and `seed`, then carry out `command`.
/// No command prints the generation report.
pub fn run(
    config: &GenerationConfig,
    seed: u64,
    command: Option<Command>,
    output: &mut dyn OutputWriter,
) -> Result<(), CliError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let world = generate(config, &mut rng)?;
    info!("World ready: {:?}", world);

    match command.unwrap_or(Command::Generate) {
        Command::Generate => GenerationPresenter::show_report(&world, output),
        Command::Sector { x, y } => {
            SectorPresenter::show_summary(&inspect(&world, Point::new(x, y)), output);
        }
        Command::Random { near, within } => {
            let limit = match (near, within) {
                (Some(name), Some(distance)) => Some(DistanceLimit {
                    origin: world.star_by_name(&name)?.position(),
                    distance,
                }),
                _ => None,
            };
            match random_star(&world, &mut rng, limit)? {
                Some(star) => StarPresenter::show_star(star, output),
                None => StarPresenter::show_none(output),
            }
        }
        Command::Route { from, to, range } => {
            let origin = world.star_by_name(&from)?;
            let destination = world.star_by_name(&to)?;
            match plan_route(&world, origin, destination, range) {
                Ok(route) => RoutePresenter::show_route(&route, &world, output),
                Err(error @ (RouteError::Stranded { .. } | RouteError::HopLimitExceeded { .. })) => {
                    RoutePresenter::show_failure(&error, output)
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
    Ok(())
}
