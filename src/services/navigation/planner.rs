use log::debug;

use crate::models::constants::MAX_ROUTE_HOPS;
use crate::models::errors::StarfieldError;
use crate::models::star::{Star, StarId};
use crate::models::world::World;
use crate::services::spatial::stars_within_radius;

use super::route::{Hop, Route};

/// Why a route could not be planned.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("route range must be a positive number, got {0}")]
    InvalidRange(f64),

    /// No other star is within range of the current position
    #[error("stranded at {at} after {hops} hop(s): no star within range")]
    Stranded { at: StarId, hops: usize },

    #[error("gave up at {last} after {hops} hops without reaching the destination")]
    HopLimitExceeded { hops: usize, last: StarId },

    #[error(transparent)]
    Query(#[from] StarfieldError),
}

/// Plan a multi-hop route from `origin` to `destination`, no hop longer than `range`.
///
/// Greedy and non-backtracking: from each star, jump to the in-range star
/// closest to the destination (first one wins ties) until the destination
/// itself is in range. This is not a shortest-path search and may wander or
/// cycle in sparse fields; such runs end in [`RouteError::HopLimitExceeded`]
/// after [`MAX_ROUTE_HOPS`] hops.
pub fn plan_route(
    world: &World,
    origin: &Star,
    destination: &Star,
    range: f64,
) -> Result<Route, RouteError> {
    if range.is_nan() || range <= 0.0 {
        return Err(RouteError::InvalidRange(range));
    }

    let mut route = Route::new();
    if origin.distance_to(destination) <= range {
        route.push(Hop::between(origin, destination));
        return Ok(route);
    }

    let mut current = origin;
    while route.len() < MAX_ROUTE_HOPS {
        let candidates = stars_within_radius(world, current, range, true)?;

        if candidates.iter().any(|star| star.id() == destination.id()) {
            route.push(Hop::between(current, destination));
            debug!(
                "Route {} -> {} planned in {} hop(s)",
                origin.name(),
                destination.name(),
                route.len()
            );
            return Ok(route);
        }

        let next = closest_to(&candidates, destination).ok_or(RouteError::Stranded {
            at: current.id(),
            hops: route.len(),
        })?;
        debug!("Hop {}: {} -> {}", route.len() + 1, current.name(), next.name());
        route.push(Hop::between(current, next));
        current = next;
    }

    Err(RouteError::HopLimitExceeded {
        hops: route.len(),
        last: current.id(),
    })
}

/// Candidate nearest to `target`; the earliest candidate wins ties.
fn closest_to<'w>(candidates: &[&'w Star], target: &Star) -> Option<&'w Star> {
    let mut best: Option<(&'w Star, f64)> = None;
    for &candidate in candidates {
        let distance = candidate.distance_to(target);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(star, _)| star)
}
