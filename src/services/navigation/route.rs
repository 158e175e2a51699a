use crate::models::position::to_light_years;
use crate::models::star::{Star, StarId};
use crate::models::world::World;

/// One leg of a route, at most one range long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    pub start: StarId,
    pub end: StarId,
    pub distance: f64,
}

impl Hop {
    pub fn between(start: &Star, end: &Star) -> Self {
        Hop {
            start: start.id(),
            end: end.id(),
            distance: start.distance_to(end),
        }
    }
}

/// Ordered hops where each hop starts where the previous one ended.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    hops: Vec<Hop>,
}

impl Route {
    pub fn new() -> Self {
        Route { hops: Vec::new() }
    }

    pub(crate) fn push(&mut self, hop: Hop) {
        debug_assert!(
            self.hops.last().map_or(true, |last| last.end == hop.start),
            "hops must be contiguous"
        );
        self.hops.push(hop);
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn origin(&self) -> Option<StarId> {
        self.hops.first().map(|hop| hop.start)
    }

    /// Where the last hop ends.
    pub fn end(&self) -> Option<StarId> {
        self.hops.last().map(|hop| hop.end)
    }

    pub fn ends_at(&self, id: StarId) -> bool {
        self.end() == Some(id)
    }

    /// Every star visited, origin first.
    pub fn waypoints(&self) -> Vec<StarId> {
        self.hops
            .first()
            .map(|hop| hop.start)
            .into_iter()
            .chain(self.hops.iter().map(|hop| hop.end))
            .collect()
    }

    pub fn total_distance(&self) -> f64 {
        self.hops.iter().map(|hop| hop.distance).sum()
    }

    pub fn total_light_years(&self) -> f64 {
        to_light_years(self.total_distance())
    }

    pub fn longest_hop(&self) -> f64 {
        self.hops.iter().map(|hop| hop.distance).fold(0.0, f64::max)
    }

    /// Resolve waypoints into stars of `world`.
    pub fn stars<'w>(&self, world: &'w World) -> Vec<&'w Star> {
        self.waypoints()
            .into_iter()
            .filter_map(|id| world.star(id))
            .collect()
    }
}
