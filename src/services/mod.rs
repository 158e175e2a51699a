//! Star field services
//!
//! Read-only operations over a generated world: spatial queries and
//! route planning.

pub mod navigation;
pub mod spatial;
