//! Navigation system
//!
//! Plans multi-hop routes between stars when the destination lies beyond
//! a single hop's range.

mod planner;
mod route;

pub use planner::{plan_route, RouteError};
pub use route::{Hop, Route};
