//! User interface and presentation
//!
//! Presenters format generation reports, sector inspections, stars and
//! routes, keeping presentation out of the models and services.

pub mod presenters;
