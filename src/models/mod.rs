//! Domain models
//!
//! Stars, the sector grid that indexes them, generation configuration
//! and the generated world. Models are plain data plus the generation loop.

pub mod config;
pub mod constants;
pub mod errors;
pub mod position;
pub mod sector;
pub mod sector_grid;
pub mod star;
pub mod world;
