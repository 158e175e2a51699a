use std::fmt;

use super::constants::SpectralType;
use super::position::Point;
use super::sector::SectorLabel;

/// Stable identity of a star: its index in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarId(pub usize);

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A generated star. Immutable once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    id: StarId,
    name: String,
    position: Point,
    spectral_type: SpectralType,
    sector: SectorLabel,
}

impl Star {
    pub fn new(
        id: StarId,
        name: String,
        position: Point,
        spectral_type: SpectralType,
        sector: SectorLabel,
    ) -> Self {
        Star {
            id,
            name,
            position,
            spectral_type,
            sector,
        }
    }

    pub fn id(&self) -> StarId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn spectral_type(&self) -> SpectralType {
        self.spectral_type
    }

    /// Sector the star was placed in. Never changes.
    pub fn sector(&self) -> SectorLabel {
        self.sector
    }

    pub fn visual_size(&self) -> u32 {
        self.spectral_type.visual_size()
    }

    pub fn distance_to(&self, other: &Star) -> f64 {
        self.position.distance_to(other.position)
    }
}

/// Name for the `ordinal`-th star placed in `sector`, e.g. `C12-0`.
pub fn star_name(sector: SectorLabel, ordinal: usize) -> String {
    format!("{}-{}", sector, ordinal)
}

/// Anything a spatial query can be centred on.
pub trait Locate {
    fn location(&self) -> Point;

    /// Identity to exclude from results when the origin is itself a star.
    fn star_id(&self) -> Option<StarId> {
        None
    }
}

impl Locate for Point {
    fn location(&self) -> Point {
        *self
    }
}

impl Locate for Star {
    fn location(&self) -> Point {
        self.position
    }

    fn star_id(&self) -> Option<StarId> {
        Some(self.id)
    }
}

impl<T: Locate + ?Sized> Locate for &T {
    fn location(&self) -> Point {
        (**self).location()
    }

    fn star_id(&self) -> Option<StarId> {
        (**self).star_id()
    }
}
