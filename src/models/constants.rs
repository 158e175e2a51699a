/// Number of sector divisions along each axis of the world.
/// World size is rounded down to a multiple of this value.
pub const SECTOR_DIVISIONS: u32 = 26;

/// Safety cap on the number of hops the route planner will take.
pub const MAX_ROUTE_HOPS: usize = 1000;

/// Distance units per light year.
pub const UNITS_PER_LIGHT_YEAR: f64 = 100.0;

pub const DEFAULT_MAX_EXTRA_GENERATION_LOOPS: u64 = 1_000_000;
pub const DEFAULT_MAX_STARS: usize = 10_000;
pub const DEFAULT_MAX_GEN_TIME_MS: u64 = 10_000;
pub const DEFAULT_EDGE_DISTANCE: u32 = 100;
pub const DEFAULT_WORLD_SIZE: u32 = 10_000;
pub const DEFAULT_MINIMUM_STAR_DISTANCE: f64 = 100.0;

/// Cumulative percentile thresholds for spectral classification.
/// A draw in [1, 100] maps to the first band whose upper bound it does not exceed;
/// anything above the last band is class M.
pub const SPECTRAL_BANDS: [(SpectralType, u8); 6] = [
    (SpectralType::O, 1),
    (SpectralType::B, 3),
    (SpectralType::A, 6),
    (SpectralType::F, 11),
    (SpectralType::G, 19),
    (SpectralType::K, 32),
];

pub const NUM_SPECTRAL_TYPES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpectralType {
    O = 0,
    B = 1,
    A = 2,
    F = 3,
    G = 4,
    K = 5,
    M = 6,
}

impl SpectralType {
    pub fn letter(&self) -> char {
        match self {
            SpectralType::O => 'O',
            SpectralType::B => 'B',
            SpectralType::A => 'A',
            SpectralType::F => 'F',
            SpectralType::G => 'G',
            SpectralType::K => 'K',
            SpectralType::M => 'M',
        }
    }

    /// Display size used by renderers; hotter classes draw larger.
    pub fn visual_size(&self) -> u32 {
        match self {
            SpectralType::O => 72,
            SpectralType::B => 64,
            SpectralType::A => 56,
            SpectralType::F => 48,
            SpectralType::G => 40,
            SpectralType::K => 32,
            SpectralType::M => 24,
        }
    }

    /// Map a percentile draw in [1, 100] onto a spectral class.
    pub fn from_percentile(draw: u8) -> SpectralType {
        SPECTRAL_BANDS
            .iter()
            .find(|(_, upper)| draw <= *upper)
            .map(|(class, _)| *class)
            .unwrap_or(SpectralType::M)
    }

    pub const ALL: [SpectralType; NUM_SPECTRAL_TYPES] = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
    ];
}

impl std::fmt::Display for SpectralType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
