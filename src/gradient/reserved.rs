//! Reserved stop positions and the constants tied to them

use std::sync::LazyLock;

use super::types::ColorStop;

/// The gradient axis is divided into this many equal steps. The interior
/// step boundaries are the reserved positions.
pub const NUMBER_OF_CHROMATIC_STOPS: usize = 16;

/// Offset applied to a user stop sitting exactly on a reserved position.
/// A power of two, so the shifted value is exact and never a multiple of 1/16.
pub const DELTA_STOP: f64 = 1.0 / 1024.0;

/// Fraction of reserved positions that must already be occupied for a
/// gradient to be treated as already synthesized.
pub const SYNTHESIZED_THRESHOLD: f64 = 0.75;

/// `1/16, 2/16, ..., 15/16`, ascending.
static RESERVED_POSITIONS: LazyLock<Vec<f64>> = LazyLock::new(|| {
    (1..NUMBER_OF_CHROMATIC_STOPS)
        .map(|i| i as f64 / NUMBER_OF_CHROMATIC_STOPS as f64)
        .collect()
});

pub fn reserved_positions() -> &'static [f64] {
    &RESERVED_POSITIONS
}

/// Exact comparison; shifted or hand-placed stops near a reserved
/// position do not count.
pub fn is_reserved(position: f64) -> bool {
    RESERVED_POSITIONS.contains(&position)
}

/// Number of stops sitting exactly on a reserved position.
pub fn count_reserved(stops: &[ColorStop]) -> usize {
    stops.iter().filter(|s| is_reserved(s.position)).count()
}

/// Whether `stops` already carries the synthesized stops.
pub fn looks_synthesized(stops: &[ColorStop]) -> bool {
    count_reserved(stops) as f64 >= SYNTHESIZED_THRESHOLD * NUMBER_OF_CHROMATIC_STOPS as f64
}
