//! Removal of synthesized stops

use super::reserved::is_reserved;
use super::types::ColorStop;

/// Drop every stop sitting exactly on a reserved position.
///
/// User stops that were nudged off a reserved position during synthesis are
/// kept, so this reverses `synthesize` up to that nudge.
pub fn undo(stops: &[ColorStop]) -> Vec<ColorStop> {
    stops
        .iter()
        .filter(|stop| !is_reserved(stop.position))
        .copied()
        .collect()
}
