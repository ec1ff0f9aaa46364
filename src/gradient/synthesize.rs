//! Stop synthesis
//!
//! Inserts one interpolated stop at each reserved position of a user
//! gradient. The steps are:
//!
//! 1. Skip gradients that already carry most reserved stops.
//! 2. Nudge user stops that sit exactly on a reserved position by
//!    [`DELTA_STOP`], so they survive a later `undo`.
//! 3. Build segments from the *unshifted* stops.
//! 4. Walk reserved positions and segments together, sampling each position
//!    from the first segment whose domain contains it.
//! 5. Merge and sort by position.

use tracing::debug;

use super::reserved::{is_reserved, looks_synthesized, reserved_positions, DELTA_STOP};
use super::segment::{build_segments, Segment};
use super::types::{ColorSpace, ColorStop};
use crate::Result;

/// Add perceptually interpolated stops at every reserved position.
///
/// Returns the input unchanged if it already looks synthesized. Reserved
/// positions before the first or after the last user stop take the color of
/// that stop, so the output always gains all reserved stops.
///
/// # Errors
/// `SynthesisPrecondition` if there are fewer than 2 stops, or positions are
/// unsorted or outside `[0, 1]`.
pub fn synthesize(stops: &[ColorStop], space: ColorSpace) -> Result<Vec<ColorStop>> {
    if looks_synthesized(stops) {
        debug!(stops = stops.len(), "gradient already synthesized, leaving it unchanged");
        return Ok(stops.to_vec());
    }

    let segments = build_segments(stops, space)?;

    let mut output: Vec<ColorStop> = stops
        .iter()
        .map(|stop| {
            if is_reserved(stop.position) {
                stop.shifted(DELTA_STOP)
            } else {
                *stop
            }
        })
        .collect();
    output.reserve(reserved_positions().len());

    let mut cursor = 0;
    for &position in reserved_positions() {
        cursor = advance_cursor(&segments, cursor, position);
        let color = segments[cursor].sample(position);
        output.push(ColorStop::new(position, color));
    }

    // Stable, so retained stops stay ahead of synthesized ones at equal positions
    output.sort_by(|a, b| a.position.total_cmp(&b.position));

    debug!(
        space = %space,
        input = stops.len(),
        output = output.len(),
        "synthesized gradient stops"
    );

    Ok(output)
}

/// Move `cursor` forward to the first segment containing `position`.
///
/// Segments are contiguous, so skipping every segment that ends before
/// `position` lands on the first one containing it. Never moves backward and
/// never leaves the segment list: a position before the first segment stays
/// on the first, one past the last segment stays on the last.
fn advance_cursor(segments: &[Segment], mut cursor: usize, position: f64) -> usize {
    let last = segments.len() - 1;
    while cursor < last && position > segments[cursor].domain_end {
        cursor += 1;
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{undo, Argb};
    use crate::ChromaticError;
    use proptest::prelude::*;

    fn red_to_blue() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Argb::from_components(255, 255, 0, 0)),
            ColorStop::new(1.0, Argb::from_components(255, 0, 0, 255)),
        ]
    }

    fn is_sorted(stops: &[ColorStop]) -> bool {
        stops.windows(2).all(|w| w[0].position <= w[1].position)
    }

    #[test]
    fn test_two_stop_lab() {
        let out = synthesize(&red_to_blue(), ColorSpace::Lab).unwrap();
        assert_eq!(out.len(), 17);
        assert!(is_sorted(&out));
        assert_eq!(out[0], red_to_blue()[0]);
        assert_eq!(out[16], red_to_blue()[1]);

        assert_eq!(out[8].position, 0.5);
        let mid = out[8].color.components();
        assert!((198..=206).contains(&mid.r), "r = {}", mid.r);
        assert!(mid.g <= 4, "g = {}", mid.g);
        assert!((132..=140).contains(&mid.b), "b = {}", mid.b);
        // Naive sRGB average would be (128, 0, 128)
        assert_ne!(out[8].color, Argb::from_components(255, 128, 0, 128));
    }

    #[test]
    fn test_every_reserved_position_present() {
        let out = synthesize(&red_to_blue(), ColorSpace::Lch).unwrap();
        for &p in reserved_positions() {
            assert_eq!(out.iter().filter(|s| s.position == p).count(), 1, "position {}", p);
        }
    }

    #[test]
    fn test_user_stop_on_reserved_position_is_shifted() {
        let stops = vec![
            ColorStop::new(0.0, Argb::parse("red").unwrap()),
            ColorStop::new(0.5, Argb::parse("white").unwrap()),
            ColorStop::new(1.0, Argb::parse("blue").unwrap()),
        ];
        let out = synthesize(&stops, ColorSpace::Lab).unwrap();
        assert_eq!(out.len(), 18);
        assert!(is_sorted(&out));

        let shifted = out
            .iter()
            .find(|s| s.position == 0.5 + DELTA_STOP)
            .expect("shifted user stop");
        assert_eq!(shifted.color, stops[1].color);

        // The synthesized stop at 0.5 comes from the unshifted white stop
        let at_half = out.iter().find(|s| s.position == 0.5).unwrap();
        let c = at_half.color.components();
        assert!(c.r >= 254 && c.g >= 254 && c.b >= 254, "{:?}", c);
    }

    #[test]
    fn test_multi_segment_scan() {
        let stops = vec![
            ColorStop::new(0.0, Argb::parse("black").unwrap()),
            ColorStop::new(0.2, Argb::parse("red").unwrap()),
            ColorStop::new(0.7, Argb::parse("yellow").unwrap()),
            ColorStop::new(1.0, Argb::parse("white").unwrap()),
        ];
        let out = synthesize(&stops, ColorSpace::Lrgb).unwrap();
        assert_eq!(out.len(), 19);
        assert!(is_sorted(&out));

        // 0.375 lies in the red -> yellow segment: red stays saturated, no blue
        let c = out.iter().find(|s| s.position == 0.375).unwrap().color.components();
        assert_eq!(c.r, 255);
        assert!(c.g > 0 && c.g < 255);
        assert_eq!(c.b, 0);
    }

    #[test]
    fn test_positions_outside_user_span_clamp() {
        let stops = vec![
            ColorStop::new(0.3, Argb::parse("red").unwrap()),
            ColorStop::new(0.6, Argb::parse("blue").unwrap()),
        ];
        let out = synthesize(&stops, ColorSpace::Lab).unwrap();
        assert_eq!(out.len(), 17);

        let red = out.iter().find(|s| s.position == 0.0625).unwrap().color.components();
        let last = out.iter().find(|s| s.position == 0.9375).unwrap();
        assert!(red.r >= 254 && red.g <= 1 && red.b <= 1, "{:?}", red);
        let blue = last.color.components();
        assert!(blue.r <= 1 && blue.g <= 1 && blue.b >= 254, "{:?}", blue);
    }

    #[test]
    fn test_positions_before_span_use_first_segment() {
        let stops = vec![
            ColorStop::new(0.5, Argb::parse("red").unwrap()),
            ColorStop::new(0.75, Argb::parse("lime").unwrap()),
            ColorStop::new(1.0, Argb::parse("blue").unwrap()),
        ];
        let out = synthesize(&stops, ColorSpace::Lab).unwrap();
        let early = out.iter().find(|s| s.position == 0.125).unwrap().color.components();
        assert!(early.r >= 254 && early.g <= 1 && early.b <= 1, "{:?}", early);
    }

    #[test]
    fn test_already_synthesized_is_unchanged() {
        let once = synthesize(&red_to_blue(), ColorSpace::Lab).unwrap();
        let twice = synthesize(&once, ColorSpace::Lch).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_partial_reserved_still_synthesizes() {
        // 11 of 15 reserved positions is below the 12-stop threshold
        let mut stops = red_to_blue();
        for &p in reserved_positions().iter().take(11) {
            stops.push(ColorStop::new(p, Argb::OPAQUE_BLACK));
        }
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));

        let out = synthesize(&stops, ColorSpace::Lab).unwrap();
        assert_eq!(out.len(), stops.len() + 15);
        assert!(is_sorted(&out));
    }

    #[test]
    fn test_single_stop_is_precondition_error() {
        let result = synthesize(&red_to_blue()[..1], ColorSpace::Lab);
        assert!(matches!(result, Err(ChromaticError::SynthesisPrecondition(_))));
    }

    #[test]
    fn test_undo_restores_input() {
        let stops = red_to_blue();
        for space in ColorSpace::ALL {
            let out = synthesize(&stops, space).unwrap();
            assert_eq!(undo(&out), stops);
        }
    }

    fn gradient_strategy() -> impl Strategy<Value = Vec<ColorStop>> {
        // Mix of arbitrary positions and exact reserved positions
        let position = prop_oneof![
            (0.0f64..=1.0),
            (1usize..16).prop_map(|i| i as f64 / 16.0),
        ];
        prop::collection::vec((position, any::<u32>()), 2..8).prop_map(|raw| {
            let mut stops: Vec<ColorStop> = raw
                .into_iter()
                .map(|(p, c)| ColorStop::new(p, Argb(c)))
                .collect();
            stops.sort_by(|a, b| a.position.total_cmp(&b.position));
            stops
        })
    }

    proptest! {
        #[test]
        fn prop_output_sorted(stops in gradient_strategy()) {
            for space in ColorSpace::ALL {
                let out = synthesize(&stops, space).unwrap();
                prop_assert!(is_sorted(&out));
            }
        }

        #[test]
        fn prop_undo_roundtrip_modulo_shift(stops in gradient_strategy()) {
            let mut expected: Vec<ColorStop> = stops
                .iter()
                .map(|s| if is_reserved(s.position) { s.shifted(DELTA_STOP) } else { *s })
                .collect();
            // A shift can carry a stop past a close neighbour
            expected.sort_by(|a, b| a.position.total_cmp(&b.position));
            let out = synthesize(&stops, ColorSpace::Lab).unwrap();
            prop_assert_eq!(out.len(), stops.len() + 15);
            prop_assert_eq!(undo(&out), expected);
        }
    }
}
