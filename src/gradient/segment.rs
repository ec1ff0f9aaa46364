//! Per-segment color interpolation
//!
//! A gradient with N stops is split into N-1 independent segments, one per
//! consecutive pair. Each segment interpolates only between its own two
//! endpoints in the requested color space; there is no spline across the
//! whole gradient.
//!
//! Segments are sampled with the raw axis position. The segment maps it onto
//! its own domain, so callers never normalize.
//!
//! `lrgb` blends in exact linear-light sRGB, not the gamma-2 approximation
//! chroma.js uses for its `lrgb` mode; a white to black midpoint is ~188, not 180.
//!
//! In `lch`, a grey endpoint has no meaningful hue and takes the hue of the
//! other endpoint, so the blend never sweeps through unrelated hues.

use palette::white_point::D65;
use palette::{FromColor, Laba, Lcha, LinSrgba, Mix, Srgba};

use super::color::Argb;
use super::types::{ColorSpace, ColorStop};
use crate::{ChromaticError, Result};

/// Below this LCh chroma a color counts as grey. Well under a just noticeable
/// difference, and above the residue f32 sRGB to Lab conversion leaves on greys.
const ACHROMATIC_CHROMA: f32 = 0.5;

/// Endpoint colors converted into the interpolation space.
#[derive(Debug, Clone, Copy)]
enum Interpolator {
    Lab(Laba<D65, f32>, Laba<D65, f32>),
    Lrgb(LinSrgba<f32>, LinSrgba<f32>),
    Lch(Lcha<D65, f32>, Lcha<D65, f32>),
}

impl Interpolator {
    fn new(from: Srgba<f32>, to: Srgba<f32>, space: ColorSpace) -> Self {
        match space {
            ColorSpace::Lab => Interpolator::Lab(Laba::from_color(from), Laba::from_color(to)),
            ColorSpace::Lrgb => Interpolator::Lrgb(from.into_linear(), to.into_linear()),
            ColorSpace::Lch => {
                let (mut a, mut b) = (Lcha::from_color(from), Lcha::from_color(to));
                if a.chroma < ACHROMATIC_CHROMA {
                    a.hue = b.hue;
                } else if b.chroma < ACHROMATIC_CHROMA {
                    b.hue = a.hue;
                }
                Interpolator::Lch(a, b)
            }
        }
    }

    /// `factor` is the blend fraction in `[0, 1]`.
    fn at(&self, factor: f32) -> Srgba<f32> {
        match *self {
            Interpolator::Lab(a, b) => Srgba::from_color(a.mix(b, factor)),
            Interpolator::Lrgb(a, b) => Srgba::from_linear(a.mix(b, factor)),
            Interpolator::Lch(a, b) => Srgba::from_color(a.mix(b, factor)),
        }
    }
}

/// Interpolation unit spanning two consecutive stops.
///
/// The domain is inclusive at both ends. Adjacent segments share their
/// boundary position.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub domain_start: f64,
    pub domain_end: f64,
    space: ColorSpace,
    interpolator: Interpolator,
}

impl Segment {
    pub fn new(from: &ColorStop, to: &ColorStop, space: ColorSpace) -> Self {
        Self {
            domain_start: from.position,
            domain_end: to.position,
            space,
            interpolator: Interpolator::new(from.color.to_srgba(), to.color.to_srgba(), space),
        }
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn contains(&self, position: f64) -> bool {
        self.domain_start <= position && position <= self.domain_end
    }

    /// Interpolated color at an axis position.
    ///
    /// Positions outside the domain clamp to the nearest endpoint. A
    /// zero-width segment (a hard edge) yields its end color.
    pub fn color_at(&self, position: f64) -> Srgba<f32> {
        let width = self.domain_end - self.domain_start;
        let factor = if width > 0.0 {
            ((position - self.domain_start) / width).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.interpolator.at(factor as f32)
    }

    /// Interpolated color at an axis position, packed for the host.
    pub fn sample(&self, position: f64) -> Argb {
        Argb::from_srgba(self.color_at(position))
    }
}

/// Check that stops can be segmented: at least two, finite positions in
/// `[0, 1]`, non-decreasing.
pub fn validate_stops(stops: &[ColorStop]) -> Result<()> {
    if stops.len() < 2 {
        return Err(ChromaticError::SynthesisPrecondition(format!(
            "At least 2 color stops are required, got {}",
            stops.len()
        )));
    }

    if let Some(bad) = stops
        .iter()
        .find(|s| !s.position.is_finite() || !(0.0..=1.0).contains(&s.position))
    {
        return Err(ChromaticError::SynthesisPrecondition(format!(
            "Stop position {} is outside [0, 1]",
            bad.position
        )));
    }

    if let Some(i) = stops.windows(2).position(|w| w[0].position > w[1].position) {
        return Err(ChromaticError::SynthesisPrecondition(format!(
            "Stops are not sorted: position {} follows {}",
            stops[i + 1].position,
            stops[i].position
        )));
    }

    Ok(())
}

/// Build one segment per adjacent pair of stops.
///
/// # Arguments
/// * `stops` - User stops, ascending by position (at least 2)
/// * `space` - Color space every segment interpolates in
///
/// # Returns
/// `stops.len() - 1` segments, in axis order
pub fn build_segments(stops: &[ColorStop], space: ColorSpace) -> Result<Vec<Segment>> {
    validate_stops(stops)?;

    Ok(stops
        .windows(2)
        .map(|pair| Segment::new(&pair[0], &pair[1], space))
        .collect())
}
