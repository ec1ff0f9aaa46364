//! Value types shared across the gradient core

use serde::{Deserialize, Serialize};

use super::color::Argb;
use crate::ChromaticError;

/// One point on a gradient axis.
///
/// Positions live in `[0, 1]`. Uniqueness is not enforced here; the
/// synthesizer keeps its own output collision-free.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Offset along the gradient axis
    pub position: f64,
    /// Packed ARGB color
    pub color: Argb,
}

impl ColorStop {
    pub fn new(position: f64, color: Argb) -> Self {
        Self { position, color }
    }

    /// Copy of this stop moved by `delta` along the axis, color unchanged.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            position: self.position + delta,
            color: self.color,
        }
    }
}

/// Color space used to interpolate between two stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// CIE L*a*b* (D65). Perceptually uniform lightness.
    #[default]
    Lab,
    /// Linear-light sRGB. Physically correct blending, no hue shift.
    Lrgb,
    /// CIE LCh(ab), the cylindrical form of Lab. Hue takes the shortest arc.
    Lch,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 3] = [ColorSpace::Lab, ColorSpace::Lrgb, ColorSpace::Lch];

    /// Canonical name for parsing and display
    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Lab => "lab",
            ColorSpace::Lrgb => "lrgb",
            ColorSpace::Lch => "lch",
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ChromaticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lab" => Ok(ColorSpace::Lab),
            "lrgb" => Ok(ColorSpace::Lrgb),
            "lch" => Ok(ColorSpace::Lch),
            other => Err(ChromaticError::SynthesisPrecondition(format!(
                "Unknown color space '{}'. Expected one of: lab, lrgb, lch",
                other
            ))),
        }
    }
}
