//! Packed ARGB color codec
//!
//! Host documents store colors as a single 32-bit integer whose bytes are,
//! from most to least significant, alpha, red, green and blue. This module
//! converts between that packed form, a component record, CSS color strings,
//! and the `palette` sRGB type used for interpolation.
//!
//! Unpacking always reads four fixed byte lanes, so a color whose alpha is
//! zero unpacks the same way as an opaque one.
//!
//! Alpha travels into the interpolation color and is blended like the other
//! channels. Hosts that feed chroma.js only `rgb(r, g, b)` get alpha 255 on
//! every interpolated stop; here a translucent endpoint yields translucent
//! stops, and fully opaque gradients still yield 255.

use palette::Srgba;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ChromaticError;

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

/// Unpacked ARGB channels, each in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgbComponents {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const OPAQUE_BLACK: Argb = Argb(0xff00_0000);

    /// Pack four channels in alpha, red, green, blue order.
    pub fn from_components(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(u32::from_be_bytes([a, r, g, b]))
    }

    /// Split into channels. Every byte lane is read, including a zero alpha.
    pub fn components(&self) -> ArgbComponents {
        let [a, r, g, b] = self.0.to_be_bytes();
        ArgbComponents { a, r, g, b }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn alpha(&self) -> u8 {
        self.components().a
    }

    /// Parse any CSS color (`"red"`, `"#ff000080"`, `"rgb(0 128 255)"`, ...).
    pub fn parse(value: &str) -> crate::Result<Self> {
        let parsed = csscolorparser::parse(value)
            .map_err(|e| ChromaticError::InvalidColor(format!("'{}': {}", value, e)))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Argb::from_components(a, r, g, b))
    }

    /// CSS hex form: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_css_hex(&self) -> String {
        let c = self.components();
        csscolorparser::Color::from_rgba8(c.r, c.g, c.b, c.a).to_css_hex()
    }

    /// Convert to the interpolation library's color type.
    pub fn to_srgba(&self) -> Srgba<f32> {
        self.components().to_srgba()
    }

    /// Convert back from the interpolation library's color type.
    pub fn from_srgba(color: Srgba<f32>) -> Self {
        ArgbComponents::from_srgba(color).pack()
    }
}

impl ArgbComponents {
    pub fn pack(&self) -> Argb {
        Argb::from_components(self.a, self.r, self.g, self.b)
    }

    /// Channels are rescaled to `[0, 1]`; alpha rides along in the alpha lane.
    pub fn to_srgba(&self) -> Srgba<f32> {
        Srgba::new(self.r, self.g, self.b, self.a).into_format()
    }

    /// Round each channel back into `0..=255`.
    ///
    /// Color channels are clamped before rounding since interpolated colors
    /// may fall slightly outside the sRGB gamut. Alpha is rounded half-up and
    /// then capped at 255.
    pub fn from_srgba(color: Srgba<f32>) -> Self {
        Self {
            a: (color.alpha.max(0.0) * 255.0).round().min(255.0) as u8,
            r: unit_to_byte(color.red),
            g: unit_to_byte(color.green),
            b: unit_to_byte(color.blue),
        }
    }
}

fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_css_hex())
    }
}

impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css_hex())
    }
}

/// Documents may carry either the host's packed integer or a CSS string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Packed(u32),
    Css(String),
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match RawColor::deserialize(deserializer)? {
            RawColor::Packed(value) => Ok(Argb(value)),
            RawColor::Css(value) => Argb::parse(&value).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pack_byte_order() {
        assert_eq!(Argb::from_components(0xff, 0x12, 0x34, 0x56).value(), 0xff123456);
        // Single-digit channels must not bleed into their neighbours
        assert_eq!(Argb::from_components(5, 6, 7, 8).value(), 0x05060708);
    }

    #[test]
    fn test_unpack_opaque() {
        let c = Argb(0xff804020).components();
        assert_eq!(c, ArgbComponents { a: 0xff, r: 0x80, g: 0x40, b: 0x20 });
    }

    #[test]
    fn test_unpack_zero_alpha() {
        // Renders as fewer than 8 hex digits; channels must still line up
        let c = Argb(0x00ff0001).components();
        assert_eq!(c, ArgbComponents { a: 0, r: 0xff, g: 0, b: 1 });
    }

    #[test]
    fn test_parse_css_colors() {
        assert_eq!(Argb::parse("red").unwrap(), Argb(0xffff0000));
        assert_eq!(Argb::parse("#0000ff").unwrap(), Argb(0xff0000ff));
        assert_eq!(Argb::parse("#00ff0080").unwrap(), Argb(0x8000ff00));
        assert!(Argb::parse("notacolor").is_err());
    }

    #[test]
    fn test_css_hex() {
        assert_eq!(Argb(0xffff0000).to_css_hex(), "#ff0000");
        assert_eq!(Argb(0x8000ff00).to_css_hex(), "#00ff0080");
    }

    #[test]
    fn test_srgba_roundtrip() {
        for value in [0xff000000u32, 0xffffffff, 0x80123456, 0x01fedcba] {
            let color = Argb(value);
            assert_eq!(Argb::from_srgba(color.to_srgba()), color);
        }
    }

    #[test]
    fn test_from_srgba_clamps_overshoot() {
        let c = ArgbComponents::from_srgba(Srgba::new(1.2, -0.1, 0.5, 1.0001));
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 128);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn test_alpha_rounds_half_up() {
        // 0.5 * 255 = 127.5
        let c = ArgbComponents::from_srgba(Srgba::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(c.a, 128);
    }

    #[test]
    fn test_serde_accepts_integer_and_css() {
        let from_int: Argb = serde_json::from_str("4294901760").unwrap();
        assert_eq!(from_int, Argb(0xffff0000));
        let from_css: Argb = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(from_css, Argb(0xff0000ff));
        assert!(serde_json::from_str::<Argb>("\"nope\"").is_err());
        assert_eq!(serde_json::to_string(&Argb(0xff00ff00)).unwrap(), "\"#00ff00\"");
    }

    proptest! {
        #[test]
        fn prop_pack_unpack_roundtrip(a in 1u8.., r: u8, g: u8, b: u8) {
            let expected = ArgbComponents { a, r, g, b };
            prop_assert_eq!(Argb::from_components(a, r, g, b).components(), expected);
        }

        #[test]
        fn prop_pack_unpack_roundtrip_zero_alpha(r: u8, g: u8, b: u8) {
            let packed = Argb::from_components(0, r, g, b);
            prop_assert!(packed.value() < 0x0100_0000);
            prop_assert_eq!(packed.components(), ArgbComponents { a: 0, r, g, b });
        }
    }
}
