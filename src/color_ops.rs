use core::fmt;
use core::str::FromStr;

use palette::{FromColor, Hsl, Lab, Srgb, Xyz, white_point::D65};

use crate::error::{Error, MalformedReason, Result};

/// CIE L*a*b* color, only ever produced from a [`Color`]
pub type LabColor = Lab<D65, f64>;

/// CIE XYZ color relative to the D65 reference white
pub type XyzColor = Xyz<D65, f64>;

/// Reference white used when normalizing XYZ before the Lab transform
const REF_X: f64 = 0.95047;
const REF_Y: f64 = 1.0;
const REF_Z: f64 = 1.08883;

/// Breakpoint between the cube root and the linear segment of the Lab transfer function
const LAB_EPSILON: f64 = 0.008856;

/// An sRGB color with 8-bit channels, written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(Srgb<u8>);

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Parse 6 hex digits, with or without a leading `#`, case-insensitive
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let length = digits.chars().count();
        if length != 6 {
            return Err(Error::malformed_color(
                hex,
                MalformedReason::WrongLength(length),
            ));
        }
        let mut value = 0u32;
        for c in digits.chars() {
            let nibble = c
                .to_digit(16)
                .ok_or_else(|| Error::malformed_color(hex, MalformedReason::InvalidDigit(c)))?;
            value = (value << 4) | nibble;
        }
        Ok(Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }

    pub fn red(self) -> u8 {
        self.0.red
    }

    pub fn green(self) -> u8 {
        self.0.green
    }

    pub fn blue(self) -> u8 {
        self.0.blue
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    pub fn to_lab(self) -> LabColor {
        xyz_to_lab(rgb_to_xyz(self))
    }

    /// Hue, saturation and lightness rounded to whole degrees and percent
    pub fn to_hsl(self) -> HslView {
        let hsl = Hsl::<palette::encoding::Srgb, f64>::from_color(self.0.into_format::<f64>());
        HslView {
            hue: hsl.hue.into_positive_degrees().round() as u16,
            saturation: (hsl.saturation * 100.0).round() as u8,
            lightness: (hsl.lightness * 100.0).round() as u8,
        }
    }

    /// Blend this color over `background` with the given opacity
    ///
    /// Each channel is `self * alpha + background * (1 - alpha)`, rounded to the nearest integer.
    pub fn composite_over(self, background: Color, alpha: f64) -> Color {
        let alpha = alpha.clamp(0.0, 1.0);
        let blend = |fg: u8, bg: u8| {
            (f64::from(fg) * alpha + f64::from(bg) * (1.0 - alpha)).round() as u8
        };
        Color::new(
            blend(self.red(), background.red()),
            blend(self.green(), background.green()),
            blend(self.blue(), background.blue()),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red(), self.green(), self.blue())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Rounded HSL components, for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslView {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for HslView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}°, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Decode an 8-bit sRGB channel to linear light
pub fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert to CIE XYZ with the sRGB primaries
pub fn rgb_to_xyz(color: Color) -> XyzColor {
    let r = srgb_to_linear(color.red());
    let g = srgb_to_linear(color.green());
    let b = srgb_to_linear(color.blue());
    Xyz::new(
        r * 0.4124 + g * 0.3576 + b * 0.1805,
        r * 0.2126 + g * 0.7152 + b * 0.0722,
        r * 0.0193 + g * 0.1192 + b * 0.9505,
    )
}

pub fn xyz_to_lab(xyz: XyzColor) -> LabColor {
    let fx = lab_transfer(xyz.x / REF_X);
    let fy = lab_transfer(xyz.y / REF_Y);
    let fz = lab_transfer(xyz.z / REF_Z);
    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

fn lab_transfer(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Parse a hex color and convert it straight to Lab
pub fn hex_to_lab(hex: &str) -> Result<LabColor> {
    Ok(Color::from_hex(hex)?.to_lab())
}
