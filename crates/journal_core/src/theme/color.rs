//! RGB colors with hex parsing and HSL lightening.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9A-Fa-f]{6})$").expect("valid hex color regex"));

/// Input is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl Display for ColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color `{}`; expected #RRGGBB", self.0)
    }
}

impl Error for ColorParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (leading `#` optional, case-insensitive).
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let digits = HEX_COLOR_RE
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| ColorParseError(trimmed.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError(trimmed.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns `(hue_degrees, saturation, lightness)`, the last two in `0..=1`.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return (0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (hue * 60.0, saturation, lightness)
    }

    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);
        if saturation == 0.0 {
            let gray = to_channel(lightness);
            return Self::new(gray, gray, gray);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;
        let h = hue.rem_euclid(360.0) / 360.0;

        Self::new(
            to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_channel(p, q, h)),
            to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Raises HSL lightness by `fraction` of its current value.
    ///
    /// `fraction` is clamped to `0..=1`; lightness saturates at white.
    pub fn lighten(self, fraction: f64) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        let (hue, saturation, lightness) = self.to_hsl();
        Self::from_hsl(hue, saturation, lightness + lightness * fraction)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::{ColorParseError, Rgb};

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#C769FF"), Ok(Rgb::new(0xC7, 0x69, 0xFF)));
        assert_eq!(Rgb::from_hex("fafafa"), Ok(Rgb::new(0xFA, 0xFA, 0xFA)));
        assert_eq!(
            Rgb::from_hex("#FFF"),
            Err(ColorParseError("#FFF".to_string()))
        );
    }

    #[test]
    fn lighten_scales_gray_lightness() {
        assert_eq!(Rgb::new(128, 128, 128).lighten(0.5), Rgb::new(192, 192, 192));
    }

    #[test]
    fn lighten_by_zero_keeps_color() {
        let purple = Rgb::new(0xC7, 0x69, 0xFF);
        assert_eq!(purple.lighten(0.0), purple);
    }

    #[test]
    fn lighten_saturates_at_white_and_leaves_black() {
        assert_eq!(
            Rgb::new(0xC7, 0x69, 0xFF).lighten(0.5).to_hex(),
            "#FFFFFF"
        );
        assert_eq!(Rgb::new(0, 0, 0).lighten(1.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn hsl_of_primary_purple() {
        let (hue, saturation, lightness) = Rgb::new(0xC7, 0x69, 0xFF).to_hsl();
        assert!((hue - 277.6).abs() < 0.1, "hue was {hue}");
        assert!((saturation - 1.0).abs() < 1e-9);
        assert!((lightness - 180.0 / 255.0).abs() < 1e-9);
    }
}
