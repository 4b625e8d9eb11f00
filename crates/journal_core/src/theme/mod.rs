//! Application color theme.
//!
//! # Responsibility
//! - Hold the named palette used by the journal screens.
//! - Derive the field underline color from the primary color.
//!
//! # Invariants
//! - The theme is immutable and shared process-wide.

pub mod color;

use color::Rgb;
use once_cell::sync::Lazy;

/// Purple.
pub const PRIMARY_COLOR: Rgb = Rgb::new(0xC7, 0x69, 0xFF);
/// Light grey.
pub const REV_PRIMARY_COLOR: Rgb = Rgb::new(0xFA, 0xFA, 0xFA);
/// Near-black grey.
pub const SECONDARY_COLOR: Rgb = Rgb::new(0x35, 0x35, 0x35);
pub const REV_SECONDARY_COLOR: Rgb = Rgb::new(0xC2, 0xBC, 0xC5);
pub const WHITE_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Lightening applied to the primary color for field underlines.
pub const FIELD_ID_LIGHTEN_FRACTION: f64 = 0.5;

static THEME: Lazy<ThemeColors> = Lazy::new(ThemeColors::derive);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub header_background_color: Rgb,
    pub header_foreground_color: Rgb,
    pub action_button_color: Rgb,
    pub field_id_color: Rgb,
}

impl ThemeColors {
    fn derive() -> Self {
        Self {
            header_background_color: WHITE_COLOR,
            header_foreground_color: WHITE_COLOR,
            action_button_color: PRIMARY_COLOR,
            field_id_color: PRIMARY_COLOR.lighten(FIELD_ID_LIGHTEN_FRACTION),
        }
    }

    /// Named entries as `(name, #RRGGBB)` pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, String); 4] {
        [
            ("headerBackgroundColor", self.header_background_color.to_hex()),
            ("headerForegroundColor", self.header_foreground_color.to_hex()),
            ("actionButtonColor", self.action_button_color.to_hex()),
            ("fieldIdColor", self.field_id_color.to_hex()),
        ]
    }
}

/// Process-wide theme.
pub fn theme() -> &'static ThemeColors {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::{theme, PRIMARY_COLOR, WHITE_COLOR};

    #[test]
    fn field_id_color_is_derived_from_primary() {
        let colors = theme();
        assert_eq!(colors.action_button_color, PRIMARY_COLOR);
        assert_eq!(colors.field_id_color, PRIMARY_COLOR.lighten(0.5));
        assert_eq!(colors.field_id_color, WHITE_COLOR);
    }

    #[test]
    fn entries_use_hex_strings() {
        let entries = theme().entries();
        assert_eq!(entries[2], ("actionButtonColor", "#C769FF".to_string()));
        assert_eq!(entries[3].0, "fieldIdColor");
    }
}
