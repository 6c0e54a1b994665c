use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::ChartResult;

/// Palette shared by every chart frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub background: Color,
    pub card: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    /// Opacity applied to grid lines drawn in `border`.
    pub grid_opacity: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(0x0F, 0x12, 0x22, 0xFF),
            card: Color::from_rgba8(0x1C, 0x22, 0x36, 0xFF),
            text_primary: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0xFF),
            text_secondary: Color::from_rgba8(0x9A, 0xA2, 0xB1, 0xFF),
            accent: Color::from_rgba8(0x35, 0xE0, 0x8B, 0xFF),
            border: Color::from_rgba8(0x2C, 0x35, 0x50, 0xFF),
            error: Color::from_rgba8(0xFF, 0x6B, 0x6B, 0xFF),
            success: Color::from_rgba8(0x4E, 0xCD, 0xC4, 0xFF),
            warning: Color::from_rgba8(0xFF, 0xE6, 0x6D, 0xFF),
            grid_opacity: 0.3,
        }
    }
}

impl ChartTheme {
    #[must_use]
    pub fn grid_color(&self) -> Color {
        self.border.with_alpha(self.grid_opacity)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.background,
            self.card,
            self.text_primary,
            self.text_secondary,
            self.accent,
            self.border,
            self.error,
            self.success,
            self.warning,
        ] {
            color.validate()?;
        }
        self.grid_color().validate()
    }
}
