//! RGB565 colors and the selectable palette

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 16-bit RGB565 color as sent to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    /// Default work color
    pub const GOLD: Color = Color(0xFCE0);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const PINK: Color = Color(0xFBF9);
    pub const INTERNATIONAL_ORANGE: Color = Color(0xFA00);
    pub const LIME: Color = Color(0x87E0);
    pub const MINT: Color = Color(0x87FF);
    pub const TURQUOISE: Color = Color(0x04FF);
    pub const DARK_BLUE: Color = Color(0x000F);
    pub const NAVY: Color = Color(0x0010);
    pub const INDIGO: Color = Color(0x4810);
    pub const VIOLET: Color = Color(0x901A);
    pub const PURPLE: Color = Color(0x780F);
    pub const COFFEE: Color = Color(0x8200);
    pub const DARK_GREEN: Color = Color(0x0400);

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel (0-31)
    pub const fn r(self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    /// Green channel (0-63)
    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn b(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Per-channel inversion
    pub const fn inverted(self) -> Color {
        let r = 0x1F - self.r() as u16;
        let g = 0x3F - self.g() as u16;
        let b = 0x1F - self.b() as u16;
        Color((r << 11) | (g << 5) | b)
    }

    /// Check for the "not set" sentinel used by the rest color
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

/// Number of palette entries
pub const PALETTE_SIZE: usize = 20;

/// Colors offered by the palette grid, in cell order
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::RED,
    Color::PINK,
    Color::INTERNATIONAL_ORANGE,
    Color::YELLOW,
    Color::LIME,
    Color::GREEN,
    Color::MINT,
    Color::CYAN,
    Color::TURQUOISE,
    Color::BLUE,
    Color::DARK_BLUE,
    Color::NAVY,
    Color::INDIGO,
    Color::VIOLET,
    Color::PURPLE,
    Color::MAGENTA,
    Color::GOLD,
    Color::COFFEE,
    Color::WHITE,
    Color::DARK_GREEN,
];

/// Palette color at `index`, if in range
pub fn palette_color(index: u8) -> Option<Color> {
    PALETTE.get(index as usize).copied()
}
