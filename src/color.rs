//! Pixel color for monochrome OLED panels
//!
//! The SSD1306 stores one bit per pixel: a set bit lights the pixel under
//! normal polarity. [`Color`] names the two states and provides the fill byte
//! used when clearing a whole page column.
//!
//! ## Example
//!
//! ```
//! use ssd1306_packed::Color;
//!
//! assert_eq!(Color::On.fill_byte(), 0xFF);
//! assert_eq!(Color::Off.fill_byte(), 0x00);
//! assert_eq!(Color::from(true), Color::On);
//! ```

/// Pixel state of a 1-bit display
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub enum Color {
    /// Pixel dark (bit cleared)
    #[default]
    Off,
    /// Pixel lit (bit set)
    On,
}

impl Color {
    /// Byte value with all eight stacked pixels in this state
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }

    /// Whether the pixel is lit
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Off => Self::Off,
            Color::On => Self::On,
        }
    }
}
