//! Packed pixel buffer in the controller's native page layout
//!
//! The SSD1306 organises its RAM in pages: horizontal strips 8 native rows
//! tall. Each byte holds 8 vertically stacked pixels of one native column,
//! bit 0 being the top row of the page.
//!
//! Index 0 of the buffer holds the data control byte so the whole buffer can be
//! written to the bus in one transfer. With [`Scale::Two`] each logical column
//! maps to two adjacent native columns that always hold the same byte.
//!
//! ## Example
//!
//! ```
//! use ssd1306_packed::buffer::pixel_address;
//!
//! // 128 native columns, scale 1: pixel (0, 0) is byte 1, bit 0
//! assert_eq!(pixel_address(0, 0, 1, 128), (1, 0x01));
//!
//! // Pixel (3, 9) is on the second page, bit 1
//! assert_eq!(pixel_address(3, 9, 1, 128), (132, 0x02));
//!
//! // With scale 2 logical column 3 starts at native column 6
//! assert_eq!(pixel_address(3, 3, 2, 128), (7, 0x08));
//! ```

use crate::color::Color;
use crate::command::CONTROL_DATA;
use crate::config::{Dimensions, MAX_COLS, MAX_ROWS, Scale};

/// Size of the backing storage: framing byte plus a full 128x64 frame
pub const MAX_BUFFER_SIZE: usize = 1 + (MAX_COLS as usize * MAX_ROWS as usize) / 8;

/// Map a logical pixel to its first byte index and bit mask
///
/// The remaining `scale - 1` mirrored bytes follow the returned index.
/// Callers are responsible for bounds checking.
///
/// # Arguments
///
/// * `x` - Logical column
/// * `y` - Logical row
/// * `scale` - Scale factor (1 or 2)
/// * `native_width` - Native columns per page
pub fn pixel_address(x: u32, y: u32, scale: u8, native_width: u16) -> (usize, u8) {
    let page = y / 8;
    let index = (x * scale as u32 + page * native_width as u32 + 1) as usize;
    let mask = 1 << (y % 8);
    (index, mask)
}

/// Owned packed pixel buffer
///
/// Never reallocated; the live length is fixed at construction.
#[derive(Clone, Debug)]
pub struct DisplayBuffer {
    bytes: [u8; MAX_BUFFER_SIZE],
    len: usize,
    scale: Scale,
    native_width: u16,
    width: u16,
    height: u16,
}

impl DisplayBuffer {
    /// Allocate a cleared buffer for the given native geometry and scale
    pub fn new(dimensions: Dimensions, scale: Scale) -> Self {
        let factor = scale.factor() as u16;
        let width = dimensions.cols / factor;
        let height = dimensions.rows / factor;
        let len = 1 + (dimensions.cols as usize * height as usize) / 8;

        let mut bytes = [0u8; MAX_BUFFER_SIZE];
        bytes[0] = CONTROL_DATA;

        Self {
            bytes,
            len,
            scale,
            native_width: dimensions.cols,
            width,
            height,
        }
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Scale this buffer was laid out for
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Buffer length including the framing byte
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`
    ///
    /// Even a cleared buffer carries the framing byte at index 0, so
    /// [`len`](Self::len) is never zero.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The framing byte followed by the packed pixel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Packed pixel data without the framing byte
    pub fn pixels(&self) -> &[u8] {
        &self.bytes[1..self.len]
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(pixel_address(
            x as u32,
            y as u32,
            self.scale.factor(),
            self.native_width,
        ))
    }

    /// Set or clear one logical pixel
    ///
    /// Returns `false` without touching the buffer when out of range.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        let Some((index, mask)) = self.locate(x, y) else {
            return false;
        };
        let mirrored = &mut self.bytes[index..index + self.scale.factor() as usize];
        for byte in mirrored.iter_mut() {
            match color {
                Color::On => *byte |= mask,
                Color::Off => *byte &= !mask,
            }
        }
        true
    }

    /// Read one logical pixel; out of range reads as [`Color::Off`]
    pub fn get(&self, x: i32, y: i32) -> Color {
        match self.locate(x, y) {
            Some((index, mask)) => Color::from(self.bytes[index] & mask != 0),
            None => Color::Off,
        }
    }

    /// The `scale` mirrored bytes holding logical pixel (x, y)
    pub fn column(&self, x: i32, y: i32) -> Option<&[u8]> {
        let (index, _) = self.locate(x, y)?;
        Some(&self.bytes[index..index + self.scale.factor() as usize])
    }

    /// Fill every data byte, leaving the framing byte alone
    pub fn fill(&mut self, color: Color) {
        self.bytes[1..self.len].fill(color.fill_byte());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(scale: Scale) -> DisplayBuffer {
        DisplayBuffer::new(Dimensions::new(64, 128).unwrap(), scale)
    }

    #[test]
    fn test_buffer_sizes() {
        let one = buffer(Scale::One);
        assert_eq!(one.len(), 1 + 128 * 64 / 8);
        assert_eq!((one.width(), one.height()), (128, 64));

        let two = buffer(Scale::Two);
        assert_eq!(two.len(), 513);
        assert_eq!((two.width(), two.height()), (64, 32));

        assert_eq!(MAX_BUFFER_SIZE, 1025);
    }

    #[test]
    fn test_new_buffer_is_clear_with_framing_byte() {
        let buf = buffer(Scale::Two);
        assert!(!buf.is_empty());
        assert_eq!(buf.as_bytes()[0], CONTROL_DATA);
        assert!(buf.pixels().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_pixel_address_pages() {
        assert_eq!(pixel_address(0, 7, 1, 128), (1, 0x80));
        assert_eq!(pixel_address(0, 8, 1, 128), (129, 0x01));
        assert_eq!(pixel_address(127, 63, 1, 128), (1024, 0x80));
        assert_eq!(pixel_address(63, 31, 2, 128), (511, 0x80));
    }

    #[test]
    fn test_set_get_round_trip_every_pixel() {
        for scale in [Scale::One, Scale::Two] {
            let mut buf = buffer(scale);
            for y in 0..buf.height() as i32 {
                for x in 0..buf.width() as i32 {
                    assert!(buf.set(x, y, Color::On));
                    assert_eq!(buf.get(x, y), Color::On);
                    assert!(buf.set(x, y, Color::Off));
                    assert_eq!(buf.get(x, y), Color::Off);
                }
            }
            assert!(buf.pixels().iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut buf = buffer(Scale::Two);
        buf.fill(Color::On);
        let before = buf.clone();

        for (x, y) in [(-1, 0), (0, -1), (64, 0), (0, 32), (i32::MAX, i32::MIN)] {
            assert!(!buf.set(x, y, Color::Off));
            assert_eq!(buf.get(x, y), Color::Off);
            assert_eq!(buf.column(x, y), None);
        }
        assert_eq!(buf.as_bytes(), before.as_bytes());
        assert_eq!(buf.len(), 513);
    }

    #[test]
    fn test_scale_two_mirrors_columns() {
        let mut buf = buffer(Scale::Two);
        buf.set(3, 3, Color::On);

        let bytes = buf.as_bytes();
        assert_eq!(bytes[7], 0x08);
        assert_eq!(bytes[8], 0x08);
        assert_eq!(buf.column(3, 3), Some(&[0x08, 0x08][..]));
        assert_eq!(bytes.iter().filter(|b| **b != 0).count(), 3); // framing + pair
    }

    #[test]
    fn test_mirror_corruption_is_detectable() {
        let mut buf = buffer(Scale::Two);
        buf.set(3, 3, Color::On);
        buf.bytes[8] = 0;
        let pair = buf.column(3, 3).unwrap();
        assert_ne!(pair[0], pair[1]);
    }

    #[test]
    fn test_fill_preserves_framing_byte() {
        let mut buf = buffer(Scale::One);
        buf.fill(Color::On);
        assert_eq!(buf.as_bytes()[0], CONTROL_DATA);
        assert!(buf.pixels().iter().all(|b| *b == 0xFF));
        for y in 0..64 {
            for x in 0..128 {
                assert_eq!(buf.get(x, y), Color::On);
            }
        }

        buf.fill(Color::Off);
        assert_eq!(buf.as_bytes()[0], CONTROL_DATA);
        assert!(buf.pixels().iter().all(|b| *b == 0x00));
    }

    #[test]
    fn test_short_panel_layout() {
        let mut buf = DisplayBuffer::new(Dimensions::new(32, 128).unwrap(), Scale::One);
        assert_eq!(buf.len(), 1 + 128 * 4);
        assert!(buf.set(127, 31, Color::On));
        assert_eq!(buf.as_bytes()[512], 0x80);
    }
}
