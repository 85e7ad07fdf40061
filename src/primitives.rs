//! Drawing primitives
//!
//! Spans, blocks, lines and text-art patterns, all composed from
//! [`Display::set_pixel`] and [`Display::write_pixel`]. Coordinates are logical
//! and may fall partly or wholly outside the display; those pixels are skipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_packed::{Builder, Color, Display, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation};
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = match Display::new(I2cInterface::new(MockI2c), config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! display.block(0, 0, 10, 4, Color::On);
//! display.line(0, 31, 63, 0, Color::On);
//!
//! // A small heart, one row per ':'-separated segment
//! let _ = display.blit(20, 10, "01010:11111:01110:00100", false);
//!
//! let _ = display.refresh();
//! ```

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

type PrimitiveResult<I> = core::result::Result<(), Error<I>>;

/// Character that ends a [`Display::blit`] row
pub const BLIT_ROW_SEPARATOR: char = ':';

/// Character that lights a pixel in a [`Display::blit`] pattern
pub const BLIT_PIXEL_ON: char = '1';

const FRACTION_BITS: u32 = 16;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw a horizontal run over `x1..x2` (end excluded) on row `y`
    pub fn span(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let start = x1.max(0);
        let end = x2.min(self.width() as i32);
        for x in start..end {
            self.set_pixel(x, y, color);
        }
    }

    /// Fill a `w` by `h` rectangle with its top-left corner at (x, y)
    #[allow(clippy::many_single_char_names)]
    pub fn block(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let start = y.max(0);
        let end = y.saturating_add(h).min(self.height() as i32);
        for row in start..end {
            self.span(x, x.saturating_add(w), row, color);
        }
    }

    /// Draw a line from (x1, y1) towards (x2, y2)
    ///
    /// Steps one pixel at a time along the longer axis and tracks the other
    /// axis in 16.16 fixed point. The end point itself is not drawn, so
    /// `line(0, 0, 10, 0, ..)` covers x = 0..=9. A zero-length line draws the
    /// single point (x1, y1). Steps whose major-axis coordinate is off the
    /// display are skipped without being walked.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let dx = i64::from(x2) - i64::from(x1);
        let dy = i64::from(y2) - i64::from(y1);

        if dx == 0 && dy == 0 {
            self.set_pixel(x1, y1, color);
            return;
        }

        let x_major = dx.abs() >= dy.abs();
        let (steps, x_step, y_step) = if x_major {
            (
                dx.abs(),
                dx.signum() << FRACTION_BITS,
                (dy << FRACTION_BITS) / dx.abs(),
            )
        } else {
            (
                dy.abs(),
                (dx << FRACTION_BITS) / dy.abs(),
                dy.signum() << FRACTION_BITS,
            )
        };

        // Only visit the steps whose major coordinate lands on the display
        let (start, sign, extent) = if x_major {
            (i64::from(x1), dx.signum(), i64::from(self.width()))
        } else {
            (i64::from(y1), dy.signum(), i64::from(self.height()))
        };
        let (first, last) = if sign > 0 {
            ((-start).max(0), (extent - start).min(steps))
        } else {
            ((start - extent + 1).max(0), (start + 1).min(steps))
        };
        if first >= last {
            return;
        }

        // Start half a pixel in so the right shift rounds to nearest
        let half = 1i64 << (FRACTION_BITS - 1);
        let mut x = (i64::from(x1) << FRACTION_BITS) + half + first * x_step;
        let mut y = (i64::from(y1) << FRACTION_BITS) + half + first * y_step;

        for _ in first..last {
            self.set_pixel(
                (x >> FRACTION_BITS) as i32,
                (y >> FRACTION_BITS) as i32,
                color,
            );
            x += x_step;
            y += y_step;
        }
    }

    /// Render a text-art pattern with its first character at (x, y)
    ///
    /// `'1'` lights a pixel, [`BLIT_ROW_SEPARATOR`] returns to column `x` on the
    /// next row, any other printable character clears a pixel. ASCII control
    /// characters (such as newlines in a multi-line literal) are skipped.
    ///
    /// With `update` set every pixel is transmitted as it is drawn
    /// (see [`write_pixel`](Display::write_pixel)); otherwise only the buffer changes.
    pub fn blit(&mut self, x: i32, y: i32, pattern: &str, update: bool) -> PrimitiveResult<I> {
        let mut cursor_x = x;
        let mut cursor_y = y;

        for ch in pattern.chars() {
            if ch == BLIT_ROW_SEPARATOR {
                cursor_x = x;
                cursor_y = cursor_y.saturating_add(1);
                continue;
            }
            if ch.is_ascii_control() {
                continue;
            }

            let color = Color::from(ch == BLIT_PIXEL_ON);
            if update {
                self.write_pixel(cursor_x, cursor_y, color)?;
            } else {
                self.set_pixel(cursor_x, cursor_y, color);
            }
            cursor_x = cursor_x.saturating_add(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Scale;
    use crate::display::tests::test_display;

    fn lit<I: DisplayInterface>(display: &Display<I>) -> alloc::vec::Vec<(i32, i32)> {
        let mut pixels = alloc::vec::Vec::new();
        for y in 0..display.height() as i32 {
            for x in 0..display.width() as i32 {
                if display.get_pixel(x, y).is_on() {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn test_span_half_open() {
        let mut display = test_display(Scale::One);
        display.span(2, 5, 3, Color::On);
        assert_eq!(lit(&display), [(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_span_empty_and_reversed() {
        let mut display = test_display(Scale::One);
        display.span(4, 4, 0, Color::On);
        display.span(9, 2, 0, Color::On);
        assert!(lit(&display).is_empty());
    }

    #[test]
    fn test_span_clips_edges() {
        let mut display = test_display(Scale::Two);
        display.span(-5, 100, 0, Color::On);
        display.span(0, 10, -1, Color::On);
        display.span(0, 10, 32, Color::On);
        assert_eq!(lit(&display).len(), 64);
        assert!(lit(&display).iter().all(|(_, y)| *y == 0));
    }

    #[test]
    fn test_block_fills_rectangle() {
        let mut display = test_display(Scale::One);
        display.block(10, 6, 3, 4, Color::On);
        let pixels = lit(&display);
        assert_eq!(pixels.len(), 12);
        assert!(
            pixels
                .iter()
                .all(|(x, y)| (10..13).contains(x) && (6..10).contains(y))
        );
    }

    #[test]
    fn test_block_clear_and_clip() {
        let mut display = test_display(Scale::Two);
        display.clear(Color::On);
        display.block(60, 30, 10, 10, Color::Off);
        assert_eq!(display.get_pixel(59, 29), Color::On);
        assert_eq!(display.get_pixel(60, 30), Color::Off);
        assert_eq!(display.get_pixel(63, 31), Color::Off);
        assert_eq!(display.buffer().len(), 513);
    }

    #[test]
    fn test_horizontal_line_excludes_end() {
        let mut display = test_display(Scale::One);
        display.line(0, 0, 10, 0, Color::On);
        let expected: alloc::vec::Vec<(i32, i32)> = (0..10).map(|x| (x, 0)).collect();
        assert_eq!(lit(&display), expected);
        assert_eq!(display.get_pixel(10, 0), Color::Off);
    }

    #[test]
    fn test_reversed_line_excludes_end() {
        let mut display = test_display(Scale::One);
        display.line(10, 0, 0, 0, Color::On);
        assert_eq!(display.get_pixel(0, 0), Color::Off);
        assert_eq!(display.get_pixel(10, 0), Color::On);
        assert_eq!(lit(&display).len(), 10);
    }

    #[test]
    fn test_degenerate_line_draws_one_point() {
        let mut display = test_display(Scale::One);
        display.line(5, 5, 5, 5, Color::On);
        assert_eq!(lit(&display), [(5, 5)]);
    }

    #[test]
    fn test_vertical_line_has_no_drift() {
        let mut display = test_display(Scale::One);
        display.line(7, 2, 7, 40, Color::On);
        let pixels = lit(&display);
        assert_eq!(pixels.len(), 38);
        assert!(pixels.iter().all(|(x, _)| *x == 7));
    }

    #[test]
    fn test_diagonal_line() {
        let mut display = test_display(Scale::One);
        display.line(0, 0, 4, 4, Color::On);
        assert_eq!(lit(&display), [(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_shallow_line_rounds_minor_axis() {
        let mut display = test_display(Scale::One);
        display.line(0, 0, 8, 2, Color::On);
        assert_eq!(
            lit(&display),
            [
                (0, 0),
                (1, 0),
                (2, 1),
                (3, 1),
                (4, 1),
                (5, 1),
                (6, 2),
                (7, 2)
            ]
        );
    }

    #[test]
    fn test_line_clipped_at_edges() {
        let mut display = test_display(Scale::Two);
        display.line(-10, 5, 100, 5, Color::On);
        assert_eq!(lit(&display).len(), 64);
    }

    #[test]
    fn test_line_with_extreme_endpoints_returns() {
        let mut display = test_display(Scale::One);
        display.line(i32::MIN, 5, i32::MAX, 5, Color::On);
        assert_eq!(lit(&display).len(), 128);
        assert!(lit(&display).iter().all(|(_, y)| *y == 5));

        display.clear(Color::Off);
        display.line(3, i32::MAX, 3, i32::MIN, Color::On);
        assert_eq!(lit(&display).len(), 64);
        assert!(lit(&display).iter().all(|(x, _)| *x == 3));
    }

    #[test]
    fn test_line_entering_from_offscreen_keeps_slope() {
        let mut display = test_display(Scale::One);
        display.line(-8, -2, 8, 2, Color::On);
        // Same pixels as the on-screen half of the full line
        assert_eq!(
            lit(&display),
            [(0, 0), (1, 0), (2, 1), (3, 1), (4, 1), (5, 1), (6, 2), (7, 2)]
        );
    }

    #[test]
    fn test_line_entirely_offscreen() {
        let mut display = test_display(Scale::Two);
        display.line(100, 0, 200, 10, Color::On);
        display.line(-50, 0, -1, 10, Color::On);
        assert!(lit(&display).is_empty());
    }

    #[test]
    fn test_blit_rows() {
        let mut display = test_display(Scale::One);
        display.set_pixel(1, 0, Color::On);
        display.set_pixel(0, 1, Color::On);
        display.blit(0, 0, "10:01", false).unwrap();

        assert_eq!(display.get_pixel(0, 0), Color::On);
        assert_eq!(display.get_pixel(1, 1), Color::On);
        assert_eq!(display.get_pixel(1, 0), Color::Off);
        assert_eq!(display.get_pixel(0, 1), Color::Off);
    }

    #[test]
    fn test_blit_offset_and_control_chars() {
        let mut display = test_display(Scale::One);
        display.blit(4, 2, "1 1:\n 1 ", false).unwrap();
        assert_eq!(lit(&display), [(4, 2), (6, 2), (5, 3)]);
    }

    #[test]
    fn test_blit_clips_large_pattern() {
        let mut display = test_display(Scale::Two);
        let result = display.blit(62, 30, "1111:1111:1111:1111", false);
        assert!(result.is_ok());
        assert_eq!(lit(&display), [(62, 30), (63, 30), (62, 31), (63, 31)]);
    }

    #[test]
    fn test_blit_update_transmits_each_pixel() {
        let mut display = test_display(Scale::Two);
        display.blit(0, 0, "1:0", true).unwrap();
        let interface = display.release();
        // Window (3) plus data (1) per in-range pixel
        assert_eq!(interface.writes.len(), 8);
        assert_eq!(interface.writes[3], [0x40, 0x01, 0x01]);
        assert_eq!(interface.writes[7], [0x40, 0x01, 0x01]);
    }
}
