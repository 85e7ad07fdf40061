//! SSD1306 OLED Display Driver
//!
//! A driver for SSD1306 monochrome OLED controllers on I2C, keeping a packed
//! framebuffer in the controller's native page layout.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocator required
//! - `embedded-hal` v1.0 I2C support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Panels up to 128x64
//! - 2x zoomed drawing through mirrored columns and the controller zoom register
//! - Span, block, line and text-art pattern primitives
//! - Full-frame refresh and single-pixel immediate updates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306_packed::{Builder, Color, Display, I2cInterface, Scale};
//!
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
//! # let i2c = MockI2c;
//! let interface = I2cInterface::new(i2c);
//! let config = match Builder::new().scale(Scale::Two).contrast(0x8F).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! display.clear(Color::Off);
//! display.line(0, 0, 63, 31, Color::On);
//! let _ = display.refresh();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Packed pixel buffer and addressing
pub mod buffer;
/// Pixel color for 1-bit panels
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Span, block, line and pattern drawing
pub mod primitives;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use buffer::{DisplayBuffer, MAX_BUFFER_SIZE};
pub use color::Color;
pub use config::{
    ALTERNATE_ADDRESS, Builder, Config, DEFAULT_ADDRESS, Dimensions, MAX_COLS, MAX_ROWS, Scale,
};
pub use display::{ControllerState, Display};
pub use error::{BuilderError, Error};
pub use interface::{DisplayInterface, I2cInterface};
pub use primitives::BLIT_ROW_SEPARATOR;
