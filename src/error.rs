//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Transport faults raised while talking to the controller
//!
//! Coordinates outside the display are never an error: drawing operations
//! silently skip them.
//!
//! ## Example
//!
//! ```
//! use ssd1306_packed::{Builder, BuilderError, Dimensions};
//!
//! // Unsupported scale
//! let result = Builder::new().scale_factor(3).build();
//! assert!(matches!(result, Err(BuilderError::UnsupportedScale { scale: 3 })));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(70, 128); // Too many rows
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum COM outputs (rows) supported by the SSD1306 controller
pub const MAX_ROWS: u16 = 64;

/// Maximum SEG outputs (columns) supported by the SSD1306 controller
pub const MAX_COLS: u16 = 128;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// Bus faults are never retried by the driver.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation.
    /// The controller's RAM may be partially updated; the in-memory buffer is not.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
    /// Scale factor other than 1 or 2
    UnsupportedScale {
        /// Requested scale factor
        scale: u8,
    },
    /// Device address does not fit in 7 bits
    InvalidAddress {
        /// Requested address
        address: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_ROWS}x{MAX_COLS}, rows must be a multiple of 8 per scaled page)"
            ),
            Self::UnsupportedScale { scale } => {
                write!(f, "Unsupported scale factor {scale} (expected 1 or 2)")
            }
            Self::InvalidAddress { address } => {
                write!(f, "Invalid I2C address {address:#04x} (must be 7-bit)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
