//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for talking to the SSD1306 controller over I2C.
//!
//! The driver builds every payload itself (control byte included) and never
//! reads anything back, so the interface only needs a blocking write.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306_packed::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Display off: control byte 0x00 followed by the command
//! let _ = interface.write(0x3C, &[0x00, 0xAE]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport to the SSD1306 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Display`](crate::display::Display) to work with any blocking write primitive.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement this
/// trait yourself to add retries, logging, or a different bus.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write a complete payload to the device at `address`
    ///
    /// The implementation must either send every byte before returning or
    /// report a fault.
    ///
    /// # Arguments
    ///
    /// * `address` - 7-bit device address
    /// * `payload` - Control byte followed by command or pixel bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn write(&mut self, address: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// I2C interface implementation for SSD1306
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus.
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_packed::{Builder, Display, I2cInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{I2c, Operation};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = I2cInterface::new(MockI2c);
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2cInterface
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the interface and return the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, address: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(address, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorType, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> embedded_hal::i2c::ErrorKind {
            embedded_hal::i2c::ErrorKind::Other
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for operation in operations.iter() {
                if let Operation::Write(bytes) = operation {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_forwards_address_and_payload() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.write(0x3C, &[0x00, 0xAF]).unwrap();
        interface.write(0x3D, &[0x40, 0xFF, 0xFF]).unwrap();

        let bus = interface.release();
        assert_eq!(bus.writes.len(), 2);
        assert_eq!(bus.writes[0], (0x3C, alloc::vec![0x00, 0xAF]));
        assert_eq!(bus.writes[1], (0x3D, alloc::vec![0x40, 0xFF, 0xFF]));
    }

    #[test]
    fn test_write_propagates_bus_error() {
        let mut interface = I2cInterface::new(MockI2c {
            fail: true,
            ..MockI2c::default()
        });
        assert_eq!(interface.write(0x3C, &[0x00, 0xAE]), Err(MockError));
    }
}
