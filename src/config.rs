//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLS, MAX_ROWS};

/// Default 7-bit I2C address (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Native display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to COM outputs)
    pub rows: u16,
    /// Number of columns (width in pixels, corresponds to SEG outputs)
    pub cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0 or rows > MAX_ROWS
    /// - rows % 8 != 0 (pages are 8 rows tall)
    /// - cols == 0 or cols > MAX_COLS
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_ROWS || !rows.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_COLS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.rows / 8
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: MAX_ROWS,
            cols: MAX_COLS,
        }
    }
}

/// Logical-to-native magnification
///
/// With [`Scale::Two`] every logical pixel covers two native columns (mirrored
/// bytes in the buffer) and two native rows (the controller's zoom register).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Scale {
    /// One native pixel per logical pixel
    One,
    /// Two by two native pixels per logical pixel
    #[default]
    Two,
}

impl Scale {
    /// Integer scale factor
    pub fn factor(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Whether the controller's zoom register must be enabled
    pub fn is_zoomed(self) -> bool {
        self == Self::Two
    }
}

impl TryFrom<u8> for Scale {
    type Error = BuilderError;

    fn try_from(scale: u8) -> Result<Self, Self::Error> {
        match scale {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(BuilderError::UnsupportedScale { scale }),
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SSD1306 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 7-bit I2C device address
    pub address: u8,
    /// Native display dimensions
    pub dimensions: Dimensions,
    /// Logical magnification
    pub scale: Scale,
    /// Contrast level sent during initialization
    pub contrast: u8,
    /// Clock divide ratio / oscillator frequency byte
    pub clock_divider: u8,
    /// Vertical display offset
    pub display_offset: u8,
    /// Charge pump setting byte
    pub charge_pump: u8,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// VCOMH deselect level byte
    pub vcom_deselect: u8,
}

impl Config {
    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.dimensions.cols / self.scale.factor() as u16
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.dimensions.rows / self.scale.factor() as u16
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306_packed::{Builder, Dimensions, Scale};
///
/// let dims = match Dimensions::new(64, 128) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).scale(Scale::One).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.width(), 128);
/// ```
#[must_use]
pub struct Builder {
    /// 7-bit I2C device address
    address: u8,
    /// Native display dimensions
    dimensions: Dimensions,
    /// Requested scale factor, validated on build
    scale: u8,
    /// Contrast level
    contrast: u8,
    /// Clock divide ratio / oscillator frequency byte
    clock_divider: u8,
    /// Vertical display offset
    display_offset: u8,
    /// Charge pump setting byte
    charge_pump: u8,
    /// COM pins configuration, derived from rows when unset
    com_pins: Option<u8>,
    /// Pre-charge period byte
    precharge: u8,
    /// VCOMH deselect level byte
    vcom_deselect: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            dimensions: Dimensions::default(),
            scale: Scale::default().factor(),
            // Default panel values for the common 128x64 module
            contrast: 0xCF,
            clock_divider: 0xF0,
            display_offset: 0x00,
            // Internal charge pump on
            charge_pump: 0x14,
            com_pins: None,
            precharge: 0xF1,
            vcom_deselect: 0x40,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit I2C device address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set native display dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the logical magnification
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale.factor();
        self
    }

    /// Set the logical magnification from a raw factor
    ///
    /// Anything other than 1 or 2 is rejected by [`build`](Self::build).
    pub fn scale_factor(mut self, scale: u8) -> Self {
        self.scale = scale;
        self
    }

    /// Set contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set clock divide ratio / oscillator frequency
    pub fn clock_divider(mut self, value: u8) -> Self {
        self.clock_divider = value;
        self
    }

    /// Set vertical display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set charge pump byte (0x14 internal, 0x10 external VCC)
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Override COM pins configuration
    ///
    /// Defaults to 0x12 for 64-row panels and 0x02 for shorter ones.
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = Some(value);
        self
    }

    /// Set pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set VCOMH deselect level
    pub fn vcom_deselect(mut self, value: u8) -> Self {
        self.vcom_deselect = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::UnsupportedScale` if the scale factor is not 1 or 2
    /// - `BuilderError::InvalidDimensions` if the panel exceeds the controller
    ///   limits or the scaled height is not whole pages
    /// - `BuilderError::InvalidAddress` if the address does not fit in 7 bits
    pub fn build(self) -> Result<Config, BuilderError> {
        let scale = Scale::try_from(self.scale)?;
        // Fields are public; re-check the controller limits
        let Dimensions { rows, cols } =
            Dimensions::new(self.dimensions.rows, self.dimensions.cols)?;
        if !(rows / scale.factor() as u16).is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if self.address > 0x7F {
            return Err(BuilderError::InvalidAddress {
                address: self.address,
            });
        }
        let com_pins = self
            .com_pins
            .unwrap_or(if rows > 32 { 0x12 } else { 0x02 });
        Ok(Config {
            address: self.address,
            dimensions: self.dimensions,
            scale,
            contrast: self.contrast,
            clock_divider: self.clock_divider,
            display_offset: self.display_offset,
            charge_pump: self.charge_pump,
            com_pins,
            precharge: self.precharge,
            vcom_deselect: self.vcom_deselect,
        })
    }
}
