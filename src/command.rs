//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller over I2C, plus the data-driven tables the driver replays.
//!
//! ## Framing
//!
//! Every I2C write starts with a control byte:
//! - [`CONTROL_COMMAND`] (0x00): the following bytes are one command and its arguments
//! - [`CONTROL_DATA`] (0x40): the following bytes are pixel data for display RAM
//!
//! ## Example
//!
//! ```
//! use ssd1306_packed::{command, Builder};
//!
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let sequence = command::init_sequence(&config);
//! assert_eq!(sequence[0].as_bytes(), &[command::DISPLAY_OFF]);
//! assert_eq!(sequence[sequence.len() - 1].as_bytes(), &[command::DISPLAY_ON]);
//! ```

use crate::config::Config;

// Control bytes

/// Control byte announcing a command (0x00)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing display RAM data (0x40)
///
/// Also stored at index 0 of the pixel buffer so the buffer can be sent as-is.
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Set contrast command (0x81)
///
/// Requires 1 byte: contrast level 0x00-0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal polarity: RAM bit 1 lights the pixel (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted polarity: RAM bit 0 lights the pixel (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off (sleep) command (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Memory addressing mode command (0x20)
///
/// Requires 1 byte: 0x00 horizontal, 0x01 vertical, 0x02 page.
pub const MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode argument for [`MEMORY_MODE`]
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Column address range command (0x21)
///
/// Requires 2 bytes: [start, end]
pub const COLUMN_ADDR: u8 = 0x21;

/// Page address range command (0x22)
///
/// Requires 2 bytes: [start, end]
pub const PAGE_ADDR: u8 = 0x22;

/// Page start address (0xB0 | page)
pub const PAGE_START: u8 = 0xB0;

/// Lower nibble of the start column (0x00 | low)
pub const COLUMN_LOW: u8 = 0x00;

/// Upper nibble of the start column (0x10 | high)
pub const COLUMN_HIGH: u8 = 0x10;

// Hardware configuration commands

/// Display start line (0x40 | line)
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap (0xA0 | remap bit)
pub const SEG_REMAP: u8 = 0xA0;

/// Multiplex ratio command (0xA8)
///
/// Requires 1 byte: rows - 1
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Display offset command (0xD3)
///
/// Requires 1 byte: vertical shift
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// COM pins hardware configuration command (0xDA)
///
/// Requires 1 byte: 0x12 for 64-row panels, 0x02 for 32-row panels
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving commands

/// Display clock divide ratio / oscillator frequency command (0xD5)
pub const SET_CLOCK_DIV: u8 = 0xD5;

/// Pre-charge period command (0xD9)
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level command (0xDB)
pub const SET_VCOM_DESELECT: u8 = 0xDB;

/// Charge pump setting command (0x8D)
///
/// Requires 1 byte: 0x14 enable, 0x10 disable
pub const CHARGE_PUMP: u8 = 0x8D;

/// Zoom-in command (0xD6)
///
/// Requires 1 byte: 0x01 doubles every row vertically, 0x00 disables.
pub const SET_ZOOM: u8 = 0xD6;

/// Number of entries produced by [`init_sequence`]
pub const INIT_SEQUENCE_LEN: usize = 19;

/// A single controller command: opcode plus up to two argument bytes
///
/// Sent on the bus as `[CONTROL_COMMAND, opcode, args...]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Command {
    bytes: [u8; 3],
    len: u8,
}

impl Command {
    /// Command without arguments
    pub const fn op(opcode: u8) -> Self {
        Self {
            bytes: [opcode, 0, 0],
            len: 1,
        }
    }

    /// Command with one argument byte
    pub const fn with_arg(opcode: u8, arg: u8) -> Self {
        Self {
            bytes: [opcode, arg, 0],
            len: 2,
        }
    }

    /// Command with two argument bytes
    pub const fn with_args(opcode: u8, first: u8, second: u8) -> Self {
        Self {
            bytes: [opcode, first, second],
            len: 3,
        }
    }

    /// Opcode followed by its arguments
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

/// Build the power-on initialization table for a configuration
///
/// The order is fixed by the controller: display off first, charge pump and
/// addressing mode before any data transfer, normal polarity and display on last.
/// Only the values come from [`Config`].
pub fn init_sequence(config: &Config) -> [Command; INIT_SEQUENCE_LEN] {
    let rows = config.dimensions.rows;
    let cols = config.dimensions.cols;
    [
        Command::op(DISPLAY_OFF),
        Command::op(DISPLAY_ALL_ON_RESUME),
        Command::with_arg(SET_CLOCK_DIV, config.clock_divider),
        Command::with_arg(SET_MULTIPLEX, (rows - 1) as u8),
        Command::with_arg(SET_DISPLAY_OFFSET, config.display_offset),
        Command::op(SET_START_LINE),
        Command::with_arg(CHARGE_PUMP, config.charge_pump),
        Command::with_arg(MEMORY_MODE, MEMORY_MODE_HORIZONTAL),
        Command::with_args(COLUMN_ADDR, 0, (cols - 1) as u8),
        Command::with_args(PAGE_ADDR, 0, (rows - 1) as u8),
        Command::op(SEG_REMAP | 0x01),
        Command::op(COM_SCAN_DEC),
        Command::with_arg(SET_COM_PINS, config.com_pins),
        Command::with_arg(SET_CONTRAST, config.contrast),
        Command::with_arg(SET_PRECHARGE, config.precharge),
        Command::with_arg(SET_VCOM_DESELECT, config.vcom_deselect),
        Command::with_arg(SET_ZOOM, u8::from(config.scale.is_zoomed())),
        Command::op(NORMAL_DISPLAY),
        Command::op(DISPLAY_ON),
    ]
}

/// Build the three commands that move the controller's RAM cursor
///
/// `column` is a native column (already multiplied by the scale factor).
pub fn address_window(page: u8, column: u8) -> [Command; 3] {
    [
        Command::op(PAGE_START | (page & 0x07)),
        Command::op(COLUMN_LOW | (column & 0x0F)),
        Command::op(COLUMN_HIGH | (column >> 4)),
    ]
}
