//! Core display operations

use crate::buffer::DisplayBuffer;
use crate::color::Color;
use crate::command::{
    self, CONTROL_COMMAND, CONTROL_DATA, Command, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY,
    NORMAL_DISPLAY, SET_CONTRAST, SET_ZOOM,
};
use crate::config::{Config, Dimensions, Scale};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Lifecycle of the controller as seen by the driver
///
/// Zoom, polarity and contrast are tracked separately and survive power toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ControllerState {
    /// No command sent yet
    #[default]
    Uninitialized,
    /// Init sequence in progress, or aborted by a transport fault
    Initializing,
    /// Panel asleep, RAM retained
    Off,
    /// Panel lit
    On,
}

/// Display driver for SSD1306
///
/// Owns the transport, the packed pixel buffer and the controller's mode state.
/// Drawing calls only touch the buffer; [`refresh`](Self::refresh) and
/// [`write_pixel`](Self::write_pixel) put bytes on the bus.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Packed pixel buffer
    buffer: DisplayBuffer,
    /// Power/initialization state
    state: ControllerState,
    /// Last zoom flag sent
    zoom: bool,
    /// Last polarity sent
    inverted: bool,
    /// Last contrast sent
    contrast: u8,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display and run the init sequence
    ///
    /// The display is on, with normal polarity and a cleared buffer, when this returns.
    /// Nothing is drawn until the first [`refresh`](Self::refresh).
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if any init command fails to transmit.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        let buffer = DisplayBuffer::new(config.dimensions, config.scale);
        let mut display = Self {
            interface,
            zoom: config.scale.is_zoomed(),
            inverted: false,
            contrast: config.contrast,
            config,
            buffer,
            state: ControllerState::Uninitialized,
        };
        display.initialize()?;
        Ok(display)
    }

    /// Send the full init sequence
    ///
    /// Can be called again to recover a panel that lost power. A transport
    /// fault leaves the state at [`ControllerState::Initializing`].
    pub fn initialize(&mut self) -> DisplayResult<I> {
        log::debug!(
            "ssd1306: initializing {}x{} at {:#04x}, scale {}",
            self.config.dimensions.cols,
            self.config.dimensions.rows,
            self.config.address,
            self.config.scale.factor()
        );
        self.state = ControllerState::Initializing;

        for cmd in command::init_sequence(&self.config) {
            self.send_command(cmd)?;
        }

        self.zoom = self.config.scale.is_zoomed();
        self.inverted = false;
        self.contrast = self.config.contrast;
        self.state = ControllerState::On;
        log::debug!("ssd1306: display on");
        Ok(())
    }

    /// Wake the panel
    pub fn on(&mut self) -> DisplayResult<I> {
        self.send_command(Command::op(DISPLAY_ON))?;
        self.state = ControllerState::On;
        Ok(())
    }

    /// Put the panel to sleep; RAM content is kept
    pub fn off(&mut self) -> DisplayResult<I> {
        self.send_command(Command::op(DISPLAY_OFF))?;
        self.state = ControllerState::Off;
        Ok(())
    }

    /// Select normal or inverted polarity
    ///
    /// Nothing is sent if the polarity is already selected.
    pub fn set_inverse(&mut self, inverted: bool) -> DisplayResult<I> {
        if inverted == self.inverted {
            return Ok(());
        }
        let opcode = if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        };
        self.send_command(Command::op(opcode))?;
        self.inverted = inverted;
        log::debug!("ssd1306: inverse {}", inverted);
        Ok(())
    }

    /// Enable or disable the controller's vertical zoom
    ///
    /// Nothing is sent if the mode is already selected. The buffer layout
    /// follows the configured [`Scale`] regardless of this flag.
    pub fn set_zoom(&mut self, zoom: bool) -> DisplayResult<I> {
        if zoom == self.zoom {
            return Ok(());
        }
        self.send_command(Command::with_arg(SET_ZOOM, u8::from(zoom)))?;
        self.zoom = zoom;
        log::debug!("ssd1306: zoom {}", zoom);
        Ok(())
    }

    /// Set contrast level
    ///
    /// Nothing is sent if the level is unchanged.
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        if contrast == self.contrast {
            return Ok(());
        }
        self.send_command(Command::with_arg(SET_CONTRAST, contrast))?;
        self.contrast = contrast;
        Ok(())
    }

    /// Point the controller's RAM cursor at a logical coordinate
    ///
    /// Sends page select, column low nibble and column high nibble, in that
    /// order. Coordinates past the edge are clamped to the last page/column.
    pub fn set_address_window(&mut self, x: u16, y: u16) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        let native_x = (x.saturating_mul(self.config.scale.factor() as u16)).min(dims.cols - 1);
        let page = (y / 8).min(dims.pages() - 1);
        log::trace!("ssd1306: address window page {} column {}", page, native_x);

        for cmd in command::address_window(page as u8, native_x as u8) {
            self.send_command(cmd)?;
        }
        Ok(())
    }

    /// Fill the whole buffer; nothing is transmitted
    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    /// Set one logical pixel in the buffer
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.buffer.set(x, y, color);
    }

    /// Set one logical pixel and transmit its byte column immediately
    ///
    /// Sends the address window followed by the `scale` mirrored bytes.
    /// Out-of-range coordinates are ignored and nothing is sent.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> DisplayResult<I> {
        if !self.buffer.set(x, y, color) {
            return Ok(());
        }

        let mut payload = [CONTROL_DATA; 3];
        let len = match self.buffer.column(x, y) {
            Some(column) => {
                payload[1..=column.len()].copy_from_slice(column);
                column.len() + 1
            }
            None => return Ok(()),
        };

        self.set_address_window(x as u16, y as u16)?;
        self.interface
            .write(self.config.address, &payload[..len])
            .map_err(Error::Interface)
    }

    /// Read one logical pixel from the buffer
    ///
    /// Out-of-range coordinates read as [`Color::Off`].
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        self.buffer.get(x, y)
    }

    /// Transmit the whole buffer
    ///
    /// Moves the RAM cursor to the origin, then writes the framing byte and all
    /// pixel data in a single transfer. On a transport fault the panel may show
    /// a partial frame; the buffer is left as it was.
    pub fn refresh(&mut self) -> DisplayResult<I> {
        self.set_address_window(0, 0)?;
        log::trace!("ssd1306: refresh {} bytes", self.buffer.len());
        self.interface
            .write(self.config.address, self.buffer.as_bytes())
            .map_err(Error::Interface)
    }

    /// Send one command with its control byte
    fn send_command(&mut self, cmd: Command) -> DisplayResult<I> {
        let bytes = cmd.as_bytes();
        let mut payload = [CONTROL_COMMAND; 4];
        payload[1..=bytes.len()].copy_from_slice(bytes);
        self.interface
            .write(self.config.address, &payload[..=bytes.len()])
            .map_err(Error::Interface)
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Configured scale
    pub fn scale(&self) -> Scale {
        self.config.scale
    }

    /// Get native display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Current controller state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether inverted polarity is selected
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Whether the controller's zoom is enabled
    pub fn is_zoomed(&self) -> bool {
        self.zoom
    }

    /// Last contrast level sent
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// The packed pixel buffer
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}
