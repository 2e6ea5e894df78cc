//! The main API to the display driver. It provides an init sequence driven by `Config`, and
//! methods which write images, text and blank regions into display RAM or configure scrolling.
//!
//! Every data-bearing operation first sets an address window with six single-byte command
//! frames, then sends its display data as one transfer. The operations are not atomic on the bus:
//! if several callers share the bus, they must serialize whole operations.

// This has to be here in order to be usable by mods declared afterwards.
#[cfg(test)]
#[macro_use]
pub mod testing {
    macro_rules! send {
        ([$($d:expr),*]) => {Sent::Data(vec![$($d,)*])};
        ($c:expr) => {Sent::Cmd($c)};
    }
    macro_rules! sends {
        ($($e:tt),*) => {&[$(send!($e),)*]};
    }
}

pub mod scroll;
pub mod window;

use core::convert::TryFrom;

use log::{debug, error, info, trace};

use crate::address::PeripheralAddress;
use crate::command::consts::*;
use crate::command::opcode::{ACTIVATE_SCROLL, DEACTIVATE_SCROLL};
use crate::command::*;
use crate::config::Config;
use crate::display::scroll::{parameter_block, ScrollDirection, ScrollInterval};
use crate::display::window::Window;
use crate::error::{Error, Step, WriteError};
use crate::font::{Font5x7, GlyphTable};
use crate::interface::BusConnection;

/// Maximum number of characters `write_line` takes from its input.
pub const LINE_CHARS: usize = 25;

/// A driver for an SSD1306 display attached to `bus`.
pub struct Ssd1306<B>
where
    B: BusConnection,
{
    bus: B,
    address: PeripheralAddress,
}

impl<B> Ssd1306<B>
where
    B: BusConnection,
{
    /// Construct a new display driver which talks to the SSD1306 at `address` over `bus`. Nothing
    /// is sent until an operation is called.
    pub fn new(bus: B, address: PeripheralAddress) -> Self {
        Ssd1306 { bus, address }
    }

    /// The address all subsequent transfers are sent to.
    pub fn address(&self) -> PeripheralAddress {
        self.address
    }

    /// Change the address used by subsequent transfers. `address` may be given in 8-bit write
    /// form (`0x78`, `0x7A`) or 7-bit form (`0x3C`, `0x3D`). Any other value is rejected and the
    /// current address is kept. Nothing is sent on the bus.
    pub fn set_address(&mut self, address: u8) -> Result<(), Error<B::Error>> {
        match PeripheralAddress::try_from(address) {
            Ok(address) => {
                debug!("address set to {:#04x}", address.seven_bit());
                self.address = address;
                Ok(())
            }
            Err(value) => {
                error!(
                    "{:#04x} is not a valid SSD1306 address, valid addresses are 0x78 and 0x7A",
                    value
                );
                Err(Error::InvalidAddress(value))
            }
        }
    }

    /// Release the bus connection.
    pub fn release(self) -> B {
        self.bus
    }

    /// Send `opcode` as a single command frame.
    pub fn run_command(&mut self, opcode: u8) -> Result<(), Error<B::Error>> {
        self.command_frame(Step::Command { opcode, frame: 0 }, opcode)
    }

    /// Send a standalone command, one command frame per byte.
    pub fn send(&mut self, cmd: Command) -> Result<(), Error<B::Error>> {
        let mut buf = [0u8; 3];
        let bytes = cmd.encode(&mut buf).map_err(Error::InvalidParameter)?;
        let opcode = bytes[0];
        for (frame, &byte) in bytes.iter().enumerate() {
            self.command_frame(
                Step::Command {
                    opcode,
                    frame: frame as u8,
                },
                byte,
            )?;
        }
        Ok(())
    }

    /// Initialize the display with a config message. The panel is turned off, switched to
    /// horizontal addressing, configured, and turned back on. Display RAM is left as it was.
    pub fn init(&mut self, config: Config) -> Result<(), Error<B::Error>> {
        // Reject a bad config before the panel is touched.
        let mut scratch = [0u8; 3];
        for cmd in config.commands().iter().flatten() {
            cmd.encode(&mut scratch).map_err(Error::InvalidParameter)?;
        }

        self.send(Command::SetDisplayOn(false))?;
        self.send(Command::SetMemoryAddressingMode(AddressingMode::Horizontal))?;
        for cmd in config.commands().iter().flatten() {
            self.send(*cmd)?;
        }
        self.send(Command::SetDisplayOn(true))?;
        info!(
            "SSD1306 at {:#04x} initialized",
            self.address.seven_bit()
        );
        Ok(())
    }

    /// Turn the panel on or off.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<B::Error>> {
        self.send(Command::SetDisplayOn(on))
    }

    /// Control the contrast.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<B::Error>> {
        self.send(Command::SetContrast(contrast))
    }

    /// Invert the displayed image without touching display RAM.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<B::Error>> {
        self.send(Command::SetInverted(inverted))
    }

    /// Write a complete frame of display data. `image` is laid out page by page, each page
    /// column by column, one byte per 8-pixel column slice.
    pub fn write_image(&mut self, image: &[u8; FRAME_BYTES]) -> Result<(), Error<B::Error>> {
        let payload: [u8; FRAME_BYTES + 1] = frame_payload(image.iter().copied());
        self.fill_window(Window::full(), &payload)
    }

    /// Write a line of text across the full width of `page`, using the built-in 5x7 font. See
    /// `write_line_with`.
    pub fn write_line(&mut self, page: u8, text: &[u8]) -> Result<(), Error<B::Error>> {
        self.write_line_with(page, text, &Font5x7)
    }

    /// Write a line of text across the full width of `page`, looking glyphs up in `glyphs`.
    ///
    /// At most `LINE_CHARS` codes of `text` are used. Their glyphs are packed back to back with
    /// no spacing column added, so 25 characters occupy columns 0-124. Every column not reached
    /// by a glyph is written blank, so the whole page is replaced.
    pub fn write_line_with<G>(
        &mut self,
        page: u8,
        text: &[u8],
        glyphs: &G,
    ) -> Result<(), Error<B::Error>>
    where
        G: GlyphTable + ?Sized,
    {
        check_page(page)?;
        let columns = text
            .iter()
            .take(LINE_CHARS)
            .flat_map(|&code| glyphs.glyph(code));
        let payload: [u8; WIDTH + 1] = frame_payload(columns);
        self.fill_window(Window::page(page), &payload)
    }

    /// Write one raw byte of display data (8 vertically stacked pixels) at column `position` of
    /// page `line`.
    pub fn write_byte(&mut self, line: u8, position: u8, value: u8) -> Result<(), Error<B::Error>> {
        check_page(line)?;
        check_column(position)?;
        self.fill_window(Window::cell(line, position), &[CONTROL_DATA, value])
    }

    /// Blank every column of page `line`.
    pub fn clear_line(&mut self, line: u8) -> Result<(), Error<B::Error>> {
        check_page(line)?;
        let payload: [u8; WIDTH + 1] = frame_payload(core::iter::empty());
        self.fill_window(Window::page(line), &payload)
    }

    /// Blank the whole display.
    pub fn clear_display(&mut self) -> Result<(), Error<B::Error>> {
        let payload: [u8; FRAME_BYTES + 1] = frame_payload(core::iter::empty());
        self.fill_window(Window::full(), &payload)
    }

    /// Configure and start continuous scrolling of pages `start_page` to `end_page`.
    ///
    /// Scrolling is deactivated first and reactivated last. If sending the parameter block or
    /// reactivating fails, scrolling is left deactivated.
    pub fn set_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        interval: ScrollInterval,
        offset: u8,
    ) -> Result<(), Error<B::Error>> {
        check_page(start_page)?;
        check_page(end_page)?;
        if start_page > end_page {
            return Err(Error::PageOutOfRange(end_page));
        }
        let block = parameter_block(direction, start_page, end_page, interval, offset);

        self.command_frame(Step::DeactivateScroll, DEACTIVATE_SCROLL)?;
        self.data_transfer(&block)?;
        self.command_frame(Step::ActivateScroll, ACTIVATE_SCROLL)
    }

    /// Stop scrolling. Display RAM must be rewritten afterwards, as the scrolled image is not
    /// preserved.
    pub fn stop_scroll(&mut self) -> Result<(), Error<B::Error>> {
        self.command_frame(Step::DeactivateScroll, DEACTIVATE_SCROLL)
    }

    /// Set `window` and fill it with `payload`, which must be the data control byte followed by
    /// exactly enough bytes to fill the window.
    fn fill_window(&mut self, window: Window, payload: &[u8]) -> Result<(), Error<B::Error>> {
        debug_assert_eq!(payload.len(), window.len() + 1);
        for &(step, byte) in window.frames().iter() {
            self.command_frame(step, byte)?;
        }
        self.data_transfer(payload)
    }

    fn command_frame(&mut self, step: Step, byte: u8) -> Result<(), Error<B::Error>> {
        trace!("command frame {:#04x} ({})", byte, step);
        self.transfer(&frame_command(byte)).map_err(|cause| {
            error!("{} failed: {}", step, cause);
            Error::Protocol { step, cause }
        })
    }

    fn data_transfer(&mut self, bytes: &[u8]) -> Result<(), Error<B::Error>> {
        trace!("transfer of {} bytes", bytes.len());
        self.transfer(bytes).map_err(|cause| {
            error!("data transfer failed: {}", cause);
            Error::Transfer(cause)
        })
    }

    fn transfer(&mut self, bytes: &[u8]) -> Result<(), WriteError<B::Error>> {
        match self.bus.write(self.address, bytes) {
            Ok(written) if written == bytes.len() => Ok(()),
            Ok(written) => Err(WriteError::Short {
                expected: bytes.len(),
                written,
            }),
            Err(e) => Err(WriteError::Bus(e)),
        }
    }
}

#[cfg(feature = "linux")]
impl Ssd1306<crate::interface::linux::LinuxBus> {
    /// Open the I2C character device at `device` (e.g. `/dev/i2c-1`) and construct a driver for
    /// the SSD1306 at `address` on it.
    pub fn open<P: AsRef<std::path::Path>>(
        device: P,
        address: PeripheralAddress,
    ) -> Result<Self, linux_embedded_hal::i2cdev::linux::LinuxI2CError> {
        Ok(Ssd1306::new(crate::interface::linux::open(device)?, address))
    }
}

fn check_page<E>(page: u8) -> Result<(), Error<E>> {
    if page as usize >= PAGES {
        return Err(Error::PageOutOfRange(page));
    }
    Ok(())
}

fn check_column<E>(column: u8) -> Result<(), Error<E>> {
    if column as usize >= WIDTH {
        return Err(Error::ColumnOutOfRange(column));
    }
    Ok(())
}
