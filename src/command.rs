//! The command set for the SSD1306, and the framing that carries commands and display data over
//! the I2C bus.
//!
//! Every I2C transfer to the SSD1306 begins with a control byte. A control byte of
//! `consts::CONTROL_COMMAND` marks the remainder of the transfer as a command byte, and
//! `consts::CONTROL_DATA` marks it as display RAM data. This driver sends exactly one command byte
//! per command transfer, so a command with parameters is sent as one frame for the opcode and one
//! frame for each parameter.
//!
//! Note 1: The display RAM of the SSD1306 is 128 columns by 8 pages. Each page is a horizontal
//! strip 8 pixels tall, and each byte of display data is one column of that strip with the least
//! significant bit at the top.

pub mod consts {
    //! Geometry of the display RAM and the values of the I2C control bytes.

    /// Number of columns (segments) in display RAM.
    pub const WIDTH: usize = 128;
    /// Number of pages in display RAM.
    pub const PAGES: usize = 8;
    /// Number of data bytes in one complete frame.
    pub const FRAME_BYTES: usize = WIDTH * PAGES;
    pub const COLUMN_MAX: u8 = (WIDTH - 1) as u8;
    pub const PAGE_MAX: u8 = (PAGES - 1) as u8;

    /// Control byte which begins a command transfer.
    pub const CONTROL_COMMAND: u8 = 0x00;
    /// Control byte which begins a display data transfer.
    pub const CONTROL_DATA: u8 = 0x40;
}

pub mod opcode {
    //! Raw opcodes of the commands used by this driver.

    pub const SET_MEMORY_ADDRESSING_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDRESS: u8 = 0x21;
    pub const SET_PAGE_ADDRESS: u8 = 0x22;
    pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
    pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
    pub const VERTICAL_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
    pub const VERTICAL_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const ACTIVATE_SCROLL: u8 = 0x2F;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEGMENT_REMAP: u8 = 0xA0;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOMH_DESELECT: u8 = 0xDB;
}

use self::consts::*;
use self::opcode::*;

/// The order in which the display RAM address pointer advances as data is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    /// The column address increments, wrapping to the start column of the next page at the end
    /// column. The data operations of this driver assume this mode.
    Horizontal,
    /// The page address increments, wrapping to the start page of the next column at the end
    /// page.
    Vertical,
    /// The column address increments and stays within the current page.
    Page,
}

/// Setting of the COM line scanning of rows. Changing this setting will flip the image vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComScanDirection {
    /// COM lines scan from COM0 to COM[N-1].
    Normal,
    /// COM lines scan from COM[N-1] to COM0.
    Remapped,
}

/// Layout of the COM pins. This setting is dictated by how the display module wires the OLED
/// matrix to the chip; see the module datasheet. 128x64 modules normally use `Alternative`, and
/// 128x32 modules use `Sequential`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComPinLayout {
    Sequential,
    Alternative,
}

/// The VCOMH deselect level, as a fraction of Vcc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VcomhLevel {
    /// ~0.65 * Vcc
    Low,
    /// ~0.77 * Vcc (chip default)
    Medium,
    /// ~0.83 * Vcc
    High,
}

/// A standalone controller command, i.e. one which does not write display data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Select how the address pointer advances while writing display data.
    SetMemoryAddressingMode(AddressingMode),
    /// Set the contrast. Range 0-255.
    SetContrast(u8),
    /// Enable or disable the internal charge pump. Modules without an external Vcc supply need it
    /// enabled before the display is turned on.
    SetChargePump(bool),
    /// Set the multiplex ratio, i.e. the number of active COM lines. Range 16-64.
    SetMuxRatio(u8),
    /// Set the vertical shift of the COM lines. Range 0-63.
    SetDisplayOffset(u8),
    /// Set the display RAM row which is shown at the top of the display. Range 0-63.
    SetStartLine(u8),
    /// When enabled, column address 127 is mapped to segment 0, flipping the image horizontally.
    SetSegmentRemap(bool),
    SetComScanDirection(ComScanDirection),
    /// Set the COM pin layout and whether the left and right halves of the COM lines are swapped.
    SetComPins(ComPinLayout, bool),
    /// Set the display clock divide ratio (1-16) and the oscillator frequency setting (0-15).
    SetClockDivide(u8, u8),
    /// Set the pre-charge period phase 1 and phase 2 lengths. Each is 1-15 DCLKs.
    SetPrechargePeriod(u8, u8),
    SetVcomhDeselect(VcomhLevel),
    /// Turn the panel on or off. Display RAM is retained while the panel is off.
    SetDisplayOn(bool),
    /// Invert every pixel of the displayed image.
    SetInverted(bool),
}

macro_rules! ok_command {
    ($buf:ident, [$($byte:expr),+]) => {{
        let bytes = [$($byte),+];
        $buf[..bytes.len()].copy_from_slice(&bytes);
        Ok(&$buf[..bytes.len()])
    }};
}

impl Command {
    /// Encode the command bytes (opcode followed by parameters) into `buf`, returning the used
    /// part of it. Parameters outside their documented range yield `Err` with the opcode.
    pub fn encode(self, buf: &mut [u8; 3]) -> Result<&[u8], u8> {
        match self {
            Command::SetMemoryAddressingMode(mode) => ok_command!(
                buf,
                [
                    SET_MEMORY_ADDRESSING_MODE,
                    match mode {
                        AddressingMode::Horizontal => 0x00,
                        AddressingMode::Vertical => 0x01,
                        AddressingMode::Page => 0x02,
                    }
                ]
            ),
            Command::SetContrast(contrast) => ok_command!(buf, [SET_CONTRAST, contrast]),
            Command::SetChargePump(enabled) => ok_command!(
                buf,
                [SET_CHARGE_PUMP, if enabled { 0x14 } else { 0x10 }]
            ),
            Command::SetMuxRatio(ratio) => match ratio {
                16..=64 => ok_command!(buf, [SET_MUX_RATIO, ratio - 1]),
                _ => Err(SET_MUX_RATIO),
            },
            Command::SetDisplayOffset(offset) => match offset {
                0..=63 => ok_command!(buf, [SET_DISPLAY_OFFSET, offset]),
                _ => Err(SET_DISPLAY_OFFSET),
            },
            Command::SetStartLine(line) => match line {
                0..=63 => ok_command!(buf, [SET_START_LINE | line]),
                _ => Err(SET_START_LINE),
            },
            Command::SetSegmentRemap(remap) => {
                ok_command!(buf, [SET_SEGMENT_REMAP | remap as u8])
            }
            Command::SetComScanDirection(direction) => ok_command!(
                buf,
                [match direction {
                    ComScanDirection::Normal => SET_COM_SCAN_INC,
                    ComScanDirection::Remapped => SET_COM_SCAN_DEC,
                }]
            ),
            Command::SetComPins(layout, left_right_remap) => {
                let alt = match layout {
                    ComPinLayout::Sequential => 0x00,
                    ComPinLayout::Alternative => 0x10,
                };
                let lr = if left_right_remap { 0x20 } else { 0x00 };
                ok_command!(buf, [SET_COM_PINS, 0x02 | alt | lr])
            }
            Command::SetClockDivide(divide, fosc) => match (divide, fosc) {
                (1..=16, 0..=15) => ok_command!(buf, [SET_CLOCK_DIV, (fosc << 4) | (divide - 1)]),
                _ => Err(SET_CLOCK_DIV),
            },
            Command::SetPrechargePeriod(phase_1, phase_2) => match (phase_1, phase_2) {
                (1..=15, 1..=15) => ok_command!(buf, [SET_PRECHARGE, (phase_2 << 4) | phase_1]),
                _ => Err(SET_PRECHARGE),
            },
            Command::SetVcomhDeselect(level) => ok_command!(
                buf,
                [
                    SET_VCOMH_DESELECT,
                    match level {
                        VcomhLevel::Low => 0x00,
                        VcomhLevel::Medium => 0x20,
                        VcomhLevel::High => 0x30,
                    }
                ]
            ),
            Command::SetDisplayOn(on) => ok_command!(buf, [if on { DISPLAY_ON } else { DISPLAY_OFF }]),
            Command::SetInverted(inverted) => ok_command!(
                buf,
                [if inverted { SET_INVERSE } else { SET_NORMAL }]
            ),
        }
    }
}

/// Build the command transfer for a single command byte.
pub fn frame_command(byte: u8) -> [u8; 2] {
    [CONTROL_COMMAND, byte]
}

/// Build a display data transfer of `N` bytes: the data control byte followed by `data`. Slots
/// not reached by `data` stay blank, and `data` beyond `N - 1` bytes is dropped.
pub fn frame_payload<I, const N: usize>(data: I) -> [u8; N]
where
    I: IntoIterator<Item = u8>,
{
    let mut buf = [0u8; N];
    if let Some((prefix, body)) = buf.split_first_mut() {
        *prefix = CONTROL_DATA;
        for (slot, byte) in body.iter_mut().zip(data) {
            *slot = byte;
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(cmd: Command) -> Result<Vec<u8>, u8> {
        let mut buf = [0u8; 3];
        cmd.encode(&mut buf).map(|bytes| bytes.to_vec())
    }

    #[test]
    fn command_framing() {
        assert_eq!(frame_command(0x21), [0x00, 0x21]);
        assert_eq!(frame_command(0x00), [0x00, 0x00]);
    }

    #[test]
    fn payload_framing() {
        let payload: [u8; 5] = frame_payload(vec![1, 2, 3, 4]);
        assert_eq!(payload, [0x40, 1, 2, 3, 4]);

        let short: [u8; 5] = frame_payload(vec![9]);
        assert_eq!(short, [0x40, 9, 0, 0, 0]);

        let long: [u8; 3] = frame_payload(1..10);
        assert_eq!(long, [0x40, 1, 2]);

        let blank: [u8; WIDTH + 1] = frame_payload(core::iter::empty());
        assert_eq!(blank[0], 0x40);
        assert!(blank[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn set_memory_addressing_mode() {
        assert_eq!(
            encoded(Command::SetMemoryAddressingMode(AddressingMode::Horizontal)),
            Ok(vec![0x20, 0x00])
        );
        assert_eq!(
            encoded(Command::SetMemoryAddressingMode(AddressingMode::Page)),
            Ok(vec![0x20, 0x02])
        );
    }

    #[test]
    fn set_mux_ratio() {
        assert_eq!(encoded(Command::SetMuxRatio(64)), Ok(vec![0xA8, 63]));
        assert_eq!(encoded(Command::SetMuxRatio(16)), Ok(vec![0xA8, 15]));
        assert_eq!(encoded(Command::SetMuxRatio(15)), Err(0xA8));
        assert_eq!(encoded(Command::SetMuxRatio(65)), Err(0xA8));
    }

    #[test]
    fn set_start_line() {
        assert_eq!(encoded(Command::SetStartLine(0)), Ok(vec![0x40]));
        assert_eq!(encoded(Command::SetStartLine(23)), Ok(vec![0x57]));
        assert_eq!(encoded(Command::SetStartLine(64)), Err(0x40));
    }

    #[test]
    fn set_display_offset() {
        assert_eq!(encoded(Command::SetDisplayOffset(23)), Ok(vec![0xD3, 23]));
        assert_eq!(encoded(Command::SetDisplayOffset(64)), Err(0xD3));
    }

    #[test]
    fn set_com_pins() {
        assert_eq!(
            encoded(Command::SetComPins(ComPinLayout::Alternative, false)),
            Ok(vec![0xDA, 0x12])
        );
        assert_eq!(
            encoded(Command::SetComPins(ComPinLayout::Sequential, false)),
            Ok(vec![0xDA, 0x02])
        );
        assert_eq!(
            encoded(Command::SetComPins(ComPinLayout::Sequential, true)),
            Ok(vec![0xDA, 0x22])
        );
    }

    #[test]
    fn set_clock_divide() {
        assert_eq!(encoded(Command::SetClockDivide(1, 8)), Ok(vec![0xD5, 0x80]));
        assert_eq!(encoded(Command::SetClockDivide(16, 15)), Ok(vec![0xD5, 0xFF]));
        assert_eq!(encoded(Command::SetClockDivide(0, 8)), Err(0xD5));
        assert_eq!(encoded(Command::SetClockDivide(1, 16)), Err(0xD5));
    }

    #[test]
    fn set_precharge_period() {
        assert_eq!(encoded(Command::SetPrechargePeriod(1, 15)), Ok(vec![0xD9, 0xF1]));
        assert_eq!(encoded(Command::SetPrechargePeriod(0, 15)), Err(0xD9));
        assert_eq!(encoded(Command::SetPrechargePeriod(2, 16)), Err(0xD9));
    }

    #[test]
    fn single_byte_commands() {
        assert_eq!(encoded(Command::SetDisplayOn(true)), Ok(vec![0xAF]));
        assert_eq!(encoded(Command::SetDisplayOn(false)), Ok(vec![0xAE]));
        assert_eq!(encoded(Command::SetInverted(true)), Ok(vec![0xA7]));
        assert_eq!(encoded(Command::SetInverted(false)), Ok(vec![0xA6]));
        assert_eq!(encoded(Command::SetSegmentRemap(true)), Ok(vec![0xA1]));
        assert_eq!(
            encoded(Command::SetComScanDirection(ComScanDirection::Remapped)),
            Ok(vec![0xC8])
        );
    }

    #[test]
    fn parameter_commands() {
        assert_eq!(encoded(Command::SetContrast(0xCF)), Ok(vec![0x81, 0xCF]));
        assert_eq!(encoded(Command::SetChargePump(true)), Ok(vec![0x8D, 0x14]));
        assert_eq!(encoded(Command::SetChargePump(false)), Ok(vec![0x8D, 0x10]));
        assert_eq!(
            encoded(Command::SetVcomhDeselect(VcomhLevel::High)),
            Ok(vec![0xDB, 0x30])
        );
    }
}
