//! Errors reported by the driver.
//!
//! No operation retries or attempts to resynchronize the controller after a failure. A failed
//! operation may leave the controller's address window in a partially updated state; writing a
//! full frame (`Ssd1306::clear_display` or `Ssd1306::write_image`) re-establishes it.

use core::fmt;

/// Failure of a single transfer on the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteError<E> {
    /// The bus reported an error.
    Bus(E),
    /// The bus accepted fewer bytes than were handed to it.
    Short { expected: usize, written: usize },
}

/// The command frame that failed within a multi-frame command sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// The set-column-address opcode.
    ColumnAddress,
    ColumnStart,
    ColumnEnd,
    /// The set-page-address opcode.
    PageAddress,
    PageStart,
    PageEnd,
    DeactivateScroll,
    ActivateScroll,
    /// Frame number `frame` (0 is the opcode) of a standalone command beginning with `opcode`.
    Command { opcode: u8, frame: u8 },
}

/// Error type of every driver operation, generic over the bus error `E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The value is not one of the two SSD1306 I2C addresses. Nothing was sent.
    InvalidAddress(u8),
    /// The page index is not below `consts::PAGES`. Nothing was sent.
    PageOutOfRange(u8),
    /// The column index is not below `consts::WIDTH`. Nothing was sent.
    ColumnOutOfRange(u8),
    /// A parameter of the command with this opcode is outside its range. Nothing was sent.
    InvalidParameter(u8),
    /// A command frame failed; no further frames of the operation were sent.
    Protocol { step: Step, cause: WriteError<E> },
    /// The display data transfer or scroll parameter block failed.
    Transfer(WriteError<E>),
}

impl<E> Error<E> {
    /// The failing step, if the error came from a command frame.
    pub fn step(&self) -> Option<Step> {
        match self {
            Error::Protocol { step, .. } => Some(*step),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ColumnAddress => f.write_str("set column address"),
            Step::ColumnStart => f.write_str("column start"),
            Step::ColumnEnd => f.write_str("column end"),
            Step::PageAddress => f.write_str("set page address"),
            Step::PageStart => f.write_str("page start"),
            Step::PageEnd => f.write_str("page end"),
            Step::DeactivateScroll => f.write_str("deactivate scroll"),
            Step::ActivateScroll => f.write_str("activate scroll"),
            Step::Command { opcode, frame } => {
                write!(f, "frame {} of command {:#04x}", frame, opcode)
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Display for WriteError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Bus(e) => write!(f, "bus error: {:?}", e),
            WriteError::Short { expected, written } => {
                write!(f, "short write: {} of {} bytes", written, expected)
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAddress(a) => write!(
                f,
                "{:#04x} is not a valid SSD1306 address (0x78/0x7A, or 0x3C/0x3D as 7-bit)",
                a
            ),
            Error::PageOutOfRange(p) => write!(f, "page {} out of range", p),
            Error::ColumnOutOfRange(c) => write!(f, "column {} out of range", c),
            Error::InvalidParameter(op) => write!(f, "parameter out of range for command {:#04x}", op),
            Error::Protocol { step, cause } => write!(f, "{} failed: {}", step, cause),
            Error::Transfer(cause) => write!(f, "data transfer failed: {}", cause),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_reported_for_protocol_errors() {
        let err: Error<()> = Error::Protocol {
            step: Step::PageEnd,
            cause: WriteError::Short {
                expected: 2,
                written: 1,
            },
        };
        assert_eq!(err.step(), Some(Step::PageEnd));
        assert_eq!(Error::<()>::Transfer(WriteError::Bus(())).step(), None);
    }

    #[test]
    fn display_messages() {
        let err: Error<()> = Error::Protocol {
            step: Step::ColumnStart,
            cause: WriteError::Short {
                expected: 2,
                written: 0,
            },
        };
        assert_eq!(
            err.to_string(),
            "column start failed: short write: 0 of 2 bytes"
        );
        assert_eq!(
            Error::<()>::InvalidAddress(0x10).to_string(),
            "0x10 is not a valid SSD1306 address (0x78/0x7A, or 0x3C/0x3D as 7-bit)"
        );
        assert_eq!(
            Step::Command {
                opcode: 0x81,
                frame: 1
            }
            .to_string(),
            "frame 1 of command 0x81"
        );
    }
}
