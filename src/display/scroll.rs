//! Continuous hardware scrolling.
//!
//! The controller scrolls the range of pages on its own once activated. Scroll parameters must
//! not be changed while scrolling is active, so `Ssd1306::set_scroll` deactivates scrolling,
//! sends the parameter block, and then reactivates it.

use crate::command::opcode::*;

/// Direction of continuous scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    Right,
    Left,
    /// Scroll right while also scrolling vertically by the vertical offset.
    VerticalRight,
    /// Scroll left while also scrolling vertically by the vertical offset.
    VerticalLeft,
}

impl ScrollDirection {
    fn opcode(self) -> u8 {
        match self {
            ScrollDirection::Right => RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::Left => LEFT_HORIZONTAL_SCROLL,
            ScrollDirection::VerticalRight => VERTICAL_RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::VerticalLeft => VERTICAL_LEFT_HORIZONTAL_SCROLL,
        }
    }
}

/// Number of frames between scroll steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollInterval {
    Frames2,
    Frames3,
    Frames4,
    Frames5,
    Frames25,
    Frames64,
    Frames128,
    Frames256,
}

impl ScrollInterval {
    fn bits(self) -> u8 {
        match self {
            ScrollInterval::Frames5 => 0b000,
            ScrollInterval::Frames64 => 0b001,
            ScrollInterval::Frames128 => 0b010,
            ScrollInterval::Frames256 => 0b011,
            ScrollInterval::Frames3 => 0b100,
            ScrollInterval::Frames4 => 0b101,
            ScrollInterval::Frames25 => 0b110,
            ScrollInterval::Frames2 => 0b111,
        }
    }
}

/// The scroll setup block. It is sent as one transfer without a control byte.
pub(crate) fn parameter_block(
    direction: ScrollDirection,
    start_page: u8,
    end_page: u8,
    interval: ScrollInterval,
    offset: u8,
) -> [u8; 6] {
    [
        direction.opcode(),
        0x00,
        start_page,
        interval.bits(),
        end_page,
        offset,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_layout() {
        assert_eq!(
            parameter_block(ScrollDirection::Right, 0, 7, ScrollInterval::Frames5, 0),
            [0x26, 0x00, 0, 0b000, 7, 0]
        );
        assert_eq!(
            parameter_block(ScrollDirection::VerticalLeft, 2, 5, ScrollInterval::Frames2, 1),
            [0x2A, 0x00, 2, 0b111, 5, 1]
        );
    }

    #[test]
    fn direction_opcodes() {
        assert_eq!(ScrollDirection::Right.opcode(), 0x26);
        assert_eq!(ScrollDirection::Left.opcode(), 0x27);
        assert_eq!(ScrollDirection::VerticalRight.opcode(), 0x29);
        assert_eq!(ScrollDirection::VerticalLeft.opcode(), 0x2A);
    }

    #[test]
    fn interval_bits() {
        assert_eq!(ScrollInterval::Frames256.bits(), 0b011);
        assert_eq!(ScrollInterval::Frames3.bits(), 0b100);
        assert_eq!(ScrollInterval::Frames25.bits(), 0b110);
    }
}
