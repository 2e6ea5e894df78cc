//! Address windows: the rectangle of display RAM that the next display data transfer fills.

use crate::command::consts::*;
use crate::command::opcode::{SET_COLUMN_ADDRESS, SET_PAGE_ADDRESS};
use crate::error::Step;

/// A rectangle of display RAM in columns and pages, inclusive at both ends. Once the window is
/// set, display data fills it column by column, then page by page. Constructors assume the
/// indices have already been checked against the display geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    col_start: u8,
    col_end: u8,
    page_start: u8,
    page_end: u8,
}

impl Window {
    /// Every column of every page.
    pub fn full() -> Self {
        Window {
            col_start: 0,
            col_end: COLUMN_MAX,
            page_start: 0,
            page_end: PAGE_MAX,
        }
    }

    /// Every column of a single page.
    pub fn page(page: u8) -> Self {
        Window {
            col_start: 0,
            col_end: COLUMN_MAX,
            page_start: page,
            page_end: page,
        }
    }

    /// A single column of a single page, i.e. exactly one byte of display RAM.
    pub fn cell(page: u8, column: u8) -> Self {
        Window {
            col_start: column,
            col_end: column,
            page_start: page,
            page_end: page,
        }
    }

    /// Number of display data bytes that fill the window.
    pub fn len(&self) -> usize {
        (self.col_end - self.col_start + 1) as usize * (self.page_end - self.page_start + 1) as usize
    }

    /// The command frames which set this window, each tagged with the step it represents.
    pub(crate) fn frames(&self) -> [(Step, u8); 6] {
        [
            (Step::ColumnAddress, SET_COLUMN_ADDRESS),
            (Step::ColumnStart, self.col_start),
            (Step::ColumnEnd, self.col_end),
            (Step::PageAddress, SET_PAGE_ADDRESS),
            (Step::PageStart, self.page_start),
            (Step::PageEnd, self.page_end),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(window: Window) -> Vec<u8> {
        window.frames().iter().map(|&(_, byte)| byte).collect()
    }

    #[test]
    fn full_window() {
        assert_eq!(bytes(Window::full()), vec![0x21, 0, 127, 0x22, 0, 7]);
        assert_eq!(Window::full().len(), FRAME_BYTES);
    }

    #[test]
    fn page_window() {
        assert_eq!(bytes(Window::page(3)), vec![0x21, 0, 127, 0x22, 3, 3]);
        assert_eq!(Window::page(3).len(), WIDTH);
    }

    #[test]
    fn cell_window() {
        assert_eq!(bytes(Window::cell(5, 42)), vec![0x21, 42, 42, 0x22, 5, 5]);
        assert_eq!(Window::cell(5, 42).len(), 1);
    }

    #[test]
    fn steps_in_protocol_order() {
        let steps: Vec<Step> = Window::full().frames().iter().map(|&(s, _)| s).collect();
        assert_eq!(
            steps,
            vec![
                Step::ColumnAddress,
                Step::ColumnStart,
                Step::ColumnEnd,
                Step::PageAddress,
                Step::PageStart,
                Step::PageEnd,
            ]
        );
    }
}
