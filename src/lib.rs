//! Driver library for the Solomon Systech SSD1306 monochrome dot matrix OLED display controller,
//! attached over I2C.
//!
//! The driver targets 128x64 panels. It writes whole frames, single text lines in a 5x7 font,
//! single bytes of display RAM, and configures continuous hardware scrolling. Every operation is
//! blocking and reports exactly which bus transfer failed.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate embedded_hal as hal;

pub mod address;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod interface;

// Re-exports for primary API.
pub use address::PeripheralAddress;
pub use command::{consts, Command, ComPinLayout, ComScanDirection, VcomhLevel};
pub use config::Config;
pub use display::scroll::{ScrollDirection, ScrollInterval};
pub use display::Ssd1306;
pub use error::{Error, Step, WriteError};
pub use font::{Font5x7, GlyphTable};
pub use interface::i2c::I2cBus;
pub use interface::BusConnection;
