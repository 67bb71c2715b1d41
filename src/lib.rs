//! Bit-banged SSD1306 OLED driver with slot-based text rendering
//!
//! A driver for 128x64 SSD1306 monochrome displays wired to four plain GPIO
//! lines (clock, data, mode-select, chip-select) with no hardware SPI
//! peripheral, as found on small battery-powered gadgets. Instead of a full
//! framebuffer it keeps four independent text slots and composes one
//! 128-byte page at a time, so the whole driver fits a fixed, tiny RAM
//! budget.
//!
//! ## Features
//!
//! - `no_std`, allocation-free
//! - `embedded-hal` v1.0 `OutputPin`/`DelayNs` at the hardware seam
//! - software-driven 4-line serial protocol (byte-exact command/data framing)
//! - two rendering faces: a 6x16 alphanumeric font and 24x40 digits for
//!   clock-style readouts, with a separator dot
//! - dirty-flag refresh: mutate slots as often as you like, pay for the
//!   redraw once per frame
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use ssd1306_slots::{Builder, Display, Interface};
//! # use core::convert::Infallible;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # fn main() -> Result<(), Infallible> {
//! # let (sck, mosi, dc, cs) = (MockPin, MockPin, MockPin, MockPin);
//! # let mut delay = MockDelay;
//! let interface = Interface::new(sck, mosi, dc, cs)?;
//! let mut display = Display::new(interface, Builder::new().build());
//! display.init(&mut delay)?;
//!
//! display.set_slot(0, 22, "SETTING");
//! display.set_slot(1, 22, "3:00");
//!
//! // once per frame; a no-op unless something changed
//! display.refresh(true)?;
//! # Ok(())
//! # }
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Glyph tables for the two rendering faces
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// String slot management
pub mod slots;

mod render;

pub use config::{Builder, Config, INIT_SEQUENCE_LEN};
pub use display::{Display, POWER_UP_DELAY_MS};
pub use interface::{DisplayInterface, Interface};
pub use slots::{SLOT_COUNT, SLOT_TEXT_CAPACITY, TextSource};

/// Display width in columns
pub const WIDTH: usize = 128;
/// Display height in pixel rows
pub const HEIGHT: usize = 64;
/// Number of 8-pixel-tall pages
pub const PAGES: usize = HEIGHT / 8;
