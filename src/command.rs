//! SSD1306 command definitions
//!
//! Command bytes used to control the SSD1306 OLED controller. Commands are
//! shifted out with the mode-select (DC) line low; pixel data with DC high.
//!
//! Every byte of the power-up table assembled by
//! [`Config::init_sequence`](crate::Config::init_sequence) is defined here.

// Fundamental commands

/// Set contrast control (0x81), followed by 1 byte (0x00-0xFF)
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from entire-display-on, output follows RAM (0xA4)
pub const DISPLAY_RESUME: u8 = 0xA4;

/// Normal (non-inverted) display mode (0xA6)
pub const DISPLAY_NORMAL: u8 = 0xA6;

/// Inverted display mode (0xA7)
pub const DISPLAY_INVERT: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling commands

/// Deactivate any configured scroll (0x2E)
///
/// RAM writes while a scroll is active corrupt the panel contents, so the
/// init table always turns scrolling off.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

// Addressing commands

/// Set memory addressing mode (0x20), followed by 1 byte
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Addressing mode data byte: horizontal (pointer wraps to the next page
/// after column 127, so full-frame refreshes need no per-page addressing)
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set column start address, lower nibble (0x00 | nibble)
pub const SET_COLUMN_LOW: u8 = 0x00;

/// Set column start address, upper nibble (0x10 | nibble)
pub const SET_COLUMN_HIGH: u8 = 0x10;

/// Set page start address (0xB0 | page)
pub const SET_PAGE_START: u8 = 0xB0;

// Hardware configuration commands

/// Set display start line (0x40 | line)
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap off: column 0 maps to SEG0 (0xA0)
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;

/// Segment remap on: column 127 maps to SEG0, flips horizontally (0xA1)
pub const SEGMENT_REMAP_FLIPPED: u8 = 0xA1;

/// Set multiplex ratio (0xA8), followed by 1 byte (height - 1)
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan from COM0 to COM[N-1] (0xC0)
pub const COM_SCAN_ASCENDING: u8 = 0xC0;

/// COM output scan from COM[N-1] to COM0, flips vertically (0xC8)
pub const COM_SCAN_DESCENDING: u8 = 0xC8;

/// Set display offset (0xD3), followed by 1 byte of vertical shift
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA), followed by 1 byte
///
/// 0x12 selects the alternative COM pin configuration used by 128x64 panels
/// (128x32 panels use 0x02).
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5), 1 data byte
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period (0xD9), followed by 1 byte (phase2 << 4 | phase1)
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB), followed by 1 byte
pub const SET_VCOMH_DESELECT: u8 = 0xDB;

// Charge pump commands

/// Charge pump setting (0x8D), followed by 1 byte
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump data byte: enable internal charge pump
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
