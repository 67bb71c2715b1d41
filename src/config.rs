//! Display configuration types and builder

use crate::HEIGHT;
use crate::command::{
    CHARGE_PUMP, CHARGE_PUMP_ENABLE, COM_SCAN_ASCENDING, COM_SCAN_DESCENDING, DEACTIVATE_SCROLL,
    DISPLAY_INVERT, DISPLAY_NORMAL, DISPLAY_OFF, DISPLAY_ON, DISPLAY_RESUME,
    MEMORY_MODE_HORIZONTAL, SEGMENT_REMAP_FLIPPED, SEGMENT_REMAP_NORMAL, SET_CLOCK_DIVIDE,
    SET_COLUMN_HIGH, SET_COLUMN_LOW, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET,
    SET_MEMORY_MODE, SET_MULTIPLEX_RATIO, SET_PAGE_START, SET_PRECHARGE, SET_START_LINE,
    SET_VCOMH_DESELECT,
};

/// Length of the power-up initialization sequence in bytes
pub const INIT_SEQUENCE_LEN: usize = 29;

/// Display configuration
///
/// Holds the panel-specific bytes folded into the power-up initialization
/// table. The defaults reproduce the fixed table of the reference hardware
/// (128x64 panel, internal charge pump, no flips) byte for byte; use
/// [`Builder`] to adjust individual knobs for other panels of the same
/// controller family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Clock divide ratio / oscillator frequency byte (command 0xD5)
    pub clock_divide: u8,
    /// Contrast register value (command 0x81)
    pub contrast: u8,
    /// Pre-charge period byte, phase2 << 4 | phase1 (command 0xD9)
    pub precharge: u8,
    /// VCOMH deselect level byte (command 0xDB)
    pub vcomh_deselect: u8,
    /// COM pins hardware configuration byte (command 0xDA)
    pub com_pins: u8,
    /// Mirror columns (segment remap)
    pub flip_horizontal: bool,
    /// Mirror rows (COM scan direction)
    pub flip_vertical: bool,
    /// Inverse video mode
    pub invert: bool,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

impl Config {
    /// Assemble the full power-up command table
    ///
    /// The table is transmitted in one chip-select assertion and leaves the
    /// controller in horizontal addressing mode with the data pointer at
    /// page 0, column 0, display on. Order and content follow the reference
    /// hardware's fixed init table.
    pub fn init_sequence(&self) -> [u8; INIT_SEQUENCE_LEN] {
        [
            DISPLAY_OFF,
            SET_CLOCK_DIVIDE,
            self.clock_divide,
            SET_MULTIPLEX_RATIO,
            (HEIGHT - 1) as u8,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_START_LINE,
            CHARGE_PUMP,
            CHARGE_PUMP_ENABLE,
            SET_MEMORY_MODE,
            MEMORY_MODE_HORIZONTAL,
            if self.flip_horizontal {
                SEGMENT_REMAP_FLIPPED
            } else {
                SEGMENT_REMAP_NORMAL
            },
            if self.flip_vertical {
                COM_SCAN_DESCENDING
            } else {
                COM_SCAN_ASCENDING
            },
            SET_COM_PINS,
            self.com_pins,
            SET_CONTRAST,
            self.contrast,
            SET_PRECHARGE,
            self.precharge,
            SET_VCOMH_DESELECT,
            self.vcomh_deselect,
            DISPLAY_RESUME,
            if self.invert {
                DISPLAY_INVERT
            } else {
                DISPLAY_NORMAL
            },
            DEACTIVATE_SCROLL,
            DISPLAY_ON,
            SET_PAGE_START,
            SET_COLUMN_LOW,
            SET_COLUMN_HIGH,
        ]
    }
}

/// Builder for constructing display configuration
///
/// All knobs are defaulted, so `build` cannot fail.
///
/// # Example
///
/// ```rust
/// use ssd1306_slots::Builder;
///
/// let config = Builder::new().contrast(0x7F).flip_vertical(true).build();
/// assert_eq!(config.contrast, 0x7F);
/// ```
#[must_use]
pub struct Builder {
    config: Config,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            config: Config {
                // Fastest oscillator, divide ratio 1
                clock_divide: 0xF0,
                contrast: 0xFF,
                precharge: 0x22,
                // 0.77 x Vcc
                vcomh_deselect: 0x20,
                // Alternative COM configuration for 64-row panels
                com_pins: 0x12,
                flip_horizontal: false,
                flip_vertical: false,
                invert: false,
            },
        }
    }
}

impl Builder {
    /// Create a new Builder with the reference hardware's defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.config.clock_divide = value;
        self
    }

    /// Set the contrast register value
    pub fn contrast(mut self, value: u8) -> Self {
        self.config.contrast = value;
        self
    }

    /// Set the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.config.precharge = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcomh_deselect(mut self, value: u8) -> Self {
        self.config.vcomh_deselect = value;
        self
    }

    /// Set the COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.config.com_pins = value;
        self
    }

    /// Mirror the display horizontally (segment remap)
    pub fn flip_horizontal(mut self, value: bool) -> Self {
        self.config.flip_horizontal = value;
        self
    }

    /// Mirror the display vertically (COM scan direction)
    pub fn flip_vertical(mut self, value: bool) -> Self {
        self.config.flip_vertical = value;
        self
    }

    /// Enable inverse video
    pub fn invert(mut self, value: bool) -> Self {
        self.config.invert = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
