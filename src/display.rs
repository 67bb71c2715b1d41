//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{DISPLAY_INVERT, DISPLAY_NORMAL, DISPLAY_OFF, DISPLAY_ON, SET_CONTRAST};
use crate::config::Config;
use crate::interface::DisplayInterface;
use crate::render::{RenderMode, compose_page};
use crate::slots::{SLOT_COUNT, Slot, TextSource};
use crate::{PAGES, WIDTH};

/// Mandatory power-up settling delay of the controller, in milliseconds
///
/// Fixed by the hardware, not tunable.
pub const POWER_UP_DELAY_MS: u32 = 100;

/// Slot-text display driver
///
/// Owns the hardware interface, the configuration, the four text slots, the
/// single reusable page buffer and the dirty flag; all display state lives
/// here. Single execution context throughout: every operation is blocking
/// and runs to completion, so slot mutations are always observed by the
/// next [`refresh`](Self::refresh).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Panel configuration
    config: Config,
    /// The four text slots
    slots: [Slot; SLOT_COUNT],
    /// Page buffer, fully rewritten by each composition
    buffer: [u8; WIDTH],
    /// Content changed since the last full refresh
    dirty: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// All slots start inactive and the display is clean; call
    /// [`init`](Self::init) before any drawing.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            slots: core::array::from_fn(|_| Slot::default()),
            buffer: [0; WIDTH],
            dirty: false,
        }
    }

    /// Wait out the controller's power-up settling time, then transmit the
    /// whole initialization table under one chip-select assertion
    ///
    /// Leaves the panel on, in horizontal addressing mode, with the data
    /// pointer at page 0 column 0, and marks the whole display dirty. Must
    /// complete before any draw call.
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), I::Error> {
        delay.delay_ms(POWER_UP_DELAY_MS);
        self.interface.send_commands(&self.config.init_sequence())?;
        self.dirty = true;
        debug!("display controller initialized");
        Ok(())
    }

    /// Point a slot at new text and mark the display dirty
    ///
    /// `index` must be below [`SLOT_COUNT`] and `x` below [`WIDTH`]; both
    /// are caller contracts, checked only in debug builds.
    pub fn set_slot(&mut self, index: usize, x: u8, source: impl Into<TextSource>) {
        debug_assert!(index < SLOT_COUNT, "slot index out of range");
        debug_assert!(usize::from(x) < WIDTH, "slot offset out of range");
        if let Some(slot) = self.slots.get_mut(index) {
            slot.set(x, source.into());
            self.dirty = true;
        }
    }

    /// Deactivate a slot (its offset is kept) and mark the display dirty
    ///
    /// `index` must be below [`SLOT_COUNT`]; caller contract, checked only
    /// in debug builds.
    pub fn clear_slot(&mut self, index: usize) {
        debug_assert!(index < SLOT_COUNT, "slot index out of range");
        if let Some(slot) = self.slots.get_mut(index) {
            slot.clear();
            self.dirty = true;
        }
    }

    /// Redraw the whole display if anything changed since the last refresh
    ///
    /// Cheap no-op while clean; call once per frame. When dirty, each of
    /// the 8 pages is composed and streamed in order; the controller's
    /// horizontal addressing wraps the data pointer, so no per-page
    /// addressing commands are needed.
    ///
    /// With `big_digits` off, slot *n* renders on pages *2n* and *2n+1*.
    /// With it on, pages 0-1 still show slot 0 in the small face while
    /// pages 2-7 show slot 1 in the big digit face (page 7 is the blank
    /// band below the 40-pixel digits).
    ///
    /// The dirty flag clears only after all pages were sent; a transfer
    /// error leaves it set, so the next call redraws everything.
    ///
    /// # Errors
    ///
    /// Returns the interface error if a page transfer fails.
    pub fn refresh(&mut self, big_digits: bool) -> Result<(), I::Error> {
        if !self.dirty {
            return Ok(());
        }
        trace!("redrawing all {} pages", PAGES);
        for page in 0..PAGES {
            let (slot, sub_row, mode) = Self::page_target(page, big_digits);
            compose_page(&self.slots[slot], sub_row, mode, &mut self.buffer);
            self.interface.send_data(&self.buffer)?;
        }
        self.dirty = false;
        Ok(())
    }

    /// Map one page index to the slot, sub-row and mode that fill it
    fn page_target(page: usize, big_digits: bool) -> (usize, u8, RenderMode) {
        if big_digits && page >= 2 {
            (1, (page - 2) as u8, RenderMode::Big)
        } else {
            (page / 2, (page % 2) as u8, RenderMode::Normal)
        }
    }

    /// Set the contrast register (0x00-0xFF) immediately
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I::Error> {
        self.interface.send_commands(&[SET_CONTRAST, contrast])
    }

    /// Switch between normal and inverse video without touching RAM
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_invert(&mut self, invert: bool) -> Result<(), I::Error> {
        self.interface.send_command(if invert {
            DISPLAY_INVERT
        } else {
            DISPLAY_NORMAL
        })
    }

    /// Turn the panel on or off (sleep); RAM contents are preserved
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), I::Error> {
        self.interface
            .send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Whether a refresh is pending
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
