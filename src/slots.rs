//! String slot management
//!
//! The display shows up to four independent lines of text. Each slot is a
//! lightweight descriptor (column offset plus a text source) consumed by the
//! page composer; slots never interact with each other.

use heapless::String;

/// Number of independent text slots
pub const SLOT_COUNT: usize = 4;

/// Capacity of an owned slot text, in bytes
///
/// 21 small-face glyphs of 6 columns are the most that fit across the
/// 128-column display; anything longer is clipped during composition anyway.
pub const SLOT_TEXT_CAPACITY: usize = 21;

/// Text referenced by a slot
///
/// Build-time text lives in the binary and is borrowed for `'static`;
/// text that changes at runtime (a ticking clock readout, say) is stored
/// inline in a fixed-capacity string, so a slot never borrows from the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSource {
    /// Text baked into the program image
    Static(&'static str),
    /// Runtime text owned by the slot
    Owned(String<SLOT_TEXT_CAPACITY>),
}

impl TextSource {
    /// View the text regardless of where it lives
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(text) => text,
            Self::Owned(text) => text.as_str(),
        }
    }
}

impl From<&'static str> for TextSource {
    fn from(text: &'static str) -> Self {
        Self::Static(text)
    }
}

impl From<String<SLOT_TEXT_CAPACITY>> for TextSource {
    fn from(text: String<SLOT_TEXT_CAPACITY>) -> Self {
        Self::Owned(text)
    }
}

/// One text descriptor: a column offset and an optional text source
///
/// An unset source marks the slot inactive; inactive slots compose to a
/// full-width blank page.
#[derive(Clone, Debug, Default)]
pub(crate) struct Slot {
    /// Column offset of the first glyph (0-127)
    x: u8,
    /// Text to render, `None` while inactive
    text: Option<TextSource>,
}

impl Slot {
    /// Store the offset and source, marking the slot active
    pub(crate) fn set(&mut self, x: u8, source: TextSource) {
        self.x = x;
        self.text = Some(source);
    }

    /// Drop the source only, marking the slot inactive; x is left as-is
    pub(crate) fn clear(&mut self) {
        self.text = None;
    }

    pub(crate) fn x(&self) -> u8 {
        self.x
    }

    /// The slot's text, or `None` while inactive
    pub(crate) fn text(&self) -> Option<&str> {
        self.text.as_ref().map(TextSource::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn default_slot_is_inactive() {
        let slot = Slot::default();
        assert_eq!(slot.text(), None);
        assert_eq!(slot.x(), 0);
    }

    #[test]
    fn set_stores_offset_and_activates() {
        let mut slot = Slot::default();
        slot.set(22, TextSource::from("SETTING"));
        assert_eq!(slot.x(), 22);
        assert_eq!(slot.text(), Some("SETTING"));
    }

    #[test]
    fn clear_drops_text_but_keeps_offset() {
        let mut slot = Slot::default();
        slot.set(40, TextSource::from("PAUSED"));
        slot.clear();
        assert_eq!(slot.text(), None);
        assert_eq!(slot.x(), 40);
    }

    #[test]
    fn owned_text_renders_like_static_text() {
        let mut readout: String<SLOT_TEXT_CAPACITY> = String::new();
        write!(readout, "{}:{:02}", 3, 7).unwrap();

        let mut slot = Slot::default();
        slot.set(0, TextSource::from(readout));
        assert_eq!(slot.text(), Some("3:07"));
    }
}
