//! Page composition
//!
//! Fills one page-sized buffer from a (slot, sub-row, mode) selector using
//! the glyph tables. Composition is a pure function of its inputs: no
//! allocation, no residue from earlier compositions, and every byte of the
//! buffer written exactly once per call.

use crate::WIDTH;
use crate::font;
use crate::slots::Slot;

/// Glyph-rendering mode for one page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Small alphanumeric face, 16-pixel glyphs split across two pages
    Normal,
    /// Enlarged digit face, 40-pixel glyphs split across five pages
    Big,
}

/// Compose one page of a slot into `buffer`
///
/// An inactive slot yields a fully blank page. Glyphs are laid out from the
/// slot's column offset; a glyph that would cross the right edge is never
/// partially drawn: composition stops at the first glyph that does not fit
/// and the rest of the text is dropped (hard clip, silent).
pub(crate) fn compose_page(slot: &Slot, sub_row: u8, mode: RenderMode, buffer: &mut [u8; WIDTH]) {
    let (mut x, text) = match slot.text() {
        Some(text) => (usize::from(slot.x()), text),
        None => (WIDTH, ""),
    };
    buffer[..x].fill(0);

    for byte in text.bytes() {
        let (width, band) = glyph_band(byte, sub_row, mode);
        if x + width > WIDTH {
            break;
        }
        match band {
            Some(band) => buffer[x..x + width].copy_from_slice(band),
            None => buffer[x..x + width].fill(0),
        }
        x += width;
    }

    buffer[x..].fill(0);
}

/// Resolve one text byte to its advance width and, when it has ink on this
/// sub-row, the bitmap band to copy
///
/// In big mode every non-digit byte advances by the dot width; only the
/// separator itself gets ink, and only on the odd sub-rows of the digit
/// area. Sub-rows past the glyph tables (the blank band under a big digit)
/// resolve to `None` through the checked table accessors.
fn glyph_band(byte: u8, sub_row: u8, mode: RenderMode) -> (usize, Option<&'static [u8]>) {
    match mode {
        RenderMode::Normal => {
            let band = font::small_index(byte)
                .and_then(|index| font::small_glyph(index, sub_row))
                .map(|band| band.as_slice());
            (font::SMALL_WIDTH, band)
        }
        RenderMode::Big => {
            let band = if byte.is_ascii_digit() {
                font::big_glyph(byte - b'0', sub_row).map(|band| band.as_slice())
            } else if byte == font::SEPARATOR
                && usize::from(sub_row) < font::BIG_SUB_ROWS
                && sub_row % 2 == 1
            {
                Some(font::BIG_DOT.as_slice())
            } else {
                None
            };
            (font::BIG_WIDTH, band)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::TextSource;

    fn active_slot(x: u8, text: &'static str) -> Slot {
        let mut slot = Slot::default();
        slot.set(x, TextSource::from(text));
        slot
    }

    fn compose(slot: &Slot, sub_row: u8, mode: RenderMode) -> [u8; WIDTH] {
        // Poisoned so stale bytes cannot masquerade as composed output
        let mut buffer = [0xAA; WIDTH];
        compose_page(slot, sub_row, mode, &mut buffer);
        buffer
    }

    #[test]
    fn inactive_slot_composes_to_blank_page() {
        let buffer = compose(&Slot::default(), 0, RenderMode::Normal);
        assert_eq!(buffer, [0; WIDTH]);
    }

    #[test]
    fn cleared_slot_composes_to_blank_page() {
        let mut slot = active_slot(10, "HELLO");
        slot.clear();
        let buffer = compose(&slot, 0, RenderMode::Normal);
        assert_eq!(buffer, [0; WIDTH]);
    }

    #[test]
    fn every_byte_is_defined_after_composition() {
        let slot = active_slot(100, "xyz");
        // Two compositions into the same poisoned buffer must agree
        assert_eq!(
            compose(&slot, 1, RenderMode::Normal),
            compose(&slot, 1, RenderMode::Normal)
        );
    }

    #[test]
    fn text_lands_at_the_slot_offset() {
        let slot = active_slot(40, "RAINBOW");
        let buffer = compose(&slot, 0, RenderMode::Normal);

        assert_eq!(&buffer[..40], &[0; 40]);
        let mut x = 40;
        for byte in "RAINBOW".bytes() {
            let index = font::small_index(byte).unwrap();
            let band = font::small_glyph(index, 0).unwrap();
            assert_eq!(&buffer[x..x + font::SMALL_WIDTH], band);
            x += font::SMALL_WIDTH;
        }
        assert_eq!(x, 40 + 7 * font::SMALL_WIDTH);
        assert_eq!(&buffer[x..], &[0u8; WIDTH - 82][..]);
    }

    #[test]
    fn sub_row_one_selects_the_lower_half() {
        let slot = active_slot(0, "A");
        let buffer = compose(&slot, 1, RenderMode::Normal);
        let band = font::small_glyph(10, 1).unwrap();
        assert_eq!(&buffer[..font::SMALL_WIDTH], band);
    }

    #[test]
    fn unrecognized_byte_is_a_blank_run_not_a_stop() {
        let slot = active_slot(0, "A#B");
        let buffer = compose(&slot, 0, RenderMode::Normal);

        let w = font::SMALL_WIDTH;
        assert_eq!(&buffer[..w], font::small_glyph(10, 0).unwrap());
        assert_eq!(&buffer[w..2 * w], &[0; 6]);
        assert_eq!(&buffer[2 * w..3 * w], font::small_glyph(11, 0).unwrap());
    }

    #[test]
    fn glyph_crossing_the_right_edge_is_skipped_entirely() {
        // 124 + 6 > 128: nothing of the glyph may appear
        let slot = active_slot(124, "88");
        let buffer = compose(&slot, 0, RenderMode::Normal);
        assert_eq!(&buffer[124..], &[0; 4]);
        assert_eq!(buffer, [0; WIDTH]);
    }

    #[test]
    fn clip_drops_the_rest_of_the_line() {
        // 21 glyphs fit exactly; glyph 22 would start at column 126
        let slot = active_slot(0, "8888888888888888888888");
        let buffer = compose(&slot, 0, RenderMode::Normal);
        let band = font::small_glyph(8, 0).unwrap();
        assert_eq!(&buffer[120..126], band);
        assert_eq!(&buffer[126..], &[0; 2]);
    }

    #[test]
    fn big_digits_map_straight_to_the_big_table() {
        let slot = active_slot(2, "90");
        for sub_row in 0..5 {
            let buffer = compose(&slot, sub_row, RenderMode::Big);
            let w = font::BIG_WIDTH;
            assert_eq!(&buffer[2..2 + w], font::big_glyph(9, sub_row).unwrap());
            assert_eq!(&buffer[2 + w..2 + 2 * w], font::big_glyph(0, sub_row).unwrap());
        }
    }

    #[test]
    fn big_separator_has_ink_on_odd_sub_rows_only() {
        let slot = active_slot(0, ":");
        for sub_row in 0..6 {
            let buffer = compose(&slot, sub_row, RenderMode::Big);
            let band = &buffer[..font::BIG_WIDTH];
            if sub_row == 1 || sub_row == 3 {
                assert_eq!(band, &font::BIG_DOT);
            } else {
                assert_eq!(band, &[0; 24]);
            }
        }
    }

    #[test]
    fn big_non_separator_advances_as_a_blank_run() {
        // ' ' takes the dot position's width but never gets ink
        let slot = active_slot(0, " 5");
        let buffer = compose(&slot, 2, RenderMode::Big);
        let w = font::BIG_WIDTH;
        assert_eq!(&buffer[..w], &[0; 24]);
        assert_eq!(&buffer[w..2 * w], font::big_glyph(5, 2).unwrap());
    }

    #[test]
    fn big_sub_row_five_is_fully_blank() {
        let slot = active_slot(16, "1:23");
        let buffer = compose(&slot, 5, RenderMode::Big);
        assert_eq!(buffer, [0; WIDTH]);
    }
}
