//! Glyph tables for the two rendering faces
//!
//! The small face is a 6x16 alphanumeric font split into two 8-pixel
//! sub-rows; the big face is a 24x40 digit font split into five. All tables
//! are column strips: each byte covers 8 vertical pixels with bit 0 as the
//! topmost, matching the controller's page layout, so a sub-row band can be
//! copied straight into a page buffer.
//!
//! Table shapes are a binary contract with the composer:
//! - [`SMALL_FONT`]: 62 glyphs x 2 sub-rows x [`SMALL_WIDTH`] bytes, in
//!   glyph-index order digits, uppercase, lowercase;
//! - [`BIG_DIGITS`]: 10 digits x 5 sub-rows x [`BIG_WIDTH`] bytes;
//! - [`BIG_DOT`]: a single [`BIG_WIDTH`]-byte band for the separator dot.

/// Width of one small-face glyph in columns
pub const SMALL_WIDTH: usize = 6;
/// Sub-rows (8-pixel bands) in a small-face glyph
pub const SMALL_SUB_ROWS: usize = 2;
/// Glyphs in the small face: digits 0-9, then A-Z, then a-z
pub const SMALL_GLYPH_COUNT: usize = 62;

/// Width of one big-face glyph in columns
pub const BIG_WIDTH: usize = 24;
/// Sub-rows (8-pixel bands) in a big-face glyph
pub const BIG_SUB_ROWS: usize = 5;

/// Byte rendered as the big-face separator dot
pub const SEPARATOR: u8 = b':';

/// Map a text byte to its small-face glyph index
///
/// Classification priority is digits, then uppercase, then lowercase.
/// Anything else has no glyph and renders as a blank run of glyph width.
pub fn small_index(byte: u8) -> Option<usize> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as usize),
        b'A'..=b'Z' => Some((byte - b'A') as usize + 10),
        b'a'..=b'z' => Some((byte - b'a') as usize + 36),
        _ => None,
    }
}

/// Look up one sub-row band of a small-face glyph
pub fn small_glyph(index: usize, sub_row: u8) -> Option<&'static [u8; SMALL_WIDTH]> {
    SMALL_FONT.get(index)?.get(sub_row as usize)
}

/// Look up one sub-row band of a big-face digit
///
/// `digit` is the value 0-9, not its ASCII code. Sub-row 5 (the blank band
/// below a 40-pixel digit on a 48-pixel-tall area) resolves to `None`
/// without touching the table, as does anything further out.
pub fn big_glyph(digit: u8, sub_row: u8) -> Option<&'static [u8; BIG_WIDTH]> {
    BIG_DIGITS.get(digit as usize)?.get(sub_row as usize)
}

/// Small face: 62 glyphs x 2 sub-rows x 6 column bytes, in glyph-index
/// order digits 0-9, A-Z, a-z. Column 5 of every glyph is blank spacing.
pub const SMALL_FONT: [[[u8; SMALL_WIDTH]; SMALL_SUB_ROWS]; SMALL_GLYPH_COUNT] = [
    // '0'
    [
        [0xF8, 0x06, 0x86, 0x66, 0xF8, 0x00],
        [0x1F, 0x66, 0x61, 0x60, 0x1F, 0x00],
    ],
    // '1'
    [
        [0x00, 0x18, 0xFE, 0x00, 0x00, 0x00],
        [0x00, 0x60, 0x7F, 0x60, 0x00, 0x00],
    ],
    // '2'
    [
        [0x18, 0x06, 0x06, 0x86, 0x78, 0x00],
        [0x60, 0x78, 0x66, 0x61, 0x60, 0x00],
    ],
    // '3'
    [
        [0x06, 0x06, 0x66, 0x9E, 0x06, 0x00],
        [0x18, 0x60, 0x60, 0x61, 0x1E, 0x00],
    ],
    // '4'
    [
        [0x80, 0x60, 0x18, 0xFE, 0x00, 0x00],
        [0x07, 0x06, 0x06, 0x7F, 0x06, 0x00],
    ],
    // '5'
    [
        [0x7E, 0x66, 0x66, 0x66, 0x86, 0x00],
        [0x18, 0x60, 0x60, 0x60, 0x1F, 0x00],
    ],
    // '6'
    [
        [0xE0, 0x98, 0x86, 0x86, 0x00, 0x00],
        [0x1F, 0x61, 0x61, 0x61, 0x1E, 0x00],
    ],
    // '7'
    [
        [0x06, 0x06, 0x86, 0x66, 0x1E, 0x00],
        [0x00, 0x7E, 0x01, 0x00, 0x00, 0x00],
    ],
    // '8'
    [
        [0x78, 0x86, 0x86, 0x86, 0x78, 0x00],
        [0x1E, 0x61, 0x61, 0x61, 0x1E, 0x00],
    ],
    // '9'
    [
        [0x78, 0x86, 0x86, 0x86, 0xF8, 0x00],
        [0x00, 0x61, 0x61, 0x19, 0x07, 0x00],
    ],
    // 'A'
    [
        [0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00],
        [0x7F, 0x06, 0x06, 0x06, 0x7F, 0x00],
    ],
    // 'B'
    [
        [0xFE, 0x86, 0x86, 0x86, 0x78, 0x00],
        [0x7F, 0x61, 0x61, 0x61, 0x1E, 0x00],
    ],
    // 'C'
    [
        [0xF8, 0x06, 0x06, 0x06, 0x18, 0x00],
        [0x1F, 0x60, 0x60, 0x60, 0x18, 0x00],
    ],
    // 'D'
    [
        [0xFE, 0x06, 0x06, 0x18, 0xE0, 0x00],
        [0x7F, 0x60, 0x60, 0x18, 0x07, 0x00],
    ],
    // 'E'
    [
        [0xFE, 0x86, 0x86, 0x86, 0x06, 0x00],
        [0x7F, 0x61, 0x61, 0x61, 0x60, 0x00],
    ],
    // 'F'
    [
        [0xFE, 0x86, 0x86, 0x86, 0x06, 0x00],
        [0x7F, 0x01, 0x01, 0x01, 0x00, 0x00],
    ],
    // 'G'
    [
        [0xF8, 0x06, 0x86, 0x86, 0x98, 0x00],
        [0x1F, 0x60, 0x61, 0x61, 0x7F, 0x00],
    ],
    // 'H'
    [
        [0xFE, 0x80, 0x80, 0x80, 0xFE, 0x00],
        [0x7F, 0x01, 0x01, 0x01, 0x7F, 0x00],
    ],
    // 'I'
    [
        [0x00, 0x06, 0xFE, 0x06, 0x00, 0x00],
        [0x00, 0x60, 0x7F, 0x60, 0x00, 0x00],
    ],
    // 'J'
    [
        [0x00, 0x00, 0x06, 0xFE, 0x06, 0x00],
        [0x18, 0x60, 0x60, 0x1F, 0x00, 0x00],
    ],
    // 'K'
    [
        [0xFE, 0x80, 0x60, 0x18, 0x06, 0x00],
        [0x7F, 0x01, 0x06, 0x18, 0x60, 0x00],
    ],
    // 'L'
    [
        [0xFE, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x7F, 0x60, 0x60, 0x60, 0x60, 0x00],
    ],
    // 'M'
    [
        [0xFE, 0x18, 0xE0, 0x18, 0xFE, 0x00],
        [0x7F, 0x00, 0x01, 0x00, 0x7F, 0x00],
    ],
    // 'N'
    [
        [0xFE, 0x60, 0x80, 0x00, 0xFE, 0x00],
        [0x7F, 0x00, 0x01, 0x06, 0x7F, 0x00],
    ],
    // 'O'
    [
        [0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00],
        [0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00],
    ],
    // 'P'
    [
        [0xFE, 0x86, 0x86, 0x86, 0x78, 0x00],
        [0x7F, 0x01, 0x01, 0x01, 0x00, 0x00],
    ],
    // 'Q'
    [
        [0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00],
        [0x1F, 0x60, 0x66, 0x18, 0x67, 0x00],
    ],
    // 'R'
    [
        [0xFE, 0x86, 0x86, 0x86, 0x78, 0x00],
        [0x7F, 0x01, 0x07, 0x19, 0x60, 0x00],
    ],
    // 'S'
    [
        [0x78, 0x86, 0x86, 0x86, 0x06, 0x00],
        [0x60, 0x61, 0x61, 0x61, 0x1E, 0x00],
    ],
    // 'T'
    [
        [0x06, 0x06, 0xFE, 0x06, 0x06, 0x00],
        [0x00, 0x00, 0x7F, 0x00, 0x00, 0x00],
    ],
    // 'U'
    [
        [0xFE, 0x00, 0x00, 0x00, 0xFE, 0x00],
        [0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00],
    ],
    // 'V'
    [
        [0xFE, 0x00, 0x00, 0x00, 0xFE, 0x00],
        [0x07, 0x18, 0x60, 0x18, 0x07, 0x00],
    ],
    // 'W'
    [
        [0xFE, 0x00, 0x80, 0x00, 0xFE, 0x00],
        [0x1F, 0x60, 0x1F, 0x60, 0x1F, 0x00],
    ],
    // 'X'
    [
        [0x1E, 0x60, 0x80, 0x60, 0x1E, 0x00],
        [0x78, 0x06, 0x01, 0x06, 0x78, 0x00],
    ],
    // 'Y'
    [
        [0x7E, 0x80, 0x00, 0x80, 0x7E, 0x00],
        [0x00, 0x01, 0x7E, 0x01, 0x00, 0x00],
    ],
    // 'Z'
    [
        [0x06, 0x06, 0x86, 0x66, 0x1E, 0x00],
        [0x78, 0x66, 0x61, 0x60, 0x60, 0x00],
    ],
    // 'a'
    [
        [0x00, 0x60, 0x60, 0x60, 0x80, 0x00],
        [0x18, 0x66, 0x66, 0x66, 0x7F, 0x00],
    ],
    // 'b'
    [
        [0xFE, 0x80, 0x60, 0x60, 0x80, 0x00],
        [0x7F, 0x61, 0x60, 0x60, 0x1F, 0x00],
    ],
    // 'c'
    [
        [0x80, 0x60, 0x60, 0x60, 0x00, 0x00],
        [0x1F, 0x60, 0x60, 0x60, 0x18, 0x00],
    ],
    // 'd'
    [
        [0x80, 0x60, 0x60, 0x80, 0xFE, 0x00],
        [0x1F, 0x60, 0x60, 0x61, 0x7F, 0x00],
    ],
    // 'e'
    [
        [0x80, 0x60, 0x60, 0x60, 0x80, 0x00],
        [0x1F, 0x66, 0x66, 0x66, 0x07, 0x00],
    ],
    // 'f'
    [
        [0x80, 0xF8, 0x86, 0x06, 0x18, 0x00],
        [0x01, 0x7F, 0x01, 0x00, 0x00, 0x00],
    ],
    // 'g'
    [
        [0xE0, 0x18, 0x18, 0x18, 0xF8, 0x00],
        [0x01, 0x66, 0x66, 0x66, 0x1F, 0x00],
    ],
    // 'h'
    [
        [0xFE, 0x80, 0x60, 0x60, 0x80, 0x00],
        [0x7F, 0x01, 0x00, 0x00, 0x7F, 0x00],
    ],
    // 'i'
    [
        [0x00, 0x60, 0xE6, 0x00, 0x00, 0x00],
        [0x00, 0x60, 0x7F, 0x60, 0x00, 0x00],
    ],
    // 'j'
    [
        [0x00, 0x00, 0x60, 0xE6, 0x00, 0x00],
        [0x18, 0x60, 0x60, 0x1F, 0x00, 0x00],
    ],
    // 'k'
    [
        [0xFE, 0x00, 0x80, 0x60, 0x00, 0x00],
        [0x7F, 0x06, 0x19, 0x60, 0x00, 0x00],
    ],
    // 'l'
    [
        [0x00, 0x06, 0xFE, 0x00, 0x00, 0x00],
        [0x00, 0x60, 0x7F, 0x60, 0x00, 0x00],
    ],
    // 'm'
    [
        [0xE0, 0x60, 0x80, 0x60, 0x80, 0x00],
        [0x7F, 0x00, 0x07, 0x00, 0x7F, 0x00],
    ],
    // 'n'
    [
        [0xE0, 0x80, 0x60, 0x60, 0x80, 0x00],
        [0x7F, 0x01, 0x00, 0x00, 0x7F, 0x00],
    ],
    // 'o'
    [
        [0x80, 0x60, 0x60, 0x60, 0x80, 0x00],
        [0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00],
    ],
    // 'p'
    [
        [0xE0, 0x60, 0x60, 0x60, 0x80, 0x00],
        [0x7F, 0x06, 0x06, 0x06, 0x01, 0x00],
    ],
    // 'q'
    [
        [0x80, 0x60, 0x60, 0x80, 0xE0, 0x00],
        [0x01, 0x06, 0x06, 0x07, 0x7F, 0x00],
    ],
    // 'r'
    [
        [0xE0, 0x80, 0x60, 0x60, 0x80, 0x00],
        [0x7F, 0x01, 0x00, 0x00, 0x01, 0x00],
    ],
    // 's'
    [
        [0x80, 0x60, 0x60, 0x60, 0x00, 0x00],
        [0x61, 0x66, 0x66, 0x66, 0x18, 0x00],
    ],
    // 't'
    [
        [0x60, 0xFE, 0x60, 0x00, 0x00, 0x00],
        [0x00, 0x1F, 0x60, 0x60, 0x18, 0x00],
    ],
    // 'u'
    [
        [0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00],
        [0x1F, 0x60, 0x60, 0x18, 0x7F, 0x00],
    ],
    // 'v'
    [
        [0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00],
        [0x07, 0x18, 0x60, 0x18, 0x07, 0x00],
    ],
    // 'w'
    [
        [0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00],
        [0x1F, 0x60, 0x1E, 0x60, 0x1F, 0x00],
    ],
    // 'x'
    [
        [0x60, 0x80, 0x00, 0x80, 0x60, 0x00],
        [0x60, 0x19, 0x06, 0x19, 0x60, 0x00],
    ],
    // 'y'
    [
        [0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00],
        [0x01, 0x66, 0x66, 0x66, 0x1F, 0x00],
    ],
    // 'z'
    [
        [0x60, 0x60, 0x60, 0xE0, 0x60, 0x00],
        [0x60, 0x78, 0x66, 0x61, 0x60, 0x00],
    ],
];

/// Big face: 10 digits x 5 sub-rows x 24 column bytes.
pub const BIG_DIGITS: [[[u8; BIG_WIDTH]; BIG_SUB_ROWS]; 10] = [
    // '0'
    [
        [0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0x3E, 0x3E, 0x3E, 0x3E, 0x01, 0x01, 0x01, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x07, 0x07, 0x07, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    // '1'
    [
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0xFC, 0xFC, 0xFC, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    // '2'
    [
        [0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00],
        [0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x3E, 0x3E, 0x3E, 0x3E, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0xF8, 0xF8, 0x07, 0x07, 0x07, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00],
    ],
    // '3'
    [
        [0x00, 0x00, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0xFC, 0xFC, 0xFC, 0xFC, 0x7C, 0x7C, 0x7C, 0x7C, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x3E, 0x3E, 0x3E, 0x3E, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00],
        [0x00, 0x00, 0xF8, 0xF8, 0xF8, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    // '4'
    [
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0xFC, 0xFC, 0xFC, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0xFE, 0xFE, 0xFE, 0xFE, 0xC1, 0xC1, 0xC1, 0xC1, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xFF, 0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00],
        [0x00, 0x00, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0xFF, 0xFF, 0xFF, 0xFF, 0x07, 0x07, 0x07, 0x07, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    // '5'
    [
        [0x00, 0x00, 0xFC, 0xFC, 0xFC, 0xFC, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0xFE, 0xFE, 0xFE, 0xFE, 0x00, 0x00],
        [0x00, 0x00, 0xF8, 0xF8, 0xF8, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    // '6'
    [
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    // '7'
    [
        [0x00, 0x00, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0xFC, 0xFC, 0xFC, 0xFC, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0x3E, 0x3E, 0x3E, 0x3E, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    // '8'
    [
        [0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0xC1, 0xC1, 0xC1, 0xC1, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0xC1, 0xC1, 0xC1, 0xC1, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    // '9'
    [
        [0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x7C, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00],
        [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0xF8, 0xF8, 0x07, 0x07, 0x07, 0x07, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
];

/// Separator dot band, one 24-column sub-row reused at sub-rows 1 and 3.
pub const BIG_DOT: [u8; BIG_WIDTH] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_order_is_digits_then_upper_then_lower() {
        assert_eq!(small_index(b'0'), Some(0));
        assert_eq!(small_index(b'5'), Some(5));
        assert_eq!(small_index(b'A'), Some(10));
        assert_eq!(small_index(b'Z'), Some(35));
        assert_eq!(small_index(b'a'), Some(36));
        assert_eq!(small_index(b'z'), Some(61));
    }

    #[test]
    fn unrecognized_bytes_have_no_glyph() {
        assert_eq!(small_index(b'#'), None);
        assert_eq!(small_index(b' '), None);
        assert_eq!(small_index(SEPARATOR), None);
        assert_eq!(small_index(0x00), None);
    }

    #[test]
    fn small_glyph_bounds() {
        assert!(small_glyph(0, 0).is_some());
        assert!(small_glyph(SMALL_GLYPH_COUNT - 1, 1).is_some());
        assert!(small_glyph(SMALL_GLYPH_COUNT, 0).is_none());
        assert!(small_glyph(0, 2).is_none());
    }

    #[test]
    fn big_glyph_sub_row_five_is_guarded() {
        for digit in 0..10 {
            assert!(big_glyph(digit, 4).is_some());
            assert!(big_glyph(digit, 5).is_none());
        }
        assert!(big_glyph(10, 0).is_none());
    }

    #[test]
    fn every_small_glyph_has_ink_and_trailing_spacing() {
        for glyph in &SMALL_FONT {
            let ink = glyph.iter().flatten().any(|&b| b != 0);
            assert!(ink);
            assert_eq!(glyph[0][SMALL_WIDTH - 1], 0);
            assert_eq!(glyph[1][SMALL_WIDTH - 1], 0);
        }
    }

    #[test]
    fn every_big_digit_has_ink() {
        for digit in &BIG_DIGITS {
            assert!(digit.iter().flatten().any(|&b| b != 0));
        }
        assert!(BIG_DOT.iter().any(|&b| b != 0));
    }
}
