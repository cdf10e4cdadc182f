//! Static glyph overlay
//!
//! Four fixed glyphs spelling "BALL", rendered from one shared table of
//! row bitmasks. Each glyph owns a contiguous band of rows; each row is a
//! 30-bit mask, MSB = leftmost pixel. The table is const data, never
//! touched at runtime.
//!
//! Columns are addressed with a 5-bit index (0..31) while rows only carry
//! 30 content bits. Policy for the two extra addressable columns: clip.
//! Columns 30 and 31 always render unlit rather than wrapping back to the
//! left edge of the row.

use glam::UVec2;

use crate::consts::*;

const TABLE_LEN: usize = GLYPH_COUNT * GLYPH_ROWS as usize;

#[rustfmt::skip]
const GLYPH_TABLE: [u32; TABLE_LEN] = [
    // glyph B
    0b111111111111111111111100000000,
    0b111111111111111111111100000000,
    0b111111111111111111111100000000,
    0b111111111111111111111111000000,
    0b111111111111111111111111000000,
    0b111111111111111111111111000000,
    0b111111000000000000111111000000,
    0b111111000000000000111111000000,
    0b111111000000000000111111000000,
    0b111111000000000000111111000000,
    0b111111000000000000111111000000,
    0b111111000000000000111111000000,
    0b111111111111111111111111000000,
    0b111111111111111111111111000000,
    0b111111111111111111111111000000,
    0b111111111111111111111111110000,
    0b111111111111111111111111110000,
    0b111111111111111111111111110000,
    0b111111000000000000001111110000,
    0b111111000000000000001111110000,
    0b111111000000000000001111110000,
    0b111111000000000000001111110000,
    0b111111000000000000001111110000,
    0b111111000000000000001111110000,
    0b111111111111111111111111110000,
    0b111111111111111111111111110000,
    0b111111111111111111111111110000,
    0b111111111111111111111100000000,
    0b111111111111111111111100000000,
    0b111111111111111111111100000000,
    // glyph A
    0b000011111111111111111111110000,
    0b000011111111111111111111110000,
    0b000011111111111111111111110000,
    0b000011111111111111111111110000,
    0b000011111111111111111111110000,
    0b000011111111111111111111110000,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    0b001111110000000000000011111100,
    // glyph L
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    // glyph L (second instance)
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111110000000000000000000000,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
    0b001111111111111111111111111100,
];

/// Which glyph rectangle, if any, contains the pixel.
///
/// Rectangles are placed disjoint, so at most one membership holds.
#[inline]
pub fn glyph_membership(coord: UVec2) -> Option<usize> {
    if coord.y < GLYPH_ANCHOR_Y || coord.y >= GLYPH_ANCHOR_Y + GLYPH_ROWS {
        return None;
    }
    GLYPH_ANCHORS_X
        .iter()
        .position(|&ax| coord.x >= ax && coord.x < ax + GLYPH_ADDR_COLS)
}

/// Table row address for a pixel known to be inside glyph `k`.
#[inline]
fn row_address(k: usize, coord: UVec2) -> usize {
    (coord.y - GLYPH_ANCHOR_Y) as usize + k * GLYPH_ROWS as usize
}

/// Is the glyph overlay lit at this pixel?
///
/// Membership gates the table access: no address is formed for pixels
/// outside every glyph rectangle.
pub fn glyph_lit(coord: UVec2) -> bool {
    let Some(k) = glyph_membership(coord) else {
        return false;
    };

    // 5-bit column address within the glyph
    let col = (coord.x - GLYPH_ANCHORS_X[k]) & (GLYPH_ADDR_COLS - 1);
    if col >= GLYPH_CONTENT_COLS {
        // Clip: addressable but content-free columns
        return false;
    }

    let row = GLYPH_TABLE[row_address(k, coord)];
    (row >> (GLYPH_CONTENT_COLS - 1 - col)) & 1 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_glyph_bands() {
        assert_eq!(GLYPH_TABLE.len(), GLYPH_COUNT * GLYPH_ROWS as usize);
    }

    #[test]
    fn test_unlit_outside_all_rectangles() {
        // Just outside each edge of glyph 0, plus far-field points
        let ax = GLYPH_ANCHORS_X[0];
        let ay = GLYPH_ANCHOR_Y;
        for coord in [
            UVec2::new(ax.wrapping_sub(1), ay),
            UVec2::new(ax + GLYPH_ADDR_COLS, ay),
            UVec2::new(ax, ay - 1),
            UVec2::new(ax, ay + GLYPH_ROWS),
            UVec2::new(0, 0),
            UVec2::new(639, 479),
        ] {
            assert!(glyph_membership(coord).is_none());
            assert!(!glyph_lit(coord));
        }
    }

    #[test]
    fn test_row_addresses_stay_in_table() {
        // Every pixel of the full raster, including blanking: membership
        // either rejects it or yields an in-range address
        for y in 0..525 {
            for x in 0..800 {
                let coord = UVec2::new(x, y);
                if let Some(k) = glyph_membership(coord) {
                    assert!(row_address(k, coord) < GLYPH_TABLE.len());
                }
            }
        }
    }

    #[test]
    fn test_rectangles_are_disjoint() {
        for w in GLYPH_ANCHORS_X.windows(2) {
            assert!(w[0] + GLYPH_ADDR_COLS <= w[1]);
        }
    }

    #[test]
    fn test_content_columns_match_table() {
        // Column 29 is the last content column: the output must equal the
        // table bit, lit or not
        for k in 0..GLYPH_COUNT {
            for dy in 0..GLYPH_ROWS {
                let coord = UVec2::new(GLYPH_ANCHORS_X[k] + 29, GLYPH_ANCHOR_Y + dy);
                let expected = GLYPH_TABLE[row_address(k, coord)] & 1 != 0;
                assert_eq!(glyph_lit(coord), expected);
            }
        }
    }

    #[test]
    fn test_clip_columns_always_unlit() {
        // Columns 30 and 31 are addressable but carry no content
        for k in 0..GLYPH_COUNT {
            for dy in 0..GLYPH_ROWS {
                for col in [30, 31] {
                    let coord = UVec2::new(GLYPH_ANCHORS_X[k] + col, GLYPH_ANCHOR_Y + dy);
                    assert_eq!(glyph_membership(coord), Some(k));
                    assert!(!glyph_lit(coord));
                }
            }
        }
    }

    #[test]
    fn test_known_lit_pixel() {
        // Top-left corner of the first glyph's 'B' stroke is lit
        assert!(glyph_lit(UVec2::new(GLYPH_ANCHORS_X[0], GLYPH_ANCHOR_Y)));
    }
}
