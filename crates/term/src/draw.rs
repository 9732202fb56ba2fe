//! Sprite drawing onto a [`Canvas`].
//!
//! Clipping rules shared by every write:
//! - cells outside `[0, rows) x [0, cols)` are skipped,
//! - the bottom-right cell is never written (terminals scroll when it is),
//! - spaces in a sprite are transparent.

use crate::core::{to_cell, Sprite};
use crate::fb::{Canvas, CellStyle};

/// Whether `(row, col)` may be written on a canvas of `extent`.
pub fn is_drawable((rows, cols): (u16, u16), row: i32, col: i32) -> bool {
    let (rows, cols) = (rows as i32, cols as i32);
    if row < 0 || col < 0 || row >= rows || col >= cols {
        return false;
    }
    !(row == rows - 1 && col == cols - 1)
}

/// Draw `sprite` with its top-left corner at the rounded (row, col).
///
/// With `erase`, every non-space character of the sprite is overwritten
/// with a space instead, removing exactly what an earlier draw at the same
/// position put there.
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    row: f64,
    col: f64,
    sprite: &Sprite,
    erase: bool,
) {
    let style = CellStyle::normal();
    let extent = canvas.extent();
    let start_row = to_cell(row);
    let start_col = to_cell(col);

    for (dy, line) in sprite.lines().iter().enumerate() {
        let r = start_row + dy as i32;
        if r < 0 {
            continue;
        }
        if r >= extent.0 as i32 {
            break;
        }

        for (dx, ch) in line.chars().enumerate() {
            let c = start_col + dx as i32;
            if c < 0 {
                continue;
            }
            if c >= extent.1 as i32 {
                break;
            }
            if ch == ' ' || !is_drawable(extent, r, c) {
                continue;
            }

            let ch = if erase { ' ' } else { ch };
            canvas.put(r as u16, c as u16, ch, style);
        }
    }
}

/// Write a single character, spaces included, with the same clipping rules.
pub fn put_glyph<C: Canvas + ?Sized>(
    canvas: &mut C,
    row: i32,
    col: i32,
    ch: char,
    style: CellStyle,
) {
    if is_drawable(canvas.extent(), row, col) {
        canvas.put(row as u16, col as u16, ch, style);
    }
}

/// Write a line of text starting at (row, col); spaces are written.
pub fn put_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    row: i32,
    col: i32,
    text: &str,
    style: CellStyle,
) {
    for (dx, ch) in text.chars().enumerate() {
        put_glyph(canvas, row, col + dx as i32, ch, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::FrameBuffer;

    #[test]
    fn draws_at_rounded_position() {
        let mut fb = FrameBuffer::new(6, 3);
        draw_frame(&mut fb, 0.6, 1.4, &Sprite::new("ab\ncd"), false);
        assert_eq!(fb.text(), "      \n ab   \n cd   \n");
    }

    #[test]
    fn spaces_are_transparent() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "xyz", CellStyle::normal());
        draw_frame(&mut fb, 0.0, 0.0, &Sprite::new("a c"), false);
        assert_eq!(fb.row_text(0), "ayc");
    }

    #[test]
    fn clips_negative_and_overflowing_parts() {
        let mut fb = FrameBuffer::new(3, 3);
        draw_frame(&mut fb, -1.0, -1.0, &Sprite::new("abcd\nefgh\nijkl\nmnop"), false);
        assert_eq!(fb.text(), "fgh\njkl\nno \n");
    }

    #[test]
    fn never_writes_bottom_right_cell() {
        let mut fb = FrameBuffer::new(2, 2);
        draw_frame(&mut fb, 0.0, 0.0, &Sprite::new("ab\ncd"), false);
        assert_eq!(fb.text(), "ab\nc \n");

        put_glyph(&mut fb, 1, 1, '#', CellStyle::normal());
        assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn erase_removes_only_sprite_cells() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "....", CellStyle::normal());
        let sprite = Sprite::new("a b");
        draw_frame(&mut fb, 0.0, 0.0, &sprite, false);
        assert_eq!(fb.row_text(0), "a.b.");
        draw_frame(&mut fb, 0.0, 0.0, &sprite, true);
        assert_eq!(fb.row_text(0), " . .");
    }

    #[test]
    fn put_text_clips() {
        let mut fb = FrameBuffer::new(4, 2);
        put_text(&mut fb, 0, 2, "hello", CellStyle::normal());
        assert_eq!(fb.row_text(0), "  he");
    }
}
