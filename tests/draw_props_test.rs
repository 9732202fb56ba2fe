//! Clipping and erase properties of sprite drawing.

use proptest::prelude::*;

use space_garbage::core::Sprite;
use space_garbage::term::{draw_frame, Canvas, CellStyle, FrameBuffer};

/// Records every write instead of storing it.
struct Recorder {
    rows: u16,
    cols: u16,
    writes: Vec<(u16, u16)>,
}

impl Canvas for Recorder {
    fn extent(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn put(&mut self, row: u16, col: u16, _ch: char, _style: CellStyle) {
        self.writes.push((row, col));
    }
}

fn sprite_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z# ]{0,8}", 0..6).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn draw_stays_inside_and_skips_corner(
        rows in 1u16..20,
        cols in 1u16..20,
        row in -10.0f64..30.0,
        col in -10.0f64..30.0,
        text in sprite_text(),
        erase in any::<bool>(),
    ) {
        let mut canvas = Recorder { rows, cols, writes: Vec::new() };
        draw_frame(&mut canvas, row, col, &Sprite::new(&text), erase);

        for &(r, c) in &canvas.writes {
            prop_assert!(r < rows && c < cols);
            prop_assert!(!(r == rows - 1 && c == cols - 1));
        }
    }

    #[test]
    fn erase_undoes_draw(
        rows in 1u16..16,
        cols in 1u16..16,
        row in -6.0f64..20.0,
        col in -6.0f64..20.0,
        text in sprite_text(),
    ) {
        let mut fb = FrameBuffer::new(cols, rows);
        for y in 0..rows {
            fb.put_str(0, y, &".".repeat(cols as usize), CellStyle::normal());
        }
        let before = fb.text();
        let sprite = Sprite::new(&text);

        draw_frame(&mut fb, row, col, &sprite, false);
        draw_frame(&mut fb, row, col, &sprite, true);

        let after = fb.text();
        for (a, b) in before.chars().zip(after.chars()) {
            // Every cell is either untouched or blanked.
            prop_assert!(a == b || b == ' ');
        }

        // Drawing again onto the erased area and erasing leaves it blank.
        let mut blank = FrameBuffer::new(cols, rows);
        draw_frame(&mut blank, row, col, &sprite, false);
        draw_frame(&mut blank, row, col, &sprite, true);
        prop_assert!(blank.text().chars().all(|ch| ch == ' ' || ch == '\n'));
    }
}

#[test]
fn erase_keeps_background_under_sprite_spaces() {
    let mut fb = FrameBuffer::new(5, 2);
    fb.put_str(0, 0, ".....", CellStyle::normal());
    let sprite = Sprite::new("a a a");
    draw_frame(&mut fb, 0.0, 0.0, &sprite, false);
    draw_frame(&mut fb, 0.0, 0.0, &sprite, true);
    assert_eq!(fb.row_text(0), " . . ");
}
