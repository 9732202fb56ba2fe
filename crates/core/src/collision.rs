//! Axis-aligned collision test used by projectiles, garbage and the ship.
//!
//! Two rectangles collide when a corner of one lies inside the other. Each
//! rectangle contributes its near corner and its far corner, giving four
//! containment checks. This is looser than an interval-overlap test in some
//! configurations (e.g. a thin rectangle crossing a wide one without either
//! corner inside) and that behavior is kept as is.

/// Integer cell rectangle: corner (row, col) and size (rows, cols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub row: i32,
    pub col: i32,
    pub rows: i32,
    pub cols: i32,
}

impl Rect {
    pub const fn new(row: i32, col: i32, rows: i32, cols: i32) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }

    /// A single cell.
    pub const fn point(row: i32, col: i32) -> Self {
        Self::new(row, col, 1, 1)
    }

    /// Top-left cell.
    pub fn near_corner(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Bottom-right cell (`corner + size - 1`).
    pub fn far_corner(&self) -> (i32, i32) {
        (self.row + self.rows - 1, self.col + self.cols - 1)
    }

    /// `corner <= p < corner + size` on both axes.
    pub fn contains(&self, (row, col): (i32, i32)) -> bool {
        let rows_inside = self.row <= row && row < self.row + self.rows;
        let cols_inside = self.col <= col && col < self.col + self.cols;
        rows_inside && cols_inside
    }

    /// Grow by `n` cells on every side.
    pub fn padded(&self, n: i32) -> Self {
        Self::new(self.row - n, self.col - n, self.rows + 2 * n, self.cols + 2 * n)
    }
}

/// Snap a floating coordinate to its cell, rounding halves to even.
///
/// Positions advance in half-cell steps, so the tie rule decides which cell
/// an object occupies on every other tick.
pub fn to_cell(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// Corner-containment collision test. Symmetric in its arguments.
pub fn has_collision(a: &Rect, b: &Rect) -> bool {
    b.contains(a.near_corner())
        || b.contains(a.far_corner())
        || a.contains(b.near_corner())
        || a.contains(b.far_corner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_squares_collide() {
        assert!(has_collision(&Rect::new(0, 0, 2, 2), &Rect::new(1, 1, 2, 2)));
    }

    #[test]
    fn diagonal_neighbour_does_not_collide() {
        // (2, 2) is one past the far corner (1, 1).
        assert!(!has_collision(&Rect::new(0, 0, 2, 2), &Rect::new(2, 2, 1, 1)));
    }

    #[test]
    fn point_inside_collides() {
        let r = Rect::new(5, 5, 3, 4);
        assert!(has_collision(&r, &Rect::point(6, 8)));
        assert!(!has_collision(&r, &Rect::point(6, 9)));
        assert!(!has_collision(&r, &Rect::point(8, 6)));
    }

    #[test]
    fn cross_shape_without_corners_inside_is_missed() {
        // A tall thin bar crossing a wide flat bar: no corner of either lies
        // inside the other, so the corner test reports no collision.
        let tall = Rect::new(0, 5, 10, 1);
        let wide = Rect::new(4, 0, 1, 10);
        assert!(!has_collision(&tall, &wide));
        assert!(!has_collision(&wide, &tall));
    }

    #[test]
    fn to_cell_rounds_half_to_even() {
        assert_eq!(to_cell(0.5), 0);
        assert_eq!(to_cell(1.5), 2);
        assert_eq!(to_cell(2.5), 2);
        assert_eq!(to_cell(2.6), 3);
        assert_eq!(to_cell(-0.5), 0);
        assert_eq!(to_cell(-1.6), -2);
    }

    #[test]
    fn padding_grows_every_side() {
        let r = Rect::new(3, 4, 2, 5).padded(1);
        assert_eq!(r, Rect::new(2, 3, 4, 7));
        assert_eq!(r.far_corner(), (5, 9));
    }
}
