//! Ship speed model: accelerate toward the pressed direction, fade otherwise.

use crate::types::{Direction, SPEED_FADING, SPEED_LIMIT};

/// Speed limits and fading factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedModel {
    pub row_limit: f64,
    pub col_limit: f64,
    /// Multiplier in `[0, 1]` applied to both speeds every update.
    pub fading: f64,
}

impl Default for SpeedModel {
    fn default() -> Self {
        Self {
            row_limit: SPEED_LIMIT,
            col_limit: SPEED_LIMIT,
            fading: SPEED_FADING,
        }
    }
}

impl SpeedModel {
    /// New (row_speed, col_speed) after one tick of input.
    pub fn update(
        &self,
        row_speed: f64,
        col_speed: f64,
        row_dir: Direction,
        col_dir: Direction,
    ) -> (f64, f64) {
        let fading = self.fading.clamp(0.0, 1.0);
        let mut row_speed = row_speed * fading;
        let mut col_speed = col_speed * fading;

        if !row_dir.is_zero() {
            row_speed = accelerate(row_speed, self.row_limit, row_dir);
        }
        if !col_dir.is_zero() {
            col_speed = accelerate(col_speed, self.col_limit, col_dir);
        }

        (row_speed, col_speed)
    }
}

/// [`SpeedModel::update`] with the default model.
pub fn update_speed(
    row_speed: f64,
    col_speed: f64,
    row_dir: Direction,
    col_dir: Direction,
) -> (f64, f64) {
    SpeedModel::default().update(row_speed, col_speed, row_dir, col_dir)
}

fn accelerate(speed: f64, limit: f64, dir: Direction) -> f64 {
    let limit = limit.abs();
    if limit == 0.0 {
        return 0.0;
    }

    // Large kick from rest, smaller increments near the limit.
    let delta = (speed / limit).cos() * 0.75;
    let result = (speed + delta * dir.as_f64()).clamp(-limit, limit);

    if result.abs() < 0.1 {
        0.0
    } else {
        result
    }
}
