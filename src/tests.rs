//! Test utils.

use crate::domain::{Position, Sprite};

/// A 10 x 10 sprite centered at `(x, y)`.
pub fn square(x: f64, y: f64) -> Sprite {
    Sprite::new(5.0, 5.0)
        .unwrap()
        .at(Position::new(x, y))
}
