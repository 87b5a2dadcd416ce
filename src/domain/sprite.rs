//! Rectangular sprite taking part in collision resolution, either as the moving body or as a
//! wall.

use thiserror::Error;

use super::{Angle, HasCollision, HitBox, Position};

/// A positioned, oriented rectangle.
///
/// The half-extents are fixed at construction. The `change_*` fields hold the motion to apply
/// on the next engine step. The engine reads them but never clears them.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Sprite {
    position: Position,
    angle: Angle,
    half_width: f64,
    half_height: f64,
    change_x: f64,
    change_y: f64,
    change_angle: Angle,
}

impl Sprite {
    pub fn new(half_width: f64, half_height: f64) -> Result<Self, SpriteError> {
        if !half_width.is_finite() || !half_height.is_finite() {
            return Err(SpriteError::NonFinite {
                half_width,
                half_height,
            });
        }
        if half_width <= 0.0 || half_height <= 0.0 {
            return Err(SpriteError::NonPositiveHalfExtent {
                half_width,
                half_height,
            });
        }
        Ok(Self {
            position: Position::default(),
            angle: Angle::default(),
            half_width,
            half_height,
            change_x: 0.0,
            change_y: 0.0,
            change_angle: Angle::default(),
        })
    }

    /// Sprite sized after a `width` x `height` image.
    pub fn with_size(width: f64, height: f64) -> Result<Self, SpriteError> {
        Self::new(width / 2.0, height / 2.0)
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    pub fn change_x(&self) -> f64 {
        self.change_x
    }

    pub fn change_y(&self) -> f64 {
        self.change_y
    }

    pub fn change_angle(&self) -> Angle {
        self.change_angle
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_angle(&mut self, angle: Angle) {
        self.angle = angle;
    }

    pub fn set_change_x(&mut self, change_x: f64) {
        self.change_x = change_x;
    }

    pub fn set_change_y(&mut self, change_y: f64) {
        self.change_y = change_y;
    }

    pub fn set_change_angle(&mut self, change_angle: Angle) {
        self.change_angle = change_angle;
    }

    /// Sets all pending motion at once.
    pub fn set_motion(&mut self, change_x: f64, change_y: f64, change_angle: Angle) {
        self.change_x = change_x;
        self.change_y = change_y;
        self.change_angle = change_angle;
    }

    /// Pose and pending motion are all finite numbers.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.angle.is_finite()
            && self.change_x.is_finite()
            && self.change_y.is_finite()
            && self.change_angle.is_finite()
    }
}

impl HasCollision for Sprite {
    fn hit_box(&self) -> HitBox {
        HitBox::new(self.position, self.half_width, self.half_height, self.angle)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpriteError {
    #[error("sprite half-extents must be positive, got {half_width} x {half_height}")]
    NonPositiveHalfExtent { half_width: f64, half_height: f64 },
    #[error("sprite half-extents must be finite, got {half_width} x {half_height}")]
    NonFinite { half_width: f64, half_height: f64 },
}
