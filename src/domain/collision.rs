//! Collision detection between rotated rectangles.
//!
//! Every participant is reduced to a [`HitBox`]: a center, two half-extents and an orientation.
//! Overlap is decided with the separating axis test over the world axes and the edge normals of
//! both boxes. Boxes that merely touch are not overlapping.

use nalgebra::{Rotation2, Vector2};

use super::{Angle, Position};

/// Cross products below this are treated as parallel axes.
const PARALLEL_EPSILON: f64 = 1e-12;

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.hit_box().overlaps(&other.hit_box())
    }

    fn hit_box(&self) -> HitBox;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox {
    position: Position,
    half_width: f64,
    half_height: f64,
    angle: Angle,
}

impl HitBox {
    pub fn new(position: Position, half_width: f64, half_height: f64, angle: Angle) -> Self {
        Self {
            position,
            half_width,
            half_height,
            angle,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// World-space corners, counter-clockwise. Callers must not rely on which corner comes first.
    pub fn corners(&self) -> [Position; 4] {
        let rotation = self.rotation();
        let center: Vector2<f64> = self.position.into();
        [
            (-self.half_width, -self.half_height),
            (self.half_width, -self.half_height),
            (self.half_width, self.half_height),
            (-self.half_width, self.half_height),
        ]
        .map(|(x, y)| (center + rotation * Vector2::new(x, y)).into())
    }

    /// Half of the span of the corners projected onto `axis`, which must have unit length.
    pub fn projected_half_extent_on_axis(&self, axis: Vector2<f64>) -> f64 {
        let [u, v] = self.edge_normals();
        self.half_width * u.dot(&axis).abs() + self.half_height * v.dot(&axis).abs()
    }

    /// Lower-left and upper-right corner of the world-aligned box enclosing the hit box.
    pub fn bounding_box(&self) -> (Position, Position) {
        let extent = Position::new(
            self.projected_half_extent_on_axis(Vector2::x()),
            self.projected_half_extent_on_axis(Vector2::y()),
        );
        (self.position - extent, self.position + extent)
    }

    pub fn overlaps(&self, other: &HitBox) -> bool {
        if !self.bounding_box_overlaps(other) {
            return false;
        }

        let mut axes: Vec<Vector2<f64>> = Vec::with_capacity(6);
        for axis in [Vector2::x(), Vector2::y()]
            .into_iter()
            .chain(self.edge_normals())
            .chain(other.edge_normals())
        {
            if axes
                .iter()
                .all(|a| a.perp(&axis).abs() >= PARALLEL_EPSILON)
            {
                axes.push(axis);
            }
        }

        axes.iter().all(|axis| !self.is_separated_along(other, *axis))
    }

    fn bounding_box_overlaps(&self, other: &HitBox) -> bool {
        let (min, max) = self.bounding_box();
        let (other_min, other_max) = other.bounding_box();
        min.x() < other_max.x()
            && other_min.x() < max.x()
            && min.y() < other_max.y()
            && other_min.y() < max.y()
    }

    fn is_separated_along(&self, other: &HitBox, axis: Vector2<f64>) -> bool {
        let offset: Vector2<f64> = (other.position - self.position).into();
        let reach =
            self.projected_half_extent_on_axis(axis) + other.projected_half_extent_on_axis(axis);
        offset.dot(&axis).abs() >= reach
    }

    fn edge_normals(&self) -> [Vector2<f64>; 2] {
        let rotation = self.rotation();
        [rotation * Vector2::x(), rotation * Vector2::y()]
    }

    fn rotation(&self) -> Rotation2<f64> {
        Rotation2::new(self.angle.radians())
    }
}

impl HasCollision for HitBox {
    fn hit_box(&self) -> HitBox {
        *self
    }
}
