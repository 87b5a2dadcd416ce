//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, Mul, Sub},
};

use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (f64, f64) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

impl From<Position> for Vector2<f64> {
    fn from(value: Position) -> Self {
        Vector2::new(value.x, value.y)
    }
}

impl From<Vector2<f64>> for Position {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Orientation, stored in radians. Sprites are usually turned in degrees, so most callers go
/// through [`Angle::from_deg`].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    /// Degrees without normalisation, so accumulated turns stay visible.
    pub fn degrees(self) -> f64 {
        self.0 * (180.0 / PI)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_position() {
        let position = Position::new(1.0, 2.0);
        assert_abs_diff_eq!(position.x(), 1.0);
        assert_abs_diff_eq!(position.y(), 2.0);
    }

    #[test]
    fn test_position_arithmetic() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(-3.0, 0.5);
        assert_abs_diff_eq!(a + b, Position::new(-2.0, 2.5));
        assert_abs_diff_eq!(a - b, Position::new(4.0, 1.5));
        assert_abs_diff_eq!(b * 2.0, Position::new(-6.0, 1.0));
    }

    #[test]
    fn test_position_vector_conversion() {
        let vector: Vector2<f64> = Position::new(3.0, -4.0).into();
        assert_eq!(vector, Vector2::new(3.0, -4.0));
        assert_eq!(Position::from(vector), Position::new(3.0, -4.0));
        assert_eq!(<(f64, f64)>::from(Position::from((1.5, 2.5))), (1.5, 2.5));
    }

    #[test]
    fn test_position_is_finite() {
        assert!(Position::new(1.0, -1.0).is_finite());
        assert!(!Position::new(f64::NAN, 0.0).is_finite());
        assert!(!Position::new(0.0, f64::INFINITY).is_finite());
    }

    #[rstest]
    #[case(Angle::new(0.0), 0.0)]
    #[case(Angle::new(0.5 * PI), 90.0)]
    #[case(Angle::new(-0.5 * PI), -90.0)]
    #[case(Angle::from_deg(45.0), 45.0)]
    fn test_angle_degrees(#[case] angle: Angle, #[case] expected: f64) {
        assert_abs_diff_eq!(angle.degrees(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_degrees_accumulate() {
        let angle = Angle::from_deg(300.0) + Angle::from_deg(90.0);
        assert_abs_diff_eq!(angle.degrees(), 390.0, epsilon = 1e-9);
        assert!(!angle.is_zero());
        assert!(Angle::default().is_zero());
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }

    impl AbsDiffEq for Angle {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.0, &other.0, epsilon)
        }
    }
}
