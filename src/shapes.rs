//! Plain records shared by the method and trait drills.
//!
//! Mutating operations take `&mut self`; read-only ones take `self` by copy
//! or `&self`. Nothing here aliases implicitly.

use std::fmt;

/// Anything with a non-negative magnitude.
pub trait Measurable {
    fn abs(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scales this point in place.
    pub fn scale(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }

    /// Returns a scaled copy; the receiver is consumed by value, so the
    /// caller's `Copy` original is left as it was.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.scale(factor);
        self
    }
}

impl Measurable for Point {
    fn abs(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.x, self.y)
    }
}

pub fn abs_of(point: Point) -> f64 {
    point.abs()
}

pub fn scale_in_place(point: &mut Point, factor: f64) {
    point.x *= factor;
    point.y *= factor;
}

/// Signed float with a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scalar(pub f64);

impl Measurable for Scalar {
    fn abs(&self) -> f64 {
        if self.0 < 0.0 {
            -self.0
        } else {
            self.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} years)", self.name, self.age)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4(pub [u8; 4]);

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_abs() {
        assert_eq!(Point::new(3.0, 4.0).abs(), 5.0);
        assert_eq!(abs_of(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_scale_mutates_only_through_exclusive_reference() {
        let mut p = Point::new(3.0, 4.0);
        let original = p;

        let copy = original.scaled(10.0);
        assert_eq!(original, Point::new(3.0, 4.0));
        assert_eq!(copy.abs(), 50.0);

        p.scale(2.0);
        scale_in_place(&mut p, 10.0);
        assert_eq!(p, Point::new(60.0, 80.0));
    }

    #[test]
    fn test_measurable_trait_objects() {
        let items: Vec<Box<dyn Measurable>> = vec![
            Box::new(Scalar(-std::f64::consts::SQRT_2)),
            Box::new(Point::new(3.0, 4.0)),
        ];
        let magnitudes: Vec<f64> = items.iter().map(|m| m.abs()).collect();
        assert_eq!(magnitudes, vec![std::f64::consts::SQRT_2, 5.0]);
    }

    #[test]
    fn test_display_impls() {
        assert_eq!(Person::new("Arthur Dent", 42).to_string(), "Arthur Dent (42 years)");
        assert_eq!(Ipv4([8, 8, 8, 8]).to_string(), "8.8.8.8");
        assert_eq!(Point::new(1.0, 2.0).to_string(), "{1 2}");
    }
}
