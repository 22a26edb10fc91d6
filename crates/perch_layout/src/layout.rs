//! Geometry value types in document coordinates.

use crate::constants::OFFSCREEN;

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Check if either dimension is zero (an unmeasured or detached node).
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// A top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub left: f64,
    pub top: f64,
}

impl Point {
    /// Position used to park a hidden element outside the visible page.
    pub const OFFSCREEN: Self = Self {
        left: OFFSCREEN,
        top: OFFSCREEN,
    };

    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.left + rhs.left, self.top + rhs.top)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.left - rhs.left, self.top - rhs.top)
    }
}

/// An axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Build a rectangle from its top-left corner and a size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.top, origin.left, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Check if a point is inside this rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.left >= self.left
            && point.left <= self.right()
            && point.top >= self.top
            && point.top <= self.bottom()
    }

    /// Move the rectangle by the given offset, keeping its size.
    pub fn translate(&self, by: Point) -> Rectangle {
        Rectangle::new(self.top + by.top, self.left + by.left, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_edges() {
        let rect = Rectangle::new(100.0, 50.0, 20.0, 10.0);
        assert_eq!(rect.right(), 70.0);
        assert_eq!(rect.bottom(), 110.0);
        assert_eq!(rect.center(), Point::new(60.0, 105.0));
    }

    #[test]
    fn rectangle_contains() {
        let rect = Rectangle::new(100.0, 50.0, 20.0, 10.0);
        assert!(rect.contains(Point::new(55.0, 105.0)));
        assert!(!rect.contains(Point::new(10.0, 105.0)));
        assert!(!rect.contains(Point::new(55.0, 200.0)));
    }

    #[test]
    fn translate_keeps_size() {
        let rect = Rectangle::new(10.0, 20.0, 5.0, 6.0).translate(Point::new(1.0, 2.0));
        assert_eq!(rect, Rectangle::new(12.0, 21.0, 5.0, 6.0));
    }

    #[test]
    fn empty_size() {
        assert!(Size::zero().is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(!Size::new(10.0, 1.0).is_empty());
    }
}
