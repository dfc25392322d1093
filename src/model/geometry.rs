//! Minimal geometry in AppKit's coordinate conventions (points, origin at
//! bottom-left). Kept free of FFI so layout rules are testable.

use crate::clamp;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp both edges to [lo, hi].
    pub fn clamped(&self, lo: f64, hi: f64) -> Self {
        Self {
            width: clamp(self.width, lo, hi),
            height: clamp(self.height, lo, hi),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Bounds rectangle of a container: origin zero, same size.
    ///
    /// Full-bleed subviews (drop overlay, backdrop) always use this.
    pub fn bounds_of(size: Size) -> Self {
        Self {
            origin: Point::default(),
            size,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x + self.size.width
            && p.y >= self.origin.y
            && p.y < self.origin.y + self.size.height
    }

    /// A rectangle of `size` centred inside `self`.
    pub fn centered(&self, size: Size) -> Rect {
        Rect {
            origin: Point::new(
                self.origin.x + (self.size.width - size.width) / 2.0,
                self.origin.y + (self.size.height - size.height) / 2.0,
            ),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_has_zero_origin() {
        let r = Rect::bounds_of(Size::new(24.0, 22.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 24.0, 22.0));
    }

    #[test]
    fn centered_on_offset_screen() {
        let screen = Rect::new(1440.0, 0.0, 1920.0, 1080.0);
        let r = screen.centered(Size::new(480.0, 320.0));
        assert_eq!(r.origin, Point::new(1440.0 + 720.0, 380.0));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.9, 9.9)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn size_clamped() {
        let s = Size::new(10.0, 5000.0).clamped(100.0, 1000.0);
        assert_eq!(s, Size::new(100.0, 1000.0));
    }
}
