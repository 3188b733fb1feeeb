// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for the trajectory test: tolerance-expanded corners, slopes, and the wedge check.
//!
//! All coordinates are page coordinates (y grows downward). Because y grows
//! downward, a pointer closing in on the upper-right corner of a menu sees the
//! slope to that corner *decrease*, while the slope to the lower-right corner
//! increases.

use kurbo::{Point, Rect, Vec2};

use crate::types::SubmenuDirection;

/// Slope of the line from `a` to `b` (Δy / Δx).
///
/// Vertical lines produce `±inf` and coincident points produce `NaN`; both
/// fail the comparisons in [`is_heading_toward`].
pub fn slope(a: Point, b: Point) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

/// Convert a viewport-relative rectangle into page coordinates.
pub fn page_rect(client: Rect, scroll_offset: Vec2) -> Rect {
    client + scroll_offset
}

/// Corners of a container box grown by a vertical tolerance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Corners {
    /// Top-left corner, `tolerance` above the container.
    pub upper_left: Point,
    /// Top-right corner, `tolerance` above the container.
    pub upper_right: Point,
    /// Bottom-left corner, `tolerance` below the container.
    pub lower_left: Point,
    /// Bottom-right corner, `tolerance` below the container.
    pub lower_right: Point,
}

impl Corners {
    /// Grow `bounds` by `tolerance` on the top and bottom edges.
    pub fn new(bounds: Rect, tolerance: f64) -> Self {
        let top = bounds.y0 - tolerance;
        let bottom = bounds.y1 + tolerance;
        Self {
            upper_left: Point::new(bounds.x0, top),
            upper_right: Point::new(bounds.x1, top),
            lower_left: Point::new(bounds.x0, bottom),
            lower_right: Point::new(bounds.x1, bottom),
        }
    }

    /// The expanded box as a rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.upper_left, self.lower_right)
    }

    /// Whether `pt` lies inside the expanded box, edges included.
    ///
    /// Non-finite points are never inside.
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.upper_left.x
            && pt.x <= self.lower_right.x
            && pt.y >= self.upper_left.y
            && pt.y <= self.lower_right.y
    }

    /// The `(decreasing, increasing)` corner pair for a submenu direction.
    ///
    /// While the pointer moves into the submenu, its slope to the decreasing
    /// corner falls and its slope to the increasing corner rises.
    pub fn for_direction(&self, direction: SubmenuDirection) -> (Point, Point) {
        match direction {
            SubmenuDirection::Right => (self.upper_right, self.lower_right),
            SubmenuDirection::Left => (self.lower_left, self.upper_left),
            SubmenuDirection::Below => (self.lower_right, self.lower_left),
            SubmenuDirection::Above => (self.upper_left, self.upper_right),
        }
    }
}

/// Whether moving from `prev` to `loc` converges on the wedge spanned by the two corners.
pub fn is_heading_toward(loc: Point, prev: Point, decreasing: Point, increasing: Point) -> bool {
    slope(loc, decreasing) < slope(prev, decreasing)
        && slope(loc, increasing) > slope(prev, increasing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Corners {
        Corners::new(Rect::new(0.0, 0.0, 200.0, 100.0), 75.0)
    }

    #[test]
    fn corners_expand_vertically_only() {
        let c = menu();
        assert_eq!(c.upper_left, Point::new(0.0, -75.0));
        assert_eq!(c.upper_right, Point::new(200.0, -75.0));
        assert_eq!(c.lower_left, Point::new(0.0, 175.0));
        assert_eq!(c.lower_right, Point::new(200.0, 175.0));
        assert_eq!(c.to_rect(), Rect::new(0.0, -75.0, 200.0, 175.0));
    }

    #[test]
    fn contains_includes_edges_and_tolerance() {
        let c = menu();
        assert!(c.contains(Point::new(0.0, -75.0)));
        assert!(c.contains(Point::new(200.0, 150.0)));
        assert!(!c.contains(Point::new(200.5, 50.0)));
        assert!(!c.contains(Point::new(50.0, 176.0)));
        assert!(!c.contains(Point::new(f64::NAN, 50.0)));
    }

    #[test]
    fn page_rect_applies_scroll() {
        let r = page_rect(Rect::new(10.0, 20.0, 110.0, 70.0), Vec2::new(0.0, 500.0));
        assert_eq!(r, Rect::new(10.0, 520.0, 110.0, 570.0));
    }

    #[test]
    fn rightward_motion_heads_toward_right_submenu() {
        let c = menu();
        let (dec, inc) = c.for_direction(SubmenuDirection::Right);
        assert!(is_heading_toward(
            Point::new(150.0, 50.0),
            Point::new(100.0, 50.0),
            dec,
            inc
        ));
        // Moving back left is not.
        assert!(!is_heading_toward(
            Point::new(100.0, 50.0),
            Point::new(150.0, 50.0),
            dec,
            inc
        ));
    }

    #[test]
    fn vertical_motion_along_rows_is_not_aiming() {
        let c = menu();
        let (dec, inc) = c.for_direction(SubmenuDirection::Right);
        assert!(!is_heading_toward(
            Point::new(100.0, 80.0),
            Point::new(100.0, 20.0),
            dec,
            inc
        ));
    }

    #[test]
    fn each_direction_accepts_motion_toward_its_side() {
        let c = menu();
        let center = Point::new(100.0, 50.0);
        let cases = [
            (SubmenuDirection::Left, Point::new(60.0, 50.0)),
            (SubmenuDirection::Right, Point::new(140.0, 50.0)),
            (SubmenuDirection::Above, Point::new(100.0, 20.0)),
            (SubmenuDirection::Below, Point::new(100.0, 80.0)),
        ];
        for (dir, loc) in cases {
            let (dec, inc) = c.for_direction(dir);
            assert!(
                is_heading_toward(loc, center, dec, inc),
                "expected aiming toward {dir}"
            );
        }
    }

    #[test]
    fn degenerate_geometry_never_aims() {
        // Zero-width container: every slope to a corner on x = 0 from x = 0 is non-finite.
        let c = Corners::new(Rect::new(0.0, 0.0, 0.0, 100.0), 75.0);
        let (dec, inc) = c.for_direction(SubmenuDirection::Right);
        assert!(!is_heading_toward(
            Point::new(0.0, 60.0),
            Point::new(0.0, 40.0),
            dec,
            inc
        ));
        assert!(slope(Point::ZERO, Point::ZERO).is_nan());
    }
}
