//! Uniform collider contract and dispatch.
//!
//! [`Collider`] is the closed enumeration of the four built-in shape kinds.
//! [`Intersect`] is the extension seam: a third-party shape kind implements
//! it to become testable against the built-ins. Dispatch always bottoms out
//! in one per-built-in-kind method, so there is no "unknown vs unknown"
//! re-dispatch and no way to recurse.

use crate::inters::*;
use crate::shape::{Circle, Line, Polygon, Rect};
use crate::Vec2;

/// Shape-kind tag. The four built-ins are closed; `Custom` carries the tag
/// of a third-party [`Intersect`] implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rect,
    Polygon,
    Line,
    Custom(&'static str),
}

/// Capability contract for anything testable against the built-in shapes.
///
/// Implementing this is all a third-party shape kind needs to participate
/// in [`Collider::intersects`]: the collider routes to the `*_test` method
/// matching its own kind, handing over its shape value. For the built-in
/// impls every ordered kind pair lands on the single pairwise function in
/// [`crate::inters`] for that unordered pair, which makes intersection
/// symmetric by construction.
pub trait Intersect {
    fn kind(&self) -> ShapeKind;

    /// Point containment.
    fn contains(&self, pos: Vec2) -> bool;

    fn circle_test(&self, circle: &Circle) -> bool;
    fn rect_test(&self, rect: &Rect) -> bool;
    fn poly_test(&self, poly: &Polygon) -> bool;
    fn seg_test(&self, seg: &Line) -> bool;
}

impl Intersect for Circle {
    #[inline]
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
    #[inline]
    fn contains(&self, pos: Vec2) -> bool {
        point_circle_test(pos, self)
    }
    #[inline]
    fn circle_test(&self, circle: &Circle) -> bool {
        circle_circle_test(self, circle)
    }
    #[inline]
    fn rect_test(&self, rect: &Rect) -> bool {
        rect_circle_test(rect, self)
    }
    #[inline]
    fn poly_test(&self, poly: &Polygon) -> bool {
        circle_poly_test(self, poly)
    }
    #[inline]
    fn seg_test(&self, seg: &Line) -> bool {
        circle_seg_test(self, seg)
    }
}

impl Intersect for Rect {
    #[inline]
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rect
    }
    #[inline]
    fn contains(&self, pos: Vec2) -> bool {
        point_rect_test(pos, self)
    }
    #[inline]
    fn circle_test(&self, circle: &Circle) -> bool {
        rect_circle_test(self, circle)
    }
    #[inline]
    fn rect_test(&self, rect: &Rect) -> bool {
        rect_rect_test(self, rect)
    }
    #[inline]
    fn poly_test(&self, poly: &Polygon) -> bool {
        rect_poly_test(self, poly)
    }
    #[inline]
    fn seg_test(&self, seg: &Line) -> bool {
        rect_seg_test(self, seg)
    }
}

impl Intersect for Polygon {
    #[inline]
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }
    #[inline]
    fn contains(&self, pos: Vec2) -> bool {
        point_poly_test(pos, self)
    }
    #[inline]
    fn circle_test(&self, circle: &Circle) -> bool {
        circle_poly_test(circle, self)
    }
    #[inline]
    fn rect_test(&self, rect: &Rect) -> bool {
        rect_poly_test(rect, self)
    }
    #[inline]
    fn poly_test(&self, poly: &Polygon) -> bool {
        poly_poly_test(self, poly)
    }
    #[inline]
    fn seg_test(&self, seg: &Line) -> bool {
        seg_poly_test(seg, self)
    }
}

impl Intersect for Line {
    #[inline]
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }
    #[inline]
    fn contains(&self, pos: Vec2) -> bool {
        point_seg_test(pos, self)
    }
    #[inline]
    fn circle_test(&self, circle: &Circle) -> bool {
        circle_seg_test(circle, self)
    }
    #[inline]
    fn rect_test(&self, rect: &Rect) -> bool {
        rect_seg_test(rect, self)
    }
    #[inline]
    fn poly_test(&self, poly: &Polygon) -> bool {
        seg_poly_test(self, poly)
    }
    #[inline]
    fn seg_test(&self, seg: &Line) -> bool {
        seg_seg_test(self, seg)
    }
}

/// An immutable collider: one variant per built-in shape kind.
///
/// `a.intersects(&b) == b.intersects(&a)` holds for any two built-in
/// colliders, since both directions resolve to the same pairwise function.
#[derive(Clone, Debug, PartialEq)]
pub enum Collider {
    Circle(Circle),
    Rect(Rect),
    Polygon(Polygon),
    Line(Line),
}

impl Collider {
    #[inline]
    pub fn circle(circle: Circle) -> Collider {
        Collider::Circle(circle)
    }
    #[inline]
    pub fn rect(rect: Rect) -> Collider {
        Collider::Rect(rect)
    }
    #[inline]
    pub fn polygon(polygon: Polygon) -> Collider {
        Collider::Polygon(polygon)
    }
    #[inline]
    pub fn line(line: Line) -> Collider {
        Collider::Line(line)
    }

    /// Tests against any [`Intersect`] implementor, built-in or third-party.
    pub fn intersects<T: Intersect + ?Sized>(&self, other: &T) -> bool {
        match self {
            Collider::Circle(c) => other.circle_test(c),
            Collider::Rect(r) => other.rect_test(r),
            Collider::Polygon(p) => other.poly_test(p),
            Collider::Line(l) => other.seg_test(l),
        }
    }
}

impl Intersect for Collider {
    fn kind(&self) -> ShapeKind {
        match self {
            Collider::Circle(c) => c.kind(),
            Collider::Rect(r) => r.kind(),
            Collider::Polygon(p) => p.kind(),
            Collider::Line(l) => l.kind(),
        }
    }
    fn contains(&self, pos: Vec2) -> bool {
        match self {
            Collider::Circle(c) => c.contains(pos),
            Collider::Rect(r) => r.contains(pos),
            Collider::Polygon(p) => p.contains(pos),
            Collider::Line(l) => l.contains(pos),
        }
    }
    fn circle_test(&self, circle: &Circle) -> bool {
        match self {
            Collider::Circle(c) => c.circle_test(circle),
            Collider::Rect(r) => r.circle_test(circle),
            Collider::Polygon(p) => p.circle_test(circle),
            Collider::Line(l) => l.circle_test(circle),
        }
    }
    fn rect_test(&self, rect: &Rect) -> bool {
        match self {
            Collider::Circle(c) => c.rect_test(rect),
            Collider::Rect(r) => r.rect_test(rect),
            Collider::Polygon(p) => p.rect_test(rect),
            Collider::Line(l) => l.rect_test(rect),
        }
    }
    fn poly_test(&self, poly: &Polygon) -> bool {
        match self {
            Collider::Circle(c) => c.poly_test(poly),
            Collider::Rect(r) => r.poly_test(poly),
            Collider::Polygon(p) => p.poly_test(poly),
            Collider::Line(l) => l.poly_test(poly),
        }
    }
    fn seg_test(&self, seg: &Line) -> bool {
        match self {
            Collider::Circle(c) => c.seg_test(seg),
            Collider::Rect(r) => r.seg_test(seg),
            Collider::Polygon(p) => p.seg_test(seg),
            Collider::Line(l) => l.seg_test(seg),
        }
    }
}
