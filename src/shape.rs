//! Shape value types.
//!
//! All fields are public and all shapes are plain immutable values; the
//! kernel never retains one beyond a single call. Rect, Circle and Polygon
//! pair a raw `new` with a validating `try_new` that rejects malformed
//! parameters up front; raw construction remains possible - validity is
//! then the caller's problem.

use crate::{Error, Fp, Vec2};

/// Width/height extents. Expected non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: Fp,
    pub height: Fp,
}
impl Size {
    #[inline]
    pub fn new(width: Fp, height: Fp) -> Size {
        Size { width, height }
    }
}

/// An axis-aligned rectangle. `pos` is the minimum corner; the extents grow
/// toward +x/+y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Size,
}
impl Rect {
    #[inline]
    pub fn new(x: Fp, y: Fp, width: Fp, height: Fp) -> Rect {
        Rect {
            pos: Vec2::new(x, y),
            size: Size::new(width, height),
        }
    }
    /// Validating constructor: rejects negative extents.
    pub fn try_new(x: Fp, y: Fp, width: Fp, height: Fp) -> Result<Rect, Error> {
        if width < 0.0 || height < 0.0 {
            Err(Error::NegativeExtent)
        } else {
            Ok(Rect::new(x, y, width, height))
        }
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + Vec2::new(self.size.width, self.size.height)
    }
    #[inline]
    pub fn translate(self, offset: Vec2) -> Rect {
        Rect {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// The four corners: min, max-x/min-y, min-x/max-y, max.
    pub fn corners(&self) -> [Vec2; 4] {
        let max = self.max();
        [
            self.pos,
            Vec2::new(max.x, self.pos.y),
            Vec2::new(self.pos.x, max.y),
            max,
        ]
    }
    /// The four edges, wound from the min corner.
    pub fn edges(&self) -> [Line; 4] {
        let max = self.max();
        let maxx_miny = Vec2::new(max.x, self.pos.y);
        let minx_maxy = Vec2::new(self.pos.x, max.y);
        [
            Line::new(self.pos, maxx_miny),
            Line::new(maxx_miny, max),
            Line::new(max, minx_maxy),
            Line::new(minx_maxy, self.pos),
        ]
    }
}

/// A circle. Radius expected non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub rad: Fp,
    pub pos: Vec2,
}
impl Circle {
    #[inline]
    pub fn new(rad: Fp, posx: Fp, posy: Fp) -> Circle {
        Circle {
            rad,
            pos: Vec2::new(posx, posy),
        }
    }
    /// Validating constructor: rejects a negative radius.
    pub fn try_new(rad: Fp, posx: Fp, posy: Fp) -> Result<Circle, Error> {
        if rad < 0.0 {
            Err(Error::NegativeRadius)
        } else {
            Ok(Circle::new(rad, posx, posy))
        }
    }
    #[inline]
    pub fn translate(self, offset: Vec2) -> Circle {
        Circle {
            pos: self.pos + offset,
            rad: self.rad,
        }
    }
}

/// A line segment. May be degenerate (`start == end`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}
impl Line {
    #[inline]
    pub fn new(start: Vec2, end: Vec2) -> Line {
        Line { start, end }
    }
    #[inline]
    pub fn translate(self, offset: Vec2) -> Line {
        Line {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// A simple polygon given as an ordered vertex sequence, implicitly closed.
///
/// The edge-list and ray-cast tests assume the polygon is simple
/// (non-self-intersecting); this is a precondition, not validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
}
impl Polygon {
    #[inline]
    pub fn new(points: Vec<Vec2>) -> Polygon {
        Polygon { points }
    }
    /// Validating constructor: requires at least three vertices.
    pub fn try_new(points: Vec<Vec2>) -> Result<Polygon, Error> {
        if points.len() < 3 {
            Err(Error::InsufficientVertices)
        } else {
            Ok(Polygon { points })
        }
    }

    /// Iterates the edges `points[i] -> points[(i + 1) % n]`.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Line::new(self.points[i], self.points[(i + 1) % n]))
    }
    pub fn translate(mut self, offset: Vec2) -> Polygon {
        for p in self.points.iter_mut() {
            *p += offset;
        }
        self
    }
}
