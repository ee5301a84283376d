//! Point-containment predicates and pairwise shape intersection tests.
//!
//! Everything here is a pure boolean function over immutable shape values:
//! no side effects, no allocation beyond transient edge iteration, safe to
//! call from any thread. One function exists per unordered shape-kind pair;
//! the [`crate::collide`] layer routes every ordered pair to it, which is
//! what makes collider intersection symmetric.

use crate::shape::{Circle, Line, Polygon, Rect};
use crate::{Fp, Vec2};
use approx::abs_diff_eq;

// ---------- Point predicates ---------- //

#[inline]
pub fn pos_eq(a: Vec2, b: Vec2) -> bool {
    //! Componentwise equality under machine epsilon. A strict tolerance:
    //! suitable for at most one operation's worth of rounding, not for
    //! accumulated floating error.
    abs_diff_eq!(a, b, epsilon = Fp::EPSILON)
}

#[inline]
pub fn point_rect_test(pos: Vec2, rect: &Rect) -> bool {
    //! Half-open containment: `x` in `[min.x, max.x)`, `y` in `[min.y, max.y)`.
    //! Points on the min edges are in, points on the max edges are out.
    let max = rect.max();
    pos.x >= rect.pos.x && pos.x < max.x && pos.y >= rect.pos.y && pos.y < max.y
}

#[inline]
pub fn point_circle_test(pos: Vec2, circle: &Circle) -> bool {
    //! Closed containment: the boundary counts, unlike `point_rect_test`.
    circle.pos.distance_squared(pos) <= circle.rad * circle.rad
}

pub fn point_seg_test(pos: Vec2, seg: &Line) -> bool {
    //! Strict on-segment test: true only if the closest point on the segment
    //! equals `pos` under `pos_eq`. Not a thickness/tolerance test. A
    //! degenerate segment contains only its own point.
    let d = seg.end - seg.start;
    let len2 = d.length_squared();
    if len2 == 0.0 {
        return pos_eq(pos, seg.start);
    }

    let t = (pos - seg.start).dot(d) / len2;
    if t < 0.0 || t > 1.0 {
        return false;
    }
    pos_eq(pos, seg.start + d * t)
}

pub fn point_poly_test(pos: Vec2, poly: &Polygon) -> bool {
    //! Even-odd ray cast: toggles on every polygon edge crossed by the
    //! horizontal ray through `pos`. Fewer than three vertices contains
    //! nothing. Assumes the polygon is simple.
    let n = poly.points.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = poly.points[i];
        let pj = poly.points[j];
        j = i;

        // skip edges with both endpoints on the same side of the ray; this
        // also excludes horizontal edges at pos.y, so the division below
        // always sees a nonzero delta-y
        if (pi.y > pos.y) == (pj.y > pos.y) {
            continue;
        }

        let d = pj - pi;
        if pos.x < d.x * (pos.y - pi.y) / d.y + pi.x {
            inside = !inside;
        }
    }
    inside
}

// ---------- Pairwise intersection tests ---------- //

#[inline]
pub fn seg_seg_test(a: &Line, b: &Line) -> bool {
    //! Returns whether the two segments cross. Parallel and collinear
    //! segments report `false`, even when truly overlapping - a documented
    //! simplification, covered by tests.
    let da = a.end - a.start;
    let db = b.end - b.start;

    let dot = da.perp_dot(db);
    if dot == 0.0 {
        return false;
    }
    let dd = dot * dot;

    // multiplied-through form of the parametric coefficients, avoiding the
    // division until both range checks pass
    let nd = a.start - b.start;
    let tdd = da.perp_dot(nd) * dot;
    let udd = db.perp_dot(nd) * dot;
    udd >= 0.0 && udd <= dd && tdd >= 0.0 && tdd <= dd
}

#[inline]
pub fn circle_circle_test(a: &Circle, b: &Circle) -> bool {
    //! Touching circles count as intersecting.
    let rad_sum = a.rad + b.rad;
    a.pos.distance_squared(b.pos) <= rad_sum * rad_sum
}

pub fn circle_seg_test(circle: &Circle, seg: &Line) -> bool {
    //! Solves the quadratic for `start + t * (end - start)` against the
    //! circle; intersecting iff either root lands in `[0, 1]`. A zero-length
    //! segment degrades to a point-in-circle test rather than dividing by
    //! zero.
    let d = seg.end - seg.start;
    let f = seg.start - circle.pos;

    let a = d.length_squared();
    if a == 0.0 {
        return point_circle_test(seg.start, circle);
    }
    let b = 2.0 * f.dot(d);
    let c = f.length_squared() - circle.rad * circle.rad;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    (t1 >= 0.0 && t1 <= 1.0) || (t2 >= 0.0 && t2 <= 1.0)
}

pub fn seg_poly_test(seg: &Line, poly: &Polygon) -> bool {
    //! True if any polygon vertex lies on the segment, or the segment
    //! crosses any polygon edge.
    poly.points.iter().any(|&p| point_seg_test(p, seg))
        || poly.edges().any(|edge| seg_seg_test(seg, &edge))
}

pub fn circle_poly_test(circle: &Circle, poly: &Polygon) -> bool {
    //! Vertex-or-center-or-edge triad: any polygon vertex in the circle, or
    //! the circle center inside the polygon (catches a polygon fully
    //! swallowing the circle), or the circle crossing any polygon edge.
    poly.points.iter().any(|&p| point_circle_test(p, circle))
        || point_poly_test(circle.pos, poly)
        || poly.edges().any(|edge| circle_seg_test(circle, &edge))
}

#[inline]
pub fn rect_rect_test(a: &Rect, b: &Rect) -> bool {
    //! AABB overlap with strict comparisons on both axes: rects sharing an
    //! edge do NOT overlap.
    let amax = a.max();
    let bmax = b.max();
    a.pos.x < bmax.x && amax.x > b.pos.x && a.pos.y < bmax.y && amax.y > b.pos.y
}

#[inline]
pub fn rect_circle_test(rect: &Rect, circle: &Circle) -> bool {
    //! Clamps the circle center to the rect bounds and point-in-circle
    //! tests the closest point.
    let max = rect.max();
    let closest = Vec2::new(
        Fp::max(rect.pos.x, Fp::min(circle.pos.x, max.x)),
        Fp::max(rect.pos.y, Fp::min(circle.pos.y, max.y)),
    );
    point_circle_test(closest, circle)
}

pub fn rect_poly_test(rect: &Rect, poly: &Polygon) -> bool {
    //! Vertex-or-corner-or-edge triad over the rect's materialized corners
    //! and edges. Note the vertex leg inherits `point_rect_test`'s half-open
    //! boundary; the edge leg still catches max-edge contact that crosses.
    if poly.points.iter().any(|&p| point_rect_test(p, rect)) {
        return true;
    }
    if rect.corners().iter().any(|&c| point_poly_test(c, poly)) {
        return true;
    }
    let edges = rect.edges();
    poly.edges()
        .any(|pe| edges.iter().any(|re| seg_seg_test(re, &pe)))
}

pub fn rect_seg_test(rect: &Rect, seg: &Line) -> bool {
    //! True if any rect corner lies on the segment, or the segment crosses
    //! any of the four rect edges.
    rect.corners().iter().any(|&c| point_seg_test(c, seg))
        || rect.edges().iter().any(|edge| seg_seg_test(seg, edge))
}

pub fn poly_poly_test(a: &Polygon, b: &Polygon) -> bool {
    //! Any vertex of either polygon inside the other, or any edge of `a`
    //! crossing any edge of `b`. Full O(|a|*|b|) edge cross-check; polygons
    //! are expected small.
    if a.points.iter().any(|&p| point_poly_test(p, b)) {
        return true;
    }
    if b.points.iter().any(|&p| point_poly_test(p, a)) {
        return true;
    }
    a.edges()
        .any(|ea| b.edges().any(|eb| seg_seg_test(&ea, &eb)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: Fp, y: Fp) -> Vec2 {
        Vec2::new(x, y)
    }
    fn tri() -> Polygon {
        Polygon::new(vec![v(0.0, 0.0), v(2.0, 0.0), v(1.0, 2.0)])
    }
    fn square(x: Fp, y: Fp, side: Fp) -> Polygon {
        Polygon::new(vec![
            v(x, y),
            v(x + side, y),
            v(x + side, y + side),
            v(x, y + side),
        ])
    }

    #[test]
    fn rect_half_open_boundary() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(point_rect_test(v(0.0, 0.0), &r), true);
        assert_eq!(point_rect_test(v(1.0, 0.0), &r), false);
        assert_eq!(point_rect_test(v(0.0, 1.0), &r), false);
        assert_eq!(point_rect_test(v(0.5, 0.5), &r), true);
    }

    #[test]
    fn circle_closed_boundary() {
        let c = Circle::new(1.0, 0.0, 0.0);
        assert_eq!(point_circle_test(v(1.0, 0.0), &c), true);
        assert_eq!(point_circle_test(v(1.0 + 1e-3, 0.0), &c), false);
        // zero radius contains exactly its center
        let dot = Circle::new(0.0, 3.0, 4.0);
        assert_eq!(point_circle_test(v(3.0, 4.0), &dot), true);
        assert_eq!(point_circle_test(v(3.0, 4.5), &dot), false);
    }

    #[test]
    fn point_on_segment() {
        let l = Line::new(v(0.0, 0.0), v(2.0, 2.0));
        assert_eq!(point_seg_test(v(1.0, 1.0), &l), true);
        assert_eq!(point_seg_test(v(1.0, 1.5), &l), false);
        // endpoints are on, extensions beyond them are not
        assert_eq!(point_seg_test(v(2.0, 2.0), &l), true);
        assert_eq!(point_seg_test(v(3.0, 3.0), &l), false);
    }

    #[test]
    fn point_on_degenerate_segment() {
        let dot = Line::new(v(1.0, 1.0), v(1.0, 1.0));
        assert_eq!(point_seg_test(v(1.0, 1.0), &dot), true);
        assert_eq!(point_seg_test(v(1.0, 1.25), &dot), false);
    }

    #[test]
    fn ray_cast_convex_and_concave() {
        let sq = square(0.0, 0.0, 4.0);
        assert_eq!(point_poly_test(v(2.0, 2.0), &sq), true);
        assert_eq!(point_poly_test(v(5.0, 2.0), &sq), false);
        assert_eq!(point_poly_test(v(-1.0, 2.0), &sq), false);

        // concave arrowhead: the notch at the middle is outside
        let arrow = Polygon::new(vec![
            v(0.0, 0.0),
            v(4.0, 0.0),
            v(4.0, 4.0),
            v(2.0, 1.0),
            v(0.0, 4.0),
        ]);
        assert_eq!(point_poly_test(v(2.0, 0.5), &arrow), true);
        assert_eq!(point_poly_test(v(2.0, 3.0), &arrow), false);
        assert_eq!(point_poly_test(v(3.8, 3.0), &arrow), true);
    }

    #[test]
    fn ray_cast_at_vertex_latitude() {
        // horizontal ray exactly through vertices and a horizontal edge;
        // the same-side skip keeps the division defined
        let sq = square(0.0, 0.0, 2.0);
        assert_eq!(point_poly_test(v(1.0, 0.0), &sq), true);
        assert_eq!(point_poly_test(v(3.0, 0.0), &sq), false);
        assert_eq!(point_poly_test(v(1.0, 2.0), &sq), false);
    }

    #[test]
    fn seg_seg_crossing_and_parallel() {
        let a = Line::new(v(0.0, 0.0), v(2.0, 2.0));
        let b = Line::new(v(0.0, 2.0), v(2.0, 0.0));
        assert_eq!(seg_seg_test(&a, &b), true);

        // parallel, non-collinear
        let c = Line::new(v(0.0, 0.0), v(1.0, 0.0));
        let d = Line::new(v(0.0, 1.0), v(1.0, 1.0));
        assert_eq!(seg_seg_test(&c, &d), false);

        // collinear overlap also reports false by the determinant guard
        let e = Line::new(v(0.0, 0.0), v(2.0, 0.0));
        let f = Line::new(v(1.0, 0.0), v(3.0, 0.0));
        assert_eq!(seg_seg_test(&e, &f), false);

        // disjoint and non-parallel: crossing point outside both ranges
        let g = Line::new(v(0.0, 0.0), v(1.0, 1.0));
        let h = Line::new(v(5.0, 0.0), v(5.0, -4.0));
        assert_eq!(seg_seg_test(&g, &h), false);
    }

    #[test]
    fn circle_tangency_counts() {
        let a = Circle::new(1.0, 0.0, 0.0);
        let b = Circle::new(1.0, 2.0, 0.0);
        assert_eq!(circle_circle_test(&a, &b), true);
        let c = Circle::new(1.0, 2.5, 0.0);
        assert_eq!(circle_circle_test(&a, &c), false);
        // coincident centers
        assert_eq!(circle_circle_test(&a, &a), true);
    }

    #[test]
    fn circle_seg_roots() {
        let c = Circle::new(1.0, 0.0, 0.0);
        // secant through the middle
        assert_eq!(circle_seg_test(&c, &Line::new(v(-2.0, 0.0), v(2.0, 0.0))), true);
        // stops short of the circle
        assert_eq!(circle_seg_test(&c, &Line::new(v(2.0, 0.0), v(4.0, 0.0))), false);
        // misses entirely
        assert_eq!(circle_seg_test(&c, &Line::new(v(-2.0, 3.0), v(2.0, 3.0))), false);
        // one endpoint inside: exactly one root in range
        assert_eq!(circle_seg_test(&c, &Line::new(v(0.0, 0.0), v(4.0, 0.0))), true);
    }

    #[test]
    fn circle_seg_degenerate() {
        let c = Circle::new(1.0, 0.0, 0.0);
        let inside = Line::new(v(0.5, 0.0), v(0.5, 0.0));
        let outside = Line::new(v(3.0, 0.0), v(3.0, 0.0));
        assert_eq!(circle_seg_test(&c, &inside), true);
        assert_eq!(circle_seg_test(&c, &outside), false);
    }

    #[test]
    fn rect_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 1.0, 1.0);
        assert_eq!(rect_rect_test(&a, &b), false);
        let c = Rect::new(0.5, 0.5, 1.0, 1.0);
        assert_eq!(rect_rect_test(&a, &c), true);
        assert_eq!(rect_rect_test(&a, &a), true);
        let d = Rect::new(0.0, 1.0, 1.0, 1.0);
        assert_eq!(rect_rect_test(&a, &d), false);
    }

    #[test]
    fn rect_circle_closest_point() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        // circle centered past the max-x edge, reaching it
        assert_eq!(rect_circle_test(&r, &Circle::new(0.5, 2.4, 1.0)), true);
        assert_eq!(rect_circle_test(&r, &Circle::new(0.3, 2.4, 1.0)), false);
        // center inside the rect
        assert_eq!(rect_circle_test(&r, &Circle::new(0.1, 1.0, 1.0)), true);
        // diagonal corner approach
        assert_eq!(rect_circle_test(&r, &Circle::new(1.0, 3.0, 3.0)), false);
        assert_eq!(rect_circle_test(&r, &Circle::new(1.5, 3.0, 3.0)), true);
    }

    #[test]
    fn rect_poly_enclosing_and_disjoint() {
        let enclosing = Rect::new(-1.0, -1.0, 5.0, 5.0);
        assert_eq!(rect_poly_test(&enclosing, &tri()), true);
        let disjoint = Rect::new(10.0, 10.0, 1.0, 1.0);
        assert_eq!(rect_poly_test(&disjoint, &tri()), false);
        // rect fully inside the polygon: corner-in-polygon leg
        let big = square(-10.0, -10.0, 20.0);
        let small = Rect::new(-1.0, -1.0, 2.0, 2.0);
        assert_eq!(rect_poly_test(&small, &big), true);
    }

    #[test]
    fn rect_poly_edge_cross_only() {
        // plus-sign overlap: no vertex of either shape inside the other,
        // only edges cross
        let r = Rect::new(-3.0, 1.0, 6.0, 1.0);
        let bar = Polygon::new(vec![v(-1.0, -3.0), v(1.0, -3.0), v(1.0, 6.0), v(-1.0, 6.0)]);
        assert_eq!(rect_poly_test(&r, &bar), true);
    }

    #[test]
    fn rect_seg_crossing() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        // straight through
        assert_eq!(rect_seg_test(&r, &Line::new(v(-1.0, 1.0), v(3.0, 1.0))), true);
        // well clear
        assert_eq!(rect_seg_test(&r, &Line::new(v(-1.0, 5.0), v(3.0, 5.0))), false);
        // clips a corner
        assert_eq!(rect_seg_test(&r, &Line::new(v(1.0, 3.0), v(3.0, 1.0))), true);
    }

    #[test]
    fn poly_poly_overlap_and_containment() {
        let a = square(0.0, 0.0, 4.0);
        let b = square(2.0, 2.0, 4.0);
        assert_eq!(poly_poly_test(&a, &b), true);
        assert_eq!(poly_poly_test(&b, &a), true);

        let far = square(10.0, 10.0, 1.0);
        assert_eq!(poly_poly_test(&a, &far), false);

        // full containment: only the vertex legs can see it
        let inner = square(1.0, 1.0, 2.0);
        assert_eq!(poly_poly_test(&a, &inner), true);
        assert_eq!(poly_poly_test(&inner, &a), true);

        // a shape intersects an identical copy of itself
        assert_eq!(poly_poly_test(&tri(), &tri()), true);
    }

    #[test]
    fn poly_poly_edge_cross_only() {
        // star-of-david style: all vertices outside the other polygon
        let up = Polygon::new(vec![v(0.0, 3.0), v(-3.0, -2.0), v(3.0, -2.0)]);
        let down = Polygon::new(vec![v(0.0, -3.0), v(-3.0, 2.0), v(3.0, 2.0)]);
        assert_eq!(poly_poly_test(&up, &down), true);
    }

    #[test]
    fn seg_poly_crossing_and_degenerate_count() {
        let t = tri();
        assert_eq!(seg_poly_test(&Line::new(v(-1.0, 0.5), v(3.0, 0.5)), &t), true);
        assert_eq!(seg_poly_test(&Line::new(v(-1.0, 3.0), v(3.0, 3.0)), &t), false);
        // vertex-on-segment leg
        assert_eq!(seg_poly_test(&Line::new(v(-1.0, 2.0), v(3.0, 2.0)), &t), true);
    }

    #[test]
    fn results_are_idempotent() {
        let a = Circle::new(1.0, 0.0, 0.0);
        let b = Rect::new(0.5, 0.5, 1.0, 1.0);
        let first = rect_circle_test(&b, &a);
        for _ in 0..4 {
            assert_eq!(rect_circle_test(&b, &a), first);
        }
    }
}
