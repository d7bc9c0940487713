//! Area, centroid and bounding box of a finalized hull.
//!
//! Input is a convex vertex cycle in the given winding. The shoelace sum is
//! taken relative to the first vertex and negated for clockwise input; the
//! reported area is never negative.
//!
//! Degenerate conventions:
//! - 0 vertices: area NaN, centroid NaN.
//! - 1 vertex: area 0, centroid NaN (undefined).
//! - 2 vertices: area 0, centroid at the segment midpoint.
//! - 3+ vertices with area below `AREA_EPS`: centroid is the vertex average.

use nalgebra::Point2;

use super::types::{BoundingBox2, Winding};

/// Below this area the centroid formula is ill-conditioned; use the vertex average.
const AREA_EPS: f64 = 1e-15;

#[inline]
fn nan_point() -> Point2<f64> {
    Point2::new(f64::NAN, f64::NAN)
}

/// Returns `(area, centroid)` of the convex polygon `vertices`.
pub fn area_and_centroid(vertices: &[Point2<f64>], winding: Winding) -> (f64, Point2<f64>) {
    let n = vertices.len();
    match n {
        0 => return (f64::NAN, nan_point()),
        1 => return (0.0, nan_point()),
        2 => return (0.0, nalgebra::center(&vertices[0], &vertices[1])),
        _ => {}
    }

    // Fan sums relative to the first vertex.
    let o = vertices[0];
    let mut a = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 1..n - 1 {
        let p = vertices[i] - o;
        let q = vertices[i + 1] - o;
        let w = p.x * q.y - q.x * p.y;
        a += w;
        cx += (p.x + q.x) * w;
        cy += (p.y + q.y) * w;
    }
    if winding.is_clockwise() {
        a = -a;
        cx = -cx;
        cy = -cy;
    }
    let area = 0.5 * a;
    if area <= AREA_EPS {
        return (area.max(0.0), vertex_average(vertices));
    }
    let s = 1.0 / (6.0 * area);
    (area, o + nalgebra::Vector2::new(cx * s, cy * s))
}

fn vertex_average(vertices: &[Point2<f64>]) -> Point2<f64> {
    let sum = vertices
        .iter()
        .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / vertices.len() as f64)
}

/// Componentwise min/max of `vertices`; NaN box when empty.
pub fn bounding_box(vertices: &[Point2<f64>]) -> BoundingBox2 {
    let Some(first) = vertices.first() else {
        return BoundingBox2::nan();
    };
    let mut min = *first;
    let mut max = *first;
    for p in &vertices[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    BoundingBox2::from_min_max(min, max)
}
