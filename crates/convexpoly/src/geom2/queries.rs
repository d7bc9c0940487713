//! Read-only geometric queries on a finalized convex vertex cycle.
//!
//! Every function takes the hull as a slice plus its winding and assumes the
//! slice is already convex; `ConvexPolygon2` guards that with its state check.

use nalgebra::Point2;

use super::hull::cross;
use super::types::Winding;

/// True when `p` is strictly on the outer side of the edge `a → b`.
#[inline]
fn is_outside_edge(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>, winding: Winding) -> bool {
    let c = cross(a, b, p);
    match winding {
        Winding::Clockwise => c > 0.0,
        Winding::CounterClockwise => c < 0.0,
    }
}

/// Closest point to `p` on the segment `[a, b]`.
pub fn closest_point_on_segment(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> Point2<f64> {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return a;
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

#[inline]
pub fn distance_squared_to_segment(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    (p - closest_point_on_segment(p, a, b)).norm_squared()
}

/// Signed distance from `p` to the polygon boundary: negative inside, NaN when empty.
///
/// One vertex: distance to the point. Two vertices: distance to the segment.
pub fn signed_distance(p: Point2<f64>, vertices: &[Point2<f64>], winding: Winding) -> f64 {
    let n = vertices.len();
    match n {
        0 => return f64::NAN,
        1 => return (p - vertices[0]).norm(),
        2 => return distance_squared_to_segment(p, vertices[0], vertices[1]).sqrt(),
        _ => {}
    }
    let mut outside = false;
    let mut min_d2 = f64::INFINITY;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        outside |= is_outside_edge(p, a, b, winding);
        min_d2 = min_d2.min(distance_squared_to_segment(p, a, b));
    }
    let d = min_d2.sqrt();
    if outside {
        d
    } else {
        -d
    }
}

/// Containment with slack: `eps > 0` enlarges the polygon, `eps < 0` shrinks it.
#[inline]
pub fn is_point_inside(p: Point2<f64>, vertices: &[Point2<f64>], winding: Winding, eps: f64) -> bool {
    signed_distance(p, vertices, winding) <= eps
}

/// Closest point of the polygon to `p`; `None` when empty.
///
/// One vertex projects onto that vertex and two vertices onto the segment,
/// whatever `p` is. From three vertices on, `None` is also returned when `p`
/// is inside (or on the boundary).
pub fn orthogonal_projection(
    p: Point2<f64>,
    vertices: &[Point2<f64>],
    winding: Winding,
) -> Option<Point2<f64>> {
    match vertices.len() {
        0 => None,
        1 => Some(vertices[0]),
        2 => Some(closest_point_on_segment(p, vertices[0], vertices[1])),
        _ => {
            let e = closest_edge_index(p, vertices, winding)?;
            let a = vertices[e];
            let b = vertices[(e + 1) % vertices.len()];
            if signed_distance(p, vertices, winding) <= 0.0 {
                return None;
            }
            Some(closest_point_on_segment(p, a, b))
        }
    }
}

/// Whether `observer` sees the outer side of edge `edge → edge + 1`; false on the edge line.
///
/// Panics if `edge >= vertices.len()`.
#[inline]
pub fn can_observer_see_edge(
    edge: usize,
    observer: Point2<f64>,
    vertices: &[Point2<f64>],
    winding: Winding,
) -> bool {
    let n = vertices.len();
    is_outside_edge(observer, vertices[edge], vertices[(edge + 1) % n], winding)
}

/// First and last vertex bounding the chain of edges visible from `observer`.
///
/// `None` when the polygon is empty or the observer is inside it. A single
/// vertex gives `(0, 0)` unless the observer sits on it; a segment gives its
/// two endpoints ordered by the side the observer is on.
pub fn line_of_sight_indices(
    observer: Point2<f64>,
    vertices: &[Point2<f64>],
    winding: Winding,
) -> Option<(usize, usize)> {
    let n = vertices.len();
    match n {
        0 => return None,
        1 => return (vertices[0] != observer).then_some((0, 0)),
        2 => {
            if is_point_inside(observer, vertices, winding, 0.0) {
                return None;
            }
            return Some(if can_observer_see_edge(0, observer, vertices, winding) {
                (0, 1)
            } else {
                (1, 0)
            });
        }
        _ => {}
    }
    let mut start = None;
    let mut end = None;
    let mut prev_visible = can_observer_see_edge(n - 1, observer, vertices, winding);
    for edge in 0..n {
        let visible = can_observer_see_edge(edge, observer, vertices, winding);
        if visible && !prev_visible && start.is_none() {
            start = Some(edge);
        }
        if !visible && prev_visible && end.is_none() {
            end = Some(edge);
        }
        prev_visible = visible;
    }
    start.zip(end)
}

/// Whether `p` is within `eps` of the boundary; false when empty.
#[inline]
pub fn is_point_on_perimeter(
    p: Point2<f64>,
    vertices: &[Point2<f64>],
    winding: Winding,
    eps: f64,
) -> bool {
    signed_distance(p, vertices, winding).abs() <= eps
}

/// Index of the vertex nearest to `p`; `None` when empty.
pub fn closest_vertex_index(p: Point2<f64>, vertices: &[Point2<f64>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in vertices.iter().enumerate() {
        let d2 = (p - v).norm_squared();
        if best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((i, d2));
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the edge (starting vertex) nearest to `p`; `None` below two vertices.
///
/// For an outside query only edges facing `p` are considered.
pub fn closest_edge_index(p: Point2<f64>, vertices: &[Point2<f64>], winding: Winding) -> Option<usize> {
    let n = vertices.len();
    if n < 2 {
        return None;
    }
    let mut outside_any = false;
    let mut best_in: Option<(usize, f64)> = None;
    let mut best_out: Option<(usize, f64)> = None;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let d2 = distance_squared_to_segment(p, a, b);
        let slot = if is_outside_edge(p, a, b, winding) {
            outside_any = true;
            &mut best_out
        } else {
            &mut best_in
        };
        if slot.map_or(true, |(_, bd)| d2 < bd) {
            *slot = Some((i, d2));
        }
    }
    let pick = if outside_any { best_out } else { best_in };
    pick.map(|(i, _)| i)
}
