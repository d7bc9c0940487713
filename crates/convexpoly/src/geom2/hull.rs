//! In-place gift wrap (Jarvis march) convex hull.
//!
//! The first `n` points of a buffer are reordered so that the clockwise hull
//! occupies `[0, h)`; the returned `h` is the hull size. Points that end up in
//! `[h, n)` are interior, redundant (collinear on an edge) or duplicates, and
//! are left there as scratch. No allocation happens.
//!
//! Conventions
//! - Index 0 of the hull is the min-x vertex, ties broken by max y.
//! - Collinear candidates are resolved by distance: the farthest point wins,
//!   so no three consecutive hull vertices are collinear.
//! - Degenerate inputs give degenerate hulls: one distinct point → 1, all
//!   points collinear → the 2 extreme points.

use nalgebra::Point2;

use super::types::HullCfg;

/// z-component of `(b - a) × (c - a)`. Positive when `c` is left of `a → b`.
#[inline]
pub(crate) fn cross(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Index of the vertex with minimum x, ties broken by maximum y.
pub fn min_x_max_y_index(points: &[Point2<f64>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        best = match best {
            None => Some(i),
            Some(b) => {
                let q = points[b];
                if p.x < q.x || (p.x == q.x && p.y > q.y) {
                    Some(i)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}

/// Whether `r` should replace `cand` as the next clockwise hull vertex after `last`.
#[inline]
fn beats(last: Point2<f64>, cand: Point2<f64>, r: Point2<f64>, cfg: &HullCfg) -> bool {
    let a = cand - last;
    let b = r - last;
    let c = a.x * b.y - a.y * b.x;
    let tol = cfg.eps_collinear * a.norm() * b.norm();
    if c > tol {
        // r is left of last → cand: cand cannot be a clockwise hull edge.
        return true;
    }
    if c >= -tol {
        // Collinear: keep the farthest point in the same direction.
        return a.dot(&b) > 0.0 && b.norm_squared() > a.norm_squared();
    }
    false
}

/// Reorder `points[..n]` so that its clockwise convex hull comes first; return the hull size.
///
/// Panics if `n > points.len()`.
pub fn gift_wrap_in_place(points: &mut [Point2<f64>], n: usize, cfg: &HullCfg) -> usize {
    assert!(n <= points.len(), "hull size {n} exceeds buffer length");
    let Some(start) = min_x_max_y_index(&points[..n]) else {
        return 0;
    };
    points.swap(0, start);

    let eps_dup2 = cfg.eps_duplicate * cfg.eps_duplicate;
    let first = points[0];
    let mut hull_len = 1usize;

    while hull_len < n {
        let last = points[hull_len - 1];
        // Closing back on the first vertex is a candidate once the hull has an edge.
        let mut best: Option<usize> = (hull_len > 1).then_some(0);
        for i in hull_len..n {
            let r = points[i];
            if (r - last).norm_squared() <= eps_dup2 {
                continue;
            }
            if hull_len > 1 && (r - first).norm_squared() <= eps_dup2 {
                continue;
            }
            best = match best {
                Some(b) if !beats(last, points[b], r, cfg) => Some(b),
                _ => Some(i),
            };
        }
        match best {
            None | Some(0) => break,
            Some(b) => {
                points.swap(hull_len, b);
                hull_len += 1;
            }
        }
    }
    hull_len
}

/// True when `vertices` is a strictly convex clockwise cycle (no collinear triples).
///
/// One and two vertices are accepted as degenerate hulls when distinct.
pub fn is_strictly_convex_clockwise(vertices: &[Point2<f64>]) -> bool {
    let n = vertices.len();
    match n {
        0 | 1 => true,
        2 => vertices[0] != vertices[1],
        _ => (0..n).all(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let c = vertices[(i + 2) % n];
            cross(a, b, c) < 0.0
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn hull_of(pts: &[Point2<f64>]) -> Vec<Point2<f64>> {
        let mut buf = pts.to_vec();
        let n = buf.len();
        let h = gift_wrap_in_place(&mut buf, n, &HullCfg::default());
        buf.truncate(h);
        buf
    }

    #[test]
    fn square_with_interior_and_edge_points() {
        let h = hull_of(&[
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.5, 0.5),
            p(0.5, 0.0),
        ]);
        assert_eq!(h, vec![p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0)]);
        assert!(is_strictly_convex_clockwise(&h));
    }

    #[test]
    fn degenerate_inputs() {
        assert!(hull_of(&[]).is_empty());
        assert_eq!(hull_of(&[p(2.0, 3.0)]), vec![p(2.0, 3.0)]);
        assert_eq!(hull_of(&[p(2.0, 3.0), p(2.0, 3.0), p(2.0, 3.0)]).len(), 1);
        assert_eq!(
            hull_of(&[p(1.0, 0.0), p(0.0, 0.0), p(2.0, 0.0)]),
            vec![p(0.0, 0.0), p(2.0, 0.0)]
        );
        // vertical line: start is the top point
        assert_eq!(
            hull_of(&[p(0.0, 0.0), p(0.0, 2.0), p(0.0, 1.0)]),
            vec![p(0.0, 2.0), p(0.0, 0.0)]
        );
    }

    #[test]
    fn duplicates_are_dropped() {
        let h = hull_of(&[
            p(0.0, 0.0),
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 2.0),
            p(1.0, 2.0),
            p(0.0, 0.0),
        ]);
        assert_eq!(h.len(), 3);
        assert!(is_strictly_convex_clockwise(&h));
    }

    #[test]
    fn respects_logical_length() {
        let mut buf = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(9.0, 9.0)];
        let h = gift_wrap_in_place(&mut buf, 3, &HullCfg::default());
        assert_eq!(h, 3);
        assert!(!buf[..3].contains(&p(9.0, 9.0)));
        assert_eq!(buf[3], p(9.0, 9.0));
    }

    #[test]
    fn start_vertex_tie_break() {
        let pts = [p(0.0, -1.0), p(0.0, 4.0), p(3.0, 0.0), p(0.0, 2.0)];
        assert_eq!(min_x_max_y_index(&pts), Some(1));
        assert_eq!(min_x_max_y_index(&[]), None);
    }
}
