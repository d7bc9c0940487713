//! Vertex ingestion capability.
//!
//! `VertexSource` is the one path every input takes into a polygon: a point
//! count plus indexed access. Sources that already hold a finalized hull
//! refine it with `ConvexPolygonSource`, which the engine discovers through
//! `VertexSource::as_convex_polygon` to take the copy-only fast path.

use nalgebra::{Point2, Point3};

use super::types::{BoundingBox2, Winding};
use crate::error::Result;

/// Anything that can hand out a finite sequence of 2D points.
pub trait VertexSource {
    fn vertex_count(&self) -> usize;

    /// Point at `index`; callers guarantee `index < vertex_count()`.
    fn vertex_at(&self, index: usize) -> Point2<f64>;

    /// Capability query for the fast copy path. Plain point sources keep the default.
    fn as_convex_polygon(&self) -> Option<&dyn ConvexPolygonSource> {
        None
    }
}

/// A source whose vertices may already form a convex hull with cached derived data.
///
/// The accessors fail with `PolygonError::Outdated` when the source is dirty;
/// ingestion then falls back to a full hull recomputation.
pub trait ConvexPolygonSource: VertexSource {
    fn winding(&self) -> Winding;
    fn is_up_to_date(&self) -> bool;
    fn area(&self) -> Result<f64>;
    fn centroid(&self) -> Result<Point2<f64>>;
    fn bounding_box(&self) -> Result<BoundingBox2>;

    /// True when the hull can be copied verbatim into a polygon of `winding`.
    #[inline]
    fn same_ordering_as(&self, winding: Winding) -> bool {
        self.winding() == winding
    }
}

impl VertexSource for [Point2<f64>] {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }
    #[inline]
    fn vertex_at(&self, index: usize) -> Point2<f64> {
        self[index]
    }
}

impl VertexSource for Vec<Point2<f64>> {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }
    #[inline]
    fn vertex_at(&self, index: usize) -> Point2<f64> {
        self[index]
    }
}

impl VertexSource for [[f64; 2]] {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }
    #[inline]
    fn vertex_at(&self, index: usize) -> Point2<f64> {
        let [x, y] = self[index];
        Point2::new(x, y)
    }
}

impl<const N: usize> VertexSource for [Point2<f64>; N] {
    #[inline]
    fn vertex_count(&self) -> usize {
        N
    }
    #[inline]
    fn vertex_at(&self, index: usize) -> Point2<f64> {
        self[index]
    }
}

/// 3D points seen from above: the z coordinate is dropped.
#[derive(Clone, Copy, Debug)]
pub struct Projected3<'a>(pub &'a [Point3<f64>]);

impl VertexSource for Projected3<'_> {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.0.len()
    }
    #[inline]
    fn vertex_at(&self, index: usize) -> Point2<f64> {
        let p = self.0[index];
        Point2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sources_have_no_hull_capability() {
        let pts = vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        assert_eq!(pts.vertex_count(), 2);
        assert_eq!(pts.vertex_at(1), Point2::new(3.0, 4.0));
        assert!(pts.as_convex_polygon().is_none());

        let raw: &[[f64; 2]] = &[[0.5, -1.0]];
        assert_eq!(raw.vertex_at(0), Point2::new(0.5, -1.0));
    }

    #[test]
    fn projection_drops_z() {
        let pts = [Point3::new(1.0, 2.0, 9.0), Point3::new(-1.0, 0.0, -3.0)];
        let src = Projected3(&pts);
        assert_eq!(src.vertex_count(), 2);
        assert_eq!(src.vertex_at(0), Point2::new(1.0, 2.0));
        assert_eq!(src.vertex_at(1), Point2::new(-1.0, 0.0));
    }
}
