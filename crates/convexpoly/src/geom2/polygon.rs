//! Mutable convex polygon with a recycled vertex store (ConvexPolygon2).
//!
//! Purpose
//! - Hot-loop container for support polygons: vertices are added and removed
//!   at high frequency, the hull and its derived quantities are recomputed
//!   only on demand through `update()`.
//!
//! Storage
//! - `vertex_buffer` holds at least `num_vertices` points; slots past the
//!   logical end are scratch and get overwritten by the next `add_vertex`
//!   instead of being reallocated.
//! - After `update()` the hull occupies `[0, num_vertices)` in clockwise
//!   order starting at the min-x/max-y vertex.
//!
//! State
//! - Every query except `num_vertices()` requires the clean state and fails
//!   with `PolygonError::Outdated` otherwise. See `state::HullState` for the
//!   transition table.
//!
//! Code cross-refs: `hull::gift_wrap_in_place`, `derived`, `queries`, `source::VertexSource`

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Point2, Point3, Vector2};

use super::derived;
use super::hull::{gift_wrap_in_place, min_x_max_y_index};
use super::queries;
use super::source::{ConvexPolygonSource, Projected3, VertexSource};
use super::state::{HullEvent, HullState};
use super::types::{Affine2, BoundingBox2, HullCfg, Winding};
use crate::error::{PolygonError, Result};

/// Determinant magnitude under which a transform is treated as collapsing the polygon.
const DET_EPS: f64 = 1e-12;

/// Boundary slack used by `point_is_on_perimeter`.
const PERIMETER_EPS: f64 = 1e-10;

/// Convex polygon in clockwise order with cached area, centroid and bounding box.
#[derive(Clone, Debug)]
pub struct ConvexPolygon2 {
    vertex_buffer: Vec<Point2<f64>>,
    num_vertices: usize,
    winding: Winding,
    state: HullState,
    area: f64,
    centroid: Point2<f64>,
    bounding_box: BoundingBox2,
    cfg: HullCfg,
    hull_updates: u64,
}

impl Default for ConvexPolygon2 {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvexPolygon2 {
    /// Empty polygon, already clean.
    pub fn new() -> Self {
        Self::with_cfg(HullCfg::default())
    }

    pub fn with_cfg(cfg: HullCfg) -> Self {
        Self {
            vertex_buffer: Vec::new(),
            num_vertices: 0,
            winding: Winding::Clockwise,
            state: HullState::Clean,
            area: f64::NAN,
            centroid: Point2::new(f64::NAN, f64::NAN),
            bounding_box: BoundingBox2::nan(),
            cfg,
            hull_updates: 0,
        }
    }

    /// Empty polygon with room for `capacity` vertices before the first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut out = Self::new();
        out.vertex_buffer.reserve(capacity);
        out
    }

    /// Hull of any vertex source; clean on return.
    pub fn from_source<S: VertexSource + ?Sized>(source: &S) -> Self {
        let mut out = Self::new();
        out.set(source);
        out
    }

    pub fn from_points(points: &[Point2<f64>]) -> Self {
        Self::from_source(points)
    }

    /// Hull of 3D points projected onto the xy-plane.
    pub fn from_points3(points: &[Point3<f64>]) -> Self {
        Self::from_source(&Projected3(points))
    }

    /// Hull of the union of two sources.
    pub fn from_union<A, B>(first: &A, second: &B) -> Self
    where
        A: VertexSource + ?Sized,
        B: VertexSource + ?Sized,
    {
        let mut out = Self::new();
        out.set_union(first, second);
        out
    }

    /// Hull of rows `[x, y, ..]`; every row needs at least two columns.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let mut out = Self::new();
        out.add_vertex_rows(rows)?;
        out.update();
        Ok(out)
    }

    /// Hull of interleaved coordinates `[x0, y0, x1, y1, ..]`.
    pub fn from_flat(coords: &[f64]) -> Result<Self> {
        let mut out = Self::new();
        out.add_vertices_flat(coords)?;
        out.update();
        Ok(out)
    }

    // ---------------------------------------------------------------------
    // State and bookkeeping
    // ---------------------------------------------------------------------

    #[inline]
    pub fn cfg(&self) -> &HullCfg {
        &self.cfg
    }

    /// Replace the hull tolerances. The hull is recomputed on the next `update()`.
    pub fn set_cfg(&mut self, cfg: HullCfg) {
        self.cfg = cfg;
        self.mark(HullEvent::Mutation);
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    #[inline]
    pub fn is_clockwise_ordered(&self) -> bool {
        self.winding.is_clockwise()
    }

    #[inline]
    pub fn state(&self) -> HullState {
        self.state
    }

    #[inline]
    pub fn is_up_to_date(&self) -> bool {
        self.state.is_clean()
    }

    /// Number of hull-reducer runs since construction.
    #[inline]
    pub fn hull_updates(&self) -> u64 {
        self.hull_updates
    }

    /// Logical vertex count. Valid in any state.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// Number of point slots held by the store, including recycled scratch.
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.vertex_buffer.len()
    }

    /// Allocated capacity of the store.
    #[inline]
    pub fn buffer_capacity(&self) -> usize {
        self.vertex_buffer.capacity()
    }

    #[inline]
    fn mark(&mut self, event: HullEvent) {
        self.state = self.state.on(event);
    }

    #[inline]
    pub fn check_up_to_date(&self) -> Result<()> {
        if self.state.is_clean() {
            Ok(())
        } else {
            Err(PolygonError::Outdated)
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.num_vertices {
            Ok(())
        } else {
            Err(PolygonError::index(index, self.num_vertices))
        }
    }

    /// Mark the polygon dirty after writing through `vertex_unsafe_mut`.
    #[inline]
    pub fn notify_vertices_changed(&mut self) {
        self.mark(HullEvent::Mutation);
    }

    // ---------------------------------------------------------------------
    // Vertex store
    // ---------------------------------------------------------------------

    /// Write `p` at the logical end, reusing a scratch slot when one exists.
    #[inline]
    fn push_raw(&mut self, p: Point2<f64>) {
        if self.num_vertices < self.vertex_buffer.len() {
            self.vertex_buffer[self.num_vertices] = p;
        } else {
            self.vertex_buffer.push(p);
        }
        self.num_vertices += 1;
    }

    pub fn add_vertex(&mut self, x: f64, y: f64) {
        self.add_point(Point2::new(x, y));
    }

    pub fn add_point(&mut self, p: Point2<f64>) {
        self.mark(HullEvent::Mutation);
        self.push_raw(p);
    }

    /// Add the first `count` points of `points`.
    pub fn add_vertices(&mut self, points: &[Point2<f64>], count: usize) -> Result<()> {
        if count > points.len() {
            return Err(PolygonError::malformed(format!(
                "vertex count {count} exceeds the {} points provided",
                points.len()
            )));
        }
        self.mark(HullEvent::Mutation);
        for p in &points[..count] {
            self.push_raw(*p);
        }
        Ok(())
    }

    /// Add interleaved coordinates `[x0, y0, x1, y1, ..]`.
    pub fn add_vertices_flat(&mut self, coords: &[f64]) -> Result<()> {
        if coords.len() % 2 != 0 {
            return Err(PolygonError::malformed(format!(
                "odd coordinate count {}",
                coords.len()
            )));
        }
        self.mark(HullEvent::Mutation);
        for xy in coords.chunks_exact(2) {
            self.push_raw(Point2::new(xy[0], xy[1]));
        }
        Ok(())
    }

    /// Add rows `[x, y, ..]`; extra columns are ignored. Nothing is added on error.
    pub fn add_vertex_rows<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> Result<()> {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.as_ref().len() < 2) {
            return Err(PolygonError::malformed(format!(
                "row {i} has {} column(s), expected at least 2",
                row.as_ref().len()
            )));
        }
        self.mark(HullEvent::Mutation);
        for row in rows {
            let r = row.as_ref();
            self.push_raw(Point2::new(r[0], r[1]));
        }
        Ok(())
    }

    /// Append every point of `source` as raw input.
    pub fn add_vertices_from<S: VertexSource + ?Sized>(&mut self, source: &S) {
        self.mark(HullEvent::Mutation);
        for i in 0..source.vertex_count() {
            self.push_raw(source.vertex_at(i));
        }
    }

    /// Remove the vertex at `index`.
    ///
    /// Dropping the last vertex keeps the state: the remaining hull stays
    /// convex and ordered, only its derived quantities are refreshed. Any other
    /// index is swapped with the last vertex first, which breaks the hull
    /// order and marks the polygon dirty.
    pub fn remove_vertex(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let last = self.num_vertices - 1;
        if index == last {
            self.num_vertices = last;
            self.mark(HullEvent::TailRemoval);
            if self.state.is_clean() {
                self.refresh_derived();
            }
            return Ok(());
        }
        self.vertex_buffer.swap(index, last);
        self.num_vertices = last;
        self.mark(HullEvent::Mutation);
        Ok(())
    }

    /// Drop all vertices and reset derived quantities; the polygon is dirty.
    pub fn clear(&mut self) {
        self.num_vertices = 0;
        self.area = f64::NAN;
        self.centroid = Point2::new(f64::NAN, f64::NAN);
        self.bounding_box.set_to_nan();
        self.mark(HullEvent::Mutation);
    }

    /// `clear()` followed by the trivial update of an empty hull.
    pub fn clear_and_update(&mut self) {
        self.clear();
        self.mark(HullEvent::Updated);
    }

    /// Single vertex at the origin; clean on return.
    pub fn set_to_zero(&mut self) {
        self.clear();
        self.add_vertex(0.0, 0.0);
        self.update();
    }

    /// Single NaN vertex; clean on return, `contains_nan()` holds.
    pub fn set_to_nan(&mut self) {
        self.clear();
        self.add_vertex(f64::NAN, f64::NAN);
        self.update();
    }

    /// Overwrite vertex `index`; the polygon becomes dirty.
    pub fn set_vertex(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        self.check_index(index)?;
        self.vertex_buffer[index] = Point2::new(x, y);
        self.mark(HullEvent::Mutation);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Ingestion
    // ---------------------------------------------------------------------

    /// Replace the content with `source`.
    ///
    /// A clean convex polygon with the same winding is copied verbatim
    /// (vertices and derived quantities, no hull run). Anything else is
    /// ingested as raw points and re-hulled.
    pub fn set<S: VertexSource + ?Sized>(&mut self, source: &S) {
        if let Some(hull) = source.as_convex_polygon() {
            if hull.same_ordering_as(self.winding) && hull.is_up_to_date() {
                if let (Ok(area), Ok(centroid), Ok(bb)) =
                    (hull.area(), hull.centroid(), hull.bounding_box())
                {
                    self.copy_hull(hull, area, centroid, bb);
                    return;
                }
            }
        }
        tracing::debug!(count = source.vertex_count(), "set: re-hulling raw points");
        self.clear();
        self.add_vertices_from(source);
        self.update();
    }

    fn copy_hull(
        &mut self,
        hull: &dyn ConvexPolygonSource,
        area: f64,
        centroid: Point2<f64>,
        bounding_box: BoundingBox2,
    ) {
        tracing::trace!(count = hull.vertex_count(), "set: copying clean hull");
        self.num_vertices = 0;
        for i in 0..hull.vertex_count() {
            self.push_raw(hull.vertex_at(i));
        }
        self.area = area;
        self.centroid = centroid;
        self.bounding_box = bounding_box;
        self.mark(HullEvent::Updated);
    }

    /// Replace the content with the hull of both sources.
    pub fn set_union<A, B>(&mut self, first: &A, second: &B)
    where
        A: VertexSource + ?Sized,
        B: VertexSource + ?Sized,
    {
        self.clear();
        self.add_vertices_from(first);
        self.add_vertices_from(second);
        self.update();
    }

    // ---------------------------------------------------------------------
    // Hull
    // ---------------------------------------------------------------------

    /// Recompute the hull and derived quantities if dirty; O(1) when clean.
    pub fn update(&mut self) {
        if self.state.is_clean() {
            return;
        }
        let raw = self.num_vertices;
        self.num_vertices = gift_wrap_in_place(&mut self.vertex_buffer, raw, &self.cfg);
        self.refresh_derived();
        self.hull_updates += 1;
        self.mark(HullEvent::Updated);
        tracing::trace!(raw, hull = self.num_vertices, "hull updated");
    }

    fn refresh_derived(&mut self) {
        let hull = &self.vertex_buffer[..self.num_vertices];
        let (area, centroid) = derived::area_and_centroid(hull, self.winding);
        self.area = area;
        self.centroid = centroid;
        self.bounding_box = derived::bounding_box(hull);
    }

    // ---------------------------------------------------------------------
    // Queries (clean state required)
    // ---------------------------------------------------------------------

    /// Enclosed area: NaN when empty, 0 for a point or segment.
    pub fn area(&self) -> Result<f64> {
        self.check_up_to_date()?;
        Ok(self.area)
    }

    /// Area centroid: NaN when empty or a single point, midpoint for a segment.
    pub fn centroid(&self) -> Result<Point2<f64>> {
        self.check_up_to_date()?;
        Ok(self.centroid)
    }

    pub fn bounding_box(&self) -> Result<BoundingBox2> {
        self.check_up_to_date()?;
        Ok(self.bounding_box)
    }

    /// The hull vertices in clockwise order.
    pub fn vertices(&self) -> Result<&[Point2<f64>]> {
        self.check_up_to_date()?;
        Ok(&self.vertex_buffer[..self.num_vertices])
    }

    pub fn vertex(&self, index: usize) -> Result<Point2<f64>> {
        self.check_up_to_date()?;
        self.check_index(index)?;
        Ok(self.vertex_buffer[index])
    }

    /// Direct mutable access to a hull vertex.
    ///
    /// Writing through the returned reference does not touch the state: the
    /// caller must follow up with `notify_vertices_changed()` (and then
    /// `update()`), otherwise the cached derived quantities go stale.
    pub fn vertex_unsafe_mut(&mut self, index: usize) -> Result<&mut Point2<f64>> {
        self.check_up_to_date()?;
        self.check_index(index)?;
        Ok(&mut self.vertex_buffer[index])
    }

    /// Vertex at `index` when walking the hull counter-clockwise from index 0.
    pub fn vertex_ccw(&self, index: usize) -> Result<Point2<f64>> {
        self.check_up_to_date()?;
        self.check_index(index)?;
        let n = self.num_vertices;
        Ok(self.vertex_buffer[(n - index) % n])
    }

    pub fn next_vertex_index(&self, index: usize) -> Result<usize> {
        self.check_up_to_date()?;
        self.check_index(index)?;
        Ok((index + 1) % self.num_vertices)
    }

    pub fn previous_vertex_index(&self, index: usize) -> Result<usize> {
        self.check_up_to_date()?;
        self.check_index(index)?;
        Ok((index + self.num_vertices - 1) % self.num_vertices)
    }

    /// Edge from vertex `index` to its clockwise successor.
    pub fn edge(&self, index: usize) -> Result<(Point2<f64>, Point2<f64>)> {
        let next = self.next_vertex_index(index)?;
        Ok((self.vertex(index)?, self.vertex(next)?))
    }

    pub fn min_x(&self) -> Result<f64> {
        Ok(self.bounding_box()?.min.x)
    }

    pub fn max_x(&self) -> Result<f64> {
        Ok(self.bounding_box()?.max.x)
    }

    pub fn min_y(&self) -> Result<f64> {
        Ok(self.bounding_box()?.min.y)
    }

    pub fn max_y(&self) -> Result<f64> {
        Ok(self.bounding_box()?.max.y)
    }

    pub fn bounding_box_range_x(&self) -> Result<f64> {
        Ok(self.bounding_box()?.range_x())
    }

    pub fn bounding_box_range_y(&self) -> Result<f64> {
        Ok(self.bounding_box()?.range_y())
    }

    pub fn is_point_inside(&self, p: Point2<f64>) -> Result<bool> {
        self.is_point_inside_eps(p, 0.0)
    }

    /// Containment with slack: `eps > 0` enlarges the polygon, `eps < 0` shrinks it.
    pub fn is_point_inside_eps(&self, p: Point2<f64>, eps: f64) -> Result<bool> {
        Ok(queries::is_point_inside(p, self.vertices()?, self.winding, eps))
    }

    /// Negative inside, positive outside, NaN when empty.
    pub fn signed_distance(&self, p: Point2<f64>) -> Result<f64> {
        Ok(queries::signed_distance(p, self.vertices()?, self.winding))
    }

    /// Distance to the polygon; 0 inside.
    pub fn distance(&self, p: Point2<f64>) -> Result<f64> {
        Ok(self.signed_distance(p)?.max(0.0))
    }

    /// Closest point of the polygon to `p`.
    ///
    /// `None` when empty, or when `p` is inside a polygon of three or more
    /// vertices. A point or segment always yields its closest point.
    pub fn orthogonal_projection(&self, p: Point2<f64>) -> Result<Option<Point2<f64>>> {
        Ok(queries::orthogonal_projection(p, self.vertices()?, self.winding))
    }

    pub fn closest_vertex_index(&self, p: Point2<f64>) -> Result<Option<usize>> {
        Ok(queries::closest_vertex_index(p, self.vertices()?))
    }

    pub fn closest_edge_index(&self, p: Point2<f64>) -> Result<Option<usize>> {
        Ok(queries::closest_edge_index(p, self.vertices()?, self.winding))
    }

    /// Whether `observer` sees the outer side of the edge starting at `edge`.
    pub fn can_observer_see_edge(&self, edge: usize, observer: Point2<f64>) -> Result<bool> {
        self.check_up_to_date()?;
        self.check_index(edge)?;
        Ok(queries::can_observer_see_edge(
            edge,
            observer,
            self.logical(),
            self.winding,
        ))
    }

    /// `(start, end)` vertex indices of the boundary chain visible from `observer`.
    ///
    /// Walking clockwise from `start` to `end` covers every visible edge.
    /// `None` when empty or when `observer` is inside.
    pub fn line_of_sight_indices(&self, observer: Point2<f64>) -> Result<Option<(usize, usize)>> {
        Ok(queries::line_of_sight_indices(
            observer,
            self.vertices()?,
            self.winding,
        ))
    }

    pub fn line_of_sight_vertices(
        &self,
        observer: Point2<f64>,
    ) -> Result<Option<(Point2<f64>, Point2<f64>)>> {
        let hull = self.vertices()?;
        Ok(queries::line_of_sight_indices(observer, hull, self.winding)
            .map(|(s, e)| (hull[s], hull[e])))
    }

    pub fn point_is_on_perimeter(&self, p: Point2<f64>) -> Result<bool> {
        self.point_is_on_perimeter_eps(p, PERIMETER_EPS)
    }

    /// Whether `p` is within `eps` of the boundary.
    pub fn point_is_on_perimeter_eps(&self, p: Point2<f64>, eps: f64) -> Result<bool> {
        Ok(queries::is_point_on_perimeter(
            p,
            self.vertices()?,
            self.winding,
            eps,
        ))
    }

    /// Append the vertices from `start` to `end` (both inclusive), walking clockwise.
    ///
    /// `start == end` appends a single vertex. Appending to another
    /// `ConvexPolygon2` adds raw vertices and leaves it dirty.
    pub fn vertices_in_clockwise_order<E>(&self, start: usize, end: usize, out: &mut E) -> Result<()>
    where
        E: Extend<Point2<f64>>,
    {
        self.check_up_to_date()?;
        self.check_index(start)?;
        self.check_index(end)?;
        let n = self.num_vertices;
        let count = (end + n - start) % n + 1;
        let hull = self.logical();
        out.extend((0..count).map(|k| hull[(start + k) % n]));
        Ok(())
    }

    /// True if any logical vertex has a NaN coordinate.
    pub fn contains_nan(&self) -> bool {
        self.vertex_buffer[..self.num_vertices]
            .iter()
            .any(|p| p.x.is_nan() || p.y.is_nan())
    }

    /// Same winding, same count, vertex-wise within `eps`.
    pub fn epsilon_equals(&self, other: &Self, eps: f64) -> bool {
        self.winding == other.winding
            && self.num_vertices == other.num_vertices
            && self
                .logical()
                .iter()
                .zip(other.logical())
                .all(|(a, b)| (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps)
    }

    /// Same vertex cycle within `eps`, allowing a different starting vertex.
    pub fn geometrically_equals(&self, other: &Self, eps: f64) -> bool {
        if self.winding != other.winding || self.num_vertices != other.num_vertices {
            return false;
        }
        let n = self.num_vertices;
        if n == 0 {
            return true;
        }
        let a = self.logical();
        let b = other.logical();
        let close = |p: &Point2<f64>, q: &Point2<f64>| (p - q).norm() <= eps;
        (0..n).any(|shift| (0..n).all(|i| close(&a[i], &b[(i + shift) % n])))
    }

    #[inline]
    fn logical(&self) -> &[Point2<f64>] {
        &self.vertex_buffer[..self.num_vertices]
    }

    // ---------------------------------------------------------------------
    // Transforms (clean state required, clean on return)
    // ---------------------------------------------------------------------

    /// Shift every vertex and the cached derived quantities; no hull run.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.check_up_to_date()?;
        let t = Vector2::new(dx, dy);
        for v in &mut self.vertex_buffer[..self.num_vertices] {
            *v += t;
        }
        if self.num_vertices > 0 {
            self.centroid += t;
            self.bounding_box.translate(t);
        }
        Ok(())
    }

    /// Scale about `center` by `factor` and re-hull.
    pub fn scale_about(&mut self, center: Point2<f64>, factor: f64) -> Result<()> {
        self.check_up_to_date()?;
        for v in &mut self.vertex_buffer[..self.num_vertices] {
            *v = center + (*v - center) * factor;
        }
        self.notify_vertices_changed();
        self.update();
        Ok(())
    }

    /// Scale about the centroid. Polygons with fewer than two vertices are left as is.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        self.check_up_to_date()?;
        if self.num_vertices < 2 {
            return Ok(());
        }
        self.scale_about(self.centroid, factor)
    }

    /// Map every vertex through `f`, keeping clockwise order and the min-x/max-y start.
    pub fn apply_transform(&mut self, f: &Affine2) -> Result<()> {
        self.check_up_to_date()?;
        let n = self.num_vertices;
        for v in &mut self.vertex_buffer[..n] {
            *v = f.apply(v);
        }
        if n <= 3 || f.m.determinant().abs() <= DET_EPS {
            // Few vertices or a collapsing map: re-hulling is the simple path.
            self.notify_vertices_changed();
            self.update();
            return Ok(());
        }
        if !f.is_translation() {
            let hull = &mut self.vertex_buffer[..n];
            if !f.is_orientation_preserving() {
                hull.reverse();
            }
            if let Some(k) = min_x_max_y_index(hull) {
                hull.rotate_left(k);
            }
        }
        self.refresh_derived();
        tracing::trace!(n, "transform applied without re-hulling");
        Ok(())
    }
}

impl VertexSource for ConvexPolygon2 {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    /// Raw buffer access, valid in any state.
    #[inline]
    fn vertex_at(&self, index: usize) -> Point2<f64> {
        self.vertex_buffer[index]
    }

    fn as_convex_polygon(&self) -> Option<&dyn ConvexPolygonSource> {
        Some(self)
    }
}

impl Extend<Point2<f64>> for ConvexPolygon2 {
    fn extend<I: IntoIterator<Item = Point2<f64>>>(&mut self, iter: I) {
        self.mark(HullEvent::Mutation);
        for p in iter {
            self.push_raw(p);
        }
    }
}

impl ConvexPolygonSource for ConvexPolygon2 {
    fn winding(&self) -> Winding {
        self.winding
    }
    fn is_up_to_date(&self) -> bool {
        self.state.is_clean()
    }
    fn area(&self) -> Result<f64> {
        ConvexPolygon2::area(self)
    }
    fn centroid(&self) -> Result<Point2<f64>> {
        ConvexPolygon2::centroid(self)
    }
    fn bounding_box(&self) -> Result<BoundingBox2> {
        ConvexPolygon2::bounding_box(self)
    }
}

impl PartialEq for ConvexPolygon2 {
    fn eq(&self, other: &Self) -> bool {
        self.winding == other.winding && self.logical() == other.logical()
    }
}

impl Hash for ConvexPolygon2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.winding.hash(state);
        self.num_vertices.hash(state);
        for p in self.logical() {
            // -0.0 and 0.0 compare equal, so they must hash equal.
            (p.x + 0.0).to_bits().hash(state);
            (p.y + 0.0).to_bits().hash(state);
        }
    }
}

impl fmt::Display for ConvexPolygon2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = if self.is_clockwise_ordered() {
            "clockwise"
        } else {
            "counter-clockwise"
        };
        write!(
            f,
            "ConvexPolygon2: {order}, {} vertices: [",
            self.num_vertices
        )?;
        for (i, p) in self.logical().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:.3}, {:.3})", p.x, p.y)?;
        }
        write!(f, "]")
    }
}
