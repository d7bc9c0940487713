//! Basic 2D value types consumed by the polygon engine.
//!
//! - `HullCfg`: centralizes the tolerances used by the hull reducer.
//! - `Winding`: vertex traversal convention of a polygon instance.
//! - `BoundingBox2`: axis-aligned min/max box.
//! - `Affine2`: 2D affine map used by `ConvexPolygon2::apply_transform`.
//!
//! Code cross-refs: `hull::gift_wrap_in_place`, `polygon::ConvexPolygon2`

use std::fmt;

use nalgebra::{Matrix2, Point2, Vector2};

/// Hull reducer configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Two points closer than this (Euclidean) are treated as one vertex.
    pub eps_duplicate: f64,
    /// Sine of the angle below which three points count as collinear.
    pub eps_collinear: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_duplicate: 1e-7,
            eps_collinear: 1e-12,
        }
    }
}

/// Vertex traversal convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    #[inline]
    pub fn is_clockwise(self) -> bool {
        matches!(self, Winding::Clockwise)
    }
}

/// Axis-aligned bounding box given by its min and max corners.
///
/// A box with NaN corners is the "undefined" box of an empty point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox2 {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl BoundingBox2 {
    #[inline]
    pub fn from_min_max(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn nan() -> Self {
        let p = Point2::new(f64::NAN, f64::NAN);
        Self { min: p, max: p }
    }

    #[inline]
    pub fn set_to_nan(&mut self) {
        *self = Self::nan();
    }

    #[inline]
    pub fn set(&mut self, min: Point2<f64>, max: Point2<f64>) {
        self.min = min;
        self.max = max;
    }

    /// Grow to include `p`. A NaN box becomes the degenerate box `[p, p]`.
    pub fn include_point(&mut self, p: Point2<f64>) {
        if self.contains_nan() {
            self.min = p;
            self.max = p;
            return;
        }
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Smallest box containing all `points`; NaN when `points` is empty.
    pub fn from_points(points: &[Point2<f64>]) -> Self {
        let mut bb = Self::nan();
        for p in points {
            bb.include_point(*p);
        }
        bb
    }

    #[inline]
    pub fn contains_nan(&self) -> bool {
        self.min.x.is_nan() || self.min.y.is_nan() || self.max.x.is_nan() || self.max.y.is_nan()
    }

    /// Closed containment test; false for a NaN box.
    #[inline]
    pub fn contains(&self, p: Point2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn range_x(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn range_y(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn translate(&mut self, t: Vector2<f64>) {
        self.min += t;
        self.max += t;
    }
}

impl fmt::Display for BoundingBox2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox2: min = ({:.3}, {:.3}), max = ({:.3}, {:.3})",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    /// Rotation by `angle` (radians, counter-clockwise) followed by translation `t`.
    #[inline]
    pub fn rigid(angle: f64, t: Vector2<f64>) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t,
        }
    }
    #[inline]
    pub fn apply(&self, p: &Point2<f64>) -> Point2<f64> {
        Point2::from(self.m * p.coords + self.t)
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
    /// Composition `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
    /// True when the linear part is the identity (pure translation).
    #[inline]
    pub fn is_translation(&self) -> bool {
        self.m == Matrix2::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_grows_from_nan() {
        let mut bb = BoundingBox2::nan();
        assert!(bb.contains_nan());
        assert!(!bb.contains(Point2::origin()));
        bb.include_point(Point2::new(1.0, -2.0));
        assert_eq!(bb.min, Point2::new(1.0, -2.0));
        assert_eq!(bb.max, Point2::new(1.0, -2.0));
        bb.include_point(Point2::new(-1.0, 3.0));
        assert_eq!(bb.min, Point2::new(-1.0, -2.0));
        assert_eq!(bb.max, Point2::new(1.0, 3.0));
        assert_eq!(bb.range_x(), 2.0);
        assert_eq!(bb.range_y(), 5.0);
    }

    #[test]
    fn affine_inverse_and_compose() {
        let f = Affine2::rigid(0.3, Vector2::new(1.0, -2.0));
        let g = f.inverse().expect("rigid maps are invertible");
        let p = Point2::new(0.7, 4.0);
        let q = g.compose(&f).apply(&p);
        assert!((q - p).norm() < 1e-12);
        assert!(f.is_orientation_preserving());
        let flip = Affine2 {
            m: Matrix2::new(-1.0, 0.0, 0.0, 1.0),
            t: Vector2::zeros(),
        };
        assert!(!flip.is_orientation_preserving());
        assert!(Affine2::translation(Vector2::new(1.0, 1.0)).is_translation());
    }
}
