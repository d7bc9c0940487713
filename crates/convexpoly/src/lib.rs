//! Garbage-free convex polygon engine for 2D points.
//!
//! The central type is [`geom2::ConvexPolygon2`]: a clockwise convex hull kept
//! in a recycled vertex buffer, with area, centroid and bounding box cached
//! behind a dirty/clean state. Mutations are cheap and never re-hull; the hull
//! is rebuilt only by an explicit `update()`.
//!
//! ```
//! use convexpoly::prelude::*;
//!
//! let mut poly = ConvexPolygon2::new();
//! for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)] {
//!     poly.add_vertex(x, y);
//! }
//! assert!(poly.area().is_err()); // dirty until update()
//! poly.update();
//! assert_eq!(poly.num_vertices(), 4);
//! assert_eq!(poly.area().unwrap(), 1.0);
//! ```

pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PolygonError, Result};
pub use geom2::{BoundingBox2, ConvexPolygon2, HullCfg};
pub use nalgebra::{Point2, Point3, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{PolygonError, Result};
    pub use crate::geom2::rand::{
        draw_point_cloud, draw_points_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        Affine2, BoundingBox2, ConvexPolygon2, ConvexPolygonSource, HullCfg, HullState,
        Projected3, VertexSource, Winding,
    };
    pub use nalgebra::{Point2, Point3, Vector2 as Vec2};
}
