//! Mutable 2D convex polygons (clockwise hull + cached derived quantities).
//!
//! Purpose
//! - Provide `ConvexPolygon2`, a garbage-free polygon for control loops that
//!   add and remove vertices at high frequency and query area, centroid,
//!   bounding box and containment in between.
//! - Keep the expensive part (hull construction) behind an explicit
//!   dirty/clean state so repeated queries cost O(1).
//!
//! Layout
//! - `types`: point aliases, `BoundingBox2`, `HullCfg`, `Affine2`, `Winding`.
//! - `source`: vertex ingestion (`VertexSource`, `ConvexPolygonSource`, `Projected3`).
//! - `state`: `HullState` transition table.
//! - `hull`: in-place gift wrap.
//! - `derived`: area/centroid/bounding box of a finalized hull.
//! - `queries`: containment, distances, closest features on hull slices.
//! - `polygon`: the `ConvexPolygon2` engine tying the above together.
//! - `rand`: reproducible point clouds.

pub mod derived;
pub mod hull;
pub mod polygon;
pub mod queries;
pub mod rand;
pub mod source;
pub mod state;
mod types;

pub use hull::{gift_wrap_in_place, is_strictly_convex_clockwise};
pub use polygon::ConvexPolygon2;
pub use source::{ConvexPolygonSource, Projected3, VertexSource};
pub use state::{HullEvent, HullState};
pub use types::{Affine2, BoundingBox2, HullCfg, Winding};
