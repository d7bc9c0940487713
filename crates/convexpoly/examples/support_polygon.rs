//! Track the support polygon of a few moving contact points.
//!
//! Usage:
//!   cargo run -p convexpoly --example support_polygon
//!
//! Each frame: contacts drift, the polygon is refilled in place, and the
//! centroid margin (distance from the centroid to the boundary) is printed.
//! The buffer is reused across frames, so capacity stays flat.

use convexpoly::prelude::*;

fn main() {
    let mut support = ConvexPolygon2::with_capacity(8);
    let com = Point2::new(0.05, 0.0);
    for frame in 0..6 {
        let t = frame as f64 * 0.25;
        let contacts = [
            Point2::new(-0.3 + 0.05 * t, 0.2),
            Point2::new(0.3, 0.2 - 0.02 * t),
            Point2::new(0.3, -0.2),
            Point2::new(-0.3, -0.2 + 0.03 * t),
            Point2::new(0.0, 0.0),
        ];
        support.set(contacts.as_slice());
        let (Ok(area), Ok(margin)) = (support.area(), support.signed_distance(com)) else {
            eprintln!("frame {frame}: polygon not up to date");
            continue;
        };
        println!(
            "frame {frame}: n={}, area={area:.4}, com margin={:.4}, capacity={}",
            support.num_vertices(),
            -margin,
            support.buffer_capacity()
        );
    }
    println!("{support}");
}
