//! Random 2D point clouds (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic input generators for benches, the CLI and
//!   tests. Every draw is reproducible from a `ReplayToken`.
//!
//! Model
//! - `draw_points_radial`: `n` equally spaced angles on [0, 2π) with bounded
//!   angular and radial jitter, plus optional interior points. Most of the
//!   boundary points end up on the hull.
//! - `draw_point_cloud`: uniform samples in a centered square; only a few end
//!   up on the hull.
//!
//! Code cross-refs: `ConvexPolygon2::from_points`

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    /// Extra points drawn strictly inside the disc of radius `0.5 * base_radius`.
    pub interior_points: usize,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            interior_points: 0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw boundary points around the origin by radial jitter, then interior points.
pub fn draw_points_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n.max(1) as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut pts: Vec<Point2<f64>> = Vec::with_capacity(n + cfg.interior_points);
    for k in 0..n {
        let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
        let r = (1.0 + u).max(1e-6) * r0;
        pts.push(Point2::new(th.cos() * r, th.sin() * r));
    }
    for _ in 0..cfg.interior_points {
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        let r = rng.gen::<f64>() * 0.5 * r0;
        pts.push(Point2::new(th.cos() * r, th.sin() * r));
    }
    pts
}

/// Draw `count` points uniformly in `[-half_extent, half_extent]²`.
pub fn draw_point_cloud(count: usize, half_extent: f64, tok: ReplayToken) -> Vec<Point2<f64>> {
    let mut rng = tok.to_std_rng();
    let h = half_extent.abs().max(1e-9);
    (0..count)
        .map(|_| Point2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}
