use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use convexpoly::geom2::rand::{draw_point_cloud, ReplayToken};
use convexpoly::{ConvexPolygon2, HullCfg};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner for JSON point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Hull a JSON array of [x, y] (or [x, y, z]) points and write a summary
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[arg(long, default_value_t = HullCfg::default().eps_duplicate)]
        eps_duplicate: f64,
        #[arg(long, default_value_t = HullCfg::default().eps_collinear)]
        eps_collinear: f64,
    },
    /// Write a reproducible uniform point cloud as JSON
    Random {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Point file row; 3D rows are projected onto the xy plane.
#[derive(Deserialize)]
#[serde(transparent)]
struct Row(Vec<f64>);

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct HullSummary {
    vertices: Vec<[f64; 2]>,
    area: f64,
    centroid: [f64; 2],
    bounding_box: [[f64; 2]; 2],
    hull_updates: u64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            eps_duplicate,
            eps_collinear,
        } => hull(
            &input,
            &out,
            HullCfg {
                eps_duplicate,
                eps_collinear,
            },
        ),
        Action::Random {
            count,
            seed,
            index,
            half_extent,
            out,
        } => random(count, seed, index, half_extent, &out),
        Action::Report => report(),
    }
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn read_points(input: &Path) -> Result<Vec<Vec<f64>>> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let rows: Vec<Row> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as a JSON array of points", input.display()))?;
    Ok(rows.into_iter().map(|r| r.0).collect())
}

fn summarize(rows: &[Vec<f64>], cfg: HullCfg) -> Result<HullSummary> {
    let mut poly = ConvexPolygon2::with_cfg(cfg);
    poly.add_vertex_rows(rows)?;
    poly.update();
    let bb = poly.bounding_box()?;
    let c = poly.centroid()?;
    Ok(HullSummary {
        vertices: poly.vertices()?.iter().map(|p| [p.x, p.y]).collect(),
        area: poly.area()?,
        centroid: [c.x, c.y],
        bounding_box: [[bb.min.x, bb.min.y], [bb.max.x, bb.max.y]],
        hull_updates: poly.hull_updates(),
    })
}

fn hull(input: &str, out: &str, cfg: HullCfg) -> Result<()> {
    tracing::info!(
        input,
        out,
        eps_duplicate = cfg.eps_duplicate,
        eps_collinear = cfg.eps_collinear,
        "hull"
    );
    if !(cfg.eps_duplicate >= 0.0 && cfg.eps_collinear >= 0.0) {
        bail!("tolerances must be non-negative");
    }
    let rows = read_points(Path::new(input))?;
    let summary = summarize(&rows, cfg)?;
    tracing::info!(
        points = rows.len(),
        hull = summary.vertices.len(),
        area = summary.area,
        "hull_done"
    );

    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    // NaN (empty input) is not valid JSON; serde_json writes it as null.
    std::fs::write(out_path, serde_json::to_vec_pretty(&summary)?)
        .with_context(|| format!("writing {}", out_path.display()))?;

    let payload = provenance::Payload::new(serde_json::json!({
        "input": input,
        "points": rows.len(),
        "eps_duplicate": cfg.eps_duplicate,
        "eps_collinear": cfg.eps_collinear,
    }));
    provenance::write_sidecar(out_path, payload)?;
    Ok(())
}

fn random(count: usize, seed: u64, index: u64, half_extent: f64, out: &str) -> Result<()> {
    tracing::info!(count, seed, index, half_extent, out, "random");
    let pts = draw_point_cloud(count, half_extent, ReplayToken { seed, index });
    let rows: Vec<[f64; 2]> = pts.iter().map(|p| [p.x, p.y]).collect();

    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out_path.display()))?;

    let payload = provenance::Payload::new(serde_json::json!({
        "count": count,
        "seed": seed,
        "index": index,
        "half_extent": half_extent,
    }));
    provenance::write_sidecar(out_path, payload)?;
    Ok(())
}

fn report_doc() -> serde_json::Value {
    serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": convexpoly::VERSION,
        "params": {},
        "outputs": []
    })
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_doc())?);
    Ok(())
}
