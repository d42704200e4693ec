use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::Vector2;
use serde::Serialize;
use serde_json::{json, Value};
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use tristate::api::{
    draw_unit_triangle_replay, is_inside_triangle, linear_position, planar_position,
    random_unit_triangle, snap_to_triangle_with, SnapCfg, Triangle, TriangleReplay,
    TriStateSwitch,
};

mod provenance;

#[derive(Parser)]
#[command(name = "tristate-cli")]
#[command(about = "Query the triangle geometry behind the three-state toggle")]
struct Cmd {
    /// Use the legacy per-axis sign check when snapping onto edges
    #[arg(long, global = true)]
    legacy_snap: bool,

    /// Log at debug level (logs go to stderr)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Normalized position of a point along a segment
    Linear {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        start: Vector2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        end: Vector2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        position: Vector2<f64>,
    },
    /// Normalized 2D position in the frame of a segment and a zero point
    Planar {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        start: Vector2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        end: Vector2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        zero: Vector2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        position: Vector2<f64>,
    },
    /// Triangle membership test
    Inside {
        #[command(flatten)]
        tri: TriangleArgs,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        position: Vector2<f64>,
    },
    /// Snap a point onto a triangle
    Snap {
        #[command(flatten)]
        tri: TriangleArgs,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        position: Vector2<f64>,
    },
    /// Move the toggle handle to a point and report the nearest state
    Classify {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        position: Vector2<f64>,
        /// Corners for unchecked, partially checked, checked (defaults: 0,0 1,0 1,1)
        #[arg(long, value_parser = parse_point, num_args = 3)]
        corners: Option<Vec<Vector2<f64>>>,
    },
    /// Draw random unit triangles (replayable when --seed is given)
    Sample {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        count: u64,
        /// Stream index of the first draw (only meaningful with --seed)
        #[arg(long, default_value_t = 0)]
        first_index: u64,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Redraw a seeded sample from its provenance sidecar
    Replay {
        /// Path to a `*.provenance.json` written by `sample --out`
        provenance: String,
        /// Write JSON here (plus a new sidecar) instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args)]
struct TriangleArgs {
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    a: Vector2<f64>,
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    b: Vector2<f64>,
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    c: Vector2<f64>,
}

impl TriangleArgs {
    fn triangle(&self) -> Triangle {
        Triangle::new(self.a, self.b, self.c)
    }
}

/// One sampled triangle, as written by `sample`.
#[derive(Serialize)]
struct TriangleRow {
    index: u64,
    vertices: [[f64; 2]; 3],
}

impl TriangleRow {
    fn new(index: u64, t: &Triangle) -> Self {
        Self {
            index,
            vertices: t.vertices().map(|p| [p.x, p.y]),
        }
    }
}

/// Parse `x,y` into a point.
fn parse_point(s: &str) -> Result<Vector2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Vector2::new(x, y))
}

fn point_json(p: Vector2<f64>) -> Value {
    json!([p.x, p.y])
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let snap = if cmd.legacy_snap {
        SnapCfg::legacy()
    } else {
        SnapCfg::default()
    };
    let out = match cmd.action {
        Action::Linear {
            start,
            end,
            position,
        } => linear(start, end, position),
        Action::Planar {
            start,
            end,
            zero,
            position,
        } => planar(start, end, zero, position),
        Action::Inside { tri, position } => inside(tri.triangle(), position),
        Action::Snap { tri, position } => snap_cmd(tri.triangle(), position, snap),
        Action::Classify { position, corners } => classify(position, corners, snap)?,
        Action::Sample {
            seed,
            count,
            first_index,
            out,
        } => sample(seed, first_index, count, out.as_deref())?,
        Action::Replay { provenance, out } => replay(Path::new(&provenance), out.as_deref())?,
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn linear(start: Vector2<f64>, end: Vector2<f64>, position: Vector2<f64>) -> Value {
    let value = linear_position(start, end, position);
    tracing::info!(value, "linear");
    json!({ "linear_position": value })
}

fn planar(
    start: Vector2<f64>,
    end: Vector2<f64>,
    zero: Vector2<f64>,
    position: Vector2<f64>,
) -> Value {
    let q = planar_position(start, end, zero, position);
    tracing::info!(x = q.x, y = q.y, "planar");
    json!({ "planar_position": point_json(q) })
}

fn inside(tri: Triangle, position: Vector2<f64>) -> Value {
    let inside = is_inside_triangle(tri.a, tri.b, tri.c, position);
    tracing::info!(inside, "inside");
    json!({ "inside": inside })
}

fn snap_cmd(tri: Triangle, position: Vector2<f64>, cfg: SnapCfg) -> Value {
    let q = snap_to_triangle_with(tri.a, tri.b, tri.c, position, cfg);
    tracing::info!(edge_test = ?cfg.edge_test, x = q.x, y = q.y, "snap");
    json!({
        "snapped": point_json(q),
        "moved": q != position,
    })
}

fn classify(
    position: Vector2<f64>,
    corners: Option<Vec<Vector2<f64>>>,
    snap: SnapCfg,
) -> Result<Value> {
    let mut sw = TriStateSwitch::with_cfg(tristate::api::SwitchCfg {
        snap,
        ..Default::default()
    });
    if let Some(corners) = corners {
        sw.set_corners(&corners).context("invalid --corners")?;
    }
    sw.set_position(position);
    let (state, corner) = sw.position_to_check_state(sw.position());
    tracing::info!(%state, "classify");
    Ok(json!({
        "handle": point_json(sw.position()),
        "state": state.to_string(),
        "corner": point_json(corner),
    }))
}

fn draw_rows(seed: Option<u64>, indices: RangeInclusive<u64>) -> Vec<TriangleRow> {
    indices
        .map(|index| {
            let t = match seed {
                Some(seed) => draw_unit_triangle_replay(TriangleReplay { seed, index }),
                None => random_unit_triangle(),
            };
            TriangleRow::new(index, &t)
        })
        .collect()
}

/// Print the rows, or write them to `out` with a sidecar describing the stream slice.
fn emit_rows(rows: &[TriangleRow], seed: Option<u64>, out: Option<&str>) -> Result<Value> {
    let body = serde_json::to_value(rows)?;
    let (Some(out), Some(first), Some(last)) = (out, rows.first(), rows.last()) else {
        return Ok(body);
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&body)?)
        .with_context(|| format!("writing {out}"))?;
    let count = last.index - first.index + 1;
    let record = provenance::SampleRecord::new(seed, first.index, count, out_path)?;
    let prov = provenance::write_sidecar(&record)?;
    Ok(json!({
        "written": out,
        "provenance": prov.to_string_lossy(),
        "count": count,
    }))
}

fn sample(seed: Option<u64>, first_index: u64, count: u64, out: Option<&str>) -> Result<Value> {
    if count == 0 {
        bail!("--count must be positive");
    }
    let Some(last_index) = first_index.checked_add(count - 1) else {
        bail!("--first-index {first_index} plus --count {count} overflows the stream");
    };
    let rows = draw_rows(seed, first_index..=last_index);
    tracing::info!(count, seed = ?seed, first_index, out = ?out, "sample");
    emit_rows(&rows, seed, out)
}

fn replay(sidecar: &Path, out: Option<&str>) -> Result<Value> {
    let record = provenance::read_sidecar(sidecar)?;
    let (seed, indices) = record.stream()?;
    if record.tristate_version != tristate::VERSION {
        tracing::warn!(
            recorded = %record.tristate_version,
            running = tristate::VERSION,
            "replaying a sample drawn by another library version"
        );
    }
    tracing::info!(seed, first = indices.start(), last = indices.end(), "replay");
    let rows = draw_rows(Some(seed), indices);
    emit_rows(&rows, Some(seed), out)
}

fn report() -> Value {
    json!({
        "code_rev": provenance::current_git_rev(),
        "tristate_version": tristate::VERSION,
    })
}
