use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polysym::api::{Axis, Event, Preset, RigidMotion, Symmetry, SymmetryCfg};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "polysym-cli")]
#[command(about = "Detect lines of reflective symmetry in 2D polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Detect symmetry axes of a preset shape or a JSON polygon file
    Detect(DetectArgs),
    /// List the preset shapes
    Shapes,
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct DetectArgs {
    /// Preset name (see `shapes`)
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    shape: Option<String>,
    /// JSON file: array of [x, y] pairs or {"x", "y"} objects
    #[arg(long)]
    input: Option<PathBuf>,
    /// Offset applied to every vertex before rotating
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dx: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dy: f64,
    /// Rotation about the origin, in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    rotate: f64,
    /// Mirror-match distance
    #[arg(long, default_value_t = 5.0)]
    tolerance: f64,
    /// Include every intermediate stage in the output
    #[arg(long)]
    trace: bool,
    /// Write JSON here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DetectReport {
    source: String,
    vertices: usize,
    motion: Motion,
    tolerance: f64,
    axes: Vec<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Vec<Event>>,
}

#[derive(Debug, Serialize)]
struct Motion {
    dx: f64,
    dy: f64,
    degrees: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Detect(args) => detect(args),
        Action::Shapes => shapes(),
        Action::Report => report(),
    }
}

fn run_detect(args: &DetectArgs) -> Result<DetectReport> {
    let (source, points) = input::resolve(args.shape.as_deref(), args.input.as_deref())?;
    let motion = RigidMotion::new(args.dx, args.dy, args.rotate);
    if !motion.is_identity() {
        tracing::debug!(
            dx = motion.dx,
            dy = motion.dy,
            degrees = motion.degrees,
            "moving input"
        );
    }
    let points = motion.apply(&points);
    let cfg = SymmetryCfg {
        tolerance: args.tolerance,
        ..SymmetryCfg::default()
    };
    let det = Symmetry::with_cfg(points, cfg)?;
    let (axes, events) = if args.trace {
        let (axes, events) = det.trace();
        (axes, Some(events))
    } else {
        (det.detect(), None)
    };
    tracing::info!(
        source,
        vertices = det.points().len(),
        axes = axes.len(),
        "detect"
    );
    Ok(DetectReport {
        source,
        vertices: det.points().len(),
        motion: Motion {
            dx: motion.dx,
            dy: motion.dy,
            degrees: motion.degrees,
        },
        tolerance: args.tolerance,
        axes,
        events,
    })
}

fn detect(args: DetectArgs) -> Result<()> {
    let report = run_detect(&args)?;
    let body = serde_json::to_vec_pretty(&report)?;
    match &args.out {
        None => println!("{}", String::from_utf8_lossy(&body)),
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
            let params = json!({
                "shape": args.shape,
                "input": args.input,
                "dx": args.dx,
                "dy": args.dy,
                "rotate": args.rotate,
                "tolerance": args.tolerance,
                "trace": args.trace,
            });
            let sidecar = provenance::write_sidecar(out, provenance::Provenance::new(params))?;
            tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
        }
    }
    Ok(())
}

fn shapes() -> Result<()> {
    let list: Vec<_> = Preset::ALL
        .iter()
        .map(|p| json!({ "name": p.name(), "vertices": p.points().len() }))
        .collect();
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::Provenance::new(json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
