use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use coordxfer::prelude::*;
use coordxfer::transfer::rand::draw_points;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Compose 2D rotation/translation steps and map points through them")]
struct Cmd {
    /// Optional VK ticket UUID; propagated to outputs and logs
    #[arg(long, global = true)]
    vk: Option<String>,

    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Map one point through the steps in order
    Forward {
        #[arg(long)]
        steps: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        point: String,
        /// Reject steps with missing parameters instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Undo the steps for one point
    Backward {
        #[arg(long)]
        steps: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        point: String,
        #[arg(long)]
        strict: bool,
    },
    /// Map a JSON array of [x, y] points and write the result plus provenance
    Map {
        #[arg(long)]
        steps: PathBuf,
        #[arg(long)]
        points: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        backward: bool,
        #[arg(long)]
        strict: bool,
    },
    /// Check backward(forward(p)) ≈ p on seeded random points
    Check {
        #[arg(long)]
        steps: PathBuf,
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1e-9)]
        eps: f64,
        /// Half-width of the sampling square
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
    },
    /// Write a random, fully parameterized step list
    Sample {
        #[arg(long, default_value_t = 4)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Forward {
            steps,
            point,
            strict,
        } => map_one(&steps, &point, strict, false).map(|_| ()),
        Action::Backward {
            steps,
            point,
            strict,
        } => map_one(&steps, &point, strict, true).map(|_| ()),
        Action::Map {
            steps,
            points,
            out,
            backward,
            strict,
        } => map_file(&steps, &points, &out, backward, strict, cmd.vk),
        Action::Check {
            steps,
            samples,
            seed,
            eps,
            extent,
        } => check(&steps, samples, seed, eps, extent).map(|_| ()),
        Action::Sample { count, seed, out } => sample(count, seed, &out, cmd.vk),
        Action::Report => report(cmd.vk),
    }
}

fn load(steps: &Path, strict: bool) -> Result<Pipeline> {
    let list = io::read_steps(steps)?;
    let built = if strict {
        build_pipeline_strict(&list)
    } else {
        build_pipeline(&list)
    };
    built.with_context(|| format!("building pipeline from {}", steps.display()))
}

fn map_one(steps: &Path, point: &str, strict: bool, backward: bool) -> Result<Point> {
    let p = io::parse_point(point)?;
    let pl = load(steps, strict)?;
    let q = if backward { pl.backward(p) } else { pl.forward(p) };
    tracing::info!(steps = pl.len(), backward, x = q.x, y = q.y, "mapped");
    println!("{},{}", q.x, q.y);
    Ok(q)
}

fn map_file(
    steps: &Path,
    points: &Path,
    out: &Path,
    backward: bool,
    strict: bool,
    vk: Option<String>,
) -> Result<()> {
    let pl = load(steps, strict)?;
    let input = io::read_points(points)?;
    let mapped: Vec<Point> = input
        .iter()
        .map(|p| if backward { pl.backward(*p) } else { pl.forward(*p) })
        .collect();
    io::write_json(out, &io::to_pairs(&mapped))?;
    tracing::info!(n = mapped.len(), backward, out = %out.display(), vk = ?vk, "map");
    Provenance::new(
        serde_json::json!({
            "steps": steps.to_string_lossy(),
            "points": points.to_string_lossy(),
            "direction": if backward { "backward" } else { "forward" },
            "strict": strict
        }),
        vk,
    )
    .write_beside(out)?;
    Ok(())
}

fn check(steps: &Path, samples: usize, seed: u64, eps: f64, extent: f64) -> Result<f64> {
    if !extent.is_finite() {
        bail!("--extent must be finite, got {extent}");
    }
    if !(eps.is_finite() && eps >= 0.0) {
        bail!("--eps must be a finite non-negative number, got {eps}");
    }
    let pl = load(steps, false)?;
    let pts = draw_points(samples, extent, ReplayToken::new(seed, 0));
    let cfg = PipelineCfg { eps_roundtrip: eps };
    let max_err = pl
        .check_round_trip(&pts, cfg)
        .with_context(|| format!("round trip over {samples} points"))?;
    tracing::info!(samples, max_err, eps, "round trip ok");
    println!("{max_err:e}");
    Ok(max_err)
}

fn sample(count: usize, seed: u64, out: &Path, vk: Option<String>) -> Result<()> {
    let steps = draw_steps(
        StepCfg {
            len: count,
            ..StepCfg::default()
        },
        ReplayToken::new(seed, 0),
    );
    io::write_json(out, &steps)?;
    tracing::info!(count, seed, out = %out.display(), "sample");
    Provenance::new(serde_json::json!({ "count": count, "seed": seed }), vk).write_beside(out)?;
    Ok(())
}

fn report(vk: Option<String>) -> Result<()> {
    let obj = Provenance::new(serde_json::json!({}), vk);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
