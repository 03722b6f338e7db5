//! Step-file and point parsing for the CLI.

use anyhow::{anyhow, bail, Context, Result};
use coordxfer::{Point, TransferStep};
use std::fs;
use std::path::Path;

/// Read a JSON array of `{"kind": ..., "params": {...}}` steps.
pub fn read_steps<P: AsRef<Path>>(path: P) -> Result<Vec<TransferStep>> {
    let path = path.as_ref();
    let raw = fs::read(path).with_context(|| format!("reading steps {}", path.display()))?;
    let steps: Vec<TransferStep> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing steps {}", path.display()))?;
    Ok(steps)
}

/// Read a JSON array of `[x, y]` pairs.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let raw = fs::read(path).with_context(|| format!("reading points {}", path.display()))?;
    let pairs: Vec<(f64, f64)> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing points {}", path.display()))?;
    Ok(pairs.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

/// Parse `"X,Y"` into a point.
pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected X,Y but got {s:?}"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    if !(x.is_finite() && y.is_finite()) {
        bail!("point {s:?} is not finite");
    }
    Ok(Point::new(x, y))
}

pub fn to_pairs(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

/// Write pretty JSON, creating parent directories as needed.
pub fn write_json<P: AsRef<Path>, T: serde::Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
