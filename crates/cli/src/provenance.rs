//! Provenance records for CLI outputs.
//!
//! Every artifact written by `map`/`sample` gets a `<stem>.provenance.json`
//! sibling; `report` prints the same record with no outputs.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// What produced an artifact, and from which code.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub lib_version: &'static str,
    pub vk: Option<String>,
    pub params: Value,
    pub outputs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsite: Option<Callsite>,
}

impl Provenance {
    pub fn new(params: Value, vk: Option<String>) -> Self {
        Self {
            code_rev: code_rev(),
            lib_version: coordxfer::VERSION,
            vk,
            params,
            outputs: Vec::new(),
            callsite: None,
        }
    }

    /// Write the record next to `artifact` as `<stem>.provenance.json`.
    #[track_caller]
    pub fn write_beside<P: AsRef<Path>>(mut self, artifact: P) -> Result<PathBuf> {
        let artifact = artifact.as_ref();
        let caller = Location::caller();
        self.callsite = Some(Callsite {
            file: caller.file(),
            line: caller.line(),
        });
        self.outputs = vec![artifact.to_string_lossy().into_owned()];

        let stem = artifact
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "artifact".to_string());
        let path = artifact.with_file_name(format!("{stem}.provenance.json"));
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// Commit the binary describes: runtime `GIT_COMMIT`, then build-time
/// `GIT_COMMIT`, then `git rev-parse HEAD`, else `"unknown"`.
fn code_rev() -> String {
    let runtime = std::env::var("GIT_COMMIT").ok();
    let build = option_env!("GIT_COMMIT").map(str::to_string);
    runtime
        .into_iter()
        .chain(build)
        .find(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
