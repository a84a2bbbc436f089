//! Provenance sidecars for written artifacts.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Contents of `<artifact-stem>.provenance.json`.
#[derive(Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsite: Option<Callsite>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: polysym::VERSION,
            callsite: None,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar next to `artifact`, recording the caller's location.
#[track_caller]
pub fn write_sidecar(artifact: &Path, mut prov: Provenance) -> Result<PathBuf> {
    let caller = Location::caller();
    prov.callsite = Some(Callsite {
        file: caller.file(),
        line: caller.line(),
    });
    prov.outputs.push(artifact.to_string_lossy().into_owned());

    let path = sidecar_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
