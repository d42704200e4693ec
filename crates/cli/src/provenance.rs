//! Replay records written next to `sample --out` files.
//!
//! A seeded sample is the slice `first_index..=last_index` of one
//! `TriangleReplay` stream, so the record is enough to redraw the file.
//! Entropy-seeded samples get a record too (seed `null`) but cannot be replayed.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::process::Command;

const SIDECAR_SUFFIX: &str = ".provenance.json";

/// Contents of `<artifact>.provenance.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub code_rev: String,
    pub tristate_version: String,
    pub seed: Option<u64>,
    pub first_index: u64,
    pub last_index: u64,
    pub artifact: PathBuf,
}

impl SampleRecord {
    /// Record for `count` draws starting at `first_index`. `count` must be positive.
    pub fn new(seed: Option<u64>, first_index: u64, count: u64, artifact: &Path) -> Result<Self> {
        let last_index = count
            .checked_sub(1)
            .and_then(|span| first_index.checked_add(span))
            .with_context(|| format!("no stream slice of {count} draws from index {first_index}"))?;
        Ok(Self {
            code_rev: current_git_rev(),
            tristate_version: tristate::VERSION.to_string(),
            seed,
            first_index,
            last_index,
            artifact: artifact.to_path_buf(),
        })
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.last_index - self.first_index + 1
    }

    /// Stream seed and index range to redraw; fails for entropy-seeded samples.
    pub fn stream(&self) -> Result<(u64, RangeInclusive<u64>)> {
        let Some(seed) = self.seed else {
            bail!("{} was drawn without --seed and cannot be replayed", self.artifact.display());
        };
        if self.last_index < self.first_index {
            bail!("empty index range {}..={}", self.first_index, self.last_index);
        }
        Ok((seed, self.first_index..=self.last_index))
    }
}

/// `dir/name.json` → `dir/name.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}{SIDECAR_SUFFIX}"))
}

/// Write the record next to its artifact and return the sidecar path.
pub fn write_sidecar(record: &SampleRecord) -> Result<PathBuf> {
    let path = sidecar_path(&record.artifact);
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn read_sidecar(path: &Path) -> Result<SampleRecord> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Commit of the build: `GIT_COMMIT` at compile time, then at run time, then `git`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then_some(())?;
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
