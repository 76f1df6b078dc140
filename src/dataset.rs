//! On-disk layout for training samples.
//!
//! Samples live under `<base>/<label>/` and are named `<label> (N).npy` with
//! N the next free index, so repeated recordings of the same word accumulate
//! without clobbering earlier takes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::encoder::FEATURE_DIM;
use crate::models::RecordingSession;
use crate::npy;

/// Scans `dir` for existing `<label> (N).npy` files and returns the next
/// free index, starting at 1. A missing directory counts as empty.
pub fn next_index_for_label(dir: &Path, label: &str) -> Result<u32> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(1),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", dir.display()))
        }
    };

    let mut max_index = 0;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        if let Some(index) = parse_sample_index(name, label) {
            max_index = max_index.max(index);
        }
    }

    Ok(max_index + 1)
}

/// Extracts N from `<label> (N).npy`, if `name` follows the convention.
fn parse_sample_index(name: &str, label: &str) -> Option<u32> {
    let stem = name.strip_suffix(".npy")?;
    let rest = stem.strip_prefix(label)?;
    let rest = rest.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')?.parse().ok()
}

/// Writes a session's frames as the next sample under
/// `<base>/<session.label>/` and returns the written path.
pub fn save_session(base_dir: &Path, session: &RecordingSession) -> Result<PathBuf> {
    let label_dir = base_dir.join(&session.label);
    fs::create_dir_all(&label_dir)
        .with_context(|| format!("failed to create {}", label_dir.display()))?;

    let index = next_index_for_label(&label_dir, &session.label)?;
    let path = label_dir.join(format!("{} ({index}).npy", session.label));

    npy::write_npy(&path, session.frames(), FEATURE_DIM)?;
    info!(
        "saved {} frames for '{}' to {}",
        session.len(),
        session.label,
        path.display()
    );

    Ok(path)
}
