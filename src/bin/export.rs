//! Offline converter: recorded observation logs to `.npy` dataset samples.
//!
//! Input is JSONL, one record per line:
//! `{"hands": [...], "pose": {"points": [...]}}`. Pose records update the
//! shoulder center exactly as the live pipeline would; every line encodes to
//! one feature-vector row. Rows are padded (repeat-last-frame) or truncated
//! to the target length and saved under `<output-dir>/<label>/`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use serde::Deserialize;

use signcap::models::{LandmarkObservation, ReferencePose, ShoulderCenter};
use signcap::{dataset, encode_observation, CaptureConfig, RecordingSession};

#[derive(Parser, Debug)]
#[command(name = "signcap-export")]
#[command(about = "Convert recorded landmark observations into .npy dataset samples")]
struct Cli {
    /// Input observation log (JSONL, one frame record per line)
    input: PathBuf,

    /// Label/word to save the sample under
    #[arg(short, long)]
    label: String,

    /// Base output directory for per-label samples
    #[arg(short, long, default_value = "dataset/landmarks")]
    output_dir: PathBuf,

    /// Frames per sample; shorter input is padded by repeating the last
    /// frame, longer input is truncated
    #[arg(short, long)]
    frames: Option<usize>,

    /// Capture config overrides as JSON (resolution etc.)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    hands: Vec<signcap::HandLandmarks>,
    #[serde(default)]
    pose: Option<ReferencePose>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => CaptureConfig::default(),
    };
    let target_frames = cli.frames.unwrap_or(config.sequence_length);

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;

    let mut session = RecordingSession::new(cli.label.clone());
    let mut shoulder = ShoulderCenter::default();

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_no + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: FrameRecord = serde_json::from_str(&line)
            .with_context(|| format!("invalid frame record on line {}", line_no + 1))?;

        if let Some(pose) = &record.pose {
            if let Some(center) = pose.shoulder_center() {
                shoulder = center;
            }
        }

        let observation = LandmarkObservation {
            hands: record.hands,
        };
        session.push(encode_observation(&observation, shoulder, &config));
    }

    if session.is_empty() {
        bail!("no frame records in {}", cli.input.display());
    }
    if session.len() < target_frames {
        warn!(
            "{} frames recorded, padding to {target_frames}",
            session.len()
        );
    }

    let rows = session.padded_frames(target_frames);
    let mut padded = RecordingSession::new(cli.label);
    for row in rows {
        padded.push(row);
    }

    let path = dataset::save_session(&cli.output_dir, &padded)?;
    info!("wrote {}", path.display());
    Ok(())
}
