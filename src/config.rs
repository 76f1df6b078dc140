use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the capture pipeline. The defaults are the reference
/// behavior; tests and offline tooling override them freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Processing resolution width in pixels.
    pub frame_width: u32,

    /// Processing resolution height in pixels.
    pub frame_height: u32,

    /// Sampling cadence during capture, in milliseconds.
    pub frame_interval_ms: u64,

    /// Whole-second countdown ticks before capture begins. 0 skips the
    /// countdown entirely.
    pub countdown_ticks: u32,

    /// Number of samples per session. Fixed and pre-declared; every session
    /// produces exactly this many encode calls.
    pub sequence_length: usize,

    /// Minimum usable (hand-bearing) samples required at completion; fewer
    /// flags the session as insufficient instead of handing it off.
    pub min_samples: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frame_width: 640,
            frame_height: 480,
            frame_interval_ms: 100,
            countdown_ticks: 3,
            sequence_length: 30,
            min_samples: 10,
        }
    }
}

impl CaptureConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
