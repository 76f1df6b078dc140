use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RecorderPhase {
    Idle,
    Countdown,
    Capturing,
    Complete,
    Aborted,
}

impl Default for RecorderPhase {
    fn default() -> Self {
        RecorderPhase::Idle
    }
}

/// Observable snapshot of one recording's progress. Updated by the recording
/// loop, read by whoever drives the UI; never mutated concurrently with its
/// own production.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecorderState {
    pub phase: RecorderPhase,
    pub session_id: Option<String>,
    pub label: Option<String>,
    pub countdown_remaining: u32,
    pub frames_captured: usize,
    pub target_frames: usize,
}

impl RecorderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, RecorderPhase::Countdown | RecorderPhase::Capturing)
    }

    pub fn begin_session(
        &mut self,
        session_id: String,
        label: String,
        countdown_ticks: u32,
        target_frames: usize,
    ) {
        *self = Self {
            phase: if countdown_ticks > 0 {
                RecorderPhase::Countdown
            } else {
                RecorderPhase::Capturing
            },
            session_id: Some(session_id),
            label: Some(label),
            countdown_remaining: countdown_ticks,
            frames_captured: 0,
            target_frames,
        };
    }

    pub fn countdown_tick(&mut self, remaining: u32) {
        self.countdown_remaining = remaining;
    }

    pub fn begin_capture(&mut self) {
        self.phase = RecorderPhase::Capturing;
        self.countdown_remaining = 0;
    }

    pub fn record_tick(&mut self) {
        self.frames_captured += 1;
    }

    pub fn complete(&mut self) {
        self.phase = RecorderPhase::Complete;
    }

    pub fn abort(&mut self) {
        self.phase = RecorderPhase::Aborted;
    }
}
