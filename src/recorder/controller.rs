use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::info;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::CaptureConfig;
use crate::feed::ObservationFeed;
use crate::models::{RecordingOutcome, RecordingSession};

use super::loop_worker::recording_loop;
use super::state::RecorderState;

/// Owns the recording state machine: starts the timed loop, exposes its
/// progress, and cancels or awaits it. One recording at a time; a start
/// request while a session is in Countdown or Capturing is rejected.
pub struct RecorderController {
    config: CaptureConfig,
    feed: ObservationFeed,
    state: Arc<Mutex<RecorderState>>,
    handle: Option<JoinHandle<RecordingOutcome>>,
    cancel_token: Option<CancellationToken>,
}

impl RecorderController {
    pub fn new(config: CaptureConfig, feed: ObservationFeed) -> Self {
        Self {
            config,
            feed,
            state: Arc::new(Mutex::new(RecorderState::new())),
            handle: None,
            cancel_token: None,
        }
    }

    pub async fn state(&self) -> RecorderState {
        self.state.lock().await.clone()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Starts a recording for `label`. Precondition: at least one hand in
    /// the latest observation; otherwise the request is rejected and the
    /// state machine stays Idle.
    pub async fn start(&mut self, label: impl Into<String>) -> Result<()> {
        if self.handle.is_some() {
            bail!("recording already active");
        }
        if !self.feed.hands_detected() {
            bail!("no hands detected; cannot start recording");
        }

        let session = RecordingSession::new(label);
        info!("starting recording session {} ({})", session.id, session.label);

        {
            let mut state = self.state.lock().await;
            state.begin_session(
                session.id.clone(),
                session.label.clone(),
                self.config.countdown_ticks,
                self.config.sequence_length,
            );
        }

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(recording_loop(
            self.config.clone(),
            self.feed.clone(),
            self.state.clone(),
            session,
            cancel_token.clone(),
        ));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    /// Waits for the running recording to finish and returns its outcome.
    pub async fn wait(&mut self) -> Result<RecordingOutcome> {
        let handle = self
            .handle
            .take()
            .context("no recording in progress")?;
        self.cancel_token.take();

        handle.await.context("recording task failed to join")
    }

    /// Cancels the running recording: stops further ticks, discards the
    /// partial session, and resolves the loop with a Cancelled outcome.
    pub async fn cancel(&mut self) -> Result<RecordingOutcome> {
        let token = self
            .cancel_token
            .take()
            .context("no recording in progress")?;
        token.cancel();

        let handle = self
            .handle
            .take()
            .context("recording task already detached")?;

        handle.await.context("recording task failed to join")
    }
}
