use std::sync::Arc;

use log::{info, warn};
use tokio::sync::Mutex;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::config::CaptureConfig;
use crate::encoder::encode_observation;
use crate::feed::ObservationFeed;
use crate::models::{RecordingOutcome, RecordingSession};

use super::state::RecorderState;

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Drives one recording from countdown through capture on a single timeline.
/// Exactly one encode call per capture tick; the latest observation is
/// re-read from the feed each tick, whether or not the detector has delivered
/// a new one since the last tick.
pub(super) async fn recording_loop(
    config: CaptureConfig,
    feed: ObservationFeed,
    state: Arc<Mutex<RecorderState>>,
    mut session: RecordingSession,
    cancel_token: CancellationToken,
) -> RecordingOutcome {
    if config.countdown_ticks > 0 {
        let mut ticker = interval(COUNTDOWN_TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick resolves immediately; consume it so each
        // countdown step holds for a full second.
        ticker.tick().await;

        for remaining in (0..config.countdown_ticks).rev() {
            tokio::select! {
                _ = ticker.tick() => {
                    state.lock().await.countdown_tick(remaining);
                }
                _ = cancel_token.cancelled() => {
                    return abort(&state, session, "countdown").await;
                }
            }
        }

        state.lock().await.begin_capture();
    }

    info!(
        "capturing session {}: {} ticks at {}ms",
        session.id, config.sequence_length, config.frame_interval_ms
    );

    let mut ticker = interval(config.frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut usable = 0_usize;

    for _ in 0..config.sequence_length {
        tokio::select! {
            _ = ticker.tick() => {
                let observation = feed.latest();
                let shoulder = feed.shoulder_center();

                if observation.hand_count() > 0 {
                    usable += 1;
                }

                session.push(encode_observation(&observation, shoulder, &config));
                state.lock().await.record_tick();
            }
            _ = cancel_token.cancelled() => {
                return abort(&state, session, "capture").await;
            }
        }
    }

    if usable < config.min_samples {
        state.lock().await.abort();
        warn!(
            "session {} discarded: {usable} usable samples, {} required",
            session.id, config.min_samples
        );
        return RecordingOutcome::Insufficient {
            session_id: session.id,
            captured: usable,
            required: config.min_samples,
        };
    }

    state.lock().await.complete();
    info!(
        "session {} complete: {} frames, {usable} usable",
        session.id,
        session.len()
    );
    RecordingOutcome::Completed(session)
}

async fn abort(
    state: &Arc<Mutex<RecorderState>>,
    session: RecordingSession,
    phase: &str,
) -> RecordingOutcome {
    state.lock().await.abort();
    info!("session {} cancelled during {phase}", session.id);
    RecordingOutcome::Cancelled {
        session_id: session.id,
    }
}
