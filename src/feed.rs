//! Detector-to-recorder seam.
//!
//! The detector pushes observations at its own rate; the recorder samples at
//! its own cadence. The connection is a pair of single-slot cells
//! (replace-on-write, read-without-blocking), not a queue: the recorder
//! always reads the newest observation and never waits for a fresh one.

use tokio::sync::watch;

use crate::models::{LandmarkObservation, ReferencePose, ShoulderCenter};

/// Detector-side handle. Push callbacks land here.
pub struct ObservationPublisher {
    hands_tx: watch::Sender<LandmarkObservation>,
    shoulder_tx: watch::Sender<ShoulderCenter>,
}

impl ObservationPublisher {
    /// Replaces the latest hand observation.
    pub fn publish_hands(&self, observation: LandmarkObservation) {
        self.hands_tx.send_replace(observation);
    }

    /// Updates the shoulder center from a pose observation. A pose without
    /// both shoulder points leaves the previous center in place.
    pub fn publish_pose(&self, pose: &ReferencePose) {
        if let Some(center) = pose.shoulder_center() {
            self.shoulder_tx.send_replace(center);
        }
    }
}

/// Reader-side handle held by the recording loop. Cloneable; all clones see
/// the same latest values.
#[derive(Clone)]
pub struct ObservationFeed {
    hands_rx: watch::Receiver<LandmarkObservation>,
    shoulder_rx: watch::Receiver<ShoulderCenter>,
}

impl ObservationFeed {
    /// The most recently delivered observation, which may be stale by up to
    /// one detector cycle.
    pub fn latest(&self) -> LandmarkObservation {
        self.hands_rx.borrow().clone()
    }

    /// The most recently derived shoulder center, or the default before any
    /// pose has been observed.
    pub fn shoulder_center(&self) -> ShoulderCenter {
        *self.shoulder_rx.borrow()
    }

    pub fn hands_detected(&self) -> bool {
        self.hands_rx.borrow().hand_count() > 0
    }
}

/// Creates a connected publisher/feed pair seeded with an empty observation
/// and the default shoulder center.
pub fn observation_channel() -> (ObservationPublisher, ObservationFeed) {
    let (hands_tx, hands_rx) = watch::channel(LandmarkObservation::empty());
    let (shoulder_tx, shoulder_rx) = watch::channel(ShoulderCenter::default());

    (
        ObservationPublisher {
            hands_tx,
            shoulder_tx,
        },
        ObservationFeed {
            hands_rx,
            shoulder_rx,
        },
    )
}
