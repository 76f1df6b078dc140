use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::encoder::FeatureVector;

/// The ordered sequence of feature vectors produced by one capture, owned by
/// the recording loop while it runs and handed off whole on completion.
#[derive(Debug, Clone)]
pub struct RecordingSession {
    pub id: String,
    pub label: String,
    pub started_at: DateTime<Utc>,
    frames: Vec<FeatureVector>,
}

impl RecordingSession {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            started_at: Utc::now(),
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: FeatureVector) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[FeatureVector] {
        &self.frames
    }

    /// The frames extended to `target` rows by repeating the final frame
    /// (zero rows when the session is empty), truncated when longer. Used by
    /// offline tooling that needs uniform-length samples.
    pub fn padded_frames(&self, target: usize) -> Vec<FeatureVector> {
        let mut rows: Vec<FeatureVector> = self.frames.iter().take(target).cloned().collect();
        while rows.len() < target {
            let filler = rows.last().cloned().unwrap_or_else(FeatureVector::zeros);
            rows.push(filler);
        }
        rows
    }
}

/// How a recording ended. Insufficient and Cancelled carry no frames; the
/// partial session is discarded, never handed off.
#[derive(Debug, Clone)]
pub enum RecordingOutcome {
    Completed(RecordingSession),
    Insufficient {
        session_id: String,
        captured: usize,
        required: usize,
    },
    Cancelled {
        session_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::FEATURE_DIM;

    fn non_zero_frame() -> FeatureVector {
        use crate::config::CaptureConfig;
        use crate::models::{HandLandmarks, Handedness, LandmarkObservation, LandmarkPoint, ShoulderCenter};

        let obs = LandmarkObservation {
            hands: vec![HandLandmarks {
                handedness: Handedness::Left,
                score: 1.0,
                points: vec![LandmarkPoint::new(0.9, 0.9, 0.2); 21],
            }],
        };
        crate::encoder::encode_observation(&obs, ShoulderCenter::default(), &CaptureConfig::default())
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = RecordingSession::new("hello");
        let b = RecordingSession::new("hello");
        assert_ne!(a.id, b.id);
        assert_eq!(a.label, "hello");
    }

    #[test]
    fn padding_repeats_the_last_frame() {
        let mut session = RecordingSession::new("wave");
        session.push(FeatureVector::zeros());
        session.push(non_zero_frame());

        let rows = session.padded_frames(5);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], rows[4]);
        assert_eq!(rows[0].as_slice().len(), FEATURE_DIM);
    }

    #[test]
    fn padding_an_empty_session_yields_zero_rows() {
        let session = RecordingSession::new("wave");
        let rows = session.padded_frames(3);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.as_slice().iter().all(|&v| v == 0.0)));
    }

    #[test]
    fn padding_truncates_longer_sessions() {
        let mut session = RecordingSession::new("wave");
        for _ in 0..6 {
            session.push(FeatureVector::zeros());
        }
        assert_eq!(session.padded_frames(4).len(), 4);
    }
}
