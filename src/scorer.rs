//! Wire contract for the remote prediction service.
//!
//! The transport itself (HTTP client, retries, auth) lives outside this
//! crate; what is fixed here is the payload shape the core produces and the
//! result shape it consumes. The request carries the feature-vector sequence,
//! not frame snapshots.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::RecordingSession;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub target_word: String,
    /// Row-major feature vectors, one per sampled tick.
    pub sequence: Vec<Vec<f32>>,
}

impl PredictRequest {
    pub fn from_session(session: &RecordingSession) -> Self {
        Self {
            target_word: session.label.clone(),
            sequence: session.frames().iter().map(|f| f.to_vec()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub is_correct: bool,
    pub message: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub predicted_word: Option<String>,
}

/// Transport seam. Implementations call the prediction service however they
/// like; errors mean the scoring attempt itself failed, not that the gesture
/// was wrong.
pub trait GestureScorer {
    fn score(&self, request: &PredictRequest) -> Result<PredictResponse>;
}

/// Session-level verdict. A transport failure is surfaced distinctly from an
/// incorrect gesture so callers never conflate the two.
#[derive(Debug, Clone)]
pub enum SessionVerdict {
    Correct(PredictResponse),
    Incorrect(PredictResponse),
    ScoringFailed(String),
}

impl SessionVerdict {
    pub fn from_result(result: Result<PredictResponse>) -> Self {
        match result {
            Ok(response) if response.is_correct => SessionVerdict::Correct(response),
            Ok(response) => SessionVerdict::Incorrect(response),
            Err(err) => SessionVerdict::ScoringFailed(format!("{err:#}")),
        }
    }
}
