//! Capture pipeline for hand-pose recording sessions: an external detector
//! pushes landmark observations, a timed controller samples them at a fixed
//! cadence, each sample is normalized into a 126-component feature vector,
//! and completed sequences are serialized as NumPy `.npy` artifacts.

pub mod config;
pub mod dataset;
pub mod encoder;
pub mod feed;
pub mod models;
pub mod npy;
pub mod recorder;
pub mod scorer;

pub use config::CaptureConfig;
pub use encoder::{encode_observation, FeatureVector, FEATURE_DIM, HAND_FEATURE_DIM};
pub use feed::{observation_channel, ObservationFeed, ObservationPublisher};
pub use models::{
    HandLandmarks, Handedness, LandmarkObservation, LandmarkPoint, RecordingOutcome,
    RecordingSession, ReferencePose, ShoulderCenter,
};
pub use recorder::{RecorderController, RecorderPhase, RecorderState};
