pub mod observation;
pub mod session;

pub use observation::{
    HandLandmarks, Handedness, LandmarkObservation, LandmarkPoint, ReferencePose, ShoulderCenter,
    HAND_LANDMARK_COUNT, LEFT_SHOULDER, RIGHT_SHOULDER,
};
pub use session::{RecordingOutcome, RecordingSession};
