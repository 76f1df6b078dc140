use serde::{Deserialize, Serialize};

/// Number of landmark points the hand detector reports per hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Body landmark indices for the shoulder points in the pose detector's
/// indexing scheme.
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;

/// A single detected anatomical point. `x`/`y` are normalized image
/// coordinates (roughly [0,1] relative to frame width/height); `z` is a
/// relative depth with no fixed unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Handedness {
    Left,
    Right,
}

/// One detected hand: a handedness label, the detector's confidence score,
/// and the ordered landmark points. 21 points are expected; a shorter list
/// degrades to zeros for the missing tail downstream, it is never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandLandmarks {
    pub handedness: Handedness,
    pub score: f32,
    pub points: Vec<LandmarkPoint>,
}

/// One detector output for one video frame: zero, one, or two hands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkObservation {
    pub hands: Vec<HandLandmarks>,
}

impl LandmarkObservation {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Overall detection confidence: the best hand score, 0 when no hand is
    /// present.
    pub fn confidence(&self) -> f32 {
        self.hands
            .iter()
            .map(|hand| hand.score)
            .fold(0.0_f32, f32::max)
    }

    /// Selects a hand by its handedness label. The detector does not
    /// guarantee left/right ordering between frames, so array position is
    /// never used for selection.
    pub fn hand(&self, handedness: Handedness) -> Option<&HandLandmarks> {
        self.hands.iter().find(|hand| hand.handedness == handedness)
    }
}

/// Body landmarks from the pose detector. Only the two shoulder points are
/// consumed here; the rest of the list is carried opaquely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferencePose {
    pub points: Vec<LandmarkPoint>,
}

impl ReferencePose {
    /// Midpoint of the left and right shoulder landmarks, if both exist.
    pub fn shoulder_center(&self) -> Option<ShoulderCenter> {
        let left = self.points.get(LEFT_SHOULDER)?;
        let right = self.points.get(RIGHT_SHOULDER)?;
        Some(ShoulderCenter {
            x: (left.x + right.x) / 2.0,
            y: (left.y + right.y) / 2.0,
        })
    }
}

/// The normalization origin for the feature encoder, in normalized image
/// coordinates. Replaced wholesale on every pose update; readers never see a
/// half-written point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoulderCenter {
    pub x: f32,
    pub y: f32,
}

impl Default for ShoulderCenter {
    /// The assumed shoulder position before any pose has been observed.
    fn default() -> Self {
        Self { x: 0.5, y: 0.333 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_hand(handedness: Handedness, score: f32) -> HandLandmarks {
        HandLandmarks {
            handedness,
            score,
            points: vec![LandmarkPoint::default(); HAND_LANDMARK_COUNT],
        }
    }

    #[test]
    fn empty_observation_has_zero_confidence() {
        let obs = LandmarkObservation::empty();
        assert_eq!(obs.hand_count(), 0);
        assert_eq!(obs.confidence(), 0.0);
    }

    #[test]
    fn confidence_is_best_hand_score() {
        let obs = LandmarkObservation {
            hands: vec![one_hand(Handedness::Left, 0.6), one_hand(Handedness::Right, 0.9)],
        };
        assert_eq!(obs.confidence(), 0.9);
    }

    #[test]
    fn hand_selection_is_by_label_not_order() {
        let obs = LandmarkObservation {
            hands: vec![one_hand(Handedness::Right, 0.8), one_hand(Handedness::Left, 0.7)],
        };
        assert_eq!(obs.hand(Handedness::Left).unwrap().score, 0.7);
        assert_eq!(obs.hand(Handedness::Right).unwrap().score, 0.8);
    }

    #[test]
    fn shoulder_center_is_midpoint_of_shoulders() {
        let mut points = vec![LandmarkPoint::default(); 33];
        points[LEFT_SHOULDER] = LandmarkPoint::new(0.4, 0.3, 0.0);
        points[RIGHT_SHOULDER] = LandmarkPoint::new(0.6, 0.5, 0.0);
        let pose = ReferencePose { points };
        let center = pose.shoulder_center().unwrap();
        assert!((center.x - 0.5).abs() < 1e-6);
        assert!((center.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn shoulder_center_requires_both_shoulder_points() {
        let pose = ReferencePose {
            points: vec![LandmarkPoint::default(); LEFT_SHOULDER],
        };
        assert!(pose.shoulder_center().is_none());
    }

    #[test]
    fn default_shoulder_center_matches_reference_assumption() {
        let center = ShoulderCenter::default();
        assert_eq!(center.x, 0.5);
        assert_eq!(center.y, 0.333);
    }
}
