//! Landmark-to-feature-vector normalization.
//!
//! Converts one [`LandmarkObservation`] into a fixed 126-component vector:
//! a 63-slot block for the left hand followed by a 63-slot block for the
//! right hand, each 21 points x (x_norm, y_norm, z_norm) in landmark order.
//! Coordinates are normalized relative to the shoulder center in pixel space,
//! re-expressed as a fraction of the processing resolution; z passes through
//! unchanged. The encoder never fails: missing hands or points degrade to
//! zeros so the output shape is always exactly 126.

use crate::config::CaptureConfig;
use crate::models::{Handedness, LandmarkObservation, ShoulderCenter, HAND_LANDMARK_COUNT};

pub const COORDS_PER_POINT: usize = 3;
pub const HAND_FEATURE_DIM: usize = HAND_LANDMARK_COUNT * COORDS_PER_POINT;
pub const FEATURE_DIM: usize = HAND_FEATURE_DIM * 2;

/// One sampled tick's normalized encoding of both hands.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f32; FEATURE_DIM]);

impl FeatureVector {
    pub fn zeros() -> Self {
        Self([0.0; FEATURE_DIM])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }

    /// The 63-component left-hand block.
    pub fn left_hand(&self) -> &[f32] {
        &self.0[..HAND_FEATURE_DIM]
    }

    /// The 63-component right-hand block.
    pub fn right_hand(&self) -> &[f32] {
        &self.0[HAND_FEATURE_DIM..]
    }
}

impl AsRef<[f32]> for FeatureVector {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

/// Encodes one observation against the most recently known shoulder center.
///
/// Deterministic and order-stable: identical inputs always produce
/// bit-identical output. Block selection is by handedness label, never by
/// detector-reported array order; if the detector reports two hands with the
/// same label, the later report wins.
pub fn encode_observation(
    observation: &LandmarkObservation,
    shoulder: ShoulderCenter,
    config: &CaptureConfig,
) -> FeatureVector {
    let mut features = FeatureVector::zeros();

    let w = config.frame_width as f32;
    let h = config.frame_height as f32;
    let shoulder_x = shoulder.x * w;
    let shoulder_y = shoulder.y * h;

    for hand in &observation.hands {
        let offset = match hand.handedness {
            Handedness::Left => 0,
            Handedness::Right => HAND_FEATURE_DIM,
        };

        // Reset the block so a duplicate-label report replaces, not blends.
        features.0[offset..offset + HAND_FEATURE_DIM].fill(0.0);

        for (i, point) in hand.points.iter().take(HAND_LANDMARK_COUNT).enumerate() {
            let x_px = point.x * w;
            let y_px = point.y * h;

            let base = offset + i * COORDS_PER_POINT;
            features.0[base] = (x_px - shoulder_x) / w;
            features.0[base + 1] = (y_px - shoulder_y) / h;
            features.0[base + 2] = point.z;
        }
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HandLandmarks, LandmarkPoint};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn config() -> CaptureConfig {
        CaptureConfig::default()
    }

    fn hand_at(handedness: Handedness, points: Vec<LandmarkPoint>) -> HandLandmarks {
        HandLandmarks {
            handedness,
            score: 0.95,
            points,
        }
    }

    fn random_points(rng: &mut StdRng) -> Vec<LandmarkPoint> {
        (0..HAND_LANDMARK_COUNT)
            .map(|_| LandmarkPoint::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0), rng.gen_range(-0.2..0.2)))
            .collect()
    }

    #[test]
    fn zero_hands_encode_to_all_zeros() {
        let features = encode_observation(
            &LandmarkObservation::empty(),
            ShoulderCenter::default(),
            &config(),
        );
        assert_eq!(features.as_slice().len(), FEATURE_DIM);
        assert!(features.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn left_hand_fills_first_block_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let obs = LandmarkObservation {
            hands: vec![hand_at(Handedness::Left, random_points(&mut rng))],
        };
        let shoulder = ShoulderCenter { x: 0.5, y: 0.4 };
        let features = encode_observation(&obs, shoulder, &config());

        assert!(features.left_hand().iter().any(|&v| v != 0.0));
        assert!(features.right_hand().iter().all(|&v| v == 0.0));

        // Spot-check the normalization formula for the first point.
        let p = obs.hands[0].points[0];
        let w = 640.0_f32;
        let h = 480.0_f32;
        assert_eq!(features.left_hand()[0], (p.x * w - shoulder.x * w) / w);
        assert_eq!(features.left_hand()[1], (p.y * h - shoulder.y * h) / h);
        assert_eq!(features.left_hand()[2], p.z);
    }

    #[test]
    fn right_hand_fills_last_block_only() {
        let mut rng = StdRng::seed_from_u64(8);
        let obs = LandmarkObservation {
            hands: vec![hand_at(Handedness::Right, random_points(&mut rng))],
        };
        let features = encode_observation(&obs, ShoulderCenter::default(), &config());

        assert!(features.left_hand().iter().all(|&v| v == 0.0));
        assert!(features.right_hand().iter().any(|&v| v != 0.0));
    }

    #[test]
    fn block_selection_ignores_detector_order() {
        let mut rng = StdRng::seed_from_u64(9);
        let left_points = random_points(&mut rng);
        let right_points = random_points(&mut rng);

        let reported_right_first = LandmarkObservation {
            hands: vec![
                hand_at(Handedness::Right, right_points.clone()),
                hand_at(Handedness::Left, left_points.clone()),
            ],
        };
        let reported_left_first = LandmarkObservation {
            hands: vec![
                hand_at(Handedness::Left, left_points),
                hand_at(Handedness::Right, right_points),
            ],
        };

        let shoulder = ShoulderCenter::default();
        assert_eq!(
            encode_observation(&reported_right_first, shoulder, &config()),
            encode_observation(&reported_left_first, shoulder, &config())
        );
    }

    #[test]
    fn duplicate_label_later_report_wins() {
        let mut rng = StdRng::seed_from_u64(10);
        let first = random_points(&mut rng);
        let second = random_points(&mut rng);

        let obs = LandmarkObservation {
            hands: vec![
                hand_at(Handedness::Left, first),
                hand_at(Handedness::Left, second.clone()),
            ],
        };
        let only_second = LandmarkObservation {
            hands: vec![hand_at(Handedness::Left, second)],
        };

        let shoulder = ShoulderCenter::default();
        assert_eq!(
            encode_observation(&obs, shoulder, &config()),
            encode_observation(&only_second, shoulder, &config())
        );
    }

    #[test]
    fn short_point_list_degrades_to_zero_tail() {
        let obs = LandmarkObservation {
            hands: vec![hand_at(
                Handedness::Left,
                vec![LandmarkPoint::new(0.9, 0.9, 0.1); 5],
            )],
        };
        let features = encode_observation(&obs, ShoulderCenter::default(), &config());

        assert!(features.left_hand()[..5 * COORDS_PER_POINT]
            .iter()
            .any(|&v| v != 0.0));
        assert!(features.left_hand()[5 * COORDS_PER_POINT..]
            .iter()
            .all(|&v| v == 0.0));
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let obs = LandmarkObservation {
            hands: vec![
                hand_at(Handedness::Left, random_points(&mut rng)),
                hand_at(Handedness::Right, random_points(&mut rng)),
            ],
        };
        let shoulder = ShoulderCenter { x: 0.47, y: 0.31 };

        let a = encode_observation(&obs, shoulder, &config());
        let b = encode_observation(&obs, shoulder, &config());
        assert_eq!(a, b);
    }

    #[test]
    fn normalization_is_translation_consistent() {
        let mut rng = StdRng::seed_from_u64(12);
        let points = random_points(&mut rng);
        let shoulder = ShoulderCenter { x: 0.4, y: 0.3 };

        let delta = (0.0625_f32, 0.125_f32); // exact in binary, so shifts cancel bit-exactly
        let shifted_points: Vec<LandmarkPoint> = points
            .iter()
            .map(|p| LandmarkPoint::new(p.x + delta.0, p.y + delta.1, p.z))
            .collect();
        let shifted_shoulder = ShoulderCenter {
            x: shoulder.x + delta.0,
            y: shoulder.y + delta.1,
        };

        let base = encode_observation(
            &LandmarkObservation {
                hands: vec![hand_at(Handedness::Left, points)],
            },
            shoulder,
            &config(),
        );
        let shifted = encode_observation(
            &LandmarkObservation {
                hands: vec![hand_at(Handedness::Left, shifted_points)],
            },
            shifted_shoulder,
            &config(),
        );

        for (a, b) in base.as_slice().iter().zip(shifted.as_slice()) {
            assert!((a - b).abs() < 1e-5, "translation changed encoding: {a} vs {b}");
        }
    }

    #[test]
    fn landmarks_at_shoulder_center_collapse_to_zero() {
        let shoulder = ShoulderCenter::default();
        let points = vec![LandmarkPoint::new(shoulder.x, shoulder.y, 0.0); HAND_LANDMARK_COUNT];
        let obs = LandmarkObservation {
            hands: vec![hand_at(Handedness::Left, points)],
        };

        let features = encode_observation(&obs, shoulder, &config());
        assert!(features.as_slice().iter().all(|&v| v == 0.0));
    }
}
