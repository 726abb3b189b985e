//! Frame - one time step of the full skeleton
//!
//! Shape is carried by the type: 21 left-hand points, 21 right-hand points and
//! 17 pose points. Raw extractor output enters through the checked
//! constructors, which is the only place a shape mismatch can surface.

use serde::{Deserialize, Serialize};

use crate::{
    Landmark, MimicError, MimicResult, Part, Point3, FRAME_LANDMARKS, HAND_LANDMARKS,
    POSE_LANDMARKS,
};

/// Length of the flat feature vector of one frame
pub const FEATURE_LEN: usize = FRAME_LANDMARKS * 3;

/// Complete skeleton for one time step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub left_hand: [Point3; HAND_LANDMARKS],
    pub right_hand: [Point3; HAND_LANDMARKS],
    pub pose: [Point3; POSE_LANDMARKS],
}

impl Default for Frame {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Frame {
    /// Frame with every landmark undetected
    pub fn zeroed() -> Self {
        Self {
            left_hand: [Point3::ZERO; HAND_LANDMARKS],
            right_hand: [Point3::ZERO; HAND_LANDMARKS],
            pose: [Point3::ZERO; POSE_LANDMARKS],
        }
    }

    /// Build a frame from the extractor's three point lists
    pub fn from_landmarks(
        left_hand: &[[f64; 3]],
        right_hand: &[[f64; 3]],
        pose: &[[f64; 3]],
    ) -> MimicResult<Self> {
        let mut frame = Self::zeroed();
        fill(&mut frame.left_hand, left_hand, Part::LeftHand)?;
        fill(&mut frame.right_hand, right_hand, Part::RightHand)?;
        fill(&mut frame.pose, pose, Part::Pose)?;
        Ok(frame)
    }

    /// Inverse of [`Frame::to_feature_vector`]
    pub fn from_feature_vector(values: &[f64]) -> MimicResult<Self> {
        if values.len() != FEATURE_LEN {
            return Err(MimicError::FeatureLength {
                expected: FEATURE_LEN,
                actual: values.len(),
            });
        }
        let mut frame = Self::zeroed();
        for (i, xyz) in values.chunks_exact(3).enumerate() {
            *frame.at_mut(i) = Point3::new(xyz[0], xyz[1], xyz[2]);
        }
        Ok(frame)
    }

    /// Points of one part
    pub fn part(&self, part: Part) -> &[Point3] {
        match part {
            Part::LeftHand => &self.left_hand,
            Part::RightHand => &self.right_hand,
            Part::Pose => &self.pose,
        }
    }

    pub fn get(&self, landmark: Landmark) -> Point3 {
        *self.at(landmark.flat_index())
    }

    pub fn set(&mut self, landmark: Landmark, point: Point3) {
        *self.at_mut(landmark.flat_index()) = point;
    }

    /// Point by flat index (left hand, right hand, pose).
    ///
    /// Panics if `index >= FRAME_LANDMARKS`.
    pub fn at(&self, index: usize) -> &Point3 {
        if index < HAND_LANDMARKS {
            &self.left_hand[index]
        } else if index < HAND_LANDMARKS * 2 {
            &self.right_hand[index - HAND_LANDMARKS]
        } else {
            &self.pose[index - HAND_LANDMARKS * 2]
        }
    }

    /// Mutable point by flat index.
    ///
    /// Panics if `index >= FRAME_LANDMARKS`.
    pub fn at_mut(&mut self, index: usize) -> &mut Point3 {
        if index < HAND_LANDMARKS {
            &mut self.left_hand[index]
        } else if index < HAND_LANDMARKS * 2 {
            &mut self.right_hand[index - HAND_LANDMARKS]
        } else {
            &mut self.pose[index - HAND_LANDMARKS * 2]
        }
    }

    /// All points in flat order
    pub fn points(&self) -> impl Iterator<Item = &Point3> {
        Part::all().iter().flat_map(move |part| self.part(*part).iter())
    }

    /// At least one hand was detected
    pub fn has_hands(&self) -> bool {
        !(self.left_hand.iter().all(Point3::is_zero) && self.right_hand.iter().all(Point3::is_zero))
    }

    /// Nothing was detected in this frame
    pub fn is_blank(&self) -> bool {
        self.points().all(Point3::is_zero)
    }

    /// Every point lies on the image plane
    pub fn is_planar(&self) -> bool {
        self.points().all(|p| p.z == 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.points().all(Point3::is_finite)
    }

    /// Flatten to `[x, y, z]` triples: left hand, right hand, pose
    pub fn to_feature_vector(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(FEATURE_LEN);
        for p in self.points() {
            out.extend_from_slice(&p.to_array());
        }
        out
    }
}

fn fill(dst: &mut [Point3], src: &[[f64; 3]], part: Part) -> MimicResult<()> {
    if src.len() != dst.len() {
        return Err(MimicError::ShapeMismatch {
            part,
            expected: dst.len(),
            actual: src.len(),
        });
    }
    for (d, s) in dst.iter_mut().zip(src) {
        *d = Point3::from(*s);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandLandmark, PoseLandmark};

    fn raw(n: usize, base: f64) -> Vec<[f64; 3]> {
        (0..n).map(|i| [base + i as f64, base, 0.5]).collect()
    }

    #[test]
    fn test_from_landmarks() {
        let frame = Frame::from_landmarks(&raw(21, 0.0), &raw(21, 100.0), &raw(17, 200.0)).unwrap();

        assert_eq!(frame.get(Landmark::left(HandLandmark::ThumbCmc)).x, 1.0);
        assert_eq!(frame.get(Landmark::right(HandLandmark::Wrist)).x, 100.0);
        assert_eq!(frame.get(Landmark::pose(PoseLandmark::RightHip)).x, 216.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Frame::from_landmarks(&raw(21, 0.0), &raw(20, 0.0), &raw(17, 0.0)).unwrap_err();
        assert_eq!(
            err,
            MimicError::ShapeMismatch {
                part: Part::RightHand,
                expected: 21,
                actual: 20
            }
        );

        let err = Frame::from_landmarks(&raw(21, 0.0), &raw(21, 0.0), &raw(33, 0.0)).unwrap_err();
        assert!(matches!(err, MimicError::ShapeMismatch { part: Part::Pose, .. }));
    }

    #[test]
    fn test_flat_index_matches_landmark() {
        let mut frame = Frame::zeroed();
        for lm in Landmark::all() {
            frame.set(lm, Point3::planar(lm.flat_index() as f64, 0.0));
        }
        for (i, p) in frame.points().enumerate() {
            assert_eq!(p.x, i as f64);
        }
    }

    #[test]
    fn test_feature_vector() {
        let frame = Frame::from_landmarks(&raw(21, 0.0), &raw(21, 100.0), &raw(17, 200.0)).unwrap();
        let v = frame.to_feature_vector();
        assert_eq!(v.len(), FEATURE_LEN);
        assert_eq!(&v[63..66], &[100.0, 100.0, 0.5]);
        assert_eq!(Frame::from_feature_vector(&v).unwrap(), frame);

        let err = Frame::from_feature_vector(&v[..10]).unwrap_err();
        assert_eq!(
            err,
            MimicError::FeatureLength {
                expected: 177,
                actual: 10
            }
        );
    }

    #[test]
    fn test_detection_flags() {
        let mut frame = Frame::zeroed();
        assert!(frame.is_blank());
        assert!(!frame.has_hands());

        frame.set(Landmark::pose(PoseLandmark::Nose), Point3::planar(0.5, 0.2));
        assert!(!frame.is_blank());
        assert!(!frame.has_hands());

        frame.set(Landmark::left(HandLandmark::IndexTip), Point3::planar(0.4, 0.4));
        assert!(frame.has_hands());
    }

    #[test]
    fn test_json_shape() {
        let frame = Frame::zeroed();
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["left_hand"].as_array().unwrap().len(), 21);
        assert_eq!(json["pose"].as_array().unwrap().len(), 17);

        let back: Frame = serde_json::from_value(json).unwrap();
        assert_eq!(back, frame);
    }
}
