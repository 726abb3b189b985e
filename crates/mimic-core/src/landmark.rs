//! Landmark roles
//!
//! Names for every point slot of a frame. A frame carries three parts in a
//! fixed order: left hand (21), right hand (21), upper-body pose (17).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of landmarks in one hand
pub const HAND_LANDMARKS: usize = 21;

/// Number of upper-body pose landmarks
pub const POSE_LANDMARKS: usize = 17;

/// Leading pose landmarks that belong to the face (nose, eyes, ears, mouth)
pub const FACE_LANDMARKS: usize = 11;

/// Total landmarks in one frame
pub const FRAME_LANDMARKS: usize = HAND_LANDMARKS * 2 + POSE_LANDMARKS;

/// One of the three point lists of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    LeftHand,
    RightHand,
    Pose,
}

impl Part {
    /// Parts in frame order
    pub fn all() -> &'static [Part] {
        &[Part::LeftHand, Part::RightHand, Part::Pose]
    }

    /// Required point count for this part
    pub fn point_count(&self) -> usize {
        match self {
            Part::LeftHand | Part::RightHand => HAND_LANDMARKS,
            Part::Pose => POSE_LANDMARKS,
        }
    }

    /// Offset of this part inside the flattened frame
    pub fn offset(&self) -> usize {
        match self {
            Part::LeftHand => 0,
            Part::RightHand => HAND_LANDMARKS,
            Part::Pose => HAND_LANDMARKS * 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::LeftHand => write!(f, "left hand"),
            Part::RightHand => write!(f, "right hand"),
            Part::Pose => write!(f, "pose"),
        }
    }
}

/// Body side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn hand(&self) -> Part {
        match self {
            Side::Left => Part::LeftHand,
            Side::Right => Part::RightHand,
        }
    }
}

/// Upper-body pose landmark, in frame order.
///
/// The first [`FACE_LANDMARKS`] entries are the face; the remaining six are
/// shoulders, elbows and hips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftHip = 15,
    RightHip = 16,
}

impl PoseLandmark {
    /// All pose landmarks in frame order
    pub fn all() -> &'static [PoseLandmark] {
        use PoseLandmark::*;
        &[
            Nose,
            LeftEyeInner,
            LeftEye,
            LeftEyeOuter,
            RightEyeInner,
            RightEye,
            RightEyeOuter,
            LeftEar,
            RightEar,
            MouthLeft,
            MouthRight,
            LeftShoulder,
            RightShoulder,
            LeftElbow,
            RightElbow,
            LeftHip,
            RightHip,
        ]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<PoseLandmark> {
        Self::all().get(index).copied()
    }

    /// Face partition (nose, eyes, ears, mouth)
    pub fn is_face(&self) -> bool {
        self.index() < FACE_LANDMARKS
    }

    /// Index of this landmark in the full 33-point body pose model the
    /// extractor reads from. Hips skip the wrist/finger/leg entries.
    pub fn model_index(&self) -> usize {
        match self {
            PoseLandmark::LeftHip => 23,
            PoseLandmark::RightHip => 24,
            other => other.index(),
        }
    }
}

/// Hand landmark, in frame order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    /// All hand landmarks in frame order
    pub fn all() -> &'static [HandLandmark] {
        use HandLandmark::*;
        &[
            Wrist, ThumbCmc, ThumbMcp, ThumbIp, ThumbTip, IndexMcp, IndexPip, IndexDip, IndexTip,
            MiddleMcp, MiddlePip, MiddleDip, MiddleTip, RingMcp, RingPip, RingDip, RingTip,
            PinkyMcp, PinkyPip, PinkyDip, PinkyTip,
        ]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<HandLandmark> {
        Self::all().get(index).copied()
    }
}

/// A fully qualified point slot within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landmark {
    Pose(PoseLandmark),
    Hand(Side, HandLandmark),
}

impl Landmark {
    pub const fn pose(p: PoseLandmark) -> Self {
        Landmark::Pose(p)
    }

    pub const fn left(h: HandLandmark) -> Self {
        Landmark::Hand(Side::Left, h)
    }

    pub const fn right(h: HandLandmark) -> Self {
        Landmark::Hand(Side::Right, h)
    }

    pub fn part(&self) -> Part {
        match self {
            Landmark::Pose(_) => Part::Pose,
            Landmark::Hand(side, _) => side.hand(),
        }
    }

    /// Index within the owning part
    pub fn index(&self) -> usize {
        match self {
            Landmark::Pose(p) => p.index(),
            Landmark::Hand(_, h) => h.index(),
        }
    }

    /// Index in the flattened frame (left hand, right hand, pose)
    pub fn flat_index(&self) -> usize {
        self.part().offset() + self.index()
    }

    pub fn from_flat_index(index: usize) -> Option<Landmark> {
        if index < HAND_LANDMARKS {
            HandLandmark::from_index(index).map(Landmark::left)
        } else if index < HAND_LANDMARKS * 2 {
            HandLandmark::from_index(index - HAND_LANDMARKS).map(Landmark::right)
        } else {
            PoseLandmark::from_index(index - HAND_LANDMARKS * 2).map(Landmark::Pose)
        }
    }

    /// Every landmark of a frame in flat order
    pub fn all() -> impl Iterator<Item = Landmark> {
        (0..FRAME_LANDMARKS).filter_map(Landmark::from_flat_index)
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Landmark::Pose(p) => write!(f, "pose.{:?}", p),
            Landmark::Hand(Side::Left, h) => write!(f, "left.{:?}", h),
            Landmark::Hand(Side::Right, h) => write!(f, "right.{:?}", h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(PoseLandmark::all().len(), POSE_LANDMARKS);
        assert_eq!(HandLandmark::all().len(), HAND_LANDMARKS);
        assert_eq!(FRAME_LANDMARKS, 59);
    }

    #[test]
    fn test_parts_tile_the_frame() {
        let mut next = 0;
        for part in Part::all() {
            assert_eq!(part.offset(), next);
            next += part.point_count();
        }
        assert_eq!(next, FRAME_LANDMARKS);
    }

    #[test]
    fn test_enum_order_matches_index() {
        for (i, p) in PoseLandmark::all().iter().enumerate() {
            assert_eq!(p.index(), i);
        }
        for (i, h) in HandLandmark::all().iter().enumerate() {
            assert_eq!(h.index(), i);
        }
    }

    #[test]
    fn test_face_partition() {
        let face = PoseLandmark::all().iter().filter(|p| p.is_face()).count();
        assert_eq!(face, FACE_LANDMARKS);
        assert!(PoseLandmark::MouthRight.is_face());
        assert!(!PoseLandmark::LeftShoulder.is_face());
    }

    #[test]
    fn test_model_index() {
        assert_eq!(PoseLandmark::RightShoulder.model_index(), 12);
        assert_eq!(PoseLandmark::LeftHip.model_index(), 23);
        assert_eq!(PoseLandmark::RightHip.model_index(), 24);
    }

    #[test]
    fn test_flat_index_roundtrip() {
        let all: Vec<Landmark> = Landmark::all().collect();
        assert_eq!(all.len(), FRAME_LANDMARKS);
        for (i, lm) in all.iter().enumerate() {
            assert_eq!(lm.flat_index(), i);
        }
        assert_eq!(Landmark::right(HandLandmark::Wrist).flat_index(), 21);
        assert_eq!(Landmark::pose(PoseLandmark::Nose).flat_index(), 42);
        assert!(Landmark::from_flat_index(FRAME_LANDMARKS).is_none());
    }
}
