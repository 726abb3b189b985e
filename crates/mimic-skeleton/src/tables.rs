//! Static bone tables
//!
//! Each table lists bones parent-first. Concatenated by
//! [`standard_bones`] with the hand tables spliced in after each arm, they form
//! a topological walk from [`ROOT`].

use serde::{Deserialize, Serialize};

use mimic_core::{HandLandmark, Landmark, PoseLandmark, Side};

use crate::{Bone, BoneCategory};

use BoneCategory::{Body, Eye};
use HandLandmark::*;
use PoseLandmark::*;

/// Root of the tree
pub const ROOT: Landmark = Landmark::pose(RightShoulder);

/// Category the root point is noised with
pub const ROOT_CATEGORY: BoneCategory = Body;

const fn pose(p: PoseLandmark) -> Landmark {
    Landmark::pose(p)
}

/// Shoulder -> elbow -> right hand root
pub const RIGHT_ARM: [Bone; 2] = [
    Bone::new(pose(RightShoulder), pose(RightElbow), Body),
    Bone::new(pose(RightElbow), Landmark::right(Wrist), Body),
];

/// Across the shoulders, then down to the left hand root
pub const LEFT_ARM: [Bone; 3] = [
    Bone::new(pose(RightShoulder), pose(LeftShoulder), Body),
    Bone::new(pose(LeftShoulder), pose(LeftElbow), Body),
    Bone::new(pose(LeftElbow), Landmark::left(Wrist), Body),
];

pub const HIPS: [Bone; 2] = [
    Bone::new(pose(RightShoulder), pose(RightHip), Body),
    Bone::new(pose(RightHip), pose(LeftHip), Body),
];

/// Shoulder -> mouth, then nose and both eye/ear chains
pub const FACE: [Bone; 11] = [
    Bone::new(pose(RightShoulder), pose(MouthRight), Eye),
    Bone::new(pose(MouthRight), pose(MouthLeft), Eye),
    Bone::new(pose(MouthRight), pose(Nose), Eye),
    Bone::new(pose(Nose), pose(LeftEyeInner), Eye),
    Bone::new(pose(LeftEyeInner), pose(LeftEye), Eye),
    Bone::new(pose(LeftEye), pose(LeftEyeOuter), Eye),
    Bone::new(pose(LeftEyeOuter), pose(LeftEar), Eye),
    Bone::new(pose(Nose), pose(RightEyeInner), Eye),
    Bone::new(pose(RightEyeInner), pose(RightEye), Eye),
    Bone::new(pose(RightEye), pose(RightEyeOuter), Eye),
    Bone::new(pose(RightEyeOuter), pose(RightEar), Eye),
];

/// Finger joints with every finger base hanging off the wrist
pub const WRIST_FAN: [(HandLandmark, HandLandmark); 20] = [
    (Wrist, ThumbCmc),
    (ThumbCmc, ThumbMcp),
    (ThumbMcp, ThumbIp),
    (ThumbIp, ThumbTip),
    (Wrist, IndexMcp),
    (IndexMcp, IndexPip),
    (IndexPip, IndexDip),
    (IndexDip, IndexTip),
    (Wrist, MiddleMcp),
    (MiddleMcp, MiddlePip),
    (MiddlePip, MiddleDip),
    (MiddleDip, MiddleTip),
    (Wrist, RingMcp),
    (RingMcp, RingPip),
    (RingPip, RingDip),
    (RingDip, RingTip),
    (Wrist, PinkyMcp),
    (PinkyMcp, PinkyPip),
    (PinkyPip, PinkyDip),
    (PinkyDip, PinkyTip),
];

/// Finger joints with the knuckles chained across the palm
pub const KNUCKLE_CHAIN: [(HandLandmark, HandLandmark); 20] = [
    (Wrist, ThumbCmc),
    (ThumbCmc, ThumbMcp),
    (ThumbMcp, ThumbIp),
    (ThumbIp, ThumbTip),
    (Wrist, IndexMcp),
    (IndexMcp, IndexPip),
    (IndexPip, IndexDip),
    (IndexDip, IndexTip),
    (IndexMcp, MiddleMcp),
    (MiddleMcp, MiddlePip),
    (MiddlePip, MiddleDip),
    (MiddleDip, MiddleTip),
    (MiddleMcp, RingMcp),
    (RingMcp, RingPip),
    (RingPip, RingDip),
    (RingDip, RingTip),
    (RingMcp, PinkyMcp),
    (PinkyMcp, PinkyPip),
    (PinkyPip, PinkyDip),
    (PinkyDip, PinkyTip),
];

/// How finger bases attach inside the palm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalmTopology {
    /// Every finger base is a child of the wrist
    #[default]
    WristFan,
    /// Index base off the wrist; middle, ring and pinky bases off the
    /// previous finger base
    KnuckleChain,
}

impl PalmTopology {
    pub fn finger_pairs(&self) -> &'static [(HandLandmark, HandLandmark); 20] {
        match self {
            PalmTopology::WristFan => &WRIST_FAN,
            PalmTopology::KnuckleChain => &KNUCKLE_CHAIN,
        }
    }

    /// Finger bones of one hand
    pub fn hand_bones(&self, side: Side) -> impl Iterator<Item = Bone> {
        self.finger_pairs().iter().map(move |&(parent, child)| {
            Bone::new(
                Landmark::Hand(side, parent),
                Landmark::Hand(side, child),
                BoneCategory::Finger,
            )
        })
    }
}

/// Full bone list in walk order
pub fn standard_bones(palm: PalmTopology) -> Vec<Bone> {
    RIGHT_ARM
        .iter()
        .copied()
        .chain(palm.hand_bones(Side::Right))
        .chain(LEFT_ARM.iter().copied())
        .chain(palm.hand_bones(Side::Left))
        .chain(HIPS.iter().copied())
        .chain(FACE.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimic_core::FRAME_LANDMARKS;

    #[test]
    fn test_bone_count_spans_frame() {
        for palm in [PalmTopology::WristFan, PalmTopology::KnuckleChain] {
            assert_eq!(standard_bones(palm).len(), FRAME_LANDMARKS - 1);
        }
    }

    #[test]
    fn test_face_is_eye_category() {
        for bone in FACE.iter() {
            assert_eq!(bone.category, Eye);
            match bone.child {
                Landmark::Pose(p) => assert!(p.is_face()),
                other => panic!("face bone places {other}"),
            }
        }
    }

    #[test]
    fn test_finger_bases_branch_from_wrist() {
        let bases = [ThumbCmc, IndexMcp, MiddleMcp, RingMcp, PinkyMcp];
        for (parent, child) in WRIST_FAN.iter() {
            if bases.contains(child) {
                assert_eq!(*parent, Wrist);
            } else {
                assert_eq!(parent.index() + 1, child.index());
            }
        }
    }

    #[test]
    fn test_knuckle_chain_bases() {
        let parent_of = |c: HandLandmark| {
            KNUCKLE_CHAIN
                .iter()
                .find(|(_, child)| *child == c)
                .map(|(p, _)| *p)
        };
        assert_eq!(parent_of(IndexMcp), Some(Wrist));
        assert_eq!(parent_of(MiddleMcp), Some(IndexMcp));
        assert_eq!(parent_of(RingMcp), Some(MiddleMcp));
        assert_eq!(parent_of(PinkyMcp), Some(RingMcp));
        assert_eq!(parent_of(ThumbCmc), Some(Wrist));
    }

    #[test]
    fn test_arms_cross_into_hand_roots() {
        assert_eq!(RIGHT_ARM[1].child, Landmark::right(Wrist));
        assert_eq!(LEFT_ARM[2].child, Landmark::left(Wrist));
        assert!(RIGHT_ARM.iter().chain(LEFT_ARM.iter()).all(|b| b.category == Body));
    }
}
