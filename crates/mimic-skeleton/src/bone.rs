//! Bones and noise categories

use serde::{Deserialize, Serialize};

use mimic_core::Landmark;

/// Noise category of a bone, chosen by the landmark it places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoneCategory {
    /// Face points (nose, eyes, ears, mouth)
    Eye,
    /// Shoulders, elbows, hips and wrists
    Body,
    /// Hand joints past the wrist
    Finger,
}

impl BoneCategory {
    pub fn all() -> &'static [BoneCategory] {
        &[BoneCategory::Eye, BoneCategory::Body, BoneCategory::Finger]
    }
}

/// Directed parent -> child relationship between two landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bone {
    pub parent: Landmark,
    pub child: Landmark,
    pub category: BoneCategory,
}

impl Bone {
    pub const fn new(parent: Landmark, child: Landmark, category: BoneCategory) -> Self {
        Self {
            parent,
            child,
            category,
        }
    }
}

/// Bone with both ends resolved to flat frame indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBone {
    pub parent: usize,
    pub child: usize,
    pub category: BoneCategory,
}

impl From<&Bone> for ResolvedBone {
    fn from(bone: &Bone) -> Self {
        Self {
            parent: bone.parent.flat_index(),
            child: bone.child.flat_index(),
            category: bone.category,
        }
    }
}
