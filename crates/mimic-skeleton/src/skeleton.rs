//! Resolved skeleton
//!
//! Landmark roles are resolved to flat frame indices once, when the skeleton
//! is built, so synthesis walks plain index pairs.

use mimic_core::{Landmark, MimicError, MimicResult, FRAME_LANDMARKS};

use crate::{standard_bones, Bone, BoneCategory, PalmTopology, ResolvedBone, ROOT, ROOT_CATEGORY};

/// Kinematic tree over every landmark of a frame
#[derive(Debug, Clone)]
pub struct Skeleton {
    root: Landmark,
    bones: Vec<Bone>,
    resolved: Vec<ResolvedBone>,
    /// Noise category per flat landmark index
    categories: [BoneCategory; FRAME_LANDMARKS],
    /// Parent flat index per flat landmark index
    parents: [Option<usize>; FRAME_LANDMARKS],
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::standard()
    }
}

impl Skeleton {
    /// Standard tree with finger bases on the wrist
    pub fn standard() -> Self {
        Self::with_palm(PalmTopology::default())
    }

    /// Standard tree with the given palm wiring
    pub fn with_palm(palm: PalmTopology) -> Self {
        Self::build(ROOT, standard_bones(palm))
    }

    /// Custom tree; must be a parent-first walk that spans the whole frame
    pub fn from_bones(root: Landmark, bones: Vec<Bone>) -> MimicResult<Self> {
        validate(root, &bones)?;
        Ok(Self::build(root, bones))
    }

    fn build(root: Landmark, bones: Vec<Bone>) -> Self {
        let resolved: Vec<ResolvedBone> = bones.iter().map(ResolvedBone::from).collect();

        let mut categories = [ROOT_CATEGORY; FRAME_LANDMARKS];
        let mut parents = [None; FRAME_LANDMARKS];
        for bone in &resolved {
            categories[bone.child] = bone.category;
            parents[bone.child] = Some(bone.parent);
        }

        Self {
            root,
            bones,
            resolved,
            categories,
            parents,
        }
    }

    pub fn root(&self) -> Landmark {
        self.root
    }

    pub fn root_index(&self) -> usize {
        self.root.flat_index()
    }

    /// Bones in walk order
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Bones in walk order, as flat index pairs
    pub fn resolved(&self) -> &[ResolvedBone] {
        &self.resolved
    }

    /// Noise category of the bone that places this landmark
    pub fn category_of(&self, index: usize) -> BoneCategory {
        self.categories.get(index).copied().unwrap_or(ROOT_CATEGORY)
    }

    pub fn parent_of(&self, landmark: Landmark) -> Option<Landmark> {
        self.parents
            .get(landmark.flat_index())
            .copied()
            .flatten()
            .and_then(Landmark::from_flat_index)
    }

    pub fn children_of(&self, landmark: Landmark) -> Vec<Landmark> {
        self.bones
            .iter()
            .filter(|b| b.parent == landmark)
            .map(|b| b.child)
            .collect()
    }

    /// Number of bones between the root and this landmark
    pub fn depth_of(&self, landmark: Landmark) -> usize {
        let mut depth = 0;
        let mut cursor = landmark;
        while let Some(parent) = self.parent_of(cursor) {
            depth += 1;
            cursor = parent;
        }
        depth
    }
}

/// Check that `bones` is a parent-first walk of a tree rooted at `root` that
/// places every frame landmark exactly once.
pub fn validate(root: Landmark, bones: &[Bone]) -> MimicResult<()> {
    let mut placed = [false; FRAME_LANDMARKS];
    placed[root.flat_index()] = true;

    for bone in bones {
        let parent = bone.parent.flat_index();
        let child = bone.child.flat_index();

        if !placed[parent] {
            return Err(MimicError::InvalidSkeleton(format!(
                "{} is used as a parent before it is placed",
                bone.parent
            )));
        }
        if placed[child] {
            return Err(MimicError::InvalidSkeleton(format!(
                "{} is placed more than once",
                bone.child
            )));
        }
        placed[child] = true;
    }

    if let Some(missing) = placed.iter().position(|p| !p) {
        let name = Landmark::from_flat_index(missing)
            .map(|l| l.to_string())
            .unwrap_or_else(|| missing.to_string());
        return Err(MimicError::InvalidSkeleton(format!(
            "{} is not reached from the root",
            name
        )));
    }

    Ok(())
}
