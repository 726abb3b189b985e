//! MIMIC Skeleton - the kinematic tree
//!
//! A fixed parent -> child bone graph spanning every landmark of a frame:
//! upper body rooted at the right shoulder, arms crossing into the hand
//! roots at the wrists, four-joint finger chains per hand, and a face chain.
//!
//! The tree is data. Both synthesis stages walk [`Skeleton::resolved`] in
//! table order, which always places a parent before its children.

pub mod bone;
pub mod skeleton;
pub mod tables;

pub use bone::*;
pub use skeleton::*;
pub use tables::*;
