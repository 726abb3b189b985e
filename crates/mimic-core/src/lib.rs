//! MIMIC Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the augmentation engine:
//! - Points and geometry primitives (noise, scaled translation, ratios)
//! - Landmark roles (upper-body pose and hand joints)
//! - Frames and sequences as delivered by the landmark extractor
//! - Error taxonomy

pub mod error;
pub mod frame;
pub mod geometry;
pub mod landmark;
pub mod point;
pub mod sequence;

pub use error::*;
pub use frame::*;
pub use geometry::*;
pub use landmark::*;
pub use point::*;
pub use sequence::*;
