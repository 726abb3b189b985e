//! MIMIC Test Harness - fixtures and invariant validation
//!
//! This crate provides:
//! - Hand-built recordings for the reference scenarios (single arm, blank)
//! - A seeded motion generator for full-skeleton recordings
//! - Checkers for the synthesis laws (planarity, root displacement,
//!   ratio preservation, noise bounds)
//! - End-to-end scenario tests

pub mod fixtures;
pub mod invariants;
pub mod motion;
pub mod scenarios;

pub use fixtures::*;
pub use invariants::*;
pub use motion::*;
