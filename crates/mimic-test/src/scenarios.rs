//! End-to-end scenarios
//!
//! Whole-pipeline runs on hand-built and generated recordings, checked
//! against closed-form expectations and the invariant checker.
