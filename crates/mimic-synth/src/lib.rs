//! MIMIC Synth - the synthetic actor engine
//!
//! One recorded sequence in, one synthetic sequence of identical shape out.
//! The synthetic actor performs the recorded gesture with its own bone
//! proportions, fixed for the whole sequence.
//!
//! # Stages
//!
//! - Frame 0: walk the skeleton from a jittered root, placing every child at
//!   a uniformly rescaled copy of the real bone, then add per-category noise.
//! - Frame t: move the root by the real root's displacement scaled by
//!   `k_body`, then replay every real bone at frame t with the length ratio
//!   that bone was given at frame 0.
//!
//! # Randomness
//!
//! Every draw of a run comes from the [`SynthSession`] that owns it. Sessions
//! never share a generator, so sequences can be synthesized on independent
//! workers and stay reproducible from their seeds.

pub mod augment;
pub mod config;
pub mod distortion;
pub mod frame0;
pub mod propagate;
pub mod session;

pub use augment::*;
pub use config::*;
pub use distortion::*;
pub use frame0::*;
pub use propagate::*;
pub use session::*;
