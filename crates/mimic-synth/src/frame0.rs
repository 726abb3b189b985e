//! Frame-0 synthesizer
//!
//! Builds the synthetic actor's first frame from the recorded first frame.
//! Every bone is the real bone rescaled by one scale factor, hung off the
//! already-placed synthetic parent, then jittered by its category's noise.

use rand::Rng;

use mimic_core::{noisy, translate_by_ratio, Frame};
use mimic_skeleton::Skeleton;

use crate::SynthConfig;

/// Synthesize frame 0 with bone scale `scale`.
///
/// Total: an all-zero input yields an all-zero-shaped, finite output.
pub fn synthesize_frame0<R: Rng + ?Sized>(
    skeleton: &Skeleton,
    config: &SynthConfig,
    real: &Frame,
    scale: f64,
    rng: &mut R,
) -> Frame {
    let mut synth = Frame::zeroed();

    let root = skeleton.root_index();
    *synth.at_mut(root) = noisy(real.at(root), config.root_anchor_eps, rng);

    for bone in skeleton.resolved() {
        let placed = translate_by_ratio(
            real.at(bone.parent),
            real.at(bone.child),
            synth.at(bone.parent),
            scale,
        );
        *synth.at_mut(bone.child) = noisy(&placed, config.eps(bone.category), rng);
    }

    synth
}
