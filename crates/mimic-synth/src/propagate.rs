//! Frame-t propagator
//!
//! Replays the recorded motion on the synthetic actor. The per-bone length
//! ratios between synthetic and real frame 0 are computed once; each later
//! frame applies them to the real bones of that frame, hung off the
//! synthetic tree. The result is the clean skeleton; noise is added when a
//! frame is emitted (see [`emit`]).

use rand::Rng;

use mimic_core::{is_degenerate, noisy, ratio, translate_by_ratio, Frame, FRAME_LANDMARKS};
use mimic_skeleton::{Bone, Skeleton};

use crate::SynthConfig;

/// Ratio-preserving propagation anchored at frame 0
#[derive(Debug, Clone)]
pub struct Propagator<'a> {
    skeleton: &'a Skeleton,
    real0: &'a Frame,
    synth0: &'a Frame,
    k_body: f64,
    /// Length ratio per bone, in walk order
    ratios: Vec<f64>,
    /// Bones whose frame-0 reference length is zero
    degenerate: Vec<Bone>,
}

impl<'a> Propagator<'a> {
    pub fn new(skeleton: &'a Skeleton, real0: &'a Frame, synth0: &'a Frame, k_body: f64) -> Self {
        let mut ratios = Vec::with_capacity(skeleton.resolved().len());
        let mut degenerate = Vec::new();

        for (bone, named) in skeleton.resolved().iter().zip(skeleton.bones()) {
            let (a, b) = (real0.at(bone.parent), real0.at(bone.child));
            if is_degenerate(a, b) {
                degenerate.push(*named);
            }
            ratios.push(ratio(a, b, synth0.at(bone.parent), synth0.at(bone.child)));
        }

        Self {
            skeleton,
            real0,
            synth0,
            k_body,
            ratios,
            degenerate,
        }
    }

    /// Per-bone ratios, aligned with [`Skeleton::resolved`]
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    pub fn degenerate_bones(&self) -> &[Bone] {
        &self.degenerate
    }

    /// Clean synthetic skeleton for the real frame `real_t`
    pub fn propagate(&self, real_t: &Frame) -> Frame {
        let mut out = Frame::zeroed();

        // Only the root moves by the global body distortion
        let root = self.skeleton.root_index();
        *out.at_mut(root) = translate_by_ratio(
            self.real0.at(root),
            real_t.at(root),
            self.synth0.at(root),
            self.k_body,
        );

        for (bone, k) in self.skeleton.resolved().iter().zip(&self.ratios) {
            let placed = translate_by_ratio(
                real_t.at(bone.parent),
                real_t.at(bone.child),
                out.at(bone.parent),
                *k,
            );
            *out.at_mut(bone.child) = placed;
        }

        out
    }
}

/// Add emission noise to a clean propagated frame, per landmark category
pub fn emit<R: Rng + ?Sized>(
    skeleton: &Skeleton,
    config: &SynthConfig,
    clean: &Frame,
    rng: &mut R,
) -> Frame {
    let mut out = Frame::zeroed();
    for index in 0..FRAME_LANDMARKS {
        let eps = config.propagation_eps(skeleton.category_of(index));
        *out.at_mut(index) = noisy(clean.at(index), eps, rng);
    }
    out
}
