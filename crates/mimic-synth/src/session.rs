//! Synthesis session - one synthetic actor, one sequence
//!
//! A session owns the random source and the distortion coefficients of a
//! single run. Nothing is shared between sessions, so concurrent runs stay
//! independent and each one is reproducible from its seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use mimic_core::{Frame, MimicError, MimicResult, Sequence};
use mimic_skeleton::{Bone, Skeleton};

use crate::{emit, frame0, sample_range, Distortion, Propagator, SynthConfig};

/// Result of synthesizing one sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthesis {
    /// Synthetic frames, same length and shape as the recording
    pub frames: Sequence,
    /// Global coefficients of this actor
    pub distortion: Distortion,
    /// Bone scale drawn for frame 0
    pub frame0_scale: f64,
    /// Bones whose recorded frame-0 length was zero; their ratios are low
    /// fidelity
    pub degenerate_bones: Vec<Bone>,
    /// Seed the session was created with, if any
    pub seed: Option<u64>,
}

/// Per-run synthesis context
#[derive(Debug)]
pub struct SynthSession {
    config: SynthConfig,
    skeleton: Skeleton,
    rng: StdRng,
    seed: Option<u64>,
    distortion: Distortion,
}

impl SynthSession {
    /// Create a seeded session and draw its distortion coefficients
    pub fn new(config: SynthConfig, seed: u64) -> MimicResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed), Some(seed))
    }

    /// Create a session seeded from OS entropy
    pub fn from_entropy(config: SynthConfig) -> MimicResult<Self> {
        Self::with_rng(config, StdRng::from_entropy(), None)
    }

    /// Create a seeded session with caller-chosen coefficients
    pub fn with_distortion(
        config: SynthConfig,
        seed: u64,
        distortion: Distortion,
    ) -> MimicResult<Self> {
        config.validate()?;
        Ok(Self {
            skeleton: Skeleton::with_palm(config.palm),
            config,
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            distortion,
        })
    }

    fn with_rng(config: SynthConfig, mut rng: StdRng, seed: Option<u64>) -> MimicResult<Self> {
        config.validate()?;
        let distortion = Distortion::sample(&config, &mut rng);
        Ok(Self {
            skeleton: Skeleton::with_palm(config.palm),
            config,
            rng,
            seed,
            distortion,
        })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn distortion(&self) -> Distortion {
        self.distortion
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Synthesize frame 0 from the recorded frame 0
    pub fn synthesize_frame0(&mut self, real0: &Frame) -> Frame {
        self.frame0_with_scale(real0).0
    }

    fn frame0_with_scale(&mut self, real0: &Frame) -> (Frame, f64) {
        let scale = sample_range(self.config.frame0_scale_range, &mut self.rng);
        let synth0 =
            frame0::synthesize_frame0(&self.skeleton, &self.config, real0, scale, &mut self.rng);
        (synth0, scale)
    }

    /// Synthesize frame `t` of `real`, given this actor's frame 0.
    ///
    /// `t` must be in `1..real.len()`; frame 0 comes from
    /// [`SynthSession::synthesize_frame0`].
    pub fn synthesize_frame_t(
        &mut self,
        t: usize,
        real: &Sequence,
        synth0: &Frame,
    ) -> MimicResult<Frame> {
        if t == 0 {
            return Err(MimicError::FrameOutOfRange {
                index: t,
                len: real.len(),
            });
        }
        let real_t = real.get(t)?;
        let propagator =
            Propagator::new(&self.skeleton, real.first(), synth0, self.distortion.k_body);
        let clean = propagator.propagate(real_t);
        Ok(emit(&self.skeleton, &self.config, &clean, &mut self.rng))
    }

    /// Synthesize the whole sequence. Consumes the session: one actor per run.
    pub fn synthesize(mut self, real: &Sequence) -> Synthesis {
        let span = tracing::debug_span!("synthesize", frames = real.len(), seed = ?self.seed);
        let _enter = span.enter();

        tracing::debug!(
            k_body = self.distortion.k_body,
            k_finger = self.distortion.k_finger,
            "distortion drawn"
        );

        let (synth0, frame0_scale) = self.frame0_with_scale(real.first());
        tracing::debug!(frame0_scale, "frame 0 synthesized");

        let propagator =
            Propagator::new(&self.skeleton, real.first(), &synth0, self.distortion.k_body);
        for bone in propagator.degenerate_bones() {
            tracing::debug!(
                parent = %bone.parent,
                child = %bone.child,
                "degenerate reference bone, ratio floored"
            );
        }

        let mut rest = Vec::with_capacity(real.len() - 1);
        for real_t in real.iter().skip(1) {
            let clean = propagator.propagate(real_t);
            rest.push(emit(&self.skeleton, &self.config, &clean, &mut self.rng));
        }
        let degenerate_bones = propagator.degenerate_bones().to_vec();

        Synthesis {
            frames: Sequence::with_anchor(synth0, rest),
            distortion: self.distortion,
            frame0_scale,
            degenerate_bones,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimic_core::{Landmark, Point3, PoseLandmark};

    fn recording(len: usize) -> Sequence {
        let frames = (0..len)
            .map(|t| {
                let mut frame = Frame::zeroed();
                for lm in Landmark::all() {
                    let i = lm.flat_index() as f64;
                    let phase = t as f64 * 0.1;
                    frame.set(
                        lm,
                        Point3::new(
                            0.35 + 0.008 * i + 0.01 * (phase + i).sin(),
                            0.25 + 0.005 * i + 0.01 * (phase - i).cos(),
                            -0.05,
                        ),
                    );
                }
                frame
            })
            .collect();
        Sequence::new(frames).unwrap()
    }

    #[test]
    fn test_synthesis_preserves_length_and_shape() {
        let real = recording(12);
        let session = SynthSession::new(SynthConfig::default(), 1).unwrap();
        let out = session.synthesize(&real);

        assert_eq!(out.frames.len(), real.len());
        assert!(out.frames.iter().all(|f| f.is_planar() && f.is_finite()));
        assert!(out.degenerate_bones.is_empty());
        assert_eq!(out.seed, Some(1));
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let real = recording(8);
        let a = SynthSession::new(SynthConfig::default(), 77).unwrap().synthesize(&real);
        let b = SynthSession::new(SynthConfig::default(), 77).unwrap().synthesize(&real);
        assert_eq!(a, b);

        let c = SynthSession::new(SynthConfig::default(), 78).unwrap().synthesize(&real);
        assert_ne!(a.frames, c.frames);
    }

    #[test]
    fn test_distortion_within_configured_range() {
        for seed in 0..20 {
            let session = SynthSession::new(SynthConfig::default(), seed).unwrap();
            let d = session.distortion();
            assert!((0.85..=1.25).contains(&d.k_body));
            assert!((d.k_finger - 0.9 * d.k_body).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_frame_sequence() {
        let real = recording(1);
        let out = SynthSession::new(SynthConfig::default(), 3).unwrap().synthesize(&real);
        assert_eq!(out.frames.len(), 1);
        assert!((0.8..=1.2).contains(&out.frame0_scale));
    }

    #[test]
    fn test_frame_t_out_of_range() {
        let real = recording(3);
        let mut session = SynthSession::new(SynthConfig::default(), 4).unwrap();
        let synth0 = session.synthesize_frame0(real.first());

        assert!(session.synthesize_frame_t(2, &real, &synth0).is_ok());
        assert_eq!(
            session.synthesize_frame_t(0, &real, &synth0).unwrap_err(),
            MimicError::FrameOutOfRange { index: 0, len: 3 }
        );
        assert_eq!(
            session.synthesize_frame_t(3, &real, &synth0).unwrap_err(),
            MimicError::FrameOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_frame_t_matches_root_law() {
        let real = recording(5);
        let mut session =
            SynthSession::with_distortion(SynthConfig::noiseless(), 5, Distortion::fixed(1.2, 0.9))
                .unwrap();
        let synth0 = session.synthesize_frame0(real.first());
        let synth4 = session.synthesize_frame_t(4, &real, &synth0).unwrap();

        let root = Landmark::pose(PoseLandmark::RightShoulder);
        let real0 = real.first().get(root);
        let real4 = real.get(4).unwrap().get(root);
        let expected = synth0.get(root).x + 1.2 * (real4.x - real0.x);
        assert!((synth4.get(root).x - expected).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SynthConfig {
            eps_eye: -1.0,
            ..SynthConfig::default()
        };
        assert!(matches!(
            SynthSession::new(config.clone(), 0),
            Err(MimicError::InvalidConfig(_))
        ));
        assert!(SynthSession::from_entropy(config).is_err());
    }

    #[test]
    fn test_blank_recording_reports_degenerate_bones() {
        let real = Sequence::new(vec![Frame::zeroed(); 3]).unwrap();
        let out = SynthSession::new(SynthConfig::default(), 6).unwrap().synthesize(&real);

        assert_eq!(out.degenerate_bones.len(), 58);
        assert!(out.frames.iter().all(Frame::is_finite));
    }
}
