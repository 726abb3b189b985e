//! Invariant checks for synthesized sequences
//!
//! A [`Synthesis`] carries everything needed to replay its clean skeleton:
//! frame 0, the frame-0 scale and `k_body`. The checker rebuilds the clean
//! frames and verifies every law of the run against them:
//!
//! - Shape: same length as the recording, every point finite and planar
//! - Frame 0: each child sits at its parent plus the rescaled real bone,
//!   within the category noise
//! - Root law: `root_t = root_0 + k_body * (real_root_t - real_root_0)`
//! - Ratio preservation: every clean bone keeps its frame-0 length ratio.
//!   Exact for planar recordings; depth shortens the real bones the ratios
//!   are measured against.
//! - Noise bound: emitted points stay within the category amplitude of the
//!   clean skeleton

use mimic_core::{is_degenerate, ratio, translate_by_ratio, Frame, Landmark, Point3, Sequence};
use mimic_skeleton::{Bone, Skeleton};
use mimic_synth::{Propagator, SynthConfig, Synthesis};

/// Absolute slack for floating-point comparisons
pub const TOLERANCE: f64 = 1e-9;

/// A broken synthesis law
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    LengthMismatch { expected: usize, actual: usize },
    NotFinite { frame: usize },
    NotPlanar { frame: usize },
    RootAnchor { error: f64, bound: f64 },
    Frame0Bone { bone: Bone, error: f64, bound: f64 },
    RootLaw { frame: usize, error: f64 },
    RatioDrift { frame: usize, bone: Bone, expected: f64, actual: f64 },
    NoiseBound { frame: usize, landmark: Landmark, error: f64, bound: f64 },
}

/// Outcome of [`check_synthesis`]
#[derive(Debug, Default)]
pub struct InvariantReport {
    pub frames_checked: usize,
    pub violations: Vec<Violation>,
}

impl InvariantReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Largest per-axis deviation between two points on the image plane
pub fn planar_error(p: &Point3, q: &Point3) -> f64 {
    (p.x - q.x).abs().max((p.y - q.y).abs())
}

/// Check every synthesis law of `synthesis` against its recording
pub fn check_synthesis(
    skeleton: &Skeleton,
    config: &SynthConfig,
    real: &Sequence,
    synthesis: &Synthesis,
) -> InvariantReport {
    let mut report = InvariantReport::default();
    let synth = &synthesis.frames;

    if synth.len() != real.len() {
        report.violations.push(Violation::LengthMismatch {
            expected: real.len(),
            actual: synth.len(),
        });
        return report;
    }

    for (t, frame) in synth.iter().enumerate() {
        if !frame.is_finite() {
            report.violations.push(Violation::NotFinite { frame: t });
        }
        if !frame.is_planar() {
            report.violations.push(Violation::NotPlanar { frame: t });
        }
    }

    check_frame0(
        skeleton,
        config,
        real.first(),
        synth.first(),
        synthesis.frame0_scale,
        &mut report,
    );

    let propagator = Propagator::new(
        skeleton,
        real.first(),
        synth.first(),
        synthesis.distortion.k_body,
    );
    for (t, (real_t, emitted)) in real.iter().zip(synth.iter()).enumerate().skip(1) {
        let clean = propagator.propagate(real_t);
        check_root_law(
            skeleton,
            (real.first(), real_t),
            synth.first(),
            synthesis.distortion.k_body,
            t,
            &clean,
            &mut report,
        );
        check_ratios(skeleton, &propagator, t, real_t, &clean, &mut report);
        check_noise(skeleton, config, t, &clean, emitted, &mut report);
    }

    report.frames_checked = synth.len();
    report
}

fn check_frame0(
    skeleton: &Skeleton,
    config: &SynthConfig,
    real0: &Frame,
    synth0: &Frame,
    scale: f64,
    report: &mut InvariantReport,
) {
    let root = skeleton.root_index();
    let error = planar_error(real0.at(root), synth0.at(root));
    if error > config.root_anchor_eps + TOLERANCE {
        report.violations.push(Violation::RootAnchor {
            error,
            bound: config.root_anchor_eps,
        });
    }

    for (bone, named) in skeleton.resolved().iter().zip(skeleton.bones()) {
        let expected = translate_by_ratio(
            real0.at(bone.parent),
            real0.at(bone.child),
            synth0.at(bone.parent),
            scale,
        );
        let bound = config.eps(bone.category);
        let error = planar_error(&expected, synth0.at(bone.child));
        if error > bound + TOLERANCE {
            report.violations.push(Violation::Frame0Bone {
                bone: *named,
                error,
                bound,
            });
        }
    }
}

fn check_root_law(
    skeleton: &Skeleton,
    (real0, real_t): (&Frame, &Frame),
    synth0: &Frame,
    k_body: f64,
    t: usize,
    clean: &Frame,
    report: &mut InvariantReport,
) {
    let root = skeleton.root_index();
    let expected = Point3::planar(
        synth0.at(root).x + k_body * (real_t.at(root).x - real0.at(root).x),
        synth0.at(root).y + k_body * (real_t.at(root).y - real0.at(root).y),
    );
    let error = planar_error(&expected, clean.at(root));
    if error > TOLERANCE {
        report.violations.push(Violation::RootLaw { frame: t, error });
    }
}

fn check_ratios(
    skeleton: &Skeleton,
    propagator: &Propagator<'_>,
    t: usize,
    real_t: &Frame,
    clean: &Frame,
    report: &mut InvariantReport,
) {
    let bones = skeleton.resolved().iter().zip(skeleton.bones());
    for ((bone, named), expected) in bones.zip(propagator.ratios()) {
        let (a, b) = (real_t.at(bone.parent), real_t.at(bone.child));
        // An undetected bone has no length to preserve
        if is_degenerate(a, b) {
            continue;
        }
        let actual = ratio(a, b, clean.at(bone.parent), clean.at(bone.child));
        if (actual - expected).abs() > TOLERANCE * expected.max(1.0) {
            report.violations.push(Violation::RatioDrift {
                frame: t,
                bone: *named,
                expected: *expected,
                actual,
            });
        }
    }
}

fn check_noise(
    skeleton: &Skeleton,
    config: &SynthConfig,
    t: usize,
    clean: &Frame,
    emitted: &Frame,
    report: &mut InvariantReport,
) {
    for landmark in Landmark::all() {
        let index = landmark.flat_index();
        let bound = config.propagation_eps(skeleton.category_of(index));
        let error = planar_error(clean.at(index), emitted.at(index));
        if error > bound + TOLERANCE {
            report.violations.push(Violation::NoiseBound {
                frame: t,
                landmark,
                error,
                bound,
            });
        }
    }
}
