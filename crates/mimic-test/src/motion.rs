//! Motion Generator - seeded synthetic recordings
//!
//! Produces extractor-like sequences from [`rest_pose`]: the whole body
//! drifts, each limb sways on its own phase, and hands occasionally drop
//! out of detection the way a real extractor loses them.

use mimic_core::{Frame, Landmark, Point3, Sequence, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rest_pose;

/// Motion generator configuration
#[derive(Clone, Debug)]
pub struct MotionConfig {
    /// Frames per sequence
    pub frames: usize,
    /// Max per-frame step of the whole-body drift
    pub drift_step: f64,
    /// Amplitude of the per-landmark sway
    pub sway: f64,
    /// Probability that a hand is undetected in a frame after the first
    pub hand_dropout_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            frames: 60,
            drift_step: 0.004,
            sway: 0.01,
            hand_dropout_prob: 0.0,
            seed: 42,
        }
    }
}

impl MotionConfig {
    /// Short recording for quick tests
    pub fn light() -> Self {
        MotionConfig {
            frames: 8,
            ..Self::default()
        }
    }

    /// Long recording with lossy hand tracking
    pub fn heavy() -> Self {
        MotionConfig {
            frames: 300,
            drift_step: 0.008,
            sway: 0.02,
            hand_dropout_prob: 0.1,
            seed: 42,
        }
    }
}

/// Seeded recording generator
pub struct MotionGenerator {
    config: MotionConfig,
    rng: StdRng,
    rest: Frame,
}

impl MotionGenerator {
    pub fn new(config: MotionConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        MotionGenerator {
            config,
            rng,
            rest: rest_pose(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Next recording. Frame 0 always has both hands.
    pub fn sequence(&mut self) -> Sequence {
        let phases: Vec<f64> = Landmark::all()
            .map(|_| self.rng.gen_range(0.0..std::f64::consts::TAU))
            .collect();

        let anchor = self.pose_at(0.0, &phases, Point3::zero());
        let mut offset = Point3::zero();
        let mut rest = Vec::with_capacity(self.config.frames.saturating_sub(1));
        for t in 1..self.config.frames {
            let step = self.config.drift_step;
            offset.x += self.rng.gen_range(-step..=step);
            offset.y += self.rng.gen_range(-step..=step);

            let mut frame = self.pose_at(t as f64 * 0.15, &phases, offset);
            for side in [Side::Left, Side::Right] {
                if self.rng.gen_bool(self.config.hand_dropout_prob) {
                    drop_hand(&mut frame, side);
                }
            }
            rest.push(frame);
        }

        Sequence::with_anchor(anchor, rest)
    }

    /// `count` independent recordings
    pub fn batch(&mut self, count: usize) -> Vec<Sequence> {
        (0..count).map(|_| self.sequence()).collect()
    }

    fn pose_at(&self, time: f64, phases: &[f64], offset: Point3) -> Frame {
        let mut frame = Frame::zeroed();
        for (landmark, phase) in Landmark::all().zip(phases) {
            let rest = self.rest.get(landmark);
            let sway = self.config.sway;
            frame.set(
                landmark,
                Point3::new(
                    rest.x + offset.x + sway * (time + phase).sin(),
                    rest.y + offset.y + sway * (time * 0.8 + phase).cos(),
                    rest.z,
                ),
            );
        }
        frame
    }
}

fn drop_hand(frame: &mut Frame, side: Side) {
    let part = side.hand();
    for i in 0..part.point_count() {
        *frame.at_mut(part.offset() + i) = Point3::zero();
    }
}
