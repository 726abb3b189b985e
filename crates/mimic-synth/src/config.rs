//! Synthesis configuration

use rand::Rng;
use serde::{Deserialize, Serialize};

use mimic_core::{MimicError, MimicResult};
use mimic_skeleton::{BoneCategory, PalmTopology};

/// Synthesis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Face noise amplitude
    pub eps_eye: f64,
    /// Shoulder/elbow/hip/wrist noise amplitude
    pub eps_body: f64,
    /// Finger noise amplitude
    pub eps_finger: f64,
    /// Jitter applied to the root anchor of frame 0
    pub root_anchor_eps: f64,
    /// Range of the uniform bone scale drawn for frame 0
    pub frame0_scale_range: (f64, f64),
    /// Range of the global body distortion `k_body`
    pub k_body_range: (f64, f64),
    /// `k_finger = k_finger_multiplier * k_body`
    pub k_finger_multiplier: f64,
    /// Palm wiring of the hand chains
    pub palm: PalmTopology,
    /// Re-noise face and body landmarks when propagating frame t.
    /// Finger landmarks are always re-noised.
    pub renoise_body: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            eps_eye: 0.001,
            eps_body: 0.005,
            eps_finger: 0.003,
            root_anchor_eps: 0.01,
            frame0_scale_range: (0.8, 1.2),
            k_body_range: (0.85, 1.25),
            k_finger_multiplier: 0.9,
            palm: PalmTopology::WristFan,
            renoise_body: true,
        }
    }
}

impl SynthConfig {
    /// Default scales with every noise amplitude at zero
    pub fn noiseless() -> Self {
        SynthConfig {
            eps_eye: 0.0,
            eps_body: 0.0,
            eps_finger: 0.0,
            root_anchor_eps: 0.0,
            ..Self::default()
        }
    }

    /// No noise and unit scales: the synthetic actor reproduces the recording
    pub fn identity() -> Self {
        SynthConfig {
            frame0_scale_range: (1.0, 1.0),
            k_body_range: (1.0, 1.0),
            ..Self::noiseless()
        }
    }

    /// Noise amplitude for a bone category
    pub fn eps(&self, category: BoneCategory) -> f64 {
        match category {
            BoneCategory::Eye => self.eps_eye,
            BoneCategory::Body => self.eps_body,
            BoneCategory::Finger => self.eps_finger,
        }
    }

    /// Noise amplitude applied when emitting a propagated frame
    pub fn propagation_eps(&self, category: BoneCategory) -> f64 {
        match category {
            BoneCategory::Finger => self.eps_finger,
            other if self.renoise_body => self.eps(other),
            _ => 0.0,
        }
    }

    pub fn validate(&self) -> MimicResult<()> {
        check_eps("eps_eye", self.eps_eye)?;
        check_eps("eps_body", self.eps_body)?;
        check_eps("eps_finger", self.eps_finger)?;
        check_eps("root_anchor_eps", self.root_anchor_eps)?;
        check_range("frame0_scale_range", self.frame0_scale_range)?;
        check_range("k_body_range", self.k_body_range)?;
        if !(self.k_finger_multiplier > 0.0 && self.k_finger_multiplier <= MAX_SCALE) {
            return Err(MimicError::InvalidConfig(format!(
                "k_finger_multiplier must be within (0, {MAX_SCALE}], got {}",
                self.k_finger_multiplier
            )));
        }
        Ok(())
    }
}

/// Largest accepted noise amplitude, in normalized image units
pub const MAX_EPS: f64 = 1.0;

/// Largest accepted upper bound of a scale range
pub const MAX_SCALE: f64 = 10.0;

fn check_eps(name: &str, eps: f64) -> MimicResult<()> {
    if (0.0..=MAX_EPS).contains(&eps) {
        Ok(())
    } else {
        Err(MimicError::InvalidConfig(format!(
            "{name} must be within [0, {MAX_EPS}], got {eps}"
        )))
    }
}

fn check_range(name: &str, (low, high): (f64, f64)) -> MimicResult<()> {
    if low >= 0.0 && low <= high && high <= MAX_SCALE {
        Ok(())
    } else {
        Err(MimicError::InvalidConfig(format!(
            "{name} must satisfy 0 <= low <= high <= {MAX_SCALE}, got ({low}, {high})"
        )))
    }
}

/// Uniform draw from a validated inclusive range. A collapsed range returns
/// its bound without consuming randomness.
pub fn sample_range<R: Rng + ?Sized>((low, high): (f64, f64), rng: &mut R) -> f64 {
    if low >= high {
        return low;
    }
    rng.gen_range(low..=high)
}
