//! Global distortion coefficients of one synthetic actor

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{sample_range, SynthConfig};

/// Torso and finger scale of the synthetic actor relative to the recorded
/// one. Drawn once per sequence run and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distortion {
    pub k_body: f64,
    pub k_finger: f64,
}

impl Distortion {
    /// Draw `k_body` from the configured range and derive `k_finger`
    pub fn sample<R: Rng + ?Sized>(config: &SynthConfig, rng: &mut R) -> Self {
        let k_body = sample_range(config.k_body_range, rng);
        Self::fixed(k_body, config.k_finger_multiplier)
    }

    pub fn fixed(k_body: f64, finger_multiplier: f64) -> Self {
        Self {
            k_body,
            k_finger: finger_multiplier * k_body,
        }
    }

    pub fn identity() -> Self {
        Self {
            k_body: 1.0,
            k_finger: 1.0,
        }
    }
}
