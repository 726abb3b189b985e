//! Batch augmentation
//!
//! Turns recordings into synthetic actors. Every (sequence, copy) pair gets
//! its own session with a seed derived from the batch seed, so a batch is
//! reproducible and can be split across workers in any order.
//!
//! A recording that cannot be used is skipped and logged; the batch goes on.

use mimic_core::{MimicError, MimicResult, RawFrame, Sequence};

use crate::{SynthConfig, SynthSession, Synthesis};

/// Derive an independent stream seed from a base seed and a stream index.
///
/// Hashes `base ‖ index` (little-endian) with BLAKE3 and keeps the first
/// 8 bytes.
pub fn derive_seed(base: u64, index: u64) -> u64 {
    let mut input = Vec::with_capacity(16);
    input.extend_from_slice(&base.to_le_bytes());
    input.extend_from_slice(&index.to_le_bytes());

    let hash = blake3::hash(&input);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// (source index, synthetic actors for that source)
    pub synthesized: Vec<(usize, Vec<Synthesis>)>,
    /// (source index, reason it was skipped)
    pub failures: Vec<(usize, MimicError)>,
}

impl BatchReport {
    pub fn sequences_synthesized(&self) -> usize {
        self.synthesized.iter().map(|(_, s)| s.len()).sum()
    }

    pub fn degenerate_bone_count(&self) -> usize {
        self.synthesized
            .iter()
            .flat_map(|(_, s)| s.iter())
            .map(|s| s.degenerate_bones.len())
            .sum()
    }
}

/// Seeded augmentation driver
#[derive(Debug, Clone)]
pub struct Augmenter {
    config: SynthConfig,
    base_seed: u64,
    copies: usize,
    hands_only: bool,
}

impl Augmenter {
    pub fn new(config: SynthConfig, base_seed: u64) -> MimicResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            base_seed,
            copies: 1,
            hands_only: false,
        })
    }

    /// Synthetic actors produced per recording
    pub fn with_copies(mut self, copies: usize) -> Self {
        self.copies = copies;
        self
    }

    /// Drop frames without any detected hand before synthesis
    pub fn with_hands_only(mut self, hands_only: bool) -> Self {
        self.hands_only = hands_only;
        self
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Seed of copy `copy` of recording `index`
    pub fn seed_for(&self, index: u64, copy: u64) -> u64 {
        derive_seed(derive_seed(self.base_seed, index), copy)
    }

    /// One synthetic actor for recording `index`
    pub fn augment(&self, index: u64, real: &Sequence) -> MimicResult<Synthesis> {
        let session = SynthSession::new(self.config.clone(), self.seed_for(index, 0))?;
        Ok(session.synthesize(real))
    }

    /// `copies` independent synthetic actors for recording `index`
    pub fn augment_copies(
        &self,
        index: u64,
        real: &Sequence,
        copies: usize,
    ) -> MimicResult<Vec<Synthesis>> {
        (0..copies as u64)
            .map(|copy| {
                let session = SynthSession::new(self.config.clone(), self.seed_for(index, copy))?;
                Ok(session.synthesize(real))
            })
            .collect()
    }

    /// Augment a batch of raw extractor outputs, skipping unusable ones
    pub fn augment_all(&self, batch: &[Vec<RawFrame>]) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, raw) in batch.iter().enumerate() {
            match self.prepare(raw).and_then(|real| {
                self.augment_copies(index as u64, &real, self.copies)
            }) {
                Ok(actors) => report.synthesized.push((index, actors)),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping recording");
                    report.failures.push((index, err));
                }
            }
        }

        tracing::info!(
            recordings = batch.len(),
            synthesized = report.sequences_synthesized(),
            skipped = report.failures.len(),
            degenerate_bones = report.degenerate_bone_count(),
            "batch augmented"
        );
        report
    }

    fn prepare(&self, raw: &[RawFrame]) -> MimicResult<Sequence> {
        let real = Sequence::from_raw(raw)?;
        if self.hands_only {
            real.retain_with_hands()
        } else {
            Ok(real)
        }
    }
}
