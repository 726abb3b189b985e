//! Sequence - ordered frames of one recording
//!
//! Frame 0 is the temporal anchor every later frame is measured against, so a
//! sequence is never empty.

use serde::{Deserialize, Serialize};

use crate::{Frame, MimicError, MimicResult};

/// Raw extractor output for one frame: left hand, right hand, pose
pub type RawFrame = [Vec<[f64; 3]>; 3];

/// Non-empty ordered list of frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Frame>", into = "Vec<Frame>")]
pub struct Sequence {
    frames: Vec<Frame>,
}

impl Sequence {
    pub fn new(frames: Vec<Frame>) -> MimicResult<Self> {
        if frames.is_empty() {
            return Err(MimicError::EmptySequence);
        }
        Ok(Self { frames })
    }

    /// Single-frame sequence
    pub fn single(frame: Frame) -> Self {
        Self {
            frames: vec![frame],
        }
    }

    /// Anchor frame followed by the remaining frames
    pub fn with_anchor(anchor: Frame, rest: impl IntoIterator<Item = Frame>) -> Self {
        let mut frames = vec![anchor];
        frames.extend(rest);
        Self { frames }
    }

    /// Build from raw extractor output, checking every frame's shape
    pub fn from_raw(raw: &[RawFrame]) -> MimicResult<Self> {
        let frames = raw
            .iter()
            .map(|[left, right, pose]| Frame::from_landmarks(left, right, pose))
            .collect::<MimicResult<Vec<_>>>()?;
        Self::new(frames)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The anchor frame
    pub fn first(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn get(&self, index: usize) -> MimicResult<&Frame> {
        self.frames.get(index).ok_or(MimicError::FrameOutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Drop frames where neither hand was detected
    pub fn retain_with_hands(&self) -> MimicResult<Self> {
        let frames = self
            .frames
            .iter()
            .filter(|f| f.has_hands())
            .cloned()
            .collect();
        Self::new(frames)
    }
}

impl TryFrom<Vec<Frame>> for Sequence {
    type Error = MimicError;

    fn try_from(frames: Vec<Frame>) -> MimicResult<Self> {
        Self::new(frames)
    }
}

impl From<Sequence> for Vec<Frame> {
    fn from(seq: Sequence) -> Self {
        seq.frames
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
