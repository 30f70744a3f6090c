//! Pre-built animation frames
//!
//! A [`Frame`] owns a copy of its sequence, so it can be authored once and
//! replayed any number of times. A [`FrameQueue`] owns a run of frames and
//! releases each one as soon as it has been played.

use core::fmt;

use embassy_time::Duration;
use heapless::{Deque, Vec};

use crate::geometry::Cell;

/// Errors raised while building a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Flat sequence with a dangling level byte
    OddLength(usize),
    /// Sequence has more pairs than the frame can hold
    Capacity { pairs: usize, capacity: usize },
    /// Frame queue has no free slot
    QueueFull,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLength(len) => write!(f, "flat sequence of odd length {len}"),
            Self::Capacity { pairs, capacity } => {
                write!(f, "{pairs} pairs do not fit a frame of {capacity}")
            }
            Self::QueueFull => f.write_str("frame queue is full"),
        }
    }
}

impl core::error::Error for FrameError {}

/// Owned, replayable sequence with its playback delay
///
/// N is the maximum number of pairs in the frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<const N: usize> {
    sequence: Vec<Cell, N>,
    delay: Duration,
}

impl<const N: usize> Frame<N> {
    /// Copy `sequence` into a new frame
    pub fn new(sequence: &[Cell], delay: Duration) -> Result<Self, FrameError> {
        let sequence = Vec::from_slice(sequence).map_err(|()| FrameError::Capacity {
            pairs: sequence.len(),
            capacity: N,
        })?;
        Ok(Self { sequence, delay })
    }

    /// Build a frame from an interleaved `level, col, level, col, ...` list
    pub fn from_raw(raw: &[u8], delay: Duration) -> Result<Self, FrameError> {
        if !raw.len().is_multiple_of(2) {
            return Err(FrameError::OddLength(raw.len()));
        }
        let pairs = raw.len() / 2;
        if pairs > N {
            return Err(FrameError::Capacity { pairs, capacity: N });
        }

        let sequence = raw
            .chunks_exact(2)
            .map(|pair| Cell::new(pair[0], pair[1]))
            .collect::<Vec<_, N>>();
        Ok(Self { sequence, delay })
    }

    /// Pairs to replay
    pub fn sequence(&self) -> &[Cell] {
        &self.sequence
    }

    /// Number of pairs in the frame
    pub fn size(&self) -> usize {
        self.sequence.len()
    }

    /// Gap between pulses when the frame is played
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

/// Queue of frames waiting to be played
///
/// FRAMES is the number of frames to store, N the pairs per frame
#[derive(Debug, Default)]
pub struct FrameQueue<const FRAMES: usize, const N: usize> {
    inner: Deque<Frame<N>, FRAMES>,
}

impl<const FRAMES: usize, const N: usize> FrameQueue<FRAMES, N> {
    pub const fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Append a frame
    ///
    /// Returns the frame if the queue is full
    pub fn push(&mut self, frame: Frame<N>) -> Result<(), Frame<N>> {
        self.inner.push_back(frame)
    }

    /// Build a frame from `sequence` and append it
    pub fn push_sequence(&mut self, sequence: &[Cell], delay: Duration) -> Result<(), FrameError> {
        let frame = Frame::new(sequence, delay)?;
        self.push(frame).map_err(|_| FrameError::QueueFull)
    }

    /// Take the next frame, handing its ownership to the caller
    pub fn pop(&mut self) -> Option<Frame<N>> {
        self.inner.pop_front()
    }

    /// Drop every queued frame
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
