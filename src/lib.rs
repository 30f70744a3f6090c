#![no_std]

pub mod cube;
pub mod diagnostics;
pub mod frame;
pub mod frame_buffer;
pub mod geometry;
pub mod patterns;
pub mod random;

pub use cube::{Cube3, Cube4, Cube8, CubeConfig, CubeTimings, LedCube};
pub use diagnostics::{Pattern, Rejection, RejectionChannel, RejectionHook};
pub use frame::{Frame, FrameError, FrameQueue};
pub use frame_buffer::FrameBuffer;
pub use geometry::{Cell, ConfigError, CubeGeometry, MAX_LEVELS};
pub use random::{EntropySource, seeded_rng};

pub use embassy_time::Duration;

/// Electrical level of a drive line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value { Self::High } else { Self::Low }
    }
}

/// Abstract cube driver trait
///
/// Implement this trait to support different hardware platforms.
/// The cube is generic over this trait.
pub trait CubeDriver {
    /// Pin identifier
    type Pin: Copy;

    /// Configure a pin as output
    fn set_output(&mut self, pin: Self::Pin);

    /// Drive a pin to `level`
    fn write(&mut self, pin: Self::Pin, level: PinLevel);

    /// Block for `duration`
    fn delay(&mut self, duration: Duration);
}
