//! Random cell selection
//!
//! The cube draws from an injected [`RngCore`], so random patterns are
//! reproducible from a fixed seed.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::geometry::{Cell, CubeGeometry};

/// Source of seed entropy, usually a floating analog input
pub trait EntropySource {
    /// Sample the source once
    fn sample(&mut self) -> u16;
}

/// Seed a small generator from one entropy sample
pub fn seeded_rng(source: &mut impl EntropySource) -> SmallRng {
    SmallRng::seed_from_u64(u64::from(source.sample()))
}

/// Uniformly random in-bounds cell
pub fn random_cell<R: RngCore>(rng: &mut R, geometry: CubeGeometry) -> Cell {
    Cell::new(
        rng.gen_range(0..geometry.levels()),
        rng.gen_range(0..geometry.cols()),
    )
}

/// Uniformly random 1-based column selector
pub fn random_column<R: RngCore>(rng: &mut R, geometry: CubeGeometry) -> u8 {
    rng.gen_range(1..=geometry.cols())
}
