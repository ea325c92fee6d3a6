//! Board dimensions are fixed at compile time.
//!
//! The [Dimensions] trait lets the field, the level generator and the step engine stay
//! generic over the board size, while [Standard] is the 32x8 board the game ships with.
//! Tests use smaller [Fixed] boards to reach edge cases like a completely full field.

use core::fmt::Debug;
use std::hash::Hash;

/// Trait that all different Dimensions must implement
pub trait Dimensions: Debug + Copy + Hash + Default {
    /// Get the width of this dimension
    fn width(&self) -> u8;

    /// Get the height of this dimension
    fn height(&self) -> u8;

    /// number of cells on a board of this size
    fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// A fixed size board
pub struct Fixed<const W: u8, const H: u8>;

impl<const W: u8, const H: u8> Dimensions for Fixed<W, H> {
    fn width(&self) -> u8 {
        W
    }

    fn height(&self) -> u8 {
        H
    }
}

/// Width of the standard game field
pub const FIELD_WIDTH: u8 = 32;

/// Height of the standard game field
pub const FIELD_HEIGHT: u8 = 8;

/// Number of cells on the standard game field
pub const FIELD_SIZE: usize = FIELD_WIDTH as usize * FIELD_HEIGHT as usize;

/// Alias for a [Fixed] board at the standard game size
pub type Standard = Fixed<FIELD_WIDTH, FIELD_HEIGHT>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_size() {
        let d = Standard::default();
        assert_eq!(d.width(), 32);
        assert_eq!(d.height(), 8);
        assert_eq!(d.cell_count(), FIELD_SIZE);
    }
}
