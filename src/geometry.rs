//! Points on the toroidal field and neighbor arithmetic
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dimensions::Dimensions;
use crate::types::Direction;

/// A cell coordinate. `x` is bounded by the board width and `y` by the board height;
/// `y == 0` is the top row, so moving Up decreases `y`.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Point {
    #[allow(missing_docs)]
    pub x: u8,
    #[allow(missing_docs)]
    pub y: u8,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    #[allow(missing_docs)]
    pub const fn new(x: u8, y: u8) -> Self {
        Point { x, y }
    }

    /// Returns the neighbor in `direction`, wrapping around both axes.
    pub fn in_direction<D: Dimensions>(self, direction: Direction, dimensions: &D) -> Point {
        let width = dimensions.width();
        let height = dimensions.height();
        debug_assert!(self.on_board(dimensions), "{} is off the board", self);

        match direction {
            Direction::Left => Point::new(wrapping_dec(self.x, width), self.y),
            Direction::Right => Point::new(wrapping_inc(self.x, width), self.y),
            Direction::Up => Point::new(self.x, wrapping_dec(self.y, height)),
            Direction::Down => Point::new(self.x, wrapping_inc(self.y, height)),
        }
    }

    /// determines if this point lies within the given dimensions
    pub fn on_board<D: Dimensions>(&self, dimensions: &D) -> bool {
        self.x < dimensions.width() && self.y < dimensions.height()
    }

    /// Index of this point in a column-major cell array. Scanning indices in order visits
    /// every column top to bottom, left to right.
    pub fn as_index<D: Dimensions>(&self, dimensions: &D) -> usize {
        self.x as usize * dimensions.height() as usize + self.y as usize
    }

    /// Inverse of [Point::as_index]
    pub fn from_index<D: Dimensions>(index: usize, dimensions: &D) -> Point {
        let height = dimensions.height() as usize;
        Point::new((index / height) as u8, (index % height) as u8)
    }
}

fn wrapping_inc(value: u8, max: u8) -> u8 {
    ((value as u16 + 1) % max as u16) as u8
}

fn wrapping_dec(value: u8, max: u8) -> u8 {
    ((value as u16 + max as u16 - 1) % max as u16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{Fixed, Standard};

    #[test]
    fn test_wraps_on_every_edge() {
        let d = Standard::default();
        assert_eq!(Point::new(0, 3).in_direction(Direction::Left, &d), Point::new(31, 3));
        assert_eq!(Point::new(31, 3).in_direction(Direction::Right, &d), Point::new(0, 3));
        assert_eq!(Point::new(5, 0).in_direction(Direction::Up, &d), Point::new(5, 7));
        assert_eq!(Point::new(5, 7).in_direction(Direction::Down, &d), Point::new(5, 0));
        assert_eq!(Point::new(5, 5).in_direction(Direction::Up, &d), Point::new(5, 4));
        assert_eq!(Point::new(5, 5).in_direction(Direction::Right, &d), Point::new(6, 5));
    }

    #[test]
    fn test_reverse_returns_to_origin() {
        let d = Standard::default();
        for x in 0..32 {
            for y in 0..8 {
                let p = Point::new(x, y);
                for dir in Direction::all() {
                    let there = p.in_direction(dir, &d);
                    assert!(there.on_board(&d));
                    assert_ne!(there, p);
                    assert_eq!(there.in_direction(dir.opposite(), &d), p);
                }
            }
        }
    }

    #[test]
    fn test_full_lap_on_small_board() {
        let d = Fixed::<3, 2>;
        let mut p = Point::new(1, 1);
        for _ in 0..3 {
            p = p.in_direction(Direction::Left, &d);
        }
        assert_eq!(p, Point::new(1, 1));
        p = p.in_direction(Direction::Down, &d);
        assert_eq!(p, Point::new(1, 0));
    }

    #[test]
    fn test_index_is_column_major() {
        let d = Standard::default();
        assert_eq!(Point::new(0, 0).as_index(&d), 0);
        assert_eq!(Point::new(0, 7).as_index(&d), 7);
        assert_eq!(Point::new(1, 0).as_index(&d), 8);
        for i in 0..d.cell_count() {
            assert_eq!(Point::from_index(i, &d).as_index(&d), i);
        }
    }
}
