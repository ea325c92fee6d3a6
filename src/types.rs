//! various types that are useful for working with the snake rule engine
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use crate::geometry::Point;

/// Represents a steering direction. The discriminants are the values hosts send as key
/// codes and the values stored in the direction bits of a snake cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    #[allow(missing_docs)]
    Left = 0,
    #[allow(missing_docs)]
    Right = 1,
    #[allow(missing_docs)]
    Up = 2,
    #[allow(missing_docs)]
    Down = 3,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl Direction {
    /// returns all four directions in index order
    pub fn all() -> [Direction; 4] {
        [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ]
    }

    /// the direction pointing the other way, `d.opposite().opposite() == d`
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// checks if a given direction is not opposite this one. e.g. Up is not opposite to Left,
    /// but is opposite to Down
    pub fn is_not_opposite(&self, other: &Direction) -> bool {
        self.opposite() != *other
    }

    /// converts this direction to its index, the same order as `Direction::all()`
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    /// decodes the two low bits of `bits`, higher bits are ignored
    pub(crate) fn from_bits(bits: u8) -> Direction {
        match bits & 0x03 {
            0 => Direction::Left,
            1 => Direction::Right,
            2 => Direction::Up,
            _ => Direction::Down,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = Box<dyn Error>;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if code > 3 {
            return Err(format!("{} is not a direction code, expected 0..=3", code).into());
        }
        Ok(Direction::from_bits(code))
    }
}

/// The result of a single game step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepResult {
    /// the snake moved or grew, the level goes on
    Success,
    /// the snake collided, the level is over
    Fail,
}

impl StepResult {
    /// true for `StepResult::Success`
    pub fn is_success(&self) -> bool {
        matches!(self, StepResult::Success)
    }
}

/// A game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> u32;
    #[allow(missing_docs)]
    fn get_height(&self) -> u32;
}

/// The kinds of cell a renderer needs to tell apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellKind {
    #[allow(missing_docs)]
    Empty = 0,
    #[allow(missing_docs)]
    Snake = 1,
    #[allow(missing_docs)]
    Food = 2,
    /// impassable obstacle
    Block = 3,
}

/// A game where the kind of every cell can be queried, this is all a renderer needs
pub trait CellKindQueryableGame: SizeDeterminableGame {
    /// the kind of the cell at `point`
    fn cell_kind(&self, point: Point) -> CellKind;
}

/// A game for which the length of the snake can be got.
pub trait LengthGettableGame {
    /// the length type for this game
    type LengthType: Ord + PartialOrd;

    /// get the number of cells the snake occupies
    fn get_length(&self) -> Self::LengthType;
}

/// A game for which the food on the board can be queried
pub trait FoodGettableGame {
    /// every food cell on the board, in scan order
    fn get_all_food(&self) -> Vec<Point>;
}

/// A game for which the empty cells can be listed
pub trait EmptyCellGettableGame {
    /// iterator over all empty cells, in scan order
    fn get_empty_cells(&self) -> Box<dyn Iterator<Item = Point> + '_>;
}

/// A game that can drop a new piece of food somewhere empty
pub trait FoodPlaceableGame {
    /// places one food uniformly among the empty cells, returning where it went. Returns
    /// `None` when there is no empty cell left.
    fn place_food(&mut self, rng: &mut impl rand::Rng) -> Option<Point>;
}
