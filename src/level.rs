//! Level generation: border obstacles, the starting snake and food placement.
//!
//! Every random draw comes from a caller supplied [rand::Rng], nothing here seeds its own
//! generator.
use itertools::Itertools;
use rand::Rng;
use serde::Serialize;
use tracing::warn;

use crate::dimensions::Dimensions;
use crate::field::{Cell, Field};
use crate::geometry::Point;
use crate::snake::Snake;
use crate::types::{CellKind, Direction};

/// Chance that a level has any border walls at all
pub const OBSTACLE_PROBABILITY: f64 = 0.5;

/// Chance, once a level has obstacles, that each single border is walled
pub const BORDER_PROBABILITY: f64 = 0.5;

/// One edge of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Border {
    /// the first column
    Left,
    /// the last column
    Right,
    /// the first row
    Top,
    /// the last row
    Bottom,
}

impl Border {
    /// all borders in the order they are rolled for
    pub fn all() -> [Border; 4] {
        [Border::Left, Border::Right, Border::Top, Border::Bottom]
    }

    /// fills this border of the field with blocks
    pub fn build<D: Dimensions, const BOARD_SIZE: usize>(&self, field: &mut Field<D, BOARD_SIZE>) {
        match self {
            Border::Left => field.fill_column(0, Cell::block()),
            Border::Right => field.fill_column(field.width() - 1, Cell::block()),
            Border::Top => field.fill_row(0, Cell::block()),
            Border::Bottom => field.fill_row(field.height() - 1, Cell::block()),
        }
    }
}

/// Rolls border walls for a level and builds them, returning the borders that were built.
/// Half of all levels have no walls; otherwise each border is rolled for on its own, so a
/// level may end up with none, some or all four. Whether the result is playable is not
/// checked.
pub fn generate_blocks<D: Dimensions, const BOARD_SIZE: usize>(
    field: &mut Field<D, BOARD_SIZE>,
    rng: &mut impl Rng,
) -> Vec<Border> {
    if !rng.gen_bool(OBSTACLE_PROBABILITY) {
        return Vec::new();
    }

    let borders = Border::all()
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(BORDER_PROBABILITY))
        .collect_vec();
    for border in &borders {
        border.build(field);
    }
    borders
}

/// Places the starting two cell snake in the middle of the field, heading right.
pub fn seed_snake<D: Dimensions, const BOARD_SIZE: usize>(
    field: &mut Field<D, BOARD_SIZE>,
) -> Snake {
    let head = Point::new(field.width() / 2, field.height() / 2);
    let tail = Point::new(field.width() / 2 - 1, field.height() / 2);

    field.set(head, Cell::snake(Direction::Right));
    field.set(tail, Cell::snake(Direction::Right));

    Snake::new(head, tail)
}

/// Drops one food on a cell chosen uniformly among the empty cells.
///
/// The k-th empty cell is found by scanning columns left to right and each column top to
/// bottom. Snake and block cells are never counted, so food can only land on an empty
/// cell. Returns `None` if the field has no empty cell left.
pub fn generate_food<D: Dimensions, const BOARD_SIZE: usize>(
    field: &mut Field<D, BOARD_SIZE>,
    rng: &mut impl Rng,
) -> Option<Point> {
    let empty = field.count_kind(CellKind::Empty);
    if empty == 0 {
        warn!("no empty cell left for food");
        return None;
    }

    let k = rng.gen_range(0..empty);
    let point = field.points_of_kind(CellKind::Empty).nth(k)?;
    field.set(point, Cell::food());
    Some(point)
}
