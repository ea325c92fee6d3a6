//! The game field: a fixed array of packed cells
mod cell;

use std::fmt::{self, Display};

use crate::dimensions::Dimensions;
use crate::geometry::Point;
use crate::types::CellKind;

pub use cell::Cell;

/// Grid of cells, stored column-major so that iterating the backing array walks the
/// outer loop over `x` and the inner loop over `y`.
///
/// `BOARD_SIZE` must equal `width * height` of `D`, [Field::new] panics otherwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Field<D: Dimensions, const BOARD_SIZE: usize> {
    cells: [Cell; BOARD_SIZE],
    dimensions: D,
}

impl<D: Dimensions, const BOARD_SIZE: usize> Default for Field<D, BOARD_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> Field<D, BOARD_SIZE> {
    /// an all-empty field
    pub fn new() -> Self {
        let dimensions = D::default();
        assert_eq!(
            dimensions.cell_count(),
            BOARD_SIZE,
            "BOARD_SIZE must match the dimensions"
        );
        Field {
            cells: [Cell::empty(); BOARD_SIZE],
            dimensions,
        }
    }

    #[allow(missing_docs)]
    pub fn dimensions(&self) -> &D {
        &self.dimensions
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> u8 {
        self.dimensions.width()
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> u8 {
        self.dimensions.height()
    }

    /// resets every cell to empty
    pub fn clear(&mut self) {
        self.cells = [Cell::empty(); BOARD_SIZE];
    }

    /// the cell at `point`
    pub fn get(&self, point: Point) -> Cell {
        debug_assert!(point.on_board(&self.dimensions), "{} is off the board", point);
        self.cells[point.as_index(&self.dimensions)]
    }

    /// overwrites the cell at `point`
    pub fn set(&mut self, point: Point, cell: Cell) {
        debug_assert!(point.on_board(&self.dimensions), "{} is off the board", point);
        self.cells[point.as_index(&self.dimensions)] = cell;
    }

    #[allow(missing_docs)]
    pub fn kind_at(&self, point: Point) -> CellKind {
        self.get(point).kind()
    }

    /// every cell with its position, in column-major scan order
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let dimensions = self.dimensions;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Point::from_index(i, &dimensions), *c))
    }

    /// positions of every cell of `kind`, in scan order
    pub fn points_of_kind(&self, kind: CellKind) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter(move |(_, c)| c.is_kind(kind))
            .map(|(p, _)| p)
    }

    /// number of cells of `kind`
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.is_kind(kind)).count()
    }

    /// fills the full column `x` with `cell`
    pub fn fill_column(&mut self, x: u8, cell: Cell) {
        for y in 0..self.height() {
            self.set(Point::new(x, y), cell);
        }
    }

    /// fills the full row `y` with `cell`
    pub fn fill_row(&mut self, y: u8, cell: Cell) {
        for x in 0..self.width() {
            self.set(Point::new(x, y), cell);
        }
    }

    pub(crate) fn fmt_with_head(
        &self,
        f: &mut fmt::Formatter<'_>,
        head: Option<Point>,
    ) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let point = Point::new(x, y);
                let c = match self.kind_at(point) {
                    CellKind::Snake if Some(point) == head => 'H',
                    CellKind::Snake => 's',
                    CellKind::Food => 'f',
                    CellKind::Block => '#',
                    CellKind::Empty => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> Display for Field<D, BOARD_SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_head(f, None)
    }
}
