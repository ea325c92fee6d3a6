use std::convert::TryFrom;
use std::error::Error;

use crate::types::{CellKind, Direction};

const KIND_MASK: u8 = 0x03;
const NEXT_SHIFT: u8 = 2;
const NEXT_MASK: u8 = 0x03 << NEXT_SHIFT;
const UNUSED_MASK: u8 = 0xf0;

/// A single field cell packed in to one byte.
///
/// * bits 0-1: the [CellKind]
/// * bits 2-3: for snake cells, the [Direction] the body at this cell moves next. On the
///   head cell this is the steering direction for the coming step.
/// * bits 4-7: always zero
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Cell(u8);

impl Cell {
    #[allow(missing_docs)]
    pub const fn empty() -> Self {
        Cell(CellKind::Empty as u8)
    }

    /// a snake cell whose successor lies in `next`
    pub const fn snake(next: Direction) -> Self {
        Cell(CellKind::Snake as u8 | ((next as u8) << NEXT_SHIFT))
    }

    #[allow(missing_docs)]
    pub const fn food() -> Self {
        Cell(CellKind::Food as u8)
    }

    #[allow(missing_docs)]
    pub const fn block() -> Self {
        Cell(CellKind::Block as u8)
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> CellKind {
        match self.0 & KIND_MASK {
            0 => CellKind::Empty,
            1 => CellKind::Snake,
            2 => CellKind::Food,
            _ => CellKind::Block,
        }
    }

    #[allow(missing_docs)]
    pub fn is_kind(&self, kind: CellKind) -> bool {
        self.kind() == kind
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.is_kind(CellKind::Empty)
    }

    #[allow(missing_docs)]
    pub fn is_snake(&self) -> bool {
        self.is_kind(CellKind::Snake)
    }

    #[allow(missing_docs)]
    pub fn is_food(&self) -> bool {
        self.is_kind(CellKind::Food)
    }

    #[allow(missing_docs)]
    pub fn is_block(&self) -> bool {
        self.is_kind(CellKind::Block)
    }

    /// the successor direction, only snake cells have one
    pub fn snake_next(&self) -> Option<Direction> {
        if self.is_snake() {
            Some(Direction::from_bits((self.0 & NEXT_MASK) >> NEXT_SHIFT))
        } else {
            None
        }
    }

    /// copy of this snake cell pointing at `next` instead
    pub fn with_snake_next(self, next: Direction) -> Self {
        debug_assert!(self.is_snake(), "only snake cells carry a direction");
        Cell((self.0 & !NEXT_MASK) | ((next as u8) << NEXT_SHIFT))
    }

    /// the packed byte
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Cell {
    type Error = Box<dyn Error>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value & UNUSED_MASK != 0 {
            return Err(format!("cell byte {:#04x} uses reserved bits", value).into());
        }
        let cell = Cell(value);
        if !cell.is_snake() && value & NEXT_MASK != 0 {
            return Err(format!(
                "cell byte {:#04x} carries a direction on a {:?} cell",
                value,
                cell.kind()
            )
            .into());
        }
        Ok(cell)
    }
}
