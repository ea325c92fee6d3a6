//! The game aggregate and the per-tick step engine
use std::fmt::{self, Display};

use rand::Rng;
use tracing::{debug, instrument, trace};

use crate::dimensions::{Dimensions, Standard, FIELD_SIZE};
use crate::field::Field;
use crate::geometry::Point;
use crate::level::{self, Border};
use crate::snake::Snake;
use crate::types::{
    CellKind, CellKindQueryableGame, Direction, EmptyCellGettableGame, FoodGettableGame,
    FoodPlaceableGame, LengthGettableGame, SizeDeterminableGame, StepResult,
};

/// Everything the rules need to know about one game: the field, the two ends of the snake,
/// the score and where food was last dropped.
///
/// As with [Field], `BOARD_SIZE` must equal `width * height` of `D`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Game<D: Dimensions, const BOARD_SIZE: usize> {
    field: Field<D, BOARD_SIZE>,
    snake: Snake,
    food: Option<Point>,
    score: u16,
}

/// A game on the standard 32x8 field
pub type StandardGame = Game<Standard, FIELD_SIZE>;

impl<D: Dimensions, const BOARD_SIZE: usize> Default for Game<D, BOARD_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> Game<D, BOARD_SIZE> {
    /// A zeroed game: empty field, no food, score 0. Call [Game::prepare_level] before
    /// stepping.
    pub fn new() -> Self {
        Game {
            field: Field::new(),
            snake: Snake::default(),
            food: None,
            score: 0,
        }
    }

    /// Zeroes all state, same as replacing the game with [Game::new].
    pub fn init(&mut self) {
        *self = Self::new();
    }

    /// Starts a new level: clears the field, rolls border walls, seeds the two cell snake
    /// in the middle, drops one food and resets the score. Returns the borders built.
    pub fn prepare_level(&mut self, rng: &mut impl Rng) -> Vec<Border> {
        self.field.clear();
        let borders = level::generate_blocks(&mut self.field, rng);
        self.snake = level::seed_snake(&mut self.field);
        self.food = level::generate_food(&mut self.field, rng);
        self.score = 0;
        debug!(?borders, food = ?self.food, "prepared level");
        borders
    }

    /// Advances the game by one tick.
    ///
    /// The head first takes `input` as its new direction unless that would reverse it in
    /// to its own body. The cell ahead must then be empty, food, or the current tail;
    /// anything else is a collision and the step fails without touching the field any
    /// further. Eating grows the snake by one, bumps the score and drops new food;
    /// otherwise the tail follows the head.
    #[instrument(level = "trace", skip_all, fields(input = %input))]
    pub fn step(&mut self, input: Direction, rng: &mut impl Rng) -> StepResult {
        let direction = match self.snake.steer(&mut self.field, input) {
            Some(d) => d,
            None => {
                debug!(head = %self.snake.head(), "no snake on the field");
                return StepResult::Fail;
            }
        };

        let target = self
            .snake
            .head()
            .in_direction(direction, self.field.dimensions());

        if !self.snake.can_enter(&self.field, target) {
            debug!(
                %target,
                kind = ?self.field.kind_at(target),
                score = self.score,
                "collision"
            );
            return StepResult::Fail;
        }

        if self.field.get(target).is_food() {
            self.score += 1;
            self.snake.grow(&mut self.field, target, direction);
            self.food = self.place_food(rng);
            trace!(score = self.score, food = ?self.food, "ate");
        } else {
            self.snake.advance(&mut self.field, target, direction);
        }

        debug_assert!(self.assert_consistency(), "inconsistent step: {}", self);
        StepResult::Success
    }

    #[allow(missing_docs)]
    pub fn field(&self) -> &Field<D, BOARD_SIZE> {
        &self.field
    }

    /// Direct access to the cells, e.g. to set up a scenario. The caller must keep the
    /// snake chain intact.
    pub fn field_mut(&mut self) -> &mut Field<D, BOARD_SIZE> {
        &mut self.field
    }

    #[allow(missing_docs)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[allow(missing_docs)]
    pub fn score(&self) -> u16 {
        self.score
    }

    /// where food was last dropped, `None` before the first level or when the field had no
    /// room left
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    /// the current steering direction of the head
    pub fn direction(&self) -> Option<Direction> {
        self.snake.direction(&self.field)
    }

    /// return a Vec of the positions for the snake body, in order from head to tail
    pub fn snake_body_vec(&self) -> Vec<Point> {
        self.snake.body_vec(&self.field)
    }

    /// Checks that the tail reaches the head through snake cells and returns false if the
    /// board is inconsistent
    pub fn assert_consistency(&self) -> bool {
        self.snake.is_consistent(&self.field)
    }

    /// Builds a game from a picture of the field, one line per row. `.` is empty, `#` a
    /// block, `f` food and `<`, `>`, `^`, `v` are snake cells pointing in that direction.
    #[cfg(test)]
    pub(crate) fn from_ascii(layout: &str, head: Point, tail: Point, score: u16) -> Self {
        use crate::field::Cell;

        let mut game = Self::new();
        let rows: Vec<&str> = layout
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(rows.len(), game.field.height() as usize);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), game.field.width() as usize);
            for (x, c) in row.chars().enumerate() {
                let cell = match c {
                    '.' => Cell::empty(),
                    '#' => Cell::block(),
                    'f' => Cell::food(),
                    '<' => Cell::snake(Direction::Left),
                    '>' => Cell::snake(Direction::Right),
                    '^' => Cell::snake(Direction::Up),
                    'v' => Cell::snake(Direction::Down),
                    other => panic!("unknown cell {:?}", other),
                };
                let point = Point::new(x as u8, y as u8);
                if cell.is_food() {
                    game.food = Some(point);
                }
                game.field.set(point, cell);
            }
        }
        game.snake = Snake::new(head, tail);
        game.score = score;
        assert!(game.assert_consistency(), "fixture is inconsistent");
        game
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> Display for Game<D, BOARD_SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        self.field.fmt_with_head(f, Some(self.snake.head()))?;
        writeln!(
            f,
            "score: {} head: {} tail: {}",
            self.score,
            self.snake.head(),
            self.snake.tail()
        )
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> SizeDeterminableGame for Game<D, BOARD_SIZE> {
    fn get_width(&self) -> u32 {
        self.field.width() as u32
    }

    fn get_height(&self) -> u32 {
        self.field.height() as u32
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> CellKindQueryableGame for Game<D, BOARD_SIZE> {
    fn cell_kind(&self, point: Point) -> CellKind {
        self.field.kind_at(point)
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> LengthGettableGame for Game<D, BOARD_SIZE> {
    type LengthType = u16;

    fn get_length(&self) -> Self::LengthType {
        self.snake.len(&self.field) as u16
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> FoodGettableGame for Game<D, BOARD_SIZE> {
    fn get_all_food(&self) -> Vec<Point> {
        self.field.points_of_kind(CellKind::Food).collect()
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> EmptyCellGettableGame for Game<D, BOARD_SIZE> {
    fn get_empty_cells(&self) -> Box<dyn Iterator<Item = Point> + '_> {
        Box::new(self.field.points_of_kind(CellKind::Empty))
    }
}

impl<D: Dimensions, const BOARD_SIZE: usize> FoodPlaceableGame for Game<D, BOARD_SIZE> {
    fn place_food(&mut self, rng: &mut impl Rng) -> Option<Point> {
        level::generate_food(&mut self.field, rng)
    }
}
