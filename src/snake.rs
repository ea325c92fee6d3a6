//! Head and tail pointers for the snake threaded through the field.
//!
//! The body is never stored as a list. Every snake cell holds the direction of the next
//! cell towards the head, so walking from the tail and following those directions visits
//! the whole body and ends on the head. The head cell's direction is where the snake goes
//! on the coming step.
use std::collections::HashSet;

use crate::dimensions::Dimensions;
use crate::field::{Cell, Field};
use crate::geometry::Point;
use crate::types::Direction;

/// The two ends of the snake
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Snake {
    head: Point,
    tail: Point,
}

impl Snake {
    #[allow(missing_docs)]
    pub fn new(head: Point, tail: Point) -> Self {
        Snake { head, tail }
    }

    /// the cell whose movement is decided on the coming step
    pub fn head(&self) -> Point {
        self.head
    }

    /// the cell that is vacated on a move that does not eat
    pub fn tail(&self) -> Point {
        self.tail
    }

    /// The direction stored on the head cell, `None` if no snake lives at the head
    pub fn direction<D: Dimensions, const BOARD_SIZE: usize>(
        &self,
        field: &Field<D, BOARD_SIZE>,
    ) -> Option<Direction> {
        field.get(self.head).snake_next()
    }

    /// Applies a steering request to the head cell and returns the direction the head now
    /// points in. Requests to reverse straight back into the body are ignored.
    pub fn steer<D: Dimensions, const BOARD_SIZE: usize>(
        &self,
        field: &mut Field<D, BOARD_SIZE>,
        requested: Direction,
    ) -> Option<Direction> {
        let head_cell = field.get(self.head);
        let current = head_cell.snake_next()?;
        if current == requested || current.opposite() == requested {
            return Some(current);
        }
        field.set(self.head, head_cell.with_snake_next(requested));
        Some(requested)
    }

    /// A snake may enter empty cells, food, and its own tail because the tail moves away
    /// on the same step.
    pub fn can_enter<D: Dimensions, const BOARD_SIZE: usize>(
        &self,
        field: &Field<D, BOARD_SIZE>,
        target: Point,
    ) -> bool {
        let cell = field.get(target);
        cell.is_empty() || cell.is_food() || (cell.is_snake() && target == self.tail)
    }

    /// Extends the head in to `target` without moving the tail.
    pub fn grow<D: Dimensions, const BOARD_SIZE: usize>(
        &mut self,
        field: &mut Field<D, BOARD_SIZE>,
        target: Point,
        direction: Direction,
    ) {
        field.set(target, Cell::snake(direction));
        self.head = target;
    }

    /// Moves the head in to `target` and pulls the tail one cell along the body. The old
    /// tail is cleared before the head is written so entering the tail leaves a snake cell.
    pub fn advance<D: Dimensions, const BOARD_SIZE: usize>(
        &mut self,
        field: &mut Field<D, BOARD_SIZE>,
        target: Point,
        direction: Direction,
    ) {
        let old_tail = self.tail;
        let tail_next = field.get(old_tail).snake_next();
        debug_assert!(tail_next.is_some(), "tail at {} is not a snake cell", old_tail);

        field.set(old_tail, Cell::empty());
        field.set(target, Cell::snake(direction));

        self.head = target;
        if let Some(d) = tail_next {
            self.tail = old_tail.in_direction(d, field.dimensions());
        }
    }

    /// Walks the chain from tail towards head. The walk stops at the head, at the first
    /// cell that is not a snake cell, or after visiting as many cells as the board holds.
    pub fn body_iter<'a, D: Dimensions, const BOARD_SIZE: usize>(
        &self,
        field: &'a Field<D, BOARD_SIZE>,
    ) -> impl Iterator<Item = Point> + 'a {
        let head = self.head;
        std::iter::successors(Some(self.tail), move |p| {
            if *p == head {
                None
            } else {
                field
                    .get(*p)
                    .snake_next()
                    .map(|d| p.in_direction(d, field.dimensions()))
            }
        })
        .take(BOARD_SIZE)
    }

    /// return a Vec of the positions for the snake body, in order from head to tail
    pub fn body_vec<D: Dimensions, const BOARD_SIZE: usize>(
        &self,
        field: &Field<D, BOARD_SIZE>,
    ) -> Vec<Point> {
        let mut body: Vec<Point> = self.body_iter(field).collect();
        body.reverse();
        body
    }

    /// number of cells the snake occupies
    pub fn len<D: Dimensions, const BOARD_SIZE: usize>(
        &self,
        field: &Field<D, BOARD_SIZE>,
    ) -> usize {
        self.body_iter(field).count()
    }

    /// Checks that the tail reaches the head through snake cells only, without visiting a
    /// cell twice. Returns false if the field is inconsistent.
    pub fn is_consistent<D: Dimensions, const BOARD_SIZE: usize>(
        &self,
        field: &Field<D, BOARD_SIZE>,
    ) -> bool {
        let mut seen = HashSet::new();
        let mut last = None;
        for p in self.body_iter(field) {
            if !field.get(p).is_snake() || !seen.insert(p) {
                return false;
            }
            last = Some(p);
        }
        last == Some(self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::Fixed;

    type SmallField = Field<Fixed<5, 3>, 15>;

    // tail (0,1) -> (1,1) -> head (2,1), all pointing right
    fn three_long() -> (SmallField, Snake) {
        let mut field = SmallField::new();
        for x in 0..3 {
            field.set(Point::new(x, 1), Cell::snake(Direction::Right));
        }
        (field, Snake::new(Point::new(2, 1), Point::new(0, 1)))
    }

    #[test]
    fn test_body_walk() {
        let (field, snake) = three_long();
        assert_eq!(snake.len(&field), 3);
        assert_eq!(
            snake.body_vec(&field),
            vec![Point::new(2, 1), Point::new(1, 1), Point::new(0, 1)]
        );
        assert!(snake.is_consistent(&field));
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let (mut field, snake) = three_long();
        assert_eq!(
            snake.steer(&mut field, Direction::Left),
            Some(Direction::Right)
        );
        assert_eq!(snake.direction(&field), Some(Direction::Right));
        assert_eq!(snake.steer(&mut field, Direction::Up), Some(Direction::Up));
        assert_eq!(snake.direction(&field), Some(Direction::Up));
        assert_eq!(snake.steer(&mut field, Direction::Down), Some(Direction::Up));
    }

    #[test]
    fn test_default_snake_sits_at_origin() {
        let snake = Snake::default();
        assert_eq!(snake.head(), Point::new(0, 0));
        assert_eq!(snake.tail(), Point::new(0, 0));
        assert_eq!(Point::default(), Point::new(0, 0));
    }

    #[test]
    fn test_steer_without_snake() {
        let mut field = SmallField::new();
        let snake = Snake::default();
        assert_eq!(snake.steer(&mut field, Direction::Up), None);
        assert!(field.get(Point::new(0, 0)).is_empty());
    }

    #[test]
    fn test_advance_moves_both_ends() {
        let (mut field, mut snake) = three_long();
        snake.advance(&mut field, Point::new(3, 1), Direction::Right);
        assert_eq!(snake.head(), Point::new(3, 1));
        assert_eq!(snake.tail(), Point::new(1, 1));
        assert!(field.get(Point::new(0, 1)).is_empty());
        assert_eq!(snake.len(&field), 3);
        assert!(snake.is_consistent(&field));
    }

    #[test]
    fn test_grow_keeps_tail() {
        let (mut field, mut snake) = three_long();
        snake.grow(&mut field, Point::new(3, 1), Direction::Right);
        assert_eq!(snake.tail(), Point::new(0, 1));
        assert_eq!(snake.len(&field), 4);
        assert!(snake.is_consistent(&field));
    }

    #[test]
    fn test_can_enter() {
        let (mut field, snake) = three_long();
        field.set(Point::new(3, 1), Cell::food());
        field.set(Point::new(2, 0), Cell::block());
        assert!(snake.can_enter(&field, Point::new(3, 1)));
        assert!(snake.can_enter(&field, Point::new(2, 2)));
        assert!(snake.can_enter(&field, Point::new(0, 1)));
        assert!(!snake.can_enter(&field, Point::new(1, 1)));
        assert!(!snake.can_enter(&field, Point::new(2, 0)));
    }

    #[test]
    fn test_inconsistent_chain_detected() {
        let (mut field, snake) = three_long();
        field.set(Point::new(1, 1), Cell::snake(Direction::Up));
        assert!(!snake.is_consistent(&field));

        // a loop that never reaches the head
        let (mut field, snake) = three_long();
        field.set(Point::new(1, 1), Cell::snake(Direction::Left));
        assert!(!snake.is_consistent(&field));
    }
}
