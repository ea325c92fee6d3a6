#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Rules for a classic snake game on a fixed size toroidal field.
//!
//! The whole game state lives in a compact [field::Field] of one byte cells. The snake is
//! not stored as a list: each snake cell records the direction of the next cell towards
//! the head, and the [snake::Snake] only remembers where the head and the tail are.
//!
//! A host drives the game like this:
//! ```
//! # use toroidal_snake::{game::StandardGame, types::{Direction, StepResult}};
//! # use rand::{rngs::SmallRng, SeedableRng};
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut game = StandardGame::new();
//! game.prepare_level(&mut rng);
//! if game.step(Direction::Up, &mut rng) == StepResult::Fail {
//!     game.prepare_level(&mut rng);
//! }
//! ```
//! or hands the loop over to a [session::Session].

pub mod dimensions;
pub mod field;
pub mod game;
pub mod geometry;
pub mod level;
pub mod session;
pub mod snake;
pub mod types;

pub use dimensions::{FIELD_HEIGHT, FIELD_WIDTH};
pub use game::{Game, StandardGame};
pub use types::{Direction, StepResult};
