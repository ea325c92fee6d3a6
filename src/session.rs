//! A frame driven game loop around [Game], the way a host runs it: the host calls
//! [Session::tick] once per frame and redraws when it returns true.
use std::convert::TryFrom;
use std::error::Error;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dimensions::{Dimensions, Standard, FIELD_SIZE};
use crate::game::Game;
use crate::types::{Direction, StepResult};

/// Speed settings for a [Session]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SessionSettings {
    /// number of frames between two game steps, lower is faster
    pub frames_per_step: u32,
    /// `increase_speed` never goes below this
    pub min_frames_per_step: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            frames_per_step: 5,
            min_frames_per_step: 1,
        }
    }
}

impl SessionSettings {
    /// parses settings from json, missing fields take their default
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let settings: SessionSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.min_frames_per_step == 0 {
            return Err("min_frames_per_step must be at least 1".into());
        }
        if self.frames_per_step < self.min_frames_per_step {
            return Err(format!(
                "frames_per_step {} is below min_frames_per_step {}",
                self.frames_per_step, self.min_frames_per_step
            )
            .into());
        }
        Ok(())
    }
}

/// Owns a game, its random source and the latest input. A failed step ends the level and
/// the next one starts right away.
#[derive(Debug)]
pub struct Session<R: Rng, D: Dimensions = Standard, const BOARD_SIZE: usize = FIELD_SIZE> {
    settings: SessionSettings,
    game: Game<D, BOARD_SIZE>,
    rng: R,
    input: Direction,
    frame: u32,
    levels_played: u32,
    best_score: u16,
}

impl<R: Rng, D: Dimensions, const BOARD_SIZE: usize> Session<R, D, BOARD_SIZE> {
    /// Starts the first level. Fails if the settings are out of range.
    pub fn new(settings: SessionSettings, mut rng: R) -> Result<Self, Box<dyn Error>> {
        settings.validate()?;
        let mut game = Game::new();
        game.prepare_level(&mut rng);
        Ok(Session {
            settings,
            game,
            rng,
            input: Direction::Right,
            frame: 0,
            levels_played: 0,
            best_score: 0,
        })
    }

    /// Remembers the latest steering request, it is applied on the next step
    pub fn set_input(&mut self, direction: Direction) {
        self.input = direction;
    }

    /// Like [Session::set_input] for a raw host key code in `0..=3`
    pub fn set_input_code(&mut self, code: u8) -> Result<(), Box<dyn Error>> {
        self.input = Direction::try_from(code)?;
        Ok(())
    }

    /// Advances one frame. Every `frames_per_step` frames the game takes a step and this
    /// returns true so the host knows to redraw.
    pub fn tick(&mut self) -> bool {
        self.frame += 1;
        if self.frame < self.settings.frames_per_step {
            return false;
        }
        self.frame = 0;

        if self.game.step(self.input, &mut self.rng) == StepResult::Fail {
            self.finish_level();
        }
        true
    }

    fn finish_level(&mut self) {
        let score = self.game.score();
        self.levels_played += 1;
        self.best_score = self.best_score.max(score);
        info!(
            score,
            best_score = self.best_score,
            levels_played = self.levels_played,
            "level over"
        );
        self.game.prepare_level(&mut self.rng);
        self.input = Direction::Right;
    }

    /// Steps more often, down to `min_frames_per_step`
    pub fn increase_speed(&mut self) {
        if self.settings.frames_per_step > self.settings.min_frames_per_step {
            self.settings.frames_per_step -= 1;
            debug!(frames_per_step = self.settings.frames_per_step, "speed up");
        }
    }

    /// Steps less often
    pub fn decrease_speed(&mut self) {
        self.settings.frames_per_step = self.settings.frames_per_step.saturating_add(1);
        debug!(frames_per_step = self.settings.frames_per_step, "slow down");
    }

    #[allow(missing_docs)]
    pub fn game(&self) -> &Game<D, BOARD_SIZE> {
        &self.game
    }

    /// Direct access to the running game, e.g. to set up a scenario
    pub fn game_mut(&mut self) -> &mut Game<D, BOARD_SIZE> {
        &mut self.game
    }

    #[allow(missing_docs)]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[allow(missing_docs)]
    pub fn input(&self) -> Direction {
        self.input
    }

    /// number of levels that ended in a collision
    pub fn levels_played(&self) -> u32 {
        self.levels_played
    }

    /// highest score reached in a finished level
    pub fn best_score(&self) -> u16 {
        self.best_score
    }
}
