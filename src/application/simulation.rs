use std::time::Duration;

use log::{debug, info, trace};
use rand::Rng;

use super::config::{GridPreset, SimulationConfig};
use crate::domain::{Board, BoardError, Cell, Pattern};

/// Whether the driver is advancing generations on its own
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    Running,
    #[default]
    Stopped,
}

/// Simulation owns the live board and decides when it advances.
/// The frame loop feeds it elapsed time; there is a single cadence per driver,
/// so two steps of the same board can never overlap.
pub struct Simulation {
    board: Board,
    config: SimulationConfig,
    run_state: RunState,
    generation: u64,
    /// Time accumulated towards the next generation
    elapsed: Duration,
    /// Name and description of the most recently stamped pattern
    last_pattern: Option<(&'static str, &'static str)>,
}

impl Simulation {
    /// Create a stopped simulation with an empty board sized by the preset
    pub fn new(config: SimulationConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.preset.rows(), config.preset.cols())?;
        Ok(Self {
            board,
            config,
            run_state: RunState::Stopped,
            generation: 0,
            elapsed: Duration::ZERO,
            last_pattern: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn preset(&self) -> GridPreset {
        self.config.preset
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_pattern(&self) -> Option<(&'static str, &'static str)> {
        self.last_pattern
    }

    /// Begin periodic stepping. Already running means nothing changes.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.elapsed = Duration::ZERO;
        self.run_state = RunState::Running;
        info!("simulation started at generation {}", self.generation);
    }

    /// Stop periodic stepping and drop any partially accumulated interval
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.run_state = RunState::Stopped;
        self.elapsed = Duration::ZERO;
        info!("simulation stopped at generation {}", self.generation);
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        match self.run_state {
            RunState::Running => self.stop(),
            RunState::Stopped => self.start(),
        }
    }

    /// Advance the clock by one frame.
    /// Returns true when a new generation replaced the board.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        self.elapsed += delta;
        if self.elapsed < self.config.step_interval {
            return false;
        }

        let next = if self.config.parallel {
            self.board.step_parallel()
        } else {
            self.board.step()
        };
        let stable = next == self.board;

        self.board = next;
        self.generation += 1;
        // Carry the leftover into the next interval, but never a whole backlog
        self.elapsed -= self.config.step_interval;
        if self.elapsed >= self.config.step_interval {
            self.elapsed = Duration::ZERO;
        }
        trace!("generation {} population {}", self.generation, self.board.population());

        if stable && self.config.halt_when_stable {
            info!("board is stable at generation {}, halting", self.generation);
            self.stop();
        }
        true
    }

    /// Flip a cell, as a click does
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let cell = self.board.toggle(row, col)?;
        debug!("toggled ({}, {}) to {:?}", row, col, cell);
        Ok(cell)
    }

    /// Bring a cell to life, as dragging over it does
    pub fn paint_cell(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.board.force_alive(row, col)?;
        debug!("painted ({}, {})", row, col);
        Ok(())
    }

    /// Stamp a pattern with its top-left corner at (row, col)
    pub fn place_pattern(
        &mut self,
        pattern: &Pattern,
        row: usize,
        col: usize,
    ) -> Result<(), BoardError> {
        pattern.place_on(&mut self.board, row, col)?;
        self.last_pattern = Some((pattern.name, pattern.description));
        debug!("placed {} at ({}, {})", pattern.name, row, col);
        Ok(())
    }

    /// Clear board and reset generation counter
    pub fn clear(&mut self) {
        self.stop();
        self.board.clear();
        self.generation = 0;
        self.last_pattern = None;
    }

    /// Randomize board and reset generation counter
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.board.randomize(rng, self.config.random_density)?;
        self.stop();
        self.generation = 0;
        debug!("randomized board, population {}", self.board.population());
        Ok(())
    }

    /// Switch to another preset. The old board is discarded, never resized.
    pub fn reconfigure(&mut self, preset: GridPreset) -> Result<(), BoardError> {
        let board = Board::new(preset.rows(), preset.cols())?;
        self.stop();
        self.board = board;
        self.config.preset = preset;
        self.generation = 0;
        self.last_pattern = None;
        info!("reconfigured to {} board", preset.name());
        Ok(())
    }
}
