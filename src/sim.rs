// sim.rs - Generation stepping and the pause/reseed/quit state machine

use log::{info, trace};
use rand::Rng;

use crate::config::ConfigError;
use crate::grid::{Cell, DEAD, Grid};
use crate::input::ControlEvent;
use crate::rules;

/// How far the generation sweep extends.
///
/// The original program never evaluated the last row or column, leaving them
/// permanently dead. `SkipLast` reproduces that behavior and is the default;
/// `Full` evaluates every cell as classical Life does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    SkipLast,
    Full,
}

pub struct Simulation {
    grid: Grid,
    edge_policy: EdgePolicy,
    paused: bool,
    game_over: bool,
    generation: u32,
}

impl Simulation {
    pub fn new(rows: usize, cols: usize, edge_policy: EdgePolicy) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            edge_policy,
            paused: false,
            game_over: false,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Reads a cell of the active buffer, the generation on screen.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid
            .get(self.grid.active_index(), row as isize, col as isize)
    }

    /// Randomizes the active buffer and zeroes the scratch buffer. Pause
    /// state is untouched.
    pub fn reseed<R: Rng>(&mut self, rng: &mut R) {
        let active = self.grid.active_index();
        let inactive = self.grid.inactive_index();
        self.grid.randomize(active, rng);
        self.grid.fill(inactive, DEAD);
        self.generation = 0;
    }

    /// Advances one generation: zero the scratch buffer, sweep the active
    /// buffer through the rule, swap. Under `SkipLast` the final row and
    /// column are not evaluated, so they come out dead in the new generation.
    pub fn step(&mut self) {
        let active = self.grid.active_index();
        let inactive = self.grid.inactive_index();
        self.grid.fill(inactive, DEAD);

        let (row_end, col_end) = match self.edge_policy {
            EdgePolicy::SkipLast => (self.grid.rows() - 1, self.grid.cols() - 1),
            EdgePolicy::Full => (self.grid.rows(), self.grid.cols()),
        };
        for row in 0..row_end {
            for col in 0..col_end {
                let next = rules::next_state(&self.grid, active, row, col);
                self.grid.set(inactive, row, col, next);
            }
        }
        self.grid.swap_active();
        self.generation += 1;
        trace!("generation {}", self.generation);
    }

    /// One frame-loop tick of simulation work. Nothing moves while paused or
    /// after the game is over.
    pub fn tick(&mut self) {
        if !self.paused && !self.game_over {
            self.step();
        }
    }

    pub fn handle<R: Rng>(&mut self, event: ControlEvent, rng: &mut R) {
        match event {
            ControlEvent::TogglePause => {
                self.paused = !self.paused;
                info!("pause toggled, paused={}", self.paused);
            }
            ControlEvent::Reseed => {
                self.reseed(rng);
                info!("grid randomized");
            }
            ControlEvent::Quit => {
                self.game_over = true;
                info!("quit requested");
            }
        }
    }
}
