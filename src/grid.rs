// grid.rs - Double-buffered cell storage for Conway's Game of Life

use rand::Rng;

use crate::config::ConfigError;

pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 1;

/// Two same-shaped cell buffers with a single active index. The active buffer
/// is the generation on screen; the other is scratch for the next sweep.
/// Buffers are allocated once and never resized.
pub struct Grid {
    rows: usize,
    cols: usize,
    buffers: [Vec<Cell>; 2],
    active: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            buffers: [vec![DEAD; rows * cols], vec![DEAD; rows * cols]],
            active: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The complement of the active index, never tracked separately.
    pub fn inactive_index(&self) -> usize {
        self.active ^ 1
    }

    pub fn swap_active(&mut self) {
        self.active ^= 1;
    }

    pub fn fill(&mut self, buffer: usize, value: Cell) {
        self.buffers[buffer].fill(value);
    }

    /// Sets every cell independently to ALIVE with probability 1/2. The
    /// generator is injected so tests can seed it; production passes
    /// `rand::rng()`.
    pub fn randomize<R: Rng>(&mut self, buffer: usize, rng: &mut R) {
        for cell in &mut self.buffers[buffer] {
            *cell = if rng.random_bool(0.5) { ALIVE } else { DEAD };
        }
    }

    /// Bounds-safe read. Coordinates outside the grid read as DEAD, which
    /// makes the edge behave as if bordered by permanently dead cells.
    pub fn get(&self, buffer: usize, row: isize, col: isize) -> Cell {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return DEAD;
        }
        self.buffers[buffer][row as usize * self.cols + col as usize]
    }

    /// In-range write; silently ignores out-of-range coordinates.
    pub fn set(&mut self, buffer: usize, row: usize, col: usize, value: Cell) {
        if row < self.rows && col < self.cols {
            self.buffers[buffer][row * self.cols + col] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(5, 7).unwrap();
        for buffer in 0..2 {
            for row in 0..5 {
                for col in 0..7 {
                    assert_eq!(grid.get(buffer, row, col), DEAD);
                }
            }
        }
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.active_index(), 0);
        assert_eq!(grid.inactive_index(), 1);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(Grid::new(0, 10).is_err());
        assert!(Grid::new(10, 0).is_err());
    }

    #[test]
    fn fill_reaches_every_cell() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.fill(1, ALIVE);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(grid.get(1, row, col), ALIVE);
                assert_eq!(grid.get(0, row, col), DEAD);
            }
        }
        grid.fill(1, DEAD);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(grid.get(1, row, col), DEAD);
            }
        }
    }

    #[test]
    fn out_of_range_reads_are_dead() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.fill(0, ALIVE);
        assert_eq!(grid.get(0, -1, 0), DEAD);
        assert_eq!(grid.get(0, 0, -1), DEAD);
        assert_eq!(grid.get(0, 3, 0), DEAD);
        assert_eq!(grid.get(0, 0, 3), DEAD);
        assert_eq!(grid.get(0, isize::MIN, isize::MAX), DEAD);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 3, 0, ALIVE);
        grid.set(0, 0, 3, ALIVE);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.get(0, row, col), DEAD);
            }
        }
    }

    #[test]
    fn swap_flips_between_two_indices() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.swap_active();
        assert_eq!(grid.active_index(), 1);
        assert_eq!(grid.inactive_index(), 0);
        grid.swap_active();
        assert_eq!(grid.active_index(), 0);
    }

    #[test]
    fn randomize_writes_only_cell_values() {
        let mut grid = Grid::new(16, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        grid.randomize(0, &mut rng);
        let mut alive = 0;
        for row in 0..16 {
            for col in 0..16 {
                let cell = grid.get(0, row, col);
                assert!(cell == DEAD || cell == ALIVE);
                alive += cell as usize;
            }
        }
        // A seeded half-density fill lands strictly between the extremes.
        assert!(alive > 0 && alive < 256);
    }
}
