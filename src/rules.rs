// rules.rs - Classic Life rule evaluation

use crate::grid::{ALIVE, Cell, DEAD, Grid};

/// Number of live cells among the 8 neighbors of `(row, col)` in the named
/// buffer. Neighbors outside the grid count as dead.
pub fn neighbor_sum(grid: &Grid, buffer: usize, row: usize, col: usize) -> u8 {
    let mut sum = 0;
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            sum += grid.get(buffer, row as isize + dr, col as isize + dc);
        }
    }
    sum
}

/// Next state of a single cell under the classic Life rule: a live cell
/// survives with 2 or 3 live neighbors, a dead cell is born with exactly 3.
pub fn next_state(grid: &Grid, buffer: usize, row: usize, col: usize) -> Cell {
    let sum = neighbor_sum(grid, buffer, row, col);
    match (grid.get(buffer, row as isize, col as isize), sum) {
        (ALIVE, 2) | (ALIVE, 3) => ALIVE, // survival
        (DEAD, 3) => ALIVE,               // birth
        _ => DEAD,                        // under- or overpopulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(5, 5).unwrap();
        for &(row, col) in cells {
            grid.set(0, row, col, ALIVE);
        }
        grid
    }

    #[test]
    fn lonely_cell_dies() {
        let grid = grid_with(&[(2, 2)]);
        assert_eq!(next_state(&grid, 0, 2, 2), DEAD);
    }

    #[test]
    fn survival_with_two_or_three_neighbors() {
        let grid = grid_with(&[(2, 2), (1, 1), (1, 2)]);
        assert_eq!(next_state(&grid, 0, 2, 2), ALIVE);

        let grid = grid_with(&[(2, 2), (1, 1), (1, 2), (1, 3)]);
        assert_eq!(next_state(&grid, 0, 2, 2), ALIVE);
    }

    #[test]
    fn overpopulated_cell_dies() {
        let grid = grid_with(&[(2, 2), (1, 1), (1, 2), (1, 3), (2, 1)]);
        assert_eq!(neighbor_sum(&grid, 0, 2, 2), 4);
        assert_eq!(next_state(&grid, 0, 2, 2), DEAD);
    }

    #[test]
    fn birth_needs_exactly_three() {
        let grid = grid_with(&[(1, 1), (1, 2), (1, 3)]);
        assert_eq!(next_state(&grid, 0, 2, 2), ALIVE);

        let grid = grid_with(&[(1, 1), (1, 2)]);
        assert_eq!(next_state(&grid, 0, 2, 2), DEAD);

        let grid = grid_with(&[(1, 1), (1, 2), (1, 3), (2, 1)]);
        assert_eq!(next_state(&grid, 0, 2, 2), DEAD);
    }

    #[test]
    fn evaluation_is_pure() {
        // Two disjoint copies of the same neighborhood give the same answer,
        // and repeated calls never disagree.
        let grid = grid_with(&[(0, 0), (0, 1), (1, 0), (3, 3), (3, 4), (4, 3)]);
        let first = next_state(&grid, 0, 1, 1);
        assert_eq!(first, next_state(&grid, 0, 4, 4));
        assert_eq!(first, next_state(&grid, 0, 1, 1));
    }

    #[test]
    fn corner_uses_open_boundary() {
        // A corner cell has only three in-grid neighbors; the rest read dead.
        let grid = grid_with(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbor_sum(&grid, 0, 0, 0), 3);
        assert_eq!(next_state(&grid, 0, 0, 0), ALIVE);
    }
}
