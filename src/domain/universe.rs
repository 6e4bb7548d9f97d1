use super::Cell;
use rand::Rng;

/// Universe is the automaton engine: it owns the cell buffer and applies
/// one generation per tick. The buffer is row-major with
/// `index = row * width + col`; neighbors wrap toroidally. Dimensions are
/// fixed for the lifetime of an instance.
pub struct Universe {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Universe {
    /// Create a universe with all cells dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a universe with each cell alive with probability 1/2
    pub fn randomized(width: usize, height: usize) -> Self {
        let mut rng = rand::rng();
        let cells = (0..width * height)
            .map(|_| {
                if rng.random_bool(0.5) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Read-only snapshot of the cell buffer, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert 2D coordinates to the flat buffer index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Count live neighbors with toroidal wrapping
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        (0..3usize)
            .flat_map(|dr| (0..3usize).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| !(dr == 1 && dc == 1))
            .map(|(dr, dc)| {
                let r = (row + self.height + dr - 1) % self.height;
                let c = (col + self.width + dc - 1) % self.width;
                self.cells[self.index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance the buffer by one generation in place
    pub fn tick(&mut self) {
        let next = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.evolve(self.live_neighbors(row, col))
            })
            .collect();
        self.cells = next;
    }

    /// Flip one cell's state. Out-of-range coordinates are ignored;
    /// callers clamp pointer-derived positions before getting here.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if row < self.height && col < self.width {
            let idx = self.index(row, col);
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Restore the fixed known configuration: every cell dead
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Set exactly the given flat indices alive and all other cells dead.
    /// Indices past the buffer are ignored.
    pub fn set_pattern(&mut self, indices: &[usize]) {
        self.reset();
        for &idx in indices {
            if idx < self.cells.len() {
                self.cells[idx] = Cell::Alive;
            }
        }
    }

    /// Mark the given (row, col) coordinates alive, leaving the rest as-is
    pub fn set_cells(&mut self, coords: &[(usize, usize)]) {
        for &(row, col) in coords {
            if row < self.height && col < self.width {
                let idx = self.index(row, col);
                self.cells[idx] = Cell::Alive;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_positions(universe: &Universe) -> Vec<(usize, usize)> {
        let width = universe.width();
        universe
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / width, idx % width))
            .collect()
    }

    #[test]
    fn test_new_universe_is_dead() {
        let universe = Universe::new(4, 3);
        assert_eq!(universe.width(), 4);
        assert_eq!(universe.height(), 3);
        assert_eq!(universe.cells().len(), 12);
        assert!(universe.cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut universe = Universe::new(5, 5);
        universe.set_cells(&[(2, 1), (2, 2), (2, 3)]);

        universe.tick();
        assert_eq!(alive_positions(&universe), vec![(1, 2), (2, 2), (3, 2)]);

        universe.tick();
        assert_eq!(alive_positions(&universe), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_block_is_still() {
        let mut universe = Universe::new(4, 4);
        universe.set_cells(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let before = universe.cells().to_vec();

        universe.tick();
        assert_eq!(universe.cells(), &before[..]);
    }

    #[test]
    fn test_neighbors_wrap_around_edges() {
        let mut universe = Universe::new(5, 5);
        // Corner cell plus its two wrapped diagonal companions
        universe.set_cells(&[(0, 0), (0, 4), (4, 0)]);

        // (4, 4) touches all three across the seams, so it is born
        universe.tick();
        assert!(universe.get(4, 4).unwrap().is_alive());
    }

    #[test]
    fn test_toggle_cell_is_idempotent_in_pairs() {
        let mut universe = Universe::new(8, 8);
        universe.toggle_cell(3, 5);
        assert!(universe.get(3, 5).unwrap().is_alive());

        universe.toggle_cell(3, 5);
        assert!(!universe.get(3, 5).unwrap().is_alive());
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut universe = Universe::new(4, 4);
        universe.toggle_cell(4, 0);
        universe.toggle_cell(0, 17);
        assert!(universe.cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut universe = Universe::randomized(16, 16);
        universe.reset();
        assert!(universe.cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_set_pattern_is_exact() {
        let mut universe = Universe::randomized(10, 10);
        let indices = [5, 16, 20, 21, 22];
        universe.set_pattern(&indices);

        for (idx, cell) in universe.cells().iter().enumerate() {
            assert_eq!(cell.is_alive(), indices.contains(&idx), "index {idx}");
        }
    }

    #[test]
    fn test_set_pattern_ignores_out_of_range_indices() {
        let mut universe = Universe::new(3, 3);
        universe.set_pattern(&[0, 8, 9, 100]);
        assert_eq!(
            alive_positions(&universe),
            vec![(0, 0), (2, 2)]
        );
    }

    #[test]
    fn test_randomized_preserves_dimensions() {
        let universe = Universe::randomized(32, 48);
        assert_eq!(universe.width(), 32);
        assert_eq!(universe.height(), 48);
        assert_eq!(universe.cells().len(), 32 * 48);
    }
}
