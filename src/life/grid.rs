use clipline::clipline;

/// Errors raised by grid construction and cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    Empty { width: usize, height: usize },
    #[error("a {width}x{height} grid has too many cells")]
    TooLarge { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A fixed-size field of cells with an open (non-wrapping) boundary.
///
/// Cell `(x, y)` lives at index `x + y * width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        Ok(Self {
            cells: vec![false; len],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.contains(x, y).then(|| x + y * self.width)
    }

    pub fn coords(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index % self.width, index / self.width))
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, GridError> {
        Ok(self.cells[self.checked_index(x, y)?])
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Counts live cells among the up-to-8 neighbors of `(x, y)`.
    /// Cells past the edge of the grid never contribute.
    pub fn neighbor_count(&self, x: usize, y: usize) -> Result<usize, GridError> {
        self.checked_index(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    // `(x, y)` must be in bounds.
    pub(crate) fn live_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for j in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
            for i in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                if (i, j) != (x, y) && self.cells[i + j * self.width] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Sets every cell on the line between two cell positions. Positions may
    /// lie outside the grid; the line is clipped to it.
    pub fn set_line(&mut self, from: (isize, isize), to: (isize, isize), alive: bool) {
        let clip = ((0, 0), (self.width as isize - 1, self.height as isize - 1));
        let width = self.width;
        let cells = &mut self.cells;
        clipline((from, to), clip, |x, y| {
            cells[x as usize + y as usize * width] = alive;
        });
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Iterates `(x, y, alive)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &alive)| (i % self.width, i / self.width, alive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::Empty {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn index_mapping_is_a_bijection() {
        let grid = Grid::new(7, 5).unwrap();
        let mut seen = vec![false; 35];
        for y in 0..5 {
            for x in 0..7 {
                let i = grid.index(x, y).unwrap();
                assert_eq!(i, x + y * 7);
                assert!(!seen[i], "index {i} hit twice");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));

        for i in 0..35 {
            let (x, y) = grid.coords(i).unwrap();
            assert_eq!(grid.index(x, y), Some(i));
        }
        assert_eq!(grid.index(7, 0), None);
        assert_eq!(grid.coords(35), None);
    }

    #[test]
    fn corner_counts_only_in_bounds_neighbors() {
        let mut grid = Grid::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                grid.set(x, y, true).unwrap();
            }
        }
        assert_eq!(grid.neighbor_count(0, 0), Ok(3));
        assert_eq!(grid.neighbor_count(3, 2), Ok(3));
        assert_eq!(grid.neighbor_count(1, 0), Ok(5));
        assert_eq!(grid.neighbor_count(1, 1), Ok(8));
    }

    #[test]
    fn neighbor_count_ignores_the_cell_itself() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true).unwrap();
        assert_eq!(grid.neighbor_count(1, 1), Ok(0));
        assert_eq!(grid.neighbor_count(0, 0), Ok(1));
    }

    #[test]
    fn single_column_grid_counts_vertically() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(0, 2, true).unwrap();
        assert_eq!(grid.neighbor_count(0, 1), Ok(2));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.toggle(2, 1), Ok(true));
        assert_eq!(grid.toggle(2, 1), Ok(false));
        assert_eq!(grid.get(2, 1), Ok(false));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut grid = Grid::new(2, 2).unwrap();
        let err = GridError::OutOfBounds {
            x: 2,
            y: 0,
            width: 2,
            height: 2,
        };
        assert_eq!(grid.get(2, 0), Err(err));
        assert_eq!(grid.set(2, 0, true), Err(err));
        assert_eq!(grid.toggle(2, 0), Err(err));
        assert_eq!(grid.neighbor_count(2, 0), Err(err));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn line_is_clipped_to_the_grid() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_line((-3, 2), (10, 2), true);
        for x in 0..5 {
            assert_eq!(grid.get(x, 2), Ok(true));
        }
        assert_eq!(grid.population(), 5);

        grid.set_line((0, 0), (4, 4), true);
        assert_eq!(grid.get(3, 3), Ok(true));
        assert_eq!(grid.population(), 9);
    }

    #[test]
    fn line_fully_outside_changes_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_line((-5, -5), (-1, -9), true);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn iter_follows_storage_order() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 0, true).unwrap();
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![(0, 0, false), (1, 0, true), (0, 1, false), (1, 1, false)]
        );
    }
}
