use thiserror::Error;

/// State of a single cell. `Unset` and `Dead` both count as not alive; they
/// only differ in how a renderer may choose to draw them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Unset,
    Alive,
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// One generation: a fixed `width x height` array of cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Grid {
    /// Creates a grid with every cell `Unset`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Unset; width * height],
        }
    }

    /// Builds a grid from cells already laid out row by row.
    pub(super) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
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

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if self.contains(x, y) {
            Some(self.cells[self.idx(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) -> Result<(), GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.idx(x, y);
        self.cells[idx] = value;
        Ok(())
    }

    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.set(x, y, Cell::Alive)
    }

    /// Number of the 8 surrounding cells that are alive. Positions past the
    /// edge are absent, never alive.
    pub fn alive_neighbors(&self, x: usize, y: usize) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count()
    }

    pub(super) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Every cell with its `(x, y)` coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_unset() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert!(grid.cells().all(|(_, _, c)| c == Cell::Unset));
        assert_eq!(grid.cells().count(), 12);
    }

    #[test]
    fn set_alive_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(
            grid.set_alive(2, 0),
            Err(GridError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            })
        );
        assert_eq!(grid, Grid::new(2, 2));
    }

    #[test]
    fn neighbors_ignore_dead_and_unset() {
        let mut grid = Grid::new(3, 3);
        grid.set_alive(0, 0).unwrap();
        grid.set(1, 0, Cell::Dead).unwrap();
        grid.set_alive(2, 2).unwrap();
        assert_eq!(grid.alive_neighbors(1, 1), 2);
        assert_eq!(grid.alive_neighbors(0, 0), 0);
    }

    #[test]
    fn corner_neighbors_do_not_wrap() {
        let mut grid = Grid::new(3, 3);
        grid.set_alive(2, 2).unwrap();
        grid.set_alive(2, 0).unwrap();
        grid.set_alive(0, 2).unwrap();
        assert_eq!(grid.alive_neighbors(0, 0), 0);
    }

    #[test]
    fn cells_reports_coordinates() {
        let mut grid = Grid::new(3, 2);
        grid.set_alive(2, 1).unwrap();
        let alive: Vec<_> = grid.cells().filter(|(_, _, c)| c.is_alive()).collect();
        assert_eq!(alive, vec![(2, 1, Cell::Alive)]);
        assert_eq!(grid.population(), 1);
    }
}
