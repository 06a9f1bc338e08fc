use super::grid::{Cell, Grid};

/// Computes the next generation under B3/S23.
///
/// A live cell that dies becomes `Dead`. Any other cell that is not born
/// stays `Unset` in the new generation, so `Dead` only lasts one tick.
pub fn step(current: &Grid) -> Grid {
    let cells = current
        .cells()
        .map(|(x, y, cell)| match (cell.is_alive(), current.alive_neighbors(x, y)) {
            (true, 2) | (true, 3) => Cell::Alive,
            (true, _) => Cell::Dead,
            (false, 3) => Cell::Alive,
            (false, _) => Cell::Unset,
        })
        .collect();
    Grid::from_cells(current.width(), current.height(), cells)
}
