use log::warn;
use rand::Rng;

use super::grid::{Cell, Grid};

/// A named set of `(x, y)` cells to bring to life.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

#[rustfmt::skip]
pub const GLIDER_GUN: Pattern = Pattern {
    name: "Glider gun",
    cells: &[
        (1, 5), (1, 6), (2, 5), (2, 6),
        (11, 5), (11, 6), (11, 7), (12, 4), (12, 8), (13, 3), (13, 9),
        (14, 3), (14, 9), (15, 6), (16, 4), (16, 8), (17, 5), (17, 6),
        (17, 7), (18, 6),
        (21, 3), (21, 4), (21, 5), (22, 3), (22, 4), (22, 5), (23, 2), (23, 6),
        (25, 1), (25, 2), (25, 6), (25, 7),
        (35, 3), (35, 4), (36, 3), (36, 4),
    ],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 1), (1, 1), (2, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Brings every pattern cell that fits on `grid` to life and returns how many
/// were skipped for lying outside it.
pub fn apply(pattern: &Pattern, grid: &mut Grid) -> usize {
    let skipped = pattern
        .cells
        .iter()
        .filter(|&&(x, y)| grid.set_alive(x, y).is_err())
        .count();
    if skipped > 0 {
        warn!(
            "{}: {} cell(s) do not fit a {}x{} grid",
            pattern.name,
            skipped,
            grid.width(),
            grid.height()
        );
    }
    skipped
}

/// Sets each cell alive with probability `density`.
pub fn random_soup<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, density: f64) {
    let density = density.clamp(0.0, 1.0);
    for cell in grid.cells_mut() {
        if rng.gen_bool(density) {
            *cell = Cell::Alive;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn glider_gun_fits_default_grid() {
        let mut grid = Grid::new(45, 30);
        assert_eq!(apply(&GLIDER_GUN, &mut grid), 0);
        assert_eq!(grid.population(), 36);
        assert_eq!(grid.get(36, 4), Some(Cell::Alive));
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut grid = Grid::new(20, 20);
        let skipped = apply(&GLIDER_GUN, &mut grid);
        assert_eq!(skipped, 16);
        assert_eq!(grid.population(), 20);
    }

    #[test]
    fn soup_density_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut full = Grid::new(6, 6);
        random_soup(&mut full, &mut rng, 1.0);
        assert_eq!(full.population(), 36);

        let mut none = Grid::new(6, 6);
        random_soup(&mut none, &mut rng, 0.0);
        assert_eq!(none.population(), 0);
    }

    #[test]
    fn soup_keeps_other_cells_and_dimensions() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = Grid::new(7, 3);
        grid.set(6, 2, Cell::Dead).unwrap();
        random_soup(&mut grid, &mut rng, 0.0);
        assert_eq!((grid.width(), grid.height()), (7, 3));
        assert_eq!(grid.get(6, 2), Some(Cell::Dead));

        random_soup(&mut grid, &mut rng, 1.0);
        assert_eq!(grid.get(6, 2), Some(Cell::Alive));
        assert_eq!(grid.population(), 21);
    }
}
