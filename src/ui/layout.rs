use crate::config::Config;

/// Size of a drawn cell and of the grid lines around it, in terminal
/// columns/rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMetrics {
    pub cell_width: u16,
    pub cell_height: u16,
    pub border: u16,
}

impl CellMetrics {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            border: config.border,
        }
    }

    fn pitch_x(&self) -> u16 {
        self.cell_width + self.border
    }

    fn pitch_y(&self) -> u16 {
        self.cell_height + self.border
    }

    /// Total drawn size of a `columns x rows` grid: every cell plus a border
    /// line before each cell and after the last one.
    pub fn extent(&self, columns: usize, rows: usize) -> (u16, u16) {
        let span = |n: usize, cell: u16| {
            let n = u16::try_from(n).unwrap_or(u16::MAX);
            n.saturating_mul(cell)
                .saturating_add(n.saturating_add(1).saturating_mul(self.border))
        };
        (span(columns, self.cell_width), span(rows, self.cell_height))
    }

    /// Top-left corner of cell `(x, y)` relative to the grid origin.
    #[cfg(test)]
    fn cell_origin(&self, x: usize, y: usize) -> (u16, u16) {
        let at = |i: usize, pitch: u16| {
            let i = u16::try_from(i).unwrap_or(u16::MAX);
            self.border.saturating_add(i.saturating_mul(pitch))
        };
        (at(x, self.pitch_x()), at(y, self.pitch_y()))
    }

    /// Maps a position relative to the grid origin to the cell under it.
    /// Positions on a grid line resolve to `None`; the caller still checks
    /// the result against the grid's dimensions.
    pub fn locate(&self, px: u16, py: u16) -> Option<(usize, usize)> {
        let axis = |p: u16, cell: u16, pitch: u16| {
            let p = p.checked_sub(self.border)?;
            if pitch == 0 || p % pitch >= cell {
                return None;
            }
            Some(usize::from(p / pitch))
        };
        Some((
            axis(px, self.cell_width, self.pitch_x())?,
            axis(py, self.cell_height, self.pitch_y())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BORDERLESS: CellMetrics = CellMetrics {
        cell_width: 2,
        cell_height: 1,
        border: 0,
    };

    const FRAMED: CellMetrics = CellMetrics {
        cell_width: 30,
        cell_height: 30,
        border: 1,
    };

    #[test]
    fn extent_counts_borders() {
        assert_eq!(BORDERLESS.extent(45, 30), (90, 30));
        assert_eq!(FRAMED.extent(45, 30), (45 * 30 + 46, 30 * 30 + 31));
    }

    #[test]
    fn locate_borderless() {
        assert_eq!(BORDERLESS.locate(0, 0), Some((0, 0)));
        assert_eq!(BORDERLESS.locate(1, 0), Some((0, 0)));
        assert_eq!(BORDERLESS.locate(2, 3), Some((1, 3)));
        assert_eq!(BORDERLESS.locate(89, 29), Some((44, 29)));
    }

    #[test]
    fn locate_with_grid_lines() {
        assert_eq!(FRAMED.locate(0, 5), None);
        assert_eq!(FRAMED.locate(1, 1), Some((0, 0)));
        assert_eq!(FRAMED.locate(30, 30), Some((0, 0)));
        assert_eq!(FRAMED.locate(31, 10), None);
        assert_eq!(FRAMED.locate(40, 62), None);
        assert_eq!(FRAMED.locate(32, 61), Some((1, 1)));
    }

    #[test]
    fn origin_round_trips_through_locate() {
        for metrics in [BORDERLESS, FRAMED] {
            let (ox, oy) = metrics.cell_origin(7, 4);
            assert_eq!(metrics.locate(ox, oy), Some((7, 4)));
        }
    }
}
