pub mod layout;

use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::config::{Config, SIDEBAR_W};
use crate::life::{AutomatonSession, Cell, Grid};

pub use layout::CellMetrics;

const TITLE: &str = "EMOJI LIFE";
const INFO_H: u16 = 6;
const CONTROLS_H: u16 = 10;

/// Presentation settings that stay fixed for the life of the app.
pub struct Screen {
    pub metrics: CellMetrics,
    pub alive_glyph: String,
    pub dead_glyph: String,
}

impl Screen {
    pub fn from_config(config: &Config) -> Self {
        Self {
            metrics: CellMetrics::from_config(config),
            alive_glyph: config.alive_glyph.clone(),
            dead_glyph: config.dead_glyph.clone(),
        }
    }

    /// Glyph for a cell, or `None` when it should be left blank.
    pub fn glyph(&self, cell: Cell, show_dead: bool) -> Option<&str> {
        match cell {
            Cell::Alive => Some(self.alive_glyph.as_str()),
            Cell::Dead if show_dead => Some(self.dead_glyph.as_str()),
            Cell::Dead | Cell::Unset => None,
        }
    }
}

/// Where the pieces of the screen go for a given terminal area.
pub struct ScreenLayout {
    /// Drawn grid, excluding the well frame. Cell `(0, 0)` sits at its origin.
    pub grid: Rect,
    pub well: Rect,
    pub info: Rect,
    pub controls: Rect,
}

/// Smallest terminal size that fits the grid and the sidebar.
pub fn min_size(screen: &Screen, grid: &Grid) -> (u16, u16) {
    let (w, h) = screen.metrics.extent(grid.width(), grid.height());
    (
        w.saturating_add(4).saturating_add(SIDEBAR_W),
        h.saturating_add(4).max(INFO_H + CONTROLS_H + 2),
    )
}

/// Lays the well out on the left of the cabinet and the sidebar on its right.
/// Returns `None` when the area is too small.
pub fn screen_layout(area: Rect, screen: &Screen, grid: &Grid) -> Option<ScreenLayout> {
    let (min_w, min_h) = min_size(screen, grid);
    if area.width < min_w || area.height < min_h {
        return None;
    }
    let cabinet_inner = cabinet().inner(area);
    let (grid_w, grid_h) = screen.metrics.extent(grid.width(), grid.height());
    let well_w = grid_w.saturating_add(2);
    let well_h = grid_h.saturating_add(2);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(well_w), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    // Center the fixed-size well within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_h),
            Constraint::Min(0),
        ])
        .split(cols[0]);
    let well = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_w),
            Constraint::Min(0),
        ])
        .split(v_center[1])[1];

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INFO_H),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(cols[1]);

    Some(ScreenLayout {
        grid: well_block().inner(well),
        well,
        info: sidebar[0],
        controls: sidebar[1],
    })
}

pub fn draw(frame: &mut Frame, session: &AutomatonSession, screen: &Screen) {
    let area = frame.size();
    let Some(layout) = screen_layout(area, screen, session.grid()) else {
        let (min_w, min_h) = min_size(screen, session.grid());
        let msg = Paragraph::new(format!("RESIZE TERMINAL (min {min_w}x{min_h})"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        frame.render_widget(msg, area);
        return;
    };

    frame.render_widget(cabinet(), area);
    frame.render_widget(well_block(), layout.well);
    draw_grid(frame, session, screen, layout.grid);
    draw_info(frame, session, layout.info);
    draw_controls(frame, layout.controls);
}

fn cabinet() -> Block<'static> {
    Block::default()
        .title(TITLE)
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left)
}

fn well_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

fn draw_grid(frame: &mut Frame, session: &AutomatonSession, screen: &Screen, rect: Rect) {
    let lines = grid_lines(session.grid(), session.show_dead, screen);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), rect);
}

/// Text rows for the grid: grid lines where `border > 0`, and each cell's
/// glyph in the top-left of its slot padded out to the cell width.
pub fn grid_lines(grid: &Grid, show_dead: bool, screen: &Screen) -> Vec<Line<'static>> {
    let m = screen.metrics;
    let (_, height) = m.extent(grid.width(), grid.height());
    let pitch_y = m.cell_height + m.border;
    let vertical = "│".repeat(usize::from(m.border));
    let blank_cell = " ".repeat(usize::from(m.cell_width));

    (0..height)
        .map(|ry| {
            let offset = ry.checked_sub(m.border).map(|r| (r / pitch_y, r % pitch_y));
            let Some((y, within)) = offset.filter(|&(_, within)| within < m.cell_height) else {
                return Line::raw(separator(grid.width(), m));
            };
            let y = usize::from(y);
            let mut row = vertical.clone();
            for x in 0..grid.width() {
                let glyph = match grid.get(x, y) {
                    Some(cell) if within == 0 => screen.glyph(cell, show_dead),
                    _ => None,
                };
                match glyph {
                    Some(glyph) => {
                        let width = Span::raw(glyph).width();
                        row.push_str(glyph);
                        row.push_str(&" ".repeat(usize::from(m.cell_width).saturating_sub(width)));
                    }
                    None => row.push_str(&blank_cell),
                }
                row.push_str(&vertical);
            }
            Line::raw(row)
        })
        .collect()
}

fn separator(columns: usize, m: CellMetrics) -> String {
    let cross = "┼".repeat(usize::from(m.border));
    let run = "─".repeat(usize::from(m.cell_width));
    let mut line = cross.clone();
    for _ in 0..columns {
        line.push_str(&run);
        line.push_str(&cross);
    }
    line
}

fn draw_info(frame: &mut Frame, session: &AutomatonSession, area: Rect) {
    let status = if session.paused { "PAUSED" } else { "RUNNING" };
    let dead = if session.show_dead { "SHOWN" } else { "HIDDEN" };
    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "GEN:", session.generation)),
        Line::raw(format!("{:<7} {}", "ALIVE:", session.grid().population())),
        Line::raw(format!("{:<7} {}", "STATUS:", status)),
        Line::raw(format!("{:<7} {}", "DEAD:", dead)),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .alignment(Alignment::Left);
    frame.render_widget(info, area);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(vec![
        Line::raw("click   set alive"),
        Line::raw("space   pause"),
        Line::raw("n       step"),
        Line::raw("d       show dead"),
        Line::raw("g/b/l   gun/blink/glide"),
        Line::raw("r       random"),
        Line::raw("c       clear"),
        Line::raw("q/esc   quit"),
    ])
    .block(Block::default().title("CONTROLS").borders(Borders::ALL))
    .alignment(Alignment::Left);
    frame.render_widget(controls, area);
}
