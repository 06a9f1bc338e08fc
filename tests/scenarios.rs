use std::time::{Duration, Instant};

use emoji_life::life::{patterns, step};
use emoji_life::{AutomatonSession, Cell, Config, Grid, Metronome, Tick};

fn alive(grid: &Grid) -> Vec<(usize, usize)> {
    grid.cells()
        .filter(|(_, _, c)| c.is_alive())
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn blinker_oscillates_without_wrapping() {
    let mut grid = Grid::new(3, 3);
    for (x, y) in [(0, 1), (1, 1), (2, 1)] {
        grid.set_alive(x, y).unwrap();
    }

    let next = step(&grid);
    assert_eq!(alive(&next), vec![(1, 0), (1, 1), (1, 2)]);
    assert_eq!(next.get(0, 1), Some(Cell::Dead));
    assert_eq!(next.get(2, 1), Some(Cell::Dead));
    assert_eq!(next.get(0, 0), Some(Cell::Unset));

    let back = step(&next);
    assert_eq!(alive(&back), vec![(0, 1), (1, 1), (2, 1)]);
}

#[test]
fn isolated_cell_dies() {
    let mut grid = Grid::new(5, 5);
    grid.set_alive(2, 2).unwrap();
    let next = step(&grid);
    assert!(alive(&next).is_empty());
    assert_eq!(next.get(2, 2), Some(Cell::Dead));
}

#[test]
fn set_alive_between_steps_is_seen_by_next_step() {
    let config = Config {
        columns: 4,
        rows: 4,
        ..Config::default()
    };
    let mut session = AutomatonSession::new(&config);
    session.set_alive(0, 0).unwrap();
    session.set_alive(1, 0).unwrap();
    session.advance();
    assert!(alive(session.grid()).is_empty());

    // an L of three makes a block
    session.set_alive(1, 1).unwrap();
    session.set_alive(2, 1).unwrap();
    session.set_alive(1, 2).unwrap();
    session.advance();
    assert_eq!(alive(session.grid()), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    assert_eq!(session.generation, 2);
}

#[test]
fn glider_travels_diagonally() {
    let mut session = AutomatonSession::new(&Config {
        columns: 10,
        rows: 10,
        ..Config::default()
    });
    session.load_pattern(&patterns::GLIDER);
    for _ in 0..4 {
        session.advance();
    }
    assert_eq!(
        alive(session.grid()),
        vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]
    );
}

#[test]
fn glider_gun_returns_after_one_period() {
    let mut session = AutomatonSession::new(&Config::default());
    session.load_pattern(&patterns::GLIDER_GUN);
    for _ in 0..30 {
        session.advance();
    }
    let grid = session.grid();
    for &(x, y) in patterns::GLIDER_GUN.cells {
        assert_eq!(grid.get(x, y), Some(Cell::Alive), "gun cell ({x}, {y})");
    }
    assert!(grid.population() > patterns::GLIDER_GUN.cells.len());
}

#[test]
fn metronome_drives_session() {
    let config = Config::default();
    let mut session = AutomatonSession::new(&config);
    session.load_pattern(&patterns::BLINKER);

    let start = Instant::now();
    let mut metronome = Metronome::new(config.interval, start);
    for ms in (0..=400).step_by(10) {
        if metronome.due(start + Duration::from_millis(ms)) {
            session.advance();
        }
    }
    assert_eq!(session.generation, 5);
}
