use std::error::Error;
use std::fs::File;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use log::{info, LevelFilter};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::config::{Config, PatternChoice};
use crate::life::{patterns, AutomatonSession, Metronome, Tick};
use crate::ui::{self, Screen};

type Term = Terminal<CrosstermBackend<Stdout>>;

const POLL_TIMEOUT: Duration = Duration::from_millis(10);

pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    init_logging(&config)?;
    let metronome = Metronome::new(config.interval, Instant::now());
    info!(
        "starting {}x{} grid, {}ms per generation",
        config.columns,
        config.rows,
        metronome.interval().as_millis()
    );

    let mut session = AutomatonSession::new(&config);
    seed(&mut session, config.pattern);
    let screen = Screen::from_config(&config);

    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), &mut session, &screen, metronome)
}

/// Logs go to a file only: the alternate screen owns the terminal.
fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

pub fn seed(session: &mut AutomatonSession, choice: PatternChoice) {
    match choice {
        PatternChoice::GliderGun => session.load_pattern(&patterns::GLIDER_GUN),
        PatternChoice::Blinker => session.load_pattern(&patterns::BLINKER),
        PatternChoice::Glider => session.load_pattern(&patterns::GLIDER),
        PatternChoice::Random => session.randomize(&mut rand::thread_rng()),
        PatternChoice::Empty => session.clear(),
    }
}

fn run_loop(
    terminal: &mut Term,
    session: &mut AutomatonSession,
    screen: &Screen,
    mut metronome: Metronome,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| ui::draw(frame, session, screen))?;

        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(key, session) == Flow::Quit {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    let area = terminal.size()?;
                    handle_mouse(mouse, area, session, screen);
                }
                _ => {}
            }
        }

        if metronome.due(Instant::now()) {
            session.advance();
        }
    }
    info!("quit at generation {}", session.generation);
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_key(key: KeyEvent, session: &mut AutomatonSession) -> Flow {
    if key.kind == KeyEventKind::Release {
        return Flow::Continue;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => session.toggle_pause(),
        KeyCode::Char('d') => session.toggle_show_dead(),
        KeyCode::Char('n') => session.step_once(),
        KeyCode::Char('g') => seed(session, PatternChoice::GliderGun),
        KeyCode::Char('b') => seed(session, PatternChoice::Blinker),
        KeyCode::Char('l') => seed(session, PatternChoice::Glider),
        KeyCode::Char('r') => seed(session, PatternChoice::Random),
        KeyCode::Char('c') => seed(session, PatternChoice::Empty),
        _ => {}
    }
    Flow::Continue
}

/// Left press or drag inside the drawn grid brings the cell under the
/// pointer to life.
fn handle_mouse(mouse: MouseEvent, area: Rect, session: &mut AutomatonSession, screen: &Screen) {
    if !matches!(
        mouse.kind,
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
    ) {
        return;
    }
    let Some(layout) = ui::screen_layout(area, screen, session.grid()) else {
        return;
    };
    let grid = layout.grid;
    if mouse.column < grid.x || mouse.row < grid.y {
        return;
    }
    if let Some((x, y)) = screen.metrics.locate(mouse.column - grid.x, mouse.row - grid.y) {
        session.click(x, y);
    }
}
