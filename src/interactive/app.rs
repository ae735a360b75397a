//! TUI application state and logic

use super::layout;
use crate::arcade::scores::{BALLOON_FRENZY, RUNAWAY_ROBOT};
use crate::arcade::{
    BalloonGame, BalloonKind, FixedStep, Heading, HighScores, Mode, RobotGame, RobotState,
    Simulation, drive,
};
use crate::game::{Outcome, Session, Statistics, celebration};
use crate::keyboard::Key;
use crate::toys::counter::INCREMENTED;
use crate::toys::{Counter, DotCanvas, Gradient};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Event poll timeout when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Wordle,
    Balloon,
    Robot,
    Gradient,
    Dots,
    Counter,
}

impl Screen {
    /// Menu entries, in display order
    pub const LABS: [Self; 6] = [
        Self::Wordle,
        Self::Balloon,
        Self::Robot,
        Self::Gradient,
        Self::Dots,
        Self::Counter,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Menu => "Interactive Lab",
            Self::Wordle => "Wordly Wonders",
            Self::Balloon => "Balloon Frenzy",
            Self::Robot => "Runaway Robot",
            Self::Gradient => "Gradient Generator",
            Self::Dots => "Dot Canvas",
            Self::Counter => "Counter",
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Menu => "Pick a lab",
            Self::Wordle => "Guess the hidden word in six tries",
            Self::Balloon => "Pop balloons before they float away",
            Self::Robot => "Collect coins and outrun your own ghosts",
            Self::Gradient => "Random two-stop CSS gradients",
            Self::Dots => "Paint on a 20x20 grid of dots",
            Self::Counter => "Push the number up, one click at a time",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub screen: Screen,
    pub menu_index: usize,
    pub session: Session<'a>,
    pub stats: Statistics,
    /// `None` until a round has been started
    pub balloon: Option<BalloonGame>,
    pub robot: RobotGame,
    pub gradient: Gradient,
    pub dots: DotCanvas,
    pub counter: Counter,
    pub high_scores: HighScores,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Terminal area of the last draw, used for mouse hit-testing
    pub area: Rect,
    rng: StdRng,
    balloon_recorded: bool,
    robot_recorded: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, high_scores: HighScores, mut rng: StdRng) -> Self {
        let session = Session::new(dictionary, &mut rng);

        Self {
            screen: Screen::Menu,
            menu_index: 0,
            session,
            stats: Statistics::default(),
            balloon: None,
            robot: RobotGame::new(),
            gradient: Gradient::default(),
            dots: DotCanvas::new(),
            counter: Counter::new(),
            high_scores,
            messages: vec![Message {
                text: "Welcome to the lab! Pick something to play with.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            area: Rect::default(),
            rng,
            balloon_recorded: false,
            robot_recorded: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Switch to a lab screen
    pub fn open(&mut self, screen: Screen) {
        debug!(?screen, "opening screen");
        self.screen = screen;
        self.messages.clear();

        let intro = match screen {
            Screen::Menu => "Pick a lab with ↑/↓ and Enter, or click it.",
            Screen::Wordle => "Type a guess and press Enter. Esc returns to the lab.",
            Screen::Balloon => "Press 'c' for classic or 't' for a 60 second timed round.",
            Screen::Robot => "Press Enter to start, 'e' to change scenery.",
            Screen::Gradient => "Press 'r' for a new gradient.",
            Screen::Dots => "Click and drag to paint. 'e' toggles the eraser, 'c' clears.",
            Screen::Counter => "Press Space or click the button to count up.",
        };
        self.add_message(intro, MessageStyle::Info);
    }

    /// Leave the current screen for the lab menu
    pub fn back_to_menu(&mut self) {
        match self.screen {
            Screen::Balloon => {
                if let Some(game) = &mut self.balloon {
                    game.end();
                }
                self.record_scores();
            }
            Screen::Robot => self.robot.quit_to_menu(),
            _ => {}
        }
        self.open(Screen::Menu);
    }

    /// Whether an arcade simulation needs ticks
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self.screen {
            Screen::Balloon => self.balloon.as_ref().is_some_and(Simulation::is_running),
            Screen::Robot => self.robot.is_running(),
            _ => false,
        }
    }

    /// Advance the active arcade game by `ticks` fixed steps
    pub fn tick(&mut self, ticks: u32) {
        match self.screen {
            Screen::Balloon => {
                if let Some(game) = &mut self.balloon {
                    drive(game, ticks, &mut self.rng);
                }
            }
            Screen::Robot => drive(&mut self.robot, ticks, &mut self.rng),
            _ => return,
        }
        self.record_scores();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.menu_key(key),
            Screen::Wordle => self.wordle_key(key),
            Screen::Balloon => self.balloon_key(key),
            Screen::Robot => self.robot_key(key),
            Screen::Gradient => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Char('r' | ' ') | KeyCode::Enter => {
                    self.gradient = Gradient::random(&mut self.rng);
                }
                _ => {}
            },
            Screen::Dots => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Char('e') => {
                    let erasing = !self.dots.is_erasing();
                    self.dots.set_erasing(erasing);
                    let mode = if erasing { "Eraser on" } else { "Brush on" };
                    self.add_message(mode, MessageStyle::Info);
                }
                KeyCode::Char('c') => self.dots.clear(),
                _ => {}
            },
            Screen::Counter => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Char(' ' | '+') | KeyCode::Enter | KeyCode::Up => self.increment_counter(),
                _ => {}
            },
        }
    }

    fn increment_counter(&mut self) {
        let count = self.counter.increment();
        debug!(count, "counter incremented");
        self.add_message(INCREMENTED, MessageStyle::Success);
    }

    fn menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_index = (self.menu_index + 1).min(Screen::LABS.len() - 1);
            }
            KeyCode::Enter => self.open(Screen::LABS[self.menu_index]),
            KeyCode::Char(c @ '1'..='6') => {
                self.menu_index = c as usize - '1' as usize;
                self.open(Screen::LABS[self.menu_index]);
            }
            _ => {}
        }
    }

    fn wordle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.back_to_menu();
            return;
        }

        if self.session.outcome().is_over() {
            let restart = key.code == KeyCode::Enter
                || (key.code == KeyCode::Char('n')
                    && key.modifiers.contains(KeyModifiers::CONTROL));
            if restart {
                self.new_word_game();
            }
            return;
        }

        let pressed = match key.code {
            KeyCode::Char(c) => Key::from_char(c),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Enter => Some(Key::Enter),
            _ => None,
        };
        if let Some(pressed) = pressed {
            self.press_key(pressed);
        }
    }

    /// Feed one key to the word game, from the keyboard or an on-screen click
    pub fn press_key(&mut self, key: Key) {
        match self.session.press(key) {
            Ok(Some(submitted)) => match submitted.outcome {
                Outcome::Won => {
                    self.stats.record(Outcome::Won, submitted.turn);
                    self.add_message(celebration(submitted.turn), MessageStyle::Success);
                    self.add_message("Press Enter or Ctrl-N for a new word.", MessageStyle::Info);
                }
                Outcome::Lost => {
                    self.stats.record(Outcome::Lost, submitted.turn);
                    let text = format!("Game over! The word was {}", self.session.secret().display());
                    self.add_message(&text, MessageStyle::Error);
                    self.add_message("Press Enter or Ctrl-N for a new word.", MessageStyle::Info);
                }
                Outcome::InProgress => {}
            },
            Ok(None) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_word_game(&mut self) {
        self.session.restart(&mut self.rng);
        self.messages.clear();
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    fn balloon_key(&mut self, key: KeyEvent) {
        let running = self.balloon.as_ref().is_some_and(Simulation::is_running);
        match key.code {
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Char('c') if !running => self.start_balloons(Mode::Classic),
            KeyCode::Char('t') if !running => self.start_balloons(Mode::Timed),
            KeyCode::Char('e') if running => {
                if let Some(game) = &mut self.balloon {
                    game.end();
                }
                self.record_scores();
            }
            _ => {}
        }
    }

    fn start_balloons(&mut self, mode: Mode) {
        self.balloon = Some(BalloonGame::start(mode));
        self.balloon_recorded = false;
        self.add_message("Pop them! Click balloons, 'e' ends the round.", MessageStyle::Info);
    }

    fn robot_key(&mut self, key: KeyEvent) {
        match self.robot.state() {
            RobotState::Menu => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Enter | KeyCode::Char(' ') => self.start_robot(),
                KeyCode::Char('e') => {
                    self.robot.cycle_environment();
                    let text = format!("Scenery: {}", self.robot.environment());
                    self.add_message(&text, MessageStyle::Info);
                }
                _ => {}
            },
            RobotState::Playing => match key.code {
                KeyCode::Esc => self.robot.quit_to_menu(),
                KeyCode::Char('p') => self.robot.pause(),
                KeyCode::Char(' ') => self.robot.set_heading(Heading::default()),
                code => {
                    if let Some(heading) = steer(self.robot.heading(), code) {
                        self.robot.set_heading(heading);
                    }
                }
            },
            RobotState::Paused => match key.code {
                KeyCode::Esc => self.robot.quit_to_menu(),
                KeyCode::Char('p') => self.robot.resume(),
                _ => {}
            },
            RobotState::GameOver => match key.code {
                KeyCode::Esc => self.robot.quit_to_menu(),
                KeyCode::Enter => self.start_robot(),
                _ => {}
            },
        }
    }

    fn start_robot(&mut self) {
        self.robot.start();
        self.robot_recorded = false;
        self.add_message(
            "Arrows or WASD steer, Space stops, 'p' pauses. Watch out for ghosts!",
            MessageStyle::Info,
        );
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let frame = layout::frame(self.area);
        let (column, row) = (mouse.column, mouse.row);

        match (self.screen, mouse.kind) {
            (Screen::Menu, MouseEventKind::Down(MouseButton::Left)) => {
                let list = layout::inner(frame.body);
                if let Some(index) = layout::menu_entry(list, column, row, Screen::LABS.len()) {
                    self.menu_index = index;
                    self.open(Screen::LABS[index]);
                }
            }
            (Screen::Wordle, MouseEventKind::Down(MouseButton::Left)) => {
                let keyboard = layout::inner(layout::wordle(frame.body).keyboard);
                if let Some(key) = layout::key_at(keyboard, column, row) {
                    if self.session.outcome().is_over() {
                        if key == Key::Enter {
                            self.new_word_game();
                        }
                    } else {
                        self.press_key(key);
                    }
                }
            }
            (Screen::Balloon, MouseEventKind::Down(MouseButton::Left)) => {
                let canvas = layout::inner(frame.body);
                let Some((x, y)) = layout::field_point(canvas, column, row) else {
                    return;
                };
                if let Some(pop) = self.balloon.as_mut().and_then(|game| game.click(x, y))
                    && pop.kind != BalloonKind::Standard
                {
                    let style = if pop.points < 0 {
                        MessageStyle::Error
                    } else {
                        MessageStyle::Success
                    };
                    self.add_message(&pop.message(), style);
                }
            }
            (Screen::Counter, MouseEventKind::Down(MouseButton::Left)) => {
                if layout::counter_button(frame.body).contains(Position::new(column, row)) {
                    self.increment_counter();
                }
            }
            (Screen::Dots, kind) => {
                let grid = layout::dot_grid(frame.body);
                match kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some((r, c)) = layout::dot_cell(grid, column, row) {
                            self.dots.press(r, c);
                        }
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        if let Some((r, c)) = layout::dot_cell(grid, column, row) {
                            self.dots.drag(r, c);
                        }
                    }
                    MouseEventKind::Up(MouseButton::Left) => self.dots.release(),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// Submit final arcade scores once per finished round
    fn record_scores(&mut self) {
        if let Some(game) = &self.balloon
            && !game.is_running()
            && !self.balloon_recorded
        {
            let score = game.score();
            self.balloon_recorded = true;
            self.submit_score(BALLOON_FRENZY, score);
        }

        if self.robot.state() == RobotState::GameOver && !self.robot_recorded {
            let score = i64::try_from(self.robot.score()).unwrap_or(i64::MAX);
            self.robot_recorded = true;
            self.add_message("Caught by a ghost! Press Enter to try again.", MessageStyle::Error);
            self.submit_score(RUNAWAY_ROBOT, score);
        }
    }

    fn submit_score(&mut self, game: &str, score: i64) {
        info!(game, score, "round finished");
        self.add_message(&format!("Final score: {score}"), MessageStyle::Info);

        if self.high_scores.submit(game, score) {
            self.add_message("🏆 New high score!", MessageStyle::Success);
            if let Err(err) = self.high_scores.save() {
                warn!(%err, "could not save high scores");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }
}

/// Apply an arrow or WASD key to the held heading; opposite directions cancel
fn steer(mut heading: Heading, code: KeyCode) -> Option<Heading> {
    let code = match code {
        KeyCode::Char('w' | 'W') => KeyCode::Up,
        KeyCode::Char('a' | 'A') => KeyCode::Left,
        KeyCode::Char('s' | 'S') => KeyCode::Down,
        KeyCode::Char('d' | 'D') => KeyCode::Right,
        other => other,
    };
    match code {
        KeyCode::Up => {
            heading.up = true;
            heading.down = false;
        }
        KeyCode::Down => {
            heading.down = true;
            heading.up = false;
        }
        KeyCode::Left => {
            heading.left = true;
            heading.right = false;
        }
        KeyCode::Right => {
            heading.right = true;
            heading.left = false;
        }
        _ => return None,
    }
    Some(heading)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("terminal ready");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("terminal restored");

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut step = FixedStep::default();
    let mut last = Instant::now();

    loop {
        let size = terminal.size()?;
        app.area = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = if app.is_animating() {
            step.until_next()
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now - last;
        last = now;
        if app.is_animating() {
            let ticks = step.advance(elapsed);
            app.tick(ticks);
        } else {
            step.reset();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
