//! TUI rendering with ratatui
//!
//! One body renderer per screen; header, messages and status bar are shared.

use super::app::{App, MessageStyle, Screen};
use super::layout;
use crate::arcade::balloon::{BalloonKind, FIELD_HEIGHT, FIELD_WIDTH};
use crate::arcade::robot::{COIN_RADIUS, ROBOT_RADIUS};
use crate::arcade::scores::{BALLOON_FRENZY, RUNAWAY_ROBOT};
use crate::arcade::{Environment, Mode, RobotState, Simulation};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{MAX_GUESSES, Outcome};
use crate::keyboard;
use crate::toys::dots::GRID_SIZE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, Paragraph,
        canvas::{Canvas, Circle, Context},
    },
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let frame = layout::frame(f.area());

    render_header(f, app, frame.header);

    match app.screen {
        Screen::Menu => render_menu(f, app, frame.body),
        Screen::Wordle => render_wordle(f, app, frame.body),
        Screen::Balloon => render_balloons(f, app, frame.body),
        Screen::Robot => render_robot(f, app, frame.body),
        Screen::Gradient => render_gradient(f, app, frame.body),
        Screen::Dots => render_dots(f, app, frame.body),
        Screen::Counter => render_counter(f, app, frame.body),
    }

    render_messages(f, app, frame.messages);
    render_status(f, app, frame.status);
}

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Menu => "🧪 INTERACTIVE LAB".to_string(),
        screen => format!("🧪 INTERACTIVE LAB - {}", screen.title()),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Screen::LABS
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let selected = i == app.menu_index;
            let marker = if selected { "▶" } else { " " };
            let name_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::raw(format!("{marker} {}. ", i + 1)),
                Span::styled(format!("{:<20}", screen.title()), name_style),
                Span::styled(screen.blurb(), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "High scores",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    for (name, key) in [
        (Screen::Balloon.title(), BALLOON_FRENZY),
        (Screen::Robot.title(), RUNAWAY_ROBOT),
    ] {
        lines.push(Line::from(format!(
            "  🏆 {name:<18} {}",
            app.high_scores.best(key)
        )));
    }

    let menu = Paragraph::new(lines).block(bordered(" Labs ".to_string()));
    f.render_widget(menu, area);
}

fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: u8, verdict: Option<Verdict>) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!(" {} ", char::from(letter).to_ascii_uppercase()),
            verdict_style(verdict),
        ),
        Span::raw(" "),
    ]
}

fn empty_tile() -> [Span<'static>; 2] {
    [
        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]
}

fn render_wordle(f: &mut Frame, app: &App, area: Rect) {
    let regions = layout::wordle(area);
    let session = &app.session;

    let mut lines: Vec<Line> = session
        .ledger()
        .iter()
        .map(|entry| {
            Line::from(
                entry
                    .guess
                    .chars()
                    .iter()
                    .zip(entry.evaluation.verdicts())
                    .flat_map(|(&letter, &verdict)| tile(letter, Some(verdict)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if !session.outcome().is_over() {
        let typed = session.current_guess().as_bytes();
        let row: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| match typed.get(i) {
                Some(&letter) => tile(letter, None),
                None => empty_tile(),
            })
            .collect();
        lines.push(Line::from(row));
    }
    while lines.len() < MAX_GUESSES {
        lines.push(Line::from(
            (0..WORD_LENGTH).flat_map(|_| empty_tile()).collect::<Vec<_>>(),
        ));
    }

    let footer = match session.outcome() {
        Outcome::InProgress => Span::styled(
            format!("{} guesses left", session.guesses_left()),
            Style::default().fg(Color::DarkGray),
        ),
        Outcome::Won => Span::styled(
            "🎉 Solved! Enter for a new word",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Outcome::Lost => Span::styled(
            format!("The word was {}", session.secret().display()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    lines.push(Line::from(""));
    lines.push(Line::from(footer));

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(" Board ".to_string()));
    f.render_widget(board, regions.board);

    f.render_widget(bordered(" Keyboard ".to_string()), regions.keyboard);
    for (cell, key) in layout::keyboard_cells(layout::inner(regions.keyboard)) {
        let style = match keyboard::key_status(session.letters(), key) {
            None => Style::default().fg(Color::Black).bg(Color::Gray),
            verdict => verdict_style(verdict),
        };
        let cap = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(cap, cell);
    }
}

/// Field y grows downward; canvas y grows upward
fn flip(y: f64) -> f64 {
    FIELD_HEIGHT - y
}

fn balloon_color(kind: BalloonKind) -> Color {
    match kind {
        BalloonKind::Standard => Color::Red,
        BalloonKind::Golden => Color::Yellow,
        BalloonKind::Black => Color::Gray,
        BalloonKind::Timer => Color::Cyan,
        BalloonKind::Bomb => Color::Magenta,
    }
}

fn print_centered(ctx: &mut Context, y: f64, text: String) {
    let x = FIELD_WIDTH / 2.0 - text.chars().count() as f64 * 4.0;
    ctx.print(x.max(0.0), y, Line::from(text));
}

fn render_balloons(f: &mut Frame, app: &App, area: Rect) {
    let best = app.high_scores.best(BALLOON_FRENZY);

    let title = match &app.balloon {
        None => " Balloon Frenzy ".to_string(),
        Some(game) => {
            let clock = match game.mode() {
                Mode::Timed => format!(" | ⏱ {}s", game.time_left()),
                Mode::Classic => String::new(),
            };
            format!(
                " Score {} | Combo x{}{clock} | Best {best} ",
                game.score(),
                game.combo()
            )
        }
    };

    let canvas = Canvas::default()
        .block(bordered(title))
        .marker(Marker::Braille)
        .x_bounds([0.0, FIELD_WIDTH])
        .y_bounds([0.0, FIELD_HEIGHT])
        .paint(|ctx| match &app.balloon {
            None => {
                print_centered(ctx, FIELD_HEIGHT / 2.0, "🎈 Balloon Frenzy 🎈".to_string());
                print_centered(
                    ctx,
                    FIELD_HEIGHT / 2.0 - 60.0,
                    "'c' classic   't' timed (60s)".to_string(),
                );
            }
            Some(game) => {
                for balloon in game.balloons() {
                    let radius = balloon.size / 2.0;
                    ctx.draw(&Circle {
                        x: balloon.x + radius,
                        y: flip(balloon.y + radius),
                        radius,
                        color: balloon_color(balloon.kind),
                    });
                }
                if !game.is_running() {
                    ctx.layer();
                    print_centered(
                        ctx,
                        FIELD_HEIGHT / 2.0,
                        format!("Round over! Score: {}", game.score()),
                    );
                    print_centered(
                        ctx,
                        FIELD_HEIGHT / 2.0 - 60.0,
                        "'c' classic   't' timed   Esc back".to_string(),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

fn environment_color(environment: Environment) -> Color {
    match environment {
        Environment::Jungle => Color::Rgb(12, 48, 18),
        Environment::Neon => Color::Rgb(40, 0, 56),
        Environment::Space => Color::Black,
    }
}

fn render_robot(f: &mut Frame, app: &App, area: Rect) {
    let robot = &app.robot;
    let upgrades = robot.upgrades();

    let mut badges = String::new();
    if upgrades.shield {
        badges.push_str(" 🛡");
    }
    if upgrades.speed_boost {
        badges.push_str(" ⚡");
    }
    let title = format!(
        " Score {} | Coins {} | Ghosts {}{badges} | Best {} | {} ",
        robot.score(),
        robot.coins_collected(),
        robot.ghosts().len(),
        app.high_scores.best(RUNAWAY_ROBOT),
        robot.environment()
    );

    let canvas = Canvas::default()
        .block(bordered(title))
        .marker(Marker::Braille)
        .background_color(environment_color(robot.environment()))
        .x_bounds([0.0, FIELD_WIDTH])
        .y_bounds([0.0, FIELD_HEIGHT])
        .paint(|ctx| {
            for coin in robot.coins() {
                ctx.draw(&Circle {
                    x: coin.x,
                    y: flip(coin.y),
                    radius: COIN_RADIUS,
                    color: Color::Yellow,
                });
            }
            for ghost in robot.ghosts() {
                ctx.draw(&Circle {
                    x: ghost.position.x,
                    y: flip(ghost.position.y),
                    radius: ROBOT_RADIUS,
                    color: Color::Gray,
                });
            }
            let position = robot.position();
            ctx.draw(&Circle {
                x: position.x,
                y: flip(position.y),
                radius: ROBOT_RADIUS,
                color: if upgrades.shield {
                    Color::Cyan
                } else {
                    Color::Green
                },
            });

            let banner = match robot.state() {
                RobotState::Playing => None,
                RobotState::Menu => Some("🤖 Enter to start   'e' scenery   Esc back"),
                RobotState::Paused => Some("⏸ Paused   'p' resume   Esc menu"),
                RobotState::GameOver => Some("💀 Game over!   Enter to retry   Esc menu"),
            };
            if let Some(banner) = banner {
                ctx.layer();
                print_centered(ctx, FIELD_HEIGHT - 60.0, banner.to_string());
            }
        });

    f.render_widget(canvas, area);
}

fn render_gradient(f: &mut Frame, app: &App, area: Rect) {
    let inner = layout::inner(area);
    let width = usize::from(inner.width);
    let swatch_rows = usize::from(inner.height.saturating_sub(3));

    let swatch: Vec<Span> = (0..width)
        .map(|i| {
            let t = if width > 1 {
                i as f64 / (width - 1) as f64
            } else {
                0.0
            };
            let colour = app.gradient.sample(t);
            Span::styled(" ", Style::default().bg(Color::Rgb(colour.0, colour.1, colour.2)))
        })
        .collect();

    let mut lines: Vec<Line> = (0..swatch_rows)
        .map(|_| Line::from(swatch.clone()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.gradient.css(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines).block(bordered(" Gradient ".to_string()));
    f.render_widget(paragraph, area);
}

fn render_dots(f: &mut Frame, app: &App, area: Rect) {
    let mode = if app.dots.is_erasing() {
        "eraser"
    } else {
        "brush"
    };
    let title = format!(" Dot Canvas | {mode} | {} dots ", app.dots.filled());
    f.render_widget(bordered(title), area);

    let lines: Vec<Line> = (0..GRID_SIZE)
        .map(|row| {
            Line::from(
                (0..GRID_SIZE)
                    .map(|col| {
                        if app.dots.is_set(row, col) {
                            Span::styled("● ", Style::default().fg(Color::Cyan))
                        } else {
                            Span::styled("· ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    f.render_widget(Paragraph::new(lines), layout::dot_grid(area));
}

fn render_counter(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(bordered(" Counter ".to_string()), area);
    let inner = layout::inner(area);

    let count = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            app.counter.formatted(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(count, Rect { height: inner.height.min(3), ..inner });

    let button = Paragraph::new("▲ Increment Counter")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(button, layout::counter_button(area));

    let note_area = Rect {
        y: inner.y + 8,
        height: 1,
        ..inner
    }
    .intersection(inner);
    if !note_area.is_empty() {
        let note = Paragraph::new("Every click counts. Keep it going!")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(note, note_area);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let help_text = match app.screen {
        Screen::Menu => "↑/↓: Select | Enter: Open | 1-6: Jump | q: Quit",
        Screen::Wordle if app.session.outcome().is_over() => {
            "Enter/Ctrl-N: New Word | Esc: Back"
        }
        Screen::Wordle => "A-Z: Type | Enter: Submit | Backspace: Delete | Esc: Back",
        Screen::Balloon => "Click: Pop | c/t: New Round | e: End | Esc: Back",
        Screen::Robot => "Arrows/WASD: Steer | Space: Stop | p: Pause | Esc: Menu",
        Screen::Gradient => "r: Regenerate | Esc: Back",
        Screen::Dots => "Drag: Paint | e: Eraser | c: Clear | Esc: Back",
        Screen::Counter => "Space/Enter/Click: Increment | Esc: Back",
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Right);
    f.render_widget(stats, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arcade::HighScores;
    use crate::core::Word;
    use crate::game::Session;
    use crate::wordlists::{Dictionary, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn with_app(check: impl FnOnce(&mut App)) {
        let dict = Dictionary::new(words_from_slice(&["crane", "slate"])).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let scores = HighScores::load(dir.path().join("scores.json")).unwrap();
        let mut app = App::new(&dict, scores, StdRng::seed_from_u64(3));
        app.session = Session::with_secret(&dict, Word::new("crane").unwrap());
        check(&mut app);
    }

    #[test]
    fn menu_lists_every_lab() {
        with_app(|app| {
            let text = screen_text(app);
            for screen in Screen::LABS {
                assert!(text.contains(screen.title()), "{} missing", screen.title());
            }
        });
    }

    #[test]
    fn wordle_board_shows_guesses_and_keyboard() {
        with_app(|app| {
            app.open(Screen::Wordle);
            for ch in "slate".chars() {
                app.session.append_letter(ch);
            }
            app.session.submit_guess().unwrap();
            app.session.append_letter('c');

            let text = screen_text(app);
            assert!(text.contains(" S   L   A   T   E "));
            assert!(text.contains(" C "));
            assert!(text.contains("ENTER"));
            assert!(text.contains("5 guesses left"));
        });
    }

    #[test]
    fn lost_board_reveals_secret() {
        with_app(|app| {
            app.open(Screen::Wordle);
            for _ in 0..MAX_GUESSES {
                for ch in "slate".chars() {
                    app.session.append_letter(ch);
                }
                app.session.submit_guess().unwrap();
            }
            assert!(screen_text(app).contains("The word was CRANE"));
        });
    }

    #[test]
    fn gradient_screen_shows_css() {
        with_app(|app| {
            app.open(Screen::Gradient);
            assert!(screen_text(app).contains("linear-gradient(45deg, #FF5F6D, #FFC371)"));
        });
    }

    #[test]
    fn counter_screen_shows_grouped_count_and_button() {
        with_app(|app| {
            app.open(Screen::Counter);
            for _ in 0..1_234 {
                app.counter.increment();
            }
            let text = screen_text(app);
            assert!(text.contains("1,234"));
            assert!(text.contains("Increment Counter"));
        });
    }

    #[test]
    fn dots_screen_draws_painted_cells() {
        with_app(|app| {
            app.open(Screen::Dots);
            app.dots.press(0, 0);
            app.dots.release();
            assert!(screen_text(app).contains("● · "));
        });
    }
}
