//! Simple interactive CLI mode
//!
//! Line-oriented word game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{GameError, MAX_GUESSES, Outcome, Session, Statistics, Submitted, celebration};
use crate::output::{print_evaluation, print_keyboard};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Replace the in-progress guess with `word` and submit it
///
/// # Errors
///
/// Returns [`GameError::IncompleteGuess`] for words of the wrong length
/// (longer words included) and any error from [`Session::submit_guess`].
pub fn enter_word(session: &mut Session, word: &str) -> Result<Submitted, GameError> {
    let length = word.chars().count();
    if length > WORD_LENGTH {
        return Err(GameError::IncompleteGuess { length });
    }
    while session.remove_last_letter() {}
    for ch in word.chars() {
        session.append_letter(ch);
    }
    session.submit_guess()
}

/// Run the simple interactive CLI mode
///
/// Reads guesses from `input` until it is exhausted or the player quits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, W>(
    session: &mut Session,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> Result<Statistics>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut stats = Statistics::default();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Wordly Wonders - Simple Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new word\n")?;

    loop {
        if session.outcome().is_over() {
            report_outcome(session, out)?;
            stats.record(session.outcome(), session.ledger().len());

            let answer = prompt(input, out, "Play again? (yes/no)")?;
            match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    session.restart(rng);
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => break,
            }
        }

        let label = format!("Guess {}/{MAX_GUESSES}", session.ledger().len() + 1);
        let Some(line) = prompt(input, out, &label)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.restart(rng);
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            word => match enter_word(session, word) {
                Ok(_) => print_board(session, out)?,
                Err(err) => writeln!(out, "❌ {err}\n")?,
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn print_board<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out)?;
    for entry in session.ledger() {
        print_evaluation(out, &entry.guess, &entry.evaluation)?;
    }
    writeln!(out)?;
    print_keyboard(out, session.letters())?;
    writeln!(out)?;
    Ok(())
}

fn report_outcome<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let turn = session.ledger().len();
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    match session.outcome() {
        Outcome::Won => {
            writeln!(out, "  {}", celebration(turn).bright_green().bold())?;
            writeln!(
                out,
                "  Solved in {} {}",
                turn.to_string().bright_cyan().bold(),
                if turn == 1 { "guess" } else { "guesses" }
            )?;
        }
        Outcome::Lost | Outcome::InProgress => {
            writeln!(
                out,
                "  {} The word was {}",
                "Game Over!".red().bold(),
                session.secret().display().bright_yellow().bold()
            )?;
        }
    }
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
