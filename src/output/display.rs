//! Display functions for command results

use super::formatters::{create_progress_bar, tile, tile_row};
use crate::arcade::HighScores;
use crate::commands::CheckResult;
use crate::core::{Evaluation, LetterStatusMap, Word};
use crate::game::{MAX_GUESSES, Statistics};
use crate::keyboard::{self, Key};
use crate::toys::Gradient;
use colored::Colorize;
use std::io::{self, Write};

/// Write one evaluated guess as tiles and emoji
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_evaluation<W: Write>(
    out: &mut W,
    guess: &Word,
    evaluation: &Evaluation,
) -> io::Result<()> {
    writeln!(out, "  {}  {}", tile_row(guess, evaluation), evaluation.to_emoji())
}

/// Print the result of checking one guess
///
/// # Errors
/// Returns any error from writing to stdout.
pub fn print_check_result(result: &CheckResult) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(
        out,
        " {} {} vs {}",
        "CHECK".bright_cyan().bold(),
        result.guess.display().bright_white().bold(),
        result.secret.display().bright_black()
    )?;
    writeln!(out, "{}\n", "═".repeat(40).cyan())?;

    print_evaluation(&mut out, &result.guess, &result.evaluation)?;
    writeln!(
        out,
        "\n  {} correct, {} present",
        result.correct().to_string().green().bold(),
        result.present().to_string().yellow().bold()
    )?;
    if !result.in_word_list {
        writeln!(
            out,
            "  {}",
            format!("{} is not in the word list", result.guess.display()).bright_black()
        )?;
    }
    writeln!(out)?;
    print_keyboard(&mut out, &result.letters)?;
    writeln!(out)
}

/// Write the letter keys coloured by status, one staggered line per row
///
/// Enter and Backspace have no status and are left out.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_keyboard<W: Write>(out: &mut W, letters: &LetterStatusMap) -> io::Result<()> {
    for (i, row) in keyboard::project(letters).into_iter().enumerate() {
        let keys: String = row
            .into_iter()
            .filter_map(|(key, status)| match key {
                Key::Letter(letter) => Some(tile(letter, status).to_string()),
                Key::Enter | Key::Backspace => None,
            })
            .collect();
        writeln!(out, "  {}{keys}", " ".repeat(i * 2))?;
    }
    Ok(())
}

/// Print a gradient's CSS with a truecolor swatch
pub fn print_gradient(gradient: &Gradient) {
    const SWATCH_WIDTH: usize = 40;

    let swatch: String = (0..SWATCH_WIDTH)
        .map(|i| {
            let colour = gradient.sample(i as f64 / (SWATCH_WIDTH - 1) as f64);
            " ".on_truecolor(colour.0, colour.1, colour.2).to_string()
        })
        .collect();

    println!("\n  {swatch}");
    println!("  {swatch}");
    println!("\n  {}", gradient.css().bright_white());
    println!(
        "  {} {}  {} {}  {} {}°\n",
        "from".bright_black(),
        gradient.from,
        "to".bright_black(),
        gradient.to,
        "angle".bright_black(),
        gradient.angle
    );
}

/// Print every recorded high score
pub fn print_scores(scores: &HighScores) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "HIGH SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    let mut any = false;
    for (game, score) in scores.iter() {
        any = true;
        println!("  🏆 {game:<20} {}", score.to_string().bright_yellow().bold());
    }
    if !any {
        println!("  No high scores yet.");
    }
    println!("\n  {}\n", scores.path().display().to_string().bright_black());
}

/// Print word game statistics with the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!(
        "   Played: {}  Won: {}  Win rate: {:.0}%  Streak: {} (max {})",
        stats.total_games,
        stats.games_won,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for guesses in 1..=MAX_GUESSES {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}
