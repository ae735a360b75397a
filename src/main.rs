//! Interactive Lab - CLI
//!
//! Word game, arcade games and toys with TUI and plain CLI modes.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use interactive_lab::{
    commands::{check_guess, run_simple},
    config::{LabConfig, SCORES_ENV, WordlistSource, default_scores_path},
    game::Session,
    interactive::{App, Screen, run_tui},
    logging,
    output::{print_check_result, print_gradient, print_scores, print_statistics},
    toys::Gradient,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "interactive_lab",
    about = "A word game, two arcade games and a couple of toys for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordlistSource,

    /// High score file (default: ~/.interactive_lab/scores.json)
    #[arg(long, global = true, env = SCORES_ENV)]
    scores_file: Option<PathBuf>,

    /// Seed the random source for reproducible secrets and spawns
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Append info-level logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lab menu TUI (default)
    Lab,

    /// Word game TUI
    Play,

    /// Word game in plain CLI mode (no TUI)
    Simple,

    /// Score one guess against a secret
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Print a random CSS gradient
    Gradient,

    /// Show recorded high scores
    Scores,
}

impl Cli {
    fn config(&self) -> LabConfig {
        LabConfig {
            wordlist: self.wordlist.clone(),
            scores_path: self.scores_file.clone().unwrap_or_else(default_scores_path),
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init(config.log_file.as_deref())?;

    // Default to the lab menu if no command given
    let command = cli.command.unwrap_or(Commands::Lab);

    match command {
        Commands::Lab => run_lab_command(&config, Screen::Menu),
        Commands::Play => run_lab_command(&config, Screen::Wordle),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { guess, secret } => run_check_command(&config, &guess, &secret),
        Commands::Gradient => {
            let gradient = Gradient::random(&mut config.rng());
            print_gradient(&gradient);
            Ok(())
        }
        Commands::Scores => {
            print_scores(&config.high_scores()?);
            Ok(())
        }
    }
}

fn run_lab_command(config: &LabConfig, screen: Screen) -> Result<()> {
    let dictionary = config.dictionary()?;
    let high_scores = config.high_scores()?;

    let mut app = App::new(&dictionary, high_scores, config.rng());
    if screen != Screen::Menu {
        app.open(screen);
    }
    run_tui(app)
}

fn run_simple_command(config: &LabConfig) -> Result<()> {
    let dictionary = config.dictionary()?;
    let mut rng = config.rng();
    let mut session = Session::new(&dictionary, &mut rng);

    let stdin = io::stdin();
    let stats = run_simple(&mut session, &mut rng, &mut stdin.lock(), &mut io::stdout())?;
    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_check_command(config: &LabConfig, guess: &str, secret: &str) -> Result<()> {
    let dictionary = config.dictionary()?;
    let result = check_guess(guess, secret, &dictionary).map_err(|e| anyhow!(e))?;
    print_check_result(&result)?;
    Ok(())
}
