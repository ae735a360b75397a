//! Runtime configuration resolved from command-line flags and environment

use crate::arcade::HighScores;
use crate::wordlists::{Dictionary, loader::load_from_file};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::convert::Infallible;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable overriding the high score file location
pub const SCORES_ENV: &str = "INTERACTIVE_LAB_SCORES";

const SCORES_DIR: &str = ".interactive_lab";
const SCORES_FILE: &str = "scores.json";

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    Embedded,
    File(PathBuf),
}

impl FromStr for WordlistSource {
    type Err = Infallible;

    /// "embedded" selects the built-in list; anything else is a path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

#[derive(Debug, Clone)]
pub struct LabConfig {
    pub wordlist: WordlistSource,
    pub scores_path: PathBuf,
    /// Fixed RNG seed for reproducible secrets and spawns
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Embedded,
            scores_path: default_scores_path(),
            seed: None,
            log_file: None,
        }
    }
}

impl LabConfig {
    /// Build the dictionary named by the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a word list file cannot be read or yields no
    /// valid words.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let dictionary = match &self.wordlist {
            WordlistSource::Embedded => Dictionary::embedded()?,
            WordlistSource::File(path) => {
                let words = load_from_file(path)
                    .with_context(|| format!("reading word list {}", path.display()))?;
                Dictionary::new(words)
                    .with_context(|| format!("word list {}", path.display()))?
            }
        };
        tracing::info!(words = dictionary.len(), source = ?self.wordlist, "dictionary loaded");
        Ok(dictionary)
    }

    /// Random source: seeded when a seed is configured, OS entropy otherwise
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Open the high score store
    ///
    /// # Errors
    ///
    /// Returns an error if an existing score file cannot be read or parsed.
    pub fn high_scores(&self) -> Result<HighScores> {
        HighScores::load(&self.scores_path)
            .with_context(|| format!("loading high scores from {}", self.scores_path.display()))
    }
}

/// `$HOME/.interactive_lab/scores.json`, or the working directory without `HOME`
#[must_use]
pub fn default_scores_path() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(SCORES_DIR)
        .join(SCORES_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Write;

    #[test]
    fn wordlist_source_parses() {
        assert_eq!(
            "embedded".parse::<WordlistSource>(),
            Ok(WordlistSource::Embedded)
        );
        assert_eq!(
            "words.txt".parse::<WordlistSource>(),
            Ok(WordlistSource::File(PathBuf::from("words.txt")))
        );
    }

    #[test]
    fn default_scores_path_ends_in_lab_dir() {
        let path = default_scores_path();
        assert!(path.ends_with(".interactive_lab/scores.json"));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = LabConfig {
            seed: Some(99),
            ..LabConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn dictionary_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();
        let config = LabConfig {
            wordlist: WordlistSource::File(file.path().to_path_buf()),
            ..LabConfig::default()
        };
        assert_eq!(config.dictionary().unwrap().len(), 2);
    }

    #[test]
    fn dictionary_from_file_without_words_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = LabConfig {
            wordlist: WordlistSource::File(file.path().to_path_buf()),
            ..LabConfig::default()
        };
        assert!(config.dictionary().is_err());
    }
}
