//! High scores, one number per game, persisted as a JSON object

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage key for Balloon Frenzy
pub const BALLOON_FRENZY: &str = "balloon-frenzy";

/// Storage key for Runaway Robot
pub const RUNAWAY_ROBOT: &str = "runaway-robot";

#[derive(Debug)]
pub enum ScoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "High score file I/O failed: {err}"),
            Self::Parse(err) => write!(f, "High score file is malformed: {err}"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for ScoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct ScoreTable(BTreeMap<String, u64>);

/// High-score store bound to a file
#[derive(Debug, Clone)]
pub struct HighScores {
    path: PathBuf,
    table: ScoreTable,
}

impl HighScores {
    /// Load scores from `path`; a missing file yields an empty store
    ///
    /// # Errors
    /// Returns [`ScoreError`] if the file exists but cannot be read or parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ScoreError> {
        let path = path.into();
        let table = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no high score file yet");
                ScoreTable::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, table })
    }

    /// Best recorded score for a game (0 if none)
    #[must_use]
    pub fn best(&self, game: &str) -> u64 {
        self.table.0.get(game).copied().unwrap_or(0)
    }

    /// Offer a final score; returns `true` if it is a new record
    ///
    /// Scores of zero or below never count as records.
    pub fn submit(&mut self, game: &str, score: i64) -> bool {
        let Ok(score) = u64::try_from(score) else {
            return false;
        };
        if score == 0 || score <= self.best(game) {
            return false;
        }
        self.table.0.insert(game.to_string(), score);
        info!(game, score, "new high score");
        true
    }

    /// Write the store back to its file, creating parent directories
    ///
    /// # Errors
    /// Returns [`ScoreError::Io`] if the file cannot be written.
    pub fn save(&self) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.table)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "high scores saved");
        Ok(())
    }

    /// All recorded scores, sorted by game name
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.table.0.iter().map(|(game, &score)| (game.as_str(), score))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
