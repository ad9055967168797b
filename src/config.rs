use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::store::{BoardStore, Intent};
use crate::board::Board;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("board title must not be empty")]
    EmptyTitle,
}

/// Startup settings, read once from an optional TOML file. Never written back.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub board: BoardSection,
    pub lists: Vec<SeedList>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoardSection {
    pub title: String,
    /// Ask before deleting a list or card.
    pub confirm_delete: bool,
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            title: "Board".to_string(),
            confirm_delete: true,
        }
    }
}

/// A list to put on the board at startup.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedList {
    pub title: String,
    pub cards: Vec<String>,
}

impl Config {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        Ok(())
    }

    /// Build the initial store. Seeds go through the same intents as user
    /// input, so blank titles and texts are skipped.
    pub fn build_store(&self) -> BoardStore {
        let mut store = BoardStore::new(Board::new(self.board.title.clone()));
        for seed in &self.lists {
            if store.dispatch(Intent::AddList { title: seed.title.clone() }).is_err() {
                continue;
            }
            let Some(list) = store.board().lists.last().map(|l| l.id) else {
                continue;
            };
            for text in &seed.cards {
                let _ = store.dispatch(Intent::AddCard { list, text: text.clone() });
            }
        }
        store
    }
}
