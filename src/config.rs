//! Board configuration: which descriptor files to read and which extra edges to add.
//!
//! Values come from a TOML file, overridden by `CLUE_BOARD_*` environment variables:
//!
//! ```toml
//! tiles = "tiles.csv"
//! doors = "doors.csv"
//! variant = "archers-avenue"
//! shortcuts = [[1, 4]]
//! ```

use std::path::{Path, PathBuf};
use std::{fs, io};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;
use strum_macros::AsRefStr;
use tracing::debug;

use crate::constants::ARCHERS_AVENUE_SHORTCUTS;
use crate::error::{BoardError, BoardResult};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CLUE_BOARD_";

/// Which board variant to build. Variants differ only in the shortcuts they add.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BoardVariant {
    #[default]
    Standard,
    ArchersAvenue,
}

impl BoardVariant {
    /// Shortcuts implied by the variant, as 0-based room id pairs.
    pub fn shortcuts(self) -> &'static [(usize, usize)] {
        match self {
            BoardVariant::Standard => &[],
            BoardVariant::ArchersAvenue => &ARCHERS_AVENUE_SHORTCUTS,
        }
    }
}

/// Where a board comes from and how it is adjusted after construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Path to the tile descriptor.
    pub tiles: PathBuf,
    /// Path to the door descriptor.
    pub doors: PathBuf,
    #[serde(default)]
    pub variant: BoardVariant,
    /// Extra shortcuts, as 0-based room id pairs, added after the variant's own.
    #[serde(default)]
    pub shortcuts: Vec<(usize, usize)>,
}

impl BoardConfig {
    /// A standard-variant configuration with no extra shortcuts.
    pub fn new(tiles: impl Into<PathBuf>, doors: impl Into<PathBuf>) -> Self {
        BoardConfig {
            tiles: tiles.into(),
            doors: doors.into(),
            variant: BoardVariant::default(),
            shortcuts: Vec::new(),
        }
    }

    /// The providers [`BoardConfig::load`] reads from, lowest precedence first.
    ///
    /// The file is read from exactly `path`; parent directories are not searched.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Toml::file_exact(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads a configuration file, applying environment overrides.
    ///
    /// Relative descriptor paths are resolved against the directory holding the file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ConfigUnavailable`] if the file cannot be found or read, and
    /// [`BoardError::Config`] if the merged values do not describe a valid configuration, for
    /// instance when `tiles` is missing or `variant` is unknown.
    pub fn load(path: impl AsRef<Path>) -> BoardResult<BoardConfig> {
        let path = path.as_ref();
        let unavailable = |source| BoardError::ConfigUnavailable {
            path: path.to_path_buf(),
            source,
        };
        if !fs::metadata(path).map_err(unavailable)?.is_file() {
            return Err(unavailable(io::Error::new(io::ErrorKind::InvalidInput, "not a file")));
        }

        let mut config: BoardConfig = Self::figment(path).extract()?;

        if let Some(base) = path.parent() {
            config.tiles = resolve(base, &config.tiles);
            config.doors = resolve(base, &config.doors);
        }

        debug!(
            path = %path.display(),
            tiles = %config.tiles.display(),
            doors = %config.doors.display(),
            variant = config.variant.as_ref(),
            "Loaded board configuration"
        );
        Ok(config)
    }

    /// Every shortcut to add: the variant's first, then the configured ones.
    pub fn shortcuts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.variant.shortcuts().iter().chain(&self.shortcuts).copied()
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}
