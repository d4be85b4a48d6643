use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::game::types::{Difficulty, Statistics};

const SETTINGS_FILE: &str = "settings.json";
const STATISTICS_FILE: &str = "statistics.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Platform config directory for the game, or the current directory when the
/// platform has none.
pub fn config_dir() -> io::Result<PathBuf> {
    match ProjectDirs::from("io.github", "tictactoe", "TicTacToe") {
        Some(dirs) => Ok(dirs.config_dir().to_path_buf()),
        None => std::env::current_dir(),
    }
}

pub fn load_settings(dir: &Path) -> Settings {
    load_or_default(&dir.join(SETTINGS_FILE))
}

pub fn save_settings(dir: &Path, s: &Settings) -> io::Result<()> {
    save(dir, SETTINGS_FILE, s)
}

pub fn load_statistics(dir: &Path) -> Statistics {
    load_or_default(&dir.join(STATISTICS_FILE))
}

pub fn save_statistics(dir: &Path, st: &Statistics) -> io::Result<()> {
    save(dir, STATISTICS_FILE, st)
}

/// Missing or unreadable files fall back to the default value.
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.is_file() {
        return T::default();
    }
    let loaded = File::open(path).and_then(|mut f| {
        let mut s = String::new();
        f.read_to_string(&mut s)?;
        serde_json::from_str(&s).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    });
    match loaded {
        Ok(value) => value,
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring unreadable file");
            T::default()
        }
    }
}

fn save<T: Serialize>(dir: &Path, name: &str, value: &T) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    let data = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut f = File::create(&path)?;
    f.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "saved");
    Ok(())
}
