//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Every data file the game reads, already parsed.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub locomotion: LocomotionDef,
    pub arena: ArenaDef,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from an in-memory string.
pub(crate) fn parse_single<T>(contents: &str, file_name: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&contents, &file_name)
}

/// Load all content from assets/data/*.ron.
/// Returns errors for any files that fail to load.
pub fn load_all_content(base_path: &Path) -> Result<GameData, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let locomotion = match load_single_file::<LocomotionDef>(&base_path.join("locomotion.ron")) {
        Ok(def) => def,
        Err(e) => {
            errors.push(e);
            LocomotionDef::default()
        }
    };

    let arena = match load_single_file::<ArenaDef>(&base_path.join("arena.ron")) {
        Ok(def) => def,
        Err(e) => {
            errors.push(e);
            ArenaDef::default()
        }
    };

    if errors.is_empty() {
        Ok(GameData { locomotion, arena })
    } else {
        Err(errors)
    }
}
