//! Load mercenary reference data and collection snapshots from disk

use std::fs;
use std::path::Path;

use crate::collection::entry::Collection;
use crate::core::error::{CollectionError, Result};
use crate::roster::reference::{MercenaryReference, Roster};

/// Supported reference data formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

fn parse<T: serde::de::DeserializeOwned>(content: &str, format: Format) -> Result<T> {
    match format {
        Format::Toml => Ok(toml::from_str(content)?),
        Format::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Parse a roster: a table of reference entries keyed by mercenary name
pub fn parse_roster_toml(content: &str) -> Result<Roster> {
    parse(content, Format::Toml)
}

/// Parse a roster from JSON
pub fn parse_roster_json(content: &str) -> Result<Roster> {
    parse(content, Format::Json)
}

/// Load a roster file; TOML or JSON is chosen by extension
pub fn load_roster_file(path: &Path) -> Result<Roster> {
    let format = format_of(path)
        .ok_or_else(|| CollectionError::UnsupportedFormat(path.display().to_string()))?;
    let content = fs::read_to_string(path)?;
    let roster: Roster = parse(&content, format)?;
    tracing::info!(path = %path.display(), mercenaries = roster.len(), "Loaded roster");
    Ok(roster)
}

/// Load every `*.toml` / `*.json` file in a directory, one mercenary per file
///
/// Each mercenary is keyed by its `name` field, falling back to the file
/// stem. Files with other extensions are skipped.
pub fn load_roster_dir(dir: &Path) -> Result<Roster> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::result::Result<_, _>>()?;
    paths.sort();

    let mut roster = Roster::default();
    for path in paths {
        let Some(format) = format_of(&path) else {
            continue;
        };
        let content = fs::read_to_string(&path)?;
        let merc: MercenaryReference = parse(&content, format)?;
        let key = match (&merc.name, path.file_stem().and_then(|s| s.to_str())) {
            (Some(name), _) => name.clone(),
            (None, Some(stem)) => stem.to_string(),
            (None, None) => continue,
        };
        tracing::debug!(mercenary = %key, path = %path.display(), "Loaded mercenary");
        if roster.insert(key.clone(), merc).is_some() {
            // paths are sorted, so the last file by name wins
            tracing::warn!(mercenary = %key, path = %path.display(), "Duplicate mercenary replaced");
        }
    }

    tracing::info!(dir = %dir.display(), mercenaries = roster.len(), "Loaded roster directory");
    Ok(roster)
}

/// Load a roster from either a single file or a directory of files
pub fn load_roster(path: &Path) -> Result<Roster> {
    if path.is_dir() {
        load_roster_dir(path)
    } else {
        load_roster_file(path)
    }
}

/// Parse a collection snapshot in the camelCase shape the UI saves
pub fn parse_collection_json(content: &str) -> Result<Collection> {
    Ok(serde_json::from_str(content)?)
}

/// Read a collection snapshot file
pub fn load_collection_file(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path)?;
    let collection = parse_collection_json(&content)?;
    tracing::info!(path = %path.display(), entries = collection.len(), "Loaded collection");
    Ok(collection)
}
