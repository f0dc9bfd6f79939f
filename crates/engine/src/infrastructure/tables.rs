//! Lookup table loading.
//!
//! Each table lives in its own JSON array file. A missing file falls back to
//! the built-in table; a present but malformed file is an error.

use std::path::{Path, PathBuf};

use arlenor_domain::{
    value_objects::{builtin_bonus_malus, builtin_difficulties, builtin_races, builtin_results},
    ReferenceTables,
};
use serde::de::DeserializeOwned;
use tokio::fs;

pub const RACES_FILE: &str = "races.json";
pub const DIFFICULTIES_FILE: &str = "difficulties.json";
pub const BONUS_MALUS_FILE: &str = "bonusMalusList.json";
pub const RESULTS_FILE: &str = "results.json";

#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed table {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Table {0} is empty")]
    Empty(PathBuf),
}

async fn load_table<T, F>(dir: &Path, file: &str, builtin: F) -> Result<Vec<T>, TableLoadError>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let path = dir.join(file);
    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Table file absent, using built-in table");
            return Ok(builtin());
        }
        Err(source) => return Err(TableLoadError::Io { path, source }),
    };

    let rows: Vec<T> = serde_json::from_str(&content)
        .map_err(|source| TableLoadError::Parse {
            path: path.clone(),
            source,
        })?;
    if rows.is_empty() {
        return Err(TableLoadError::Empty(path));
    }
    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded table");
    Ok(rows)
}

/// Load the reference tables, from `dir` when given.
pub async fn load_reference_tables(dir: Option<&Path>) -> Result<ReferenceTables, TableLoadError> {
    let Some(dir) = dir else {
        return Ok(ReferenceTables::builtin());
    };

    Ok(ReferenceTables {
        races: load_table(dir, RACES_FILE, builtin_races).await?,
        difficulties: load_table(dir, DIFFICULTIES_FILE, builtin_difficulties).await?,
        bonus_malus: load_table(dir, BONUS_MALUS_FILE, builtin_bonus_malus).await?,
        results: load_table(dir, RESULTS_FILE, builtin_results).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_directory_means_builtin_tables() {
        let tables = load_reference_tables(None).await.unwrap();
        assert_eq!(tables, ReferenceTables::builtin());
    }

    #[tokio::test]
    async fn present_files_override_and_missing_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DIFFICULTIES_FILE),
            r#"[{"code": "FACILE", "name": "Facile", "value": 1}]"#,
        )
        .unwrap();

        let tables = load_reference_tables(Some(dir.path())).await.unwrap();
        assert_eq!(tables.difficulties.len(), 1);
        assert_eq!(tables.difficulty("FACILE").unwrap().value, 1);
        assert!(tables.difficulty("SIMPLE").is_err());
        assert_eq!(tables.results, builtin_results());
        assert_eq!(tables.races, builtin_races());
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(RESULTS_FILE), "{not json").unwrap();

        let err = load_reference_tables(Some(dir.path())).await.unwrap_err();
        assert!(matches!(err, TableLoadError::Parse { .. }));
        assert!(err.to_string().contains(RESULTS_FILE));
    }

    #[tokio::test]
    async fn empty_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(BONUS_MALUS_FILE), "[]").unwrap();

        let err = load_reference_tables(Some(dir.path())).await.unwrap_err();
        assert!(matches!(err, TableLoadError::Empty(_)));
    }
}
