//! Tuning for whole-map subset checks.
//!
//! Loaded from `subset_config.json` with support for an environment variable override.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use thiserror::Error;
use view_schema::FixtureKind;

pub const BUILTIN_SUBSET_CONFIG: &str = include_str!("data/subset_config.json");

pub const SUBSET_CONFIG_ENV: &str = "SUBSET_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubsetConfig {
    /// Fixture kinds ignored on both sides of a map comparison.
    pub skip_kinds: Vec<FixtureKind>,
    /// Compare tiles on the rayon pool once a map has this many points.
    pub parallel: bool,
    pub parallel_min_points: usize,
    /// Name the master's location of a fixture the view has misplaced.
    pub relocation_hints: bool,
}

impl Default for SubsetConfig {
    fn default() -> Self {
        Self {
            skip_kinds: vec![
                FixtureKind::TextNote,
                FixtureKind::Cache,
                FixtureKind::AnimalTracks,
                FixtureKind::Ground,
            ],
            parallel: true,
            parallel_min_points: 4096,
            relocation_hints: true,
        }
    }
}

impl SubsetConfig {
    pub fn builtin() -> Arc<Self> {
        Arc::new(
            serde_json::from_str(BUILTIN_SUBSET_CONFIG).expect("builtin subset config should parse"),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, SubsetConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| SubsetConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = SubsetConfig::from_json_str(&contents)?;
        Ok(config)
    }

    pub fn skips(&self, kind: FixtureKind) -> bool {
        self.skip_kinds.contains(&kind)
    }

    /// Same settings, but always compares tiles on the calling thread.
    pub fn sequential(&self) -> Self {
        Self {
            parallel: false,
            ..self.clone()
        }
    }

    pub fn runs_parallel(&self, point_count: usize) -> bool {
        self.parallel && point_count >= self.parallel_min_points
    }
}

#[derive(Debug, Error)]
pub enum SubsetConfigError {
    #[error("failed to parse subset config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read subset config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load the config from `explicit`, else from `SUBSET_CONFIG_PATH`, else
/// the builtin copy. A file that fails to load is logged and skipped.
pub fn load_subset_config(explicit: Option<&Path>) -> (Arc<SubsetConfig>, Option<PathBuf>) {
    let candidate = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var(SUBSET_CONFIG_ENV).ok().map(PathBuf::from));

    if let Some(path) = candidate {
        match SubsetConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    target: "world_views::config",
                    path = %path.display(),
                    "subset_config.loaded=file"
                );
                return (Arc::new(config), Some(path));
            }
            Err(err) => {
                tracing::warn!(
                    target: "world_views::config",
                    path = %path.display(),
                    error = %err,
                    "subset_config.load_failed"
                );
            }
        }
    }

    let config = SubsetConfig::builtin();
    tracing::info!(target: "world_views::config", "subset_config.loaded=builtin");
    (config, None)
}

pub fn load_subset_config_from_env() -> (Arc<SubsetConfig>, Option<PathBuf>) {
    load_subset_config(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_default() {
        assert_eq!(*SubsetConfig::builtin(), SubsetConfig::default());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SubsetConfig::from_json_str(r#"{ "skip_kinds": ["cache"] }"#).unwrap();
        assert!(config.skips(FixtureKind::Cache));
        assert!(!config.skips(FixtureKind::TextNote));
        assert_eq!(config.parallel_min_points, 4096);
        assert!(config.relocation_hints);
    }

    #[test]
    fn parallel_threshold() {
        let config = SubsetConfig::default();
        assert!(!config.runs_parallel(10));
        assert!(config.runs_parallel(5000));
        assert!(!config.sequential().runs_parallel(5000));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let (config, path) = load_subset_config(Some(Path::new("/nonexistent/subset.json")));
        assert_eq!(*config, SubsetConfig::default());
        assert!(path.is_none());
        assert!(matches!(
            SubsetConfig::from_file(Path::new("/nonexistent/subset.json")),
            Err(SubsetConfigError::Read { .. })
        ));
    }
}
