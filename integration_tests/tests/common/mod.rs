use std::path::PathBuf;

use anyhow::{Context, Result};
use view_core::{check_map, DiagnosticBuffer, SubsetConfig};
use view_schema::WorldMap;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_map(name: &str) -> Result<WorldMap> {
    let path = fixture_path(name);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("missing test map at {}", path.display()))?;
    WorldMap::from_json_str(&json).with_context(|| format!("invalid test map {name}"))
}

/// Run a sequential check and hand back the verdict with sorted report lines.
pub fn check(general: &WorldMap, specific: &WorldMap) -> (bool, Vec<String>) {
    let buffer = DiagnosticBuffer::new();
    let subset = check_map(
        general,
        specific,
        &buffer,
        &SubsetConfig::default().sequential(),
    );
    let mut lines = buffer.into_lines();
    lines.sort();
    (subset, lines)
}
