//! Loads known-answer vectors from JSON files.

use crate::suites::kat::error::{EngineError, Result};
use crate::suites::kat::model::TestSuite;
use std::fs;
use std::path::{Path, PathBuf};

/// ----------------------------------------------------------------
/// Directory holding the JSON vector files
/// ----------------------------------------------------------------
pub fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("vectors")
}

/// ----------------------------------------------------------------
/// Load `vectors/<name>.json` and push group defaults down into
/// every test case
/// ----------------------------------------------------------------
pub fn load_suite_by_name(name: &str) -> Result<TestSuite> {
    let path = vectors_dir().join(format!("{}.json", name));
    let json = fs::read_to_string(&path)
        .map_err(|e| EngineError::Load(format!("{}: {}", path.display(), e)))?;
    let mut suite: TestSuite = serde_json::from_str(&json)
        .map_err(|e| EngineError::Load(format!("{}: {}", path.display(), e)))?;

    for group in &mut suite.groups {
        for case in &mut group.tests {
            for (k, v) in &group.defaults {
                case.inputs.entry(k.clone()).or_insert_with(|| v.clone());
            }
        }
    }

    Ok(suite)
}

/// ----------------------------------------------------------------
/// Every suite shipped in the vectors directory, sorted by name
/// ----------------------------------------------------------------
pub fn suite_names() -> Result<Vec<String>> {
    let entries = fs::read_dir(vectors_dir()).map_err(|e| EngineError::Load(e.to_string()))?;
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") => path.file_stem().and_then(|s| s.to_str()).map(String::from),
                _ => None,
            }
        })
        .collect();
    names.sort();
    Ok(names)
}
