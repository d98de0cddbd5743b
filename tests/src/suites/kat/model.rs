//! Pure data model for known-answer vector files
//! No dependency on the rest of the framework.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// ----------------------------------------------------------------
/// 1. Leaf-level test case
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "default_expected_result")]
    pub expected_result: String, // valid / invalid
    /// Every other field (key, iv, pt, ct, tag, ...)
    #[serde(flatten)]
    pub inputs: HashMap<String, Value>,
}

fn default_expected_result() -> String {
    "valid".into()
}

impl TestCase {
    /// A field rendered as a string; numbers are rendered in decimal
    pub fn field(&self, name: &str) -> Option<String> {
        self.inputs.get(name).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// A numeric field
    pub fn number(&self, name: &str) -> Option<u64> {
        self.inputs.get(name).and_then(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        })
    }
}

/// ----------------------------------------------------------------
/// 2. Groups share an operation and default parameters
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    /// encrypt / decrypt / hash / mac / derive / encode / decode
    pub direction: String,
    /// Fields copied into every test case that does not set them
    #[serde(flatten)]
    pub defaults: HashMap<String, Value>,
    pub tests: Vec<TestCase>,
}

/// ----------------------------------------------------------------
/// 3. Whole suite (file)
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub algorithm: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}
