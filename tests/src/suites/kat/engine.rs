//! Engine that routes each case to the registered bitcrypt handler

use crate::suites::kat::error::{EngineError, Result};
use crate::suites::kat::model::{TestCase, TestGroup, TestSuite};
use crate::suites::kat::runner::VectorEngine;
use bitcrypt::algorithms::BitArray;

/// Concrete type used by tests: one instance suffices for all suites.
pub struct BitcryptEngine;

impl VectorEngine for BitcryptEngine {
    fn run(&self, suite: &TestSuite, group: &TestGroup, case: &TestCase) -> std::result::Result<(), String> {
        self.run_internal(suite, group, case).map_err(|e| e.to_string())
    }
}

impl BitcryptEngine {
    fn run_internal(&self, suite: &TestSuite, group: &TestGroup, case: &TestCase) -> Result<()> {
        use super::dispatcher::{DispatchKey, REGISTRY};

        let key = DispatchKey {
            algo: suite.algorithm.clone(),
            dir: group.direction.clone(),
        };

        REGISTRY
            .get(&key)
            .ok_or_else(|| EngineError::Unsupported(format!("{:?}", key)))?(case)
    }
}

/// Required hex field decoded into a bit array
pub fn hex_bits(case: &TestCase, name: &'static str) -> Result<BitArray> {
    let value = case.field(name).ok_or(EngineError::MissingField(name))?;
    Ok(BitArray::from_bytes(&hex::decode(value)?))
}

/// Optional hex field; absent means empty
pub fn hex_bits_or_empty(case: &TestCase, name: &'static str) -> Result<BitArray> {
    match case.field(name) {
        Some(value) => Ok(BitArray::from_bytes(&hex::decode(value)?)),
        None => Ok(BitArray::new()),
    }
}

/// Required string field
pub fn text(case: &TestCase, name: &'static str) -> Result<String> {
    case.field(name).ok_or(EngineError::MissingField(name))
}

/// Compare a computed bit array with an expected hex string
pub fn expect_hex(expected: &str, actual: &BitArray) -> Result<()> {
    let actual = hex::encode(actual.to_bytes());
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(EngineError::Mismatch {
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Compare two strings
pub fn expect_text(expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}
