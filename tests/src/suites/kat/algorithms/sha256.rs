//! Handlers for SHA-256

use crate::suites::kat::dispatcher::{insert, HandlerFn, DispatchKey};
use crate::suites::kat::engine::{expect_hex, hex_bits_or_empty, text};
use crate::suites::kat::error::Result;
use crate::suites::kat::model::TestCase;
use bitcrypt::algorithms::{HashFunction, Sha256};
use std::collections::HashMap;

/// Hash `msg`, repeated `repeat` times when given
pub(crate) fn sha256_hash(case: &TestCase) -> Result<()> {
    let msg = hex_bits_or_empty(case, "msg")?;
    let mut hasher = Sha256::new();
    for _ in 0..case.number("repeat").unwrap_or(1) {
        hasher.update(&msg)?;
    }
    expect_hex(&text(case, "md")?, &hasher.finalize())
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, "SHA-256", "hash", sha256_hash);
}
