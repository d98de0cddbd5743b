//! Extensible dispatcher for algorithm handlers

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::error::Result;
use super::model::TestCase;

/// Registry key for looking up handlers
#[derive(Hash, Eq, PartialEq, Debug, Clone)]
pub struct DispatchKey {
    pub algo: String,
    pub dir: String, // "direction" from the group (encrypt, decrypt, ...)
}

/// Handler function type
pub type HandlerFn = fn(&TestCase) -> Result<()>;

/// Global registry of algorithm handlers
pub static REGISTRY: Lazy<HashMap<DispatchKey, HandlerFn>> = Lazy::new(|| {
    let mut m = HashMap::<DispatchKey, HandlerFn>::new();

    // Register all algorithm modules
    super::algorithms::aes::register(&mut m);
    super::algorithms::aead::register(&mut m);
    super::algorithms::sha256::register(&mut m);
    super::algorithms::hmac::register(&mut m);
    super::algorithms::pbkdf2::register(&mut m);
    super::algorithms::codec::register(&mut m);
    m
});

/// Helper function for registering handlers
pub fn insert(map: &mut HashMap<DispatchKey, HandlerFn>, algo: &str, dir: &str, handler: HandlerFn) {
    map.insert(
        DispatchKey {
            algo: algo.to_string(),
            dir: dir.to_string(),
        },
        handler,
    );
}
