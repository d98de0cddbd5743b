//! Known-answer vector suites loaded from JSON
//!
//! Re-export the public surface so callers can do
//! `use bitcrypt_tests::suites::kat::*;`.

pub mod algorithms;
pub mod dispatcher;
pub mod engine;
pub mod loader;
pub mod model;
pub mod runner;

pub use engine::*;
pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
