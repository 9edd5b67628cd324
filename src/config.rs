//! Settings for the `cadenza` binary and helpers to load them from disk.
//!
//! The catalog functions in `library` never read these; the binary maps them
//! onto explicit arguments.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
