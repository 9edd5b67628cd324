//! Local music catalog.
//!
//! `library` walks a music folder and derives lightweight, filename-based
//! metadata for every supported audio file. `config` holds the settings the
//! `cadenza` binary reads; the catalog itself never looks at them.

pub mod config;
pub mod library;
