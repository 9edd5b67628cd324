//! Library module: discovering audio files under a root and the views built on
//! top of a scan (search, grouping, recently added).
//!
//! Every operation walks the tree again; nothing is cached between calls.

mod describe;
mod display;
mod error;
mod format;
mod group;
mod model;
mod probe;
mod recent;
mod scan;

pub use describe::{UNKNOWN_ARTIST, describe, split_artist_title};
pub use display::display_from_fields;
pub use error::{CatalogError, PathKind};
pub use format::{SUPPORTED_EXTENSIONS, audio_extension, is_audio_file};
pub use group::{ROOT_GROUP, group_by_artist, group_by_folder};
pub use model::{Catalog, Group, Grouping, Track, bytes_to_mb, unix_seconds};
pub use probe::{format_duration, probe_duration};
pub use recent::{DEFAULT_RECENT_DAYS, recently_added};
pub use scan::{ScanOptions, scan, search, total_size};
