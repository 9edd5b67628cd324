use crate::config::TrackField;

use super::model::{Track, unix_seconds};

/// Build a one-line description of a track from the given `fields`, joined by
/// `sep`.
///
/// Empty parts are skipped. Falls back to the file name when no parts were
/// produced.
pub fn display_from_fields(track: &Track, fields: &[TrackField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        let part = match f {
            TrackField::Title => track.title.trim().to_string(),
            TrackField::Artist => track.artist.trim().to_string(),
            TrackField::Filename => track.file_name.clone(),
            TrackField::Path => track.path.display().to_string(),
            TrackField::Extension => track.extension.clone(),
            TrackField::Size => format!("{:.2} MB", track.size_mb()),
            TrackField::Modified => unix_seconds(track.modified).to_string(),
        };
        if !part.is_empty() {
            parts.push(part);
        }
    }

    if parts.is_empty() {
        track.file_name.clone()
    } else {
        parts.join(sep)
    }
}
