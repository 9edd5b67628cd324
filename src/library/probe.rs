use std::path::Path;
use std::time::Duration;

use lofty::prelude::AudioFile;

/// Best-effort audio duration read from the file's stream properties.
///
/// Returns `None` for anything lofty cannot parse. Never touches the
/// filename-derived title or artist.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not read audio properties");
            None
        }
    }
}

/// Format a duration as `mm:ss`; minutes keep growing past an hour.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn format_duration_pads_minutes_and_seconds() {
        assert_eq!(format_duration(Duration::ZERO), "00:00");
        assert_eq!(format_duration(Duration::from_secs(65)), "01:05");
        assert_eq!(format_duration(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_duration(Duration::from_secs(3725)), "62:05");
    }

    #[test]
    fn probe_duration_is_none_for_garbage() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("fake.flac");
        fs::write(&p, b"definitely not audio").unwrap();
        assert_eq!(probe_duration(&p), None);
    }

    #[test]
    fn probe_duration_is_none_for_missing_file() {
        let dir = tempdir().unwrap();
        assert_eq!(probe_duration(&dir.path().join("missing.flac")), None);
    }
}
