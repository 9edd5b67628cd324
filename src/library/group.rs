use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::error::CatalogError;
use super::model::Grouping;
use super::scan::{ScanOptions, Visit, resolve_root, scan, sort_by_name, walk};

/// Key of the group holding files that sit directly in the scanned root.
pub const ROOT_GROUP: &str = "root";

/// Group the scan result by the artist derived from each file name. Groups
/// appear in the order their first track appears in the scan.
pub fn group_by_artist(root: &Path, options: &ScanOptions) -> Result<Grouping, CatalogError> {
    let mut grouping = Grouping::new();
    for track in scan(root, options)? {
        let artist = track.artist.clone();
        grouping.push(&artist, track);
    }
    Ok(grouping)
}

/// Group audio files by the directory that directly contains them.
///
/// Keys are paths relative to `root` (`"root"` for the root itself); only
/// directories with at least one audio file get a group. Groups follow the
/// walk's pre-order, and tracks inside a group are sorted like `scan`.
pub fn group_by_folder(root: &Path, options: &ScanOptions) -> Result<Grouping, CatalogError> {
    let root = resolve_root(root)?;

    let mut grouping = Grouping::new();
    let mut keys: HashMap<PathBuf, String> = HashMap::new();

    // A directory is always reported before its contents.
    walk(&root, options, |v| match v {
        Visit::Dir(dir) => {
            let key = folder_key(&root, dir);
            grouping.ensure(&key);
            keys.insert(dir.to_path_buf(), key);
        }
        Visit::Track(track) => {
            let parent = track.path.parent().unwrap_or(root.as_path());
            let key = keys
                .get(parent)
                .cloned()
                .unwrap_or_else(|| folder_key(&root, parent));
            grouping.push(&key, track);
        }
    })?;

    grouping.prune_empty();
    for group in grouping.iter_mut() {
        sort_by_name(&mut group.tracks);
    }
    tracing::debug!(root = %root.display(), folders = grouping.len(), "folder grouping complete");
    Ok(grouping)
}

fn folder_key(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ROOT_GROUP.to_string(),
        // A real top-level folder called "root" must not merge into the root group.
        Ok(rel) if rel == Path::new(ROOT_GROUP) => {
            Path::new(".").join(rel).to_string_lossy().into_owned()
        }
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => dir.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{Track, UNKNOWN_ARTIST};
    use std::fs;
    use tempfile::tempdir;

    fn titles(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.title.as_str()).collect()
    }

    fn file_names(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.file_name.as_str()).collect()
    }

    #[test]
    fn group_by_artist_keeps_first_occurrence_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("A - One.mp3"), b"x").unwrap();
        fs::write(dir.path().join("A - Two.mp3"), b"x").unwrap();
        fs::write(dir.path().join("NoArtist.mp3"), b"x").unwrap();

        let g = group_by_artist(dir.path(), &ScanOptions::default()).unwrap();
        let keys: Vec<&str> = g.keys().collect();
        assert_eq!(keys, vec!["A", UNKNOWN_ARTIST]);
        assert_eq!(titles(g.get("A").unwrap()), vec!["One", "Two"]);
        assert_eq!(titles(g.get(UNKNOWN_ARTIST).unwrap()), vec!["NoArtist"]);
    }

    #[test]
    fn group_by_artist_merges_across_folders_in_scan_order() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("live");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("Muse - Uprising.mp3"), b"x").unwrap();
        fs::write(sub.join("Muse - Hysteria.flac"), b"x").unwrap();
        fs::write(dir.path().join("Blur - Song 2.mp3"), b"x").unwrap();

        let g = group_by_artist(dir.path(), &ScanOptions::default()).unwrap();
        let keys: Vec<&str> = g.keys().collect();
        assert_eq!(keys, vec!["Blur", "Muse"]);
        assert_eq!(titles(g.get("Muse").unwrap()), vec!["Hysteria", "Uprising"]);
    }

    #[test]
    fn group_by_artist_on_empty_folder_is_empty() {
        let dir = tempdir().unwrap();
        let g = group_by_artist(dir.path(), &ScanOptions::default()).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn group_by_folder_uses_relative_paths_and_root_label() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("Albums").join("First");
        let empty = dir.path().join("Covers");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&empty).unwrap();
        fs::write(dir.path().join("loose.mp3"), b"x").unwrap();
        fs::write(a.join("b.flac"), b"x").unwrap();
        fs::write(a.join("A.ogg"), b"x").unwrap();
        fs::write(empty.join("front.jpg"), b"x").unwrap();

        let g = group_by_folder(dir.path(), &ScanOptions::default()).unwrap();
        let nested = Path::new("Albums").join("First");
        let nested = nested.to_string_lossy();
        let keys: Vec<&str> = g.keys().collect();
        assert_eq!(keys, vec![ROOT_GROUP, &*nested]);
        assert_eq!(file_names(g.get(ROOT_GROUP).unwrap()), vec!["loose.mp3"]);
        assert_eq!(file_names(g.get(&nested).unwrap()), vec!["A.ogg", "b.flac"]);
        // "Albums" holds only a directory, "Covers" only an image.
        assert!(g.get("Albums").is_none());
        assert!(g.get("Covers").is_none());
    }

    #[test]
    fn group_by_folder_is_not_recursive_per_group() {
        let dir = tempdir().unwrap();
        let outer = dir.path().join("outer");
        let inner = outer.join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(outer.join("o.mp3"), b"x").unwrap();
        fs::write(inner.join("i.mp3"), b"x").unwrap();

        let g = group_by_folder(dir.path(), &ScanOptions::default()).unwrap();
        let inner_key = Path::new("outer").join("inner");
        assert_eq!(file_names(g.get("outer").unwrap()), vec!["o.mp3"]);
        assert_eq!(
            file_names(g.get(&inner_key.to_string_lossy()).unwrap()),
            vec!["i.mp3"]
        );
        assert!(g.get(ROOT_GROUP).is_none());

        let total: usize = g.iter().map(|grp| grp.tracks.len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn group_by_folder_keeps_a_folder_named_root_apart() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join(ROOT_GROUP);
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("top.mp3"), b"x").unwrap();
        fs::write(sub.join("nested.mp3"), b"x").unwrap();

        let g = group_by_folder(dir.path(), &ScanOptions::default()).unwrap();
        let nested_key = Path::new(".").join(ROOT_GROUP);
        let nested_key = nested_key.to_string_lossy();
        let keys: Vec<&str> = g.keys().collect();
        assert_eq!(keys, vec![ROOT_GROUP, &*nested_key]);
        assert_eq!(file_names(g.get(ROOT_GROUP).unwrap()), vec!["top.mp3"]);
        assert_eq!(file_names(g.get(&nested_key).unwrap()), vec!["nested.mp3"]);
    }

    #[test]
    fn group_by_folder_missing_root_is_invalid_path() {
        let dir = tempdir().unwrap();
        let err = group_by_folder(&dir.path().join("missing"), &ScanOptions::default()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPath { .. }));
    }
}
