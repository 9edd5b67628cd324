use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::describe::track_from_metadata;
use super::error::{CatalogError, PathKind};
use super::format::is_audio_file;
use super::model::{Catalog, Track};

/// Knobs for a walk. Everything else about a scan is fixed.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Descend into symlinked directories. Symlinked files are always
    /// considered; dangling links are skipped.
    pub follow_links: bool,
}

/// Check that `root` is an existing directory and return its absolute form.
pub(crate) fn resolve_root(root: &Path) -> Result<PathBuf, CatalogError> {
    let meta =
        fs::metadata(root).map_err(|e| CatalogError::from_stat(root, PathKind::Directory, e))?;
    if !meta.is_dir() {
        return Err(CatalogError::invalid_path(root, PathKind::Directory));
    }
    std::path::absolute(root).map_err(|e| CatalogError::access(root, e))
}

/// One step of a walk.
pub(crate) enum Visit<'a> {
    Dir(&'a Path),
    Track(Track),
}

/// Walk `root` (already resolved), reporting every directory in pre-order and
/// every audio file. Entries are visited in file name order so repeated walks
/// over the same tree agree.
pub(crate) fn walk(
    root: &Path,
    options: &ScanOptions,
    mut visit: impl FnMut(Visit<'_>),
) -> Result<(), CatalogError> {
    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| CatalogError::from_walk(root, e))?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            visit(Visit::Dir(entry.path()));
            continue;
        }
        if !is_audio_file(entry.path()) {
            continue;
        }
        if let Some(track) = audio_track(&entry)? {
            tracing::trace!(path = %track.path.display(), "audio file");
            visit(Visit::Track(track));
        }
    }
    Ok(())
}

fn audio_track(entry: &DirEntry) -> Result<Option<Track>, CatalogError> {
    let path = entry.path();
    let meta = if entry.path_is_symlink() {
        match fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "skipping dangling symlink");
                return Ok(None);
            }
            Err(e) => return Err(CatalogError::access(path, e)),
        }
    } else {
        entry
            .metadata()
            .map_err(|e| CatalogError::access(path, io::Error::from(e)))?
    };

    if !meta.is_file() {
        return Ok(None);
    }
    track_from_metadata(path, &meta).map(Some)
}

/// Sort by base file name, case-insensitive. Stable, so equal names keep walk
/// order.
pub(crate) fn sort_by_name(tracks: &mut [Track]) {
    tracks.sort_by_cached_key(|t| t.file_name.to_lowercase());
}

/// Recursively collect every supported audio file under `root`, sorted by
/// file name (case-insensitive).
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Catalog, CatalogError> {
    let root = resolve_root(root)?;
    let mut tracks: Catalog = Vec::new();
    walk(&root, options, |v| {
        if let Visit::Track(t) = v {
            tracks.push(t);
        }
    })?;

    sort_by_name(&mut tracks);
    tracing::debug!(root = %root.display(), tracks = tracks.len(), "scan complete");
    Ok(tracks)
}

/// Tracks whose file name contains `keyword`, ignoring case. Keeps scan order.
pub fn search(root: &Path, keyword: &str, options: &ScanOptions) -> Result<Catalog, CatalogError> {
    let keyword = keyword.to_lowercase();
    let tracks = scan(root, options)?
        .into_iter()
        .filter(|t| t.file_name.to_lowercase().contains(&keyword))
        .collect::<Catalog>();

    tracing::debug!(keyword = %keyword, matches = tracks.len(), "search complete");
    Ok(tracks)
}

/// Total size in bytes of the audio files `scan` would return.
pub fn total_size(root: &Path, options: &ScanOptions) -> Result<u64, CatalogError> {
    let root = resolve_root(root)?;
    let mut total: u64 = 0;
    walk(&root, options, |v| {
        if let Visit::Track(t) = v {
            total += t.size;
        }
    })?;
    Ok(total)
}
