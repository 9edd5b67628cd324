use std::path::Path;

/// Audio file extensions the scanner recognizes, lowercase and without the dot.
///
/// A file qualifies when its lowercased name matches `*.<ext>` for one of these.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "flac", "aac", "ogg", "wma", "m4a", "opus", "amr", "mid", "midi",
];

/// Return the supported extension a file name ends with, if any.
///
/// This is a glob-style suffix match rather than `Path::extension`, so a bare
/// `.mp3` counts as well (the `*` matches nothing).
pub fn audio_extension(file_name: &str) -> Option<&'static str> {
    let name = file_name.to_lowercase();
    SUPPORTED_EXTENSIONS.iter().copied().find(|ext| {
        name.strip_suffix(ext)
            .is_some_and(|rest| rest.ends_with('.'))
    })
}

/// Whether `path`'s file name has one of the supported audio extensions
/// (case-insensitive). Names that are not valid UTF-8 are matched on their
/// lossy form; the suffix is plain ASCII either way.
pub fn is_audio_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|s| audio_extension(&s.to_string_lossy()).is_some())
}
