use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cadenza::config::Settings;
use cadenza::library::{
    ScanOptions, describe, group_by_artist, group_by_folder, probe_duration,
    recently_added, scan, search, total_size,
};

use crate::cli::{Args, Command};

mod logging;
mod output;
mod settings;

use output::Printer;

pub fn run(args: Args) -> Result<()> {
    let (settings, warning) = settings::load_settings();
    logging::init(&settings.log.filter);
    if let Some(msg) = warning {
        tracing::warn!("{msg}");
    }

    let options = ScanOptions {
        follow_links: args.follow_links || settings.library.follow_links,
    };

    let stdout = std::io::stdout().lock();
    let mut printer = Printer::new(stdout, &settings.output, args.json);

    match args.cmd {
        Command::Scan { dir } => {
            let root = music_dir(dir, &settings)?;
            let tracks = scan(&root, &options).with_context(|| scan_context(&root))?;
            printer.tracks(&tracks)?;
        }
        Command::Search { keyword, dir } => {
            let root = music_dir(dir, &settings)?;
            let tracks =
                search(&root, &keyword, &options).with_context(|| scan_context(&root))?;
            printer.tracks(&tracks)?;
        }
        Command::Size { dir } => {
            let root = music_dir(dir, &settings)?;
            let bytes = total_size(&root, &options).with_context(|| scan_context(&root))?;
            printer.size(bytes)?;
        }
        Command::Artists { dir } => {
            let root = music_dir(dir, &settings)?;
            let groups = group_by_artist(&root, &options).with_context(|| scan_context(&root))?;
            printer.grouping(&groups)?;
        }
        Command::Folders { dir } => {
            let root = music_dir(dir, &settings)?;
            let groups = group_by_folder(&root, &options).with_context(|| scan_context(&root))?;
            printer.grouping(&groups)?;
        }
        Command::Recent { dir, days } => {
            let root = music_dir(dir, &settings)?;
            let days = days.unwrap_or(settings.library.recent_days);
            let tracks =
                recently_added(&root, days, &options).with_context(|| scan_context(&root))?;
            printer.tracks(&tracks)?;
        }
        Command::Describe { file, duration } => {
            let track = describe(&file)
                .with_context(|| format!("failed to describe {}", file.display()))?;
            let duration = if duration {
                probe_duration(&track.path)
            } else {
                None
            };
            printer.describe(&track, duration)?;
        }
    }

    printer.flush()?;
    Ok(())
}

/// Pick the folder to work on: the command line, then `library.music_dir`,
/// then the current directory.
fn music_dir(arg: Option<PathBuf>, settings: &Settings) -> Result<PathBuf> {
    if let Some(dir) = arg.or_else(|| settings.library.music_dir.clone()) {
        return Ok(dir);
    }
    env::current_dir().context("cannot determine the current directory")
}

fn scan_context(root: &Path) -> String {
    format!("failed to read music folder {}", root.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza::library;

    #[test]
    fn music_dir_prefers_argument_then_settings() {
        let mut settings = Settings::default();
        settings.library.music_dir = Some(PathBuf::from("/from/settings"));

        assert_eq!(
            music_dir(Some(PathBuf::from("/from/args")), &settings).unwrap(),
            PathBuf::from("/from/args")
        );
        assert_eq!(
            music_dir(None, &settings).unwrap(),
            PathBuf::from("/from/settings")
        );

        settings.library.music_dir = None;
        assert_eq!(
            music_dir(None, &settings).unwrap(),
            env::current_dir().unwrap()
        );
    }

    #[test]
    fn catalog_errors_keep_their_kind_under_context() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = scan(&missing, &ScanOptions::default())
            .with_context(|| scan_context(&missing))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<library::CatalogError>(),
            Some(library::CatalogError::InvalidPath { .. })
        ));
    }
}
