use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cadenza", version, about = "Browse a local music folder")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Print results as JSON instead of one line per track
    #[arg(long, global = true)]
    pub json: bool,

    /// Descend into symlinked directories (overrides `library.follow_links`)
    #[arg(long, global = true)]
    pub follow_links: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every audio file under DIR, sorted by file name
    Scan {
        /// Music folder (defaults to `library.music_dir`, then the current directory)
        dir: Option<PathBuf>,
    },

    /// List audio files whose name contains KEYWORD (case-insensitive)
    Search {
        keyword: String,
        dir: Option<PathBuf>,
    },

    /// Print the total size of the audio files under DIR
    Size { dir: Option<PathBuf> },

    /// Group tracks by the artist taken from "Artist - Title" file names
    Artists { dir: Option<PathBuf> },

    /// Group tracks by the folder that directly contains them
    Folders { dir: Option<PathBuf> },

    /// List tracks modified in the last N days, newest first
    Recent {
        dir: Option<PathBuf>,

        /// Window in days (defaults to `library.recent_days`)
        #[arg(long)]
        days: Option<f64>,
    },

    /// Show what cadenza derives from a single file
    Describe {
        file: PathBuf,

        /// Also read the audio duration from the file
        #[arg(long)]
        duration: bool,
    },
}
