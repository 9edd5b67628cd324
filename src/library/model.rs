use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Serialize, Serializer};

/// An audio file found on disk plus what can be guessed from its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// Absolute path to the file.
    pub path: PathBuf,
    pub file_name: String,
    /// Lowercase extension without the dot.
    pub extension: String,
    /// Size in bytes.
    pub size: u64,
    #[serde(serialize_with = "serialize_unix_seconds")]
    pub modified: SystemTime,
    pub title: String,
    pub artist: String,
}

impl Track {
    /// Size in MiB, rounded to two decimals.
    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size)
    }
}

/// Bytes as MiB, rounded to two decimals.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    (bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0
}

/// Whole seconds relative to the Unix epoch; negative before it.
pub fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

fn serialize_unix_seconds<S: Serializer>(time: &SystemTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(unix_seconds(*time))
}

/// Ordered result of one scan.
pub type Catalog = Vec<Track>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub key: String,
    pub tracks: Vec<Track>,
}

/// Tracks partitioned by a string key. Groups keep the order in which their
/// key was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grouping {
    groups: Vec<Group>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the group for `key` if it does not exist yet, keeping its
    /// position if it does.
    pub(crate) fn ensure(&mut self, key: &str) -> &mut Group {
        let idx = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.groups.push(Group {
                    key: key.to_string(),
                    tracks: Vec::new(),
                });
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx]
    }

    pub(crate) fn push(&mut self, key: &str, track: Track) {
        self.ensure(key).tracks.push(track);
    }

    /// Drop groups that ended up with no tracks.
    pub(crate) fn prune_empty(&mut self) {
        self.groups.retain(|g| !g.tracks.is_empty());
        self.index = self
            .groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.key.clone(), i))
            .collect();
    }

    pub fn get(&self, key: &str) -> Option<&[Track]> {
        self.index
            .get(key)
            .map(|&i| self.groups[i].tracks.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Group> {
        self.groups.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for Grouping {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
