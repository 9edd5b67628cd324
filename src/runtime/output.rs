use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use cadenza::config::OutputSettings;
use cadenza::library::{Grouping, Track, bytes_to_mb, display_from_fields, format_duration};
use serde::Serialize;

/// Writes command results either as text lines or as JSON.
pub struct Printer<'a, W: Write> {
    out: W,
    settings: &'a OutputSettings,
    json: bool,
}

impl<'a, W: Write> Printer<'a, W> {
    pub fn new(out: W, settings: &'a OutputSettings, json: bool) -> Self {
        Self {
            out,
            settings,
            json,
        }
    }

    fn line(&self, track: &Track) -> String {
        display_from_fields(track, &self.settings.track_fields, &self.settings.separator)
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn tracks(&mut self, tracks: &[Track]) -> Result<()> {
        if self.json {
            return self.write_json(tracks);
        }
        for t in tracks {
            let line = self.line(t);
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    pub fn grouping(&mut self, grouping: &Grouping) -> Result<()> {
        if self.json {
            return self.write_json(grouping);
        }
        for group in grouping {
            writeln!(self.out, "{} ({})", group.key, group.tracks.len())?;
            for t in &group.tracks {
                let line = self.line(t);
                writeln!(self.out, "{}{line}", self.settings.group_indent)?;
            }
        }
        Ok(())
    }

    pub fn size(&mut self, bytes: u64) -> Result<()> {
        if self.json {
            return self.write_json(&serde_json::json!({ "bytes": bytes }));
        }
        writeln!(self.out, "{bytes} bytes ({:.2} MB)", bytes_to_mb(bytes))?;
        Ok(())
    }

    pub fn describe(&mut self, track: &Track, duration: Option<Duration>) -> Result<()> {
        if self.json {
            #[derive(Serialize)]
            struct Described<'t> {
                #[serde(flatten)]
                track: &'t Track,
                #[serde(skip_serializing_if = "Option::is_none")]
                duration_secs: Option<f64>,
            }
            return self.write_json(&Described {
                track,
                duration_secs: duration.map(|d| d.as_secs_f64()),
            });
        }
        writeln!(self.out, "path:     {}", track.path.display())?;
        writeln!(self.out, "title:    {}", track.title)?;
        writeln!(self.out, "artist:   {}", track.artist)?;
        writeln!(self.out, "format:   {}", track.extension)?;
        writeln!(self.out, "size:     {} bytes ({:.2} MB)", track.size, track.size_mb())?;
        if let Some(d) = duration {
            writeln!(self.out, "duration: {}", format_duration(d))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
