//! Track metadata: the `Track` value type and the `MetadataReader` boundary.
//!
//! The transport only consumes `{title, artist, duration}`; everything else
//! a tag may carry is ignored.

use std::path::{Path, PathBuf};

use lofty::prelude::*;
use lofty::tag::ItemKey;
use thiserror::Error;

use crate::engine::EngineError;

/// A playable item, resolved once at load time and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: Option<String>,
    pub artist: Option<String>,
    /// Track length in seconds, >= 0.
    pub duration: f64,
}

impl Track {
    /// Display text for the track: `"Title - Artist"` when both are present,
    /// the title alone when only it is present, the raw path otherwise.
    pub fn info(&self) -> String {
        match (self.title.as_deref(), self.artist.as_deref()) {
            (Some(title), Some(artist)) => format!("{title} - {artist}"),
            (Some(title), None) => title.to_string(),
            _ => self.path.display().to_string(),
        }
    }
}

/// A track could not be loaded. Non-fatal: the caller's state is rolled
/// back and the previously loaded track keeps playing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read metadata from {path}: {source}")]
    Unparsable {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },
    #[error("engine rejected {path}: {source}")]
    Rejected {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}

/// Resolves a path into a `Track`.
pub trait MetadataReader {
    fn read(&self, path: &Path) -> Result<Track, LoadError>;
}

/// `lofty`-backed reader: tag fields for title/artist, stream properties for
/// the duration.
pub struct LoftyReader;

impl MetadataReader for LoftyReader {
    fn read(&self, path: &Path) -> Result<Track, LoadError> {
        let mut file = std::fs::File::open(path).map_err(|e| LoadError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let tagged = lofty::read_from(&mut file).map_err(|e| LoadError::Unparsable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let duration = tagged.properties().duration().as_secs_f64();

        let mut title: Option<String> = None;
        let mut artist: Option<String> = None;
        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                let v = v.trim();
                if !v.is_empty() {
                    title = Some(v.to_string());
                }
            }
            if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                let v = v.trim();
                if !v.is_empty() {
                    artist = Some(v.to_string());
                }
            }
        }

        Ok(Track {
            path: path.to_path_buf(),
            title,
            artist,
            duration,
        })
    }
}
