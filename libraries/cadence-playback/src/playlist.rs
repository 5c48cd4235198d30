//! Playlist with a current-track pointer
//!
//! The playlist is never empty and `current` always points at a track.

use crate::error::{PlaybackError, Result};
use crate::types::Track;
use url::Url;

/// Parse an add-track input as an absolute URL
pub(crate) fn parse_source_url(input: &str) -> Result<Url> {
    Url::parse(input).map_err(|e| PlaybackError::InvalidUrl(format!("{}: {}", input, e)))
}

/// Outcome of a successful removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The removed track
    pub track: Track,

    /// Whether the removed track was the current one
    pub was_current: bool,
}

/// Ordered tracks plus the index of the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: usize,
}

impl Playlist {
    /// Create playlist pointing at the first track
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        Ok(Self { tracks, current: 0 })
    }

    /// Append a track built from `url` and make it current
    ///
    /// Surrounding whitespace is trimmed before validation. Returns the new
    /// current index. On invalid input the playlist is unchanged.
    pub fn add_track(&mut self, url: &str) -> Result<usize> {
        let url = url.trim();
        parse_source_url(url)?;

        let number = self.tracks.len() + 1;
        self.tracks.push(Track::custom(number, url));
        self.current = self.tracks.len() - 1;
        Ok(self.current)
    }

    /// Remove the track at `index`
    ///
    /// No-op (returns `None`) when only one track is left or `index` is out of
    /// bounds. The current index is re-derived from the pre-removal length:
    /// - removed before current: shift left to keep pointing at the same track
    /// - removed current, not last: same index, now the successor
    /// - removed current, last: the new last track
    pub fn remove_track(&mut self, index: usize) -> Option<Removal> {
        let len = self.tracks.len();
        if len <= 1 || index >= len {
            return None;
        }

        let current = self.current;
        let was_current = index == current;
        let new_current = if was_current {
            if index == len - 1 {
                current - 1
            } else {
                current
            }
        } else if index < current {
            current - 1
        } else {
            current
        };

        let track = self.tracks.remove(index);
        self.current = new_current;

        Some(Removal { track, was_current })
    }

    /// Point at the track at `index`
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        self.current = index;
        Ok(())
    }

    /// Advance with wraparound, returning the new index
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        self.current = if self.current + 1 >= self.tracks.len() {
            0
        } else {
            self.current + 1
        };
        self.current
    }

    /// Retreat with wraparound, returning the new index
    pub fn previous(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.tracks.len() - 1
        } else {
            self.current - 1
        };
        self.current
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> &Track {
        &self.tracks[self.current]
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
