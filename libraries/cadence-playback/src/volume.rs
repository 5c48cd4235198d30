//! Volume control
//!
//! Linear volume in the range 0.0-1.0, matching what host media
//! resources accept. Mute is tracked separately so the level survives it.

use serde::{Deserialize, Serialize};

/// Volume controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f64,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0.0-1.0, clamped; non-finite becomes 0.0)
    pub fn new(level: f64) -> Self {
        Self {
            level: Self::sanitize(level).unwrap_or(0.0),
            muted: false,
        }
    }

    /// Set volume level
    ///
    /// Returns false and keeps the current level if `level` is NaN or infinite.
    pub fn set_level(&mut self, level: f64) -> bool {
        match Self::sanitize(level) {
            Some(level) => {
                self.level = level;
                true
            }
            None => false,
        }
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effective output gain
    ///
    /// Returns 0.0 if muted, otherwise the level
    pub fn gain(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }

    fn sanitize(level: f64) -> Option<f64> {
        level.is_finite().then(|| level.clamp(0.0, 1.0))
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.5)
    }
}
