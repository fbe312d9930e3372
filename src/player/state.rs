// SPDX-License-Identifier: MPL-2.0
//! Orchestrator-owned playback state.

/// In-memory record of the playback position and display flags.
///
/// Owned exclusively by the player; the controls panel consumes it
/// read-only on every render. Created at bind and discarded at release.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Current playback position in seconds.
    pub current_time: f64,
    /// Reported duration in seconds; `None` until a duration event arrived.
    /// A zero value means the element reported an unknown or unbounded length.
    pub duration: Option<f64>,
    /// Mirror of the host-owned play flag, for the play/pause glyph.
    pub is_playing: bool,
    /// Whether the mute toggle forced the volume to zero.
    pub muted: bool,
    /// Whether the player is (nominally) fullscreen.
    pub is_full_screen: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: None,
            is_playing: false,
            muted: false,
            is_full_screen: false,
        }
    }
}

impl PlaybackState {
    /// Normalizes a raw duration report.
    ///
    /// Unbounded values (a live stream reporting infinity) and other
    /// non-finite reports become zero instead of propagating.
    #[must_use]
    pub fn normalize_duration(raw: f64) -> f64 {
        if raw.is_finite() {
            raw.max(0.0)
        } else {
            0.0
        }
    }

    /// The duration, only when it is actually usable for layout and seeks.
    ///
    /// Zero counts as unknown: time math against a zero duration is
    /// meaningless, so markers hide and the scrub percentage stays put.
    #[must_use]
    pub fn known_duration(&self) -> Option<f64> {
        self.duration.filter(|d| *d > 0.0)
    }

    /// Updates the position, clamped so `current_time <= duration` holds
    /// whenever the duration is known.
    pub fn update_position(&mut self, seconds: f64) {
        self.current_time = match self.known_duration() {
            Some(duration) => seconds.clamp(0.0, duration),
            None => seconds.max(0.0),
        };
    }

    /// Whether playback has reached the end of known media.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.known_duration()
            .is_some_and(|duration| self.current_time >= duration)
    }

    /// Scrub-bar fill percentage, `None` while the duration is unknown.
    #[must_use]
    pub fn progress_percent(&self) -> Option<f64> {
        self.known_duration()
            .map(|duration| 100.0 / duration * self.current_time)
    }
}
