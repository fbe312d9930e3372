// SPDX-License-Identifier: MPL-2.0
//! Wall-clock reference media element.
//!
//! [`ClockMedia`] simulates playback by interpolating the position from a
//! monotonic clock: while playing, the position is the seek base plus the
//! wall time elapsed since playback started. There is no decoding and no
//! audio output, which makes it useful as a stand-in element in demos and
//! for exercising the orchestrator in tests.

use crate::media::MediaElement;
use std::time::Instant;
use tracing::debug;

/// Media element that plays against the wall clock.
///
/// The position saturates at the duration (or wraps when looping); the
/// element never pauses itself, mirroring how the orchestrator is the one
/// that reacts to playback reaching the end.
#[derive(Debug, Clone)]
pub struct ClockMedia {
    /// Position when playback last started, paused, or sought.
    base_secs: f64,
    /// Set while playing; elapsed wall time since this instant is added to the base.
    started_at: Option<Instant>,
    duration: Option<f64>,
    volume: f64,
    muted: bool,
    looping: bool,
}

impl ClockMedia {
    /// Creates a paused element at position zero with a known duration.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            base_secs: 0.0,
            started_at: None,
            duration: Some(duration_secs),
            volume: 1.0,
            muted: false,
            looping: false,
        }
    }

    /// Creates an element that reports an unbounded duration, like a live stream.
    #[must_use]
    pub fn live() -> Self {
        Self {
            duration: Some(f64::INFINITY),
            ..Self::new(0.0)
        }
    }

    /// Raw interpolated position before end-of-media handling.
    fn raw_position(&self) -> f64 {
        let elapsed = self
            .started_at
            .map_or(0.0, |started| started.elapsed().as_secs_f64());
        self.base_secs + elapsed
    }

    /// The end position when the duration is finite and non-zero.
    fn finite_end(&self) -> Option<f64> {
        self.duration.filter(|d| d.is_finite() && *d > 0.0)
    }

    /// Whether the element is currently advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current output volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Whether the output is muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether looping at end of media is enabled.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl MediaElement for ClockMedia {
    fn play(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if self.started_at.is_some() {
            self.base_secs = self.current_time();
            self.started_at = None;
        }
    }

    fn seek(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let target = match self.finite_end() {
            Some(end) => seconds.clamp(0.0, end),
            None => seconds.max(0.0),
        };
        debug!(target_secs = target, "clock media seek");
        self.base_secs = target;
        // Restart the wall-time reference so interpolation resumes from the target.
        if self.started_at.is_some() {
            self.started_at = Some(Instant::now());
        }
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn current_time(&self) -> f64 {
        let raw = self.raw_position();
        match self.finite_end() {
            Some(end) if self.looping => raw % end,
            Some(end) => raw.min(end),
            None => raw,
        }
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}
