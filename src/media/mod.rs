// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the playback primitive the
//! player orchestrates. Hosts implement it over whatever backend actually
//! renders the media; [`ClockMedia`] is the bundled reference implementation
//! that simulates playback against a wall clock.
//!
//! # Design Notes
//!
//! - The element is **stateful** - it maintains the current playback position
//! - Methods are infallible - the element absorbs out-of-range input instead
//!   of reporting errors (a seek past the end clamps, an unknown duration is
//!   `None`), so the orchestrator never needs a failure path
//! - Decoding, rendering, and audio output happen entirely behind the trait;
//!   the player only reads time/duration and issues transport calls

pub mod clock;

pub use clock::ClockMedia;

/// Port for the host's media playback primitive.
///
/// The player polls `current_time`/`duration` on every tick and drives the
/// transport methods from user interactions and host state changes.
///
/// # Contract
///
/// - `play` while playing and `pause` while paused are harmless no-ops; the
///   player syncs level-triggered state and will issue redundant calls.
/// - `seek` must accept any finite target and clamp it to the seekable range
///   itself. Implementations must not panic on out-of-range input.
/// - `duration` returns `None` until the duration is known. A live source may
///   report `f64::INFINITY`; the player normalizes that to zero.
pub trait MediaElement {
    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback, keeping the current position.
    fn pause(&mut self);

    /// Jumps straight to the given position in seconds.
    fn seek(&mut self, seconds: f64);

    /// Sets the output volume in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f64);

    /// Mutes or unmutes the output without touching the volume value.
    fn set_muted(&mut self, muted: bool);

    /// Enables or disables looping at end of media.
    fn set_looping(&mut self, looping: bool);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Total duration in seconds, `None` while unknown.
    fn duration(&self) -> Option<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Object safety keeps `Box<dyn MediaElement>` hosts possible.
    fn _assert_object_safe(_: &dyn MediaElement) {}

    #[derive(Default)]
    struct ScriptedMedia {
        position: f64,
        duration: Option<f64>,
        playing: bool,
    }

    impl MediaElement for ScriptedMedia {
        fn play(&mut self) {
            self.playing = true;
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn seek(&mut self, seconds: f64) {
            let end = self.duration.unwrap_or(f64::MAX);
            self.position = seconds.clamp(0.0, end);
        }

        fn set_volume(&mut self, _volume: f64) {}

        fn set_muted(&mut self, _muted: bool) {}

        fn set_looping(&mut self, _looping: bool) {}

        fn current_time(&self) -> f64 {
            self.position
        }

        fn duration(&self) -> Option<f64> {
            self.duration
        }
    }

    #[test]
    fn scripted_media_honors_transport_calls() {
        let mut media = ScriptedMedia {
            duration: Some(10.0),
            ..ScriptedMedia::default()
        };

        media.play();
        assert!(media.playing);

        media.seek(4.0);
        assert_eq!(media.current_time(), 4.0);

        // Past-the-end seeks clamp per the trait contract.
        media.seek(99.0);
        assert_eq!(media.current_time(), 10.0);

        media.pause();
        assert!(!media.playing);
    }

    #[test]
    fn redundant_transport_calls_are_no_ops() {
        let mut media = ScriptedMedia::default();
        media.pause();
        media.pause();
        assert!(!media.playing);

        media.play();
        media.play();
        assert!(media.playing);
    }
}
