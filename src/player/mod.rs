// SPDX-License-Identifier: MPL-2.0
//! Player orchestrator - couples a bound media element to the controls panel.
//!
//! The orchestrator owns the playback record and the media binding:
//! - Lifecycle: `bind` acquires the element, `release` surrenders it
//! - Host sync: level-triggered setters push host-owned play state and volume
//! - Tick: polls the element and synthesizes duration/progress events
//! - Control messages become media calls and outbound [`Event`]s for the host
//!
//! The element is held as `Option`, so every message, tick, or setter that
//! arrives after `release` is a harmless no-op.

pub mod state;

pub use state::PlaybackState;

use crate::config::PlayerConfig;
use crate::fullscreen::Capability;
use crate::marker::Marker;
use crate::media::MediaElement;
use crate::volume::Volume;
use tracing::debug;

/// Playback orchestrator generic over the host's media element.
pub struct Player<M: MediaElement> {
    /// The bound element; `None` before `bind` and after `release`.
    media: Option<M>,

    /// Host-supplied configuration: source, controls, markers, sizing, and
    /// the host-owned play/volume values as last pushed.
    config: PlayerConfig,

    /// Playback record consumed read-only by the controls panel.
    state: PlaybackState,

    /// Fullscreen capability, selected once at construction.
    fullscreen: Capability,

    /// Volume remembered when muting; restored on unmute.
    premute_volume: Option<Volume>,
}

/// Control-panel interactions, produced by the rendered widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // PLAYBACK
    // ═══════════════════════════════════════════════════════════════════════
    /// The play/pause button was pressed.
    PlayPausePressed,
    /// The playback surface itself was clicked (toggles like the button).
    SurfacePressed,

    // ═══════════════════════════════════════════════════════════════════════
    // METERS
    // ═══════════════════════════════════════════════════════════════════════
    /// Click on the scrub bar, with the horizontal offset and bar width.
    ScrubPressed { offset_x: f32, width: f32 },
    /// Click on the volume bar, with the vertical offset and bar height.
    VolumePressed { offset_y: f32, height: f32 },
    /// Click on the scrub-bar tick of the marker with this id.
    MarkerPressed(u64),

    // ═══════════════════════════════════════════════════════════════════════
    // TOGGLES
    // ═══════════════════════════════════════════════════════════════════════
    /// The mute button was pressed.
    MuteToggled,
    /// The fullscreen button was pressed.
    FullscreenToggled,
    /// The download button was pressed.
    DownloadPressed,
}

/// Outbound notifications for the host application.
///
/// Delivered synchronously as return values of [`Player::update`] and
/// [`Player::tick`]; the host matches on them to keep its own play state
/// and volume in sync (the controlled-component round trip).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user asked to start playback; flip your play flag and call
    /// [`Player::set_playing`] with `true`.
    PlayRequested,
    /// Playback should stop, either from a user press or because the media
    /// finished.
    PauseRequested,
    /// The user picked a new volume; push it back via [`Player::set_volume`].
    VolumeChanged(Volume),
    /// Playback position advanced.
    Progress { time: f64, duration: Option<f64> },
    /// The element reported a (normalized) duration.
    DurationChanged(f64),
    /// A scrub-bar marker was clicked; the element was already seeked to
    /// the marker's time when this fires.
    MarkerClicked(Marker),
    /// The fullscreen flag flipped; restyle surrounding chrome accordingly.
    FullscreenChanged(bool),
    /// The user asked to download the configured source.
    DownloadRequested(String),
}

impl<M: MediaElement> Player<M> {
    /// Creates an unbound player. Fullscreen starts unsupported; install a
    /// detected capability with [`Player::with_fullscreen`].
    #[must_use]
    pub fn new(config: PlayerConfig) -> Self {
        let state = Self::initial_state(&config);
        Self {
            media: None,
            config,
            state,
            fullscreen: Capability::unsupported(),
            premute_volume: None,
        }
    }

    /// Installs a fullscreen capability (see [`Capability::detect`]).
    #[must_use]
    pub fn with_fullscreen(mut self, capability: Capability) -> Self {
        self.fullscreen = capability;
        self
    }

    fn initial_state(config: &PlayerConfig) -> PlaybackState {
        PlaybackState {
            is_playing: config.is_playing,
            muted: config.volume.is_silent(),
            ..PlaybackState::default()
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════

    /// Takes ownership of a media element and applies the configured
    /// loop flag, volume, start offset, and play state to it.
    ///
    /// A previously bound element is dropped; use [`Player::release`] first
    /// to get it back.
    pub fn bind(&mut self, mut media: M) {
        debug!(url = %self.config.url, "binding media element");

        media.set_looping(self.config.looping);
        media.set_volume(self.config.volume.value());
        media.set_muted(self.config.volume.is_silent());
        if self.config.time_start != 0.0 {
            media.seek(self.config.time_start);
        }
        if self.config.is_playing {
            media.play();
        }

        self.state = Self::initial_state(&self.config);
        self.media = Some(media);
    }

    /// Surrenders the media element and discards the playback record.
    ///
    /// Afterwards every message, tick, and setter is a no-op until the next
    /// `bind`. Returns `None` when nothing was bound.
    pub fn release(&mut self) -> Option<M> {
        let media = self.media.take();
        if media.is_some() {
            debug!("releasing media element");
            self.state = Self::initial_state(&self.config);
        }
        media
    }

    // ═══════════════════════════════════════════════════════════════════════
    // HOST SYNC (level-triggered setters)
    // ═══════════════════════════════════════════════════════════════════════

    /// Pushes the host-owned play state into the element.
    ///
    /// Redundant calls are harmless; `play`/`pause` are idempotent by the
    /// [`MediaElement`] contract.
    pub fn set_playing(&mut self, playing: bool) {
        self.config.is_playing = playing;
        self.state.is_playing = playing;
        if let Some(media) = self.media.as_mut() {
            if playing {
                media.play();
            } else {
                media.pause();
            }
        }
    }

    /// Pushes the host-owned volume into the element.
    ///
    /// A silent volume also mutes the element; any audible volume unmutes
    /// it. The mute flag in the playback record follows suit.
    pub fn set_volume(&mut self, volume: Volume) {
        self.config.volume = volume;
        self.state.muted = volume.is_silent();
        if let Some(media) = self.media.as_mut() {
            media.set_volume(volume.value());
            media.set_muted(volume.is_silent());
        }
    }

    /// Updates the configured start offset; on change, seeks the element
    /// straight to it. A zero offset only updates the configuration.
    pub fn set_time_start(&mut self, secs: f64) {
        if secs == self.config.time_start {
            return;
        }
        self.config.time_start = secs;
        if secs == 0.0 {
            return;
        }
        if let Some(media) = self.media.as_mut() {
            debug!(target_secs = secs, "seeking to configured start offset");
            media.seek(secs);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // TICK
    // ═══════════════════════════════════════════════════════════════════════

    /// Polls the element and synthesizes duration/progress events.
    ///
    /// A duration change is always emitted before the progress event of the
    /// same tick. When the position reaches a known duration while the host
    /// still considers playback running, [`Event::PauseRequested`] follows
    /// the progress event so the host can transition its play state.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        let Some(media) = self.media.as_mut() else {
            return events;
        };

        if let Some(raw) = media.duration() {
            let normalized = PlaybackState::normalize_duration(raw);
            if self.state.duration != Some(normalized) {
                self.state.duration = Some(normalized);
                events.push(Event::DurationChanged(normalized));
            }
        }

        let polled = media.current_time();
        if polled != self.state.current_time {
            self.state.update_position(polled);
            events.push(Event::Progress {
                time: self.state.current_time,
                duration: self.state.duration,
            });
            if self.state.is_playing && self.state.is_finished() {
                events.push(Event::PauseRequested);
            }
        }

        events
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CONTROL MESSAGES
    // ═══════════════════════════════════════════════════════════════════════

    /// Handles a control-panel interaction.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> Vec<Event> {
        if self.media.is_none() {
            return Vec::new();
        }

        match message {
            // ═══════════════════════════════════════════════════════════════
            // PLAYBACK
            // ═══════════════════════════════════════════════════════════════
            Message::PlayPausePressed | Message::SurfacePressed => {
                if self.state.is_playing {
                    vec![Event::PauseRequested]
                } else {
                    vec![Event::PlayRequested]
                }
            }

            // ═══════════════════════════════════════════════════════════════
            // METERS
            // ═══════════════════════════════════════════════════════════════
            Message::ScrubPressed { offset_x, width } => {
                let Some(duration) = self.state.known_duration() else {
                    return Vec::new();
                };
                let percentage = f64::from(offset_x) * 100.0 / f64::from(width);
                let target_secs = percentage / 100.0 * duration;
                if let Some(media) = self.media.as_mut() {
                    debug!(target_secs, "scrub seek");
                    media.seek(target_secs);
                }
                Vec::new()
            }
            Message::VolumePressed { offset_y, height } => {
                // The bar reads bottom-to-top, so the offset is inverted.
                let inverted = height - offset_y;
                let percentage = f64::from(inverted) * 100.0 / f64::from(height);
                if let Some(media) = self.media.as_mut() {
                    media.set_muted(false);
                }
                vec![Event::VolumeChanged(Volume::from_percent(percentage))]
            }
            Message::MarkerPressed(id) => {
                let Some(marker) = self.config.markers.iter().find(|m| m.id == id).cloned()
                else {
                    return Vec::new();
                };
                // Seek first: a host handler reading the position must see
                // the post-seek value.
                if let Some(media) = self.media.as_mut() {
                    media.seek(marker.time);
                }
                vec![Event::MarkerClicked(marker)]
            }

            // ═══════════════════════════════════════════════════════════════
            // TOGGLES
            // ═══════════════════════════════════════════════════════════════
            Message::MuteToggled => self.toggle_mute(),
            Message::FullscreenToggled => {
                let target = !self.state.is_full_screen;
                // Best effort: the flag flips even without a backend so the
                // button keeps working; Capability logs the degradation.
                self.fullscreen.set_fullscreen(target);
                self.state.is_full_screen = target;
                vec![Event::FullscreenChanged(target)]
            }
            Message::DownloadPressed => {
                vec![Event::DownloadRequested(self.config.url.clone())]
            }
        }
    }

    fn toggle_mute(&mut self) -> Vec<Event> {
        let Some(media) = self.media.as_mut() else {
            return Vec::new();
        };

        if self.state.muted {
            let restored = self.premute_volume.unwrap_or_default();
            media.set_muted(false);
            media.set_volume(restored.value());
            self.state.muted = false;
            vec![Event::VolumeChanged(restored)]
        } else {
            if !self.config.volume.is_silent() {
                self.premute_volume = Some(self.config.volume);
            }
            media.set_muted(true);
            media.set_volume(crate::volume::volume_bounds::MIN);
            self.state.muted = true;
            vec![Event::VolumeChanged(Volume::new(
                crate::volume::volume_bounds::MIN,
            ))]
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// The playback record the controls render from.
    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The current configuration, including host-pushed play state and volume.
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Whether a media element is currently bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.media.is_some()
    }

    /// The bound media element, if any.
    #[must_use]
    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    /// Mutable access to the bound media element, if any.
    pub fn media_mut(&mut self) -> Option<&mut M> {
        self.media.as_mut()
    }

    /// Whether a fullscreen backend was detected.
    #[must_use]
    pub fn is_fullscreen_supported(&self) -> bool {
        self.fullscreen.is_supported()
    }

    /// Renders the playback surface and controls row.
    #[must_use]
    pub fn view(&self) -> iced::Element<'_, Message> {
        crate::ui::controls::view(&self.state, &self.config)
    }
}
