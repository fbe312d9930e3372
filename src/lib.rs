// SPDX-License-Identifier: MPL-2.0
//! `iced_video` is a themeable video player widget for the Iced GUI framework.
//!
//! It wraps a host-provided media element with rendered playback controls:
//! play/pause, a time readout, a scrub bar with markers, a volume bar with
//! mute, fullscreen, and download. The [`player::Player`] orchestrator keeps
//! the element and the controls in sync and reports playback activity back
//! to the host through [`player::Event`] values.

#![doc(html_root_url = "https://docs.rs/iced_video/0.1.0")]

pub mod config;
pub mod error;
pub mod fullscreen;
pub mod marker;
pub mod media;
pub mod player;
pub mod ui;
pub mod volume;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{Control, ControlsConfig, PlayerConfig};
pub use error::{Error, Result};
pub use fullscreen::{CallbackBackend, Capability, FullscreenBackend};
pub use marker::Marker;
pub use media::{ClockMedia, MediaElement};
pub use player::{Event, Message, PlaybackState, Player};
pub use volume::Volume;
