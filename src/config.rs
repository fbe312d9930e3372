// SPDX-License-Identifier: MPL-2.0
//! Player configuration.
//!
//! [`PlayerConfig`] is the full surface a host hands to the player when
//! creating it: source URL, which controls render, initial playback state,
//! markers, and container sizing. [`ControlsConfig`] decides visibility
//! only; a control absent from the list renders nothing, not a disabled
//! placeholder.

use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::volume::Volume;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================================================
// Defaults
// ==========================================================================

/// Centralized default values for the player configuration.
pub mod defaults {
    /// Default player surface width in pixels.
    pub const WIDTH: f32 = 640.0;

    /// Default player surface height in pixels.
    pub const HEIGHT: f32 = 360.0;

    /// Default start offset in seconds (no initial seek).
    pub const TIME_START: f64 = 0.0;
}

const _: () = {
    assert!(defaults::WIDTH > 0.0);
    assert!(defaults::HEIGHT > 0.0);
    assert!(defaults::TIME_START >= 0.0);
};

// ==========================================================================
// Controls
// ==========================================================================

/// A single control affordance the panel can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    /// Play/pause toggle button.
    Play,
    /// Current/total time readout.
    Time,
    /// Scrub bar with marker overlay.
    Progress,
    /// Volume bar with mute toggle.
    Volume,
    /// Fullscreen toggle button.
    FullScreen,
    /// Download button.
    Download,
}

impl Control {
    /// The canonical name of this control.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Control::Play => "play",
            Control::Time => "time",
            Control::Progress => "progress",
            Control::Volume => "volume",
            Control::FullScreen => "full-screen",
            Control::Download => "download",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Control {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "play" => Ok(Control::Play),
            "time" => Ok(Control::Time),
            "progress" => Ok(Control::Progress),
            "volume" => Ok(Control::Volume),
            "full-screen" => Ok(Control::FullScreen),
            "download" => Ok(Control::Download),
            other => Err(Error::UnknownControl(other.to_string())),
        }
    }
}

/// Controls rendered by default. `Download` is recognized but opt-in.
pub const DEFAULT_CONTROLS: &[Control] = &[
    Control::Play,
    Control::Time,
    Control::Progress,
    Control::Volume,
    Control::FullScreen,
];

/// Ordered list of controls to render.
///
/// List order is the render order; membership determines visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig(Vec<Control>);

impl ControlsConfig {
    /// Creates a controls configuration from an explicit list.
    #[must_use]
    pub fn new(controls: impl Into<Vec<Control>>) -> Self {
        Self(controls.into())
    }

    /// An empty configuration: no controls row is rendered at all.
    #[must_use]
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Every recognized control, including `Download`.
    #[must_use]
    pub fn all() -> Self {
        Self(vec![
            Control::Play,
            Control::Time,
            Control::Progress,
            Control::Volume,
            Control::FullScreen,
            Control::Download,
        ])
    }

    /// Parses a comma-separated list of control names.
    ///
    /// Empty entries are skipped, so `""` yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownControl`] for any unrecognized name.
    pub fn parse(list: &str) -> Result<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Control::from_str)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Whether the given control should render.
    #[must_use]
    pub fn contains(&self, control: Control) -> bool {
        self.0.contains(&control)
    }

    /// True when no controls are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the configured controls in render order.
    pub fn iter(&self) -> impl Iterator<Item = Control> + '_ {
        self.0.iter().copied()
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self(DEFAULT_CONTROLS.to_vec())
    }
}

impl From<Vec<Control>> for ControlsConfig {
    fn from(controls: Vec<Control>) -> Self {
        Self(controls)
    }
}

// ==========================================================================
// Player configuration
// ==========================================================================

/// Full configuration surface for a player instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Media source address; echoed back on download requests.
    pub url: String,
    /// Which control affordances render, in order.
    pub controls: ControlsConfig,
    /// Initial desired play state.
    pub is_playing: bool,
    /// Initial desired volume.
    pub volume: Volume,
    /// Loop flag passed through to the media element.
    pub looping: bool,
    /// Markers overlaid on the scrub bar.
    pub markers: Vec<Marker>,
    /// Initial seek offset in seconds; zero means no initial seek.
    pub time_start: f64,
    /// Player surface width in pixels.
    pub width: f32,
    /// Player surface height in pixels.
    pub height: f32,
}

impl PlayerConfig {
    /// Creates a configuration for the given source URL with default settings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            controls: ControlsConfig::default(),
            is_playing: false,
            volume: Volume::default(),
            looping: false,
            markers: Vec::new(),
            time_start: defaults::TIME_START,
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
        }
    }

    /// Replaces the rendered control set.
    #[must_use]
    pub fn with_controls(mut self, controls: ControlsConfig) -> Self {
        self.controls = controls;
        self
    }

    /// Sets the initial play state.
    #[must_use]
    pub fn with_playing(mut self, playing: bool) -> Self {
        self.is_playing = playing;
        self
    }

    /// Sets the initial volume.
    #[must_use]
    pub fn with_volume(mut self, volume: Volume) -> Self {
        self.volume = volume;
        self
    }

    /// Enables or disables looping.
    #[must_use]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Sets the markers shown on the scrub bar.
    #[must_use]
    pub fn with_markers(mut self, markers: Vec<Marker>) -> Self {
        self.markers = markers;
        self
    }

    /// Sets the initial seek offset in seconds.
    #[must_use]
    pub fn with_time_start(mut self, secs: f64) -> Self {
        self.time_start = secs;
        self
    }

    /// Sets the player surface size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_controls_omit_download() {
        let controls = ControlsConfig::default();
        assert!(controls.contains(Control::Play));
        assert!(controls.contains(Control::Time));
        assert!(controls.contains(Control::Progress));
        assert!(controls.contains(Control::Volume));
        assert!(controls.contains(Control::FullScreen));
        assert!(!controls.contains(Control::Download));
    }

    #[test]
    fn parse_accepts_known_names() {
        let controls = ControlsConfig::parse("play, time,progress").unwrap();
        assert_eq!(
            controls,
            ControlsConfig::new(vec![Control::Play, Control::Time, Control::Progress])
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = ControlsConfig::parse("play,spin").unwrap_err();
        assert_eq!(err, Error::UnknownControl("spin".to_string()));
    }

    #[test]
    fn parse_empty_list_yields_no_controls() {
        let controls = ControlsConfig::parse("").unwrap();
        assert!(controls.is_empty());
    }

    #[test]
    fn control_names_round_trip() {
        for control in [
            Control::Play,
            Control::Time,
            Control::Progress,
            Control::Volume,
            Control::FullScreen,
            Control::Download,
        ] {
            assert_eq!(control.name().parse::<Control>().unwrap(), control);
        }
    }

    #[test]
    fn iteration_preserves_order() {
        let controls = ControlsConfig::new(vec![Control::Time, Control::Play]);
        let order: Vec<Control> = controls.iter().collect();
        assert_eq!(order, vec![Control::Time, Control::Play]);
    }

    #[test]
    fn config_defaults_match_documented_values() {
        let config = PlayerConfig::new("https://example.com/clip.mp4");
        assert_eq!(config.url, "https://example.com/clip.mp4");
        assert!(!config.is_playing);
        assert!(!config.looping);
        assert!(config.markers.is_empty());
        assert_eq!(config.time_start, defaults::TIME_START);
        assert_eq!(config.width, defaults::WIDTH);
        assert_eq!(config.height, defaults::HEIGHT);
        assert_abs_diff_eq!(config.volume.value(), 0.7);
    }

    #[test]
    fn builders_chain() {
        let config = PlayerConfig::new("clip.mp4")
            .with_playing(true)
            .with_looping(true)
            .with_time_start(12.0)
            .with_size(1280.0, 720.0)
            .with_controls(ControlsConfig::all());

        assert!(config.is_playing);
        assert!(config.looping);
        assert_eq!(config.time_start, 12.0);
        assert_eq!((config.width, config.height), (1280.0, 720.0));
        assert!(config.controls.contains(Control::Download));
    }
}
