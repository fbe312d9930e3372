// SPDX-License-Identifier: MPL-2.0
//! Volume newtype.
//!
//! Wraps the playback volume so it is always within the valid range,
//! no matter where the value came from (host configuration, a click on
//! the volume bar, a restore after unmute).

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level (silence).
    pub const MIN: f64 = 0.0;
    /// Maximum volume level.
    pub const MAX: f64 = 1.0;
    /// Default volume level, also used when unmuting without a remembered value.
    pub const DEFAULT: f64 = 0.7;
    /// Below this threshold the volume counts as silent.
    pub const SILENCE_THRESHOLD: f64 = 0.001;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// This newtype enforces validity at the type level, making it impossible
/// to hand the media element an out-of-range volume value. Clicks outside
/// the volume bar produce out-of-range percentages; the clamp in [`Volume::new`]
/// absorbs them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Creates a volume from a percentage in `[0, 100]`, clamping.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self::new(percent / 100.0)
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the volume as a percentage in `[0, 100]`, as the meter displays it.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Returns true if the volume is effectively silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 < volume_bounds::SILENCE_THRESHOLD
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

const _: () = {
    assert!(volume_bounds::MIN < volume_bounds::MAX);
    assert!(volume_bounds::DEFAULT >= volume_bounds::MIN);
    assert!(volume_bounds::DEFAULT <= volume_bounds::MAX);
    assert!(volume_bounds::SILENCE_THRESHOLD > 0.0);
};
