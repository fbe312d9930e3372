// SPDX-License-Identifier: MPL-2.0
//! Timestamp markers overlaid on the scrub bar.

use iced::Color;
use serde::{Deserialize, Serialize};

/// A labeled, colored timestamp annotation on the scrub bar.
///
/// Markers are supplied by the host as read-only configuration; the player
/// never mutates them, only positions their ticks and reports clicks with
/// the originating marker unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Host-assigned identifier, echoed back on click.
    pub id: u64,
    /// Time position in seconds.
    pub time: f64,
    /// Tick color.
    #[serde(with = "color_rgba")]
    pub color: Color,
    /// Tooltip text shown when hovering the tick.
    pub title: String,
}

impl Marker {
    /// Creates a new marker at the given time.
    #[must_use]
    pub fn new(id: u64, time: f64) -> Self {
        Self {
            id,
            time,
            color: Color::WHITE,
            title: String::new(),
        }
    }

    /// Sets the tick color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the tooltip title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Position of this marker's tick as a percentage of the bar width.
    ///
    /// Returns `None` while the duration is unknown (or zero), in which case
    /// the tick stays off-screen rather than collapsing to 0%. A time past
    /// the end clamps to 100%.
    #[must_use]
    pub fn tick_position_percent(&self, duration: Option<f64>) -> Option<f64> {
        match duration {
            Some(d) if d > 0.0 => Some((self.time / d * 100.0).clamp(0.0, 100.0)),
            _ => None,
        }
    }
}

/// Serde representation of [`iced::Color`] as RGBA components.
mod color_rgba {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        [color.r, color.g, color.b, color.a].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let [r, g, b, a] = <[f32; 4]>::deserialize(deserializer)?;
        Ok(Color { r, g, b, a })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn tick_position_is_proportional() {
        let early = Marker::new(1, 5.0);
        let mid = Marker::new(2, 10.0);
        let duration = Some(20.0);

        assert_abs_diff_eq!(early.tick_position_percent(duration).unwrap(), 25.0);
        assert_abs_diff_eq!(mid.tick_position_percent(duration).unwrap(), 50.0);
    }

    #[test]
    fn tick_position_clamps_past_the_end() {
        let late = Marker::new(1, 25.0);
        assert_abs_diff_eq!(late.tick_position_percent(Some(20.0)).unwrap(), 100.0);
    }

    #[test]
    fn tick_position_hidden_without_duration() {
        let marker = Marker::new(1, 5.0);
        assert_eq!(marker.tick_position_percent(None), None);
        assert_eq!(marker.tick_position_percent(Some(0.0)), None);
    }

    #[test]
    fn tick_position_clamps_negative_times() {
        let marker = Marker::new(1, -3.0);
        assert_abs_diff_eq!(marker.tick_position_percent(Some(20.0)).unwrap(), 0.0);
    }

    #[test]
    fn builders_set_fields() {
        let marker = Marker::new(7, 12.5)
            .with_color(Color::from_rgb(1.0, 0.5, 0.0))
            .with_title("Chapter 2");

        assert_eq!(marker.id, 7);
        assert_abs_diff_eq!(marker.time, 12.5);
        assert_eq!(marker.title, "Chapter 2");
    }

    #[test]
    fn markers_compare_by_value() {
        let a = Marker::new(1, 5.0).with_title("intro");
        let b = Marker::new(1, 5.0).with_title("intro");
        assert_eq!(a, b);
    }
}
