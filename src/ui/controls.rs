// SPDX-License-Identifier: MPL-2.0
//! Player chrome: the clickable surface, the bottom controls row, and the
//! fullscreen close overlay.
//!
//! Controls render in the order the configuration lists them; a control
//! that is not listed is not rendered, and an empty list drops the whole
//! row. The surface itself toggles playback like the play button.

use crate::config::{Control, PlayerConfig};
use crate::marker::Marker;
use crate::player::{Message, PlaybackState};
use crate::ui::meter;
use crate::ui::theme::{self, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, row, tooltip, Row, Stack, Text};
use iced::{Element, Length};

/// Builds the full player element for the current playback state.
pub fn view<'a>(state: &'a PlaybackState, config: &'a PlayerConfig) -> Element<'a, Message> {
    let surface = mouse_area(
        container(Text::new(""))
            .width(Length::Fixed(config.width))
            .height(Length::Fixed(config.height))
            .style(theme::surface_backdrop()),
    )
    .on_press(Message::SurfacePressed);

    let mut stack = Stack::new().push(surface);

    if state.is_full_screen {
        stack = stack.push(
            container(close_button())
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::SM),
        );
    }

    if let Some(row) = controls_row(state, config) {
        stack = stack.push(
            container(row)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}

/// Formats a position in seconds as `MM:SS`, or `H:MM:SS` past an hour.
///
/// Fractional seconds are truncated and negative positions read as zero.
#[must_use]
pub fn format_time_code(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// `current / duration` readout text.
///
/// The duration is rounded up so the readout never shows a total the
/// position can pass, and the current position snaps to that rounded total
/// when playback reaches the exact end.
fn readout(state: &PlaybackState) -> String {
    let duration_code = format_time_code(state.duration.map_or(0.0, f64::ceil));
    let current_code = if state.duration == Some(state.current_time) {
        duration_code.clone()
    } else {
        format_time_code(state.current_time)
    };

    format!("{current_code} / {duration_code}")
}

/// A control slot resolved to the values it renders.
#[derive(Debug, PartialEq)]
enum Slot<'a> {
    Play { playing: bool },
    Time { readout: String },
    Scrub {
        percent: f64,
        markers: &'a [Marker],
        duration: Option<f64>,
    },
    Volume { percent: f64, muted: bool },
    Fullscreen { active: bool },
    Download,
}

/// Resolves the configured control list into slots, in list order.
///
/// A control that is not listed yields no slot, so it renders nothing.
fn slots<'a>(state: &PlaybackState, config: &'a PlayerConfig) -> Vec<Slot<'a>> {
    config
        .controls
        .iter()
        .map(|control| match control {
            Control::Play => Slot::Play {
                playing: state.is_playing,
            },
            Control::Time => Slot::Time {
                readout: readout(state),
            },
            Control::Progress => Slot::Scrub {
                percent: state.progress_percent().unwrap_or(0.0),
                markers: &config.markers,
                duration: state.known_duration(),
            },
            Control::Volume => Slot::Volume {
                percent: config.volume.percent(),
                muted: state.muted,
            },
            Control::FullScreen => Slot::Fullscreen {
                active: state.is_full_screen,
            },
            Control::Download => Slot::Download,
        })
        .collect()
}

fn controls_row<'a>(
    state: &PlaybackState,
    config: &'a PlayerConfig,
) -> Option<Element<'a, Message>> {
    let slots = slots(state, config);
    if slots.is_empty() {
        return None;
    }

    let mut controls = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(iced::Alignment::Center);

    for slot in slots {
        controls = controls.push(match slot {
            Slot::Play { playing } => play_button(playing),
            Slot::Time { readout } => time_text(readout),
            Slot::Scrub {
                percent,
                markers,
                duration,
            } => meter::scrub(percent, markers, duration),
            Slot::Volume { percent, muted } => volume_cluster(percent, muted),
            Slot::Fullscreen { active } => fullscreen_button(active),
            Slot::Download => download_button(),
        });
    }

    Some(
        container(controls)
            .width(Length::Fill)
            .style(theme::controls_backdrop())
            .into(),
    )
}

fn play_button(playing: bool) -> Element<'static, Message> {
    let (glyph, label) = if playing {
        ("❚❚", "Pause")
    } else {
        ("►", "Play")
    };

    tooltip(
        button(Text::new(glyph).size(sizing::GLYPH))
            .on_press(Message::PlayPausePressed)
            .padding(spacing::XS)
            .width(Length::Shrink)
            .height(Length::Fixed(sizing::CONTROL_HEIGHT))
            .style(theme::control),
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(spacing::XXS)
    .into()
}

fn time_text(readout: String) -> Element<'static, Message> {
    Text::new(readout).size(typography::BODY).into()
}

fn volume_cluster(percent: f64, muted: bool) -> Element<'static, Message> {
    let (glyph, label) = if muted {
        ("🔇", "Unmute")
    } else {
        ("🔊", "Mute")
    };
    let style = if muted {
        theme::control_active
    } else {
        theme::control
    };

    let mute = tooltip(
        button(Text::new(glyph).size(sizing::GLYPH))
            .on_press(Message::MuteToggled)
            .padding(spacing::XS)
            .width(Length::Shrink)
            .height(Length::Fixed(sizing::CONTROL_HEIGHT))
            .style(style),
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(spacing::XXS);

    row![meter::volume(percent), mute]
        .spacing(spacing::XXS)
        .align_y(iced::Alignment::Center)
        .into()
}

fn fullscreen_button(active: bool) -> Element<'static, Message> {
    let label = if active {
        "Exit full screen"
    } else {
        "Full screen"
    };

    button(Text::new(label).size(typography::BODY))
        .on_press(Message::FullscreenToggled)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::CONTROL_HEIGHT))
        .style(theme::control)
        .into()
}

fn download_button() -> Element<'static, Message> {
    button(Text::new("Download").size(typography::BODY))
        .on_press(Message::DownloadPressed)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::CONTROL_HEIGHT))
        .style(theme::control)
        .into()
}

fn close_button() -> Element<'static, Message> {
    button(Text::new("Close video").size(typography::BODY))
        .on_press(Message::FullscreenToggled)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::CONTROL_HEIGHT))
        .style(theme::close_overlay())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlsConfig;
    use crate::volume::Volume;

    fn state() -> PlaybackState {
        PlaybackState::default()
    }

    fn config() -> PlayerConfig {
        PlayerConfig::new("https://example.com/clip.mp4")
    }

    #[test]
    fn time_code_starts_at_zero() {
        assert_eq!(format_time_code(0.0), "00:00");
    }

    #[test]
    fn time_code_pads_minutes_and_seconds() {
        assert_eq!(format_time_code(61.0), "01:01");
        assert_eq!(format_time_code(600.0), "10:00");
    }

    #[test]
    fn time_code_leaves_hours_unpadded() {
        assert_eq!(format_time_code(3661.0), "1:01:01");
        assert_eq!(format_time_code(36000.0), "10:00:00");
    }

    #[test]
    fn time_code_truncates_fractional_seconds() {
        assert_eq!(format_time_code(59.9), "00:59");
    }

    #[test]
    fn time_code_clamps_negative_positions() {
        assert_eq!(format_time_code(-5.0), "00:00");
    }

    #[test]
    fn readout_rounds_the_duration_up() {
        let mut state = state();
        state.current_time = 10.0;
        state.duration = Some(100.5);

        assert_eq!(readout(&state), "00:10 / 01:41");
    }

    #[test]
    fn readout_snaps_to_the_rounded_total_at_the_end() {
        let mut state = state();
        state.current_time = 100.5;
        state.duration = Some(100.5);

        assert_eq!(readout(&state), "01:41 / 01:41");

        state.current_time = 100.4;
        assert_eq!(readout(&state), "01:40 / 01:41");
    }

    #[test]
    fn readout_shows_zero_while_duration_is_unknown() {
        assert_eq!(readout(&state()), "00:00 / 00:00");
    }

    #[test]
    fn empty_control_set_renders_no_row() {
        let config = config().with_controls(ControlsConfig::none());

        assert!(slots(&state(), &config).is_empty());
        assert!(
            controls_row(&state(), &config).is_none(),
            "an empty control set should drop the whole row"
        );
    }

    #[test]
    fn only_listed_controls_render_in_list_order() {
        let config =
            config().with_controls(ControlsConfig::new(vec![Control::Play, Control::Time]));

        assert_eq!(
            slots(&state(), &config),
            vec![
                Slot::Play { playing: false },
                Slot::Time { readout: String::from("00:00 / 00:00") },
            ],
            "a two-entry list should render exactly those controls"
        );
    }

    #[test]
    fn volume_slot_shows_the_level_as_a_percentage() {
        let config = config().with_volume(Volume::new(0.5));

        assert!(
            slots(&state(), &config).contains(&Slot::Volume { percent: 50.0, muted: false }),
            "half volume should meter at fifty"
        );
    }

    #[test]
    fn scrub_slot_carries_progress_markers_and_duration() {
        let config = config().with_markers(vec![Marker::new(1, 5.0)]);
        let mut state = state();
        state.duration = Some(120.0);
        state.current_time = 30.0;

        assert!(slots(&state, &config).contains(&Slot::Scrub {
            percent: 25.0,
            markers: &config.markers,
            duration: Some(120.0),
        }));
    }

    #[test]
    fn view_renders() {
        let config = config()
            .with_markers(vec![Marker::new(1, 5.0)])
            .with_volume(Volume::new(0.5));
        let state = state();
        let _element = view(&state, &config);
    }

    #[test]
    fn view_renders_the_fullscreen_overlay() {
        let mut state = state();
        state.is_full_screen = true;
        let config = config();
        let _element = view(&state, &config);
    }

    #[test]
    fn view_renders_without_controls() {
        let config = config().with_controls(ControlsConfig::none());
        let state = state();
        let _element = view(&state, &config);
    }
}
