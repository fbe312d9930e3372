// SPDX-License-Identifier: MPL-2.0
//! Canvas meters: the horizontal scrub bar with marker ticks and the
//! vertical volume bar.
//!
//! Meters display a value in `[0, 100]` and publish raw click geometry
//! (offset and extent); all percentage math stays in the orchestrator.
//! Marker hits are tested before bar hits so a marker click never doubles
//! as a seek.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use crate::marker::Marker;
use crate::player::Message;
use crate::ui::theme::{self, sizing, typography};
use iced::widget::Canvas;
use iced::{mouse, Element, Length};

/// Extra clickable width on each side of a marker tick.
const MARKER_HIT_SLOP: f32 = 2.0;

/// How far marker ticks stick out above the scrub band.
const TICK_OVERHANG: f32 = 4.0;

/// Scrub bar with marker ticks for the controls row.
#[must_use]
pub fn scrub(value: f64, markers: &[Marker], duration: Option<f64>) -> Element<'_, Message> {
    Canvas::new(ScrubBar {
        value: value.clamp(0.0, 100.0),
        markers,
        duration,
    })
    .width(Length::FillPortion(1))
    .height(Length::Fixed(sizing::CONTROL_HEIGHT))
    .into()
}

/// Vertical volume bar, filled bottom-to-top.
#[must_use]
pub fn volume(value: f64) -> Element<'static, Message> {
    Canvas::new(VolumeBar {
        value: value.clamp(0.0, 100.0),
    })
    .width(Length::Fixed(sizing::VOLUME_WIDTH))
    .height(Length::Fixed(sizing::CONTROL_HEIGHT))
    .into()
}

/// Index of the marker whose tick contains `x`, if any.
///
/// Ticks are centered on `time / duration` of the bar width; without a
/// usable duration no marker is hittable.
fn marker_at(markers: &[Marker], duration: Option<f64>, x: f32, width: f32) -> Option<usize> {
    markers.iter().position(|marker| {
        marker.tick_position_percent(duration).is_some_and(|pct| {
            let center = (pct / 100.0) as f32 * width;
            (x - center).abs() <= sizing::MARKER_TICK_WIDTH / 2.0 + MARKER_HIT_SLOP
        })
    })
}

/// Canvas program for the scrub bar.
///
/// The bar band occupies the bottom [`sizing::SCRUB_HEIGHT`] pixels of the
/// canvas; the space above it hosts the tick overhang and the hovered
/// marker's title label.
struct ScrubBar<'a> {
    value: f64,
    markers: &'a [Marker],
    duration: Option<f64>,
}

impl ScrubBar<'_> {
    fn band_top(height: f32) -> f32 {
        height - sizing::SCRUB_HEIGHT
    }

    fn tick_top(height: f32) -> f32 {
        Self::band_top(height) - TICK_OVERHANG
    }
}

impl iced::widget::canvas::Program<Message> for ScrubBar<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        if let iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) =
            event
        {
            let position = cursor.position_in(bounds)?;
            if position.y < Self::tick_top(bounds.height) {
                return None;
            }

            if let Some(index) = marker_at(self.markers, self.duration, position.x, bounds.width)
            {
                return Some(
                    Action::publish(Message::MarkerPressed(self.markers[index].id))
                        .and_capture(),
                );
            }

            if position.y >= Self::band_top(bounds.height) {
                return Some(
                    Action::publish(Message::ScrubPressed {
                        offset_x: position.x,
                        width: bounds.width,
                    })
                    .and_capture(),
                );
            }
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::{Frame, Text};

        let mut frame = Frame::new(renderer, bounds.size());
        let band_top = Self::band_top(bounds.height);
        let tick_top = Self::tick_top(bounds.height);

        // Track and fill.
        frame.fill_rectangle(
            iced::Point::new(0.0, band_top),
            iced::Size::new(bounds.width, sizing::SCRUB_HEIGHT),
            theme::meter_track_color(),
        );
        let fill_width = (self.value / 100.0) as f32 * bounds.width;
        if fill_width > 0.0 {
            frame.fill_rectangle(
                iced::Point::new(0.0, band_top),
                iced::Size::new(fill_width, sizing::SCRUB_HEIGHT),
                theme::meter_fill_color(),
            );
        }

        // Marker ticks, centered on their position.
        for marker in self.markers {
            let Some(pct) = marker.tick_position_percent(self.duration) else {
                continue;
            };
            let center = (pct / 100.0) as f32 * bounds.width;
            frame.fill_rectangle(
                iced::Point::new(center - sizing::MARKER_TICK_WIDTH / 2.0, tick_top),
                iced::Size::new(
                    sizing::MARKER_TICK_WIDTH,
                    sizing::SCRUB_HEIGHT + TICK_OVERHANG,
                ),
                marker.color,
            );
        }

        // Title label for the hovered marker.
        let hovered = cursor
            .position_in(bounds)
            .filter(|position| position.y >= tick_top)
            .and_then(|position| marker_at(self.markers, self.duration, position.x, bounds.width));
        if let Some(index) = hovered {
            let marker = &self.markers[index];
            if !marker.title.is_empty() {
                let pct = marker.tick_position_percent(self.duration).unwrap_or(0.0);
                let center = (pct / 100.0) as f32 * bounds.width;
                // No text measuring on a frame; estimate to keep the label
                // inside the canvas.
                let estimated_width = marker.title.len() as f32 * typography::CAPTION * 0.6;
                let label_x = center.min(bounds.width - estimated_width).max(0.0);
                frame.fill_rectangle(
                    iced::Point::new(label_x - 2.0, 0.0),
                    iced::Size::new(estimated_width + 4.0, typography::CAPTION + 4.0),
                    theme::marker_label_background(),
                );
                frame.fill_text(Text {
                    content: marker.title.clone(),
                    position: iced::Point::new(label_x, 0.0),
                    color: theme::marker_label_text_color(),
                    size: typography::CAPTION.into(),
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Canvas program for the volume bar.
struct VolumeBar {
    value: f64,
}

impl iced::widget::canvas::Program<Message> for VolumeBar {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        if let iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) =
            event
        {
            let position = cursor.position_in(bounds)?;
            return Some(
                Action::publish(Message::VolumePressed {
                    offset_y: position.y,
                    height: bounds.height,
                })
                .and_capture(),
            );
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::Frame;

        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            iced::Point::ORIGIN,
            bounds.size(),
            theme::meter_track_color(),
        );

        let fill_height = (self.value / 100.0) as f32 * bounds.height;
        if fill_height > 0.0 {
            frame.fill_rectangle(
                iced::Point::new(0.0, bounds.height - fill_height),
                iced::Size::new(bounds.width, fill_height),
                theme::meter_fill_color(),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
