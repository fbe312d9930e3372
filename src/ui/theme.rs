// SPDX-License-Identifier: MPL-2.0
//! Design tokens and widget styles for the player chrome.
//!
//! Tokens are grouped by concern (palette, opacity, spacing, sizing,
//! typography) and kept consistent; the style functions below build the
//! actual iced widget styles from them.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Accent colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of control buttons in the controls row.
    pub const CONTROL_HEIGHT: f32 = 36.0;

    /// Clickable height of the scrub bar.
    pub const SCRUB_HEIGHT: f32 = 12.0;

    /// Width of the vertical volume bar.
    pub const VOLUME_WIDTH: f32 = 10.0;

    /// Width of a marker tick on the scrub bar.
    pub const MARKER_TICK_WIDTH: f32 = 4.0;

    /// Glyph size inside control buttons.
    pub const GLYPH: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard control text (time readout, button labels).
    pub const BODY: f32 = 14.0;

    /// Small supporting text (marker hover labels).
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_HOVER < opacity::OVERLAY_PRESSED);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::MARKER_TICK_WIDTH < sizing::SCRUB_HEIGHT);
    assert!(typography::CAPTION < typography::BODY);
};

// ============================================================================
// Surface & Meter Colors
// ============================================================================

/// Background of the playback surface behind the media.
pub fn surface_color() -> Color {
    palette::BLACK
}

/// Unfilled track portion of both meters.
pub fn meter_track_color() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::GRAY_700
    }
}

/// Filled portion of both meters.
pub fn meter_fill_color() -> Color {
    palette::PRIMARY_500
}

/// Background of the marker title label shown on hover.
pub fn marker_label_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::BLACK
    }
}

/// Text color of the marker title label.
pub fn marker_label_text_color() -> Color {
    palette::WHITE
}

// ============================================================================
// Container Styles
// ============================================================================

/// Semi-transparent backdrop behind the controls row.
pub fn controls_backdrop() -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Opaque style for the playback surface.
pub fn surface_backdrop() -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface_color())),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Flat style for the buttons in the controls row.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Highlighted style for toggles in their active state (mute, fullscreen).
pub fn control_active(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the fullscreen close button overlaid on the surface.
pub fn close_overlay() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_STRONG,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
