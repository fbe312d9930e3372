// SPDX-License-Identifier: MPL-2.0
//! Player user interface.
//!
//! Rendering follows the Elm-style "state down, messages up" pattern: the
//! widgets read [`crate::player::PlaybackState`] and the player
//! configuration, and every interaction surfaces as a
//! [`crate::player::Message`].
//!
//! - [`controls`] - Surface, controls row, and fullscreen overlay
//! - [`meter`] - Canvas scrub and volume bars
//! - [`theme`] - Design tokens and widget styles

pub mod controls;
pub mod meter;
pub mod theme;
