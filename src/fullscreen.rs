// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability detection.
//!
//! Platforms differ in how (and whether) an embedded view can go fullscreen,
//! so the player does not talk to any windowing API directly. Instead the
//! host supplies an ordered list of [`FullscreenBackend`] candidates and
//! [`Capability::detect`] picks the first supported one, once, at
//! construction. Toggling without a supported backend still flips the
//! player's fullscreen flag; only the native side effect is skipped.

use std::fmt;
use tracing::{debug, warn};

/// One way of driving fullscreen on the current platform.
pub trait FullscreenBackend: Send {
    /// Whether this backend works in the current environment.
    fn is_supported(&self) -> bool;

    /// Enters (`true`) or exits (`false`) fullscreen.
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Backend driven by a host closure, typically dispatching to the host window.
pub struct CallbackBackend<F: FnMut(bool) + Send> {
    callback: F,
}

impl<F: FnMut(bool) + Send> CallbackBackend<F> {
    /// Wraps a closure receiving the desired fullscreen state.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F: FnMut(bool) + Send> FullscreenBackend for CallbackBackend<F> {
    fn is_supported(&self) -> bool {
        true
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        (self.callback)(fullscreen);
    }

    fn name(&self) -> &'static str {
        "callback"
    }
}

/// The fullscreen capability selected for a player instance.
pub struct Capability {
    backend: Option<Box<dyn FullscreenBackend>>,
}

impl Capability {
    /// Picks the first supported backend from the candidates, in order.
    ///
    /// Evaluated once; later toggles go straight to the chosen backend
    /// without re-probing.
    #[must_use]
    pub fn detect(candidates: Vec<Box<dyn FullscreenBackend>>) -> Self {
        for candidate in candidates {
            if candidate.is_supported() {
                debug!(backend = candidate.name(), "fullscreen backend selected");
                return Self {
                    backend: Some(candidate),
                };
            }
        }
        Self { backend: None }
    }

    /// A capability with no native fullscreen support.
    #[must_use]
    pub fn unsupported() -> Self {
        Self { backend: None }
    }

    /// Whether a native backend was found.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.backend.is_some()
    }

    /// Applies the fullscreen state natively, best-effort.
    ///
    /// Returns whether a backend handled the request.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        match &mut self.backend {
            Some(backend) => {
                backend.set_fullscreen(fullscreen);
                true
            }
            None => {
                warn!(fullscreen, "fullscreen toggled without a supported backend");
                false
            }
        }
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self::unsupported()
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("backend", &self.backend.as_ref().map(|b| b.name()))
            .finish()
    }
}
