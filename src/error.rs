// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors produced while building a player configuration.
///
/// Playback operations themselves are infallible: the media element accepts
/// every call, and operations on a released player are silent no-ops rather
/// than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A control name not recognized by [`crate::config::Control`].
    UnknownControl(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownControl(name) => write!(f, "unknown control name: {name:?}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_name() {
        let err = Error::UnknownControl("fancy-button".to_string());
        assert_eq!(format!("{}", err), "unknown control name: \"fancy-button\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        assert_std_error(&Error::UnknownControl("x".into()));
    }
}
