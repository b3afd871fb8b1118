//! This module implements `FormatError`.

use alloc::borrow::Cow;
use core::fmt;

/// `FormatError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// The picture string is malformed.
    InvalidPicture,
    /// The picture requests a component the value does not have.
    ComponentUnavailable,
    /// The language or calendar argument is not supported.
    UnsupportedLanguageOrCalendar,
    /// A value is outside the range a component or numbering can express.
    Range,
    /// A lexical temporal value could not be parsed.
    Syntax,
    /// An unexpected internal state was reached.
    Assert,
}

impl ErrorKind {
    /// Returns the XPath error code associated with this kind, if any.
    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::InvalidPicture | Self::UnsupportedLanguageOrCalendar => Some("FOFD1340"),
            Self::ComponentUnavailable => Some("FOFD1350"),
            Self::Range => Some("FODT0001"),
            Self::Syntax => Some("FORG0001"),
            Self::Generic | Self::Assert => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::InvalidPicture => "InvalidPicture",
            Self::ComponentUnavailable => "ComponentUnavailable",
            Self::UnsupportedLanguageOrCalendar => "UnsupportedLanguageOrCalendar",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for the picture compiler and renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl FormatError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid picture error.
    #[must_use]
    pub fn invalid_picture() -> Self {
        Self::new(ErrorKind::InvalidPicture)
    }

    /// Create a component unavailable error.
    #[must_use]
    pub fn component_unavailable() -> Self {
        Self::new(ErrorKind::ComponentUnavailable)
    }

    /// Create an unsupported language or calendar error.
    #[must_use]
    pub fn unsupported() -> Self {
        Self::new(ErrorKind::UnsupportedLanguageOrCalendar)
    }

    /// Create a range error.
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[must_use]
    pub fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[must_use]
    pub(crate) fn assert() -> Self {
        Self::new(ErrorKind::Assert)
            .with_message("Implementation error: unexpected state reached.")
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(code) = self.kind.code() {
            write!(f, " [{code}]")?;
        }

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_code_and_message() {
        let err = FormatError::invalid_picture().with_message("unbalanced '['");
        assert_eq!(
            err.to_string(),
            "InvalidPicture [FOFD1340]: unbalanced '['"
        );
        assert_eq!(FormatError::assert().kind(), ErrorKind::Assert);
        assert_eq!(FormatError::general("lock").to_string(), "Error: lock");
    }
}
