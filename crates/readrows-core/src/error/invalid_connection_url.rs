use super::Error;

/// Error when a driver cannot make sense of its connection URL.
///
/// Raised before any connection is opened: the URL failed to parse, uses a
/// scheme the driver does not serve, or names no database.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    url: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL `{}`: {}", self.url, self.reason)
    }
}

impl Error {
    /// Creates an invalid connection URL error for `url`.
    pub fn invalid_connection_url(url: &str, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(
            InvalidConnectionUrl {
                url: url.into(),
                reason: reason.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid connection URL error.
    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
