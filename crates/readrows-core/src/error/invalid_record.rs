use super::Error;

/// Error when the element type of a scan target cannot hold a row.
///
/// This is raised before any row is read, when the slots a record binds
/// disagree with the fields it describes.
#[derive(Debug)]
pub(super) struct InvalidRecord {
    ty: &'static str,
    message: Box<str>,
}

impl std::error::Error for InvalidRecord {}

impl core::fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid record type `{}`: {}", self.ty, self.message)
    }
}

impl Error {
    /// Creates an invalid record error for the named concrete type.
    pub fn invalid_record(ty: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecord(InvalidRecord {
            ty,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid record error.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRecord(_))
    }
}
