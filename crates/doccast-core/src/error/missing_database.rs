use super::Error;

/// Error when a nested value needs the item factory but none was supplied.
#[derive(Debug)]
pub(super) struct MissingDatabase {
    path_key: Box<str>,
}

impl std::error::Error for MissingDatabase {}

impl core::fmt::Display for MissingDatabase {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no database to build nested value at `{}`",
            self.path_key
        )
    }
}

impl Error {
    /// Creates a missing database error for the given field path.
    pub fn missing_database(path_key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingDatabase(MissingDatabase {
            path_key: path_key.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing database error.
    pub fn is_missing_database(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingDatabase(_))
    }
}
