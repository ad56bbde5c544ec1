use crate::tag::TagKind;

use std::fmt;

/// An error that can occur while compiling a record into query fragments.
///
/// Every failure is fatal for the current call: no partial clause is
/// returned, nothing is retried.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// Two mutually exclusive tags were attached to one field.
    InvalidCombination {
        field: String,
        first: TagKind,
        second: TagKind,
    },

    /// An absent record reference was passed to filter-clause compilation.
    AbsentRecord,

    /// The accessor could not read a field's value.
    Access(AccessError),
}

impl Error {
    pub(crate) fn invalid_combination(field: &str, first: TagKind, second: TagKind) -> Self {
        Self {
            kind: ErrorKind::InvalidCombination {
                field: field.to_string(),
                first,
                second,
            },
        }
    }

    pub(crate) fn absent_record() -> Self {
        Self {
            kind: ErrorKind::AbsentRecord,
        }
    }

    /// Returns true if the error is an invalid tag combination.
    pub fn is_invalid_combination(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidCombination { .. })
    }

    /// Returns true if the error is an invalid argument (absent record).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::AbsentRecord)
    }

    /// Returns true if the error wraps an accessor failure.
    pub fn is_access(&self) -> bool {
        matches!(self.kind, ErrorKind::Access(..))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidCombination {
                field,
                first,
                second,
            } => write!(
                f,
                "field `{field}` carries an invalid tag combination: {first} and {second}"
            ),
            ErrorKind::AbsentRecord => {
                f.write_str("cannot compile a filter clause from an absent record")
            }
            ErrorKind::Access(..) => {
                f.write_str("failed to read a field value from the record instance")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Access(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AccessError> for Error {
    fn from(err: AccessError) -> Self {
        Self {
            kind: ErrorKind::Access(err),
        }
    }
}

/// Error raised by an accessor when a field's value cannot be read from a
/// live record instance, e.g. when the descriptor does not belong to the
/// instance's type.
#[derive(Debug, Clone)]
pub struct AccessError {
    type_name: String,
    field: String,
}

impl AccessError {
    pub fn new(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no reader for field `{}` on type `{}`",
            self.field, self.type_name
        )
    }
}

impl std::error::Error for AccessError {}
