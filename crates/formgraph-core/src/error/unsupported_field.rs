use super::Error;

/// Error when a form field has no schema type mapping.
///
/// This occurs when:
/// - The form layer hands over a custom field kind the converter does not know
/// - No field was supplied at all
///
/// The message carries the representation of the offending value so the
/// schema author can find the field.
#[derive(Debug)]
pub(super) struct UnsupportedField {
    repr: Box<str>,
}

impl std::error::Error for UnsupportedField {}

impl core::fmt::Display for UnsupportedField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported field: Don't know how to convert the form field {}",
            self.repr
        )
    }
}

impl Error {
    /// Creates an unsupported field error.
    ///
    /// `repr` is the representation of the value that could not be
    /// converted, e.g. the `Debug` output of its field kind, or `None`.
    pub fn unsupported_field(repr: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedField(UnsupportedField {
            repr: repr.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported field error.
    pub fn is_unsupported_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedField(_))
    }
}
