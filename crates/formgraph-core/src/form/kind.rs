use crate::schema::EnumType;
use std::sync::Arc;

/// The kind of a form field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// A plain field with no specialized kind.
    Base,
    Char,
    Email,
    Slug,
    Url,
    Choice,
    Regex {
        pattern: String,
    },
    Uuid,
    Integer,
    Boolean,
    NullBoolean,
    Float,
    Decimal,

    /// Selects any number of records of `target`.
    ModelMultipleChoice {
        target: String,
    },

    /// Selects a single record of `target`.
    ModelChoice {
        target: String,
    },
    Date,
    Time,
    DateTime,

    /// A choice field backed by an existing enum type.
    #[cfg_attr(feature = "serde", serde(skip))]
    Enum(Arc<EnumType>),

    /// A field kind defined by the form layer with no known mapping.
    Custom(String),
}

impl FieldKind {
    pub fn regex(pattern: impl Into<String>) -> FieldKind {
        FieldKind::Regex {
            pattern: pattern.into(),
        }
    }

    pub fn model_choice(target: impl Into<String>) -> FieldKind {
        FieldKind::ModelChoice {
            target: target.into(),
        }
    }

    pub fn model_multiple_choice(target: impl Into<String>) -> FieldKind {
        FieldKind::ModelMultipleChoice {
            target: target.into(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FieldKind::Custom(_))
    }

    /// Returns the referenced model when the field selects records.
    pub fn target(&self) -> Option<&str> {
        match self {
            FieldKind::ModelChoice { target } | FieldKind::ModelMultipleChoice { target } => {
                Some(target)
            }
            _ => None,
        }
    }
}
