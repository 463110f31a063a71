use super::{EnumType, Type};
use std::sync::Arc;

/// A schema field descriptor, the result of converting a form field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Wrapped type of the field
    pub ty: Type,

    /// Field description, empty when the form field had no help text.
    pub description: String,
}

impl Field {
    pub fn new(ty: Type, description: impl Into<String>) -> Field {
        Field {
            ty,
            description: description.into(),
        }
    }

    /// Gets the type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn is_non_null(&self) -> bool {
        self.ty.is_non_null()
    }

    /// The type with list and non-null wrappers removed.
    pub fn named_type(&self) -> &Type {
        self.ty.named_type()
    }

    /// If the field references an enum, return it.
    pub fn enum_type(&self) -> Option<&Arc<EnumType>> {
        self.ty.as_enum()
    }
}
