use super::{EnumType, InputObjectType};
use std::fmt;
use std::sync::Arc;

/// A GraphQL type reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    String,
    Int,
    Boolean,
    Float,
    Id,
    Uuid,
    Date,
    Time,
    DateTime,

    /// List of the wrapped type
    List(Box<Type>),

    /// The wrapped type, but never null
    NonNull(Box<Type>),

    /// Reference to a registered enum
    Enum(Arc<EnumType>),

    /// Reference to a registered input object
    InputObject(Arc<InputObjectType>),
}

impl Type {
    pub fn list(ty: impl Into<Type>) -> Type {
        Type::List(Box::new(ty.into()))
    }

    pub fn non_null(ty: impl Into<Type>) -> Type {
        Type::NonNull(Box::new(ty.into()))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            Type::List(_) => true,
            Type::NonNull(ty) => ty.is_list(),
            _ => false,
        }
    }

    /// Returns the type with all list and non-null wrappers removed.
    pub fn named_type(&self) -> &Type {
        match self {
            Type::List(ty) | Type::NonNull(ty) => ty.named_type(),
            ty => ty,
        }
    }

    /// Returns the name of the innermost type.
    pub fn name(&self) -> &str {
        match self.named_type() {
            Type::String => "String",
            Type::Int => "Int",
            Type::Boolean => "Boolean",
            Type::Float => "Float",
            Type::Id => "ID",
            Type::Uuid => "UUID",
            Type::Date => "Date",
            Type::Time => "Time",
            Type::DateTime => "DateTime",
            Type::Enum(ty) => &ty.name,
            Type::InputObject(ty) => &ty.name,
            Type::List(_) | Type::NonNull(_) => unreachable!(),
        }
    }

    pub fn as_enum(&self) -> Option<&Arc<EnumType>> {
        match self.named_type() {
            Type::Enum(ty) => Some(ty),
            _ => None,
        }
    }
}

impl From<Arc<EnumType>> for Type {
    fn from(value: Arc<EnumType>) -> Self {
        Type::Enum(value)
    }
}

impl From<Arc<InputObjectType>> for Type {
    fn from(value: Arc<InputObjectType>) -> Self {
        Type::InputObject(value)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::List(ty) => write!(f, "[{ty}]"),
            Type::NonNull(ty) => write!(f, "{ty}!"),
            ty => f.write_str(ty.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wrappers() {
        assert_eq!(Type::list(Type::Id).to_string(), "[ID]");
        assert_eq!(Type::non_null(Type::Boolean).to_string(), "Boolean!");
        assert_eq!(
            Type::non_null(Type::list(Type::non_null(Type::Uuid))).to_string(),
            "[UUID!]!"
        );
    }

    #[test]
    fn named_type_strips_wrappers() {
        let ty = Type::non_null(Type::list(Type::Int));
        assert_eq!(ty.named_type(), &Type::Int);
        assert!(ty.is_list());
        assert!(ty.is_non_null());
        assert!(!Type::list(Type::Int).is_non_null());
    }
}
