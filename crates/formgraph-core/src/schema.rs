//! Schema-level type descriptors and the registry they are collected in.

mod builder;
pub use builder::Builder;

mod enum_type;
pub use enum_type::{EnumType, EnumValue};

mod field;
pub use field::Field;

mod input_object;
pub use input_object::InputObjectType;

mod registry;
pub use registry::Registry;

mod sdl;

mod ty;
pub use ty::Type;

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A named type definition held by the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
}

impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Enum(ty) => &ty.name,
            TypeDef::InputObject(ty) => &ty.name,
        }
    }

    pub fn as_enum(&self) -> Option<&Arc<EnumType>> {
        match self {
            TypeDef::Enum(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&Arc<InputObjectType>> {
        match self {
            TypeDef::InputObject(ty) => Some(ty),
            _ => None,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            TypeDef::Enum(_) => "enum",
            TypeDef::InputObject(_) => "input object",
        }
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDef::Enum(ty) => fmt::Display::fmt(ty, f),
            TypeDef::InputObject(ty) => fmt::Display::fmt(ty, f),
        }
    }
}

/// The read-only result of a schema-build pass.
#[derive(Debug)]
pub struct Schema {
    types: IndexMap<String, TypeDef>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn enum_type(&self, name: &str) -> Option<&Arc<EnumType>> {
        self.get_type(name).and_then(TypeDef::as_enum)
    }

    pub fn input_object(&self, name: &str) -> Option<&Arc<InputObjectType>> {
        self.get_type(name).and_then(TypeDef::as_input_object)
    }

    /// All types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.types().peekable();
        while let Some(ty) = it.next() {
            writeln!(f, "{ty}")?;
            if it.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
