use super::{EnumType, InputObjectType, Schema, TypeDef};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// Maps type names to the one constructed type registered under that name.
///
/// A registry lives for a single schema-build pass. Conversions register
/// into it through `&mut`, then [`Registry::freeze`] turns it into a
/// read-only [`Schema`].
#[derive(Debug, Default)]
pub struct Registry {
    types: IndexMap<String, TypeDef>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn enum_type(&self, name: &str) -> Option<&Arc<EnumType>> {
        self.get(name).and_then(TypeDef::as_enum)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the enum registered under `name`, or builds and registers it.
    ///
    /// `build` only runs when nothing is registered under `name` yet, so
    /// every caller asking for the same name gets the same instance.
    pub fn enum_or_insert_with(
        &mut self,
        name: &str,
        build: impl FnOnce() -> Result<EnumType>,
    ) -> Result<Arc<EnumType>> {
        if let Some(existing) = self.types.get(name) {
            return match existing {
                TypeDef::Enum(ty) => {
                    tracing::debug!(name, "reusing registered enum");
                    Ok(ty.clone())
                }
                other => Err(name_taken(name, other)),
            };
        }

        let ty = build()?;
        debug_assert_eq!(ty.name, name);

        tracing::debug!(name, values = ty.values.len(), "registering enum");

        let ty = Arc::new(ty);
        self.types
            .insert(name.to_string(), TypeDef::Enum(ty.clone()));
        Ok(ty)
    }

    /// Registers an already constructed enum.
    ///
    /// Registering the same enum twice is a no-op. A different enum under an
    /// existing name is an error.
    pub fn register_enum(&mut self, ty: Arc<EnumType>) -> Result<Arc<EnumType>> {
        match self.types.get(&ty.name) {
            Some(TypeDef::Enum(existing)) if Arc::ptr_eq(existing, &ty) || **existing == *ty => {
                Ok(existing.clone())
            }
            Some(TypeDef::Enum(_)) => Err(Error::invalid_schema(format!(
                "conflicting definitions for enum `{}`",
                ty.name
            ))),
            Some(other) => Err(name_taken(&ty.name, other)),
            None => {
                tracing::debug!(name = %ty.name, values = ty.values.len(), "registering enum");
                self.types
                    .insert(ty.name.clone(), TypeDef::Enum(ty.clone()));
                Ok(ty)
            }
        }
    }

    pub fn register_input_object(
        &mut self,
        ty: InputObjectType,
    ) -> Result<Arc<InputObjectType>> {
        if let Some(existing) = self.types.get(&ty.name) {
            return Err(name_taken(&ty.name, existing));
        }

        tracing::debug!(name = %ty.name, fields = ty.fields.len(), "registering input object");

        let ty = Arc::new(ty);
        self.types
            .insert(ty.name.clone(), TypeDef::InputObject(ty.clone()));
        Ok(ty)
    }

    /// Ends the build pass. The returned schema cannot be modified.
    pub fn freeze(self) -> Schema {
        Schema { types: self.types }
    }
}

fn name_taken(name: &str, existing: &TypeDef) -> Error {
    Error::invalid_schema(format!(
        "type name `{name}` is already used by {} `{}`",
        existing.kind_name(),
        existing.name()
    ))
}
