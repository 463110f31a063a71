//! Converts form field descriptors into schema field descriptors.

mod choices;
pub use choices::member_name;

mod options;
pub use options::Options;

use crate::form::{self, FieldKind};
use crate::schema::{self, InputObjectType, Registry, Type};
use crate::{err, Error, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// Converts a form field using the default [`Options`].
pub fn convert_form_field(field: &form::Field, registry: &mut Registry) -> Result<schema::Field> {
    Converter::new(&Options::default(), registry).convert(field)
}

/// Same as [`convert_form_field`], but accepts a missing field, which always
/// fails with an unsupported field error.
pub fn convert_optional(
    field: Option<&form::Field>,
    registry: &mut Registry,
) -> Result<schema::Field> {
    Converter::new(&Options::default(), registry).convert_optional(field)
}

/// Converts fields into a registry for the duration of one build pass.
#[derive(Debug)]
pub struct Converter<'a> {
    options: &'a Options,
    registry: &'a mut Registry,
}

impl<'a> Converter<'a> {
    pub fn new(options: &'a Options, registry: &'a mut Registry) -> Converter<'a> {
        Converter { options, registry }
    }

    pub fn registry(&self) -> &Registry {
        &*self.registry
    }

    pub fn convert_optional(&mut self, field: Option<&form::Field>) -> Result<schema::Field> {
        match field {
            Some(field) => self.convert(field),
            None => Err(Error::unsupported_field("None")),
        }
    }

    /// Converts a single form field.
    ///
    /// Unknown field kinds fail whatever choices they carry. Choice lists
    /// take precedence over the field kind when the field also names an enum
    /// source. Generated enums are never non-null, even for required fields.
    pub fn convert(&mut self, field: &form::Field) -> Result<schema::Field> {
        let ty = match (&field.kind, &field.enum_source) {
            (kind, _) if kind.is_custom() => return Err(unsupported(kind)),
            (FieldKind::Enum(ty), _) => Type::Enum(self.registry.register_enum(ty.clone())?),
            (_, Some(source)) if field.has_choices() && self.options.convert_choices_to_enum => {
                let name = source.resolve(self.options.enum_name_prefix.as_deref());
                let ty = self
                    .registry
                    .enum_or_insert_with(&name, || choices::build_enum(&name, &field.choices))?;
                Type::Enum(ty)
            }
            (kind, _) => scalar_type(kind).ok_or_else(|| unsupported(kind))?,
        };

        tracing::trace!(kind = ?field.kind, ty = %ty, "converted form field");

        Ok(schema::Field {
            ty,
            description: field.help_text.clone().unwrap_or_default(),
        })
    }

    /// Converts every field of `form` and registers the input object
    /// `<FormName>Input`.
    pub fn convert_form(&mut self, form: &form::Form) -> Result<Arc<InputObjectType>> {
        let mut fields = IndexMap::with_capacity(form.fields.len());

        for (name, field) in &form.fields {
            let converted = self
                .convert(field)
                .map_err(|e| e.context(err!("form `{}` field `{}`", form.name, name)))?;
            fields.insert(name.clone(), converted);
        }

        self.registry.register_input_object(InputObjectType {
            name: self.options.input_object_name(&form.name),
            description: form.description.clone(),
            fields,
        })
    }
}

fn unsupported(kind: &FieldKind) -> Error {
    Error::unsupported_field(format!("{kind:?}"))
}

/// The fixed kind-to-type table. Kinds that do not map to a scalar or list
/// type return `None`.
fn scalar_type(kind: &FieldKind) -> Option<Type> {
    use FieldKind::*;

    Some(match kind {
        Date => Type::Date,
        Time => Type::Time,
        DateTime => Type::DateTime,
        Base | Char | Email | Slug | Url | Choice | Regex { .. } => Type::String,
        Uuid => Type::Uuid,
        Integer => Type::Int,
        Boolean => Type::non_null(Type::Boolean),
        NullBoolean => Type::Boolean,
        Float | Decimal => Type::Float,
        ModelMultipleChoice { .. } => Type::list(Type::Id),
        ModelChoice { .. } => Type::Id,
        Enum(_) | Custom(_) => return None,
    })
}
