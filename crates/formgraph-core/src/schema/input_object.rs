use super::{sdl, Field};
use indexmap::IndexMap;
use std::fmt;

/// A GraphQL input object, generated from a whole form.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    pub name: String,

    pub description: Option<String>,

    /// Fields in form declaration order
    pub fields: IndexMap<String, Field>,
}

impl InputObjectType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}

impl fmt::Display for InputObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl::description(f, self.description.as_deref(), "")?;
        writeln!(f, "input {} {{", self.name)?;

        for (name, field) in &self.fields {
            let description = Some(field.description.as_str()).filter(|d| !d.is_empty());
            sdl::description(f, description, sdl::INDENT)?;
            writeln!(f, "{}{}: {}", sdl::INDENT, name, field.ty)?;
        }

        f.write_str("}")
    }
}
