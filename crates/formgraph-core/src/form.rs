//! Form-level field descriptors, as handed over by the form definition layer.

mod choice;
pub use choice::Choice;

mod enum_source;
pub use enum_source::EnumSource;

mod field;
pub use field::Field;

mod kind;
pub use kind::FieldKind;

use indexmap::IndexMap;

/// A named, ordered collection of form fields.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Form {
    /// The form name, used to derive the input object and enum names.
    pub name: String,

    /// Optional description copied onto the generated input object.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,

    /// Fields in declaration order.
    pub fields: IndexMap<String, Field>,
}

impl Form {
    pub fn new(name: impl Into<String>) -> Form {
        Form {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Form {
        self.description = Some(description.into());
        self
    }

    /// Adds a field to the form.
    ///
    /// A field carrying choices but no enum source is tied to this form, so
    /// its enum is named after the form and the field.
    pub fn field(mut self, name: impl Into<String>, mut field: Field) -> Form {
        let name = name.into();

        if field.enum_source.is_none() && !field.choices.is_empty() {
            field.enum_source = Some(EnumSource::Owner {
                owner: self.name.clone(),
                field: name.clone(),
            });
        }

        self.fields.insert(name, field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}
