use super::sdl;
use std::fmt;

/// A named GraphQL enum, generated from a choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,

    pub description: Option<String>,

    /// Members in choice-list order
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Normalized member name, e.g. `CHOICE_0`
    pub name: String,

    /// Raw choice value, e.g. `choice-0`
    pub value: String,

    /// The choice label
    pub description: Option<String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> EnumType {
        EnumType {
            name: name.into(),
            description: None,
            values: vec![],
        }
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.name == name)
    }

    /// Finds the member for a raw choice value.
    pub fn value_for(&self, raw: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.value == raw)
    }

    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|value| value.name.as_str())
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl::description(f, self.description.as_deref(), "")?;
        writeln!(f, "enum {} {{", self.name)?;

        for value in &self.values {
            sdl::description(f, value.description.as_deref(), sdl::INDENT)?;
            writeln!(f, "{}{}", sdl::INDENT, value.name)?;
        }

        f.write_str("}")
    }
}
