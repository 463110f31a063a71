use super::{Choice, EnumSource, FieldKind};

/// A form field descriptor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Text, integer, reference, ...
    pub kind: FieldKind,

    /// Help text shown next to the field, becomes the schema description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub help_text: Option<String>,

    /// True if the form rejects a missing value.
    #[cfg_attr(feature = "serde", serde(default = "default_required"))]
    pub required: bool,

    /// Fixed set of accepted values, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub choices: Vec<Choice>,

    /// Where the generated enum takes its name from. Without a source, a
    /// choice list does not produce an enum.
    #[cfg_attr(feature = "serde", serde(default))]
    pub enum_source: Option<EnumSource>,
}

#[cfg(feature = "serde")]
fn default_required() -> bool {
    true
}

impl Field {
    pub fn new(kind: FieldKind) -> Field {
        Field {
            kind,
            help_text: None,
            required: true,
            choices: vec![],
            enum_source: None,
        }
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Field {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Field {
        self.required = required;
        self
    }

    pub fn choices<I>(mut self, choices: I) -> Field
    where
        I: IntoIterator,
        I::Item: Into<Choice>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn enum_name(mut self, name: impl Into<String>) -> Field {
        self.enum_source = Some(EnumSource::Named(name.into()));
        self
    }

    pub fn enum_source(mut self, source: EnumSource) -> Field {
        self.enum_source = Some(source);
        self
    }

    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }
}

impl From<FieldKind> for Field {
    fn from(kind: FieldKind) -> Field {
        Field::new(kind)
    }
}
