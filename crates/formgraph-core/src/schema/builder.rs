use super::{Registry, Schema};
use crate::convert::{Converter, Options};
use crate::{form, Result};

/// Runs a schema-build pass over a set of forms.
#[derive(Debug, Default)]
pub struct Builder {
    options: Options,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            options: Options::new(),
        }
    }

    pub fn from_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn enum_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.options.enum_name_prefix(prefix);
        self
    }

    pub fn convert_choices_to_enum(&mut self, enabled: bool) -> &mut Self {
        self.options.convert_choices_to_enum(enabled);
        self
    }

    pub fn input_object_suffix(&mut self, suffix: &str) -> &mut Self {
        self.options.input_object_suffix(suffix);
        self
    }

    /// Converts every form into an input object, registering the enums its
    /// fields need, and freezes the result.
    ///
    /// The first field that fails to convert aborts the whole build.
    pub fn build<'a>(&self, forms: impl IntoIterator<Item = &'a form::Form>) -> Result<Schema> {
        let mut registry = Registry::new();
        let mut converter = Converter::new(&self.options, &mut registry);

        for form in forms {
            converter.convert_form(form)?;
        }

        let schema = registry.freeze();
        tracing::debug!(types = schema.types().count(), "schema built");

        Ok(schema)
    }
}
