/// Options controlling how form fields are converted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// If set, prefix the names of enums derived from owner and field names
    pub enum_name_prefix: Option<String>,

    /// When false, choice fields keep their kind's scalar type instead of
    /// generating an enum
    pub convert_choices_to_enum: bool,

    /// Appended to a form's name to name its input object
    pub input_object_suffix: String,
}

impl Options {
    pub fn new() -> Options {
        Options {
            enum_name_prefix: None,
            convert_choices_to_enum: true,
            input_object_suffix: "Input".to_string(),
        }
    }

    pub fn enum_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.enum_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn convert_choices_to_enum(&mut self, enabled: bool) -> &mut Self {
        self.convert_choices_to_enum = enabled;
        self
    }

    pub fn input_object_suffix(&mut self, suffix: &str) -> &mut Self {
        self.input_object_suffix = suffix.to_string();
        self
    }

    pub(crate) fn input_object_name(&self, form: &str) -> String {
        format!(
            "{}{}",
            std_util::str::upper_camel_case(form),
            self.input_object_suffix
        )
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
