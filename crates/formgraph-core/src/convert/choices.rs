use crate::form::Choice;
use crate::schema::{EnumType, EnumValue};
use crate::{Error, Result};
use std::collections::HashMap;
use std_util::str;

/// Normalizes a raw choice value into an enum member name.
///
/// The value is uppercased and every run of characters outside
/// `[A-Za-z0-9]` becomes a single `_`. Names that would start with a digit
/// are prefixed with `A_`.
pub fn member_name(raw: &str) -> Result<String> {
    let name = str::upper_alnum(raw);

    if name.is_empty() || name.bytes().all(|b| b == b'_') {
        return Err(Error::invalid_schema(format!(
            "choice value {raw:?} does not produce a valid enum member name"
        )));
    }

    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        return Ok(format!("A_{name}"));
    }

    Ok(name)
}

/// Builds the enum for a choice list.
///
/// Members follow the choice order. A repeated raw value keeps its first
/// occurrence; two different raw values normalizing to the same member name
/// are rejected.
pub(super) fn build_enum(name: &str, choices: &[Choice]) -> Result<EnumType> {
    let mut ty = EnumType::new(name);
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(choices.len());

    for choice in choices {
        let member = member_name(&choice.value)?;

        if let Some(previous) = seen.get(&member) {
            if *previous == choice.value {
                continue;
            }

            return Err(Error::invalid_schema(format!(
                "enum `{name}`: choice values {previous:?} and {:?} both map to member `{member}`",
                choice.value
            )));
        }

        seen.insert(member.clone(), &choice.value);
        ty.values.push(EnumValue {
            name: member,
            value: choice.value.clone(),
            description: Some(choice.label.clone()).filter(|label| !label.is_empty()),
        });
    }

    Ok(ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std_util::prelude::*;

    #[test]
    fn member_names() {
        assert_eq!(member_name("choice-0").unwrap(), "CHOICE_0");
        assert_eq!(member_name("a  b--c").unwrap(), "A_B_C");
        assert_eq!(member_name("in progress").unwrap(), "IN_PROGRESS");
        assert_eq!(member_name("1st").unwrap(), "A_1ST");
        assert_eq!(member_name("-x-").unwrap(), "_X_");
    }

    #[test]
    fn empty_member_name() {
        assert!(assert_err!(member_name("--")).is_invalid_schema());
        assert!(assert_err!(member_name("")).is_invalid_schema());
    }

    #[test]
    fn duplicate_values_keep_first() {
        let choices = [
            Choice::new("a", "First"),
            Choice::new("b", "B"),
            Choice::new("a", "Again"),
        ];
        let ty = assert_ok!(build_enum("Letters", &choices));

        assert_eq!(ty.value_names().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(ty.value("A").unwrap().description.as_deref(), Some("First"));
    }

    #[test]
    fn colliding_values_fail() {
        let choices = [Choice::new("in-progress", ""), Choice::new("in progress", "")];
        let err = assert_err!(build_enum("Status", &choices));

        assert!(err.is_invalid_schema());
        assert!(err.to_string().contains("IN_PROGRESS"));
    }
}
