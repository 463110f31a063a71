use formgraph_core::convert::{convert_form_field, convert_optional};
use formgraph_core::form::{Field, FieldKind};
use formgraph_core::schema::{self, Registry, Type};
use std_util::prelude::*;

const HELP_TEXT: &str = "Custom Help Text";

fn assert_conversion(kind: FieldKind, expected: Type) -> schema::Field {
    let mut registry = Registry::new();
    let field = Field::new(kind).help_text(HELP_TEXT);

    let converted = assert_ok!(convert_form_field(&field, &mut registry));
    assert_eq!(converted.named_type(), &expected);
    assert_eq!(converted.description, HELP_TEXT);
    converted
}

#[test]
fn missing_field_is_unsupported() {
    let mut registry = Registry::new();
    let err = assert_err_contains!(
        convert_optional(None, &mut registry),
        "Don't know how to convert the form field",
        "None"
    );
    assert!(err.is_unsupported_field());
}

#[test]
fn custom_field_is_unsupported() {
    let mut registry = Registry::new();
    let field = Field::new(FieldKind::Custom("FileField".to_string()));

    let err = assert_err_contains!(
        convert_form_field(&field, &mut registry),
        "Don't know how to convert the form field",
        "FileField"
    );
    assert!(err.is_unsupported_field());
    assert!(registry.is_empty());
}

#[test]
fn custom_field_with_choices_is_unsupported() {
    let mut registry = Registry::new();
    let field = Field::new(FieldKind::Custom("FileField".to_string()))
        .choices([("a", "A")])
        .enum_name("Files");

    let err = assert_err_contains!(convert_form_field(&field, &mut registry), "FileField");
    assert!(err.is_unsupported_field());
    assert_none!(registry.enum_type("Files"));
    assert!(registry.is_empty());
}

#[test]
fn date_converts_to_date() {
    assert_conversion(FieldKind::Date, Type::Date);
}

#[test]
fn time_converts_to_time() {
    assert_conversion(FieldKind::Time, Type::Time);
}

#[test]
fn date_time_converts_to_date_time() {
    assert_conversion(FieldKind::DateTime, Type::DateTime);
}

#[test]
fn char_converts_to_string() {
    assert_conversion(FieldKind::Char, Type::String);
}

#[test]
fn email_converts_to_string() {
    assert_conversion(FieldKind::Email, Type::String);
}

#[test]
fn slug_converts_to_string() {
    assert_conversion(FieldKind::Slug, Type::String);
}

#[test]
fn url_converts_to_string() {
    assert_conversion(FieldKind::Url, Type::String);
}

#[test]
fn choice_without_choices_converts_to_string() {
    assert_conversion(FieldKind::Choice, Type::String);
}

#[test]
fn base_field_converts_to_string() {
    assert_conversion(FieldKind::Base, Type::String);
}

#[test]
fn regex_converts_to_string() {
    assert_conversion(FieldKind::regex("[0-9]+"), Type::String);
}

#[test]
fn uuid_converts_to_uuid() {
    assert_conversion(FieldKind::Uuid, Type::Uuid);
}

#[test]
fn integer_converts_to_int() {
    assert_conversion(FieldKind::Integer, Type::Int);
}

#[test]
fn boolean_converts_to_non_null_boolean() {
    let field = assert_conversion(FieldKind::Boolean, Type::Boolean);
    assert!(field.is_non_null());
    assert_eq!(field.ty.to_string(), "Boolean!");
}

#[test]
fn boolean_is_non_null_even_when_optional() {
    let mut registry = Registry::new();
    let field = Field::new(FieldKind::Boolean).required(false);

    let converted = assert_ok!(convert_form_field(&field, &mut registry));
    assert!(converted.is_non_null());
}

#[test]
fn null_boolean_converts_to_boolean() {
    let field = assert_conversion(FieldKind::NullBoolean, Type::Boolean);
    assert!(!field.is_non_null());
}

#[test]
fn float_converts_to_float() {
    assert_conversion(FieldKind::Float, Type::Float);
}

#[test]
fn decimal_converts_to_float() {
    assert_conversion(FieldKind::Decimal, Type::Float);
}

#[test]
fn model_multiple_choice_converts_to_id_list() {
    let field = assert_conversion(FieldKind::model_multiple_choice("Reporter"), Type::Id);
    assert_eq!(field.ty, Type::list(Type::Id));
    assert!(!field.is_non_null());
}

#[test]
fn model_choice_converts_to_id() {
    let field = assert_conversion(FieldKind::model_choice("Reporter"), Type::Id);
    assert_eq!(field.ty, Type::Id);
}

#[test]
fn missing_help_text_gives_empty_description() {
    let mut registry = Registry::new();
    let field = Field::new(FieldKind::Integer);

    let converted = assert_ok!(convert_form_field(&field, &mut registry));
    assert_eq!(converted.description, "");
}

#[test]
fn scalar_fields_register_nothing() {
    let mut registry = Registry::new();

    for kind in [FieldKind::Char, FieldKind::Integer, FieldKind::Boolean] {
        assert_ok!(convert_form_field(&Field::new(kind), &mut registry));
    }

    assert!(registry.is_empty());
}
