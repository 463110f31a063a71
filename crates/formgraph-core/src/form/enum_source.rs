use std_util::str;

/// Where the name of a field's generated enum comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnumSource {
    /// Use this name verbatim.
    Named(String),

    /// Derive the name from the owning structure and the field,
    /// `<OwnerName><FieldName>`.
    Owner { owner: String, field: String },
}

impl EnumSource {
    /// Resolves the enum's stable name. Repeated calls for the same source
    /// always return the same name.
    pub fn resolve(&self, prefix: Option<&str>) -> String {
        let base = match self {
            EnumSource::Named(name) => return name.clone(),
            EnumSource::Owner { owner, field } => {
                format!(
                    "{}{}",
                    str::upper_camel_case(owner),
                    str::upper_camel_case(field)
                )
            }
        };

        match prefix {
            Some(prefix) => format!("{prefix}{base}"),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_name() {
        let source = EnumSource::Owner {
            owner: "TestModel".into(),
            field: "field".into(),
        };
        assert_eq!(source.resolve(None), "TestModelField");
        assert_eq!(source.resolve(Some("Api")), "ApiTestModelField");
    }

    #[test]
    fn owner_name_from_snake_case() {
        let source = EnumSource::Owner {
            owner: "order_line".into(),
            field: "shipping_method".into(),
        };
        assert_eq!(source.resolve(None), "OrderLineShippingMethod");
    }

    #[test]
    fn named_ignores_prefix() {
        let source = EnumSource::Named("Color".into());
        assert_eq!(source.resolve(Some("Api")), "Color");
    }
}
