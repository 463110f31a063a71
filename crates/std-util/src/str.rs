use heck::ToUpperCamelCase;

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// Uppercases `src` and collapses every run of characters outside
/// `[A-Za-z0-9]` into a single `_`.
///
/// Word boundaries are not inferred from case changes: `"fooBar"` becomes
/// `"FOOBAR"`, and leading or trailing runs are kept as `_`.
pub fn upper_alnum(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut in_run = false;

    for ch in src.chars().flat_map(char::to_uppercase) {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }

    out
}
