use std::fmt;

pub(super) const INDENT: &str = "  ";

/// Writes a description as a block string on its own line(s), followed by a
/// newline. Writes nothing when there is no description.
pub(super) fn description(
    f: &mut fmt::Formatter<'_>,
    description: Option<&str>,
    indent: &str,
) -> fmt::Result {
    let Some(description) = description else {
        return Ok(());
    };

    let escaped = description.replace("\"\"\"", "\\\"\"\"");

    if !escaped.contains('\n') && !escaped.ends_with('"') {
        return writeln!(f, "{indent}\"\"\"{escaped}\"\"\"");
    }

    writeln!(f, "{indent}\"\"\"")?;
    for line in escaped.lines() {
        if line.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, "{indent}{line}")?;
        }
    }
    writeln!(f, "{indent}\"\"\"")
}
