use crate::QualifiedName;

/// Render `name` as a bracketed `[database].[schema].[name]` string.
///
/// Blank (absent or whitespace-only) database and schema parts are omitted. A
/// database without a schema keeps the empty middle position: `[db]..[name]`.
/// Re-parsing that output yields an empty schema, so a whitespace-only schema
/// comes back as `Some("")` rather than its original blanks.
pub fn render_full_name(name: &QualifiedName) -> String {
    match (
        non_blank(name.database.as_deref()),
        non_blank(name.schema.as_deref()),
    ) {
        (None, None) => format!("[{}]", name.name),
        (Some(database), Some(schema)) => format!("[{database}].[{schema}].[{}]", name.name),
        (None, Some(schema)) => format!("[{schema}].[{}]", name.name),
        (Some(database), None) => format!("[{database}]..[{}]", name.name),
    }
}

fn non_blank(part: Option<&str>) -> Option<&str> {
    part.filter(|value| !value.trim().is_empty())
}
