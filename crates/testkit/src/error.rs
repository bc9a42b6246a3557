use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read directory '{}': {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("invalid testcase yaml{}: {source}", render_location(.location.as_ref()))]
    Yaml {
        location: Option<SourceLocation>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown name syntax '{0}'")]
    UnknownSyntax(String),

    #[error("testcase without `input` must set `name`")]
    MissingName,

    #[error("{field} mismatch; expected {expected:?}, actual {actual:?}")]
    Mismatch {
        field: &'static str,
        expected: Option<String>,
        actual: Option<String>,
    },
}

fn render_location(location: Option<&SourceLocation>) -> String {
    match location {
        Some(SourceLocation {
            line,
            column: Some(column),
        }) => format!(" at line {line}, column {column}"),
        Some(SourceLocation { line, column: None }) => format!(" at line {line}"),
        None => String::new(),
    }
}
