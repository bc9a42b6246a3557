use std::{convert::Infallible, fmt, str::FromStr};

use tracing::debug;

use crate::{NameSyntax, clean_segment_with, render_full_name, split_segments_with};

/// A `database.schema.name` triple.
///
/// Parsing is best effort and never fails: parts are assigned from the right,
/// and anything left of the database part is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl QualifiedName {
    pub fn from_parts(
        database: Option<String>,
        schema: Option<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database,
            schema,
            name: name.into(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::from_parts(None, None, name)
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, &NameSyntax::TSQL)
    }

    pub fn parse_with(text: &str, syntax: &NameSyntax) -> Self {
        let segments = split_segments_with(text, syntax);
        Self::from_segments_with(&segments, syntax)
    }

    pub fn from_segments(segments: &[&str]) -> Self {
        Self::from_segments_with(segments, &NameSyntax::TSQL)
    }

    /// Clean and assign raw segments: last is the name, then schema, then database.
    pub fn from_segments_with(segments: &[&str], syntax: &NameSyntax) -> Self {
        let mut parts = segments
            .iter()
            .rev()
            .map(|segment| clean_segment_with(segment, syntax).into_owned());

        let name = parts.next().unwrap_or_default();
        let schema = parts.next();
        let database = parts.next();

        let discarded = parts.count();
        if discarded > 0 {
            debug!(
                discarded,
                ?segments,
                "ignoring segments beyond database.schema.name"
            );
        }

        Self {
            database,
            schema,
            name,
        }
    }

    pub fn full_name(&self) -> String {
        render_full_name(self)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromStr for QualifiedName {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(text))
    }
}

impl From<&str> for QualifiedName {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
