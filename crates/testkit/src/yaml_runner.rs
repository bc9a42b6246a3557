use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use sqlname_core::{NameSyntax, QualifiedName};

use crate::{Error, Result, SourceLocation};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NameCase {
    /// Text to parse. When omitted the triple is built from the expected parts.
    pub input: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub syntax: Option<String>,
    pub roundtrip: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCaseFile {
    pub path: PathBuf,
    pub file_name: String,
    pub cases: BTreeMap<String, NameCase>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(String),
}

pub fn load_name_cases_from_str(yaml: &str) -> Result<BTreeMap<String, NameCase>> {
    serde_yaml::from_str(yaml).map_err(parse_yaml_error)
}

pub fn load_name_cases_from_path(path: impl AsRef<Path>) -> Result<BTreeMap<String, NameCase>> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    load_name_cases_from_str(&yaml)
}

pub fn load_name_cases_from_dir(dir: impl AsRef<Path>) -> Result<Vec<NameCaseFile>> {
    let dir = dir.as_ref();
    let read_dir_error = |source: io::Error| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && is_yaml_path(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let cases = load_name_cases_from_path(&path)?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(NameCaseFile {
                path,
                file_name,
                cases,
            })
        })
        .collect()
}

pub fn run_name_case(case: &NameCase) -> TestResult {
    match run_name_case_flow(case) {
        Ok(()) => TestResult::Passed,
        Err(error) => TestResult::Failed(error.to_string()),
    }
}

fn run_name_case_flow(case: &NameCase) -> Result<()> {
    let syntax = resolve_syntax(case.syntax.as_deref())?;

    let triple = match case.input.as_deref() {
        Some(input) => {
            let parsed = QualifiedName::parse_with(input, &syntax);
            assert_parsed_parts(case, &parsed)?;
            parsed
        }
        None => {
            let name = case.name.clone().ok_or(Error::MissingName)?;
            QualifiedName::from_parts(case.database.clone(), case.schema.clone(), name)
        }
    };

    let rendered = triple.full_name();
    if let Some(expected) = case.full_name.as_deref() {
        expect_eq("full_name", Some(expected), Some(rendered.as_str()))?;
    }

    if case.roundtrip {
        // The renderer always writes bracketed T-SQL names.
        let reparsed = QualifiedName::parse_with(&rendered, &NameSyntax::TSQL);
        expect_eq(
            "roundtrip database",
            triple.database.as_deref(),
            reparsed.database.as_deref(),
        )?;
        expect_eq(
            "roundtrip schema",
            triple.schema.as_deref(),
            reparsed.schema.as_deref(),
        )?;
        expect_eq(
            "roundtrip name",
            Some(triple.name.as_str()),
            Some(reparsed.name.as_str()),
        )?;
    }

    Ok(())
}

fn assert_parsed_parts(case: &NameCase, parsed: &QualifiedName) -> Result<()> {
    expect_eq(
        "database",
        case.database.as_deref(),
        parsed.database.as_deref(),
    )?;
    expect_eq("schema", case.schema.as_deref(), parsed.schema.as_deref())?;
    if let Some(name) = case.name.as_deref() {
        expect_eq("name", Some(name), Some(parsed.name.as_str()))?;
    }
    Ok(())
}

fn expect_eq(field: &'static str, expected: Option<&str>, actual: Option<&str>) -> Result<()> {
    if expected == actual {
        return Ok(());
    }

    Err(Error::Mismatch {
        field,
        expected: expected.map(str::to_string),
        actual: actual.map(str::to_string),
    })
}

fn resolve_syntax(raw: Option<&str>) -> Result<NameSyntax> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(NameSyntax::default());
    };

    NameSyntax::named(raw).ok_or_else(|| Error::UnknownSyntax(raw.to_string()))
}

fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml" | "yaml")
    )
}

fn parse_yaml_error(source: serde_yaml::Error) -> Error {
    let location = source.location().map(|location| SourceLocation {
        line: location.line(),
        column: Some(location.column()),
    });

    Error::Yaml { location, source }
}
