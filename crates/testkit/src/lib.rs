mod error;
mod yaml_runner;

pub use error::{Error, Result, SourceLocation};
pub use yaml_runner::{
    NameCase, NameCaseFile, TestResult, load_name_cases_from_dir, load_name_cases_from_path,
    load_name_cases_from_str, run_name_case,
};
