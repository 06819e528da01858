use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use kata_value::{Value, map_from_json};
use serde::Deserialize;
use tracing::debug;

use crate::HarnessError;

#[derive(Debug, Deserialize)]
struct RawCase {
    input: serde_json::Map<String, serde_json::Value>,
    expected: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    /// Named arguments in declaration order; the order is the call order.
    pub input: IndexMap<String, Value>,
    pub expected: Value,
}

impl TestCase {
    pub fn arity(&self) -> usize {
        self.input.len()
    }

    pub fn arguments(&self) -> Vec<Value> {
        self.input.values().cloned().collect()
    }

    pub fn input_value(&self) -> Value {
        Value::Map(self.input.clone())
    }
}

impl From<RawCase> for TestCase {
    fn from(raw: RawCase) -> Self {
        Self {
            input: map_from_json(raw.input),
            expected: Value::from(raw.expected),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestSuite {
    pub source: PathBuf,
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

pub fn load_fixture(path: &Path) -> Result<TestSuite, HarnessError> {
    let text = std::fs::read_to_string(path).map_err(|source| HarnessError::FixtureRead {
        path: path.to_path_buf(),
        source,
    })?;
    let suite = parse_fixture(&text, path)?;
    debug!(path = %path.display(), cases = suite.len(), "loaded fixture");
    Ok(suite)
}

/// Parses fixture text; `origin` is only used for error messages and
/// [`TestSuite::source`].
pub fn parse_fixture(text: &str, origin: &Path) -> Result<TestSuite, HarnessError> {
    let raw: Vec<RawCase> =
        serde_json::from_str(text).map_err(|source| HarnessError::FixtureParse {
            path: origin.to_path_buf(),
            source,
        })?;
    Ok(TestSuite {
        source: origin.to_path_buf(),
        cases: raw.into_iter().map(TestCase::from).collect(),
    })
}
