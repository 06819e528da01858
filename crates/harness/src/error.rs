use std::path::PathBuf;

use kata_value::ValueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read fixture '{}'", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixture '{}'", path.display())]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown solution '{name}', known solutions: {}", known.join(", "))]
    SolutionLoad { name: String, known: Vec<String> },
    #[error("case {index} passes {got} arguments but '{solution}' takes {expected}")]
    ArityMismatch {
        solution: String,
        index: usize,
        expected: usize,
        got: usize,
    },
    #[error("'{solution}' raised an error on case {index}")]
    Invocation {
        solution: String,
        index: usize,
        #[source]
        source: InvokeError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvokeError {
    #[error("function '{name}' expected {expected} arguments, got {got}")]
    BadArity {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("argument {position}: {reason}")]
    Argument { position: usize, reason: ValueError },
    #[error("{0}")]
    Rejected(String),
}
