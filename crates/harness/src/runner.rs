use kata_value::{MapOrder, Value};
use tracing::{debug, trace};

use crate::{HarnessError, SolutionHandle, TestSuite};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub map_order: MapOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseMismatch {
    pub index: usize,
    pub input: Value,
    pub expected: Value,
    pub actual: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Passed { cases: usize },
    Failed(CaseMismatch),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed { .. } => 0,
            Self::Failed(_) => 1,
        }
    }
}

/// Runs `suite` against `handle`, stopping at the first mismatching case.
///
/// Argument counts are validated for every case before anything is invoked.
/// An error returned by the solution aborts the run instead of counting as a
/// mismatch.
pub fn run_suite(
    handle: &SolutionHandle,
    suite: &TestSuite,
    options: RunOptions,
) -> Result<Verdict, HarnessError> {
    check_arity(handle, suite)?;

    for (index, case) in suite.cases.iter().enumerate() {
        let actual =
            handle
                .invoke(&case.arguments())
                .map_err(|source| HarnessError::Invocation {
                    solution: handle.name.to_string(),
                    index,
                    source,
                })?;
        trace!(solution = handle.name, index, %actual, "case evaluated");

        if !actual.matches(&case.expected, options.map_order) {
            debug!(solution = handle.name, index, "case mismatch");
            return Ok(Verdict::Failed(CaseMismatch {
                index,
                input: case.input_value(),
                expected: case.expected.clone(),
                actual,
            }));
        }
    }

    debug!(solution = handle.name, cases = suite.len(), "suite passed");
    Ok(Verdict::Passed { cases: suite.len() })
}

fn check_arity(handle: &SolutionHandle, suite: &TestSuite) -> Result<(), HarnessError> {
    match suite
        .cases
        .iter()
        .position(|case| case.arity() != handle.arity())
    {
        Some(index) => Err(HarnessError::ArityMismatch {
            solution: handle.name.to_string(),
            index,
            expected: handle.arity(),
            got: suite.cases[index].arity(),
        }),
        None => Ok(()),
    }
}
