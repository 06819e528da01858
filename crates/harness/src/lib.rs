//! Fixture-driven runner for exercise solutions.
//!
//! A fixture is a JSON array of `{"input": {...}, "expected": ...}` cases. The
//! runner unpacks each `input` object positionally (in key order), calls the
//! registered solution and stops at the first case whose result differs from
//! `expected`.

mod error;
pub mod fixture;
pub mod registry;
pub mod report;
pub mod runner;
pub mod sweep;

pub use error::{HarnessError, InvokeError};
pub use fixture::{TestCase, TestSuite, load_fixture, parse_fixture};
pub use kata_value::{MapOrder, Value};
pub use registry::{Registry, SolutionFn, SolutionHandle, arg};
pub use report::Report;
pub use runner::{CaseMismatch, RunOptions, Verdict, run_suite};
pub use sweep::{SweepEntry, SweepOutcome, SweepSummary, discover_fixtures, sweep};

/// File name of the case list inside a fixture directory.
pub const FIXTURE_FILE: &str = "cases.json";
