use std::io::{self, Write};

use crate::{CaseMismatch, Verdict};

/// Terminal output for one suite: a single line on success, four lines on
/// the first failure.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub solution: &'a str,
    pub verdict: &'a Verdict,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a str, verdict: &'a Verdict) -> Self {
        Self { solution, verdict }
    }

    pub fn lines(&self) -> Vec<String> {
        match self.verdict {
            Verdict::Passed { cases } => {
                vec![format!("✅ {} passed {cases} test cases", self.solution)]
            }
            Verdict::Failed(mismatch) => failure_lines(self.solution, mismatch),
        }
    }

    /// Success goes to `out`, failures to `err`.
    pub fn write_to(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        let sink: &mut dyn Write = if self.verdict.passed() { out } else { err };
        for line in self.lines() {
            writeln!(sink, "{line}")?;
        }
        Ok(())
    }

    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}

fn failure_lines(solution: &str, mismatch: &CaseMismatch) -> Vec<String> {
    vec![
        format!("❌ {solution} failed on case {}", mismatch.index),
        format!("   Input: {}", mismatch.input),
        format!("   Expected: {}", mismatch.expected),
        format!("   Got: {}", mismatch.actual),
    ]
}
