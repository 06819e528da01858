use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::{FIXTURE_FILE, Registry, RunOptions, Verdict, load_fixture, run_suite};

#[derive(Debug, Clone, PartialEq)]
pub enum SweepOutcome {
    Ran(Verdict),
    /// No fixture directory matches the solution's fixture name.
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepEntry {
    pub solution: &'static str,
    pub fixture: &'static str,
    pub outcome: SweepOutcome,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepSummary {
    pub entries: Vec<SweepEntry>,
}

impl SweepSummary {
    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(&entry.outcome, SweepOutcome::Ran(verdict) if !verdict.passed()))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome == SweepOutcome::Skipped)
            .count()
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed() == 0 { 0 } else { 1 }
    }
}

/// Finds `<name>/cases.json` files below `root`, keyed by directory name.
pub fn discover_fixtures(root: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let mut fixtures = BTreeMap::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry =
            entry.with_context(|| format!("failed to walk fixture root '{}'", root.display()))?;
        if !entry.file_type().is_file() || entry.file_name() != OsStr::new(FIXTURE_FILE) {
            continue;
        }
        let Some(name) = entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
        else {
            continue;
        };
        if let Some(previous) = fixtures.insert(name.to_string(), entry.path().to_path_buf()) {
            anyhow::bail!(
                "fixture '{name}' is defined twice: '{}' and '{}'",
                previous.display(),
                entry.path().display()
            );
        }
    }
    Ok(fixtures)
}

/// Runs every registered solution against its fixture, in registration order.
pub fn sweep(registry: &Registry, root: &Path, options: RunOptions) -> Result<SweepSummary> {
    let fixtures = discover_fixtures(root)?;
    info!(root = %root.display(), fixtures = fixtures.len(), "sweeping fixtures");

    let mut summary = SweepSummary::default();
    for handle in registry.iter() {
        let Some(path) = fixtures.get(handle.fixture) else {
            warn!(
                solution = handle.name,
                fixture = handle.fixture,
                "no fixture found, skipping"
            );
            summary.entries.push(SweepEntry {
                solution: handle.name,
                fixture: handle.fixture,
                outcome: SweepOutcome::Skipped,
            });
            continue;
        };

        let suite = load_fixture(path)?;
        let verdict = run_suite(handle, &suite, options)?;
        summary.entries.push(SweepEntry {
            solution: handle.name,
            fixture: handle.fixture,
            outcome: SweepOutcome::Ran(verdict),
        });
    }
    Ok(summary)
}
