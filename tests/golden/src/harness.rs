use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use kata_harness::{
    FIXTURE_FILE, Registry, Report, RunOptions, SolutionHandle, load_fixture, run_suite,
};

const SOLUTIONS_OVERRIDE: &str = "solutions.txt";
const EXPECTED_OUTPUT: &str = "expected.out";

pub fn run_case(case: &str) -> Result<()> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let (fixture_dir, name) = resolve_paths(manifest_dir, case)?;

    let registry = kata_solutions::registry();
    let handles = select_solutions(&registry, &fixture_dir, &name)?;
    let suite = load_fixture(&fixture_dir.join(FIXTURE_FILE))?;

    let mut rendered = Vec::new();
    for handle in handles {
        let verdict = run_suite(handle, &suite, RunOptions::default())
            .with_context(|| format!("fixture '{name}' aborted on '{}'", handle.name))?;
        rendered.extend(Report::new(handle.name, &verdict).lines());
    }

    compare_output(&fixture_dir, &rendered.join("\n"))
}

fn resolve_paths(manifest_dir: &Path, case: &str) -> Result<(PathBuf, String)> {
    let Some(name) = case.strip_prefix("fixture:") else {
        bail!("unknown golden case '{case}', expected prefix 'fixture:'");
    };
    let fixture_dir = manifest_dir.join("fixtures").join(name);
    if !fixture_dir.join(FIXTURE_FILE).is_file() {
        bail!(
            "fixture '{}' has no {FIXTURE_FILE}",
            fixture_dir.display()
        );
    }
    Ok((fixture_dir, name.to_string()))
}

/// Solutions bound to the fixture by name, unless the fixture lists its own
/// in `solutions.txt`.
fn select_solutions<'a>(
    registry: &'a Registry,
    fixture_dir: &Path,
    name: &str,
) -> Result<Vec<&'a SolutionHandle>> {
    let override_path = fixture_dir.join(SOLUTIONS_OVERRIDE);
    if override_path.exists() {
        let listed = std::fs::read_to_string(&override_path)
            .with_context(|| format!("failed to read '{}'", override_path.display()))?;
        return listed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|solution| registry.resolve(solution).map_err(anyhow::Error::from))
            .collect();
    }

    let handles = registry
        .iter()
        .filter(|handle| handle.fixture == name)
        .collect::<Vec<_>>();
    if handles.is_empty() {
        return Err(anyhow!("no registered solution uses fixture '{name}'"));
    }
    Ok(handles)
}

fn compare_output(fixture_dir: &Path, rendered: &str) -> Result<()> {
    let expected_path = fixture_dir.join(EXPECTED_OUTPUT);
    let expected = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("failed to read '{}'", expected_path.display()))?;

    similar_asserts::assert_eq!(expected.trim_end(), rendered.trim_end());
    Ok(())
}
