//! Exercise solutions, one module per day, and the table that registers them
//! with the harness.

pub mod day01;
pub mod day02;
pub mod day03;

use kata_harness::{InvokeError, Registry, SolutionHandle, Value, arg};

pub const SOLUTIONS: &[SolutionHandle] = &[
    SolutionHandle::new(
        "day-01/contains-duplicate",
        "day-01",
        &["nums"],
        contains_duplicate,
    ),
    SolutionHandle::new("day-02/is-anagram", "day-02", &["s", "t"], is_anagram),
    SolutionHandle::new(
        "day-02/is-anagram-ascii",
        "day-02",
        &["s", "t"],
        is_anagram_ascii,
    ),
    SolutionHandle::new("day-03/two-sum", "day-03", &["nums", "target"], two_sum),
    SolutionHandle::new(
        "day-03/two-sum-reversed",
        "day-03-reversed",
        &["nums", "target"],
        two_sum_reversed,
    ),
];

pub fn registry() -> Registry {
    let mut registry = Registry::new();
    for handle in SOLUTIONS {
        registry.register(*handle);
    }
    registry
}

fn contains_duplicate(args: &[Value]) -> Result<Value, InvokeError> {
    let nums: Vec<i64> = arg(args, 0)?;
    Ok(day01::contains_duplicate(&nums).into())
}

fn is_anagram(args: &[Value]) -> Result<Value, InvokeError> {
    let s: String = arg(args, 0)?;
    let t: String = arg(args, 1)?;
    Ok(day02::is_anagram(&s, &t).into())
}

fn is_anagram_ascii(args: &[Value]) -> Result<Value, InvokeError> {
    let s: String = arg(args, 0)?;
    let t: String = arg(args, 1)?;
    day02::is_anagram_ascii(&s, &t)
        .map(Value::from)
        .map_err(|err| InvokeError::Rejected(err.to_string()))
}

fn two_sum(args: &[Value]) -> Result<Value, InvokeError> {
    let nums: Vec<i64> = arg(args, 0)?;
    let target: i64 = arg(args, 1)?;
    Ok(day03::two_sum(&nums, target).into())
}

fn two_sum_reversed(args: &[Value]) -> Result<Value, InvokeError> {
    let nums: Vec<i64> = arg(args, 0)?;
    let target: i64 = arg(args, 1)?;
    Ok(day03::two_sum_reversed(&nums, target).into())
}
