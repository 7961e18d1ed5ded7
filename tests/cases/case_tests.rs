#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::case_loader::{TestCase, load};
use super::case_runner::run_cases;

const FIXTURES: &str = include_str!("./querytestdata.json");

#[test]
fn test_fixture_suite() {
    let cases = load(FIXTURES);
    let result = run_cases(cases);
    assert_eq!(result.failed, 0, "{}", result.report());
    assert!(result.passed > 0);
}

#[test]
fn test_fixtures_cover_every_operation() {
    let cases = load(FIXTURES);
    let mut ops: Vec<String> = cases
        .iter()
        .filter_map(|case| match case {
            TestCase::Case { op, .. } => Some(format!("{op:?}")),
            TestCase::Comment(_) => None,
        })
        .collect();
    ops.sort();
    ops.dedup();
    assert_eq!(ops, ["Exclude", "Extract", "Parse", "Pick", "Stringify"]);
}
