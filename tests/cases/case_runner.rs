#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::case_loader::{CaseFailure, CaseResult, Operation, TestCase, query_from_json};
/// Fixture runner
///
/// Runs every case through the public API and records mismatches.
use query_string::{exclude, extract, parse, pick, stringify};

pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut case_num = 0;

    for case in cases {
        let TestCase::Case {
            op,
            input,
            options,
            filter,
            expected,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let options = options.build().expect("fixture options are valid");
        let (outcome, shown) = match op {
            Operation::Parse => {
                let text = input.as_str().expect("parse input is a string");
                let actual = parse(text, &options);
                let wanted = query_from_json(&expected);
                (actual == wanted, (format!("{wanted:?}"), format!("{actual:?}")))
            }
            Operation::Stringify => {
                let query = query_from_json(&input);
                let actual = stringify(&query, &options);
                let wanted = expected.as_str().expect("stringify output is a string");
                (actual == wanted, (wanted.to_string(), actual))
            }
            Operation::Extract | Operation::Exclude | Operation::Pick => {
                let url = input.as_str().expect("url input is a string");
                let actual = match op {
                    Operation::Extract => extract(url).to_string(),
                    Operation::Exclude => exclude(url, filter.as_slice(), &options),
                    _ => pick(url, filter.as_slice(), &options),
                };
                let wanted = expected.as_str().expect("url output is a string");
                (actual == wanted, (wanted.to_string(), actual))
            }
        };

        if outcome {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.push(CaseFailure {
                case_num,
                input: input.to_string(),
                expected: shown.0,
                actual: shown.1,
            });
        }
    }

    result
}
