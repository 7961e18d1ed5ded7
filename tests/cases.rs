/// Fixture-driven query string cases
///
/// Cases live in `cases/querytestdata.json` and cover parsing, stringifying,
/// extraction and URL filtering under each array format.
#[path = "cases/case_loader.rs"]
mod case_loader;

#[path = "cases/case_runner.rs"]
mod case_runner;

#[path = "cases/case_tests.rs"]
mod case_tests;
