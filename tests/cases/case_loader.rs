#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Fixture loader for query string cases
///
/// Fixtures are a JSON array mixing comment strings and case objects. Each
/// case names the operation, its input, the options to run it with and the
/// expected outcome.
use query_string::{ArrayFormat, Error, Options, Query, Scalar, Sort, Value};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    Case {
        op: Operation,
        input: serde_json::Value,
        #[serde(default)]
        options: CaseOptions,
        #[serde(default)]
        filter: Vec<String>,
        expected: serde_json::Value,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Parse,
    Stringify,
    Extract,
    Exclude,
    Pick,
}

/// Options as written in fixtures; unset fields keep the defaults
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseOptions {
    decode: Option<bool>,
    encode: Option<bool>,
    strict: Option<bool>,
    array_format: Option<String>,
    array_format_separator: Option<char>,
    sort: Option<bool>,
    parse_numbers: Option<bool>,
    parse_booleans: Option<bool>,
    skip_null: Option<bool>,
    skip_empty_string: Option<bool>,
}

impl CaseOptions {
    pub fn build(&self) -> Result<Options, Error> {
        let mut options = Options::new();
        if let Some(decode) = self.decode {
            options = options.decode(decode);
        }
        if let Some(encode) = self.encode {
            options = options.encode(encode);
        }
        if let Some(strict) = self.strict {
            options = options.strict(strict);
        }
        if let Some(format) = &self.array_format {
            options = options.array_format(format.parse::<ArrayFormat>()?);
        }
        if let Some(separator) = self.array_format_separator {
            options = options.array_format_separator(separator)?;
        }
        if self.sort == Some(false) {
            options = options.sort(Sort::Insertion);
        }
        if let Some(parse_numbers) = self.parse_numbers {
            options = options.parse_numbers(parse_numbers);
        }
        if let Some(parse_booleans) = self.parse_booleans {
            options = options.parse_booleans(parse_booleans);
        }
        if let Some(skip_null) = self.skip_null {
            options = options.skip_null(skip_null);
        }
        if let Some(skip_empty_string) = self.skip_empty_string {
            options = options.skip_empty_string(skip_empty_string);
        }
        Ok(options)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub case_num: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }

    pub fn report(&self) -> String {
        let mut report = self.summary();
        for failure in &self.failures {
            report.push_str(&format!(
                "\n#{}: {}\n   expected: {}\n   actual:   {}",
                failure.case_num, failure.input, failure.expected, failure.actual
            ));
        }
        report
    }
}

/// Fixture scalar: `null`, string, number or boolean
pub fn scalar_from_json(json: &serde_json::Value) -> Scalar {
    match json {
        serde_json::Value::String(text) => Scalar::from(text.as_str()),
        serde_json::Value::Number(number) => Scalar::Number(number.as_f64().unwrap()),
        serde_json::Value::Bool(flag) => Scalar::Bool(*flag),
        serde_json::Value::Null => Scalar::Null,
        other => panic!("not a scalar: {other}"),
    }
}

pub fn value_from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Array(items) => Value::List(items.iter().map(scalar_from_json).collect()),
        scalar => Value::Single(scalar_from_json(scalar)),
    }
}

/// Ordered `[[name, value], ...]` pairs
pub fn query_from_json(json: &serde_json::Value) -> Query {
    let pairs = json.as_array().expect("query fixtures are arrays of pairs");
    pairs
        .iter()
        .map(|pair| {
            let name = pair[0].as_str().expect("names are strings");
            (name, value_from_json(&pair[1]))
        })
        .collect()
}

pub fn load(data: &str) -> Vec<TestCase> {
    serde_json::from_str(data).expect("Failed to parse query fixtures")
}
