#![allow(clippy::print_stdout)]

/// Query string usage example
use query_string::{ArrayFormat, Filter, Options, ParsedUrl, Value};

fn main() -> query_string::Result<()> {
    let options = Options::new();

    // Parse a query string
    let query = query_string::parse("?name=John&age=30&tag=a&tag=b", &options);
    println!("name: {:?}", query.get("name")); // Some(Single(String("John")))
    println!("tag: {:?}", query.get("tag")); // Some(List([String("a"), String("b")]))
    println!();

    // Stringify it back, keys sorted
    println!("stringify: {}", query_string::stringify(&query, &options)); // age=30&name=John&tag=a&tag=b
    println!();

    // Array formats
    let brackets = options.array_format(ArrayFormat::Bracket);
    println!("bracket: {}", query_string::stringify(&query, &brackets)); // age=30&name=John&tag[]=a&tag[]=b
    let separated = options
        .array_format(ArrayFormat::Separator)
        .array_format_separator('|')?;
    println!("separator: {}", query_string::stringify(&query, &separated)); // age=30&name=John&tag=a|b
    println!();

    // Drop tracking parameters, keeping the rest of the URL intact
    let url = "https://example.com/search?q=rust&utm_source=news&utm_medium=mail#results";
    let cleaned = query_string::exclude(
        url,
        Filter::predicate(|name, _| name.starts_with("utm_")),
        &options,
    );
    println!("exclude: {cleaned}"); // https://example.com/search?q=rust#results

    // Keep only what a handler needs
    let picked = query_string::pick(url, ["q"], &options);
    println!("pick: {picked}"); // https://example.com/search?q=rust#results
    println!();

    // Split a URL and build it back with extra parameters
    let mut parsed: ParsedUrl = query_string::parse_url(url, &options);
    parsed.query.insert("page", 2);
    parsed.query.insert("utm_source", Value::Single(query_string::Scalar::Null));
    let rebuilt = query_string::stringify_url(&parsed, &options.skip_null(true));
    println!("stringify_url: {rebuilt}"); // https://example.com/search?page=2&q=rust&utm_medium=mail#results

    Ok(())
}
