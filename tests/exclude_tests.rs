#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use query_string::{ArrayFormat, Filter, Options, Scalar, Value, exclude, pick};

#[test]
fn test_exclude_with_name_list() {
    assert_eq!(
        exclude("http://example.com/?a=1&b=2&c=3#a", ["c"], &Options::new()),
        "http://example.com/?a=1&b=2#a"
    );
}

#[test]
fn test_exclude_with_predicate_and_parsed_numbers() {
    let options = Options::new().parse_numbers(true);
    let result = exclude(
        "http://example.com/?a=1&b=2&c=3#a",
        Filter::predicate(|name, value| {
            assert!(matches!(value, Value::Single(Scalar::Number(_))));
            name == "a"
        }),
        &options,
    );
    assert_eq!(result, "http://example.com/?b=2&c=3#a");
}

#[test]
fn test_exclude_keeps_fragment_unencoded() {
    assert_eq!(
        exclude("https://example.com?a=b#/home", ["a"], &Options::new()),
        "https://example.com#/home"
    );
}

#[test]
fn test_exclude_empty_name_list() {
    let names: [&str; 0] = [];
    assert_eq!(
        exclude("http://example.com/?a=1&b=2&c=3", names, &Options::new()),
        "http://example.com/?a=1&b=2&c=3"
    );
}

#[test]
fn test_exclude_missing_names() {
    assert_eq!(
        exclude("http://example.com/?a=1&b=2", ["c", "d"], &Options::new()),
        "http://example.com/?a=1&b=2"
    );
}

#[test]
fn test_exclude_keeps_repeated_values() {
    assert_eq!(
        exclude("http://example.com/?a=1&a=2&b=3", ["b"], &Options::new()),
        "http://example.com/?a=1&a=2"
    );
}

#[test]
fn test_exclude_matches_decoded_names() {
    assert_eq!(
        exclude(
            "http://example.com/?foo%5Bbar%5D=1&normal=2",
            ["foo[bar]"],
            &Options::new()
        ),
        "http://example.com/?normal=2"
    );
}

#[test]
fn test_exclude_without_query() {
    let options = Options::new();
    assert_eq!(
        exclude("http://example.com/", ["a"], &options),
        "http://example.com/"
    );
    assert_eq!(
        exclude("http://example.com/#hash", ["a"], &options),
        "http://example.com/#hash"
    );
}

#[test]
fn test_exclude_everything_drops_question_mark() {
    assert_eq!(
        exclude(
            "http://example.com/?a=1&b=2&c=3",
            ["a", "b", "c"],
            &Options::new()
        ),
        "http://example.com/"
    );
}

#[test]
fn test_exclude_preserves_path() {
    assert_eq!(
        exclude(
            "http://example.com/path/to/page?a=1&b=2",
            ["a"],
            &Options::new()
        ),
        "http://example.com/path/to/page?b=2"
    );
}

#[test]
fn test_exclude_keeps_empty_values() {
    assert_eq!(
        exclude("http://example.com/?a=&b=2&c=", ["b"], &Options::new()),
        "http://example.com/?a=&c="
    );
}

#[test]
fn test_exclude_keeps_valueless_names() {
    assert_eq!(
        exclude("http://example.com/?a&b=2&c", ["b"], &Options::new()),
        "http://example.com/?a&c"
    );
}

#[test]
fn test_predicate_sees_lists_for_repeated_names() {
    let result = exclude(
        "http://example.com/?a=1&a=2&b=3",
        Filter::predicate(|name, value| {
            if name == "a" {
                assert_eq!(value, &Value::from(vec!["1", "2"]));
                return true;
            }
            false
        }),
        &Options::new(),
    );
    assert_eq!(result, "http://example.com/?b=3");
}

#[test]
fn test_exclude_relative_urls() {
    let options = Options::new();
    assert_eq!(exclude("/path?a=1&b=2", ["a"], &options), "/path?b=2");
    assert_eq!(exclude("?a=1&b=2", ["b"], &options), "?a=1");
}

#[test]
fn test_exclude_fragment_with_slashes() {
    assert_eq!(
        exclude(
            "http://example.com/?a=1#section/subsection",
            ["a"],
            &Options::new()
        ),
        "http://example.com/#section/subsection"
    );
}

#[test]
fn test_exclude_nested_names_are_reencoded() {
    assert_eq!(
        exclude(
            "http://example.com/?user[name]=John&user[age]=30&id=1",
            ["user[name]"],
            &Options::new()
        ),
        "http://example.com/?id=1&user%5Bage%5D=30"
    );
}

#[test]
fn test_exclude_with_owned_names() {
    let names = vec![String::from("a"), String::from("b")];
    assert_eq!(
        exclude("/p?a=1&b=2&c=3", names.as_slice(), &Options::new()),
        "/p?c=3"
    );
    assert_eq!(exclude("/p?a=1&b=2&c=3", names, &Options::new()), "/p?c=3");
}

#[test]
fn test_pick_with_name_list() {
    assert_eq!(
        pick("http://example.com/?a=1&b=2&c=3#a", ["a", "c"], &Options::new()),
        "http://example.com/?a=1&c=3#a"
    );
}

#[test]
fn test_pick_nothing_drops_question_mark() {
    assert_eq!(
        pick("http://example.com/?a=1#top", ["z"], &Options::new()),
        "http://example.com/#top"
    );
}

#[test]
fn test_pick_with_predicate() {
    let result = pick(
        "/search?q=rust&page=2&lang=en",
        Filter::predicate(|name, _| name.len() > 1 && name != "lang"),
        &Options::new(),
    );
    assert_eq!(result, "/search?page=2");
}

#[test]
fn test_pick_bracket_lists() {
    let options = Options::new().array_format(ArrayFormat::Bracket);
    assert_eq!(
        pick("/p?ids[]=1&ids[]=2&q=x", ["ids"], &options),
        "/p?ids[]=1&ids[]=2"
    );
}

#[test]
fn test_exclude_and_pick_partition_the_query() {
    let url = "https://example.com/p?d=4&a=1&c=3&b=2#end";
    let options = Options::new();
    assert_eq!(
        exclude(url, ["a", "c"], &options),
        "https://example.com/p?b=2&d=4#end"
    );
    assert_eq!(pick(url, ["a", "c"], &options), "https://example.com/p?a=1&c=3#end");
}
