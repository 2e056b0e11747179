use jsoncomb::constants::MAX_DEPTH;
use jsoncomb::grammar::{json, number, string};
use jsoncomb::parser::{literal, one_of, sep_by1, Parser};
use jsoncomb::{parse, parse_with_options, JsonValue, ParseOptions};
use rstest::rstest;

#[rstest]
#[case("true extra")]
#[case("falsetrue")]
#[case("nullfalse")]
#[case("[1] [2]")]
#[case("{}x")]
#[case("\"a\" \"b\"")]
fn trailing_content_yields_nothing(#[case] input: &str) {
    assert_eq!(parse(input), None);
}

#[rstest]
fn value_parser_leaves_trailing_content() {
    let (value, rest) = json().parse("true extra").unwrap();
    assert_eq!(value, JsonValue::Bool(true));
    assert_eq!(rest, "extra");
}

#[rstest]
#[case("0123")]
#[case("-0123")]
#[case(".123")]
#[case("02.123")]
#[case("+12")]
fn number_boundary_rejects(#[case] input: &str) {
    assert_eq!(parse(input), None);
}

#[rstest]
fn negative_zero_parses_with_sign() {
    match parse("-0") {
        Some(JsonValue::Num(n)) => {
            assert_eq!(n, 0.0);
            assert!(n.is_sign_negative());
        }
        other => panic!("unexpected parse: {other:?}"),
    }
}

#[rstest]
#[case("3.14E+2")]
#[case("3.14e+2")]
#[case("314")]
#[case("31400e-2")]
fn exponent_forms_agree(#[case] input: &str) {
    assert_eq!(parse(input), Some(JsonValue::Num(314.0)));
}

#[rstest]
fn string_escapes() {
    assert_eq!(parse("\"hello\\n\""), Some(JsonValue::from("hello\n")));
    assert_eq!(parse(r#""a"b""#), None);
    assert_eq!(parse(r#""abc"#), None);
}

#[rstest]
fn lone_surrogate_is_replaced() {
    assert_eq!(
        parse(r#""\udc00 tail""#),
        Some(JsonValue::from("\u{fffd} tail"))
    );
}

#[rstest]
fn grammar_rules_compose_into_new_parsers() {
    // A comma separated list of numbers or strings, e.g. a CSV row.
    let cell: Parser<JsonValue> = one_of([
        number::number().map(JsonValue::Num),
        string::string().map(JsonValue::Str),
    ]);
    let row = sep_by1(cell, literal(","));
    let (cells, rest) = row.parse("1,\"two\",3;").unwrap();
    assert_eq!(
        cells,
        vec![JsonValue::Num(1.0), JsonValue::from("two"), JsonValue::Num(3.0)]
    );
    assert_eq!(rest, ";");
}

#[rstest]
fn nesting_limit_is_configurable() {
    let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(&nested(MAX_DEPTH)).is_some());
    assert!(parse(&nested(MAX_DEPTH + 1)).is_none());

    let shallow = ParseOptions::new().with_max_depth(2);
    assert!(parse_with_options("[[1]]", &shallow).is_some());
    assert!(parse_with_options("[[[1]]]", &shallow).is_none());
    assert!(parse_with_options(r#"["[[[[[["]"#, &shallow).is_some());
}

#[rstest]
fn long_inputs_parse_without_deep_recursion() {
    let many_items = format!("[{}]", vec!["{\"k\": [1, 2]}"; 20_000].join(","));
    match parse(&many_items) {
        Some(JsonValue::Array(items)) => assert_eq!(items.len(), 20_000),
        other => panic!("unexpected parse: {other:?}"),
    }

    let long_number = format!("1{}", "0".repeat(300));
    assert_eq!(parse(&long_number), Some(JsonValue::Num(1e300)));
}

#[rstest]
#[case("1e400")]
#[case("-1e400")]
#[case("[1, 1e400]")]
#[case(r#"{"big": -2e308}"#)]
fn numbers_beyond_f64_do_not_parse(#[case] input: &str) {
    assert_eq!(parse(input), None);
}

#[rstest]
fn largest_finite_number_round_trips() {
    let max = parse("1.7976931348623157e308").unwrap();
    assert_eq!(max, JsonValue::Num(f64::MAX));
    assert_eq!(parse(&jsoncomb::encode(&max)), Some(max));
}
