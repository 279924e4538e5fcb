//! Tests for composed-key parsing.

use keytext::{ComposedKey, ParseError, Replacements, Value};

fn replace(pairs: &[(&str, &str)]) -> Replacements {
    pairs.iter().copied().collect()
}

#[test]
fn detects_composed_keys() {
    assert!(ComposedKey::is_composed("a.b[3]"));
    assert!(ComposedKey::is_composed("a.b{x:1}"));
    assert!(ComposedKey::is_composed("a.b[3"));
    assert!(!ComposedKey::is_composed("a.b.c"));
    assert!(!ComposedKey::is_composed(""));
}

#[test]
fn parses_count() {
    let parsed = ComposedKey::parse("a.b[3]");
    assert_eq!(parsed.key, "a.b");
    assert_eq!(parsed.count, Some(3));
    assert_eq!(parsed.replace, None);
}

#[test]
fn parses_replacements_as_strings() {
    let parsed = ComposedKey::parse("a.b{x:1,y:2}");
    assert_eq!(parsed.key, "a.b");
    assert_eq!(parsed.count, None);
    let replace = parsed.replace.unwrap();
    assert_eq!(replace.get("x"), Some(&Value::from("1")));
    assert_eq!(replace.get("y"), Some(&Value::from("2")));
}

#[test]
fn parses_count_and_replacements() {
    let parsed = ComposedKey::parse("companies.name[2]{name:Apple,other:Microsoft}");
    assert_eq!(parsed.key, "companies.name");
    assert_eq!(parsed.count, Some(2));
    assert_eq!(
        parsed.replace,
        Some(replace(&[("name", "Apple"), ("other", "Microsoft")]))
    );
}

#[test]
fn trims_names_and_values() {
    let parsed = ComposedKey::parse("k{ name : John , other:Sam:x, junk }");
    assert_eq!(parsed.key, "k");
    assert_eq!(
        parsed.replace,
        Some(replace(&[("name", "John"), ("other", "Sam")]))
    );
}

#[test]
fn pair_without_colon_is_dropped_among_others() {
    let parsed = ComposedKey::parse("k{name,other:Sam}");
    assert_eq!(parsed.replace, Some(replace(&[("other", "Sam")])));
}

#[test]
fn later_duplicate_name_wins() {
    let parsed = ComposedKey::parse("k{a:1,a:2}");
    let replace = parsed.replace.unwrap();
    assert_eq!(replace.len(), 1);
    assert_eq!(replace.get("a"), Some(&Value::from("2")));
}

#[test]
fn unterminated_groups_keep_whole_key() {
    for input in [
        "a.b[3",
        "greetings.hello{name:John",
        "companies.name[2]{name:Apple",
        "a[]",
        "a{}",
        "a[x]",
        "[{",
        "[1]",
        "{a:b}",
    ] {
        assert_eq!(ComposedKey::parse(input), ComposedKey::literal(input), "{input}");
    }
}

#[test]
fn try_parse_reports_missing_suffix() {
    assert_eq!(
        ComposedKey::try_parse("a.b[3"),
        Err(ParseError::NoSuffix {
            input: "a.b[3".to_string()
        })
    );
    assert_eq!(ComposedKey::try_parse(""), Err(ParseError::Empty));
}

#[test]
fn line_terminators_are_never_composed() {
    assert_eq!(
        ComposedKey::try_parse("a\n[1]"),
        Err(ParseError::LineTerminator { position: 1 })
    );
    assert_eq!(ComposedKey::parse("a\n[1]"), ComposedKey::literal("a\n[1]"));
}

#[test]
fn groups_must_come_in_order() {
    let parsed = ComposedKey::parse("a{x}[3]");
    assert_eq!(parsed.key, "a{x}");
    assert_eq!(parsed.count, Some(3));
    assert_eq!(parsed.replace, None);
}

#[test]
fn shortest_base_key_wins() {
    let parsed = ComposedKey::parse("a{b}{c:d}");
    assert_eq!(parsed.key, "a");
    assert_eq!(parsed.replace, Some(replace(&[("b}{c", "d")])));
}

#[test]
fn pairs_without_colon_are_dropped() {
    let parsed = ComposedKey::parse("a{b}");
    assert_eq!(parsed.key, "a");
    assert_eq!(parsed.replace, Some(Replacements::new()));
}

#[test]
fn oversized_count_saturates() {
    let parsed = ComposedKey::parse("a[99999999999999999999]");
    assert_eq!(parsed.key, "a");
    assert_eq!(parsed.count, Some(i64::MAX));
    assert_eq!(parsed.replace, None);
}

#[test]
fn multibyte_keys_split_on_char_boundaries() {
    let parsed = ComposedKey::parse("größe.äpfel[2]");
    assert_eq!(parsed.key, "größe.äpfel");
    assert_eq!(parsed.count, Some(2));
}
