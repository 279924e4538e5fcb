//! Tests for dictionary construction and path lookup.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use keytext::{Dictionary, DictionaryError, DictionarySource, Entry, Lookup};
use serde_json::json;

fn dictionary() -> Dictionary {
    Dictionary::try_from(json!({
        "yes": "Yes",
        "greetings": { "hello": "Hello :name" },
        "labels": { "dogs": "" },
    }))
    .unwrap()
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn lookup_resolves_nested_path() {
    let d = dictionary();
    assert_eq!(d.lookup("yes"), Lookup::Found("Yes"));
    assert_eq!(d.lookup("greetings.hello"), Lookup::Found("Hello :name"));
}

#[test]
fn lookup_missing_segments() {
    let d = dictionary();
    assert_eq!(d.lookup("no"), Lookup::Missing);
    assert_eq!(d.lookup("greetings.bye"), Lookup::Missing);
    assert_eq!(d.lookup("missing.deeply.nested"), Lookup::Missing);
    assert_eq!(d.lookup("greetings..hello"), Lookup::Missing);
}

#[test]
fn lookup_through_leaf_is_missing() {
    assert_eq!(dictionary().lookup("yes.no"), Lookup::Missing);
}

#[test]
fn lookup_ending_on_group_is_missing() {
    assert_eq!(dictionary().lookup("greetings"), Lookup::Missing);
}

#[test]
fn lookup_empty_leaf_is_missing() {
    assert_eq!(dictionary().lookup("labels.dogs"), Lookup::Missing);
}

#[test]
fn lookup_empty_key_is_distinct() {
    let d = dictionary();
    assert_eq!(d.lookup(""), Lookup::EmptyKey);
    assert!(!d.lookup("").is_found());
    assert_eq!(d.lookup("").found(), None);
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn insert_and_get() {
    let mut group = Dictionary::new();
    group.insert("hi", "Hi");

    let mut d = Dictionary::new();
    d.insert("greetings", group.clone());
    d.insert("yes", "Yes");

    assert_eq!(d.len(), 2);
    assert_eq!(d.get("greetings").and_then(Entry::as_group), Some(&group));
    assert_eq!(d.get("yes").and_then(Entry::as_text), Some("Yes"));
    assert_eq!(d.segments().collect::<Vec<_>>(), ["greetings", "yes"]);
    assert_eq!(d.lookup("greetings.hi").found(), Some("Hi"));
}

#[test]
fn collects_from_pairs() {
    let d: Dictionary = [("yes", "Yes"), ("no", "No")].into_iter().collect();
    assert_eq!(d.lookup("no").found(), Some("No"));
}

#[test]
fn json_scalars_become_text() {
    let d = Dictionary::try_from(json!({
        "five": 5,
        "flag": true,
        "nothing": null,
        "list": ["zero", "one"],
    }))
    .unwrap();

    assert_eq!(d.len(), 3);
    assert_eq!(d.lookup("five").found(), Some("5"));
    assert_eq!(d.lookup("flag").found(), Some("true"));
    assert_eq!(d.lookup("nothing"), Lookup::Missing);
    assert_eq!(d.lookup("list.1").found(), Some("one"));
}

#[test]
fn json_root_must_be_object() {
    assert_eq!(
        Dictionary::try_from(json!(["a"])),
        Err(DictionaryError::NotAnObject { found: "an array" })
    );
    assert_eq!(
        Dictionary::try_from(json!("text")),
        Err(DictionaryError::NotAnObject { found: "a string" })
    );
    assert_eq!(
        DictionaryError::NotAnObject { found: "null" }.to_string(),
        "dictionary root must be an object, found null"
    );
}

#[test]
fn deserializes_nested_json() {
    let d: Dictionary =
        serde_json::from_str(r#"{"yes": "Yes", "greetings": {"hello": "Hello :name"}}"#).unwrap();
    assert_eq!(d, dictionary_without_labels());
}

fn dictionary_without_labels() -> Dictionary {
    let mut greetings = Dictionary::new();
    greetings.insert("hello", "Hello :name");
    let mut d = Dictionary::new();
    d.insert("yes", "Yes");
    d.insert("greetings", greetings);
    d
}

#[test]
fn serializes_as_plain_mapping() {
    let value = serde_json::to_value(dictionary_without_labels()).unwrap();
    assert_eq!(value, json!({"greetings": {"hello": "Hello :name"}, "yes": "Yes"}));
}

// =========================================================================
// Sources
// =========================================================================

#[test]
fn static_source_borrows() {
    let source = DictionarySource::from(dictionary());
    assert_eq!(source.get().lookup("yes").found(), Some("Yes"));
}

#[test]
fn supplier_source_is_not_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let source = DictionarySource::supplier(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Dictionary::new()
    });

    source.get();
    source.get();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn default_source_is_empty() {
    assert!(DictionarySource::default().get().is_empty());
    assert_eq!(format!("{:?}", DictionarySource::supplier(Dictionary::new)), "Supplier(..)");
}
