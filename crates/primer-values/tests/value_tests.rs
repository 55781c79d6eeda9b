//! Tests for the runtime value model:
//! - console rendering per variant
//! - runtime type tags
//! - symbol identity and labels
//! - serde forms

use num_bigint::BigInt;
use primer_values::{Symbol, TypeTag, Value};
use serde_json::json;

// ══════════════════════════════════════════════════════════════════════════════
// Rendering
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn integral_number_renders_without_fraction() {
    assert_eq!(Value::Number(4.0).to_string(), "4");
}

#[test]
fn fractional_number_renders_fraction() {
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
}

#[test]
fn text_renders_verbatim_without_quotes() {
    assert_eq!(Value::Text("Surendra".into()).to_string(), "Surendra");
}

#[test]
fn bool_renders_lowercase() {
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Bool(false).to_string(), "false");
}

#[test]
fn bigint_renders_plain_digits() {
    let v = Value::BigInt(BigInt::from(1_000_000_000_000_000_000_i64));
    assert_eq!(v.to_string(), "1000000000000000000");
}

#[test]
fn symbol_renders_label() {
    assert_eq!(Value::Symbol(Symbol::new("x")).to_string(), "Symbol(x)");
}

// ══════════════════════════════════════════════════════════════════════════════
// Type tags
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn type_of_every_variant() {
    assert_eq!(Value::Number(4.0).type_of(), TypeTag::Number);
    assert_eq!(Value::Text("s".into()).type_of(), TypeTag::Text);
    assert_eq!(Value::Bool(true).type_of(), TypeTag::Bool);
    assert_eq!(Value::BigInt(BigInt::from(1)).type_of(), TypeTag::BigInt);
    assert_eq!(Value::Symbol(Symbol::new("x")).type_of(), TypeTag::Symbol);
}

#[test]
fn tag_names_match_the_console_vocabulary() {
    assert_eq!(TypeTag::Number.name(), "number");
    assert_eq!(TypeTag::Text.name(), "string");
    assert_eq!(TypeTag::Bool.name(), "boolean");
    assert_eq!(TypeTag::BigInt.name(), "bigint");
    assert_eq!(TypeTag::Symbol.name(), "symbol");
}

#[test]
fn tag_display_matches_name() {
    assert_eq!(TypeTag::BigInt.to_string(), "bigint");
}

// ══════════════════════════════════════════════════════════════════════════════
// Symbols
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn symbols_with_the_same_label_are_distinct() {
    let first = Symbol::new("x");
    let second = Symbol::new("x");
    assert_ne!(first, second);
    assert_eq!(first.label(), second.label());
}

#[test]
fn symbol_clone_keeps_identity() {
    let sym = Symbol::new("x");
    assert_eq!(sym.clone(), sym);
}

#[test]
fn bigint_is_not_bounded_by_a_machine_word() {
    // 2^128, well past u64::MAX.
    let big: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
    let v = Value::BigInt(big);
    assert_eq!(v.to_string(), "340282366920938463463374607431768211456");
}

// ══════════════════════════════════════════════════════════════════════════════
// Serde forms
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn number_serializes_externally_tagged() {
    let json = serde_json::to_value(Value::Number(4.0)).unwrap();
    assert_eq!(json, json!({ "number": 4.0 }));
}

#[test]
fn text_serializes_with_the_string_tag() {
    let json = serde_json::to_value(Value::Text("Surendra".into())).unwrap();
    assert_eq!(json, json!({ "string": "Surendra" }));
}

#[test]
fn bigint_serializes_as_decimal_digits() {
    let v = Value::BigInt(BigInt::from(1_000_000_000_000_000_000_i64));
    let json = serde_json::to_value(v).unwrap();
    assert_eq!(json, json!({ "bigint": "1000000000000000000" }));
}

#[test]
fn symbol_serializes_as_its_label() {
    let json = serde_json::to_value(Value::Symbol(Symbol::new("x"))).unwrap();
    assert_eq!(json, json!({ "symbol": "x" }));
}
