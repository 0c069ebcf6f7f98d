//! Flat key/value extraction from table bodies
//!
//! A table body is scanned by four independent recognizer passes in a fixed
//! order: typed constructors, quoted strings, booleans, bare numbers. Each
//! pass covers the whole body; the first pass to claim a key wins and later
//! passes never overwrite it. Precedence is decided by pass order, not by
//! where a key sits in the text.

use regex::Regex;
use std::collections::HashMap;

use crate::value::{FrameValue, TypedValue, VectorKind, VectorValue};

/// Extracts every recognized `key = value` pair of a flat table body.
pub fn extract_scalars(body: &str) -> HashMap<String, TypedValue> {
    let mut values = HashMap::new();
    collect_constructors(body, &mut values);
    collect_strings(body, &mut values);
    collect_booleans(body, &mut values);
    collect_numbers(body, &mut values);
    values
}

/// Pass 1: `key = Name.new(args...)` for the recognized constructors.
fn collect_constructors(body: &str, values: &mut HashMap<String, TypedValue>) {
    let pattern =
        Regex::new(r"(\w+)\s*=\s*(CFrame|Vector3|Vector2|Color3)\.new\(([^)]*)\)").unwrap();

    for cap in pattern.captures_iter(body) {
        let key = &cap[1];
        if values.contains_key(key) {
            continue;
        }

        let args = parse_args(&cap[3]);
        let value = if &cap[2] == "CFrame" {
            TypedValue::Frame(FrameValue::from_args(&args))
        } else if let Some(kind) = VectorKind::from_name(&cap[2]) {
            TypedValue::Vector(VectorValue { kind, components: args })
        } else {
            continue;
        };

        values.insert(key.to_string(), value);
    }
}

/// Pass 2: `key = "text"`.
fn collect_strings(body: &str, values: &mut HashMap<String, TypedValue>) {
    let pattern = Regex::new(r#"(\w+)\s*=\s*"([^"]+)""#).unwrap();

    for cap in pattern.captures_iter(body) {
        let key = &cap[1];
        if values.contains_key(key) {
            continue;
        }
        values.insert(key.to_string(), TypedValue::Str(cap[2].to_string()));
    }
}

/// Pass 3: literal `true` / `false`, case-sensitive.
fn collect_booleans(body: &str, values: &mut HashMap<String, TypedValue>) {
    let pattern = Regex::new(r"(\w+)\s*=\s*(true|false)\b").unwrap();

    for cap in pattern.captures_iter(body) {
        let key = &cap[1];
        if values.contains_key(key) {
            continue;
        }
        values.insert(key.to_string(), TypedValue::Bool(&cap[2] == "true"));
    }
}

/// Pass 4: bare integers and decimals, with an optional leading minus.
fn collect_numbers(body: &str, values: &mut HashMap<String, TypedValue>) {
    let pattern = Regex::new(r"(\w+)\s*=\s*(-?\d+(?:\.\d+)?)").unwrap();

    for cap in pattern.captures_iter(body) {
        let key = &cap[1];
        if values.contains_key(key) {
            continue;
        }
        if let Ok(number) = cap[2].parse::<f64>() {
            values.insert(key.to_string(), TypedValue::Num(number));
        }
    }
}

/// Parses a comma-separated constructor argument list as floats, dropping
/// anything that does not parse.
fn parse_args(raw: &str) -> Vec<f64> {
    raw.split(',')
        .filter_map(|arg| arg.trim().parse::<f64>().ok())
        .collect()
}
