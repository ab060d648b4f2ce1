//! Conversions between the source field text and an [`OptionList`].
//!
//! Two external formats are supported:
//!
//! - tilda/caret: `value^label` pairs joined by `~` (`a^Apple~b^Banana`). There is no escaping,
//!   so values and labels containing `^` or `~` cannot be represented.
//! - JSON: a flat object mapping values to labels (`{"a":"Apple","b":2}`). Duplicate values
//!   collapse on write; the last label wins.
//!
//! [`SourceFormat::detect`] picks the format for a raw string and [`load`] parses it.

use crate::error::FormatError;
use crate::option::OptionList;
use crate::option::OptionPair;
use regex::Regex;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;
use std::sync::LazyLock;

static STRICT_DELIMITED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^\^~]+\^[^\^~]+(?:~[^\^~]+\^[^\^~]+)*)?$").expect("static pattern")
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceFormat {
    #[default]
    Delimited,
    Json,
}

impl SourceFormat {
    /// Delimited when the raw text matches the strict tilda/caret grammar (the empty string
    /// included), JSON otherwise.
    pub fn detect(raw: &str) -> Self {
        if is_strict_delimited(raw) {
            SourceFormat::Delimited
        } else {
            SourceFormat::Json
        }
    }

    pub fn parse(self, raw: &str) -> Result<OptionList, FormatError> {
        match self {
            SourceFormat::Delimited => parse_delimited(raw),
            SourceFormat::Json => parse_json(raw),
        }
    }

    pub fn write(self, options: &[OptionPair]) -> String {
        match self {
            SourceFormat::Delimited => write_delimited(options),
            SourceFormat::Json => write_json(options),
        }
    }
}

/// Detect the format of `raw` and parse it with the matching codec.
///
/// The returned format is the one to save with.
pub fn load(raw: &str) -> Result<(SourceFormat, OptionList), FormatError> {
    let format = SourceFormat::detect(raw);
    let options = format.parse(raw)?;
    Ok((format, options))
}

/// Every segment has a non-empty value and a non-empty label.
pub fn is_strict_delimited(raw: &str) -> bool {
    STRICT_DELIMITED.is_match(raw)
}

/// Parse tilda/caret text.
///
/// Segments are split on `~`, then on `^`. A segment without a label (`a`, or `a^`) takes its
/// value as the label. A segment with more than one `^` is rejected. The empty string is the
/// empty list.
pub fn parse_delimited(raw: &str) -> Result<OptionList, FormatError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split('~')
        .enumerate()
        .map(|(segment, piece)| {
            let mut parts = piece.split('^');
            let value = parts.next().unwrap_or_default();
            let label = parts.next().filter(|l| !l.is_empty()).unwrap_or(value);
            if parts.next().is_some() {
                return Err(FormatError::Delimited { segment });
            }
            Ok(OptionPair::new(value, label))
        })
        .collect()
}

pub fn write_delimited(options: &[OptionPair]) -> String {
    let mut out = String::new();
    for (i, opt) in options.iter().enumerate() {
        if i > 0 {
            out.push('~');
        }
        out.push_str(&opt.value);
        out.push('^');
        out.push_str(&opt.label);
    }
    out
}

/// Parse a JSON object of `value -> label`, where labels are strings or numbers.
pub fn parse_json(raw: &str) -> Result<OptionList, FormatError> {
    let json: Value = serde_json::from_str(raw)?;
    let Value::Object(map) = json else {
        return Err(FormatError::NotAnObject {
            found: type_name(&json),
        });
    };

    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(label) => Ok(OptionPair::new(key, label)),
            Value::Number(n) => Ok(OptionPair::new(key, number_label(&n))),
            other => Err(FormatError::UnsupportedValueType {
                key,
                found: type_name(&other),
            }),
        })
        .collect()
}

pub fn write_json(options: &[OptionPair]) -> String {
    let mut map = Map::new();
    for opt in options {
        map.insert(opt.value.clone(), Value::String(opt.label.clone()));
    }
    Value::Object(map).to_string()
}

// Integral floats print without a fraction ("2", not "2.0").
fn number_label(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => float_label(f),
        None => n.to_string(),
    }
}

// Plain digits inside [1e-6, 1e21), exponent form with an explicit sign outside it.
fn float_label(f: f64) -> String {
    let abs = f.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        return format!("{f}");
    }
    let s = format!("{f:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> OptionList {
        items.iter().map(|(v, l)| OptionPair::new(*v, *l)).collect()
    }

    #[test]
    fn parses_delimited_pairs() {
        assert_eq!(
            parse_delimited("a^1~b^2").unwrap(),
            pairs(&[("a", "1"), ("b", "2")])
        );
    }

    #[test]
    fn missing_label_falls_back_to_value() {
        assert_eq!(
            parse_delimited("a~b^2").unwrap(),
            pairs(&[("a", "a"), ("b", "2")])
        );
        assert_eq!(parse_delimited("a^").unwrap(), pairs(&[("a", "a")]));
    }

    #[test]
    fn rejects_segment_with_two_carets() {
        let err = parse_delimited("a^1~b^2^3").unwrap_err();
        assert!(matches!(err, FormatError::Delimited { segment: 1 }));
    }

    #[test]
    fn empty_source_is_empty_delimited_list() {
        assert!(is_strict_delimited(""));
        let (format, options) = load("").unwrap();
        assert_eq!(format, SourceFormat::Delimited);
        assert!(options.is_empty());
    }

    #[test]
    fn strict_grammar_requires_both_sides() {
        assert!(is_strict_delimited("a^1~b^2"));
        assert!(!is_strict_delimited("a~b^2"));
        assert!(!is_strict_delimited("a^"));
        assert!(!is_strict_delimited("{\"a\":\"b\"}"));
    }

    #[test]
    fn writes_delimited_in_order() {
        let list = pairs(&[("b", "Banana"), ("a", "Apple")]);
        assert_eq!(write_delimited(&list), "b^Banana~a^Apple");
        assert_eq!(write_delimited(&[]), "");
    }

    #[test]
    fn parses_json_strings_and_numbers() {
        let list = parse_json(r#"{"x":"y","n":2,"f":1.5,"g":3.0}"#).unwrap();
        assert_eq!(
            list,
            pairs(&[("x", "y"), ("n", "2"), ("f", "1.5"), ("g", "3")])
        );
    }

    #[test]
    fn large_and_tiny_numbers_use_exponent_form() {
        let list = parse_json(r#"{"big":1e21,"small":1.5e-7,"edge":1e20,"neg":-2e25}"#).unwrap();
        assert_eq!(
            list,
            pairs(&[
                ("big", "1e+21"),
                ("small", "1.5e-7"),
                ("edge", "100000000000000000000"),
                ("neg", "-2e+25"),
            ])
        );
    }

    #[test]
    fn json_rejects_other_value_types_by_name() {
        let err = parse_json(r#"{"a":true}"#).unwrap_err();
        assert!(err.to_string().contains("\"boolean\" is not allowed"));

        let err = parse_json(r#"{"a":null}"#).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnsupportedValueType { found: "object", .. }
        ));
    }

    #[test]
    fn json_requires_an_object() {
        assert!(matches!(
            parse_json("[1,2]"),
            Err(FormatError::NotAnObject { found: "object" })
        ));
        assert!(matches!(parse_json("not json"), Err(FormatError::Json(_))));
    }

    #[test]
    fn writes_json_object() {
        assert_eq!(write_json(&pairs(&[("x", "y")])), r#"{"x":"y"}"#);
    }

    #[test]
    fn json_duplicates_keep_last_label() {
        let list = pairs(&[("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(write_json(&list), r#"{"a":"3","b":"2"}"#);
    }

    #[test]
    fn detect_falls_back_to_json() {
        let (format, options) = load(r#"{"a":"Apple"}"#).unwrap();
        assert_eq!(format, SourceFormat::Json);
        assert_eq!(options, pairs(&[("a", "Apple")]));
        assert!(load("a~b^2").is_err());
    }
}
