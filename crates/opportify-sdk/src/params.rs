// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Loosely typed caller parameters
//!
//! Facade operations accept a JSON object so callers can pass flags in either
//! `snake_case` or `camelCase` and in whatever scalar form they have at hand
//! (`true`, `1`, `"yes"`). [`Params`] reads such an object, treating `null`
//! members as absent, and [`resolve_boolean`] is the single coercion rule for
//! every flag.

use serde_json::{Map, Value};

use crate::{SdkError, SdkResult};

const TRUTHY: &[&str] = &["1", "true", "yes", "on", "y"];
const FALSY: &[&str] = &["0", "false", "no", "off", "n", ""];

/// Coerce a loosely typed flag value to `bool`
///
/// Accepted forms:
/// - JSON booleans
/// - the numbers `1` and `0`, including `1.0` and `0.0`
/// - the strings `1`, `true`, `yes`, `on`, `y` and `0`, `false`, `no`, `off`,
///   `n`, empty (case-insensitive, surrounding whitespace ignored)
///
/// # Errors
///
/// Returns [`SdkError::InvalidArgument`] naming `field` for anything else
pub fn resolve_boolean(field: &str, value: &Value) -> SdkResult<bool> {
    let resolved = match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_f64() {
            Some(1.0) => Some(true),
            Some(0.0) => Some(false),
            _ => None,
        },
        Value::String(text) => {
            let normalized = text.trim().to_ascii_lowercase();
            if TRUTHY.contains(&normalized.as_str()) {
                Some(true)
            } else if FALSY.contains(&normalized.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    };

    resolved.ok_or_else(|| {
        SdkError::invalid_argument(format!("Invalid boolean value for {field}: {value}"))
    })
}

/// Read-only view over a caller supplied parameter object
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Params<'a> {
    /// Wrap `value`, which must be a JSON object or `null`
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] for any other JSON type
    pub fn new(value: &'a Value) -> SdkResult<Self> {
        match value {
            Value::Object(map) => Ok(Self { map: Some(map) }),
            Value::Null => Ok(Self { map: None }),
            _ => Err(SdkError::invalid_argument(
                "Parameters must be provided as a JSON object.",
            )),
        }
    }

    /// Member `key`, with `null` treated as absent
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map
            .and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    }

    /// The first present member among `keys`, with the key it was found under
    pub fn first<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &'a Value)> {
        keys.iter()
            .find_map(|key| self.get(key).map(|value| (*key, value)))
    }

    /// A flag given as `snake` or, failing that, `camel`
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] if the value does not coerce
    pub fn flag(&self, snake: &str, camel: &str) -> SdkResult<Option<bool>> {
        self.first(&[snake, camel])
            .map(|(key, value)| resolve_boolean(key, value))
            .transpose()
    }

    /// Like [`Params::flag`] with a fallback for absent values
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] if the value does not coerce
    pub fn flag_or(&self, snake: &str, camel: &str, default: bool) -> SdkResult<bool> {
        Ok(self.flag(snake, camel)?.unwrap_or(default))
    }

    /// A scalar member rendered as a string
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] if the member is an array or object
    pub fn string(&self, key: &str) -> SdkResult<Option<String>> {
        self.get(key)
            .map(|value| {
                scalar_to_string(value).ok_or_else(|| {
                    SdkError::invalid_argument(format!("The {key} parameter must be a string."))
                })
            })
            .transpose()
    }

    /// A list member whose entries are scalars, rendered as strings
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] if the member is missing, is not
    /// an array, or holds a non-scalar entry
    pub fn string_list(&self, key: &str) -> SdkResult<Vec<String>> {
        let Some(Value::Array(items)) = self.get(key) else {
            return Err(SdkError::invalid_argument(format!(
                "The {key} parameter is required and must be an array."
            )));
        };

        items
            .iter()
            .map(|item| {
                scalar_to_string(item).ok_or_else(|| {
                    SdkError::invalid_argument(format!("Each entry of {key} must be a string."))
                })
            })
            .collect()
    }

    /// Copy of the underlying members, empty for `null`
    pub fn to_map(&self) -> Map<String, Value> {
        self.map.cloned().unwrap_or_default()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn boolean_coercion_table() {
        let cases = [
            (json!(true), true),
            (json!(false), false),
            (json!(1), true),
            (json!(0), false),
            (json!(1.0), true),
            (json!(0.0), false),
            (json!("1"), true),
            (json!("0"), false),
            (json!("true"), true),
            (json!("FALSE"), false),
            (json!("Yes"), true),
            (json!("no"), false),
            (json!(" on "), true),
            (json!("off"), false),
            (json!("y"), true),
            (json!("N"), false),
            (json!(""), false),
        ];

        for (value, expected) in cases {
            assert_eq!(
                resolve_boolean("enable_ai", &value).unwrap(),
                expected,
                "coercing {value}"
            );
        }
    }

    #[test]
    fn unrecognized_booleans_name_the_field() {
        for value in [json!("maybe"), json!(2), json!(1.5), json!([true]), json!({})] {
            let error = resolve_boolean("enable_auto_correction", &value).unwrap_err();
            match error {
                SdkError::InvalidArgument { message } => {
                    assert!(message.contains("enable_auto_correction"), "{message}");
                }
                other => panic!("Expected InvalidArgument, got: {other:?}"),
            }
        }
    }

    #[test]
    fn null_members_are_absent() {
        let value = json!({"enable_ai": null, "enableAi": "no"});
        let params = Params::new(&value).unwrap();

        assert!(params.get("enable_ai").is_none());
        assert_eq!(params.flag("enable_ai", "enableAi").unwrap(), Some(false));
    }

    #[test]
    fn snake_case_wins_over_camel_case() {
        let value = json!({"enable_ai": false, "enableAi": true});
        let params = Params::new(&value).unwrap();

        assert_eq!(params.flag("enable_ai", "enableAi").unwrap(), Some(false));
    }

    #[test]
    fn flag_default_applies_only_when_absent() {
        let value = json!({"enableAi": "0"});
        let params = Params::new(&value).unwrap();

        assert!(!params.flag_or("enable_ai", "enableAi", true).unwrap());
        assert!(
            params
                .flag_or("enable_domain_enrichment", "enableDomainEnrichment", true)
                .unwrap()
        );
    }

    #[test]
    fn null_params_are_an_empty_object() {
        let params = Params::new(&Value::Null).unwrap();
        assert!(params.get("email").is_none());
        assert!(params.to_map().is_empty());
    }

    #[test]
    fn non_object_params_are_rejected() {
        assert!(Params::new(&json!(["a@example.com"])).is_err());
        assert!(Params::new(&json!("a@example.com")).is_err());
    }

    #[test]
    fn scalars_render_as_strings() {
        let value = json!({"name": 42, "items": ["a", 1, true], "bad": [{}]});
        let params = Params::new(&value).unwrap();

        assert_eq!(params.string("name").unwrap().as_deref(), Some("42"));
        assert_eq!(params.string_list("items").unwrap(), ["a", "1", "true"]);
        assert!(params.string_list("bad").is_err());
        assert!(params.string_list("missing").is_err());
        assert!(params.string("items").is_err());
    }
}
