//! The session settings schema and its validation.
//!
//! The client always serialises the complete schema, so every key is
//! required, unknown keys are rejected, and the three error shapes are
//! rendered with stable wording the client tests against.

use std::collections::HashMap;

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Boolean,
    Integer,
}

/// The closed settings schema. Validation, error messages and the
/// documentation of recognised keys all come from this one table.
pub const SETTINGS_SCHEMA: &[(&str, SettingKind)] = &[
    ("number-of-questions", SettingKind::Integer),
    ("number-multiplechoice-options", SettingKind::Integer),
    ("include-typein-engtolat", SettingKind::Boolean),
    ("include-typein-lattoeng", SettingKind::Boolean),
    ("include-parse", SettingKind::Boolean),
    ("include-inflect", SettingKind::Boolean),
    ("include-principal-parts", SettingKind::Boolean),
    ("include-multiplechoice-engtolat", SettingKind::Boolean),
    ("include-multiplechoice-lattoeng", SettingKind::Boolean),
    ("english-subjunctives", SettingKind::Boolean),
    ("exclude-verbs", SettingKind::Boolean),
    ("exclude-deponents", SettingKind::Boolean),
    ("exclude-nouns", SettingKind::Boolean),
    ("exclude-adjectives", SettingKind::Boolean),
    ("exclude-adverbs", SettingKind::Boolean),
    ("exclude-pronouns", SettingKind::Boolean),
    ("exclude-regulars", SettingKind::Boolean),
    ("exclude-verb-first-conjugation", SettingKind::Boolean),
    ("exclude-verb-second-conjugation", SettingKind::Boolean),
    ("exclude-verb-third-conjugation", SettingKind::Boolean),
    ("exclude-verb-fourth-conjugation", SettingKind::Boolean),
    ("exclude-verb-mixed-conjugation", SettingKind::Boolean),
    ("exclude-verb-irregular-conjugation", SettingKind::Boolean),
    ("exclude-noun-first-declension", SettingKind::Boolean),
    ("exclude-noun-second-declension", SettingKind::Boolean),
    ("exclude-noun-third-declension", SettingKind::Boolean),
    ("exclude-noun-fourth-declension", SettingKind::Boolean),
    ("exclude-noun-fifth-declension", SettingKind::Boolean),
    ("exclude-noun-irregular-declension", SettingKind::Boolean),
    ("exclude-adjective-212", SettingKind::Boolean),
    ("exclude-adjective-31", SettingKind::Boolean),
    ("exclude-adjective-32", SettingKind::Boolean),
    ("exclude-adjective-33", SettingKind::Boolean),
    ("exclude-tense-present", SettingKind::Boolean),
    ("exclude-tense-imperfect", SettingKind::Boolean),
    ("exclude-tense-future", SettingKind::Boolean),
    ("exclude-tense-perfect", SettingKind::Boolean),
    ("exclude-tense-pluperfect", SettingKind::Boolean),
    ("exclude-tense-future-perfect", SettingKind::Boolean),
    ("exclude-voice-active", SettingKind::Boolean),
    ("exclude-voice-passive", SettingKind::Boolean),
    ("exclude-mood-indicative", SettingKind::Boolean),
    ("exclude-mood-subjunctive", SettingKind::Boolean),
    ("exclude-mood-imperative", SettingKind::Boolean),
    ("exclude-mood-infinitive", SettingKind::Boolean),
    ("exclude-participles", SettingKind::Boolean),
    ("exclude-gerunds", SettingKind::Boolean),
    ("exclude-supines", SettingKind::Boolean),
    ("exclude-person-first", SettingKind::Boolean),
    ("exclude-person-second", SettingKind::Boolean),
    ("exclude-person-third", SettingKind::Boolean),
    ("exclude-number-singular", SettingKind::Boolean),
    ("exclude-number-plural", SettingKind::Boolean),
    ("exclude-case-nominative", SettingKind::Boolean),
    ("exclude-case-vocative", SettingKind::Boolean),
    ("exclude-case-accusative", SettingKind::Boolean),
    ("exclude-case-genitive", SettingKind::Boolean),
    ("exclude-case-dative", SettingKind::Boolean),
    ("exclude-case-ablative", SettingKind::Boolean),
    ("exclude-gender-masculine", SettingKind::Boolean),
    ("exclude-gender-feminine", SettingKind::Boolean),
    ("exclude-gender-neuter", SettingKind::Boolean),
    ("exclude-degree-positive", SettingKind::Boolean),
    ("exclude-degree-comparative", SettingKind::Boolean),
    ("exclude-degree-superlative", SettingKind::Boolean),
];

/// A settings validation failure. The `Display` text is stable and shown
/// to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSettingsError {
    #[error("The settings object must be a JSON object.")]
    NotAnObject,
    #[error("Required settings are missing: {}.", quote_sorted(.keys))]
    Missing { keys: Vec<String> },
    #[error("Unrecognised settings were provided: {}.", quote_sorted(.keys))]
    Unrecognised { keys: Vec<String> },
    #[error("'{key}' must be an integer (got type {got}).")]
    NotAnInteger { key: String, got: &'static str },
    #[error("'{key}' must be a boolean (got type {got}).")]
    NotABoolean { key: String, got: &'static str },
    #[error("'{key}' must be at least {minimum} (got {got}).")]
    BelowMinimum { key: String, minimum: i64, got: i64 },
}

fn quote_sorted(keys: &[String]) -> String {
    let mut keys: Vec<&String> = keys.iter().collect();
    keys.sort();
    keys.iter()
        .map(|key| format!("'{key}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Python-flavoured names for JSON value types, matching the wording the
/// clients already test against.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Validated session settings.
#[derive(Debug, Clone)]
pub struct Settings {
    booleans: HashMap<&'static str, bool>,
    integers: HashMap<&'static str, i64>,
}

impl Settings {
    /// Validates a raw JSON settings object: every schema key present,
    /// nothing extra, every value of the declared type and range.
    pub fn from_json(value: &Value) -> Result<Settings, InvalidSettingsError> {
        let object = value.as_object().ok_or(InvalidSettingsError::NotAnObject)?;

        let missing: Vec<String> = SETTINGS_SCHEMA
            .iter()
            .filter(|(key, _)| !object.contains_key(*key))
            .map(|(key, _)| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(InvalidSettingsError::Missing { keys: missing });
        }

        let unrecognised: Vec<String> = object
            .keys()
            .filter(|key| !SETTINGS_SCHEMA.iter().any(|(name, _)| *name == key.as_str()))
            .cloned()
            .collect();
        if !unrecognised.is_empty() {
            return Err(InvalidSettingsError::Unrecognised { keys: unrecognised });
        }

        let mut booleans = HashMap::new();
        let mut integers = HashMap::new();
        for (key, kind) in SETTINGS_SCHEMA {
            let value = &object[*key];
            match kind {
                SettingKind::Boolean => {
                    let Some(flag) = value.as_bool() else {
                        return Err(InvalidSettingsError::NotABoolean {
                            key: key.to_string(),
                            got: json_type_name(value),
                        });
                    };
                    booleans.insert(*key, flag);
                }
                SettingKind::Integer => {
                    // A bool is not an acceptable integer even though some
                    // languages conflate them.
                    let number = match value {
                        Value::Number(n) => n.as_i64(),
                        _ => None,
                    };
                    let Some(number) = number else {
                        return Err(InvalidSettingsError::NotAnInteger {
                            key: key.to_string(),
                            got: json_type_name(value),
                        });
                    };
                    integers.insert(*key, number);
                }
            }
        }

        let settings = Settings { booleans, integers };
        settings.check_minimum("number-of-questions", 1)?;
        settings.check_minimum("number-multiplechoice-options", 2)?;
        Ok(settings)
    }

    fn check_minimum(&self, key: &'static str, minimum: i64) -> Result<(), InvalidSettingsError> {
        let got = self.integers[key];
        if got < minimum {
            return Err(InvalidSettingsError::BelowMinimum {
                key: key.to_string(),
                minimum,
                got,
            });
        }
        Ok(())
    }

    /// A boolean setting. Panics on a key outside the schema; callers use
    /// schema constants, never client input.
    pub fn flag(&self, key: &str) -> bool {
        self.booleans[key]
    }

    pub fn number_of_questions(&self) -> usize {
        self.integers["number-of-questions"] as usize
    }

    pub fn multiple_choice_options(&self) -> usize {
        self.integers["number-multiplechoice-options"] as usize
    }

    /// A fully permissive settings object: every flag false except the
    /// given question types, counts as provided. Test scaffolding for this
    /// crate and the server.
    pub fn permissive(number_of_questions: i64, options: i64, enabled: &[&str]) -> Settings {
        let mut booleans = HashMap::new();
        let mut integers = HashMap::new();
        for (key, kind) in SETTINGS_SCHEMA {
            match kind {
                SettingKind::Boolean => {
                    booleans.insert(*key, enabled.contains(key));
                }
                SettingKind::Integer => {
                    integers.insert(
                        *key,
                        match *key {
                            "number-of-questions" => number_of_questions,
                            _ => options,
                        },
                    );
                }
            }
        }
        Settings { booleans, integers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_settings() -> Value {
        let mut object = serde_json::Map::new();
        for (key, kind) in SETTINGS_SCHEMA {
            let value = match (kind, *key) {
                (SettingKind::Integer, "number-of-questions") => json!(5),
                (SettingKind::Integer, _) => json!(3),
                (SettingKind::Boolean, key) if key.starts_with("include") => json!(true),
                (SettingKind::Boolean, _) => json!(false),
            };
            object.insert(key.to_string(), value);
        }
        Value::Object(object)
    }

    #[test]
    fn test_valid_settings() {
        let settings = Settings::from_json(&full_settings()).unwrap();
        assert_eq!(settings.number_of_questions(), 5);
        assert_eq!(settings.multiple_choice_options(), 3);
        assert!(settings.flag("include-parse"));
        assert!(!settings.flag("exclude-verbs"));
    }

    #[test]
    fn test_missing_key_message() {
        let mut value = full_settings();
        value.as_object_mut().unwrap().remove("number-of-questions");
        let error = Settings::from_json(&value).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Required settings are missing: 'number-of-questions'."
        );
    }

    #[test]
    fn test_missing_keys_sorted() {
        let mut value = full_settings();
        value.as_object_mut().unwrap().remove("exclude-verbs");
        value.as_object_mut().unwrap().remove("english-subjunctives");
        let error = Settings::from_json(&value).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Required settings are missing: 'english-subjunctives', 'exclude-verbs'."
        );
    }

    #[test]
    fn test_unrecognised_key_message() {
        let mut value = full_settings();
        value
            .as_object_mut()
            .unwrap()
            .insert("frobnicate".to_string(), json!(true));
        let error = Settings::from_json(&value).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unrecognised settings were provided: 'frobnicate'."
        );
    }

    #[test]
    fn test_integer_type_message() {
        let mut value = full_settings();
        value
            .as_object_mut()
            .unwrap()
            .insert("number-of-questions".to_string(), json!("six"));
        let error = Settings::from_json(&value).unwrap_err();
        assert_eq!(
            error.to_string(),
            "'number-of-questions' must be an integer (got type str)."
        );
    }

    #[test]
    fn test_boolean_type_message() {
        let mut value = full_settings();
        value
            .as_object_mut()
            .unwrap()
            .insert("include-typein-lattoeng".to_string(), json!(1));
        let error = Settings::from_json(&value).unwrap_err();
        assert_eq!(
            error.to_string(),
            "'include-typein-lattoeng' must be a boolean (got type int)."
        );
    }

    #[test]
    fn test_bool_is_not_an_integer() {
        let mut value = full_settings();
        value
            .as_object_mut()
            .unwrap()
            .insert("number-of-questions".to_string(), json!(true));
        let error = Settings::from_json(&value).unwrap_err();
        assert_eq!(
            error.to_string(),
            "'number-of-questions' must be an integer (got type bool)."
        );
    }

    #[test]
    fn test_minimums() {
        let mut value = full_settings();
        value
            .as_object_mut()
            .unwrap()
            .insert("number-multiplechoice-options".to_string(), json!(1));
        let error = Settings::from_json(&value).unwrap_err();
        assert_eq!(
            error.to_string(),
            "'number-multiplechoice-options' must be at least 2 (got 1)."
        );
    }
}
