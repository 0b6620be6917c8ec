//! Accumulated form data, keyed by section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field record of one section.
pub type Fields = serde_json::Map<String, Value>;

/// Named groups of form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Company,
    Admin,
    Account,
    Template,
    Agent,
    Settings,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Admin => "admin",
            Self::Account => "account",
            Self::Template => "template",
            Self::Agent => "agent",
            Self::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-section form data owned by one wizard.
///
/// Fields are loosely typed JSON so that any key can be merged in; the typed
/// accessors fall back to an empty value when a field is missing or holds an
/// unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    sections: BTreeMap<Section, Fields>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`merge`](Self::merge) for seeding defaults.
    pub fn with(mut self, section: Section, fields: Value) -> Self {
        if let Value::Object(fields) = fields {
            self.merge(section, fields);
        }
        self
    }

    /// Shallow merge: keys in `fields` replace existing values, every other
    /// key of `section` and every other section is left untouched.
    pub fn merge(&mut self, section: Section, fields: Fields) {
        let target = self.sections.entry(section).or_default();
        for (key, value) in fields {
            target.insert(key, value);
        }
    }

    pub fn section(&self, section: Section) -> Option<&Fields> {
        self.sections.get(&section)
    }

    pub fn get(&self, section: Section, key: &str) -> Option<&Value> {
        self.sections.get(&section)?.get(key)
    }

    /// String field, or `""`.
    pub fn text(&self, section: Section, key: &str) -> &str {
        self.get(section, key).and_then(Value::as_str).unwrap_or("")
    }

    /// Whether a string field holds something other than whitespace.
    pub fn has_text(&self, section: Section, key: &str) -> bool {
        !self.text(section, key).trim().is_empty()
    }

    /// Boolean field, or `false`.
    pub fn flag(&self, section: Section, key: &str) -> bool {
        self.get(section, key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn number(&self, section: Section, key: &str) -> Option<f64> {
        self.get(section, key).and_then(Value::as_f64)
    }

    /// Array-of-strings field; non-string entries are skipped.
    pub fn strings(&self, section: Section, key: &str) -> Vec<String> {
        self.get(section, key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Non-empty string field, or `None`.
    pub fn optional_text(&self, section: Section, key: &str) -> Option<String> {
        let text = self.text(section, key);
        (!text.is_empty()).then(|| text.to_string())
    }
}
