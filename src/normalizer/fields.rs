// Typed access to the free-form custom field map
use serde_json::{Map, Value};

/// Read-only view over a record's custom fields.
///
/// Key names and value shapes vary from record to record: a field may be a
/// string, a number, a tagged object (`name` / `label` / `value`) or a list
/// of either. Everything leaving this type is plain Rust data.
pub struct LooseRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> LooseRecord<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    /// Value of `key`, treating `null` and `false` as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?
            .get(key)
            .filter(|v| !matches!(v, Value::Null | Value::Bool(false)))
    }

    /// Non-empty text of `key`. Numbers are rendered as text.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }

    /// First key whose lower-cased name contains any of `needles`.
    pub fn find_key(&self, needles: &[&str]) -> Option<&'a str> {
        self.fields?
            .keys()
            .find(|k| {
                let lower = k.to_lowercase();
                needles.iter().any(|n| lower.contains(n))
            })
            .map(String::as_str)
    }

    /// Searched key first, then each alternate name in order.
    pub fn candidates(&self, needles: &[&str], alternates: &[&'a str]) -> Vec<&'a Value> {
        self.find_key(needles)
            .into_iter()
            .chain(alternates.iter().copied())
            .filter_map(|key| self.get(key))
            .collect()
    }
}

/// Non-empty string or number, as text.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `name`, `label` or `value` of a tagged object, whichever is set first.
pub fn tagged_text(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    ["name", "label", "value"]
        .iter()
        .find_map(|key| object.get(*key).and_then(scalar_text))
}

/// Coerces a list, a delimited string or a single tagged object into an
/// ordered list of labels.
pub fn label_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Object(_) => tagged_text(entry),
                _ => None,
            })
            .collect(),
        Value::String(s) => s
            .split([',', ';', '\n'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Object(_) => tagged_text(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// A single label from a string or tagged object.
pub fn single_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(_) => tagged_text(value),
        _ => None,
    }
}
