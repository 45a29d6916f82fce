//! Ordered field-value sets for mutation payloads.

use crate::Value;

/// An ordered set of attribute-name/value pairs destined for a mutation
/// `data` payload.
///
/// Insertion order is preserved so the rendered document follows the order
/// the caller supplied. A partial set is valid (updates may touch a subset
/// of attributes), and keys are not checked against any schema here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    pairs: Vec<(String, Value)>,
}

impl FieldValues {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. Replaces in place if the key already exists,
    /// keeping its original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.pairs.push((name, value)),
        }
        self
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Number of fields in the set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no fields are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.pairs.iter()
    }

    /// View the whole set as a single object value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.pairs.clone())
    }
}

impl From<Vec<(String, Value)>> for FieldValues {
    fn from(pairs: Vec<(String, Value)>) -> Self {
        let mut fields = FieldValues::new();
        for (name, value) in pairs {
            fields.set(name, value);
        }
        fields
    }
}

/// Convert a JSON object into a field set. Non-object JSON values produce
/// an empty set.
impl From<serde_json::Value> for FieldValues {
    fn from(json: serde_json::Value) -> Self {
        match Value::from(json) {
            Value::Object(pairs) => FieldValues { pairs },
            _ => FieldValues::new(),
        }
    }
}

/// Helper macro to create field sets.
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldValues::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut set = $crate::FieldValues::new();
            $(
                set.set($key, $crate::Value::from($value));
            )+
            set
        }
    };
}
