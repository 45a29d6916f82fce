//! Schema description types.
//!
//! Mirrors the JSON documents the schema service serves: one [`NodeSchema`]
//! per node type, each carrying an ordered list of [`AttrDef`]s. Extra keys
//! in the service payload (display labels, filters, relationship details)
//! are ignored on deserialization.

use crate::{SchemaError, SchemaResult};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Kind tag for a scalar attribute.
///
/// The service emits these as bare strings ("Text", "Number", ...). Kinds
/// this client does not know about fold into [`AttrKind::Custom`] rather
/// than failing the whole schema document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum AttrKind {
    /// Free-form text.
    Text,
    /// Integer or decimal number.
    Number,
    /// True/false flag.
    Boolean,
    /// One value out of a fixed allowed set.
    Enum,
    /// ISO-8601 timestamp.
    DateTime,
    /// Server-defined kind unknown to this client.
    Custom(String),
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrKind::Text => write!(f, "Text"),
            AttrKind::Number => write!(f, "Number"),
            AttrKind::Boolean => write!(f, "Boolean"),
            AttrKind::Enum => write!(f, "Enum"),
            AttrKind::DateTime => write!(f, "DateTime"),
            AttrKind::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for AttrKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Text" => AttrKind::Text,
            "Number" => AttrKind::Number,
            "Boolean" => AttrKind::Boolean,
            "Enum" => AttrKind::Enum,
            "DateTime" => AttrKind::DateTime,
            other => AttrKind::Custom(other.to_string()),
        })
    }
}

impl From<String> for AttrKind {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(AttrKind::Custom(s))
    }
}

/// Attribute definition within a node schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttrDef {
    /// Attribute name, spliced unescaped into generated documents.
    pub name: String,
    /// Kind tag (Text, Number, Boolean, ...).
    pub kind: AttrKind,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the attribute may be omitted on create.
    #[serde(default)]
    pub optional: bool,
    /// Whether the attribute must be unique across instances.
    #[serde(default)]
    pub unique: bool,
    /// Default value if not provided.
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
    /// Allowed values when kind is Enum.
    #[serde(default, rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,
}

impl AttrDef {
    pub fn new(name: impl Into<String>, kind: AttrKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            description: None,
            optional: false,
            unique: false,
            default_value: None,
            enum_values: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_enum_values(mut self, values: Vec<serde_json::Value>) -> Self {
        self.enum_values = Some(values);
        self
    }
}

/// Schema description for one node type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeSchema {
    /// Lowercase type name, used in generated field names (`{name}_create`).
    pub name: String,
    /// PascalCase kind label from the service, when present.
    #[serde(default)]
    pub kind: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Scalar attribute definitions, in service order.
    #[serde(default)]
    pub attributes: Vec<AttrDef>,
}

impl NodeSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            description: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_attribute(mut self, attr: AttrDef) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Look up an attribute definition by name.
    pub fn attribute(&self, name: &str) -> Option<&AttrDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Parse a schema document served by the schema service.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Validate the schema at the boundary.
    ///
    /// Names end up unescaped inside generated request text, so both the
    /// schema name and every attribute name must be identifier fragments.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyName);
        }
        if !is_identifier(&self.name) {
            return Err(SchemaError::invalid_name(&self.name));
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.attributes.len());
        for attr in &self.attributes {
            if !is_identifier(&attr.name) {
                return Err(SchemaError::invalid_attribute_name(&self.name, &attr.name));
            }
            if seen.contains(&attr.name.as_str()) {
                return Err(SchemaError::duplicate_attribute(&self.name, &attr.name));
            }
            seen.push(&attr.name);
        }
        Ok(())
    }
}

/// Check that a string is a valid identifier fragment.
fn is_identifier(s: &str) -> bool {
    let re = regex_lite::Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static pattern");
    re.is_match(s)
}
