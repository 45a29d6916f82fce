//! Shared fixtures for Trellis integration tests.

use trellis_schema::{AttrDef, AttrKind, NodeSchema};

pub mod prelude {
    pub use crate::{device_schema, DEVICE_SCHEMA_JSON};
    pub use trellis_core::{fields, FieldValues, Value};
    pub use trellis_endpoint::{qsp, with_query_params, ApiEndpoints};
    pub use trellis_mutation::{
        build_create_mutation, build_delete_mutation, build_update_mutation,
    };
    pub use trellis_schema::{AttrDef, AttrKind, NodeSchema, SchemaError};
}

/// A schema document as the schema service would serve it, including keys
/// this client ignores.
pub const DEVICE_SCHEMA_JSON: &str = r#"{
    "name": "device",
    "kind": "Device",
    "description": null,
    "default_filter": "name__value",
    "display_labels": ["name__value"],
    "attributes": [
        {
            "name": "name",
            "kind": "Text",
            "label": "Name",
            "enum": null,
            "optional": false,
            "unique": true,
            "branch": true
        },
        {
            "name": "type",
            "kind": "Text",
            "label": "Type",
            "optional": false,
            "unique": false
        },
        {
            "name": "description",
            "kind": "Text",
            "label": "Description",
            "optional": true,
            "unique": false
        }
    ],
    "relationships": [
        {
            "name": "interfaces",
            "peer": "Interface",
            "cardinality": "many"
        }
    ]
}"#;

/// The device node type built programmatically.
pub fn device_schema() -> NodeSchema {
    NodeSchema::new("device")
        .with_kind("Device")
        .with_attribute(AttrDef::new("name", AttrKind::Text).unique())
        .with_attribute(AttrDef::new("type", AttrKind::Text))
        .with_attribute(AttrDef::new("description", AttrKind::Text).optional())
}
