//! Mutation document builders.

use crate::literal::render_literal;
use crate::MutationResult;
use trellis_core::{FieldValues, Value};
use trellis_schema::NodeSchema;

/// Build a create-mutation document for one node type.
///
/// The operation is named `{Name}Create` and selects `{name}_create`, where
/// `{name}` is the schema name and `{Name}` its capitalized form. An empty
/// field set yields `(data: {})`; keys absent from the schema are forwarded
/// untouched.
pub fn build_create_mutation(schema: &NodeSchema, values: &FieldValues) -> MutationResult<String> {
    render_document(schema, "Create", "_create", &values.to_value())
}

/// Build an update-mutation document. The object id travels inside `data`
/// alongside the changed fields.
pub fn build_update_mutation(
    schema: &NodeSchema,
    id: &str,
    values: &FieldValues,
) -> MutationResult<String> {
    let mut pairs = vec![("id".to_string(), Value::String(id.to_string()))];
    pairs.extend(values.iter().cloned());
    render_document(schema, "Update", "_update", &Value::Object(pairs))
}

/// Build a delete-mutation document carrying only the object id.
pub fn build_delete_mutation(schema: &NodeSchema, id: &str) -> MutationResult<String> {
    let data = Value::Object(vec![("id".to_string(), Value::String(id.to_string()))]);
    render_document(schema, "Delete", "_delete", &data)
}

fn render_document(
    schema: &NodeSchema,
    op_suffix: &str,
    field_suffix: &str,
    data: &Value,
) -> MutationResult<String> {
    schema.validate()?;
    let data = render_literal(data)?;
    let operation = format!("{}{}", capitalize(&schema.name), op_suffix);

    tracing::debug!(operation = %operation, "built mutation document");

    Ok(format!(
        "mutation {operation} {{\n  {name}{field_suffix} (data: {data}) {{\n      ok\n  }}\n}}\n",
        name = schema.name,
    ))
}

/// Uppercase the first character of an identifier fragment.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
