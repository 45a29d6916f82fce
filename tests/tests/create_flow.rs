//! End-to-end flow: schema-service document in, mutation document out.

use pretty_assertions::assert_eq;
use trellis_tests::prelude::*;

#[test]
fn test_service_document_to_create_mutation() {
    let schema = NodeSchema::from_json(DEVICE_SCHEMA_JSON).unwrap();
    let values = fields! {
        "name" => "atl-edge-01",
        "type" => "MX204",
        "description" => "Atlanta edge router",
    };

    let doc = build_create_mutation(&schema, &values).unwrap();

    assert_eq!(
        doc,
        "mutation DeviceCreate {\n  \
         device_create (data: {name:\"atl-edge-01\",type:\"MX204\",description:\"Atlanta edge router\"}) {\n      \
         ok\n  \
         }\n}\n"
    );
}

#[test]
fn test_form_state_json_to_create_mutation() {
    // UI form state arrives as JSON; field order must survive end to end.
    let schema = device_schema();
    let form: serde_json::Value = serde_json::from_str(
        r#"{"type": "MX204", "name": "atl-edge-01", "extra_field": null}"#,
    )
    .unwrap();
    let values = FieldValues::from(form);

    let doc = build_create_mutation(&schema, &values).unwrap();

    // Unknown keys are forwarded untouched, order preserved.
    assert!(doc.contains("data: {type:\"MX204\",name:\"atl-edge-01\",extra_field:null}"));
}

#[test]
fn test_empty_form_still_well_formed() {
    let doc = build_create_mutation(&device_schema(), &fields!()).unwrap();
    assert_eq!(
        doc,
        "mutation DeviceCreate {\n  device_create (data: {}) {\n      ok\n  }\n}\n"
    );
}

#[test]
fn test_update_and_delete_share_naming_scheme() {
    let schema = device_schema();

    let update = build_update_mutation(&schema, "dev-17", &fields! { "type" => "MX304" }).unwrap();
    assert!(update.starts_with("mutation DeviceUpdate {"));
    assert!(update.contains("device_update (data: {id:\"dev-17\",type:\"MX304\"})"));

    let delete = build_delete_mutation(&schema, "dev-17").unwrap();
    assert!(delete.starts_with("mutation DeviceDelete {"));
    assert!(delete.contains("device_delete (data: {id:\"dev-17\"})"));
}

#[test]
fn test_invalid_schema_is_rejected_before_rendering() {
    let schema = NodeSchema::new("not a name");
    let err = build_create_mutation(&schema, &fields!()).unwrap_err();
    assert!(matches!(
        err,
        trellis_mutation::MutationError::InvalidSchema(SchemaError::InvalidName { .. })
    ));
}
