mod common;

use common::*;
use fhir_typegraph::*;
use serde_json::json;

#[test]
fn well_formed_instance_passes() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let result = validate_instance(&graph, &group, &group_instance()).unwrap();
    assert!(result.is_valid(), "unexpected issues: {:?}", result.issues);
}

#[test]
fn shadow_and_primary_are_independent() {
    let graph = standard_graph();
    let flag = output_descriptor(&graph, "Flag", FhirVersion::V1_0_2);
    let base = json!({
        "resourceType": "Flag",
        "status": "active",
        "code": {"text": "Fall risk"},
        "subject": {"resourceType": "Patient", "id": "p1"}
    });

    // Primary only.
    let result = validate_instance(&graph, &flag, &base).unwrap();
    assert!(result.is_valid());

    // Primary and shadow.
    let mut both = base.clone();
    both["_status"] = json!({"id": "stat-1", "extension": [{"url": "http://example.org/x"}]});
    let result = validate_instance(&graph, &flag, &both).unwrap();
    assert!(result.is_valid());

    // Shadow without primary: the shadow stays valid, the missing required
    // primary is its own, unrelated failure.
    let mut shadow_only = base.clone();
    shadow_only["_status"] = json!({"id": "stat-1"});
    shadow_only.as_object_mut().unwrap().remove("status");
    let result = validate_instance(&graph, &flag, &shadow_only).unwrap();
    assert_eq!(result.error_count(), 1);
    assert!(result.errors().all(|i| i.path == "Flag.status"));
}

#[test]
fn missing_required_fields_are_reported_per_field() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let value = json!({"resourceType": "Group"});
    let result = validate_instance(&graph, &group, &value).unwrap();
    // type and actual are both required; both are reported (partial failure,
    // not fail-fast).
    let paths: Vec<&str> = result.errors().map(|i| i.path.as_str()).collect();
    assert!(paths.contains(&"Group.type"));
    assert!(paths.contains(&"Group.actual"));
}

#[test]
fn wrong_resource_type_is_rejected() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let mut value = group_instance();
    value["resourceType"] = json!("Patient");
    let result = validate_instance(&graph, &group, &value).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors().any(|i| i.path == "Group.resourceType"));
}

#[test]
fn unresolved_reference_is_a_field_error() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let mut value = group_instance();
    value["managingEntity"] = json!({"resourceType": "Medication", "id": "m1"});
    let result = validate_instance(&graph, &group, &value).unwrap();
    assert!(result.errors().any(|i| i.path == "Group.managingEntity"));
    // Sibling fields are still validated; only the one field fails.
    assert_eq!(result.error_count(), 1);
}

#[test]
fn scalar_lexical_forms_are_checked() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let mut value = group_instance();
    value["id"] = json!("not a legal id!");
    value["quantity"] = json!(-3);
    let result = validate_instance(&graph, &group, &value).unwrap();
    let paths: Vec<&str> = result.errors().map(|i| i.path.as_str()).collect();
    assert!(paths.contains(&"Group.id"));
    assert!(paths.contains(&"Group.quantity"));
}

#[test]
fn cardinality_mismatches_are_reported() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let mut value = group_instance();
    // identifier is a list; name is single-valued.
    value["identifier"] = json!({"value": "g-1"});
    value["name"] = json!(["a", "b"]);
    let result = validate_instance(&graph, &group, &value).unwrap();
    let paths: Vec<&str> = result.errors().map(|i| i.path.as_str()).collect();
    assert!(paths.contains(&"Group.identifier"));
    assert!(paths.contains(&"Group.name"));
}

#[test]
fn contained_entries_validate_against_output_family() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let mut value = group_instance();
    value["contained"] = json!([
        {"resourceType": "Organization", "id": "org-1", "name": "Inline org"},
        {"resourceType": "NotAResource"}
    ]);
    let result = validate_instance(&graph, &group, &value).unwrap();
    assert_eq!(result.error_count(), 1);
    assert!(result.errors().any(|i| i.path == "Group.contained[1]"));
}

#[test]
fn input_family_accepts_identifier_strings() {
    let graph = standard_graph();
    let input = graph
        .descriptor("EpisodeOfCare", FhirVersion::V1_0_2, SchemaFamily::Input)
        .unwrap();
    let value = json!({
        "resourceType": "EpisodeOfCare",
        "status": "active",
        "patient": "Patient/p-7",
        "contained": ["Condition/c-1"],
        "condition": ["Condition/c-1"]
    });
    let result = validate_instance(&graph, &input, &value).unwrap();
    assert!(result.is_valid(), "unexpected issues: {:?}", result.issues);

    // The Output family rejects the same opaque strings.
    let output = output_descriptor(&graph, "EpisodeOfCare", FhirVersion::V1_0_2);
    let result = validate_instance(&graph, &output, &value).unwrap();
    assert!(!result.is_valid());
}

#[test]
fn repeating_shadow_validates_per_entry() {
    let graph = standard_graph();
    let patient = output_descriptor(&graph, "Patient", FhirVersion::V4_0_0);
    let mut value = json!({
        "resourceType": "Patient",
        "name": [{
            "given": ["Ada", "Marie"],
            "_given": [{"id": "g0"}, {"id": "g1", "extension": [{"url": "http://example.org/x"}]}]
        }]
    });
    let result = validate_instance(&graph, &patient, &value).unwrap();
    assert!(result.is_valid(), "unexpected issues: {:?}", result.issues);

    // The shadow repeats with its primary, so a lone object is a
    // cardinality error.
    value["name"][0]["_given"] = json!({"id": "g0"});
    let result = validate_instance(&graph, &patient, &value).unwrap();
    assert!(result.errors().any(|i| i.path == "Patient.name[0]._given"));
}

#[test]
fn unknown_fields_warn_without_invalidating() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let mut value = group_instance();
    value["frobnicate"] = json!(true);
    let result = validate_instance(&graph, &group, &value).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warning_count(), 1);
}

#[test]
fn nested_composites_validate_recursively() {
    let graph = standard_graph();
    let group = output_descriptor(&graph, "Group", FhirVersion::V4_0_0);
    let mut value = group_instance();
    value["characteristic"] = json!([{
        "code": {"text": "breed"},
        "exclude": "not-a-boolean"
    }]);
    let result = validate_instance(&graph, &group, &value).unwrap();
    assert!(
        result
            .errors()
            .any(|i| i.path == "Group.characteristic[0].exclude")
    );
}
