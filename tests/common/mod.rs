#![allow(dead_code)]

use fhir_typegraph::*;
use serde_json::{Value, json};

/// Route crate logs through the test harness; RUST_LOG selects verbosity.
/// `try_init` keeps repeated calls across tests harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn standard_graph() -> TypeGraph {
    init_tracing();
    let graph = catalog::standard_graph().expect("standard declarations are well-formed");
    graph.verify_all().expect("standard graph verifies");
    graph
}

/// A well-formed Group instance for the 4.0.0 Output shape.
pub fn group_instance() -> Value {
    json!({
        "resourceType": "Group",
        "id": "herd-1",
        "type": "animal",
        "actual": true,
        "name": "Dairy herd",
        "quantity": 42,
        "managingEntity": {
            "resourceType": "Organization",
            "name": "Hilltop Farm"
        }
    })
}

pub fn output_descriptor(
    graph: &TypeGraph,
    name: &str,
    version: FhirVersion,
) -> std::sync::Arc<CompositeDescriptor> {
    graph
        .descriptor(name, version, SchemaFamily::Output)
        .expect("descriptor exists")
}
