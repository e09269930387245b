//! Runtime resolution of polymorphic reference fields. A union's candidate
//! set is closed: resolution reads the `resourceType` discriminant and
//! matches it exactly against the declared candidates, never guessing and
//! never widening the set. An unresolved reference is a validation failure
//! on that field, not a pass-through.

use serde_json::Value;

use crate::registry::TypeGraph;
use crate::types::{FhirVersion, PolymorphicUnion, SchemaFamily, TypeHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(TypeHandle),
    Unresolved(UnresolvedReason),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn handle(&self) -> Option<&TypeHandle> {
        match self {
            Resolution::Resolved(handle) => Some(handle),
            Resolution::Unresolved(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// The value carries no `resourceType` field.
    MissingDiscriminant,
    /// The discriminant is present but not a string.
    NonStringDiscriminant,
    /// The discriminant names a type outside the closed candidate set.
    UnknownTarget(String),
}

impl std::fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnresolvedReason::MissingDiscriminant => write!(f, "missing resourceType"),
            UnresolvedReason::NonStringDiscriminant => write!(f, "resourceType is not a string"),
            UnresolvedReason::UnknownTarget(name) => {
                write!(f, "resourceType {name:?} is not a legal target")
            }
        }
    }
}

fn discriminant(value: &Value) -> Result<&str, UnresolvedReason> {
    match value.get(PolymorphicUnion::DISCRIMINANT) {
        None => Err(UnresolvedReason::MissingDiscriminant),
        Some(Value::String(name)) => Ok(name),
        Some(_) => Err(UnresolvedReason::NonStringDiscriminant),
    }
}

/// Select the one candidate whose declared name equals the value's
/// discriminant. A single-candidate union still performs the check so that a
/// wrong `resourceType` is rejected rather than defaulted.
pub fn resolve_reference(union: &PolymorphicUnion, value: &Value) -> Resolution {
    let name = match discriminant(value) {
        Ok(name) => name,
        Err(reason) => return Resolution::Unresolved(reason),
    };
    for candidate in union.candidates() {
        if candidate.name() == name {
            return Resolution::Resolved(candidate.clone());
        }
    }
    Resolution::Unresolved(UnresolvedReason::UnknownTarget(name.to_string()))
}

/// Resolve a `contained` entry against the version's full resource list.
/// The closed world here is every type declared as a resource in that
/// version partition.
pub fn resolve_contained(graph: &TypeGraph, version: FhirVersion, value: &Value) -> Resolution {
    let name = match discriminant(value) {
        Ok(name) => name,
        Err(reason) => return Resolution::Unresolved(reason),
    };
    if graph.is_resource(name, version) {
        Resolution::Resolved(graph.resolve(name, version, SchemaFamily::Output))
    } else {
        Resolution::Unresolved(UnresolvedReason::UnknownTarget(name.to_string()))
    }
}
