use std::fmt;

use serde::{Deserialize, Serialize};

use super::TypeHandle;
use crate::scalar::ScalarKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    One,
    Many,
}

/// Closed candidate set for a polymorphic reference field. The set is fixed
/// at build time by the declaration; resolution against a data instance picks
/// exactly one candidate by discriminant or fails closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolymorphicUnion {
    candidates: Vec<TypeHandle>,
}

impl PolymorphicUnion {
    pub const DISCRIMINANT: &'static str = "resourceType";

    pub fn new(candidates: Vec<TypeHandle>) -> Self {
        debug_assert!(!candidates.is_empty());
        Self { candidates }
    }

    /// Candidates in declaration order.
    pub fn candidates(&self) -> &[TypeHandle] {
        &self.candidates
    }
}

/// The value type of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
    Scalar(ScalarKind),
    /// Complex element or nested resource, resolved lazily via the registry.
    Composite(TypeHandle),
    /// Output-family typed reference: a closed union of resource types.
    Reference(PolymorphicUnion),
    /// Input-family reference, relaxed to an opaque identifier string.
    ReferenceId,
    /// Output-family `contained` entries: any resource of the version,
    /// resolved polymorphically by discriminant.
    ContainedResource,
    /// Input-family `contained` entries, opaque strings.
    ContainedId,
    /// Element metadata carrier backing a `_name` shadow field. Always
    /// version-local and shared across families.
    Element(TypeHandle),
    /// The `resourceType` enumeration whose sole legal value is the owning
    /// descriptor's own name.
    SelfEnum,
}

impl FieldType {
    pub fn is_polymorphic(&self) -> bool {
        matches!(self, FieldType::Reference(_))
    }
}

/// One field of a composite descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub cardinality: Cardinality,
    pub required: bool,
    /// True when a sibling `_name` Element field carries this primitive's
    /// extension metadata. The two fields are independent of each other.
    pub has_shadow: bool,
    pub description: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            cardinality: Cardinality::One,
            required: false,
            has_shadow: false,
            description: None,
        }
    }

    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_shadow(mut self) -> Self {
        self.has_shadow = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_polymorphic(&self) -> bool {
        self.field_type.is_polymorphic()
    }

    /// Candidate handles when this field is a typed reference.
    pub fn candidates(&self) -> Option<&[TypeHandle]> {
        match &self.field_type {
            FieldType::Reference(union) => Some(union.candidates()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = match self.cardinality {
            Cardinality::One => "",
            Cardinality::Many => "[]",
        };
        write!(f, "{}{card}", self.name)
    }
}
