//! Registration contract for per-resource field declarations, plus the
//! built-in declarations for the supported FHIR versions. Declarations are
//! family-neutral: the builder derives the Output and Input descriptor pair
//! from one declaration.

pub mod base;
pub mod v1_0_2;
pub mod v3_0_1;
pub mod v4_0_0;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::TypeGraph;
use crate::scalar::ScalarKind;
use crate::types::{Cardinality, FhirVersion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    /// Top-level resource: carries a `resourceType` discriminant and may be
    /// the target of references and `contained` entries.
    Resource,
    /// Complex datatype or backbone element.
    Complex,
}

/// Declared value type of one field, before family derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TargetDecl {
    Scalar(ScalarKind),
    /// Another declared type in the same version partition.
    Named(String),
    /// Typed reference with a closed candidate list. Output keeps the union;
    /// Input relaxes it to an identifier string.
    Reference(Vec<String>),
    /// Inline `contained` resources. Output resolves entries polymorphically;
    /// Input relaxes them to strings.
    Contained,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub target: TargetDecl,
    pub cardinality: Cardinality,
    pub required: bool,
    /// Emit a sibling `_name` Element field carrying extension metadata.
    /// Only meaningful for scalar targets.
    pub shadow: bool,
    pub description: Option<String>,
}

impl FieldDecl {
    fn new(name: impl Into<String>, target: TargetDecl) -> Self {
        Self {
            name: name.into(),
            target,
            cardinality: Cardinality::One,
            required: false,
            shadow: false,
            description: None,
        }
    }

    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::new(name, TargetDecl::Scalar(kind))
    }

    pub fn named(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, TargetDecl::Named(target.into()))
    }

    pub fn reference(name: impl Into<String>, candidates: &[&str]) -> Self {
        Self::new(
            name,
            TargetDecl::Reference(candidates.iter().map(|c| c.to_string()).collect()),
        )
    }

    pub fn contained() -> Self {
        Self::new("contained", TargetDecl::Contained).many()
    }

    pub fn many(mut self) -> Self {
        self.cardinality = Cardinality::Many;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_shadow(mut self) -> Self {
        self.shadow = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One declared type: the data a resource (or complex element) registers with
/// the graph. Field order is preserved into the built descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDecl {
    pub name: String,
    pub version: FhirVersion,
    pub kind: DeclKind,
    pub description: Option<String>,
    pub fields: Vec<FieldDecl>,
}

impl ResourceDecl {
    pub fn resource(name: impl Into<String>, version: FhirVersion) -> Self {
        Self {
            name: name.into(),
            version,
            kind: DeclKind::Resource,
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn complex(name: impl Into<String>, version: FhirVersion) -> Self {
        Self {
            name: name.into(),
            version,
            kind: DeclKind::Complex,
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}

/// Build a graph holding every built-in declaration across all supported
/// versions. The result passes `verify_all`.
pub fn standard_graph() -> Result<TypeGraph> {
    let graph = TypeGraph::new();
    for decl in base::declarations(FhirVersion::V1_0_2) {
        graph.declare(decl)?;
    }
    for decl in base::declarations(FhirVersion::V3_0_1) {
        graph.declare(decl)?;
    }
    for decl in base::declarations(FhirVersion::V4_0_0) {
        graph.declare(decl)?;
    }
    for decl in v1_0_2::declarations() {
        graph.declare(decl)?;
    }
    for decl in v3_0_1::declarations() {
        graph.declare(decl)?;
    }
    for decl in v4_0_0::declarations() {
        graph.declare(decl)?;
    }
    Ok(graph)
}
