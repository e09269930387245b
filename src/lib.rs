//! # FHIR TypeGraph
//!
//! A registry of FHIR type descriptors partitioned by FHIR version and
//! schema family, with cycle-safe lazy construction and closed-world
//! polymorphic reference resolution.
//!
//! ## Features
//!
//! - **Lazy, cycle-safe construction**: descriptors reference each other
//!   (including themselves) through handles; building is at-most-once per key
//! - **Version partitions**: 1.0.2, 3.0.1 and 4.0.0 declarations never
//!   resolve into each other
//! - **Output/Input pairing**: each resource yields a read-shape and a
//!   write-shape descriptor sharing names and cardinalities, with references
//!   relaxed to identifier strings on the write side
//! - **Polymorphic references**: closed candidate sets resolved by the
//!   `resourceType` discriminant, failing closed on any mismatch
//! - **Shadow fields**: every primitive field `f` may carry a sibling `_f`
//!   Element holding extension metadata, independently of `f` itself
//!
//! ## Quick Start
//!
//! ```rust
//! use fhir_typegraph::*;
//!
//! # fn example() -> Result<()> {
//! let graph = catalog::standard_graph()?;
//! graph.verify_all()?;
//!
//! let group = graph.descriptor("Group", FhirVersion::V4_0_0, SchemaFamily::Output)?;
//! let managing = group.field("managingEntity").unwrap();
//! assert!(managing.is_polymorphic());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod scalar;
pub mod types;
pub mod validation;

pub use error::{Result, TypeGraphError};
pub use registry::TypeGraph;
pub use resolver::{Resolution, UnresolvedReason, resolve_contained, resolve_reference};
pub use scalar::{ScalarKind, ScalarTable, ScalarValue};
pub use types::{
    Cardinality, CompositeDescriptor, FhirVersion, FieldSpec, FieldType, PolymorphicUnion,
    SchemaFamily, TypeHandle, TypeKey,
};
pub use validation::{ValidationIssue, ValidationResult, ValidationSeverity, validate_instance};
