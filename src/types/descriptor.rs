use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FhirVersion, FieldSpec, SchemaFamily};

/// A built type descriptor: one resource's or complex element's field table.
/// Field order is the declared order; names are unique. Descriptors are
/// immutable once the registry publishes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeDescriptor {
    pub type_name: String,
    pub version: FhirVersion,
    pub family: SchemaFamily,
    pub description: Option<String>,
    fields: Vec<FieldSpec>,
}

impl CompositeDescriptor {
    pub(crate) fn new(
        type_name: impl Into<String>,
        version: FhirVersion,
        family: SchemaFamily,
        description: Option<String>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            version,
            family,
            description,
            fields,
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for CompositeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}/{} ({} fields)",
            self.type_name,
            self.version,
            self.family,
            self.fields.len()
        )
    }
}
