use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FhirVersion, SchemaFamily};

/// Stable identity of a type descriptor: name plus the partition it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeKey {
    pub name: String,
    pub version: FhirVersion,
    pub family: SchemaFamily,
}

impl TypeKey {
    pub fn new(name: impl Into<String>, version: FhirVersion, family: SchemaFamily) -> Self {
        Self {
            name: name.into(),
            version,
            family,
        }
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}/{}", self.name, self.version, self.family)
    }
}

/// Opaque, lazily-resolved reference to a descriptor. Handles are cheap to
/// clone and compare by identity; dereferencing happens through
/// [`crate::registry::TypeGraph::materialize`], never eagerly. Descriptors
/// hold handles to their field types, which is what lets mutually recursive
/// shapes terminate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeHandle(TypeKey);

impl TypeHandle {
    pub fn new(name: impl Into<String>, version: FhirVersion, family: SchemaFamily) -> Self {
        Self(TypeKey::new(name, version, family))
    }

    pub fn key(&self) -> &TypeKey {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn version(&self) -> FhirVersion {
        self.0.version
    }

    pub fn family(&self) -> SchemaFamily {
        self.0.family
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TypeKey> for TypeHandle {
    fn from(key: TypeKey) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_with_equal_identity_are_equal() {
        let a = TypeHandle::new("Group", FhirVersion::V4_0_0, SchemaFamily::Output);
        let b = TypeHandle::new("Group", FhirVersion::V4_0_0, SchemaFamily::Output);
        assert_eq!(a, b);
    }

    #[test]
    fn handles_differ_across_partitions() {
        let output = TypeHandle::new("Group", FhirVersion::V4_0_0, SchemaFamily::Output);
        let input = TypeHandle::new("Group", FhirVersion::V4_0_0, SchemaFamily::Input);
        let stu3 = TypeHandle::new("Group", FhirVersion::V3_0_1, SchemaFamily::Output);
        assert_ne!(output, input);
        assert_ne!(output, stu3);
    }

    #[test]
    fn display_includes_partition() {
        let handle = TypeHandle::new("Flag", FhirVersion::V1_0_2, SchemaFamily::Input);
        assert_eq!(handle.to_string(), "Flag@1.0.2/input");
    }
}
