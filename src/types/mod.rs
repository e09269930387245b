pub mod descriptor;
pub mod field;
pub mod handle;
pub mod version;

pub use descriptor::CompositeDescriptor;
pub use field::{Cardinality, FieldSpec, FieldType, PolymorphicUnion};
pub use handle::{TypeHandle, TypeKey};
pub use version::{FhirVersion, SchemaFamily};
