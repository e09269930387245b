//! Base complex types every version partition carries. Each version gets its
//! own copies so partitions stay fully self-contained.

use crate::scalar::ScalarKind;
use crate::types::FhirVersion;

use super::{FieldDecl, ResourceDecl};

/// The standard DomainResource prelude shared by every resource declaration:
/// identity, metadata, narrative, contained resources and extensions.
pub fn domain_resource(name: &str, version: FhirVersion) -> ResourceDecl {
    ResourceDecl::resource(name, version)
        .field(
            FieldDecl::scalar("id", ScalarKind::Id)
                .with_shadow()
                .describe("The logical id of the resource, as used in the URL for the resource."),
        )
        .field(FieldDecl::named("meta", "Meta"))
        .field(FieldDecl::scalar("implicitRules", ScalarKind::Uri).with_shadow())
        .field(FieldDecl::scalar("language", ScalarKind::Code).with_shadow())
        .field(FieldDecl::named("text", "Narrative"))
        .field(FieldDecl::contained())
        .field(FieldDecl::named("extension", "Extension").many())
        .field(FieldDecl::named("modifierExtension", "Extension").many())
}

pub fn declarations(version: FhirVersion) -> Vec<ResourceDecl> {
    vec![
        ResourceDecl::complex("Element", version)
            .describe("Base definition for all elements in a resource.")
            .field(FieldDecl::scalar("id", ScalarKind::String))
            .field(FieldDecl::named("extension", "Extension").many()),
        ResourceDecl::complex("Extension", version)
            .describe("Optional extension element, may be used to represent additional information.")
            .field(FieldDecl::scalar("id", ScalarKind::String))
            .field(FieldDecl::scalar("url", ScalarKind::Uri).required())
            .field(FieldDecl::named("extension", "Extension").many())
            .field(FieldDecl::scalar("valueBoolean", ScalarKind::Boolean).with_shadow())
            .field(FieldDecl::scalar("valueInteger", ScalarKind::Integer).with_shadow())
            .field(FieldDecl::scalar("valueDecimal", ScalarKind::Decimal).with_shadow())
            .field(FieldDecl::scalar("valueString", ScalarKind::String).with_shadow())
            .field(FieldDecl::scalar("valueUri", ScalarKind::Uri).with_shadow())
            .field(FieldDecl::scalar("valueCode", ScalarKind::Code).with_shadow())
            .field(FieldDecl::scalar("valueDateTime", ScalarKind::DateTime).with_shadow())
            .field(FieldDecl::named("valueCoding", "Coding"))
            .field(FieldDecl::named("valueCodeableConcept", "CodeableConcept"))
            .field(FieldDecl::named("valueQuantity", "Quantity"))
            .field(FieldDecl::named("valuePeriod", "Period")),
        ResourceDecl::complex("Meta", version)
            .field(FieldDecl::scalar("versionId", ScalarKind::Id).with_shadow())
            .field(FieldDecl::scalar("lastUpdated", ScalarKind::Instant).with_shadow())
            .field(FieldDecl::scalar("profile", ScalarKind::Uri).many())
            .field(FieldDecl::named("security", "Coding").many())
            .field(FieldDecl::named("tag", "Coding").many()),
        ResourceDecl::complex("Narrative", version)
            .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow())
            .field(FieldDecl::scalar("div", ScalarKind::Xhtml).required()),
        ResourceDecl::complex("Coding", version)
            .field(FieldDecl::scalar("system", ScalarKind::Uri).with_shadow())
            .field(FieldDecl::scalar("version", ScalarKind::String).with_shadow())
            .field(FieldDecl::scalar("code", ScalarKind::Code).with_shadow())
            .field(FieldDecl::scalar("display", ScalarKind::String).with_shadow())
            .field(FieldDecl::scalar("userSelected", ScalarKind::Boolean).with_shadow()),
        ResourceDecl::complex("CodeableConcept", version)
            .field(FieldDecl::named("coding", "Coding").many())
            .field(FieldDecl::scalar("text", ScalarKind::String).with_shadow()),
        ResourceDecl::complex("Period", version)
            .field(FieldDecl::scalar("start", ScalarKind::DateTime).with_shadow())
            .field(FieldDecl::scalar("end", ScalarKind::DateTime).with_shadow()),
        ResourceDecl::complex("Quantity", version)
            .field(FieldDecl::scalar("value", ScalarKind::Decimal).with_shadow())
            .field(FieldDecl::scalar("comparator", ScalarKind::Code).with_shadow())
            .field(FieldDecl::scalar("unit", ScalarKind::String).with_shadow())
            .field(FieldDecl::scalar("system", ScalarKind::Uri).with_shadow())
            .field(FieldDecl::scalar("code", ScalarKind::Code).with_shadow()),
        ResourceDecl::complex("Identifier", version)
            .field(FieldDecl::scalar("use", ScalarKind::Code).with_shadow())
            .field(FieldDecl::named("type", "CodeableConcept"))
            .field(FieldDecl::scalar("system", ScalarKind::Uri).with_shadow())
            .field(FieldDecl::scalar("value", ScalarKind::String).with_shadow())
            .field(FieldDecl::named("period", "Period"))
            .field(FieldDecl::reference("assigner", &["Organization"])),
        ResourceDecl::complex("HumanName", version)
            .field(FieldDecl::scalar("use", ScalarKind::Code).with_shadow())
            .field(FieldDecl::scalar("text", ScalarKind::String).with_shadow())
            .field(FieldDecl::scalar("family", ScalarKind::String).with_shadow())
            .field(FieldDecl::scalar("given", ScalarKind::String).many().with_shadow()),
    ]
}
