//! Resource declarations for the 4.0.0 partition.

use crate::scalar::ScalarKind;
use crate::types::FhirVersion;

use super::base::domain_resource;
use super::{FieldDecl, ResourceDecl};

const VERSION: FhirVersion = FhirVersion::V4_0_0;

pub fn declarations() -> Vec<ResourceDecl> {
    let mut decls = vec![group(), group_characteristic(), group_member()];
    decls.push(medicinal_product_authorization());
    decls.push(adverse_event());
    decls.extend(reference_targets());
    decls
}

fn group() -> ResourceDecl {
    domain_resource("Group", VERSION)
        .describe(
            "Represents a defined collection of entities that may be discussed or acted upon \
             collectively but which are not expected to act collectively, and are not formally \
             or legally recognized.",
        )
        .field(FieldDecl::named("identifier", "Identifier").many()
            .describe("A unique business identifier for this group."))
        .field(FieldDecl::scalar("active", ScalarKind::Boolean).with_shadow()
            .describe("Indicates whether the record for the group is available for use."))
        .field(FieldDecl::scalar("type", ScalarKind::Code).required().with_shadow()
            .describe("Identifies the broad classification of the kind of resources the group includes."))
        .field(FieldDecl::scalar("actual", ScalarKind::Boolean).required().with_shadow()
            .describe("If true, the group refers to a specific set of real individuals."))
        .field(FieldDecl::named("code", "CodeableConcept"))
        .field(FieldDecl::scalar("name", ScalarKind::String).with_shadow())
        .field(FieldDecl::scalar("quantity", ScalarKind::UnsignedInt).with_shadow()
            .describe("A count of the number of resource instances that are part of the group."))
        .field(
            FieldDecl::reference(
                "managingEntity",
                &["Organization", "RelatedPerson", "Practitioner", "PractitionerRole"],
            )
            .describe("Entity responsible for defining and maintaining Group characteristics."),
        )
        .field(FieldDecl::named("characteristic", "GroupCharacteristic").many())
        .field(FieldDecl::named("member", "GroupMember").many())
}

fn group_characteristic() -> ResourceDecl {
    ResourceDecl::complex("GroupCharacteristic", VERSION)
        .field(FieldDecl::named("code", "CodeableConcept").required())
        .field(FieldDecl::scalar("valueBoolean", ScalarKind::Boolean).with_shadow())
        .field(FieldDecl::named("valueCodeableConcept", "CodeableConcept"))
        .field(FieldDecl::named("valueQuantity", "Quantity"))
        .field(FieldDecl::scalar("exclude", ScalarKind::Boolean).required().with_shadow())
        .field(FieldDecl::named("period", "Period"))
}

fn group_member() -> ResourceDecl {
    ResourceDecl::complex("GroupMember", VERSION)
        .field(
            FieldDecl::reference(
                "entity",
                &[
                    "Patient",
                    "Practitioner",
                    "PractitionerRole",
                    "Device",
                    "Medication",
                    "Substance",
                    "Group",
                ],
            )
            .required(),
        )
        .field(FieldDecl::named("period", "Period"))
        .field(FieldDecl::scalar("inactive", ScalarKind::Boolean).with_shadow())
}

fn medicinal_product_authorization() -> ResourceDecl {
    domain_resource("MedicinalProductAuthorization", VERSION)
        .field(FieldDecl::named("identifier", "Identifier").many())
        .field(FieldDecl::named("country", "CodeableConcept").many())
        .field(FieldDecl::named("status", "CodeableConcept"))
        .field(FieldDecl::scalar("statusDate", ScalarKind::DateTime).with_shadow())
        .field(FieldDecl::scalar("restoreDate", ScalarKind::DateTime).with_shadow())
        .field(FieldDecl::named("validityPeriod", "Period"))
        .field(FieldDecl::reference("holder", &["Organization"]))
        .field(FieldDecl::reference("regulator", &["Organization"]))
}

fn adverse_event() -> ResourceDecl {
    domain_resource("AdverseEvent", VERSION)
        .field(FieldDecl::named("identifier", "Identifier"))
        .field(FieldDecl::scalar("actuality", ScalarKind::Code).required().with_shadow()
            .describe("actual | potential"))
        .field(FieldDecl::named("category", "CodeableConcept").many())
        .field(FieldDecl::named("event", "CodeableConcept"))
        .field(
            FieldDecl::reference("subject", &["Patient", "Group", "Practitioner", "RelatedPerson"])
                .required(),
        )
        .field(FieldDecl::scalar("date", ScalarKind::DateTime).with_shadow())
        .field(FieldDecl::reference(
            "recorder",
            &["Patient", "Practitioner", "PractitionerRole", "RelatedPerson"],
        ))
        .field(FieldDecl::scalar("seriousness", ScalarKind::Code).with_shadow())
}

// Minimal declarations for the resources the unions above point at.
fn reference_targets() -> Vec<ResourceDecl> {
    vec![
        domain_resource("Patient", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("active", ScalarKind::Boolean).with_shadow())
            .field(FieldDecl::named("name", "HumanName").many())
            .field(FieldDecl::scalar("birthDate", ScalarKind::Date).with_shadow()),
        domain_resource("Practitioner", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("active", ScalarKind::Boolean).with_shadow())
            .field(FieldDecl::named("name", "HumanName").many()),
        domain_resource("PractitionerRole", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::reference("practitioner", &["Practitioner"]))
            .field(FieldDecl::reference("organization", &["Organization"])),
        domain_resource("Organization", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("active", ScalarKind::Boolean).with_shadow())
            .field(FieldDecl::scalar("name", ScalarKind::String).with_shadow()),
        domain_resource("RelatedPerson", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::reference("patient", &["Patient"]).required())
            .field(FieldDecl::named("name", "HumanName").many()),
        domain_resource("Device", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("status", ScalarKind::Code).with_shadow()),
        domain_resource("Medication", VERSION)
            .field(FieldDecl::named("code", "CodeableConcept"))
            .field(FieldDecl::scalar("status", ScalarKind::Code).with_shadow()),
        domain_resource("Substance", VERSION)
            .field(FieldDecl::named("code", "CodeableConcept").required())
            .field(FieldDecl::scalar("status", ScalarKind::Code).with_shadow()),
    ]
}
