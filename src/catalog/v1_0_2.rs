//! Resource declarations for the 1.0.2 partition.

use crate::scalar::ScalarKind;
use crate::types::FhirVersion;

use super::base::domain_resource;
use super::{FieldDecl, ResourceDecl};

const VERSION: FhirVersion = FhirVersion::V1_0_2;

pub fn declarations() -> Vec<ResourceDecl> {
    vec![
        flag(),
        payment_notice(),
        episode_of_care(),
        ResourceDecl::complex("EpisodeOfCareStatusHistory", VERSION)
            .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow())
            .field(FieldDecl::named("period", "Period").required()),
        ResourceDecl::complex("EpisodeOfCareCareTeam", VERSION)
            .field(FieldDecl::reference("member", &["Practitioner", "Organization"]))
            .field(FieldDecl::named("role", "CodeableConcept").many())
            .field(FieldDecl::named("period", "Period")),
        domain_resource("Patient", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("active", ScalarKind::Boolean).with_shadow())
            .field(FieldDecl::named("name", "HumanName").many()),
        domain_resource("Practitioner", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::named("name", "HumanName")),
        domain_resource("Organization", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("name", ScalarKind::String).with_shadow()),
        domain_resource("Location", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("name", ScalarKind::String).with_shadow()),
        domain_resource("Group", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("type", ScalarKind::Code).required().with_shadow()),
        domain_resource("Encounter", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow()),
        domain_resource("Device", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("status", ScalarKind::Code).with_shadow()),
        domain_resource("Condition", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::named("code", "CodeableConcept").required()),
        domain_resource("ReferralRequest", VERSION)
            .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow())
            .field(FieldDecl::named("identifier", "Identifier").many()),
    ]
}

fn flag() -> ResourceDecl {
    domain_resource("Flag", VERSION)
        .describe("Prospective warnings of potential issues when providing care to the patient.")
        .field(FieldDecl::named("identifier", "Identifier").many())
        .field(FieldDecl::named("category", "CodeableConcept"))
        .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow()
            .describe("active | inactive | entered-in-error"))
        .field(FieldDecl::named("period", "Period"))
        .field(
            FieldDecl::reference(
                "subject",
                &["Patient", "Location", "Group", "Organization", "Practitioner"],
            )
            .required(),
        )
        .field(FieldDecl::reference("encounter", &["Encounter"]))
        .field(FieldDecl::reference(
            "author",
            &["Device", "Organization", "Patient", "Practitioner"],
        ))
        .field(FieldDecl::named("code", "CodeableConcept").required()
            .describe("The coded value or textual component of the flag to display to the user."))
}

fn payment_notice() -> ResourceDecl {
    domain_resource("PaymentNotice", VERSION)
        .field(FieldDecl::named("identifier", "Identifier").many())
        .field(FieldDecl::named("ruleset", "Coding"))
        .field(FieldDecl::named("originalRuleset", "Coding"))
        .field(FieldDecl::scalar("created", ScalarKind::DateTime).with_shadow())
        .field(FieldDecl::reference("target", &["Organization"]))
        .field(FieldDecl::reference("provider", &["Practitioner"]))
        .field(FieldDecl::reference("organization", &["Organization"]))
        .field(FieldDecl::named("paymentStatus", "Coding").required())
}

fn episode_of_care() -> ResourceDecl {
    domain_resource("EpisodeOfCare", VERSION)
        .field(FieldDecl::named("identifier", "Identifier").many())
        .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow()
            .describe("planned | waitlist | active | onhold | finished | cancelled"))
        .field(FieldDecl::named("statusHistory", "EpisodeOfCareStatusHistory").many())
        .field(FieldDecl::named("type", "CodeableConcept").many())
        .field(FieldDecl::reference("condition", &["Condition"]).many())
        .field(FieldDecl::reference("patient", &["Patient"]).required())
        .field(FieldDecl::reference("managingOrganization", &["Organization"]))
        .field(FieldDecl::named("period", "Period"))
        .field(FieldDecl::reference("referralRequest", &["ReferralRequest"]).many())
        .field(FieldDecl::reference("careManager", &["Practitioner"]))
        .field(FieldDecl::named("careTeam", "EpisodeOfCareCareTeam").many())
}
