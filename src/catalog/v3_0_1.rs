//! Resource declarations for the 3.0.1 partition.

use crate::scalar::ScalarKind;
use crate::types::FhirVersion;

use super::base::domain_resource;
use super::{FieldDecl, ResourceDecl};

const VERSION: FhirVersion = FhirVersion::V3_0_1;

pub fn declarations() -> Vec<ResourceDecl> {
    vec![
        guidance_response(),
        domain_resource("Patient", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("active", ScalarKind::Boolean).with_shadow())
            .field(FieldDecl::named("name", "HumanName").many()),
        domain_resource("Group", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("type", ScalarKind::Code).required().with_shadow())
            .field(FieldDecl::scalar("actual", ScalarKind::Boolean).required().with_shadow()),
        domain_resource("Encounter", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow()),
        episode_of_care(),
        // ServiceDefinition exists only in this partition; 4.0.0 retired it.
        domain_resource("ServiceDefinition", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow())
            .field(FieldDecl::scalar("name", ScalarKind::String).with_shadow()),
        domain_resource("Device", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("status", ScalarKind::Code).with_shadow()),
        domain_resource("OperationOutcome", VERSION)
            .field(FieldDecl::named("issue", "OperationOutcomeIssue").many().required()),
        ResourceDecl::complex("OperationOutcomeIssue", VERSION)
            .field(FieldDecl::scalar("severity", ScalarKind::Code).required().with_shadow())
            .field(FieldDecl::scalar("code", ScalarKind::Code).required().with_shadow())
            .field(FieldDecl::named("details", "CodeableConcept"))
            .field(FieldDecl::scalar("diagnostics", ScalarKind::String).with_shadow()),
        domain_resource("Organization", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::scalar("name", ScalarKind::String).with_shadow()),
        domain_resource("Practitioner", VERSION)
            .field(FieldDecl::named("identifier", "Identifier").many())
            .field(FieldDecl::named("name", "HumanName").many()),
    ]
}

fn guidance_response() -> ResourceDecl {
    domain_resource("GuidanceResponse", VERSION)
        .describe("A guidance response is the formal response to a guidance request.")
        .field(FieldDecl::scalar("requestId", ScalarKind::Id).with_shadow()
            .describe("The id of the request associated with this response, if any."))
        .field(FieldDecl::named("identifier", "Identifier"))
        .field(FieldDecl::reference("module", &["ServiceDefinition"]).required()
            .describe("A reference to the knowledge module that was invoked."))
        .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow()
            .describe("success | data-requested | data-required | in-progress | failure | entered-in-error"))
        .field(FieldDecl::reference("subject", &["Patient", "Group"]))
        .field(FieldDecl::reference("context", &["Encounter", "EpisodeOfCare"]))
        .field(FieldDecl::scalar("occurrenceDateTime", ScalarKind::DateTime).with_shadow())
        .field(FieldDecl::reference("performer", &["Device"]))
        .field(FieldDecl::named("reasonCodeableConcept", "CodeableConcept"))
        .field(FieldDecl::reference("evaluationMessage", &["OperationOutcome"]).many())
        .field(FieldDecl::reference("result", &["GuidanceResponse"]))
}

fn episode_of_care() -> ResourceDecl {
    domain_resource("EpisodeOfCare", VERSION)
        .field(FieldDecl::named("identifier", "Identifier").many())
        .field(FieldDecl::scalar("status", ScalarKind::Code).required().with_shadow())
        .field(FieldDecl::reference("patient", &["Patient"]).required())
        .field(FieldDecl::reference("managingOrganization", &["Organization"]))
        .field(FieldDecl::named("period", "Period"))
        .field(FieldDecl::reference("careManager", &["Practitioner"]))
}
