//! Derives one family's [`CompositeDescriptor`] from a family-neutral
//! declaration. Pure and deterministic: field order follows declaration
//! order, and repeated builds yield structurally identical descriptors.

use std::collections::HashSet;

use crate::catalog::{DeclKind, FieldDecl, ResourceDecl, TargetDecl};
use crate::error::{Result, TypeGraphError};
use crate::registry::TypeGraph;
use crate::types::{
    CompositeDescriptor, FieldSpec, FieldType, PolymorphicUnion, SchemaFamily,
};

/// Types shared across the Output and Input families within one version.
/// Their handles always canonicalize to the Output partition so both
/// families observe the same descriptor instance.
pub(crate) const FAMILY_SHARED: [&str; 2] = ["Element", "Extension"];

pub(crate) fn is_family_shared(name: &str) -> bool {
    FAMILY_SHARED.contains(&name)
}

pub(crate) fn build_descriptor(
    decl: &ResourceDecl,
    family: SchemaFamily,
    graph: &TypeGraph,
) -> Result<CompositeDescriptor> {
    let mut fields = Vec::with_capacity(decl.fields.len() + 1);
    let mut seen: HashSet<String> = HashSet::new();

    let mut push = |field: FieldSpec, fields: &mut Vec<FieldSpec>| -> Result<()> {
        if !seen.insert(field.name.clone()) {
            return Err(TypeGraphError::DuplicateField {
                type_name: decl.name.clone(),
                field: field.name,
            });
        }
        fields.push(field);
        Ok(())
    };

    // Every resource declares its own kind through a single-valued closed
    // enumeration; the legal value is the descriptor's own name.
    if decl.kind == DeclKind::Resource {
        push(
            FieldSpec::new("resourceType", FieldType::SelfEnum)
                .required()
                .with_description("Type of resource"),
            &mut fields,
        )?;
    }

    for field_decl in &decl.fields {
        build_field(decl, field_decl, family, graph, &mut fields, &mut push)?;
    }

    Ok(CompositeDescriptor::new(
        decl.name.clone(),
        decl.version,
        family,
        decl.description.clone(),
        fields,
    ))
}

fn build_field(
    decl: &ResourceDecl,
    field_decl: &FieldDecl,
    family: SchemaFamily,
    graph: &TypeGraph,
    fields: &mut Vec<FieldSpec>,
    push: &mut impl FnMut(FieldSpec, &mut Vec<FieldSpec>) -> Result<()>,
) -> Result<()> {
    let field_type = match &field_decl.target {
        TargetDecl::Scalar(kind) => FieldType::Scalar(*kind),
        TargetDecl::Named(target) => {
            let handle = graph.resolve_declared(target, decl.version, family)?;
            FieldType::Composite(handle)
        }
        TargetDecl::Reference(candidates) => {
            // An empty candidate set could never resolve, so it is rejected
            // here rather than at resolution time.
            if candidates.is_empty() {
                return Err(TypeGraphError::EmptyCandidateSet {
                    type_name: decl.name.clone(),
                    field: field_decl.name.clone(),
                });
            }
            match family {
                SchemaFamily::Output => {
                    let mut handles = Vec::with_capacity(candidates.len());
                    for candidate in candidates {
                        // Candidate sets resolve version-locally in the Output
                        // partition; a miss here is a build-time error.
                        handles.push(graph.resolve_declared(
                            candidate,
                            decl.version,
                            SchemaFamily::Output,
                        )?);
                    }
                    FieldType::Reference(PolymorphicUnion::new(handles))
                }
                SchemaFamily::Input => FieldType::ReferenceId,
            }
        }
        TargetDecl::Contained => match family {
            SchemaFamily::Output => FieldType::ContainedResource,
            SchemaFamily::Input => FieldType::ContainedId,
        },
    };

    let shadow = field_decl.shadow && matches!(field_decl.target, TargetDecl::Scalar(_));
    if field_decl.shadow && !shadow {
        tracing::warn!(
            type_name = %decl.name,
            field = %field_decl.name,
            "shadow flag ignored on non-scalar field"
        );
    }

    // The shadow slots in immediately before its primary and repeats when
    // the primary does, pairing one Element per list entry.
    if shadow {
        let element = graph.resolve_declared("Element", decl.version, family)?;
        let mut spec = FieldSpec::new(format!("_{}", field_decl.name), FieldType::Element(element))
            .with_cardinality(field_decl.cardinality);
        spec.description = field_decl.description.clone();
        push(spec, fields)?;
    }

    let mut spec = FieldSpec::new(field_decl.name.clone(), field_type)
        .with_cardinality(field_decl.cardinality);
    spec.required = field_decl.required;
    spec.has_shadow = shadow;
    spec.description = field_decl.description.clone();
    push(spec, fields)?;

    Ok(())
}
