//! Validates JSON data instances against built descriptors. Validation is
//! partial-failure at the instance level: every field is checked and issues
//! are collected; a bad field never aborts validation of its siblings.

use serde_json::Value;

use crate::error::Result;
use crate::registry::TypeGraph;
use crate::resolver::{self, Resolution};
use crate::scalar::{JsonShape, ScalarKind};
use crate::types::{Cardinality, CompositeDescriptor, FieldSpec, FieldType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: ValidationSeverity,
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// All issues found in one instance.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
            .count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
    }
}

struct Context<'a> {
    graph: &'a TypeGraph,
    issues: Vec<ValidationIssue>,
}

impl Context<'_> {
    fn error(&mut self, path: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue::error(path, message));
    }

    fn warning(&mut self, path: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue::warning(path, message));
    }
}

/// Validate one data instance against a descriptor. Nested composites,
/// resolved references, and contained resources are validated recursively.
pub fn validate_instance(
    graph: &TypeGraph,
    descriptor: &CompositeDescriptor,
    value: &Value,
) -> Result<ValidationResult> {
    let mut ctx = Context {
        graph,
        issues: Vec::new(),
    };
    validate_composite(&mut ctx, descriptor, value, &descriptor.type_name)?;
    Ok(ValidationResult { issues: ctx.issues })
}

fn validate_composite(
    ctx: &mut Context<'_>,
    descriptor: &CompositeDescriptor,
    value: &Value,
    path: &str,
) -> Result<()> {
    let Some(object) = value.as_object() else {
        ctx.error(path, format!("expected an object for {}", descriptor.type_name));
        return Ok(());
    };

    for field in descriptor.fields() {
        let field_path = format!("{path}.{}", field.name);
        match object.get(&field.name) {
            None => {
                if field.required {
                    ctx.error(&field_path, "required field is missing");
                }
            }
            Some(field_value) => validate_field(ctx, descriptor, field, field_value, &field_path)?,
        }
    }

    // Fields outside the descriptor are reported but do not invalidate.
    for name in object.keys() {
        if !descriptor.has_field(name) {
            ctx.warning(&format!("{path}.{name}"), "unknown field");
        }
    }

    Ok(())
}

fn validate_field(
    ctx: &mut Context<'_>,
    descriptor: &CompositeDescriptor,
    field: &FieldSpec,
    value: &Value,
    path: &str,
) -> Result<()> {
    match field.cardinality {
        Cardinality::Many => {
            let Some(items) = value.as_array() else {
                ctx.error(path, "expected an array");
                return Ok(());
            };
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{index}]");
                validate_value(ctx, descriptor, field, item, &item_path)?;
            }
        }
        Cardinality::One => {
            if value.is_array() {
                ctx.error(path, "expected a single value, found an array");
                return Ok(());
            }
            validate_value(ctx, descriptor, field, value, path)?;
        }
    }
    Ok(())
}

fn validate_value(
    ctx: &mut Context<'_>,
    descriptor: &CompositeDescriptor,
    field: &FieldSpec,
    value: &Value,
    path: &str,
) -> Result<()> {
    match &field.field_type {
        FieldType::Scalar(kind) => validate_scalar(ctx, *kind, value, path),
        FieldType::Composite(handle) | FieldType::Element(handle) => {
            let nested = ctx.graph.materialize(handle)?;
            validate_composite(ctx, &nested, value, path)?;
        }
        FieldType::Reference(union) => match resolver::resolve_reference(union, value) {
            Resolution::Resolved(handle) => {
                let target = ctx.graph.materialize(&handle)?;
                validate_composite(ctx, &target, value, path)?;
            }
            Resolution::Unresolved(reason) => {
                ctx.error(path, format!("unresolved reference: {reason}"));
            }
        },
        FieldType::ContainedResource => {
            match resolver::resolve_contained(ctx.graph, descriptor.version, value) {
                Resolution::Resolved(handle) => {
                    let target = ctx.graph.materialize(&handle)?;
                    validate_composite(ctx, &target, value, path)?;
                }
                Resolution::Unresolved(reason) => {
                    ctx.error(path, format!("unresolved contained resource: {reason}"));
                }
            }
        }
        FieldType::ReferenceId | FieldType::ContainedId => {
            if !value.is_string() {
                ctx.error(path, "expected an identifier string");
            }
        }
        FieldType::SelfEnum => match value.as_str() {
            Some(name) if name == descriptor.type_name => {}
            Some(name) => ctx.error(
                path,
                format!(
                    "resourceType must be {:?}, found {name:?}",
                    descriptor.type_name
                ),
            ),
            None => ctx.error(path, "resourceType must be a string"),
        },
    }
    Ok(())
}

fn validate_scalar(ctx: &mut Context<'_>, kind: ScalarKind, value: &Value, path: &str) {
    match kind.json_shape() {
        JsonShape::Bool => {
            if !value.is_boolean() {
                ctx.error(path, format!("expected a boolean for {kind}"));
            }
        }
        JsonShape::Number => match value.as_i64() {
            Some(n) => {
                let bad = match kind {
                    ScalarKind::UnsignedInt => n < 0,
                    ScalarKind::PositiveInt => n < 1,
                    _ => false,
                };
                if bad {
                    ctx.error(path, format!("{n} is out of range for {kind}"));
                }
            }
            None => ctx.error(path, format!("expected an integer for {kind}")),
        },
        JsonShape::NumberOrString => {
            let ok = match value {
                Value::Number(_) => true,
                Value::String(text) => ctx.graph.scalars().validate(kind, text),
                _ => false,
            };
            if !ok {
                ctx.error(path, format!("expected a decimal for {kind}"));
            }
        }
        JsonShape::Text => match value.as_str() {
            Some(text) => {
                if !ctx.graph.scalars().validate(kind, text) {
                    ctx.error(path, format!("invalid lexical form for {kind}: {text:?}"));
                }
            }
            None => ctx.error(path, format!("expected a string for {kind}")),
        },
    }
}
