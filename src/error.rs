use thiserror::Error;

use crate::types::{FhirVersion, SchemaFamily};

#[derive(Error, Debug)]
pub enum TypeGraphError {
    #[error("unknown type: {name} ({version}, {family})")]
    UnknownType {
        name: String,
        version: FhirVersion,
        family: SchemaFamily,
    },

    #[error(
        "cross-version reference: {name} is not declared in {version} (declared in {declared_in})"
    )]
    CrossVersionReference {
        name: String,
        version: FhirVersion,
        declared_in: FhirVersion,
    },

    #[error("duplicate field {field} in {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("reference field {field} in {type_name} declares no candidate types")]
    EmptyCandidateSet { type_name: String, field: String },

    #[error("duplicate declaration: {name} ({version})")]
    DuplicateDeclaration { name: String, version: FhirVersion },

    #[error("invalid lexical form for {scalar}: {value:?}")]
    InvalidLexicalForm { scalar: String, value: String },

    #[error("concurrency error: {message}")]
    Concurrency { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TypeGraphError>;
