use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// FHIR specification revision. Every registry key carries one of these;
/// partitions never resolve into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FhirVersion {
    #[serde(rename = "1.0.2")]
    V1_0_2,
    #[serde(rename = "3.0.1")]
    V3_0_1,
    #[serde(rename = "4.0.0")]
    V4_0_0,
}

impl FhirVersion {
    pub const ALL: [FhirVersion; 3] = [FhirVersion::V1_0_2, FhirVersion::V3_0_1, FhirVersion::V4_0_0];

    pub fn as_str(&self) -> &'static str {
        match self {
            FhirVersion::V1_0_2 => "1.0.2",
            FhirVersion::V3_0_1 => "3.0.1",
            FhirVersion::V4_0_0 => "4.0.0",
        }
    }
}

impl fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FhirVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1.0.2" => Ok(FhirVersion::V1_0_2),
            "3.0.1" => Ok(FhirVersion::V3_0_1),
            "4.0.0" => Ok(FhirVersion::V4_0_0),
            other => Err(format!("unsupported FHIR version: {other}")),
        }
    }
}

/// Output descriptors are read shapes with full type fidelity; Input
/// descriptors are write shapes that relax references to identifier strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaFamily {
    #[serde(rename = "output")]
    Output,
    #[serde(rename = "input")]
    Input,
}

impl SchemaFamily {
    pub const ALL: [SchemaFamily; 2] = [SchemaFamily::Output, SchemaFamily::Input];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaFamily::Output => "output",
            SchemaFamily::Input => "input",
        }
    }
}

impl fmt::Display for SchemaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
