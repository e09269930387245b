//! Leaf value types. Each scalar kind validates and parses one primitive
//! lexical form; the grammars are the FHIR-defined ones. The table is built
//! once at process start and never mutated.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeGraphError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarKind {
    Boolean,
    Integer,
    String,
    Decimal,
    Uri,
    Url,
    Canonical,
    Base64Binary,
    Instant,
    Date,
    DateTime,
    Time,
    Code,
    Oid,
    Id,
    Markdown,
    UnsignedInt,
    PositiveInt,
    Uuid,
    Xhtml,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 20] = [
        ScalarKind::Boolean,
        ScalarKind::Integer,
        ScalarKind::String,
        ScalarKind::Decimal,
        ScalarKind::Uri,
        ScalarKind::Url,
        ScalarKind::Canonical,
        ScalarKind::Base64Binary,
        ScalarKind::Instant,
        ScalarKind::Date,
        ScalarKind::DateTime,
        ScalarKind::Time,
        ScalarKind::Code,
        ScalarKind::Oid,
        ScalarKind::Id,
        ScalarKind::Markdown,
        ScalarKind::UnsignedInt,
        ScalarKind::PositiveInt,
        ScalarKind::Uuid,
        ScalarKind::Xhtml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Boolean => "boolean",
            ScalarKind::Integer => "integer",
            ScalarKind::String => "string",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Uri => "uri",
            ScalarKind::Url => "url",
            ScalarKind::Canonical => "canonical",
            ScalarKind::Base64Binary => "base64Binary",
            ScalarKind::Instant => "instant",
            ScalarKind::Date => "date",
            ScalarKind::DateTime => "dateTime",
            ScalarKind::Time => "time",
            ScalarKind::Code => "code",
            ScalarKind::Oid => "oid",
            ScalarKind::Id => "id",
            ScalarKind::Markdown => "markdown",
            ScalarKind::UnsignedInt => "unsignedInt",
            ScalarKind::PositiveInt => "positiveInt",
            ScalarKind::Uuid => "uuid",
            ScalarKind::Xhtml => "xhtml",
        }
    }

    /// Kinds carried as JSON booleans or numbers rather than strings.
    pub fn json_shape(&self) -> JsonShape {
        match self {
            ScalarKind::Boolean => JsonShape::Bool,
            ScalarKind::Integer | ScalarKind::UnsignedInt | ScalarKind::PositiveInt => {
                JsonShape::Number
            }
            ScalarKind::Decimal => JsonShape::NumberOrString,
            _ => JsonShape::Text,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a scalar kind appears in a JSON data instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Bool,
    Number,
    NumberOrString,
    Text,
}

/// A parsed primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Boolean(bool),
    Integer(i64),
    UnsignedInt(u64),
    /// Kept as the source text to preserve precision.
    Decimal(String),
    String(String),
    /// Partial-precision date/dateTime/time lexical form.
    Temporal(String),
    Instant(chrono::DateTime<chrono::FixedOffset>),
    Uri(String),
    Url(url::Url),
    Uuid(uuid::Uuid),
}

/// Compiled lexical grammars for every scalar kind.
#[derive(Debug)]
pub struct ScalarTable {
    patterns: HashMap<ScalarKind, Regex>,
}

const DATE_PATTERN: &str =
    r"^\d{4}(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1]))?)?$";
const TIME_PATTERN: &str = r"^([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?$";
const DATE_TIME_PATTERN: &str = r"^\d{4}(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00)))?)?)?$";

impl ScalarTable {
    pub fn new() -> Self {
        let mut patterns = HashMap::new();
        let mut insert = |kind: ScalarKind, pattern: &str| {
            // The grammars are static literals, so compilation cannot fail.
            patterns.insert(kind, Regex::new(pattern).unwrap());
        };

        insert(ScalarKind::Boolean, r"^(true|false)$");
        insert(ScalarKind::Integer, r"^(0|[-+]?[1-9][0-9]*)$");
        insert(ScalarKind::String, r"^[\s\S]+$");
        insert(ScalarKind::Markdown, r"^[\s\S]+$");
        insert(ScalarKind::Xhtml, r"^[\s\S]+$");
        insert(
            ScalarKind::Decimal,
            r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][-+]?[0-9]+)?$",
        );
        insert(ScalarKind::Uri, r"^\S+$");
        insert(ScalarKind::Base64Binary, r"^(\s*[0-9a-zA-Z+/=])+\s*$");
        insert(ScalarKind::Date, DATE_PATTERN);
        insert(ScalarKind::Time, TIME_PATTERN);
        insert(ScalarKind::DateTime, DATE_TIME_PATTERN);
        insert(ScalarKind::Code, r"^[^\s]+(\s[^\s]+)*$");
        insert(ScalarKind::Oid, r"^urn:oid:[0-2](\.(0|[1-9][0-9]*))+$");
        insert(ScalarKind::Id, r"^[A-Za-z0-9\-\.]{1,64}$");
        insert(ScalarKind::UnsignedInt, r"^(0|[1-9][0-9]*)$");
        insert(ScalarKind::PositiveInt, r"^[1-9][0-9]*$");
        insert(
            ScalarKind::Uuid,
            r"^urn:uuid:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
        );

        Self { patterns }
    }

    /// Check a lexical form without parsing it.
    pub fn validate(&self, kind: ScalarKind, text: &str) -> bool {
        match kind {
            ScalarKind::Instant => chrono::DateTime::parse_from_rfc3339(text).is_ok(),
            ScalarKind::Url => url::Url::parse(text).is_ok(),
            ScalarKind::Canonical => {
                // A canonical may carry a `|version` suffix.
                let base = text.split('|').next().unwrap_or(text);
                url::Url::parse(base).is_ok()
            }
            other => match self.patterns.get(&other) {
                Some(pattern) => pattern.is_match(text),
                None => false,
            },
        }
    }

    /// Parse a lexical form into a typed value.
    pub fn parse(&self, kind: ScalarKind, text: &str) -> Result<ScalarValue> {
        if !self.validate(kind, text) {
            return Err(TypeGraphError::InvalidLexicalForm {
                scalar: kind.as_str().to_string(),
                value: text.to_string(),
            });
        }

        let invalid = || TypeGraphError::InvalidLexicalForm {
            scalar: kind.as_str().to_string(),
            value: text.to_string(),
        };

        let value = match kind {
            ScalarKind::Boolean => ScalarValue::Boolean(text == "true"),
            ScalarKind::Integer => ScalarValue::Integer(text.parse().map_err(|_| invalid())?),
            ScalarKind::UnsignedInt | ScalarKind::PositiveInt => {
                ScalarValue::UnsignedInt(text.parse().map_err(|_| invalid())?)
            }
            ScalarKind::Decimal => ScalarValue::Decimal(text.to_string()),
            ScalarKind::Instant => ScalarValue::Instant(
                chrono::DateTime::parse_from_rfc3339(text).map_err(|_| invalid())?,
            ),
            ScalarKind::Date | ScalarKind::DateTime | ScalarKind::Time => {
                ScalarValue::Temporal(text.to_string())
            }
            ScalarKind::Uri => ScalarValue::Uri(text.to_string()),
            ScalarKind::Url => ScalarValue::Url(url::Url::parse(text).map_err(|_| invalid())?),
            ScalarKind::Canonical => {
                let base = text.split('|').next().unwrap_or(text);
                ScalarValue::Url(url::Url::parse(base).map_err(|_| invalid())?)
            }
            ScalarKind::Uuid => {
                let raw = text.strip_prefix("urn:uuid:").ok_or_else(invalid)?;
                ScalarValue::Uuid(raw.parse().map_err(|_| invalid())?)
            }
            ScalarKind::String
            | ScalarKind::Code
            | ScalarKind::Oid
            | ScalarKind::Id
            | ScalarKind::Markdown
            | ScalarKind::Base64Binary
            | ScalarKind::Xhtml => ScalarValue::String(text.to_string()),
        };
        Ok(value)
    }
}

impl Default for ScalarTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_lexical_form() {
        let table = ScalarTable::new();
        assert!(table.validate(ScalarKind::Id, "example-123.v2"));
        assert!(!table.validate(ScalarKind::Id, "has space"));
        assert!(!table.validate(ScalarKind::Id, &"x".repeat(65)));
    }

    #[test]
    fn code_allows_single_internal_spaces() {
        let table = ScalarTable::new();
        assert!(table.validate(ScalarKind::Code, "active"));
        assert!(table.validate(ScalarKind::Code, "not done"));
        assert!(!table.validate(ScalarKind::Code, " leading"));
        assert!(!table.validate(ScalarKind::Code, "double  space"));
    }

    #[test]
    fn date_time_partial_precision() {
        let table = ScalarTable::new();
        assert!(table.validate(ScalarKind::DateTime, "2019"));
        assert!(table.validate(ScalarKind::DateTime, "2019-06"));
        assert!(table.validate(ScalarKind::DateTime, "2019-06-15"));
        assert!(table.validate(ScalarKind::DateTime, "2019-06-15T14:30:00Z"));
        assert!(table.validate(ScalarKind::DateTime, "2019-06-15T14:30:00+02:00"));
        assert!(!table.validate(ScalarKind::DateTime, "2019-13"));
        // A time without a zone offset is not a valid dateTime.
        assert!(!table.validate(ScalarKind::DateTime, "2019-06-15T14:30:00"));
    }

    #[test]
    fn instant_requires_full_timestamp() {
        let table = ScalarTable::new();
        assert!(table.validate(ScalarKind::Instant, "2019-06-15T14:30:00.123Z"));
        assert!(!table.validate(ScalarKind::Instant, "2019-06-15"));
    }

    #[test]
    fn unsigned_and_positive_int() {
        let table = ScalarTable::new();
        assert!(table.validate(ScalarKind::UnsignedInt, "0"));
        assert!(table.validate(ScalarKind::UnsignedInt, "42"));
        assert!(!table.validate(ScalarKind::UnsignedInt, "007"));
        assert!(!table.validate(ScalarKind::PositiveInt, "0"));
        assert!(table.validate(ScalarKind::PositiveInt, "1"));
    }

    #[test]
    fn parse_produces_typed_values() {
        let table = ScalarTable::new();
        assert_eq!(
            table.parse(ScalarKind::Boolean, "true").unwrap(),
            ScalarValue::Boolean(true)
        );
        assert_eq!(
            table.parse(ScalarKind::Integer, "-7").unwrap(),
            ScalarValue::Integer(-7)
        );
        assert_eq!(
            table.parse(ScalarKind::Decimal, "3.50").unwrap(),
            ScalarValue::Decimal("3.50".to_string())
        );
        let parsed = table
            .parse(ScalarKind::Uuid, "urn:uuid:c757873d-ec9a-4326-a141-556f43239520")
            .unwrap();
        assert!(matches!(parsed, ScalarValue::Uuid(_)));
    }

    #[test]
    fn parse_rejects_bad_lexical_form() {
        let table = ScalarTable::new();
        let err = table.parse(ScalarKind::Date, "June 2019").unwrap_err();
        assert!(matches!(
            err,
            TypeGraphError::InvalidLexicalForm { .. }
        ));
    }

    #[test]
    fn canonical_allows_version_suffix() {
        let table = ScalarTable::new();
        assert!(table.validate(
            ScalarKind::Canonical,
            "http://hl7.org/fhir/StructureDefinition/Group|4.0.0"
        ));
    }
}
