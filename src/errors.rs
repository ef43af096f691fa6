//! Errors

use serde_json::Value;

/// Result carrying a [`DtoError`]
pub type DtoResult<T, E = DtoError> = Result<T, E>;

/// Message serialization or deserialization failure
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DtoError {
    /// The response body is not UTF-8 text
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The JSON document could not be parsed or written
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON document root is not an object
    #[error("expected a JSON object at the document root, found {found}")]
    NotAnObject {
        /// JSON type found at the root
        found: &'static str,
    },

    /// The XML document is not well-formed
    #[error("invalid XML document: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The XML payload could not be written
    #[error("failed to write XML payload: {0}")]
    XmlWrite(#[from] xml::writer::Error),

    /// A field value cannot be carried in an HTTP header
    #[error("value of header `{name}` is not a valid header value: {source}")]
    InvalidHeaderValue {
        /// header name
        name: String,
        /// underlying error
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// A single field could not be decoded under the strict policy
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// A field whose wire value could not be decoded to its semantic type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("field `{field}` could not be decoded: {kind}")]
pub struct FieldError {
    /// wire name of the field (JSON key, XML element or header name)
    pub field: String,
    /// what went wrong
    pub kind: FieldErrorKind,
}

/// Reason a field could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FieldErrorKind {
    /// The JSON value has the wrong type
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        /// expected JSON type
        expected: &'static str,
        /// JSON type found
        found: &'static str,
    },

    /// Not an integer, or out of range for the field
    #[error("`{0}` is not a valid integer for this field")]
    InvalidInteger(String),

    /// Not a floating point number
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),

    /// Not `true` or `false`
    #[error("`{0}` is not a valid boolean")]
    InvalidBoolean(String),

    /// The header value contains bytes that are not visible ASCII
    #[error("header value is not visible ASCII text")]
    NonTextHeader,
}

impl FieldErrorKind {
    /// type mismatch against a JSON value
    pub(crate) fn unexpected(expected: &'static str, found: &Value) -> Self {
        Self::UnexpectedType {
            expected,
            found: JsonType(found).name(),
        }
    }
}

/// JSON type name of a value, for error messages
pub(crate) struct JsonType<'a>(pub(crate) &'a Value);

impl JsonType<'_> {
    /// static name
    pub(crate) fn name(&self) -> &'static str {
        match self.0 {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_error_names_the_field() {
        let err = FieldError {
            field: "MaxFaces".to_owned(),
            kind: FieldErrorKind::unexpected("number", &json!("five")),
        };
        assert_eq!(
            err.to_string(),
            "field `MaxFaces` could not be decoded: expected number, found string"
        );

        let wrapped = DtoError::from(err.clone());
        assert_eq!(wrapped.to_string(), err.to_string());
    }
}
