//! Per-field decoding of result messages
//!
//! Every result field is read from one location: a JSON key, an XML element
//! or an HTTP response header. A [`FieldDecoder`] looks the raw value up,
//! converts it with [`FromWire`], and applies the configured
//! [`DecodePolicy`] when the conversion fails.

use crate::config::DecodePolicy;
use crate::errors::{DtoResult, FieldError, FieldErrorKind};
use crate::utils::xml::XmlElements;

use http::{HeaderMap, HeaderName};
use serde_json::{Map, Value};
use tracing::warn;

/// A JSON object
pub type JsonObject = Map<String, Value>;

/// A scalar semantic type that can be read from its wire representation
pub trait FromWire: Sized {
    /// Decodes the textual form used by XML elements and headers
    ///
    /// # Errors
    /// Returns an `Err` if `text` is not a valid representation
    fn from_text(text: &str) -> Result<Self, FieldErrorKind>;

    /// Decodes a JSON value. Strings go through [`FromWire::from_text`].
    ///
    /// # Errors
    /// Returns an `Err` if `value` has the wrong type or is out of range
    fn from_json(value: &Value) -> Result<Self, FieldErrorKind> {
        match value {
            Value::String(s) => Self::from_text(s),
            other => Err(FieldErrorKind::unexpected("string", other)),
        }
    }
}

/// A nested structure decoded from a JSON object
pub trait JsonStructure: Sized {
    /// Decodes the structure's members from `object`
    ///
    /// # Errors
    /// Returns an `Err` if a member cannot be decoded under a strict policy
    fn decode_json(object: &JsonObject, decoder: &FieldDecoder) -> DtoResult<Self>;
}

impl FromWire for String {
    fn from_text(text: &str) -> Result<Self, FieldErrorKind> {
        Ok(text.to_owned())
    }
}

impl FromWire for bool {
    fn from_text(text: &str) -> Result<Self, FieldErrorKind> {
        match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(FieldErrorKind::InvalidBoolean(text.to_owned())),
        }
    }

    fn from_json(value: &Value) -> Result<Self, FieldErrorKind> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(FieldErrorKind::unexpected("boolean", other)),
        }
    }
}

/// integer types share their parsing, only the range differs
macro_rules! integer_from_wire {
    ($($ty:ty),+) => {
        $(
            impl FromWire for $ty {
                fn from_text(text: &str) -> Result<Self, FieldErrorKind> {
                    text.trim()
                        .parse()
                        .map_err(|_| FieldErrorKind::InvalidInteger(text.to_owned()))
                }

                fn from_json(value: &Value) -> Result<Self, FieldErrorKind> {
                    match value {
                        Value::Number(n) => n
                            .as_i64()
                            .and_then(|v| <$ty>::try_from(v).ok())
                            .ok_or_else(|| FieldErrorKind::InvalidInteger(n.to_string())),
                        other => Err(FieldErrorKind::unexpected("number", other)),
                    }
                }
            }
        )+
    };
}

integer_from_wire!(i32, i64);

impl FromWire for f64 {
    fn from_text(text: &str) -> Result<Self, FieldErrorKind> {
        match text.trim() {
            "NaN" => Ok(Self::NAN),
            "Infinity" => Ok(Self::INFINITY),
            "-Infinity" => Ok(Self::NEG_INFINITY),
            s => s
                .parse()
                .map_err(|_| FieldErrorKind::InvalidNumber(text.to_owned())),
        }
    }

    fn from_json(value: &Value) -> Result<Self, FieldErrorKind> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| FieldErrorKind::InvalidNumber(n.to_string())),
            // non-finite values travel as strings
            Value::String(s) => Self::from_text(s),
            other => Err(FieldErrorKind::unexpected("number", other)),
        }
    }
}

/// Reads fields of one result message under one policy
#[derive(Debug, Clone, Copy)]
pub struct FieldDecoder {
    /// operation name, for logs
    operation: &'static str,
    /// failure policy
    policy: DecodePolicy,
}

impl FieldDecoder {
    /// Constructs a decoder for `operation`
    #[must_use]
    pub const fn new(operation: &'static str, policy: DecodePolicy) -> Self {
        Self { operation, policy }
    }

    /// The policy this decoder applies
    #[must_use]
    pub const fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// apply the policy to one decoded value
    fn settle<T>(&self, field: &str, decoded: Result<T, FieldErrorKind>) -> DtoResult<Option<T>> {
        match decoded {
            Ok(value) => Ok(Some(value)),
            Err(kind) => match self.policy {
                DecodePolicy::Lenient => {
                    warn!(
                        operation = self.operation,
                        field,
                        error = %kind,
                        "dropping undecodable field"
                    );
                    Ok(None)
                }
                DecodePolicy::Strict => Err(FieldError {
                    field: field.to_owned(),
                    kind,
                }
                .into()),
            },
        }
    }

    /// Decodes the text of an XML element or other textual source
    ///
    /// # Errors
    /// Returns an `Err` if the text is invalid and the policy is strict
    pub fn text<T: FromWire>(&self, field: &str, text: Option<&str>) -> DtoResult<Option<T>> {
        match text {
            None => Ok(None),
            Some(text) => self.settle(field, T::from_text(text)),
        }
    }

    /// Decodes the direct child element `name` of an XML document root
    ///
    /// # Errors
    /// Returns an `Err` if the element text is invalid and the policy is strict
    pub fn element<T: FromWire>(&self, elements: &XmlElements, name: &str) -> DtoResult<Option<T>> {
        self.text(name, elements.get(name))
    }

    /// Decodes a response header
    ///
    /// # Errors
    /// Returns an `Err` if the header value is invalid and the policy is strict
    pub fn header<T: FromWire>(&self, headers: &HeaderMap, name: &HeaderName) -> DtoResult<Option<T>> {
        match headers.get(name) {
            None => Ok(None),
            Some(value) => {
                let decoded = value
                    .to_str()
                    .map_err(|_| FieldErrorKind::NonTextHeader)
                    .and_then(T::from_text);
                self.settle(name.as_str(), decoded)
            }
        }
    }

    /// Decodes the scalar member `key` of a JSON object. `null` is absent.
    ///
    /// # Errors
    /// Returns an `Err` if the value is invalid and the policy is strict
    pub fn json<T: FromWire>(&self, object: &JsonObject, key: &str) -> DtoResult<Option<T>> {
        match object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.settle(key, T::from_json(value)),
        }
    }

    /// Decodes the structure member `key` of a JSON object
    ///
    /// # Errors
    /// Returns an `Err` if the value is invalid and the policy is strict
    pub fn json_structure<T: JsonStructure>(
        &self,
        object: &JsonObject,
        key: &str,
    ) -> DtoResult<Option<T>> {
        match object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(inner)) => T::decode_json(inner, self).map(Some),
            Some(other) => self.settle(key, Err(FieldErrorKind::unexpected("object", other))),
        }
    }

    /// Decodes the list-of-structures member `key` of a JSON object.
    /// Under the lenient policy, elements that are not objects are skipped.
    ///
    /// # Errors
    /// Returns an `Err` if the value is invalid and the policy is strict
    pub fn json_list<T: JsonStructure>(
        &self,
        object: &JsonObject,
        key: &str,
    ) -> DtoResult<Option<Vec<T>>> {
        match object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Object(inner) => out.push(T::decode_json(inner, self)?),
                        other => {
                            let _skipped: Option<T> = self
                                .settle(key, Err(FieldErrorKind::unexpected("object", other)))?;
                        }
                    }
                }
                Ok(Some(out))
            }
            Some(other) => self.settle(key, Err(FieldErrorKind::unexpected("array", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn json_scalars() {
        let doc = object(json!({
            "Name": "n",
            "Count": 5,
            "Big": 5_000_000_000_i64,
            "Ratio": 0.5,
            "Inf": "Infinity",
            "Flag": true,
            "Nothing": null,
        }));
        let d = FieldDecoder::new("Test", DecodePolicy::Strict);

        assert_eq!(d.json::<String>(&doc, "Name").unwrap().as_deref(), Some("n"));
        assert_eq!(d.json::<i32>(&doc, "Count").unwrap(), Some(5));
        assert_eq!(d.json::<i64>(&doc, "Big").unwrap(), Some(5_000_000_000));
        assert_eq!(d.json::<f64>(&doc, "Ratio").unwrap(), Some(0.5));
        assert_eq!(d.json::<f64>(&doc, "Inf").unwrap(), Some(f64::INFINITY));
        assert_eq!(d.json::<bool>(&doc, "Flag").unwrap(), Some(true));
        assert_eq!(d.json::<String>(&doc, "Nothing").unwrap(), None);
        assert_eq!(d.json::<String>(&doc, "Missing").unwrap(), None);
    }

    #[test]
    fn strict_policy_reports_the_field() {
        let doc = object(json!({ "Big": 5_000_000_000_i64, "Count": "5" }));
        let d = FieldDecoder::new("Test", DecodePolicy::Strict);

        let err = d.json::<i32>(&doc, "Big").unwrap_err();
        assert!(err.to_string().contains("`Big`"), "{err}");

        let err = d.json::<i32>(&doc, "Count").unwrap_err();
        assert!(err.to_string().contains("expected number, found string"), "{err}");
    }

    #[test]
    fn lenient_policy_drops_the_field() {
        let doc = object(json!({ "Count": "five", "Items": [{}, 3, {}] }));
        let d = FieldDecoder::new("Test", DecodePolicy::Lenient);

        assert_eq!(d.json::<i32>(&doc, "Count").unwrap(), None);

        struct Item;
        impl JsonStructure for Item {
            fn decode_json(_: &JsonObject, _: &FieldDecoder) -> DtoResult<Self> {
                Ok(Item)
            }
        }
        let items = d.json_list::<Item>(&doc, "Items").unwrap().unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn headers_are_case_insensitive() {
        let mut headers = HeaderMap::new();
        let name = HeaderName::from_bytes(b"ETag").unwrap();
        let _prev = headers.insert(name, HeaderValue::from_static("\"abc\""));
        let d = FieldDecoder::new("Test", DecodePolicy::Strict);

        let e_tag: Option<String> = d.header(&headers, &http::header::ETAG).unwrap();
        assert_eq!(e_tag.as_deref(), Some("\"abc\""));
    }

    #[test]
    fn non_text_header() {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_bytes(b"caf\xc3\xa9").unwrap();
        let _prev = headers.insert(http::header::ETAG, value);

        let lenient = FieldDecoder::new("Test", DecodePolicy::Lenient);
        assert_eq!(lenient.header::<String>(&headers, &http::header::ETAG).unwrap(), None);

        let strict = FieldDecoder::new("Test", DecodePolicy::Strict);
        assert!(strict.header::<String>(&headers, &http::header::ETAG).is_err());
    }

    #[test]
    fn text_numbers() {
        assert_eq!(i32::from_text(" 42 "), Ok(42));
        assert!(i32::from_text("4.2").is_err());
        assert!(f64::from_text("NaN").unwrap().is_nan());
        assert_eq!(f64::from_text("-Infinity"), Ok(f64::NEG_INFINITY));
        assert_eq!(bool::from_text("false"), Ok(false));
        assert!(bool::from_text("yes").is_err());
    }
}
