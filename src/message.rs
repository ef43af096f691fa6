//! Request and result message contracts
//!
//! A request is handed to a transport that needs its payload, its
//! operation-specific headers and its URI pieces. A result is decoded once
//! from a [`ServiceResponse`] and read through getters afterwards.

use crate::config::Config;
use crate::decode::{FieldDecoder, JsonObject};
use crate::errors::{DtoError, DtoResult, JsonType};
use crate::headers::X_AMZ_TARGET;
use crate::utils::{insert_header, render_query, xml::XmlElements};

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Wire protocol of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Protocol {
    /// `awsJson1_1`: JSON body, operation routed by `X-Amz-Target`
    AwsJson1_1 {
        /// service prefix of the target header value
        target_prefix: &'static str,
    },
    /// `restJson1`: JSON body, operation routed by method and path
    RestJson,
    /// `restXml`: XML or blob body, operation routed by method and path
    RestXml,
}

impl Protocol {
    /// Headers that route `operation` under this protocol
    ///
    /// # Errors
    /// Returns an `Err` if the target cannot be carried in a header
    pub fn routing_headers(self, operation: &str) -> DtoResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Self::AwsJson1_1 { target_prefix } = self {
            insert_header(
                &mut headers,
                X_AMZ_TARGET,
                Some(format!("{target_prefix}.{operation}")),
            )?;
        }
        Ok(headers)
    }
}

/// An outbound request message
pub trait ServiceRequest {
    /// Fixed operation identifier used for routing and signing
    const SERVICE_REQUEST_NAME: &'static str;

    /// Wire protocol of the operation
    const PROTOCOL: Protocol;

    /// Returns [`ServiceRequest::SERVICE_REQUEST_NAME`]
    fn service_request_name(&self) -> &'static str {
        Self::SERVICE_REQUEST_NAME
    }

    /// Produces the request body. Only present fields are written.
    ///
    /// # Errors
    /// Returns an `Err` if the body cannot be written
    fn serialize_payload_with(&self, config: &Config) -> DtoResult<Bytes>;

    /// [`ServiceRequest::serialize_payload_with`] under the default config
    ///
    /// # Errors
    /// Returns an `Err` if the body cannot be written
    fn serialize_payload(&self) -> DtoResult<Bytes> {
        self.serialize_payload_with(&Config::default())
    }

    /// Headers mandated by this operation, excluding generic transport headers
    ///
    /// # Errors
    /// Returns an `Err` if a field value cannot be carried in a header
    fn request_specific_headers(&self) -> DtoResult<HeaderMap> {
        Self::PROTOCOL.routing_headers(Self::SERVICE_REQUEST_NAME)
    }

    /// URI label values, in path order
    fn path_labels(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Query string pairs, in wire order
    fn query_string_parameters(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Percent-encoded query string of [`ServiceRequest::query_string_parameters`]
    fn render_query(&self) -> String {
        render_query(&self.query_string_parameters())
    }
}

/// A response body parsed into the form its result reads fields from
pub trait WireDocument: Sized {
    /// Parses a response body
    ///
    /// # Errors
    /// Returns an `Err` if the body is not a well-formed document
    fn parse(body: &[u8]) -> DtoResult<Self>;
}

/// A JSON response body whose root is an object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonDocument(JsonObject);

impl JsonDocument {
    /// Wraps a parsed JSON value
    ///
    /// # Errors
    /// Returns an `Err` if `value` is not an object
    pub fn from_value(value: Value) -> DtoResult<Self> {
        match value {
            Value::Object(object) => Ok(Self(object)),
            other => Err(DtoError::NotAnObject {
                found: JsonType(&other).name(),
            }),
        }
    }

    /// The root object
    #[must_use]
    pub fn object(&self) -> &JsonObject {
        &self.0
    }
}

impl WireDocument for JsonDocument {
    /// An empty body is an empty object
    fn parse(body: &[u8]) -> DtoResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Self::from_value(serde_json::from_slice(body)?)
    }
}

/// An XML response body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument(XmlElements);

impl XmlDocument {
    /// Parses XML text
    ///
    /// # Errors
    /// Returns an `Err` if `doc` is not well-formed
    pub fn from_text(doc: &str) -> DtoResult<Self> {
        XmlElements::parse(doc).map(Self)
    }

    /// The root element and its direct children
    #[must_use]
    pub fn elements(&self) -> &XmlElements {
        &self.0
    }
}

impl WireDocument for XmlDocument {
    fn parse(body: &[u8]) -> DtoResult<Self> {
        Self::from_text(std::str::from_utf8(body)?)
    }
}

/// Header-only responses carry no document
impl WireDocument for () {
    fn parse(_: &[u8]) -> DtoResult<Self> {
        Ok(())
    }
}

/// A successful response: parsed body, headers and status
#[derive(Debug, Clone)]
pub struct ServiceResponse<D> {
    /// parsed body
    document: D,
    /// response headers
    headers: HeaderMap,
    /// status code
    status: StatusCode,
}

impl<D> ServiceResponse<D> {
    /// Constructs a `200 OK` response
    #[must_use]
    pub fn new(document: D, headers: HeaderMap) -> Self {
        Self {
            document,
            headers,
            status: StatusCode::OK,
        }
    }

    /// Replaces the status code
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Parsed body
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Response headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<D: WireDocument> ServiceResponse<D> {
    /// Parses the body of an HTTP response
    ///
    /// # Errors
    /// Returns an `Err` if the body is not a well-formed document
    pub fn from_http<B: AsRef<[u8]>>(response: http::Response<B>) -> DtoResult<Self> {
        let (parts, body) = response.into_parts();
        let document = D::parse(body.as_ref())?;
        Ok(Self {
            document,
            headers: parts.headers,
            status: parts.status,
        })
    }
}

/// An inbound result message
pub trait ServiceResult: Sized {
    /// Operation this result answers
    const OPERATION: &'static str;

    /// Body form the fields are read from
    type Document;

    /// Reads every known field once
    ///
    /// # Errors
    /// Returns an `Err` if a field cannot be decoded under a strict policy
    fn decode(
        response: &ServiceResponse<Self::Document>,
        decoder: &FieldDecoder,
    ) -> DtoResult<Self>;

    /// Number of fields present
    fn present_fields(&self) -> usize;

    /// Decodes a result under `config`
    ///
    /// # Errors
    /// Returns an `Err` if a field cannot be decoded under a strict policy
    fn from_response_with(
        response: &ServiceResponse<Self::Document>,
        config: &Config,
    ) -> DtoResult<Self> {
        let decoder = FieldDecoder::new(Self::OPERATION, config.decode_policy);
        let result = Self::decode(response, &decoder)?;
        debug!(
            operation = Self::OPERATION,
            fields = result.present_fields(),
            "decoded result"
        );
        Ok(result)
    }

    /// [`ServiceResult::from_response_with`] under the default config
    ///
    /// # Errors
    /// Returns an `Err` if a field cannot be decoded under a strict policy
    fn from_response(response: &ServiceResponse<Self::Document>) -> DtoResult<Self> {
        Self::from_response_with(response, &Config::default())
    }

    /// Replaces every field with the contents of `response`.
    /// On error `self` is left unchanged.
    ///
    /// # Errors
    /// Returns an `Err` if a field cannot be decoded under a strict policy
    fn assign_with(
        &mut self,
        response: &ServiceResponse<Self::Document>,
        config: &Config,
    ) -> DtoResult<()> {
        *self = Self::from_response_with(response, config)?;
        Ok(())
    }

    /// [`ServiceResult::assign_with`] under the default config
    ///
    /// # Errors
    /// Returns an `Err` if a field cannot be decoded under a strict policy
    fn assign(&mut self, response: &ServiceResponse<Self::Document>) -> DtoResult<()> {
        self.assign_with(response, &Config::default())
    }
}

/// write a JSON request body
pub(crate) fn json_payload<T: Serialize>(
    operation: &'static str,
    body: &T,
    config: &Config,
) -> DtoResult<Bytes> {
    let buf = if config.pretty_payload {
        serde_json::to_vec_pretty(body)?
    } else {
        serde_json::to_vec(body)?
    };
    debug!(operation, bytes = buf.len(), "serialized request payload");
    Ok(buf.into())
}

/// log a non-JSON request body
pub(crate) fn raw_payload(operation: &'static str, buf: Bytes) -> Bytes {
    debug!(operation, bytes = buf.len(), "serialized request payload");
    buf
}

/// count the `Some`s
macro_rules! count_present {
    ($($field:expr),* $(,)?) => {
        0_usize $(+ usize::from($field.is_some()))*
    };
}
pub(crate) use count_present;
