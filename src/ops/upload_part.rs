//! [`UploadPart`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_UploadPart.html)

use crate::config::Config;
use crate::decode::FieldDecoder;
use crate::errors::DtoResult;
use crate::headers::{
    CONTENT_LENGTH, CONTENT_MD5, ETAG, X_AMZ_REQUEST_CHARGED, X_AMZ_REQUEST_PAYER,
    X_AMZ_SERVER_SIDE_ENCRYPTION, X_AMZ_SERVER_SIDE_ENCRYPTION_AWS_KMS_KEY_ID,
    X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM, X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY,
    X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5,
};
use crate::message::{
    count_present, raw_payload, Protocol, ServiceRequest, ServiceResponse, ServiceResult,
};
use crate::types::{Blob, RequestCharged, RequestPayer, ServerSideEncryption};
use crate::utils::{insert_header, REDACTED};

use std::fmt::{self, Debug};

use base64::Engine;
use bytes::Bytes;
use http::HeaderMap;
use md5::{Digest, Md5};

/// `UploadPartRequest`
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadPartRequest {
    /// Object data.
    pub(crate) body: Option<Blob>,
    /// The name of the bucket to which the multipart upload was initiated.
    pub(crate) bucket: Option<String>,
    /// Size of the body in bytes.
    pub(crate) content_length: Option<i64>,
    /// The base64-encoded 128-bit MD5 digest of the part data.
    pub(crate) content_md5: Option<String>,
    /// Object key for which the multipart upload was initiated.
    pub(crate) key: Option<String>,
    /// Part number of part being uploaded, between 1 and 10,000.
    pub(crate) part_number: Option<i32>,
    /// Upload ID identifying the multipart upload whose part is being uploaded.
    pub(crate) upload_id: Option<String>,
    /// Algorithm used to encrypt the object, for example `AES256`.
    pub(crate) sse_customer_algorithm: Option<String>,
    /// Customer-provided encryption key.
    pub(crate) sse_customer_key: Option<String>,
    /// 128-bit MD5 digest of the encryption key.
    pub(crate) sse_customer_key_md5: Option<String>,
    /// Confirms that the requester knows that they will be charged for the request.
    pub(crate) request_payer: Option<RequestPayer>,
}

impl UploadPartRequest {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> UploadPartRequestBuilder {
        UploadPartRequestBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> UploadPartRequestBuilder {
        UploadPartRequestBuilder { inner: self }
    }

    /// Object data.
    #[must_use]
    pub fn body(&self) -> Option<&Blob> {
        self.body.as_ref()
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Size of the body in bytes.
    #[must_use]
    pub fn content_length(&self) -> Option<i64> {
        self.content_length
    }

    /// Base64 MD5 digest of the part data.
    #[must_use]
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    /// Object key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Part number.
    #[must_use]
    pub fn part_number(&self) -> Option<i32> {
        self.part_number
    }

    /// Multipart upload ID.
    #[must_use]
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    /// SSE-C algorithm.
    #[must_use]
    pub fn sse_customer_algorithm(&self) -> Option<&str> {
        self.sse_customer_algorithm.as_deref()
    }

    /// SSE-C key.
    #[must_use]
    pub fn sse_customer_key(&self) -> Option<&str> {
        self.sse_customer_key.as_deref()
    }

    /// SSE-C key MD5.
    #[must_use]
    pub fn sse_customer_key_md5(&self) -> Option<&str> {
        self.sse_customer_key_md5.as_deref()
    }

    /// Request payer confirmation.
    #[must_use]
    pub fn request_payer(&self) -> Option<&RequestPayer> {
        self.request_payer.as_ref()
    }
}

impl Debug for UploadPartRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("UploadPartRequest");
        formatter.field("body", &self.body);
        formatter.field("bucket", &self.bucket);
        formatter.field("content_length", &self.content_length);
        formatter.field("content_md5", &self.content_md5);
        formatter.field("key", &self.key);
        formatter.field("part_number", &self.part_number);
        formatter.field("upload_id", &self.upload_id);
        formatter.field("sse_customer_algorithm", &self.sse_customer_algorithm);
        formatter.field(
            "sse_customer_key",
            &self.sse_customer_key.as_ref().map(|_| REDACTED),
        );
        formatter.field("sse_customer_key_md5", &self.sse_customer_key_md5);
        formatter.field("request_payer", &self.request_payer);
        formatter.finish()
    }
}

/// Builder of [`UploadPartRequest`]
#[derive(Debug, Clone, Default)]
pub struct UploadPartRequestBuilder {
    /// fields set so far
    inner: UploadPartRequest,
}

impl UploadPartRequestBuilder {
    /// Sets `Body`
    #[must_use]
    pub fn body(mut self, input: impl Into<Blob>) -> Self {
        self.inner.body = Some(input.into());
        self
    }

    /// Sets or clears `Body`
    #[must_use]
    pub fn set_body(mut self, input: Option<Blob>) -> Self {
        self.inner.body = input;
        self
    }

    /// Sets `Bucket`
    #[must_use]
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner.bucket = Some(input.into());
        self
    }

    /// Sets or clears `Bucket`
    #[must_use]
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner.bucket = input;
        self
    }

    /// Sets `Content-Length`
    #[must_use]
    pub fn content_length(mut self, input: i64) -> Self {
        self.inner.content_length = Some(input);
        self
    }

    /// Sets or clears `Content-Length`
    #[must_use]
    pub fn set_content_length(mut self, input: Option<i64>) -> Self {
        self.inner.content_length = input;
        self
    }

    /// Sets `Content-MD5`
    #[must_use]
    pub fn content_md5(mut self, input: impl Into<String>) -> Self {
        self.inner.content_md5 = Some(input.into());
        self
    }

    /// Sets or clears `Content-MD5`
    #[must_use]
    pub fn set_content_md5(mut self, input: Option<String>) -> Self {
        self.inner.content_md5 = input;
        self
    }

    /// Sets `Content-MD5` to the base64 MD5 digest of the current body.
    /// An unset body digests as empty.
    #[must_use]
    pub fn compute_content_md5(mut self) -> Self {
        let body = self.inner.body.as_ref().map_or(&[][..], AsRef::as_ref);
        let digest = Md5::digest(body);
        self.inner.content_md5 = Some(base64::engine::general_purpose::STANDARD.encode(digest));
        self
    }

    /// Sets `Key`
    #[must_use]
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner.key = Some(input.into());
        self
    }

    /// Sets or clears `Key`
    #[must_use]
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner.key = input;
        self
    }

    /// Sets `PartNumber`
    #[must_use]
    pub fn part_number(mut self, input: i32) -> Self {
        self.inner.part_number = Some(input);
        self
    }

    /// Sets or clears `PartNumber`
    #[must_use]
    pub fn set_part_number(mut self, input: Option<i32>) -> Self {
        self.inner.part_number = input;
        self
    }

    /// Sets `UploadId`
    #[must_use]
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.inner.upload_id = Some(input.into());
        self
    }

    /// Sets or clears `UploadId`
    #[must_use]
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.inner.upload_id = input;
        self
    }

    /// Sets `SSECustomerAlgorithm`
    #[must_use]
    pub fn sse_customer_algorithm(mut self, input: impl Into<String>) -> Self {
        self.inner.sse_customer_algorithm = Some(input.into());
        self
    }

    /// Sets or clears `SSECustomerAlgorithm`
    #[must_use]
    pub fn set_sse_customer_algorithm(mut self, input: Option<String>) -> Self {
        self.inner.sse_customer_algorithm = input;
        self
    }

    /// Sets `SSECustomerKey`
    #[must_use]
    pub fn sse_customer_key(mut self, input: impl Into<String>) -> Self {
        self.inner.sse_customer_key = Some(input.into());
        self
    }

    /// Sets or clears `SSECustomerKey`
    #[must_use]
    pub fn set_sse_customer_key(mut self, input: Option<String>) -> Self {
        self.inner.sse_customer_key = input;
        self
    }

    /// Sets `SSECustomerKeyMD5`
    #[must_use]
    pub fn sse_customer_key_md5(mut self, input: impl Into<String>) -> Self {
        self.inner.sse_customer_key_md5 = Some(input.into());
        self
    }

    /// Sets or clears `SSECustomerKeyMD5`
    #[must_use]
    pub fn set_sse_customer_key_md5(mut self, input: Option<String>) -> Self {
        self.inner.sse_customer_key_md5 = input;
        self
    }

    /// Sets `RequestPayer`
    #[must_use]
    pub fn request_payer(mut self, input: impl Into<RequestPayer>) -> Self {
        self.inner.request_payer = Some(input.into());
        self
    }

    /// Sets or clears `RequestPayer`
    #[must_use]
    pub fn set_request_payer(mut self, input: Option<RequestPayer>) -> Self {
        self.inner.request_payer = input;
        self
    }

    /// Finishes the request
    #[must_use]
    pub fn build(self) -> UploadPartRequest {
        self.inner
    }
}

impl ServiceRequest for UploadPartRequest {
    const SERVICE_REQUEST_NAME: &'static str = "UploadPart";
    const PROTOCOL: Protocol = Protocol::RestXml;

    /// The body blob, verbatim
    fn serialize_payload_with(&self, _: &Config) -> DtoResult<Bytes> {
        let body = self.body.clone().map(Blob::into_inner).unwrap_or_default();
        Ok(raw_payload(Self::SERVICE_REQUEST_NAME, body))
    }

    fn request_specific_headers(&self) -> DtoResult<HeaderMap> {
        let mut headers = Self::PROTOCOL.routing_headers(Self::SERVICE_REQUEST_NAME)?;
        insert_header(
            &mut headers,
            CONTENT_LENGTH,
            self.content_length.map(|n| n.to_string()),
        )?;
        insert_header(&mut headers, CONTENT_MD5, self.content_md5())?;
        insert_header(
            &mut headers,
            X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM,
            self.sse_customer_algorithm(),
        )?;
        insert_header(
            &mut headers,
            X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY,
            self.sse_customer_key(),
        )?;
        insert_header(
            &mut headers,
            X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5,
            self.sse_customer_key_md5(),
        )?;
        insert_header(&mut headers, X_AMZ_REQUEST_PAYER, self.request_payer())?;
        Ok(headers)
    }

    fn path_labels(&self) -> Vec<(&'static str, String)> {
        let mut labels = Vec::with_capacity(2);
        if let Some(ref bucket) = self.bucket {
            labels.push(("Bucket", bucket.clone()));
        }
        if let Some(ref key) = self.key {
            labels.push(("Key", key.clone()));
        }
        labels
    }

    fn query_string_parameters(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(part_number) = self.part_number {
            params.push(("partNumber", part_number.to_string()));
        }
        if let Some(ref upload_id) = self.upload_id {
            params.push(("uploadId", upload_id.clone()));
        }
        params
    }
}

/// `UploadPartResult`
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadPartResult {
    /// The server-side encryption algorithm used when storing this object.
    pub(crate) server_side_encryption: Option<ServerSideEncryption>,
    /// Entity tag for the uploaded object.
    pub(crate) e_tag: Option<String>,
    /// SSE-C algorithm confirmed by the service.
    pub(crate) sse_customer_algorithm: Option<String>,
    /// SSE-C key MD5 confirmed by the service.
    pub(crate) sse_customer_key_md5: Option<String>,
    /// ID of the KMS key that was used for the object.
    pub(crate) ssekms_key_id: Option<String>,
    /// Present if the requester was charged.
    pub(crate) request_charged: Option<RequestCharged>,
}

impl UploadPartResult {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> UploadPartResultBuilder {
        UploadPartResultBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> UploadPartResultBuilder {
        UploadPartResultBuilder { inner: self }
    }

    /// `x-amz-server-side-encryption`
    #[must_use]
    pub fn server_side_encryption(&self) -> Option<&ServerSideEncryption> {
        self.server_side_encryption.as_ref()
    }

    /// `ETag`
    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// `x-amz-server-side-encryption-customer-algorithm`
    #[must_use]
    pub fn sse_customer_algorithm(&self) -> Option<&str> {
        self.sse_customer_algorithm.as_deref()
    }

    /// `x-amz-server-side-encryption-customer-key-MD5`
    #[must_use]
    pub fn sse_customer_key_md5(&self) -> Option<&str> {
        self.sse_customer_key_md5.as_deref()
    }

    /// `x-amz-server-side-encryption-aws-kms-key-id`
    #[must_use]
    pub fn ssekms_key_id(&self) -> Option<&str> {
        self.ssekms_key_id.as_deref()
    }

    /// `x-amz-request-charged`
    #[must_use]
    pub fn request_charged(&self) -> Option<&RequestCharged> {
        self.request_charged.as_ref()
    }
}

impl Debug for UploadPartResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("UploadPartResult");
        formatter.field("server_side_encryption", &self.server_side_encryption);
        formatter.field("e_tag", &self.e_tag);
        formatter.field("sse_customer_algorithm", &self.sse_customer_algorithm);
        formatter.field("sse_customer_key_md5", &self.sse_customer_key_md5);
        formatter.field(
            "ssekms_key_id",
            &self.ssekms_key_id.as_ref().map(|_| REDACTED),
        );
        formatter.field("request_charged", &self.request_charged);
        formatter.finish()
    }
}

/// Builder of [`UploadPartResult`]
#[derive(Debug, Clone, Default)]
pub struct UploadPartResultBuilder {
    /// fields set so far
    inner: UploadPartResult,
}

impl UploadPartResultBuilder {
    /// Sets `ServerSideEncryption`
    #[must_use]
    pub fn server_side_encryption(mut self, input: impl Into<ServerSideEncryption>) -> Self {
        self.inner.server_side_encryption = Some(input.into());
        self
    }

    /// Sets or clears `ServerSideEncryption`
    #[must_use]
    pub fn set_server_side_encryption(mut self, input: Option<ServerSideEncryption>) -> Self {
        self.inner.server_side_encryption = input;
        self
    }

    /// Sets `ETag`
    #[must_use]
    pub fn e_tag(mut self, input: impl Into<String>) -> Self {
        self.inner.e_tag = Some(input.into());
        self
    }

    /// Sets or clears `ETag`
    #[must_use]
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.inner.e_tag = input;
        self
    }

    /// Sets `SSECustomerAlgorithm`
    #[must_use]
    pub fn sse_customer_algorithm(mut self, input: impl Into<String>) -> Self {
        self.inner.sse_customer_algorithm = Some(input.into());
        self
    }

    /// Sets or clears `SSECustomerAlgorithm`
    #[must_use]
    pub fn set_sse_customer_algorithm(mut self, input: Option<String>) -> Self {
        self.inner.sse_customer_algorithm = input;
        self
    }

    /// Sets `SSECustomerKeyMD5`
    #[must_use]
    pub fn sse_customer_key_md5(mut self, input: impl Into<String>) -> Self {
        self.inner.sse_customer_key_md5 = Some(input.into());
        self
    }

    /// Sets or clears `SSECustomerKeyMD5`
    #[must_use]
    pub fn set_sse_customer_key_md5(mut self, input: Option<String>) -> Self {
        self.inner.sse_customer_key_md5 = input;
        self
    }

    /// Sets `SSEKMSKeyId`
    #[must_use]
    pub fn ssekms_key_id(mut self, input: impl Into<String>) -> Self {
        self.inner.ssekms_key_id = Some(input.into());
        self
    }

    /// Sets or clears `SSEKMSKeyId`
    #[must_use]
    pub fn set_ssekms_key_id(mut self, input: Option<String>) -> Self {
        self.inner.ssekms_key_id = input;
        self
    }

    /// Sets `RequestCharged`
    #[must_use]
    pub fn request_charged(mut self, input: impl Into<RequestCharged>) -> Self {
        self.inner.request_charged = Some(input.into());
        self
    }

    /// Sets or clears `RequestCharged`
    #[must_use]
    pub fn set_request_charged(mut self, input: Option<RequestCharged>) -> Self {
        self.inner.request_charged = input;
        self
    }

    /// Finishes the result
    #[must_use]
    pub fn build(self) -> UploadPartResult {
        self.inner
    }
}

impl ServiceResult for UploadPartResult {
    const OPERATION: &'static str = "UploadPart";
    type Document = ();

    fn decode(response: &ServiceResponse<()>, decoder: &FieldDecoder) -> DtoResult<Self> {
        let headers = response.headers();
        Ok(Self {
            server_side_encryption: decoder.header(headers, &X_AMZ_SERVER_SIDE_ENCRYPTION)?,
            e_tag: decoder.header(headers, &ETAG)?,
            sse_customer_algorithm: decoder
                .header(headers, &X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM)?,
            sse_customer_key_md5: decoder
                .header(headers, &X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5)?,
            ssekms_key_id: decoder.header(headers, &X_AMZ_SERVER_SIDE_ENCRYPTION_AWS_KMS_KEY_ID)?,
            request_charged: decoder.header(headers, &X_AMZ_REQUEST_CHARGED)?,
        })
    }

    fn present_fields(&self) -> usize {
        count_present!(
            self.server_side_encryption,
            self.e_tag,
            self.sse_customer_algorithm,
            self.sse_customer_key_md5,
            self.ssekms_key_id,
            self.request_charged,
        )
    }
}
