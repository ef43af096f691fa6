//! [`CompleteMultipartUpload`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CompleteMultipartUpload.html)

use crate::config::Config;
use crate::decode::FieldDecoder;
use crate::errors::DtoResult;
use crate::headers::{
    X_AMZ_EXPIRATION, X_AMZ_REQUEST_CHARGED, X_AMZ_REQUEST_PAYER, X_AMZ_SERVER_SIDE_ENCRYPTION,
    X_AMZ_SERVER_SIDE_ENCRYPTION_AWS_KMS_KEY_ID, X_AMZ_VERSION_ID,
};
use crate::message::{
    count_present, raw_payload, Protocol, ServiceRequest, ServiceResponse, ServiceResult,
    XmlDocument,
};
use crate::types::{RequestCharged, RequestPayer, ServerSideEncryption};
use crate::utils::{insert_header, write_xml_body, XmlWriterExt, REDACTED};

use std::fmt::{self, Debug};

use bytes::Bytes;
use http::HeaderMap;

/// namespace of S3 request documents
const S3_XMLNS: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// A part that was uploaded, identified by its number and entity tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedPart {
    /// Entity tag returned when the part was uploaded.
    pub(crate) e_tag: Option<String>,
    /// Part number that identifies the part.
    pub(crate) part_number: Option<i32>,
}

impl CompletedPart {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> CompletedPartBuilder {
        CompletedPartBuilder::default()
    }

    /// `ETag`
    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// `PartNumber`
    #[must_use]
    pub fn part_number(&self) -> Option<i32> {
        self.part_number
    }
}

/// Builder of [`CompletedPart`]
#[derive(Debug, Clone, Default)]
pub struct CompletedPartBuilder {
    /// fields set so far
    inner: CompletedPart,
}

impl CompletedPartBuilder {
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

    /// Finishes the part
    #[must_use]
    pub fn build(self) -> CompletedPart {
        self.inner
    }
}

/// The parts that make up the completed object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedMultipartUpload {
    /// Parts in ascending part number order.
    pub(crate) parts: Option<Vec<CompletedPart>>,
}

impl CompletedMultipartUpload {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> CompletedMultipartUploadBuilder {
        CompletedMultipartUploadBuilder::default()
    }

    /// `Part` list
    #[must_use]
    pub fn parts(&self) -> Option<&[CompletedPart]> {
        self.parts.as_deref()
    }
}

/// Builder of [`CompletedMultipartUpload`]
#[derive(Debug, Clone, Default)]
pub struct CompletedMultipartUploadBuilder {
    /// fields set so far
    inner: CompletedMultipartUpload,
}

impl CompletedMultipartUploadBuilder {
    /// Appends one part
    #[must_use]
    pub fn parts(mut self, input: CompletedPart) -> Self {
        self.inner.parts.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces or clears the part list
    #[must_use]
    pub fn set_parts(mut self, input: Option<Vec<CompletedPart>>) -> Self {
        self.inner.parts = input;
        self
    }

    /// Finishes the upload description
    #[must_use]
    pub fn build(self) -> CompletedMultipartUpload {
        self.inner
    }
}

/// `CompleteMultipartUploadRequest`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteMultipartUploadRequest {
    /// Name of the bucket to which the multipart upload was initiated.
    pub(crate) bucket: Option<String>,
    /// Object key for which the multipart upload was initiated.
    pub(crate) key: Option<String>,
    /// The container for the multipart upload request information.
    pub(crate) multipart_upload: Option<CompletedMultipartUpload>,
    /// ID for the initiated multipart upload.
    pub(crate) upload_id: Option<String>,
    /// Confirms that the requester knows that they will be charged for the request.
    pub(crate) request_payer: Option<RequestPayer>,
}

impl CompleteMultipartUploadRequest {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> CompleteMultipartUploadRequestBuilder {
        CompleteMultipartUploadRequestBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> CompleteMultipartUploadRequestBuilder {
        CompleteMultipartUploadRequestBuilder { inner: self }
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Object key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The parts to assemble.
    #[must_use]
    pub fn multipart_upload(&self) -> Option<&CompletedMultipartUpload> {
        self.multipart_upload.as_ref()
    }

    /// Multipart upload ID.
    #[must_use]
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    /// Request payer confirmation.
    #[must_use]
    pub fn request_payer(&self) -> Option<&RequestPayer> {
        self.request_payer.as_ref()
    }
}

/// Builder of [`CompleteMultipartUploadRequest`]
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadRequestBuilder {
    /// fields set so far
    inner: CompleteMultipartUploadRequest,
}

impl CompleteMultipartUploadRequestBuilder {
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

    /// Sets `MultipartUpload`
    #[must_use]
    pub fn multipart_upload(mut self, input: CompletedMultipartUpload) -> Self {
        self.inner.multipart_upload = Some(input);
        self
    }

    /// Sets or clears `MultipartUpload`
    #[must_use]
    pub fn set_multipart_upload(mut self, input: Option<CompletedMultipartUpload>) -> Self {
        self.inner.multipart_upload = input;
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
    pub fn build(self) -> CompleteMultipartUploadRequest {
        self.inner
    }
}

impl ServiceRequest for CompleteMultipartUploadRequest {
    const SERVICE_REQUEST_NAME: &'static str = "CompleteMultipartUpload";
    const PROTOCOL: Protocol = Protocol::RestXml;

    /// `CompleteMultipartUpload` document, empty if `multipart_upload` is unset
    fn serialize_payload_with(&self, _: &Config) -> DtoResult<Bytes> {
        let upload = match self.multipart_upload {
            Some(ref upload) => upload,
            None => return Ok(raw_payload(Self::SERVICE_REQUEST_NAME, Bytes::new())),
        };
        let parts = upload.parts().unwrap_or_default();

        let body = write_xml_body(64 + parts.len() * 96, |w| {
            w.stack_ns("CompleteMultipartUpload", S3_XMLNS, |w| {
                for part in parts {
                    w.stack("Part", |w| {
                        w.opt_element("ETag", part.e_tag())?;
                        w.opt_element("PartNumber", part.part_number())
                    })?;
                }
                Ok(())
            })
        })?;
        Ok(raw_payload(Self::SERVICE_REQUEST_NAME, body.into()))
    }

    fn request_specific_headers(&self) -> DtoResult<HeaderMap> {
        let mut headers = Self::PROTOCOL.routing_headers(Self::SERVICE_REQUEST_NAME)?;
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
        self.upload_id
            .iter()
            .map(|id| ("uploadId", id.clone()))
            .collect()
    }
}

/// `CompleteMultipartUploadResult`
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CompleteMultipartUploadResult {
    /// The URI that identifies the newly created object.
    pub(crate) location: Option<String>,
    /// The name of the bucket that contains the newly created object.
    pub(crate) bucket: Option<String>,
    /// The object key of the newly created object.
    pub(crate) key: Option<String>,
    /// Expiration rule of the object, if one applies.
    pub(crate) expiration: Option<String>,
    /// Entity tag that identifies the newly created object's data.
    pub(crate) e_tag: Option<String>,
    /// The server-side encryption algorithm used when storing this object.
    pub(crate) server_side_encryption: Option<ServerSideEncryption>,
    /// Version ID of the newly created object, in case the bucket has versioning turned on.
    pub(crate) version_id: Option<String>,
    /// ID of the KMS key that was used for the object.
    pub(crate) ssekms_key_id: Option<String>,
    /// Present if the requester was charged.
    pub(crate) request_charged: Option<RequestCharged>,
}

impl CompleteMultipartUploadResult {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> CompleteMultipartUploadResultBuilder {
        CompleteMultipartUploadResultBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> CompleteMultipartUploadResultBuilder {
        CompleteMultipartUploadResultBuilder { inner: self }
    }

    /// `Location`
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// `Bucket`
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// `Key`
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// `x-amz-expiration`
    #[must_use]
    pub fn expiration(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    /// `ETag`
    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// `x-amz-server-side-encryption`
    #[must_use]
    pub fn server_side_encryption(&self) -> Option<&ServerSideEncryption> {
        self.server_side_encryption.as_ref()
    }

    /// `x-amz-version-id`
    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
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

impl Debug for CompleteMultipartUploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("CompleteMultipartUploadResult");
        formatter.field("location", &self.location);
        formatter.field("bucket", &self.bucket);
        formatter.field("key", &self.key);
        formatter.field("expiration", &self.expiration);
        formatter.field("e_tag", &self.e_tag);
        formatter.field("server_side_encryption", &self.server_side_encryption);
        formatter.field("version_id", &self.version_id);
        formatter.field(
            "ssekms_key_id",
            &self.ssekms_key_id.as_ref().map(|_| REDACTED),
        );
        formatter.field("request_charged", &self.request_charged);
        formatter.finish()
    }
}

/// Builder of [`CompleteMultipartUploadResult`]
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadResultBuilder {
    /// fields set so far
    inner: CompleteMultipartUploadResult,
}

impl CompleteMultipartUploadResultBuilder {
    /// Sets `Location`
    #[must_use]
    pub fn location(mut self, input: impl Into<String>) -> Self {
        self.inner.location = Some(input.into());
        self
    }

    /// Sets or clears `Location`
    #[must_use]
    pub fn set_location(mut self, input: Option<String>) -> Self {
        self.inner.location = input;
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

    /// Sets `Expiration`
    #[must_use]
    pub fn expiration(mut self, input: impl Into<String>) -> Self {
        self.inner.expiration = Some(input.into());
        self
    }

    /// Sets or clears `Expiration`
    #[must_use]
    pub fn set_expiration(mut self, input: Option<String>) -> Self {
        self.inner.expiration = input;
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

    /// Sets `VersionId`
    #[must_use]
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.inner.version_id = Some(input.into());
        self
    }

    /// Sets or clears `VersionId`
    #[must_use]
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.inner.version_id = input;
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
    pub fn build(self) -> CompleteMultipartUploadResult {
        self.inner
    }
}

impl ServiceResult for CompleteMultipartUploadResult {
    const OPERATION: &'static str = "CompleteMultipartUpload";
    type Document = XmlDocument;

    fn decode(
        response: &ServiceResponse<XmlDocument>,
        decoder: &FieldDecoder,
    ) -> DtoResult<Self> {
        let body = response.document().elements();
        let headers = response.headers();
        Ok(Self {
            location: decoder.element(body, "Location")?,
            bucket: decoder.element(body, "Bucket")?,
            key: decoder.element(body, "Key")?,
            expiration: decoder.header(headers, &X_AMZ_EXPIRATION)?,
            e_tag: decoder.element(body, "ETag")?,
            server_side_encryption: decoder.header(headers, &X_AMZ_SERVER_SIDE_ENCRYPTION)?,
            version_id: decoder.header(headers, &X_AMZ_VERSION_ID)?,
            ssekms_key_id: decoder.header(headers, &X_AMZ_SERVER_SIDE_ENCRYPTION_AWS_KMS_KEY_ID)?,
            request_charged: decoder.header(headers, &X_AMZ_REQUEST_CHARGED)?,
        })
    }

    fn present_fields(&self) -> usize {
        count_present!(
            self.location,
            self.bucket,
            self.key,
            self.expiration,
            self.e_tag,
            self.server_side_encryption,
            self.version_id,
            self.ssekms_key_id,
            self.request_charged,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DtoError;
    use crate::message::WireDocument;

    fn part(e_tag: &str, part_number: i32) -> CompletedPart {
        CompletedPart::builder()
            .e_tag(e_tag)
            .part_number(part_number)
            .build()
    }

    #[test]
    fn body_lists_the_parts() {
        let upload = CompletedMultipartUpload::builder()
            .parts(part("etag-1", 1))
            .parts(part("etag-2", 2))
            .build();
        let req = CompleteMultipartUploadRequest::builder()
            .bucket("photos")
            .key("cat.jpg")
            .upload_id("up-1")
            .multipart_upload(upload)
            .build();

        let body = String::from_utf8(req.serialize_payload().unwrap().to_vec()).unwrap();
        assert!(
            body.contains(
                r#"<CompleteMultipartUpload xmlns="http://s3.amazonaws.com/doc/2006-03-01/">"#
            ),
            "{body}"
        );
        assert!(
            body.contains(
                "<Part><ETag>etag-1</ETag><PartNumber>1</PartNumber></Part>\
                 <Part><ETag>etag-2</ETag><PartNumber>2</PartNumber></Part>"
            ),
            "{body}"
        );

        let doc = XmlDocument::parse(body.as_bytes()).unwrap();
        assert_eq!(doc.elements().root(), "CompleteMultipartUpload");
        assert_eq!(doc.elements().len(), 2);

        assert_eq!(req.render_query(), "?uploadId=up-1");
        assert!(req.request_specific_headers().unwrap().is_empty());
    }

    #[test]
    fn unset_part_fields_are_omitted() {
        let upload = CompletedMultipartUpload::builder()
            .parts(CompletedPart::builder().part_number(4).build())
            .build();
        let req = CompleteMultipartUploadRequest::builder()
            .multipart_upload(upload)
            .request_payer(RequestPayer::Requester)
            .build();

        let body = String::from_utf8(req.serialize_payload().unwrap().to_vec()).unwrap();
        assert!(body.contains("<Part><PartNumber>4</PartNumber></Part>"), "{body}");
        assert!(!body.contains("ETag"), "{body}");

        let headers = req.request_specific_headers().unwrap();
        assert_eq!(headers.get("x-amz-request-payer").unwrap(), "requester");
    }

    #[test]
    fn no_upload_no_body() {
        let req = CompleteMultipartUploadRequest::builder()
            .bucket("b")
            .key("k")
            .build();
        assert!(req.serialize_payload().unwrap().is_empty());
        assert!(req.query_string_parameters().is_empty());
    }

    #[test]
    fn result_reads_body_and_headers() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
<CompleteMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
    <Location>https://photos.s3.amazonaws.com/cat.jpg</Location>
    <Bucket>photos</Bucket>
    <Key>cat.jpg</Key>
    <ETag>"3858f62230ac3c915f300c664312c11f-9"</ETag>
</CompleteMultipartUploadResult>"#;
        let response = http::Response::builder()
            .header("x-amz-version-id", "v-3")
            .header("x-amz-server-side-encryption", "AES256")
            .body(&body[..])
            .unwrap();
        let response = ServiceResponse::<XmlDocument>::from_http(response).unwrap();

        let result = CompleteMultipartUploadResult::from_response(&response).unwrap();
        assert_eq!(result.location(), Some("https://photos.s3.amazonaws.com/cat.jpg"));
        assert_eq!(result.bucket(), Some("photos"));
        assert_eq!(result.key(), Some("cat.jpg"));
        assert_eq!(result.e_tag(), Some("\"3858f62230ac3c915f300c664312c11f-9\""));
        assert_eq!(result.version_id(), Some("v-3"));
        assert_eq!(result.server_side_encryption(), Some(&ServerSideEncryption::Aes256));
        assert_eq!(result.expiration(), None);
        assert_eq!(result.request_charged(), None);
        assert_eq!(result.present_fields(), 6);
    }

    #[test]
    fn empty_body_yields_header_fields_only() {
        let mut headers = HeaderMap::new();
        let _prev = headers.insert(X_AMZ_REQUEST_CHARGED, "requester".parse().unwrap());
        let response = ServiceResponse::new(XmlDocument::parse(b"").unwrap(), headers);

        let result = CompleteMultipartUploadResult::from_response(&response).unwrap();
        assert_eq!(result.location(), None);
        assert_eq!(result.request_charged(), Some(&RequestCharged::Requester));
    }

    #[test]
    fn body_values_keep_their_whitespace() {
        let body = b"<CompleteMultipartUploadResult>\n  <Bucket>photos</Bucket>\n  <Key>photo </Key>\n  <ETag> </ETag>\n</CompleteMultipartUploadResult>";
        let response = ServiceResponse::new(XmlDocument::parse(body).unwrap(), HeaderMap::new());

        let decoded = CompleteMultipartUploadResult::from_response(&response).unwrap();
        let built = CompleteMultipartUploadResult::builder()
            .bucket("photos")
            .key("photo ")
            .e_tag(" ")
            .build();
        assert_eq!(decoded, built);
        assert_eq!(decoded.key(), Some("photo "));
    }

    #[test]
    fn truncated_body_is_rejected() {
        let body = b"<CompleteMultipartUploadResult><Bucket>photos</Bucket><Key>cat.jpg</Key>";
        assert!(matches!(XmlDocument::parse(body), Err(DtoError::Xml(_))));
    }

    #[test]
    fn built_result_redacts_kms_key() {
        let result = CompleteMultipartUploadResult::builder()
            .location("https://photos.s3.amazonaws.com/cat.jpg")
            .ssekms_key_id("arn:aws:kms:us-east-1:1:key/k")
            .version_id("v-1")
            .build();
        assert_eq!(result.present_fields(), 3);

        let debug = format!("{result:?}");
        assert!(!debug.contains("key/k"), "{debug}");
        assert!(debug.contains(REDACTED), "{debug}");

        let result = result.into_builder().set_version_id(None).build();
        assert_eq!(result.version_id(), None);
        assert_eq!(result.location(), Some("https://photos.s3.amazonaws.com/cat.jpg"));
    }
}
