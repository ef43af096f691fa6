//! Header names bound to message fields

use http::HeaderName;

pub use http::header::{CONTENT_LENGTH, ETAG};

/// `X-Amz-Target`, the operation routing header of `awsJson` protocols
pub const X_AMZ_TARGET: HeaderName = HeaderName::from_static("x-amz-target");

/// `Content-MD5`
pub const CONTENT_MD5: HeaderName = HeaderName::from_static("content-md5");

/// `x-amz-server-side-encryption`
pub const X_AMZ_SERVER_SIDE_ENCRYPTION: HeaderName =
    HeaderName::from_static("x-amz-server-side-encryption");

/// `x-amz-server-side-encryption-customer-algorithm`
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM: HeaderName =
    HeaderName::from_static("x-amz-server-side-encryption-customer-algorithm");

/// `x-amz-server-side-encryption-customer-key`
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY: HeaderName =
    HeaderName::from_static("x-amz-server-side-encryption-customer-key");

/// `x-amz-server-side-encryption-customer-key-MD5`
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5: HeaderName =
    HeaderName::from_static("x-amz-server-side-encryption-customer-key-md5");

/// `x-amz-server-side-encryption-aws-kms-key-id`
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_AWS_KMS_KEY_ID: HeaderName =
    HeaderName::from_static("x-amz-server-side-encryption-aws-kms-key-id");

/// `x-amz-request-charged`
pub const X_AMZ_REQUEST_CHARGED: HeaderName = HeaderName::from_static("x-amz-request-charged");

/// `x-amz-request-payer`
pub const X_AMZ_REQUEST_PAYER: HeaderName = HeaderName::from_static("x-amz-request-payer");

/// `x-amz-expiration`
pub const X_AMZ_EXPIRATION: HeaderName = HeaderName::from_static("x-amz-expiration");

/// `x-amz-version-id`
pub const X_AMZ_VERSION_ID: HeaderName = HeaderName::from_static("x-amz-version-id");
