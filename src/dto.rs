//! AWS data transfer objects

pub use crate::message::{
    JsonDocument, Protocol, ServiceRequest, ServiceResponse, ServiceResult, WireDocument,
    XmlDocument,
};
pub use crate::ops::associate_role_to_group::{
    AssociateRoleToGroupRequest, AssociateRoleToGroupRequestBuilder, AssociateRoleToGroupResult,
    AssociateRoleToGroupResultBuilder,
};
pub use crate::ops::complete_multipart_upload::{
    CompleteMultipartUploadRequest, CompleteMultipartUploadRequestBuilder,
    CompleteMultipartUploadResult, CompleteMultipartUploadResultBuilder, CompletedMultipartUpload,
    CompletedMultipartUploadBuilder, CompletedPart, CompletedPartBuilder,
};
pub use crate::ops::search_faces::{
    BoundingBox, BoundingBoxBuilder, Face, FaceBuilder, FaceMatch, FaceMatchBuilder,
    SearchFacesRequest, SearchFacesRequestBuilder, SearchFacesResult, SearchFacesResultBuilder,
};
pub use crate::ops::upload_part::{
    UploadPartRequest, UploadPartRequestBuilder, UploadPartResult, UploadPartResultBuilder,
};
pub use crate::types::{Blob, RequestCharged, RequestPayer, ServerSideEncryption};
