//! One module per operation: request, result and their nested structures

pub mod associate_role_to_group;
pub mod complete_multipart_upload;
pub mod search_faces;
pub mod upload_part;
