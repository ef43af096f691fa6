//! Typed request and result messages for AWS JSON and XML APIs
//!
//! Every message is a record of optional fields. A request serializes exactly
//! the fields that were set; a result is decoded once from a response body and
//! its headers, under a configurable [`DecodePolicy`](config::DecodePolicy).
//!
//! ```
//! use aws_dto::dto::{SearchFacesRequest, ServiceRequest};
//!
//! let req = SearchFacesRequest::builder()
//!     .collection_id("faces-1")
//!     .face_id("f-42")
//!     .max_faces(5)
//!     .build();
//!
//! let body = req.serialize_payload().unwrap();
//! assert_eq!(&body[..], br#"{"CollectionId":"faces-1","FaceId":"f-42","MaxFaces":5}"#);
//! ```

#![forbid(unsafe_code)]
#![deny(
    // The following are allowed by default lints according to
    // https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_const_for_fn)]

pub mod config;
pub mod decode;
pub mod dto;
pub mod errors;
pub mod headers;
pub mod message;
pub mod ops;
pub mod types;
pub mod utils;

pub use self::config::{Config, DecodePolicy};
pub use self::errors::{DtoError, DtoResult, FieldError, FieldErrorKind};
