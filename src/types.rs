//! Shared field types: wire enums and blobs

use crate::decode::FromWire;
use crate::errors::FieldErrorKind;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Serialize, Serializer};

/// Declares a string-valued enum whose unrecognized wire names are preserved
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this crate does not know, kept verbatim
            Unknown(String),
        }

        impl $name {
            /// Returns the wire-format string
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// All known values
            #[must_use]
            pub const fn values() -> &'static [&'static str] {
                &[$($wire),+]
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl FromWire for $name {
            fn from_text(text: &str) -> Result<Self, FieldErrorKind> {
                Ok(Self::from(text))
            }
        }
    };
}

wire_enum! {
    /// Server-side encryption algorithm used when storing an object
    pub enum ServerSideEncryption {
        /// `AES256`
        Aes256 => "AES256",
        /// `aws:kms`
        AwsKms => "aws:kms",
    }
}

wire_enum! {
    /// Confirms that the requester was charged for the request
    pub enum RequestCharged {
        /// `requester`
        Requester => "requester",
    }
}

wire_enum! {
    /// Confirms that the requester knows they will be charged for the request
    pub enum RequestPayer {
        /// `requester`
        Requester => "requester",
    }
}

/// An opaque binary payload
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Bytes);

impl Blob {
    /// Wraps `data`
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    /// Byte length
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the blob has no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying bytes
    #[must_use]
    pub fn into_inner(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for Blob {
    fn from(data: Bytes) -> Self {
        Self(data)
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self(data.into())
    }
}

impl From<&'static [u8]> for Blob {
    fn from(data: &'static [u8]) -> Self {
        Self(Bytes::from_static(data))
    }
}

impl From<String> for Blob {
    fn from(data: String) -> Self {
        Self(data.into())
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_wire_names() {
        assert_eq!(ServerSideEncryption::from("aws:kms"), ServerSideEncryption::AwsKms);
        assert_eq!(ServerSideEncryption::Aes256.as_str(), "AES256");

        let other: ServerSideEncryption = "aws:kms:dsse".parse().unwrap();
        assert_eq!(other, ServerSideEncryption::Unknown("aws:kms:dsse".to_owned()));
        assert_eq!(other.to_string(), "aws:kms:dsse");

        assert_eq!(RequestPayer::values(), &["requester"]);
    }

    #[test]
    fn enums_serialize_as_wire_names() {
        let json = serde_json::to_string(&RequestCharged::Requester).unwrap();
        assert_eq!(json, r#""requester""#);
    }

    #[test]
    fn blob_debug_hides_contents() {
        let blob = Blob::from(&b"secret"[..]);
        assert_eq!(format!("{blob:?}"), "Blob(6 bytes)");
        assert_eq!(blob.len(), 6);
    }
}
