//! utils

pub mod xml;

pub(crate) use self::xml::{write_xml_body, XmlWriterExt};

use crate::errors::{DtoError, DtoResult};

use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serializer;

/// printed in place of sensitive field values
pub(crate) const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Renders ordered query pairs as `?k=v&k=v`, percent-encoding keys and values.
/// Returns an empty string when there are no pairs.
#[must_use]
pub fn render_query(params: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (i, (key, value)) in params.iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        out.push_str(&urlencoding::encode(key));
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}

/// insert `value` under `name` if present
pub(crate) fn insert_header(
    headers: &mut HeaderMap,
    name: HeaderName,
    value: Option<impl AsRef<str>>,
) -> DtoResult<()> {
    let value = match value {
        Some(ref value) => value.as_ref(),
        None => return Ok(()),
    };
    let value = HeaderValue::from_str(value).map_err(|source| DtoError::InvalidHeaderValue {
        name: name.as_str().to_owned(),
        source,
    })?;
    let _prev = headers.insert(name, value);
    Ok(())
}

/// serialize a float, spelling non-finite values the way AWS JSON protocols do
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn ser_opt_f64<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match *value {
        None => s.serialize_none(),
        Some(v) if v.is_nan() => s.serialize_str("NaN"),
        Some(v) if v.is_infinite() && v.is_sign_positive() => s.serialize_str("Infinity"),
        Some(v) if v.is_infinite() => s.serialize_str("-Infinity"),
        Some(v) => s.serialize_f64(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_ordered_and_encoded() {
        let params = [("partNumber", "3".to_owned()), ("uploadId", "a b/c".to_owned())];
        assert_eq!(render_query(&params), "?partNumber=3&uploadId=a%20b%2Fc");
        assert_eq!(render_query(&[]), "");
    }

    #[test]
    fn absent_header_is_not_inserted() {
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, http::header::ETAG, None::<&str>).unwrap();
        assert!(headers.is_empty());

        insert_header(&mut headers, http::header::ETAG, Some("\"e\"")).unwrap();
        assert_eq!(headers.get("etag").unwrap(), "\"e\"");
    }

    #[test]
    fn invalid_header_value_names_the_header() {
        let mut headers = HeaderMap::new();
        let err = insert_header(&mut headers, http::header::ETAG, Some("a\nb")).unwrap_err();
        assert!(err.to_string().contains("`etag`"), "{err}");
    }

    #[test]
    fn non_finite_floats_are_strings() {
        #[derive(serde::Serialize)]
        struct Threshold(#[serde(serialize_with = "ser_opt_f64")] Option<f64>);

        let render = |v| serde_json::to_string(&Threshold(v)).unwrap();
        assert_eq!(render(Some(f64::NAN)), r#""NaN""#);
        assert_eq!(render(Some(f64::INFINITY)), r#""Infinity""#);
        assert_eq!(render(Some(f64::NEG_INFINITY)), r#""-Infinity""#);
        assert_eq!(render(Some(80.0)), "80.0");
    }
}
