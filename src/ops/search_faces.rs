//! [`SearchFaces`](https://docs.aws.amazon.com/rekognition/latest/APIReference/API_SearchFaces.html)

use crate::config::Config;
use crate::decode::{FieldDecoder, JsonObject, JsonStructure};
use crate::errors::DtoResult;
use crate::message::{
    count_present, json_payload, JsonDocument, Protocol, ServiceRequest, ServiceResponse,
    ServiceResult,
};
use crate::utils::ser_opt_f64;

use bytes::Bytes;
use serde::Serialize;

/// `SearchFacesRequest`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFacesRequest {
    /// ID of the collection the face belongs to.
    pub(crate) collection_id: Option<String>,
    /// ID of a face to find matches for in the collection.
    pub(crate) face_id: Option<String>,
    /// Maximum number of faces to return.
    pub(crate) max_faces: Option<i32>,
    /// Minimum confidence in the face match to return.
    pub(crate) face_match_threshold: Option<f64>,
}

impl SearchFacesRequest {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> SearchFacesRequestBuilder {
        SearchFacesRequestBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> SearchFacesRequestBuilder {
        SearchFacesRequestBuilder { inner: self }
    }

    /// ID of the collection the face belongs to.
    #[must_use]
    pub fn collection_id(&self) -> Option<&str> {
        self.collection_id.as_deref()
    }

    /// ID of a face to find matches for in the collection.
    #[must_use]
    pub fn face_id(&self) -> Option<&str> {
        self.face_id.as_deref()
    }

    /// Maximum number of faces to return.
    #[must_use]
    pub fn max_faces(&self) -> Option<i32> {
        self.max_faces
    }

    /// Minimum confidence in the face match to return.
    #[must_use]
    pub fn face_match_threshold(&self) -> Option<f64> {
        self.face_match_threshold
    }
}

/// Builder of [`SearchFacesRequest`]
#[derive(Debug, Clone, Default)]
pub struct SearchFacesRequestBuilder {
    /// fields set so far
    inner: SearchFacesRequest,
}

impl SearchFacesRequestBuilder {
    /// Sets `CollectionId`
    #[must_use]
    pub fn collection_id(mut self, input: impl Into<String>) -> Self {
        self.inner.collection_id = Some(input.into());
        self
    }

    /// Sets or clears `CollectionId`
    #[must_use]
    pub fn set_collection_id(mut self, input: Option<String>) -> Self {
        self.inner.collection_id = input;
        self
    }

    /// Sets `FaceId`
    #[must_use]
    pub fn face_id(mut self, input: impl Into<String>) -> Self {
        self.inner.face_id = Some(input.into());
        self
    }

    /// Sets or clears `FaceId`
    #[must_use]
    pub fn set_face_id(mut self, input: Option<String>) -> Self {
        self.inner.face_id = input;
        self
    }

    /// Sets `MaxFaces`
    #[must_use]
    pub fn max_faces(mut self, input: i32) -> Self {
        self.inner.max_faces = Some(input);
        self
    }

    /// Sets or clears `MaxFaces`
    #[must_use]
    pub fn set_max_faces(mut self, input: Option<i32>) -> Self {
        self.inner.max_faces = input;
        self
    }

    /// Sets `FaceMatchThreshold`
    #[must_use]
    pub fn face_match_threshold(mut self, input: f64) -> Self {
        self.inner.face_match_threshold = Some(input);
        self
    }

    /// Sets or clears `FaceMatchThreshold`
    #[must_use]
    pub fn set_face_match_threshold(mut self, input: Option<f64>) -> Self {
        self.inner.face_match_threshold = input;
        self
    }

    /// Finishes the request
    #[must_use]
    pub fn build(self) -> SearchFacesRequest {
        self.inner
    }
}

/// JSON body
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Payload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    face_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_faces: Option<i32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "ser_opt_f64"
    )]
    face_match_threshold: Option<f64>,
}

impl ServiceRequest for SearchFacesRequest {
    const SERVICE_REQUEST_NAME: &'static str = "SearchFaces";
    const PROTOCOL: Protocol = Protocol::AwsJson1_1 {
        target_prefix: "RekognitionService",
    };

    fn serialize_payload_with(&self, config: &Config) -> DtoResult<Bytes> {
        let payload = Payload {
            collection_id: self.collection_id(),
            face_id: self.face_id(),
            max_faces: self.max_faces,
            face_match_threshold: self.face_match_threshold,
        };
        json_payload(Self::SERVICE_REQUEST_NAME, &payload, config)
    }
}

/// Location of a face as ratios of the image dimensions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundingBox {
    /// Width of the bounding box as a ratio of the overall image width.
    pub(crate) width: Option<f64>,
    /// Height of the bounding box as a ratio of the overall image height.
    pub(crate) height: Option<f64>,
    /// Left coordinate of the bounding box as a ratio of overall image width.
    pub(crate) left: Option<f64>,
    /// Top coordinate of the bounding box as a ratio of overall image height.
    pub(crate) top: Option<f64>,
}

impl BoundingBox {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> BoundingBoxBuilder {
        BoundingBoxBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> BoundingBoxBuilder {
        BoundingBoxBuilder { inner: self }
    }

    /// Width ratio
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Height ratio
    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Left coordinate ratio
    #[must_use]
    pub fn left(&self) -> Option<f64> {
        self.left
    }

    /// Top coordinate ratio
    #[must_use]
    pub fn top(&self) -> Option<f64> {
        self.top
    }
}

/// Builder of [`BoundingBox`]
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    /// fields set so far
    inner: BoundingBox,
}

impl BoundingBoxBuilder {
    /// Sets `Width`
    #[must_use]
    pub fn width(mut self, input: f64) -> Self {
        self.inner.width = Some(input);
        self
    }

    /// Sets or clears `Width`
    #[must_use]
    pub fn set_width(mut self, input: Option<f64>) -> Self {
        self.inner.width = input;
        self
    }

    /// Sets `Height`
    #[must_use]
    pub fn height(mut self, input: f64) -> Self {
        self.inner.height = Some(input);
        self
    }

    /// Sets or clears `Height`
    #[must_use]
    pub fn set_height(mut self, input: Option<f64>) -> Self {
        self.inner.height = input;
        self
    }

    /// Sets `Left`
    #[must_use]
    pub fn left(mut self, input: f64) -> Self {
        self.inner.left = Some(input);
        self
    }

    /// Sets or clears `Left`
    #[must_use]
    pub fn set_left(mut self, input: Option<f64>) -> Self {
        self.inner.left = input;
        self
    }

    /// Sets `Top`
    #[must_use]
    pub fn top(mut self, input: f64) -> Self {
        self.inner.top = Some(input);
        self
    }

    /// Sets or clears `Top`
    #[must_use]
    pub fn set_top(mut self, input: Option<f64>) -> Self {
        self.inner.top = input;
        self
    }

    /// Finishes the bounding box
    #[must_use]
    pub fn build(self) -> BoundingBox {
        self.inner
    }
}

impl JsonStructure for BoundingBox {
    fn decode_json(object: &JsonObject, decoder: &FieldDecoder) -> DtoResult<Self> {
        Ok(Self {
            width: decoder.json(object, "Width")?,
            height: decoder.json(object, "Height")?,
            left: decoder.json(object, "Left")?,
            top: decoder.json(object, "Top")?,
        })
    }
}

/// A face stored in a collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    /// Unique identifier that Amazon Rekognition assigns to the face.
    pub(crate) face_id: Option<String>,
    /// Bounding box of the face.
    pub(crate) bounding_box: Option<BoundingBox>,
    /// Unique identifier that Amazon Rekognition assigns to the input image.
    pub(crate) image_id: Option<String>,
    /// Identifier that you assign to all the faces in the input image.
    pub(crate) external_image_id: Option<String>,
    /// Confidence level that the bounding box contains a face.
    pub(crate) confidence: Option<f64>,
}

impl Face {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> FaceBuilder {
        FaceBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> FaceBuilder {
        FaceBuilder { inner: self }
    }

    /// `FaceId`
    #[must_use]
    pub fn face_id(&self) -> Option<&str> {
        self.face_id.as_deref()
    }

    /// `BoundingBox`
    #[must_use]
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounding_box.as_ref()
    }

    /// `ImageId`
    #[must_use]
    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    /// `ExternalImageId`
    #[must_use]
    pub fn external_image_id(&self) -> Option<&str> {
        self.external_image_id.as_deref()
    }

    /// `Confidence`
    #[must_use]
    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }
}

/// Builder of [`Face`]
#[derive(Debug, Clone, Default)]
pub struct FaceBuilder {
    /// fields set so far
    inner: Face,
}

impl FaceBuilder {
    /// Sets `FaceId`
    #[must_use]
    pub fn face_id(mut self, input: impl Into<String>) -> Self {
        self.inner.face_id = Some(input.into());
        self
    }

    /// Sets or clears `FaceId`
    #[must_use]
    pub fn set_face_id(mut self, input: Option<String>) -> Self {
        self.inner.face_id = input;
        self
    }

    /// Sets `BoundingBox`
    #[must_use]
    pub fn bounding_box(mut self, input: BoundingBox) -> Self {
        self.inner.bounding_box = Some(input);
        self
    }

    /// Sets or clears `BoundingBox`
    #[must_use]
    pub fn set_bounding_box(mut self, input: Option<BoundingBox>) -> Self {
        self.inner.bounding_box = input;
        self
    }

    /// Sets `ImageId`
    #[must_use]
    pub fn image_id(mut self, input: impl Into<String>) -> Self {
        self.inner.image_id = Some(input.into());
        self
    }

    /// Sets or clears `ImageId`
    #[must_use]
    pub fn set_image_id(mut self, input: Option<String>) -> Self {
        self.inner.image_id = input;
        self
    }

    /// Sets `ExternalImageId`
    #[must_use]
    pub fn external_image_id(mut self, input: impl Into<String>) -> Self {
        self.inner.external_image_id = Some(input.into());
        self
    }

    /// Sets or clears `ExternalImageId`
    #[must_use]
    pub fn set_external_image_id(mut self, input: Option<String>) -> Self {
        self.inner.external_image_id = input;
        self
    }

    /// Sets `Confidence`
    #[must_use]
    pub fn confidence(mut self, input: f64) -> Self {
        self.inner.confidence = Some(input);
        self
    }

    /// Sets or clears `Confidence`
    #[must_use]
    pub fn set_confidence(mut self, input: Option<f64>) -> Self {
        self.inner.confidence = input;
        self
    }

    /// Finishes the face
    #[must_use]
    pub fn build(self) -> Face {
        self.inner
    }
}

impl JsonStructure for Face {
    fn decode_json(object: &JsonObject, decoder: &FieldDecoder) -> DtoResult<Self> {
        Ok(Self {
            face_id: decoder.json(object, "FaceId")?,
            bounding_box: decoder.json_structure(object, "BoundingBox")?,
            image_id: decoder.json(object, "ImageId")?,
            external_image_id: decoder.json(object, "ExternalImageId")?,
            confidence: decoder.json(object, "Confidence")?,
        })
    }
}

/// A matching face and how similar it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceMatch {
    /// Confidence in the match of this face with the input face.
    pub(crate) similarity: Option<f64>,
    /// The matching face.
    pub(crate) face: Option<Face>,
}

impl FaceMatch {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> FaceMatchBuilder {
        FaceMatchBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> FaceMatchBuilder {
        FaceMatchBuilder { inner: self }
    }

    /// `Similarity`
    #[must_use]
    pub fn similarity(&self) -> Option<f64> {
        self.similarity
    }

    /// `Face`
    #[must_use]
    pub fn face(&self) -> Option<&Face> {
        self.face.as_ref()
    }
}

/// Builder of [`FaceMatch`]
#[derive(Debug, Clone, Default)]
pub struct FaceMatchBuilder {
    /// fields set so far
    inner: FaceMatch,
}

impl FaceMatchBuilder {
    /// Sets `Similarity`
    #[must_use]
    pub fn similarity(mut self, input: f64) -> Self {
        self.inner.similarity = Some(input);
        self
    }

    /// Sets or clears `Similarity`
    #[must_use]
    pub fn set_similarity(mut self, input: Option<f64>) -> Self {
        self.inner.similarity = input;
        self
    }

    /// Sets `Face`
    #[must_use]
    pub fn face(mut self, input: Face) -> Self {
        self.inner.face = Some(input);
        self
    }

    /// Sets or clears `Face`
    #[must_use]
    pub fn set_face(mut self, input: Option<Face>) -> Self {
        self.inner.face = input;
        self
    }

    /// Finishes the match
    #[must_use]
    pub fn build(self) -> FaceMatch {
        self.inner
    }
}

impl JsonStructure for FaceMatch {
    fn decode_json(object: &JsonObject, decoder: &FieldDecoder) -> DtoResult<Self> {
        Ok(Self {
            similarity: decoder.json(object, "Similarity")?,
            face: decoder.json_structure(object, "Face")?,
        })
    }
}

/// `SearchFacesResult`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFacesResult {
    /// ID of the face that was searched for matches in a collection.
    pub(crate) searched_face_id: Option<String>,
    /// Faces that matched the input face, ordered by similarity score.
    pub(crate) face_matches: Option<Vec<FaceMatch>>,
    /// Version number of the face detection model.
    pub(crate) face_model_version: Option<String>,
}

impl SearchFacesResult {
    /// Creates a new builder
    #[must_use]
    pub fn builder() -> SearchFacesResultBuilder {
        SearchFacesResultBuilder::default()
    }

    /// Converts back into a builder holding the same fields
    #[must_use]
    pub fn into_builder(self) -> SearchFacesResultBuilder {
        SearchFacesResultBuilder { inner: self }
    }

    /// ID of the face that was searched for matches.
    #[must_use]
    pub fn searched_face_id(&self) -> Option<&str> {
        self.searched_face_id.as_deref()
    }

    /// Matching faces, highest similarity first.
    #[must_use]
    pub fn face_matches(&self) -> Option<&[FaceMatch]> {
        self.face_matches.as_deref()
    }

    /// Version number of the face detection model.
    #[must_use]
    pub fn face_model_version(&self) -> Option<&str> {
        self.face_model_version.as_deref()
    }
}

/// Builder of [`SearchFacesResult`]
#[derive(Debug, Clone, Default)]
pub struct SearchFacesResultBuilder {
    /// fields set so far
    inner: SearchFacesResult,
}

impl SearchFacesResultBuilder {
    /// Sets `SearchedFaceId`
    #[must_use]
    pub fn searched_face_id(mut self, input: impl Into<String>) -> Self {
        self.inner.searched_face_id = Some(input.into());
        self
    }

    /// Sets or clears `SearchedFaceId`
    #[must_use]
    pub fn set_searched_face_id(mut self, input: Option<String>) -> Self {
        self.inner.searched_face_id = input;
        self
    }

    /// Sets `FaceModelVersion`
    #[must_use]
    pub fn face_model_version(mut self, input: impl Into<String>) -> Self {
        self.inner.face_model_version = Some(input.into());
        self
    }

    /// Sets or clears `FaceModelVersion`
    #[must_use]
    pub fn set_face_model_version(mut self, input: Option<String>) -> Self {
        self.inner.face_model_version = input;
        self
    }

    /// Appends one element to `FaceMatches`
    #[must_use]
    pub fn face_matches(mut self, input: FaceMatch) -> Self {
        self.inner.face_matches.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Sets or clears `FaceMatches`
    #[must_use]
    pub fn set_face_matches(mut self, input: Option<Vec<FaceMatch>>) -> Self {
        self.inner.face_matches = input;
        self
    }

    /// Finishes the result
    #[must_use]
    pub fn build(self) -> SearchFacesResult {
        self.inner
    }
}

impl ServiceResult for SearchFacesResult {
    const OPERATION: &'static str = "SearchFaces";
    type Document = JsonDocument;

    fn decode(
        response: &ServiceResponse<JsonDocument>,
        decoder: &FieldDecoder,
    ) -> DtoResult<Self> {
        let doc = response.document().object();
        Ok(Self {
            searched_face_id: decoder.json(doc, "SearchedFaceId")?,
            face_matches: decoder.json_list(doc, "FaceMatches")?,
            face_model_version: decoder.json(doc, "FaceModelVersion")?,
        })
    }

    fn present_fields(&self) -> usize {
        count_present!(
            self.searched_face_id,
            self.face_matches,
            self.face_model_version,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecodePolicy;
    use crate::errors::DtoError;

    use http::HeaderMap;
    use serde_json::{json, Value};

    fn response(body: &str) -> ServiceResponse<JsonDocument> {
        use crate::message::WireDocument;
        ServiceResponse::new(JsonDocument::parse(body.as_bytes()).unwrap(), HeaderMap::new())
    }

    #[test]
    fn payload_has_exactly_the_set_fields() {
        let req = SearchFacesRequest::builder()
            .collection_id("faces-1")
            .face_id("f-42")
            .max_faces(5)
            .face_match_threshold(80.0)
            .build();

        let body: Value = serde_json::from_slice(&req.serialize_payload().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "CollectionId": "faces-1",
                "FaceId": "f-42",
                "MaxFaces": 5,
                "FaceMatchThreshold": 80.0,
            })
        );
        assert!(body["MaxFaces"].is_i64());

        let headers = req.request_specific_headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("X-Amz-Target").unwrap(),
            "RekognitionService.SearchFaces"
        );
    }

    #[test]
    fn zero_values_are_still_written() {
        let req = SearchFacesRequest::builder()
            .collection_id("")
            .max_faces(0)
            .build();

        let body: Value = serde_json::from_slice(&req.serialize_payload().unwrap()).unwrap();
        assert_eq!(body, json!({ "CollectionId": "", "MaxFaces": 0 }));
    }

    #[test]
    fn payload_is_stable() {
        let req = SearchFacesRequest::builder()
            .face_id("f")
            .face_match_threshold(f64::NAN)
            .build();
        let first = req.serialize_payload().unwrap();
        assert_eq!(first, req.serialize_payload().unwrap());
        assert_eq!(&first[..], br#"{"FaceId":"f","FaceMatchThreshold":"NaN"}"#);

        let pretty = req
            .serialize_payload_with(&Config::default().with_pretty_payload(true))
            .unwrap();
        assert!(pretty.contains(&b'\n'));
    }

    #[test]
    fn getters_reflect_setters() {
        let req = SearchFacesRequest::builder().max_faces(7).build();
        assert_eq!(req.max_faces(), Some(7));
        assert_eq!(req.face_match_threshold(), None);

        let req = req.into_builder().set_max_faces(None).face_id("x").build();
        assert_eq!(req.max_faces(), None);
        assert_eq!(req.face_id(), Some("x"));
    }

    #[test]
    fn result_decodes_nested_matches() {
        let result = SearchFacesResult::from_response(&response(
            r#"{
                "SearchedFaceId": "f-42",
                "FaceModelVersion": "6.0",
                "FaceMatches": [
                    {
                        "Similarity": 99.5,
                        "Face": {
                            "FaceId": "f-7",
                            "ImageId": "img-1",
                            "Confidence": 99.9,
                            "BoundingBox": { "Width": 0.25, "Height": 0.5, "Left": 0.1, "Top": 0.2 }
                        }
                    }
                ]
            }"#,
        ))
        .unwrap();

        assert_eq!(result.searched_face_id(), Some("f-42"));
        assert_eq!(result.face_model_version(), Some("6.0"));

        let matches = result.face_matches().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].similarity(), Some(99.5));

        let face = matches[0].face().unwrap();
        assert_eq!(face.face_id(), Some("f-7"));
        assert_eq!(face.external_image_id(), None);
        assert_eq!(face.bounding_box().unwrap().width(), Some(0.25));
        assert_eq!(face.bounding_box().unwrap().top(), Some(0.2));
    }

    #[test]
    fn lenient_result_drops_bad_fields() {
        let response = response(r#"{ "SearchedFaceId": 42, "FaceModelVersion": "6.0" }"#);

        let result = SearchFacesResult::from_response(&response).unwrap();
        assert_eq!(result.searched_face_id(), None);
        assert_eq!(result.face_model_version(), Some("6.0"));

        let strict = Config::default().with_decode_policy(DecodePolicy::Strict);
        let err = SearchFacesResult::from_response_with(&response, &strict).unwrap_err();
        match err {
            DtoError::Field(e) => assert_eq!(e.field, "SearchedFaceId"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_failure_leaves_result_unchanged() {
        let initial = response(r#"{ "FaceModelVersion": "5.0" }"#);
        let mut result = SearchFacesResult::from_response(&initial).unwrap();
        let strict = Config::default().with_decode_policy(DecodePolicy::Strict);

        let bad = response(r#"{ "FaceMatches": {} }"#);
        assert!(result.assign_with(&bad, &strict).is_err());
        assert_eq!(result.face_model_version(), Some("5.0"));
    }

    #[test]
    fn built_result_matches_decoded() {
        let decoded = SearchFacesResult::from_response(&response(
            r#"{
                "SearchedFaceId": "f-42",
                "FaceMatches": [
                    { "Similarity": 99.5, "Face": { "FaceId": "f-7", "BoundingBox": { "Width": 0.25 } } },
                    { "Similarity": 80.0 }
                ]
            }"#,
        ))
        .unwrap();

        let face = Face::builder()
            .face_id("f-7")
            .bounding_box(BoundingBox::builder().width(0.25).build())
            .build();
        let built = SearchFacesResult::builder()
            .searched_face_id("f-42")
            .face_matches(FaceMatch::builder().similarity(99.5).face(face).build())
            .face_matches(FaceMatch::builder().similarity(80.0).build())
            .build();
        assert_eq!(built, decoded);

        let built = built.into_builder().set_face_matches(None).build();
        assert_eq!(built.face_matches(), None);
        assert_eq!(built.present_fields(), 1);
    }

    #[test]
    fn nested_builders_round_trip() {
        let bounding_box = BoundingBox::builder().left(0.1).top(0.2).build();
        let bounding_box = bounding_box.into_builder().set_left(None).height(0.5).build();
        assert_eq!(bounding_box.left(), None);
        assert_eq!(bounding_box.top(), Some(0.2));
        assert_eq!(bounding_box.height(), Some(0.5));

        let face = Face::builder().image_id("img-1").confidence(99.0).build();
        let face = face.into_builder().set_image_id(None).external_image_id("ext").build();
        assert_eq!(face.image_id(), None);
        assert_eq!(face.external_image_id(), Some("ext"));

        let face_match = FaceMatch::builder().face(face.clone()).build();
        assert_eq!(face_match.face(), Some(&face));
        assert_eq!(face_match.into_builder().set_face(None).build(), FaceMatch::default());
    }
}
