// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Payloads of the Rekognition operations we call.
//!
//! Only the fields used to plan crops are modelled, everything else in a
//! response is ignored.

use bytes::Bytes;
use facecrop_core::hash::base64_encode;
use facecrop_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};

/// Image sent inline, base64 encoded on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    #[serde(serialize_with = "serialize_base64")]
    bytes: Bytes,
}

impl Image {
    /// Wrap raw image bytes (JPEG or PNG).
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Raw image bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

fn serialize_base64<S: Serializer>(
    bytes: &Bytes,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64_encode(bytes))
}

/// Facial attributes returned by `DetectFaces`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FaceAttributes {
    /// Bounding box, confidence, pose, quality and landmarks.
    #[default]
    Default,
    /// Every facial attribute.
    All,
}

/// Input of `DetectFaces`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFacesInput {
    /// Image to analyse.
    pub image: Image,
    /// Attributes to return, sent as a one element list.
    #[serde(serialize_with = "serialize_as_list")]
    pub attributes: FaceAttributes,
}

impl DetectFacesInput {
    /// Create an input asking for the default attributes.
    pub fn new(image: Image) -> Self {
        Self {
            image,
            attributes: FaceAttributes::Default,
        }
    }

    /// Set the attributes to return.
    pub fn with_attributes(mut self, attributes: FaceAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

fn serialize_as_list<S: Serializer>(
    v: &FaceAttributes,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    [v].serialize(serializer)
}

/// Input of `DetectLabels`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsInput {
    /// Image to analyse.
    pub image: Image,
    /// Maximum number of labels to return, unlimited when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_labels: Option<u32>,
    /// Minimum confidence of returned labels, in percent.
    pub min_confidence: f64,
}

impl DetectLabelsInput {
    /// Default minimum confidence, in percent.
    pub const DEFAULT_MIN_CONFIDENCE: f64 = 55.0;

    /// Create an input with no label limit and the default confidence.
    pub fn new(image: Image) -> Self {
        Self {
            image,
            max_labels: None,
            min_confidence: Self::DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Limit the number of labels returned.
    pub fn with_max_labels(mut self, max_labels: u32) -> Self {
        self.max_labels = Some(max_labels);
        self
    }

    /// Set the minimum confidence.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

/// Box of a detected face, as fractions of the image size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoundingBox {
    /// Width as a fraction of the image width.
    pub width: f64,
    /// Height as a fraction of the image height.
    pub height: f64,
    /// Left edge as a fraction of the image width.
    pub left: f64,
    /// Top edge as a fraction of the image height.
    pub top: f64,
}

/// One face found by `DetectFaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FaceDetail {
    /// Where the face is.
    pub bounding_box: BoundingBox,
    /// Confidence that this is a face, in percent.
    pub confidence: Option<f64>,
}

/// Output of `DetectFaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectFacesOutput {
    /// Faces in detection order.
    pub face_details: Vec<FaceDetail>,
    /// Orientation correction, only set for images without exif metadata.
    pub orientation_correction: Option<String>,
}

impl DetectFacesOutput {
    /// Parse a `DetectFaces` response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        from_slice(body, "DetectFaces")
    }
}

/// Parent of a [`Label`] in the label taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Parent {
    /// Name of the parent label.
    pub name: String,
}

/// One label found by `DetectLabels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Label {
    /// Name of the label, like `Person`.
    pub name: String,
    /// Confidence in percent.
    pub confidence: f64,
    /// Parent labels.
    pub parents: Vec<Parent>,
}

/// Output of `DetectLabels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectLabelsOutput {
    /// Labels, most confident first.
    pub labels: Vec<Label>,
    /// Version of the label model used.
    pub label_model_version: Option<String>,
}

impl DetectLabelsOutput {
    /// Parse a `DetectLabels` response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        from_slice(body, "DetectLabels")
    }
}

fn from_slice<T: DeserializeOwned>(body: &[u8], operation: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        Error::unexpected(format!("failed to parse {operation} response")).with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use facecrop_core::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_faces_input() {
        let input = DetectFacesInput::new(Image::from_bytes("hello"));
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"Image":{"Bytes":"aGVsbG8="},"Attributes":["DEFAULT"]}"#
        );

        let input = input.with_attributes(FaceAttributes::All);
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"Image":{"Bytes":"aGVsbG8="},"Attributes":["ALL"]}"#
        );
    }

    #[test]
    fn test_detect_labels_input() {
        let input = DetectLabelsInput::new(Image::from_bytes("hello"));
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"Image":{"Bytes":"aGVsbG8="},"MinConfidence":55.0}"#
        );

        let input = input.with_max_labels(10).with_min_confidence(80.5);
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"Image":{"Bytes":"aGVsbG8="},"MaxLabels":10,"MinConfidence":80.5}"#
        );
    }

    #[test]
    fn test_parse_detect_faces_output() {
        let body = r#"{
            "FaceDetails": [
                {
                    "BoundingBox": {"Width": 0.2, "Height": 0.25, "Left": 0.1, "Top": 0.3},
                    "Confidence": 99.9,
                    "Landmarks": [{"Type": "eyeLeft", "X": 0.15, "Y": 0.35}],
                    "Pose": {"Roll": 1.0, "Yaw": 2.0, "Pitch": 3.0}
                },
                {
                    "BoundingBox": {"Width": 0.1, "Height": 0.1, "Left": 0.6, "Top": 0.2}
                }
            ],
            "OrientationCorrection": "ROTATE_0"
        }"#;

        let output = DetectFacesOutput::from_slice(body.as_bytes()).unwrap();
        assert_eq!(output.face_details.len(), 2);
        assert_eq!(
            output.face_details[0].bounding_box,
            BoundingBox {
                width: 0.2,
                height: 0.25,
                left: 0.1,
                top: 0.3,
            }
        );
        assert_eq!(output.face_details[0].confidence, Some(99.9));
        assert_eq!(output.face_details[1].confidence, None);
        assert_eq!(output.orientation_correction.as_deref(), Some("ROTATE_0"));
    }

    #[test]
    fn test_parse_no_faces() {
        let output = DetectFacesOutput::from_slice(br#"{"FaceDetails": []}"#).unwrap();
        assert!(output.face_details.is_empty());
    }

    #[test]
    fn test_parse_detect_labels_output() {
        let body = r#"{
            "Labels": [
                {"Name": "Person", "Confidence": 99.2, "Instances": [], "Parents": []},
                {"Name": "Portrait", "Confidence": 87.0, "Parents": [{"Name": "Face"}, {"Name": "Person"}]}
            ],
            "LabelModelVersion": "3.0"
        }"#;

        let output = DetectLabelsOutput::from_slice(body.as_bytes()).unwrap();
        assert_eq!(output.labels.len(), 2);
        assert_eq!(output.labels[0].name, "Person");
        assert_eq!(output.labels[1].parents[0].name, "Face");
        assert_eq!(output.label_model_version.as_deref(), Some("3.0"));
    }

    #[test]
    fn test_parse_invalid_body() {
        let err = DetectFacesOutput::from_slice(b"<html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.to_string().contains("DetectFaces"));
    }
}
