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

//! Face-aware cropping driven by signed AWS Rekognition requests.
//!
//! This crate re-exports the building blocks of the workspace:
//!
//! - [`rekognition`]: sign `DetectFaces`/`DetectLabels` requests and parse
//!   their responses
//! - [`crop`]: merge face boxes and plan resize-then-crop operations
//!
//! With both enabled, [`plan_from_detection`] turns a `DetectFaces`
//! response into crop plans:
//!
//! ```
//! use facecrop::crop::CropOptions;
//! use facecrop::rekognition::DetectFacesOutput;
//!
//! # fn main() -> facecrop::Result<()> {
//! let body = br#"{"FaceDetails":[{"BoundingBox":{"Width":0.2,"Height":0.2,"Left":0.2,"Top":0.2}}]}"#;
//! let output = DetectFacesOutput::from_slice(body)?;
//!
//! let plans = facecrop::plan_from_detection(&output, 1000, 1000, &CropOptions::default())?;
//! assert_eq!(plans.len(), 1);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use facecrop_core::*;

#[cfg(feature = "crop")]
pub mod crop {
    //! Face-aware crop geometry.
    pub use facecrop_crop::*;
}

#[cfg(feature = "rekognition")]
pub mod rekognition {
    //! Signed requests for the face-detection service.
    pub use facecrop_rekognition::*;
}

#[cfg(all(feature = "crop", feature = "rekognition"))]
mod pipeline;
#[cfg(all(feature = "crop", feature = "rekognition"))]
pub use pipeline::{faces_from_detection, plan_from_detection};

#[cfg(all(feature = "crop", feature = "rekognition"))]
mod settings;
#[cfg(all(feature = "crop", feature = "rekognition"))]
pub use settings::Settings;
