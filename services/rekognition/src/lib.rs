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

//! AWS SigV4 signing for the Rekognition face-detection service.
//!
//! This crate builds fully signed Rekognition requests without the AWS
//! SDK. It never performs I/O: the output is an `http::Request<Bytes>` to
//! send with any HTTP client.
//!
//! ## Example
//!
//! ```no_run
//! use facecrop_core::time::now;
//! use facecrop_rekognition::{Client, Config, DetectFacesInput, Image};
//!
//! # fn main() -> facecrop_core::Result<()> {
//! let config = Config::default().from_env();
//! let client = Client::new(config.credentials()?);
//!
//! let input = DetectFacesInput::new(Image::from_bytes(std::fs::read("photo.jpg").unwrap()));
//! let req = client.detect_faces(&input, now())?;
//! println!("{} {}", req.method(), req.uri());
//! # Ok(())
//! # }
//! ```
//!
//! Lower level pieces are available when the request is not one of the
//! modelled operations:
//!
//! ```
//! use facecrop_core::time::parse_iso8601;
//! use facecrop_rekognition::{ClientCredentials, RequestSigner, Service, SignableRequest};
//!
//! # fn main() -> facecrop_core::Result<()> {
//! let signer = RequestSigner::new(ClientCredentials::new("ak", "sk", "us-east-1"));
//! let req = SignableRequest::new_at(Service::Rekognition, parse_iso8601("20210304T050607Z")?)
//!     .with_operation("ListCollections")
//!     .with_body(r#"{}"#);
//!
//! let signed = signer.sign(req)?;
//! assert!(signed.header("authorization").is_some());
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod client;
pub use client::{Client, Operation};
mod config;
pub use config::Config;
mod credential;
pub use credential::ClientCredentials;
mod model;
pub use model::*;
mod request;
pub use request::SignableRequest;
mod service;
pub use service::Service;
mod sign_request;
pub use sign_request::{
    generate_signing_key, string_to_sign, CanonicalRequest, RequestSigner, SignedRequest,
};
