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

use std::fmt;

use bytes::Bytes;
use facecrop_core::time::DateTime;
use facecrop_core::{Error, Result};
use log::debug;
use serde::Serialize;

use crate::{
    ClientCredentials, DetectFacesInput, DetectLabelsInput, RequestSigner, Service,
    SignableRequest,
};

/// Rekognition operations supported by [`Client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Detect faces and their bounding boxes.
    DetectFaces,
    /// Detect labels like `Person` or `Portrait`.
    DetectLabels,
}

impl Operation {
    /// Name used in the `x-amz-target` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::DetectFaces => "DetectFaces",
            Operation::DetectLabels => "DetectLabels",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds signed Rekognition requests.
///
/// The client never sends anything: it returns `http::Request` values to
/// hand over to the HTTP client of your choice.
#[derive(Debug, Clone)]
pub struct Client {
    signer: RequestSigner,
}

impl Client {
    /// Create a client for the given credentials.
    pub fn new(credentials: ClientCredentials) -> Self {
        Self {
            signer: RequestSigner::new(credentials),
        }
    }

    /// Credentials used by this client.
    pub fn credentials(&self) -> &ClientCredentials {
        self.signer.credentials()
    }

    /// Build a signed `DetectFaces` request.
    pub fn detect_faces(
        &self,
        input: &DetectFacesInput,
        time: DateTime,
    ) -> Result<http::Request<Bytes>> {
        self.build_request(Operation::DetectFaces, input, time)
    }

    /// Build a signed `DetectLabels` request.
    pub fn detect_labels(
        &self,
        input: &DetectLabelsInput,
        time: DateTime,
    ) -> Result<http::Request<Bytes>> {
        self.build_request(Operation::DetectLabels, input, time)
    }

    /// Build a signed `POST /` request carrying `input` as JSON.
    pub fn build_request<T: Serialize>(
        &self,
        operation: Operation,
        input: &T,
        time: DateTime,
    ) -> Result<http::Request<Bytes>> {
        let body = serde_json::to_vec(input).map_err(|e| {
            Error::unexpected(format!("failed to serialize {operation} input")).with_source(e)
        })?;
        debug!("built {operation} payload of {} bytes", body.len());

        let req = SignableRequest::new_at(Service::Rekognition, time)
            .with_operation(operation.as_str())
            .with_body(body);
        let signed = self.signer.sign(req)?;

        signed.into_http_request(&self.credentials().endpoint())
    }
}
