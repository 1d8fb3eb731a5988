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
use std::str::FromStr;

use facecrop_core::Error;

use crate::constants::{REKOGNITION, REKOGNITION_TARGET_PREFIX};

/// AWS services this crate knows how to sign for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Amazon Rekognition, the face-detection service.
    Rekognition,
}

impl Service {
    /// Name used in the credential scope, like `rekognition`.
    pub fn signing_name(&self) -> &'static str {
        match self {
            Service::Rekognition => REKOGNITION,
        }
    }

    /// Prefix of the `x-amz-target` header, like `RekognitionService`.
    pub fn target_prefix(&self) -> &'static str {
        match self {
            Service::Rekognition => REKOGNITION_TARGET_PREFIX,
        }
    }
}

impl FromStr for Service {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            REKOGNITION => Ok(Service::Rekognition),
            _ => Err(Error::config_invalid(format!("unsupported service: {s}"))),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signing_name())
    }
}
