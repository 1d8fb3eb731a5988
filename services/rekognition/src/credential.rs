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

use facecrop_core::utils::Redact;
use std::fmt::{Debug, Formatter};

use crate::constants::REKOGNITION;

/// Credentials and endpoint of the face-detection service.
///
/// Immutable once built: the `with_*` methods consume and return a new
/// value.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    access_key_id: String,
    secret_access_key: String,
    region: String,
    host: String,
    use_https: bool,
}

impl Debug for ClientCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("region", &self.region)
            .field("host", &self.host)
            .field("use_https", &self.use_https)
            .finish()
    }
}

impl ClientCredentials {
    /// Create credentials for `region`, talking to the regional
    /// Rekognition endpoint over https.
    pub fn new(access_key_id: &str, secret_access_key: &str, region: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            region: region.to_string(),
            host: default_host(region),
            use_https: true,
        }
    }

    /// Override the host, for example to target a local emulator.
    ///
    /// An empty host falls back to the regional endpoint.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = if host.is_empty() {
            default_host(&self.region)
        } else {
            host.to_string()
        };
        self
    }

    /// Use https (the default) or plain http.
    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Secret access key.
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Region used in the signing scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Host sent in the `host` header.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether requests go over https.
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Endpoint with scheme, like `https://rekognition.us-east-1.amazonaws.com`.
    pub fn endpoint(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{scheme}://{}", self.host)
    }
}

fn default_host(region: &str) -> String {
    format!("{REKOGNITION}.{region}.amazonaws.com")
}
