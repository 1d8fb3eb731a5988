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

use std::collections::HashMap;
use std::env;
use std::fmt::{Debug, Formatter};

use facecrop_core::utils::Redact;
use facecrop_core::{Error, Result};
use log::warn;

use crate::constants::*;
use crate::ClientCredentials;

/// Config for the face-detection service.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_SECRET_ACCESS_KEY`
    pub secret_access_key: Option<String>,
    /// `region` will be loaded from:
    ///
    /// - env value: `AWS_REGION`
    /// - default to `us-east-1`
    pub region: String,
    /// `host` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: `FACECROP_REKOGNITION_HOST`
    /// - default to `rekognition.<region>.amazonaws.com`
    pub host: Option<String>,
    /// `use_https` will be loaded from:
    ///
    /// - env value: `FACECROP_REKOGNITION_USE_HTTPS` (`false` or `0` to disable)
    /// - default to `true`
    pub use_https: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key_id: None,
            secret_access_key: None,
            region: DEFAULT_REGION.to_string(),
            host: None,
            use_https: true,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "access_key_id",
                &self.access_key_id.as_deref().map(Redact::from),
            )
            .field(
                "secret_access_key",
                &self.secret_access_key.as_deref().map(Redact::from),
            )
            .field("region", &self.region)
            .field("host", &self.host)
            .field("use_https", &self.use_https)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self) -> Self {
        let envs = env::vars().collect::<HashMap<_, _>>();

        self.access_key_id = self
            .access_key_id
            .take()
            .or_else(|| envs.get(AWS_ACCESS_KEY_ID).cloned());
        self.secret_access_key = self
            .secret_access_key
            .take()
            .or_else(|| envs.get(AWS_SECRET_ACCESS_KEY).cloned());
        if let Some(v) = envs.get(AWS_REGION) {
            self.region = v.to_string();
        }
        self.host = self
            .host
            .take()
            .or_else(|| envs.get(FACECROP_REKOGNITION_HOST).cloned());
        if let Some(v) = envs.get(FACECROP_REKOGNITION_USE_HTTPS) {
            match v.trim() {
                "true" | "1" => self.use_https = true,
                "false" | "0" => self.use_https = false,
                _ => warn!(
                    "ignoring env {FACECROP_REKOGNITION_USE_HTTPS}: '{v}' is not a valid value"
                ),
            }
        }

        self
    }

    /// Build [`ClientCredentials`] out of this config.
    ///
    /// Missing keys or region fail with `ConfigInvalid`, keys that are set
    /// but empty with `CredentialInvalid`.
    pub fn credentials(&self) -> Result<ClientCredentials> {
        let access_key_id = self
            .access_key_id
            .as_deref()
            .ok_or_else(|| Error::config_invalid("access_key_id is required"))?;
        let secret_access_key = self
            .secret_access_key
            .as_deref()
            .ok_or_else(|| Error::config_invalid("secret_access_key is required"))?;
        if access_key_id.is_empty() || secret_access_key.is_empty() {
            return Err(Error::credential_invalid(
                "access_key_id and secret_access_key must not be empty",
            ));
        }
        if self.region.is_empty() {
            return Err(Error::config_invalid("region is required"));
        }

        let cred = ClientCredentials::new(access_key_id, secret_access_key, &self.region)
            .with_https(self.use_https);
        Ok(match &self.host {
            Some(host) => cred.with_host(host),
            None => cred,
        })
    }
}
