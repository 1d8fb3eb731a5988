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

use facecrop_core::Result;
use facecrop_crop::CropOptions;
use facecrop_rekognition::{Client, Config};

/// Everything needed to go from an upload to crop plans.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Credentials and endpoint of the face-detection service.
    pub rekognition: Config,
    /// How crops are planned.
    pub crop: CropOptions,
}

impl Settings {
    /// Load settings from env.
    pub fn from_env(self) -> Self {
        Self {
            rekognition: self.rekognition.from_env(),
            crop: self.crop.from_env(),
        }
    }

    /// Build a client out of the configured credentials.
    pub fn client(&self) -> Result<Client> {
        Ok(Client::new(self.rekognition.credentials()?))
    }
}
