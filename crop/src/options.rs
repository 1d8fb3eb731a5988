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
use std::str::FromStr;

use log::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::*;

/// Options that drive [`plan_crops`](crate::plan_crops).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// `max_faces_group` is the number of faces, in detection order, merged
    /// into the group crop. It will be loaded from:
    ///
    /// - env value: `FACECROP_MAX_FACES_GROUP`
    /// - default to `5`
    pub max_faces_group: usize,
    /// `max_faces_single` caps how many per-face crops are planned. It will
    /// be loaded from:
    ///
    /// - env value: `FACECROP_MAX_FACES_SINGLE`
    /// - default to `5`
    pub max_faces_single: usize,
    /// `individual_crops` enables one extra crop per face. It will be loaded
    /// from:
    ///
    /// - env value: `FACECROP_INDIVIDUAL_CROPS` (`true` or `1`)
    /// - default to `false`
    pub individual_crops: bool,
    /// `face_padding` multiplies a single face's size to get the canvas of
    /// its crop. It will be loaded from:
    ///
    /// - env value: `FACECROP_FACE_PADDING`
    /// - default to `1.75`
    pub face_padding: f64,
    /// `zoom` resizes every box before it is centered. It will be loaded
    /// from:
    ///
    /// - env value: `FACECROP_ZOOM`
    /// - default to `1.0`
    pub zoom: f64,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            max_faces_group: DEFAULT_MAX_FACES_GROUP,
            max_faces_single: DEFAULT_MAX_FACES_SINGLE,
            individual_crops: false,
            face_padding: DEFAULT_FACE_PADDING,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CropOptions {
    /// Load options from env.
    ///
    /// Values that fail to parse are skipped and the current value is kept.
    pub fn from_env(mut self) -> Self {
        let envs = env::vars().collect::<HashMap<_, _>>();

        if let Some(v) = parse_env(&envs, FACECROP_MAX_FACES_GROUP) {
            self.max_faces_group = v;
        }
        if let Some(v) = parse_env(&envs, FACECROP_MAX_FACES_SINGLE) {
            self.max_faces_single = v;
        }
        if let Some(v) = envs.get(FACECROP_INDIVIDUAL_CROPS) {
            self.individual_crops = v == "true" || v == "1";
        }
        if let Some(v) = parse_env(&envs, FACECROP_FACE_PADDING) {
            self.face_padding = v;
        }
        if let Some(v) = parse_env(&envs, FACECROP_ZOOM) {
            self.zoom = v;
        }
        self
    }
}

fn parse_env<T: FromStr>(envs: &HashMap<String, String>, key: &str) -> Option<T> {
    let v = envs.get(key)?;
    match v.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring env {key}: '{v}' is not a valid value");
            None
        }
    }
}
