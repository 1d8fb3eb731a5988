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

// Env values used to tune cropping.
pub const FACECROP_MAX_FACES_GROUP: &str = "FACECROP_MAX_FACES_GROUP";
pub const FACECROP_MAX_FACES_SINGLE: &str = "FACECROP_MAX_FACES_SINGLE";
pub const FACECROP_INDIVIDUAL_CROPS: &str = "FACECROP_INDIVIDUAL_CROPS";
pub const FACECROP_FACE_PADDING: &str = "FACECROP_FACE_PADDING";
pub const FACECROP_ZOOM: &str = "FACECROP_ZOOM";

// Defaults for crop options.
pub const DEFAULT_MAX_FACES_GROUP: usize = 5;
pub const DEFAULT_MAX_FACES_SINGLE: usize = 5;
pub const DEFAULT_FACE_PADDING: f64 = 1.75;
pub const DEFAULT_ZOOM: f64 = 1.0;
