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

//! Core components shared by the facecrop crates.
//!
//! This crate holds the pieces that both the signing engine and the crop
//! geometry engine rely on:
//!
//! - [`Error`] and [`ErrorKind`]: the single error type used across the workspace
//! - [`hash`]: SHA-256, HMAC-SHA256 and base64 helpers
//! - [`time`]: UTC timestamps and the formats used by AWS Signature V4
//! - [`utils`]: general utilities including data redaction
//!
//! ## Example
//!
//! ```
//! use facecrop_core::hash::hex_sha256;
//! use facecrop_core::time::{format_iso8601, parse_iso8601};
//!
//! # fn main() -> facecrop_core::Result<()> {
//! let t = parse_iso8601("20210304T050607Z")?;
//! assert_eq!(format_iso8601(t), "20210304T050607Z");
//! assert_eq!(hex_sha256(b"").len(), 64);
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
