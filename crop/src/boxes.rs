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

use serde::Deserialize;
use serde::Serialize;

/// A detected face, relative to the image size.
///
/// Mirrors the `BoundingBox` that Rekognition returns for every entry of
/// `FaceDetails`: all four values are fractions of the image width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceBox {
    /// Distance from the top edge.
    pub top: f64,
    /// Distance from the left edge.
    pub left: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl FaceBox {
    /// Create a new face box from `top`, `left`, `width` and `height`.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Right edge of this face.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge of this face.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Region of interest expressed as fractions of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBox {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

/// Region of interest in pixels of a concrete image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelBox {
    /// Top edge.
    pub top: u32,
    /// Left edge.
    pub left: u32,
    /// Right edge.
    pub right: u32,
    /// Bottom edge.
    pub bottom: u32,
}

impl PixelBox {
    /// Width in pixels, zero for an inverted box.
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels, zero for an inverted box.
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Offset and scale that center a box on a destination canvas.
///
/// `x` and `y` are negative when the box overflows the canvas and no
/// shrinking was requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterResult {
    /// Horizontal offset of the box on the canvas.
    pub x: i64,
    /// Vertical offset of the box on the canvas.
    pub y: i64,
    /// Scale in `(0, 1]`, truncated to five decimal digits.
    pub scale: f64,
}
