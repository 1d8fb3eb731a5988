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

use crate::NormalizedBox;
use crate::PixelBox;

/// Scale a normalized box to the pixels of a `width` x `height` image.
///
/// Every coordinate is truncated toward zero, never rounded. Coordinates
/// outside `[0, 1]` (Rekognition reports faces cut by the image edge that
/// way) are clamped to the image first.
pub fn translate(width: u32, height: u32, area: &NormalizedBox) -> PixelBox {
    PixelBox {
        top: scale_edge(height, area.top),
        left: scale_edge(width, area.left),
        right: scale_edge(width, area.right),
        bottom: scale_edge(height, area.bottom),
    }
}

#[inline]
fn scale_edge(size: u32, fraction: f64) -> u32 {
    (size as f64 * fraction.clamp(0.0, 1.0)) as u32
}
