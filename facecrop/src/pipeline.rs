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
use facecrop_crop::{plan_crops, CropOptions, CropPlan, FaceBox};
use facecrop_rekognition::DetectFacesOutput;
use log::debug;

/// Face boxes of a `DetectFaces` response, in detection order.
pub fn faces_from_detection(output: &DetectFacesOutput) -> Vec<FaceBox> {
    output
        .face_details
        .iter()
        .map(|face| {
            let b = face.bounding_box;
            FaceBox::new(b.top, b.left, b.width, b.height)
        })
        .collect()
}

/// Plan crops for an image of `image_width` x `image_height` pixels out of
/// its `DetectFaces` response.
///
/// A response without faces fails with
/// [`ErrorKind::NoFacesDetected`](facecrop_core::ErrorKind::NoFacesDetected):
/// the upload should be left as is.
pub fn plan_from_detection(
    output: &DetectFacesOutput,
    image_width: u32,
    image_height: u32,
    opts: &CropOptions,
) -> Result<Vec<CropPlan>> {
    let faces = faces_from_detection(output);
    debug!(
        "planning crops for {} faces on {image_width}x{image_height}",
        faces.len()
    );

    plan_crops(image_width, image_height, &faces, opts)
}
