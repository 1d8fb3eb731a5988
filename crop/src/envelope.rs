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

use crate::FaceBox;
use crate::NormalizedBox;
use facecrop_core::Error;
use facecrop_core::Result;
use log::debug;

/// Merge detected faces into the smallest box that holds all of them.
///
/// Faces are taken in input order and only the first `max_faces` count,
/// so callers decide which faces matter by ordering them. The running
/// bounds start inverted (`top = left = 1.0`, `right = bottom = 0.0`) so
/// the first face always sets them.
///
/// Returns [`ErrorKind::NoFacesDetected`](facecrop_core::ErrorKind::NoFacesDetected)
/// when no face was processed, either because `faces` is empty or because
/// `max_faces` is zero.
pub fn bounding_envelope(faces: &[FaceBox], max_faces: usize) -> Result<NormalizedBox> {
    let mut envelope = NormalizedBox {
        top: 1.0,
        left: 1.0,
        right: 0.0,
        bottom: 0.0,
    };

    let mut processed = 0;
    for face in faces.iter().take(max_faces) {
        envelope.top = envelope.top.min(face.top);
        envelope.left = envelope.left.min(face.left);
        envelope.right = envelope.right.max(face.right());
        envelope.bottom = envelope.bottom.max(face.bottom());

        processed += 1;
    }

    if processed == 0 {
        return Err(Error::no_faces_detected(format!(
            "no face to build an envelope from: {} faces given, max_faces is {max_faces}",
            faces.len()
        )));
    }

    debug!("calculated envelope over {processed} faces: {envelope:?}");
    Ok(envelope)
}
