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

//! Face-aware crop geometry.
//!
//! Face boxes come in as fractions of the image size. They are merged into
//! a single envelope with [`bounding_envelope`], scaled to pixels with
//! [`translate`], and centered on a destination canvas with [`center_box`].
//! [`plan_crops`] runs the whole chain and yields the resize and crop
//! parameters an image editor needs.
//!
//! ```
//! use facecrop_crop::{bounding_envelope, center_box, translate, FaceBox};
//!
//! # fn main() -> facecrop_core::Result<()> {
//! let faces = vec![FaceBox::new(0.2, 0.2, 0.2, 0.2)];
//! let envelope = bounding_envelope(&faces, 5)?;
//! let area = translate(1000, 1000, &envelope);
//! let center = center_box(500, 500, &area, true, 1.0)?;
//! assert_eq!((center.x, center.y), (150, 150));
//! # Ok(())
//! # }
//! ```

mod boxes;
pub use boxes::CenterResult;
pub use boxes::FaceBox;
pub use boxes::NormalizedBox;
pub use boxes::PixelBox;

mod envelope;
pub use envelope::bounding_envelope;

mod translate;
pub use translate::translate;

mod center;
pub use center::center_box;
pub use center::SCALE_PRECISION;

mod options;
pub use options::CropOptions;

mod plan;
pub use plan::plan_crop;
pub use plan::plan_crops;
pub use plan::CropKind;
pub use plan::CropPlan;
pub use plan::CropRect;

mod constants;
