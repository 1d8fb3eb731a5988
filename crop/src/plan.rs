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

use log::debug;
use log::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::bounding_envelope;
use crate::center_box;
use crate::translate;
use crate::CenterResult;
use crate::CropOptions;
use crate::FaceBox;
use crate::PixelBox;
use facecrop_core::Error;
use facecrop_core::ErrorKind;
use facecrop_core::Result;

/// Which derivative a [`CropPlan`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropKind {
    /// One crop holding every grouped face.
    Group,
    /// A crop around the face at this index of the detection result.
    Face(usize),
}

/// Rectangle to cut out of the resized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Width.
    pub width: i64,
    /// Height.
    pub height: i64,
}

/// Everything an image editor needs to produce one derivative: resize the
/// source to `resize_width` x `resize_height`, then cut `crop` out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPlan {
    /// Derivative produced by this plan.
    pub kind: CropKind,
    /// Region of interest in source pixels.
    pub area: PixelBox,
    /// Destination canvas width, never larger than the source.
    pub canvas_width: u32,
    /// Destination canvas height, never larger than the source.
    pub canvas_height: u32,
    /// Placement of `area` on the canvas.
    pub center: CenterResult,
    /// Width to resize the source to before cropping.
    pub resize_width: u32,
    /// Height to resize the source to before cropping.
    pub resize_height: u32,
    /// Crop taken from the resized source.
    pub crop: CropRect,
}

/// Plan one crop of `area` onto a `width` x `height` canvas.
///
/// The canvas is clamped to the source image. When the canvas spans the
/// whole source on an axis, the crop is pulled back inside the image on that
/// axis and shrinks accordingly.
pub fn plan_crop(
    image_width: u32,
    image_height: u32,
    area: &PixelBox,
    width: u32,
    height: u32,
    zoom: f64,
) -> Result<CropPlan> {
    let width = width.min(image_width);
    let height = height.min(image_height);

    let center = center_box(width, height, area, true, zoom)?;

    // Zooming grows the box around its own center, so its origin moves too.
    let zoomed_left = area.left as i64 - zoom_growth(area.width(), zoom);
    let zoomed_top = area.top as i64 - zoom_growth(area.height(), zoom);

    let mut x = (zoomed_left - center.x) as f64 * center.scale;
    let mut y = (zoomed_top - center.y) as f64 * center.scale;
    let mut w = width as f64;
    let mut h = height as f64;

    if width == image_width {
        (x, w) = pull_inside(x, w);
    }
    if height == image_height {
        (y, h) = pull_inside(y, h);
    }

    let plan = CropPlan {
        kind: CropKind::Group,
        area: *area,
        canvas_width: width,
        canvas_height: height,
        center,
        resize_width: (image_width as f64 * center.scale) as u32,
        resize_height: (image_height as f64 * center.scale) as u32,
        crop: CropRect {
            x: x as i64,
            y: y as i64,
            width: w as i64,
            height: h as i64,
        },
    };
    debug!("planned crop: {plan:?}");
    Ok(plan)
}

/// Plan the group crop and, if enabled, one crop per face.
///
/// The group crop covers the envelope of the first
/// [`max_faces_group`](CropOptions::max_faces_group) faces on a canvas the
/// size of the source. Per-face crops cover the first
/// [`max_faces_single`](CropOptions::max_faces_single) faces, each on a
/// canvas of the face size times [`face_padding`](CropOptions::face_padding).
/// Faces too small to span a single pixel are skipped.
pub fn plan_crops(
    image_width: u32,
    image_height: u32,
    faces: &[FaceBox],
    opts: &CropOptions,
) -> Result<Vec<CropPlan>> {
    if faces.is_empty() {
        return Err(Error::no_faces_detected("detection returned no faces"));
    }

    let envelope = bounding_envelope(faces, opts.max_faces_group)?;
    let area = translate(image_width, image_height, &envelope);
    let group = plan_crop(
        image_width,
        image_height,
        &area,
        image_width,
        image_height,
        opts.zoom,
    )?;

    let mut plans = vec![group];
    if !opts.individual_crops {
        return Ok(plans);
    }

    for (idx, face) in faces.iter().take(opts.max_faces_single).enumerate() {
        let envelope = bounding_envelope(std::slice::from_ref(face), 1)?;
        let area = translate(image_width, image_height, &envelope);

        let width = (area.width() as f64 * opts.face_padding) as u32;
        let height = (area.height() as f64 * opts.face_padding) as u32;
        if width == 0 || height == 0 {
            warn!("skipping face {idx}: {area:?} is smaller than a pixel");
            continue;
        }

        match plan_crop(image_width, image_height, &area, width, height, opts.zoom) {
            Ok(plan) => plans.push(CropPlan {
                kind: CropKind::Face(idx),
                ..plan
            }),
            Err(err) if err.kind() == ErrorKind::DegenerateBox => {
                warn!("skipping face {idx}: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(plans)
}

/// Pixels a side grows by on each end when zoomed.
#[inline]
fn zoom_growth(size: u32, zoom: f64) -> i64 {
    let zoomed = (size as f64 * zoom) as i64;
    (zoomed - size as i64) / 2
}

/// Move a negative start back to zero, or trim a positive start off the
/// length, so the crop stays inside a full-size axis.
#[inline]
fn pull_inside(start: f64, len: f64) -> (f64, f64) {
    if start > 0.0 {
        (start, len - start)
    } else {
        (0.0, len - start.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pixel_box(top: u32, left: u32, right: u32, bottom: u32) -> PixelBox {
        PixelBox {
            top,
            left,
            right,
            bottom,
        }
    }

    fn crop(x: i64, y: i64, width: i64, height: i64) -> CropRect {
        CropRect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_plan_crop_full_canvas_pulls_inside() {
        let plan = plan_crop(1000, 800, &pixel_box(80, 200, 700, 400), 1000, 800, 1.0).unwrap();

        assert_eq!(
            plan.center,
            CenterResult {
                x: 250,
                y: 240,
                scale: 1.0
            }
        );
        assert_eq!((plan.resize_width, plan.resize_height), (1000, 800));
        assert_eq!(plan.crop, crop(0, 0, 950, 640));
    }

    #[test]
    fn test_plan_crop_small_canvas() {
        let plan = plan_crop(1000, 1000, &pixel_box(100, 100, 300, 300), 350, 350, 1.0).unwrap();

        assert_eq!((plan.canvas_width, plan.canvas_height), (350, 350));
        assert_eq!(plan.crop, crop(25, 25, 350, 350));
    }

    #[test]
    fn test_plan_crop_zoom_keeps_center() {
        let area = pixel_box(100, 100, 300, 300);
        let plain = plan_crop(1000, 1000, &area, 350, 350, 1.0).unwrap();
        let zoomed = plan_crop(1000, 1000, &area, 350, 350, 1.5).unwrap();

        assert_eq!(zoomed.center.x, 25);
        assert_eq!(zoomed.crop, plain.crop);
    }

    #[test]
    fn test_plan_crop_clamps_canvas() {
        let plan = plan_crop(1000, 1000, &pixel_box(100, 600, 900, 900), 500, 4000, 1.0).unwrap();

        assert_eq!((plan.canvas_width, plan.canvas_height), (500, 1000));
        assert_eq!(plan.crop, crop(500, 0, 500, 1000));
    }

    #[test]
    fn test_plan_crop_shrinks_overflowing_box() {
        let plan = plan_crop(1000, 1000, &pixel_box(0, 0, 900, 900), 500, 500, 1.0).unwrap();
        assert_eq!(plan.center.scale, 0.55555);
        assert_eq!((plan.resize_width, plan.resize_height), (555, 555));
        assert_eq!(plan.crop, crop(0, 0, 500, 500));

        let plan =
            plan_crop(1000, 1000, &pixel_box(100, 200, 1000, 1000), 400, 400, 1.0).unwrap();
        assert_eq!(
            plan.center,
            CenterResult {
                x: 22,
                y: 0,
                scale: 0.44444
            }
        );
        assert_eq!((plan.resize_width, plan.resize_height), (444, 444));
        assert_eq!(plan.crop, crop(79, 44, 400, 400));
    }

    fn two_faces() -> Vec<FaceBox> {
        vec![
            FaceBox::new(0.1, 0.2, 0.1, 0.15),
            FaceBox::new(0.3, 0.5, 0.2, 0.2),
        ]
    }

    #[test]
    fn test_plan_crops_group_only() {
        let plans = plan_crops(1000, 800, &two_faces(), &CropOptions::default()).unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].kind, CropKind::Group);
        assert_eq!(plans[0].area, pixel_box(80, 200, 700, 400));
        assert_eq!(plans[0].crop, crop(0, 0, 950, 640));
    }

    #[test]
    fn test_plan_crops_individual() {
        let opts = CropOptions {
            individual_crops: true,
            ..Default::default()
        };
        let plans = plan_crops(1000, 800, &two_faces(), &opts).unwrap();

        let kinds: Vec<_> = plans.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![CropKind::Group, CropKind::Face(0), CropKind::Face(1)]
        );

        assert_eq!(plans[1].area, pixel_box(80, 200, 300, 200));
        assert_eq!((plans[1].canvas_width, plans[1].canvas_height), (175, 210));
        assert_eq!(plans[1].crop, crop(163, 35, 175, 210));

        assert_eq!(plans[2].area, pixel_box(240, 500, 700, 400));
        assert_eq!((plans[2].canvas_width, plans[2].canvas_height), (350, 280));
        assert_eq!(plans[2].crop, crop(425, 180, 350, 280));
    }

    #[test]
    fn test_plan_crops_limits() {
        let opts = CropOptions {
            max_faces_group: 1,
            max_faces_single: 1,
            individual_crops: true,
            ..Default::default()
        };
        let plans = plan_crops(1000, 800, &two_faces(), &opts).unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].area, pixel_box(80, 200, 300, 200));
        assert_eq!(plans[1].kind, CropKind::Face(0));
    }

    #[test]
    fn test_plan_crops_skips_tiny_faces() {
        let faces = vec![
            FaceBox::new(0.1, 0.2, 0.1, 0.15),
            FaceBox::new(0.5, 0.5, 0.0001, 0.0001),
        ];
        let opts = CropOptions {
            individual_crops: true,
            ..Default::default()
        };
        let plans = plan_crops(1000, 800, &faces, &opts).unwrap();

        let kinds: Vec<_> = plans.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![CropKind::Group, CropKind::Face(0)]);
    }

    #[test]
    fn test_plan_crops_no_faces() {
        let err = plan_crops(1000, 800, &[], &CropOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoFacesDetected);
    }
}
