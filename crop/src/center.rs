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

use crate::CenterResult;
use crate::PixelBox;
use facecrop_core::Error;
use facecrop_core::Result;
use log::debug;

/// Scales are truncated to `1 / SCALE_PRECISION`, i.e. five decimal digits.
pub const SCALE_PRECISION: f64 = 100_000.0;

/// Center `area` on a `width` x `height` canvas.
///
/// The box is first resized by `zoom`, then placed so that its center
/// matches the canvas center. When the box overflows the canvas and `fit`
/// is set, a single scale factor shrinks it: the axis with the larger
/// overflow (the smaller offset, width on ties) drives the scale, its offset
/// becomes zero and the other axis is re-centered.
///
/// Without `fit` the offsets are returned as computed, possibly negative,
/// with a scale of `1.0`. Clamping is left to the caller.
///
/// # Errors
///
/// - [`ErrorKind::DegenerateBox`](facecrop_core::ErrorKind::DegenerateBox)
///   if the zoomed box has no width or no height, or shrinks below the
///   smallest representable scale.
/// - [`ErrorKind::ConfigInvalid`](facecrop_core::ErrorKind::ConfigInvalid)
///   if the canvas is empty or `zoom` is not finite.
pub fn center_box(
    width: u32,
    height: u32,
    area: &PixelBox,
    fit: bool,
    zoom: f64,
) -> Result<CenterResult> {
    if width == 0 || height == 0 {
        return Err(Error::config_invalid(format!(
            "destination canvas {width}x{height} is empty"
        )));
    }
    if !zoom.is_finite() {
        return Err(Error::config_invalid(format!("zoom {zoom} is not finite")));
    }

    let (width, height) = (width as i64, height as i64);

    let bw = ((area.right as f64 - area.left as f64) * zoom) as i64;
    let bh = ((area.bottom as f64 - area.top as f64) * zoom) as i64;
    if bw <= 0 || bh <= 0 {
        return Err(Error::degenerate_box(format!(
            "box {area:?} zoomed by {zoom} is {bw}x{bh}"
        )));
    }

    let mut x = (width - bw) / 2;
    let mut y = (height - bh) / 2;
    let mut scale = 1.0;

    if (x < 0 || y < 0) && fit {
        if x <= y {
            scale = truncate_scale((bw - 2 * x.abs()) as f64 / bw as f64);
            let bh = (bh as f64 * scale) as i64;
            x = 0;
            y = (height - bh) / 2;
        } else {
            scale = truncate_scale((bh - 2 * y.abs()) as f64 / bh as f64);
            let bw = (bw as f64 * scale) as i64;
            x = (width - bw) / 2;
            y = 0;
        }
    }

    if scale <= 0.0 {
        return Err(Error::degenerate_box(format!(
            "box {area:?} needs a scale below 1/{SCALE_PRECISION} to fit {width}x{height}"
        )));
    }

    let result = CenterResult { x, y, scale };
    debug!("centered {bw}x{bh} box on {width}x{height} canvas: {result:?}");
    Ok(result)
}

#[inline]
fn truncate_scale(scale: f64) -> f64 {
    (scale * SCALE_PRECISION).trunc() / SCALE_PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;
    use facecrop_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn pixel_box(top: u32, left: u32, right: u32, bottom: u32) -> PixelBox {
        PixelBox {
            top,
            left,
            right,
            bottom,
        }
    }

    #[test_case(500, 500, pixel_box(200, 200, 400, 400), true, 1.0, (150, 150, 1.0); "fits")]
    #[test_case(500, 500, pixel_box(200, 200, 700, 400), true, 1.0, (0, 150, 1.0); "exact width")]
    #[test_case(500, 500, pixel_box(200, 200, 900, 400), true, 1.0, (0, 179, 0.71428); "wide overflow")]
    #[test_case(500, 500, pixel_box(200, 200, 400, 900), true, 1.0, (179, 0, 0.71428); "tall overflow")]
    #[test_case(500, 500, pixel_box(200, 200, 900, 900), true, 1.0, (0, 0, 0.71428); "square overflow")]
    #[test_case(550, 550, pixel_box(200, 200, 900, 900), true, 1.0, (0, 0, 0.78571); "square overflow on larger canvas")]
    #[test_case(500, 550, pixel_box(200, 200, 900, 900), true, 1.0, (0, 25, 0.71428); "width drives on tall canvas")]
    #[test_case(500, 500, pixel_box(200, 200, 900, 400), true, 0.5, (75, 200, 1.0); "zoomed out")]
    #[test_case(500, 500, pixel_box(0, 0, 701, 100), false, 1.0, (-100, 200, 1.0); "no fit odd overflow truncates")]
    #[test_case(500, 500, pixel_box(0, 0, 701, 100), true, 1.0, (0, 214, 0.71469); "odd overflow")]
    #[test_case(500, 500, pixel_box(0, 0, 100, 701), false, 1.0, (200, -100, 1.0); "no fit odd tall overflow truncates")]
    #[test_case(500, 500, pixel_box(200, 200, 900, 900), false, 1.0, (-100, -100, 1.0); "no fit square")]
    #[test_case(500, 500, pixel_box(200, 200, 900, 400), false, 1.0, (-100, 150, 1.0); "no fit wide")]
    fn test_center_box(
        width: u32,
        height: u32,
        area: PixelBox,
        fit: bool,
        zoom: f64,
        expected: (i64, i64, f64),
    ) {
        let (x, y, scale) = expected;
        assert_eq!(
            center_box(width, height, &area, fit, zoom).expect("box must be centered"),
            CenterResult { x, y, scale }
        );
    }

    #[test]
    fn test_center_box_zoom_in_overflows() {
        // 200x200 zoomed to 600x600 overflows a 500x500 canvas by 100 on each axis.
        let area = pixel_box(0, 0, 200, 200);
        let result = center_box(500, 500, &area, true, 3.0).unwrap();
        assert_eq!(result.x, 0);
        assert_eq!(result.y, 0);
        assert_eq!(result.scale, 0.83333);
    }

    #[test]
    fn test_center_box_scale_is_truncated() {
        let area = pixel_box(0, 0, 700, 300);
        let result = center_box(500, 500, &area, true, 1.0).unwrap();
        assert_eq!(result.scale, 0.71428);
        assert_eq!(
            (result.scale * SCALE_PRECISION).fract(),
            0.0,
            "scale must carry at most five decimal digits"
        );
    }

    #[test_case(pixel_box(200, 200, 200, 400), 1.0; "zero width")]
    #[test_case(pixel_box(200, 200, 400, 200), 1.0; "zero height")]
    #[test_case(pixel_box(200, 200, 400, 400), 0.0; "zero zoom")]
    #[test_case(pixel_box(200, 200, 400, 400), -1.0; "negative zoom")]
    #[test_case(pixel_box(400, 400, 200, 200), 1.0; "inverted")]
    fn test_center_box_degenerate(area: PixelBox, zoom: f64) {
        let err = center_box(500, 500, &area, true, zoom).expect_err("box must be rejected");
        assert_eq!(err.kind(), ErrorKind::DegenerateBox);
    }

    #[test_case(1, 1, pixel_box(0, 0, 1, 1_000_000); "tall box on single pixel")]
    #[test_case(1, 1, pixel_box(0, 0, 1_000_000, 1); "wide box on single pixel")]
    #[test_case(3, 2, pixel_box(0, 0, 2, 2_000_000); "tall box on tiny canvas")]
    fn test_center_box_scale_underflow(width: u32, height: u32, area: PixelBox) {
        let err = center_box(width, height, &area, true, 1.0).expect_err("scale must not be zero");
        assert_eq!(err.kind(), ErrorKind::DegenerateBox);
    }

    #[test]
    fn test_center_box_invalid_input() {
        let area = pixel_box(200, 200, 400, 400);

        let err = center_box(0, 500, &area, true, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let err = center_box(500, 500, &area, true, f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
