use std::env;
use std::fs;

use anyhow::{anyhow, Result};
use facecrop::rekognition::DetectFacesOutput;
use facecrop::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(path), Some(width), Some(height)) = (args.next(), args.next(), args.next()) else {
        return Err(anyhow!(
            "usage: plan_crops <detect-faces-response.json> <width> <height>"
        ));
    };

    let settings = Settings::default().from_env();
    let output = DetectFacesOutput::from_slice(&fs::read(path)?)?;

    let plans = facecrop::plan_from_detection(
        &output,
        width.parse()?,
        height.parse()?,
        &settings.crop,
    );
    match plans {
        Ok(plans) => {
            for plan in plans {
                println!(
                    "{:?}: resize to {}x{}, crop {}x{} at ({}, {})",
                    plan.kind,
                    plan.resize_width,
                    plan.resize_height,
                    plan.crop.width,
                    plan.crop.height,
                    plan.crop.x,
                    plan.crop.y
                );
            }
        }
        Err(err) if err.is_nothing_to_crop() => println!("Nothing to crop: {err}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
