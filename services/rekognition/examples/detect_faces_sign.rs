use std::env;
use std::fs;

use anyhow::Result;
use facecrop_core::time::now;
use facecrop_rekognition::{Client, ClientCredentials, Config, DetectFacesInput, Image};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure credentials, falling back to demo values
    let config = Config::default().from_env();
    let credentials = match config.credentials() {
        Ok(cred) => cred,
        Err(err) => {
            println!("No usable credentials in env ({err}), using demo credentials");
            ClientCredentials::new(
                "AKIDEXAMPLE",
                "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
                &config.region,
            )
        }
    };
    let client = Client::new(credentials);

    // Read the image given on the command line
    let image = match env::args().nth(1) {
        Some(path) => fs::read(path)?,
        None => b"not really a jpeg".to_vec(),
    };

    let input = DetectFacesInput::new(Image::from_bytes(image));
    let req = client.detect_faces(&input, now())?;

    println!("{} {}", req.method(), req.uri());
    for (k, v) in req.headers() {
        if k == "authorization" {
            println!("{k}: <{} bytes>", v.len());
        } else {
            println!("{k}: {}", v.to_str()?);
        }
    }
    println!();
    println!("{} bytes of JSON body", req.body().len());
    println!("Send it with the HTTP client of your choice.");

    Ok(())
}
