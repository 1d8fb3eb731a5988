mod special_chars;
mod standard;

use anyhow::Result;
use facecrop_core::time::{parse_iso8601, DateTime};
use facecrop_rekognition::{ClientCredentials, RequestSigner, SignedRequest};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

pub const ACCESS_KEY: &str = "AKIDEXAMPLE";
pub const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
pub const REGION: &str = "us-east-1";

/// Initialize test environment
pub fn init_signing_test() -> Result<(RequestSigner, DateTime)> {
    let _ = env_logger::builder().is_test(true).try_init();

    let signer = RequestSigner::new(ClientCredentials::new(ACCESS_KEY, SECRET_KEY, REGION));
    let time = parse_iso8601("20210304T050607Z")?;
    Ok((signer, time))
}

fn hmac(key: &[u8], data: &str) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("hmac accepts any key size");
    mac.update(data.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Recompute the signature of a signed request from its headers alone.
pub fn expected_signature(signed: &SignedRequest, date: &str) -> String {
    let headers: Vec<_> = signed
        .headers()
        .iter()
        .filter(|(k, _)| k != "authorization")
        .collect();
    let (path, query) = match signed.path_and_query().split_once('?') {
        Some((p, q)) => (p.to_string(), q.to_string()),
        None => (signed.path_and_query(), String::new()),
    };

    let mut creq = format!("{}\n{path}\n{query}\n", signed.method());
    for (k, v) in headers.iter() {
        creq.push_str(&format!("{k}:{v}\n"));
    }
    let signed_headers = headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");
    creq.push_str(&format!(
        "\n{signed_headers}\n{}",
        signed
            .header("x-amz-content-sha256")
            .unwrap_or("UNSIGNED-PAYLOAD")
    ));

    let timestamp = signed.header("x-amz-date").expect("x-amz-date must be set");
    let scope = format!("{date}/{REGION}/rekognition/aws4_request");
    let sts = format!(
        "AWS4-HMAC-SHA256\n{timestamp}\n{scope}\n{}",
        hex::encode(Sha256::digest(creq.as_bytes()))
    );

    let key = hmac(format!("AWS4{SECRET_KEY}").as_bytes(), date);
    let key = hmac(&key, REGION);
    let key = hmac(&key, "rekognition");
    let key = hmac(&key, "aws4_request");
    hex::encode(hmac(&key, &sts))
}

/// Extract the `Signature=` part of the authorization header.
pub fn signature_of(signed: &SignedRequest) -> &str {
    signed
        .header("authorization")
        .and_then(|v| v.rsplit_once("Signature="))
        .map(|(_, sig)| sig)
        .expect("authorization must carry a signature")
}
