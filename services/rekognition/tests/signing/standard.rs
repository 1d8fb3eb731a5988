use super::{expected_signature, init_signing_test, signature_of};
use anyhow::Result;
use facecrop_rekognition::{Service, SignableRequest};
use http::Method;
use log::debug;
use sha2::{Digest, Sha256};

#[test]
fn test_sign_json_operation() -> Result<()> {
    let (signer, time) = init_signing_test()?;
    let body = r#"{"MaxResults":10}"#;

    let req = SignableRequest::new_at(Service::Rekognition, time)
        .with_operation("ListCollections")
        .with_body(body);
    let signed = signer.sign(req)?;
    debug!("signed request: {signed:?}");

    assert_eq!(
        signed.header("x-amz-content-sha256"),
        Some(hex::encode(Sha256::digest(body)).as_str())
    );
    assert_eq!(
        signed.header("x-amz-target"),
        Some("RekognitionService.ListCollections")
    );
    assert_eq!(signature_of(&signed), expected_signature(&signed, "20210304"));
    Ok(())
}

#[test]
fn test_sign_empty_body() -> Result<()> {
    let (signer, time) = init_signing_test()?;

    let req = SignableRequest::new_at(Service::Rekognition, time).with_method(Method::HEAD);
    let signed = signer.sign(req)?;

    assert_eq!(signed.header("x-amz-content-sha256"), None);
    assert_eq!(signature_of(&signed), expected_signature(&signed, "20210304"));
    Ok(())
}

#[test]
fn test_sign_from_http_parts() -> Result<()> {
    let (signer, time) = init_signing_test()?;

    let req = http::Request::post("https://rekognition.us-east-1.amazonaws.com/?b=2&a=1")
        .header("x-amz-target", "RekognitionService.DetectText")
        .header("content-type", "application/x-amz-json-1.1")
        .body("{}")?;
    let (mut parts, body) = req.into_parts();

    let signable = SignableRequest::from_parts(&parts, body, Service::Rekognition, time)?;
    let signed = signer.sign(signable)?;
    let expected = expected_signature(&signed, "20210304");
    let body = signed.apply(&mut parts)?;
    let req = http::Request::from_parts(parts, body);

    assert_eq!(
        req.uri().to_string(),
        "https://rekognition.us-east-1.amazonaws.com/?a=1&b=2"
    );
    assert_eq!(req.headers()["x-amz-target"], "RekognitionService.DetectText");
    assert!(req.headers()["authorization"]
        .to_str()?
        .ends_with(&format!("Signature={expected}")));
    Ok(())
}
