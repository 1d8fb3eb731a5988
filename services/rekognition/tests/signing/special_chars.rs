use super::{expected_signature, init_signing_test, signature_of};
use anyhow::Result;
use facecrop_rekognition::{Service, SignableRequest};
use http::Method;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

#[test]
fn test_sign_path_with_special_characters() -> Result<()> {
    let (signer, time) = init_signing_test()?;
    let path = format!(
        "/{}",
        utf8_percent_encode("!@#$%^&*()_+-=;:'><,/?.txt", NON_ALPHANUMERIC)
    );

    let req = SignableRequest::new_at(Service::Rekognition, time)
        .with_method(Method::GET)
        .with_path(&path);
    let signed = signer.sign(req)?;

    assert_eq!(
        signed.path_and_query(),
        "/%21%40%23%24%25%5E%26%2A%28%29_%2B-%3D%3B%3A%27%3E%3C%2C%2F%3F.txt"
    );
    assert_eq!(signature_of(&signed), expected_signature(&signed, "20210304"));

    let req = signed.into_http_request("https://rekognition.us-east-1.amazonaws.com")?;
    assert!(req.uri().path().ends_with("%3F.txt"));
    Ok(())
}

#[test]
fn test_sign_query_with_special_characters() -> Result<()> {
    let (signer, time) = init_signing_test()?;

    let req = SignableRequest::new_at(Service::Rekognition, time)
        .with_method(Method::GET)
        .with_query("prefix=a b&delimiter=/&list-type=2");
    let signed = signer.sign(req)?;

    assert_eq!(
        signed.path_and_query(),
        "/?delimiter=%2F&list-type=2&prefix=a%20b"
    );
    assert_eq!(signature_of(&signed), expected_signature(&signed, "20210304"));
    Ok(())
}

#[test]
fn test_sign_header_with_line_break_is_rejected() -> Result<()> {
    let (signer, time) = init_signing_test()?;

    let req = SignableRequest::new_at(Service::Rekognition, time)
        .with_header("x-custom", "line\nbreak");

    assert!(signer.sign(req).is_err());
    Ok(())
}
