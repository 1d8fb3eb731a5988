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

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::mem;
use std::str::FromStr;

use bytes::Bytes;
use facecrop_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use facecrop_core::time::{format_date, format_iso8601, DateTime};
use facecrop_core::utils::RedactHeaders;
use facecrop_core::{Error, Result};
use http::header::{HeaderName, HeaderValue};
use http::request::Parts;
use http::uri::PathAndQuery;
use http::{Method, Uri};
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};

use crate::constants::*;
use crate::{ClientCredentials, SignableRequest};

/// Canonical form of a request, the input of an AWS SigV4 signature.
///
/// - [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: Method,
    path: String,
    query: String,
    headers: Vec<(String, String)>,
    content_hash: String,
}

impl CanonicalRequest {
    /// Canonicalize the request line and headers.
    ///
    /// Header names are lower-cased and sorted byte-wise; when a name shows
    /// up more than once the last value wins. The content hash is the
    /// `x-amz-content-sha256` header, or `UNSIGNED-PAYLOAD` without it.
    pub fn build(
        method: &Method,
        path: &str,
        query: &str,
        headers: &[(String, String)],
    ) -> Result<Self> {
        let headers = canonicalize_headers(headers)?;
        let content_hash = headers
            .get(X_AMZ_CONTENT_SHA_256)
            .cloned()
            .unwrap_or_else(|| UNSIGNED_PAYLOAD.to_string());

        Ok(Self {
            method: method.clone(),
            path: canonicalize_path(path)?,
            query: canonicalize_query(query),
            headers: headers.into_iter().collect(),
            content_hash,
        })
    }

    /// Canonical path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Canonical query, sorted and percent-encoded.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Headers sorted by lower-cased name.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Hex SHA-256 of the body, or `UNSIGNED-PAYLOAD`.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Signed header names joined by `;`.
    pub fn signed_headers(&self) -> String {
        self.headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Hex SHA-256 of the canonical request string.
    pub fn hash(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.query)?;
        for (k, v) in self.headers.iter() {
            writeln!(f, "{k}:{v}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers())?;
        write!(f, "{}", self.content_hash)
    }
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(time: DateTime, scope: &str, hashed_canonical_request: &str) -> String {
    format!(
        "{ALGORITHM}\n{}\n{scope}\n{hashed_canonical_request}",
        format_iso8601(time)
    )
}

/// Derive the signing key scoped to a date, region and service.
///
/// Every step is keyed by the raw digest of the previous one, never by its
/// hex form.
pub fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}

/// RequestSigner that implement AWS SigV4 for the face-detection service.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer keeps no clock: every [`SignableRequest`] carries the time it
/// is signed with.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: ClientCredentials,
}

impl RequestSigner {
    /// Create a new signer for the given credentials.
    pub fn new(credentials: ClientCredentials) -> Self {
        Self { credentials }
    }

    /// Credentials used by this signer.
    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// Sign the request, returning the complete header set.
    ///
    /// Access key and secret are not checked here: a wrong pair yields a
    /// signature the service rejects. An empty region or host fails with
    /// [`ErrorKind::ConfigInvalid`](facecrop_core::ErrorKind::ConfigInvalid),
    /// a header value with a line break with
    /// [`ErrorKind::RequestInvalid`](facecrop_core::ErrorKind::RequestInvalid).
    pub fn sign(&self, req: SignableRequest) -> Result<SignedRequest> {
        let cred = &self.credentials;
        if cred.region().is_empty() {
            return Err(Error::config_invalid("region is required for signing"));
        }
        if cred.host().is_empty() {
            return Err(Error::config_invalid("host is required for signing"));
        }

        let SignableRequest {
            method,
            path,
            query,
            headers: extra_headers,
            body,
            service,
            operation,
            time: now,
        } = req;

        let mut headers = Vec::with_capacity(extra_headers.len() + 5);
        headers.push((HOST.to_string(), cred.host().to_string()));
        headers.push((X_AMZ_DATE.to_string(), format_iso8601(now)));
        if !body.is_empty() {
            headers.push((X_AMZ_CONTENT_SHA_256.to_string(), hex_sha256(&body)));
        }
        if let Some(operation) = &operation {
            headers.push((CONTENT_TYPE.to_string(), AMZ_JSON_1_1.to_string()));
            headers.push((
                X_AMZ_TARGET.to_string(),
                format!("{}.{operation}", service.target_prefix()),
            ));
        }
        // Caller headers come last so they win on collision.
        headers.extend(
            extra_headers
                .into_iter()
                .filter(|(k, _)| !k.eq_ignore_ascii_case(AUTHORIZATION)),
        );

        let creq = CanonicalRequest::build(&method, &path, &query, &headers)?;
        debug!("calculated canonical request: {creq}");

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/{AWS4_REQUEST}",
            format_date(now),
            cred.region(),
            service.signing_name()
        );
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(now, &scope, &creq.hash());
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            cred.secret_access_key(),
            now,
            cred.region(),
            service.signing_name(),
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let authorization = format!(
            "{ALGORITHM} Credential={}/{scope},SignedHeaders={},Signature={signature}",
            cred.access_key_id(),
            creq.signed_headers(),
        );

        let CanonicalRequest {
            method,
            path,
            query,
            mut headers,
            ..
        } = creq;
        headers.push((AUTHORIZATION.to_string(), authorization));
        headers.sort_by(|a, b| a.0.cmp(&b.0));

        let signed = SignedRequest {
            method,
            path,
            query,
            headers,
            body,
        };
        debug!("signed request: {signed:?}");
        Ok(signed)
    }
}

/// A signed request: send it exactly as it is.
#[derive(Clone)]
pub struct SignedRequest {
    method: Method,
    path: String,
    query: String,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl Debug for SignedRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedRequest")
            .field("method", &self.method)
            .field("path_and_query", &self.path_and_query())
            .field("headers", &RedactHeaders(&self.headers))
            .field("body_len", &self.body.len())
            .finish()
    }
}

impl SignedRequest {
    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path and query as signed, like `/path?a=b`.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    /// Headers sorted by name, `authorization` included.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Get header value by name, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Request body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Apply the signed method, path, query and headers back to
    /// `http::request::Parts`, returning the body to send with it.
    ///
    /// Scheme and authority of `parts` are kept. Existing headers are
    /// replaced by the signed set.
    pub fn apply(self, parts: &mut Parts) -> Result<Bytes> {
        let path_and_query = self.path_and_query();

        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.path_and_query = Some(PathAndQuery::from_str(&path_and_query)?);
            Uri::from_parts(uri_parts)?
        };

        parts.headers.clear();
        for (k, v) in self.headers {
            let name = HeaderName::from_str(&k)?;
            let mut value = HeaderValue::from_str(&v)?;
            if name.as_str() == AUTHORIZATION {
                value.set_sensitive(true);
            }
            parts.headers.insert(name, value);
        }

        Ok(self.body)
    }

    /// Turn into an `http::Request` against `endpoint`, like
    /// `https://rekognition.us-east-1.amazonaws.com`.
    pub fn into_http_request(self, endpoint: &str) -> Result<http::Request<Bytes>> {
        let uri = format!(
            "{}{}",
            endpoint.trim_end_matches('/'),
            self.path_and_query()
        );
        let (mut parts, _) = http::Request::builder().uri(uri).body(())?.into_parts();
        let body = self.apply(&mut parts)?;

        Ok(http::Request::from_parts(parts, body))
    }
}

/// Encode every path segment once with the AWS query set, so an encoded
/// `/` inside a segment stays encoded.
fn canonicalize_path(path: &str) -> Result<String> {
    let mut segments = Vec::new();
    for segment in path.trim_start_matches('/').split('/') {
        let decoded = percent_decode_str(segment).decode_utf8().map_err(|e| {
            Error::request_invalid(format!("path {path} is not valid utf-8")).with_source(e)
        })?;
        segments.push(utf8_percent_encode(&decoded, &AWS_QUERY_ENCODE_SET).to_string());
    }

    Ok(format!("/{}", segments.join("/")))
}

fn canonicalize_query(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut pairs = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
    // Sort by param name
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn canonicalize_headers(headers: &[(String, String)]) -> Result<BTreeMap<String, String>> {
    let mut canonical = BTreeMap::new();

    for (k, v) in headers {
        let name = HeaderName::from_bytes(k.as_bytes())?;
        if v.contains(['\r', '\n']) {
            return Err(Error::request_invalid(format!(
                "value of header {name} contains a line break"
            )));
        }

        let value = v.trim_matches([' ', '\t']);
        // Reject anything else a header value can't carry.
        HeaderValue::from_str(value)?;

        canonical.insert(name.as_str().to_string(), value.to_string());
    }

    Ok(canonical)
}
