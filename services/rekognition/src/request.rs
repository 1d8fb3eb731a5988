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

use bytes::Bytes;
use facecrop_core::time::{now, DateTime};
use facecrop_core::Result;
use http::request::Parts;
use http::Method;

use crate::Service;

/// A request waiting to be signed.
///
/// Build one per call: the timestamp is captured when the request is
/// created and [`RequestSigner::sign`](crate::RequestSigner::sign) consumes
/// it, so a signature can never be computed twice from a stale time.
#[derive(Debug, Clone)]
pub struct SignableRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Bytes,
    pub(crate) service: Service,
    pub(crate) operation: Option<String>,
    pub(crate) time: DateTime,
}

impl SignableRequest {
    /// Create a `POST /` request with an empty body, timestamped now.
    pub fn new(service: Service) -> Self {
        Self::new_at(service, now())
    }

    /// Create a `POST /` request with an empty body at the given time.
    ///
    /// # Note
    ///
    /// Requests must be signed with the time they are sent at. Only pass a
    /// fixed time for reproducible signatures, like in tests.
    pub fn new_at(service: Service, time: DateTime) -> Self {
        Self {
            method: Method::POST,
            path: "/".to_string(),
            query: String::new(),
            headers: Vec::new(),
            body: Bytes::new(),
            service,
            operation: None,
            time,
        }
    }

    /// Build a signable request from `http::request::Parts` and its body.
    ///
    /// Headers already on the request are kept and take precedence over the
    /// ones added while signing.
    pub fn from_parts(
        parts: &Parts,
        body: impl Into<Bytes>,
        service: Service,
        time: DateTime,
    ) -> Result<Self> {
        let mut req = Self::new_at(service, time)
            .with_method(parts.method.clone())
            .with_path(parts.uri.path());
        if let Some(query) = parts.uri.query() {
            req = req.with_query(query);
        }
        for (k, v) in parts.headers.iter() {
            req = req.with_header(k.as_str(), v.to_str()?);
        }

        Ok(req.with_body(body))
    }

    /// Set the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the URI path. Anything after a `?` becomes the query string.
    ///
    /// Each segment is signed and sent encoded once, the way S3 does it.
    /// Services that sign doubly encoded segments need a path made only of
    /// unreserved characters, like the `/` every Rekognition call uses.
    pub fn with_path(mut self, path: &str) -> Self {
        match path.split_once('?') {
            Some((path, query)) => {
                self.path = path.to_string();
                self.query = query.to_string();
            }
            None => self.path = path.to_string(),
        }
        self
    }

    /// Set the raw query string, like `a=b&c=d`.
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// Add a header. Names are compared lower-cased, a later value for
    /// the same name wins.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the service operation, like `DetectFaces`.
    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    /// Time this request will be signed with.
    pub fn time(&self) -> DateTime {
        self.time
    }

    /// Target service.
    pub fn service(&self) -> Service {
        self.service
    }

    /// Request body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facecrop_core::time::parse_iso8601;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let time = parse_iso8601("20210304T050607Z").unwrap();
        let req = SignableRequest::new_at(Service::Rekognition, time);

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/");
        assert_eq!(req.query, "");
        assert!(req.body().is_empty());
        assert_eq!(req.time(), time);
    }

    #[test]
    fn test_path_with_query() {
        let req = SignableRequest::new(Service::Rekognition).with_path("/hello?b=2&a=1");

        assert_eq!(req.path, "/hello");
        assert_eq!(req.query, "b=2&a=1");
    }

    #[test]
    fn test_from_parts() {
        let (parts, _) = http::Request::get("https://localhost:4566/path?x=1")
            .header("X-Custom", "value")
            .body(())
            .unwrap()
            .into_parts();
        let time = parse_iso8601("20210304T050607Z").unwrap();

        let req = SignableRequest::from_parts(&parts, "body", Service::Rekognition, time).unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/path");
        assert_eq!(req.query, "x=1");
        assert_eq!(
            req.headers,
            vec![("x-custom".to_string(), "value".to_string())]
        );
        assert_eq!(req.body().as_ref(), b"body");
    }
}
