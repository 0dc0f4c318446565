//! Thin HTTP layer over `reqwest`.
//!
//! Requests are described with a [`RequestBuilder`] and resolved into a plain
//! [`Response`] holding only owned data, so callers can decode the body, inspect
//! the status and move the result across threads freely.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::BusinessConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A simplified HTTP response that contains only owned data.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body as bytes
    pub body: Vec<u8>,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON; `what` names the payload in the error.
    pub fn json<T: DeserializeOwned>(&self, what: &'static str) -> ApiResult<T> {
        serde_json::from_slice(&self.body).map_err(|source| ApiError::Decode { what, source })
    }

    /// Turns a non-2xx response into [`ApiError::Status`].
    ///
    /// The message is the `message` field of a JSON error body when there is one,
    /// otherwise the raw body text.
    pub fn error_for_status(self) -> ApiResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let message = serde_json::from_slice::<ErrorBody>(&self.body)
            .map(|body| body.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&self.body).trim().to_owned());
        Err(ApiError::Status {
            status: self.status,
            message,
        })
    }
}

/// Shared client configured once from [`BusinessConfig`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    bearer: Option<String>,
}

impl HttpClient {
    pub fn new(config: &BusinessConfig) -> ApiResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::transport(config.api_url(), e))?;
        Ok(Self {
            inner,
            bearer: config.api_token.clone(),
        })
    }

    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Get, url)
    }

    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Post, url)
    }

    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Put, url)
    }

    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Patch, url)
    }

    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Delete, url)
    }

    fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        let builder = RequestBuilder::new(self.inner.clone(), method, url);
        match &self.bearer {
            Some(token) => builder.header("authorization", format!("Bearer {token}")),
            None => builder,
        }
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: reqwest::Client,
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    fn new(client: reqwest::Client, method: Method, url: impl Into<String>) -> Self {
        Self {
            client,
            method,
            url: url.into(),
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Append query string pairs.
    pub fn query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> ApiResult<Self> {
        let json_bytes = serde_json::to_vec(value).map_err(ApiError::Encode)?;
        self.body = Some(json_bytes);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    /// Send the request and collect status and body.
    pub async fn send(self) -> ApiResult<Response> {
        debug!("{} {} {:?}", self.method.as_str(), self.url, self.query);

        let mut request = match self.method {
            Method::Get => self.client.get(&self.url),
            Method::Post => self.client.post(&self.url),
            Method::Put => self.client.put(&self.url),
            Method::Patch => self.client.patch(&self.url),
            Method::Delete => self.client.delete(&self.url),
        };

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(&self.url, e))?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(&self.url, e))?
            .to_vec();

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> Response {
        Response {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn error_for_status_reads_json_message() {
        let err = response(409, r#"{"message":"Email déjà utilisé"}"#)
            .error_for_status()
            .expect_err("409 is an error");
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("Email déjà utilisé"));
    }

    #[test]
    fn error_for_status_falls_back_to_body_text() {
        let err = response(502, "Bad Gateway\n")
            .error_for_status()
            .expect_err("502 is an error");
        assert!(matches!(err, ApiError::Status { ref message, .. } if message == "Bad Gateway"));
    }

    #[test]
    fn success_passes_through() {
        let ok = response(204, "").error_for_status().expect("204 is success");
        assert_eq!(ok.status, 204);
        assert!(ok.body.is_empty());
    }

    #[test]
    fn json_decode_error_names_payload() {
        let err = response(200, "not json")
            .json::<Vec<u64>>("page")
            .expect_err("body is not JSON");
        assert!(err.to_string().contains("page"));
    }
}
