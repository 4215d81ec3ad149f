use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{
    Client, Method, Response,
    header::{AUTHORIZATION, HeaderValue},
};
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use super::{ApiError, LinkdingApi};
use crate::payload::Payload;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated HTTP client for a single linkding instance.
#[derive(Clone, Debug)]
pub struct LinkdingClient {
    http: Client,
    base: Url,
    token: String,
}

impl LinkdingClient {
    /// Build a client for the instance at `base_url`.
    ///
    /// A sub-path in the base URL (e.g. `https://host/linkding`) is preserved.
    ///
    /// # Errors
    ///
    /// Fails when `base_url` is not an absolute URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base,
            token: token.into(),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("linkding-cli/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn auth_header(&self) -> Result<HeaderValue, ApiError> {
        HeaderValue::from_str(&format!("Token {}", self.token))
            .map_err(|e| ApiError::Token(e.to_string()))
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in query {
                qp.append_pair(k, v);
            }
        }

        debug!(%method, %url, "sending request");
        let mut req = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.auth_header()?);
        if let Some(b) = body {
            req = req.json(&b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        debug!(%status, "received response");
        if !status.is_success() {
            let body = error_body(resp.text().await);
            return Err(ApiError::Server { status, body });
        }
        Ok(resp)
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let resp = self.send(method, path, query, body).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    async fn request_no_body(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.send(method, path, &[], None).await?;
        Ok(())
    }
}

fn error_body<E: fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|err| format!("<unreadable response body: {err}>"))
}

/// Flatten list filters into query parameters; `query` is sent as linkding's `q`.
fn query_params(params: &Payload) -> Vec<(&str, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let name = if key == "query" { "q" } else { key.as_str() };
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (name, value)
        })
        .collect()
}

#[async_trait]
impl LinkdingApi for LinkdingClient {
    async fn bookmarks(&self, params: &Payload) -> Result<Value, ApiError> {
        self.request_json(Method::GET, "api/bookmarks/", &query_params(params), None)
            .await
    }

    async fn archived_bookmarks(&self, params: &Payload) -> Result<Value, ApiError> {
        self.request_json(
            Method::GET,
            "api/bookmarks/archived/",
            &query_params(params),
            None,
        )
        .await
    }

    async fn bookmark(&self, id: u64) -> Result<Value, ApiError> {
        let path = format!("api/bookmarks/{id}/");
        self.request_json(Method::GET, &path, &[], None).await
    }

    async fn create_bookmark(&self, url: &str, payload: &Payload) -> Result<Value, ApiError> {
        let mut body = Map::new();
        body.insert("url".into(), Value::from(url));
        body.extend(payload.clone());
        self.request_json(Method::POST, "api/bookmarks/", &[], Some(Value::Object(body)))
            .await
    }

    async fn update_bookmark(&self, id: u64, payload: &Payload) -> Result<Value, ApiError> {
        let path = format!("api/bookmarks/{id}/");
        self.request_json(
            Method::PATCH,
            &path,
            &[],
            Some(Value::Object(payload.clone())),
        )
        .await
    }

    async fn archive_bookmark(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("api/bookmarks/{id}/archive/");
        self.request_no_body(Method::POST, &path).await
    }

    async fn unarchive_bookmark(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("api/bookmarks/{id}/unarchive/");
        self.request_no_body(Method::POST, &path).await
    }

    async fn delete_bookmark(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("api/bookmarks/{id}/");
        self.request_no_body(Method::DELETE, &path).await
    }

    async fn tags(&self, params: &Payload) -> Result<Value, ApiError> {
        self.request_json(Method::GET, "api/tags/", &query_params(params), None)
            .await
    }

    async fn tag(&self, id: u64) -> Result<Value, ApiError> {
        let path = format!("api/tags/{id}/");
        self.request_json(Method::GET, &path, &[], None).await
    }

    async fn create_tag(&self, name: &str) -> Result<Value, ApiError> {
        let mut body = Map::new();
        body.insert("name".into(), Value::from(name));
        self.request_json(Method::POST, "api/tags/", &[], Some(Value::Object(body)))
            .await
    }

    async fn user_profile(&self) -> Result<Value, ApiError> {
        self.request_json(Method::GET, "api/user/profile/", &[], None)
            .await
    }
}
