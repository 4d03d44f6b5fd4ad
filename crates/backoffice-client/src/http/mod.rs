//! HTTP implementation of the back-office client.
//!
//! One method per endpoint, grouped by resource in the submodules. Every call
//! carries the session cookie jar and `Accept: application/json`, and resolves
//! to the parsed body whatever the status code: the server reports business
//! failures in the body.

mod admin;
mod apis;
mod assets;
mod consumption;
mod me;
mod members;
mod notifications;
mod subscriptions;
mod teams;
mod tenants;

use std::borrow::Cow;
use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::Result;

pub use admin::EntityKind;
pub use assets::AssetUpload;

const JSON: &str = "application/json";
const NDJSON: &str = "application/x-ndjson";
const ASSET_CONTENT_TYPE: &str = "Asset-Content-Type";

#[derive(Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &config.session_cookie {
            jar.add_cookie_str(cookie, &config.base_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));

        let mut builder = Client::builder()
            .cookie_provider(jar)
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        debug!(%method, path, "back-office request");
        Ok(self.http.request(method, url))
    }

    /// Send and parse the body as JSON, regardless of status.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> Result<T> {
        let response = request.send().await.map_err(|source| ClientError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, path, "non-success status, parsing body anyway");
        }

        let body = response.bytes().await.map_err(|source| ClientError::Transport {
            path: path.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let req = self.request(Method::GET, path)?;
        self.send(req, path).await
    }

    async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.request(Method::GET, path)?.query(query);
        self.send(req, path).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::POST, path)?.json(body);
        self.send(req, path).await
    }

    /// POST an action sub-resource that takes no body.
    async fn post_action<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let req = self
            .request(Method::POST, path)?
            .header(CONTENT_TYPE, JSON);
        self.send(req, path).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::PUT, path)?.json(body);
        self.send(req, path).await
    }

    async fn put_action<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self
            .request(Method::PUT, path)?
            .query(query)
            .header(CONTENT_TYPE, JSON);
        self.send(req, path).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let req = self
            .request(Method::DELETE, path)?
            .header(CONTENT_TYPE, JSON);
        self.send(req, path).await
    }

    /// POST raw bytes with an explicit content type.
    ///
    /// `asset_header` also sets `Asset-Content-Type`, which the asset store
    /// uses to remember the original type.
    async fn post_bytes<T, Q>(
        &self,
        path: &str,
        query: &Q,
        content_type: &str,
        asset_header: bool,
        bytes: Vec<u8>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut req = self
            .request(Method::POST, path)?
            .query(query)
            .header(CONTENT_TYPE, content_type);
        if asset_header {
            req = req.header(ASSET_CONTENT_TYPE, content_type);
        }
        self.send(req.body(bytes), path).await
    }

    /// POST replacement bytes for an existing asset; the server answers in the
    /// asset's own content type, hence the `Accept` override.
    async fn replace_bytes<T: DeserializeOwned>(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<T> {
        let req = self
            .request(Method::POST, path)?
            .header(ACCEPT, content_type)
            .header(CONTENT_TYPE, content_type)
            .body(bytes);
        self.send(req, path).await
    }
}

const NO_QUERY: &[(&str, &str)] = &[];

/// Percent-encode an id interpolated into a path, so `/`, `?` or `#` inside
/// it stay part of the segment.
fn seg(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
