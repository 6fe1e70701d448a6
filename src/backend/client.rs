use std::sync::{Arc, RwLock};

use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::ApiError;

/// Prefix of the `Authorization` header value.
///
/// The backend authenticates with `Authorization: Token <credential>`. This is
/// the only place the scheme is spelled out.
pub const AUTH_SCHEME: &str = "Token";

/// Holder of the credential attached to outgoing requests.
///
/// Cloning shares the same slot, so the API client and the session manager
/// always see the same value. Anyone may read it; only the session manager
/// changes it.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    slot: Arc<RwLock<Option<String>>>,
}

impl Credentials {
    /// Creates a holder that starts out with the given credential.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_present(&self) -> bool {
        self.current().is_some()
    }

    pub(crate) fn set(&self, token: String) {
        *self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token);
    }

    pub(crate) fn clear(&self) {
        *self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// HTTP client bound to one backend.
///
/// The base URL and the JSON content type are fixed when the client is built.
/// Every request picks up the current credential from the injected
/// [`Credentials`]. Failures are returned as they happen: no retries and no
/// client-side timeouts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = self.send(self.request(Method::GET, path), path).await?;
        Self::decode(res).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self
            .send(self.request(Method::POST, path).json(body), path)
            .await?;
        Self::decode(res).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self
            .send(self.request(Method::PATCH, path).json(body), path)
            .await?;
        Self::decode(res).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self
            .send(self.request(Method::PUT, path).json(body), path)
            .await?;
        Self::decode(res).await
    }

    /// Sends a DELETE and discards whatever body comes back.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path), path).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.credentials.current() {
            Some(token) => builder.header(AUTHORIZATION, format!("{AUTH_SCHEME} {token}")),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        let res = builder.send().await?;
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await?;
        Err(ApiError::from_response(status, path, &body))
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let bytes = res.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
