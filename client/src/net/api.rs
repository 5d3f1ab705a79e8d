//! REST auth collaborator for the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: calls fail with `ApiError::Transport` since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps into `ApiError` so pages can word the notice from the
//! status alone.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use inventory_session::api::{LOGIN_PATH, REGISTER_PATH, endpoint};
use inventory_session::{ApiError, AuthApi, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Backend base URL, fixed at build time through `INVENTORY_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("INVENTORY_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(api_base_url())
    }
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(ApiError::from_status(resp.status(), &text));
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(ApiError::Transport(format!("{url} is only reachable from the browser")))
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json(REGISTER_PATH, request).await
    }
}
