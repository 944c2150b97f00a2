use crate::{
    requests::ListRequest,
    responses::{ApiMessage, Page},
};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Path of an entity list endpoint, relative to `/api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub struct ListPath(pub &'static str);

impl ListPath {
    pub const STUDENTS: Self = Self("students");
    pub const TEACHERS: Self = Self("teachers");
    pub const USERS: Self = Self("users");
    pub const CLASSES: Self = Self("classes");
    pub const PAYMENTS: Self = Self("payments");
    pub const PAYMENT_REQUESTS: Self = Self("payment_requests");
    pub const COFFEE_SALES: Self = Self("coffee_sales");
    pub const MENU_ITEMS: Self = Self("menu_items");
    pub const BALANCE_RECHARGES: Self = Self("balance_recharges");
}

/// Credentials and defaults attached to every request.
#[derive(Debug, Default)]
pub struct RequestContext {
    pub auth_token: Option<SecretString>,
    /// Sent as `lang` when a request doesn't carry its own.
    pub lang: Option<String>,
}

impl RequestContext {
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(SecretString::from(token.into()));
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    pub context: RequestContext,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>, context: RequestContext) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
            context,
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        let request = match &self.context.auth_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path)).query(query);
        self.authorize(request).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch one page (or, with `export_all`, everything) from a list
    /// endpoint.
    pub async fn list_page<T: DeserializeOwned>(
        &self,
        path: ListPath,
        request: &ListRequest,
    ) -> Result<Page<T>, ClientError> {
        let mut query = request.query_pairs();
        if request.lang.is_none()
            && let Some(lang) = &self.context.lang
        {
            query.push(("lang".to_string(), lang.clone()));
        }

        tracing::debug!(path = %path, ?query, "list request");
        let response = self.get_with_query(path.0, &query).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the backend's message
    /// or the raw response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await?;
        let message = serde_json::from_str::<ApiMessage>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        return Err(ClientError::APIError(status, message));
    }
    Ok(response.json::<T>().await?)
}
