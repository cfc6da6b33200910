//! HTTP request primitive for the nu3PBnB API.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use crate::error::{ApiRejection, Error};
use crate::session::Session;
use crate::types::{ApiKey, ApiUrl};

/// Header carrying the per-client API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Client for the nu3PBnB REST API.
///
/// Holds the base URL, the per-client API key, and a caller-owned [`Session`].
/// Every domain method is a thin mapping to one HTTP round trip through the
/// same request primitive; there is no retry, caching, or re-authentication.
///
/// # Example
///
/// ```no_run
/// use nu3pbnb::{ApiClient, ApiUrl, Credentials, Params, Session};
///
/// # async fn example() -> Result<(), nu3pbnb::Error> {
/// let session = Session::new();
/// let client = ApiClient::new(ApiUrl::default(), "demo_api_key_123".into(), session);
///
/// client.login(&Credentials::new("guest@example.com", "password123")).await?;
/// let page = client.get_listings(&Params::new().set("limit", 5)).await?;
/// println!("found {} listings", page.listings.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: ApiUrl,
    api_key: ApiKey,
    session: Session,
}

impl ApiClient {
    /// Create a new client for the given base URL, API key, and session.
    pub fn new(base_url: ApiUrl, api_key: ApiKey, session: Session) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("nu3pbnb/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url,
            api_key,
            session,
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    /// Returns the session this client attaches tokens from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) async fn get<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// PUT with no request body (e.g. marking a message read).
    pub(crate) async fn put_empty<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request(Method::PUT, path, None::<&()>).await
    }

    pub(crate) async fn delete<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// The request primitive: one HTTP round trip, no session mutation.
    ///
    /// The path already carries any query string. Headers are the API key,
    /// the JSON content type, and the bearer token iff the session holds one.
    async fn request<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base_url.endpoint(path);
        debug!(%method, path, "API request");

        let mut request = self.http.request(method, &url).headers(self.headers());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Headers attached to every request.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(self.api_key.as_str()).expect("invalid API key characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            let value = format!("Bearer {}", token.as_str());
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value).expect("invalid token characters"),
            );
        }

        headers
    }

    /// Parse a response body, or surface the server's rejection.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|source| Error::MalformedResponse {
                status: status.as_u16(),
                source,
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api(ApiRejection::from_body(status.as_u16(), body)))
        }
    }
}
