use std::fmt;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::{
    read_body, request::build_request, AirbnbError, ClientOptions, Executor, Result, Verb,
};

/// Default API endpoint all request paths are appended to.
pub const DEFAULT_BASE_URL: &str = "https://www.airbnb.com.au/api/v2";

#[derive(Clone)]
/// HTTP client for the Airbnb listing-search API.
pub struct AirbnbClient {
    executor: Executor,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for AirbnbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirbnbClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("options", self.executor.options())
            .finish()
    }
}

impl AirbnbClient {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a client against a custom API root.
    ///
    /// Example: `"https://www.airbnb.com/api/v2"`.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            executor: Executor::new(reqwest::Client::new(), ClientOptions::default()),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `AIRBNB_API_KEY`: API key sent as `key=` and `X-Airbnb-API-Key`
    /// - `AIRBNB_API_BASE_URL`: optional API root, defaults to
    ///   [`DEFAULT_BASE_URL`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use airbnb_api_http::AirbnbClient;
    ///
    /// let client = AirbnbClient::from_env().expect("missing AIRBNB_API_KEY");
    /// ```
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("AIRBNB_API_KEY").map_err(|_| {
            AirbnbError::Config("missing AIRBNB_API_KEY environment variable".to_owned())
        })?;
        if api_key.trim().is_empty() {
            return Err(AirbnbError::Config(
                "AIRBNB_API_KEY is set but empty".to_owned(),
            ));
        }
        let base_url = std::env::var("AIRBNB_API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Ok(Self::with_base_url(base_url, api_key.trim()))
    }

    /// Applies client options such as timeout, retry and debug logging.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.executor = Executor::new(reqwest::Client::new(), opts);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a GET to `path` and returns the raw response body.
    pub async fn get<P: AsRef<str>>(&self, path: &str, params: &[P]) -> Result<Vec<u8>> {
        self.query(Verb::Get, path, params).await
    }

    /// Sends a POST to `path` and returns the raw response body.
    pub async fn post<P: AsRef<str>>(&self, path: &str, params: &[P]) -> Result<Vec<u8>> {
        self.query(Verb::Post, path, params).await
    }

    /// Builds, sends with retries and reads the body of one API call.
    ///
    /// `params` are pre-encoded `key=value` strings appended after the API key
    /// in the given order.
    pub async fn query<P: AsRef<str>>(
        &self,
        verb: Verb,
        path: &str,
        params: &[P],
    ) -> Result<Vec<u8>> {
        self.query_with_cancel(&CancellationToken::new(), verb, path, params)
            .await
    }

    /// Same as [`AirbnbClient::query`], aborting with
    /// [`AirbnbError::Cancelled`] once `cancel` fires.
    pub async fn query_with_cancel<P: AsRef<str>>(
        &self,
        cancel: &CancellationToken,
        verb: Verb,
        path: &str,
        params: &[P],
    ) -> Result<Vec<u8>> {
        let request = build_request(verb, &self.base_url, path, params, &self.api_key)?;
        let execution = self.executor.execute(&request, cancel).await?;
        let body = read_body(execution).await?;

        if self.executor.options().debug && verb == Verb::Post {
            tracing::trace!("response body: {}", String::from_utf8_lossy(&body));
        }

        Ok(body)
    }

    /// Runs [`AirbnbClient::query`] and decodes the body as JSON.
    pub async fn query_json<T, P>(&self, verb: Verb, path: &str, params: &[P]) -> Result<T>
    where
        T: DeserializeOwned,
        P: AsRef<str>,
    {
        let body = self.query(verb, path, params).await?;
        serde_json::from_slice(&body).map_err(|err| {
            AirbnbError::Decode(format!(
                "invalid response JSON from '{path}': {err}; body: {}",
                String::from_utf8_lossy(&body)
            ))
        })
    }
}
