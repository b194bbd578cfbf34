use std::fmt;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT},
    Method, Url,
};

use crate::{identity::pick_identity, AirbnbError, Result};

/// Header carrying the API key alongside the `key` query parameter.
pub const API_KEY_HEADER: &str = "x-airbnb-api-key";

/// HTTP verb accepted by the API.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verb {
    Get,
    Post,
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Get => f.write_str("GET"),
            Verb::Post => f.write_str("POST"),
        }
    }
}

/// Fully built request, ready to be handed to the executor.
///
/// The identity header is fixed at build time, so every retry of the same
/// request presents the same `User-Agent`.
#[derive(Clone)]
pub struct OutboundRequest {
    verb: Verb,
    url: Url,
    headers: HeaderMap,
}

impl OutboundRequest {
    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the URL with the leading `key=` value masked, for logging.
    pub fn redacted_url(&self) -> String {
        let url = self.url.as_str();
        let Some((head, query)) = url.split_once('?') else {
            return url.to_owned();
        };
        match query.split_once('&') {
            Some((_, rest)) => format!("{head}?key=<redacted>&{rest}"),
            None => format!("{head}?key=<redacted>"),
        }
    }
}

impl fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutboundRequest")
            .field("verb", &self.verb)
            .field("url", &self.redacted_url())
            .field("user_agent", &self.headers.get(USER_AGENT))
            .finish()
    }
}

/// Builds an authenticated request for `path` under `base_url`.
///
/// `key=<api_key>` is always the first query parameter; `params` follow in
/// the given order and are expected to be already URL-encoded.
pub fn build_request<P: AsRef<str>>(
    verb: Verb,
    base_url: &str,
    path: &str,
    params: &[P],
    api_key: &str,
) -> Result<OutboundRequest> {
    if api_key.contains(['#', '&', '?']) {
        return Err(AirbnbError::Build(
            "api key must not contain '#', '&' or '?'".to_owned(),
        ));
    }

    let endpoint = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let key_param = format!("key={api_key}");
    let all_params =
        std::iter::once(key_param.as_str()).chain(params.iter().map(|param| param.as_ref()));
    let raw_url = add_query_strings(&endpoint, all_params);

    let url = Url::parse(&raw_url)
        .map_err(|err| AirbnbError::Build(format!("cannot parse url for '{path}': {err}")))?;
    if url.fragment().is_some() {
        return Err(AirbnbError::Build(format!(
            "url for '{path}' has a fragment; query params would be dropped"
        )));
    }

    let mut headers = HeaderMap::with_capacity(2);
    let key_value = HeaderValue::from_str(api_key)
        .map_err(|_| AirbnbError::Build("api key is not a valid header value".to_owned()))?;
    headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);
    headers.insert(USER_AGENT, HeaderValue::from_static(pick_identity()));

    Ok(OutboundRequest { verb, url, headers })
}

/// Appends `params` to `url`, `?` before the first and `&` before the rest.
pub fn add_query_strings<'a, I>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buffer = String::from(url);
    for (index, param) in params.into_iter().enumerate() {
        buffer.push(if index == 0 { '?' } else { '&' });
        buffer.push_str(param);
    }
    buffer
}

/// Builds a `key=value` entry with `value` form-urlencoded.
pub fn query_param(key: &str, value: impl AsRef<str>) -> String {
    let encoded: String =
        url::form_urlencoded::byte_serialize(value.as_ref().as_bytes()).collect();
    format!("{key}={encoded}")
}
