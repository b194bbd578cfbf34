//! `airbnb-api-http` is an async client for the Airbnb listing-search API.
//!
//! Every call goes through the same pipeline:
//! - [`build_request`] adds the API key and a rotated `User-Agent`
//! - [`Executor::execute`] retries non-success responses with jittered backoff
//! - [`read_body`] returns the raw body of the final 200 response
//!
//! [`AirbnbClient::query`] wraps all three.

mod client;
mod error;
mod executor;
mod identity;
mod listing;
mod options;
mod reader;
mod request;

pub use client::{AirbnbClient, DEFAULT_BASE_URL};
pub use error::AirbnbError;
pub use executor::{Execution, Executor, Outcome};
pub use identity::{pick_identity, pick_identity_with, USER_AGENTS};
pub use listing::{amenity_exists, extract_listing_id, ListingAmenity};
pub use options::{ClientOptions, RetryPolicy};
pub use reader::read_body;
pub use request::{
    add_query_strings, build_request, query_param, OutboundRequest, Verb, API_KEY_HEADER,
};
pub use tokio_util::sync::CancellationToken;

pub type Result<T> = std::result::Result<T, AirbnbError>;
