use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ROOMS_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/rooms/([0-9]+)").expect("listing id pattern is valid"));

/// Amenity entry as returned in listing detail payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingAmenity {
    pub name: String,
    #[serde(default)]
    pub is_present: bool,
}

/// Extracts the numeric listing ID from a `/rooms/<digits>` URL.
///
/// Returns an empty string when `url` has no such segment.
pub fn extract_listing_id(url: &str) -> &str {
    ROOMS_PATH
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map_or("", |id| id.as_str())
}

/// Returns `true` when an amenity named `needle` (case-insensitive) is listed
/// and marked present.
pub fn amenity_exists(amenities: &[ListingAmenity], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    amenities
        .iter()
        .any(|amenity| amenity.is_present && amenity.name.to_lowercase() == needle)
}
