use airbnb_api_http::{extract_listing_id, query_param, AirbnbClient, ClientOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AirbnbClient::from_env()?.with_options(ClientOptions {
        debug: true,
        ..ClientOptions::default()
    });

    let listing_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.airbnb.com.au/rooms/12345".to_owned());
    let listing_id = extract_listing_id(&listing_url);
    anyhow::ensure!(!listing_id.is_empty(), "no listing id in {listing_url}");

    let body = client
        .get(
            &format!("pdp_listing_details/{listing_id}"),
            &[
                "_format=for_rooms_show".to_owned(),
                query_param("locale", "en-AU"),
            ],
        )
        .await?;

    println!("listing {listing_id}: {} byte(s)", body.len());
    Ok(())
}
