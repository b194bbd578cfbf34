use airbnb_api_http::{query_param, AirbnbClient, AirbnbError, ClientOptions, Verb};

fn live_client() -> Option<AirbnbClient> {
    match AirbnbClient::from_env() {
        Ok(client) => Some(client.with_options(ClientOptions {
            debug: true,
            ..ClientOptions::default()
        })),
        Err(AirbnbError::Config(reason)) => {
            eprintln!("skipping live test: {reason}");
            None
        }
        Err(err) => panic!("unexpected client construction error: {err}"),
    }
}

#[tokio::test]
async fn live_explore_search_returns_json() {
    let Some(client) = live_client() else {
        return;
    };

    let body: serde_json::Value = client
        .query_json(
            Verb::Get,
            "explore_tabs",
            &[
                "_format=for_explore_search_web".to_owned(),
                "items_per_grid=5".to_owned(),
                query_param("query", "Sydney, NSW"),
            ],
        )
        .await
        .expect("live search must succeed");

    assert!(body.is_object(), "expected a JSON object, got {body}");
}
