use crate::{AirbnbError, Execution, Outcome, Result};

/// Drains the body of a successful execution.
///
/// An exhausted execution becomes [`AirbnbError::Exhausted`] carrying the
/// last status and body text; a partial body is never returned.
pub async fn read_body(execution: Execution) -> Result<Vec<u8>> {
    let outcome = execution.outcome();
    let attempts = execution.sends();
    let response = execution.into_response();

    if outcome == Outcome::Exhausted {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|err| format!("<body unavailable: {err}>"));
        return Err(AirbnbError::Exhausted {
            status,
            attempts,
            body,
        });
    }

    let body = response.bytes().await.map_err(AirbnbError::Body)?;
    Ok(body.to_vec())
}
