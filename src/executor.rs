use std::time::Duration;

use reqwest::{Response, StatusCode};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::{AirbnbError, ClientOptions, OutboundRequest, Result};

/// Terminal state of an executed request that produced a response.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The last response has status 200.
    Succeeded,
    /// The retry cap was reached; the last response is a non-success.
    Exhausted,
}

/// Final response of an [`Executor::execute`] call plus retry bookkeeping.
#[derive(Debug)]
pub struct Execution {
    response: Response,
    outcome: Outcome,
    sends: usize,
    delays: Vec<Duration>,
}

impl Execution {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Number of sends performed, including the first one.
    pub fn sends(&self) -> usize {
        self.sends
    }

    /// Backoff delays waited between sends, in order.
    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    pub fn into_response(self) -> Response {
        self.response
    }
}

/// Sends a built request until it gets a 200 or runs out of retries.
///
/// Sends of one request are strictly sequential. The underlying
/// `reqwest::Client` may be shared between concurrent executions.
#[derive(Clone, Debug)]
pub struct Executor {
    http: reqwest::Client,
    options: ClientOptions,
}

impl Executor {
    pub fn new(http: reqwest::Client, options: ClientOptions) -> Self {
        Self { http, options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Runs the retry loop for `request`.
    ///
    /// Returns `Ok` with [`Outcome::Exhausted`] when every send answered with
    /// a non-success status, so the caller still sees the last response.
    /// Transport failures are returned as [`AirbnbError::Transport`] unless
    /// [`ClientOptions::retry_transport_errors`] is set. Cancelling `cancel`
    /// aborts an in-flight send or backoff wait with [`AirbnbError::Cancelled`].
    pub async fn execute(
        &self,
        request: &OutboundRequest,
        cancel: &CancellationToken,
    ) -> Result<Execution> {
        let max_retries = self.options.retry.max_retries();
        let mut sends = 0usize;
        let mut delays = Vec::new();

        loop {
            if self.options.debug {
                tracing::debug!(
                    attempt = sends,
                    "attempting a {} to: {}",
                    request.verb(),
                    request.redacted_url()
                );
            }

            let sent = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AirbnbError::Cancelled),
                sent = self.send(request) => sent,
            };
            let attempt = sends;
            sends += 1;

            match sent {
                Ok(response) if response.status() == StatusCode::OK => {
                    return Ok(Execution {
                        response,
                        outcome: Outcome::Succeeded,
                        sends,
                        delays,
                    });
                }
                Ok(response) => {
                    if self.options.debug {
                        tracing::debug!(attempt, "response code: {}", response.status().as_u16());
                    }
                    if attempt >= max_retries {
                        tracing::warn!(
                            sends,
                            status = response.status().as_u16(),
                            "giving up on {}",
                            request.redacted_url()
                        );
                        return Ok(Execution {
                            response,
                            outcome: Outcome::Exhausted,
                            sends,
                            delays,
                        });
                    }
                }
                Err(err) => {
                    if !self.options.retry_transport_errors || attempt >= max_retries {
                        tracing::warn!(sends, error = %err, "transport failure");
                        return Err(AirbnbError::Transport(err));
                    }
                    if self.options.debug {
                        tracing::debug!(attempt, error = %err, "transport failure, retrying");
                    }
                }
            }

            let delay = self.options.retry.next_delay(&mut rand::thread_rng());
            if self.options.debug {
                tracing::debug!("waiting for {delay:?}");
            }
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AirbnbError::Cancelled),
                _ = sleep(delay) => {}
            }
            delays.push(delay);
        }
    }

    async fn send(&self, request: &OutboundRequest) -> std::result::Result<Response, reqwest::Error> {
        self.http
            .request(request.verb().into(), request.url().clone())
            .headers(request.headers().clone())
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .send()
            .await
    }
}
