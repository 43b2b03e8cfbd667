use crate::model::{Orders, UserId};
use crate::order_proxy::OrderError;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Client for the external order service.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct OrderClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OrderClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, OrderError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OrderError::Client(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches the orders of `user_id` and returns the body unchanged.
    ///
    /// Transport failures, timeouts, non-2xx statuses and non-JSON bodies all collapse to
    /// [`OrderError::Upstream`]; the cause is logged here and nowhere else.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, user_id: UserId) -> Result<Orders, OrderError> {
        let url = format!("{}/orders/{}", self.base_url, user_id);
        debug!(%url, "Sending request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| upstream_failure(&url, "request failed", &e))?;

        let response = response
            .error_for_status()
            .map_err(|e| upstream_failure(&url, "error status", &e))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| upstream_failure(&url, "undecodable body", &e))?;

        info!(%url, "Orders fetched");
        Ok(Orders(body))
    }
}

fn upstream_failure(url: &str, stage: &str, error: &reqwest::Error) -> OrderError {
    warn!(
        %url,
        stage,
        timeout = error.is_timeout(),
        status = ?error.status(),
        error = %error,
        "Order service call failed"
    );
    OrderError::Upstream(format!("{stage}: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = OrderClient::new("http://orders.local:80/", Duration::from_millis(250)).unwrap();
        assert_eq!(client.base_url(), "http://orders.local:80");
        assert_eq!(client.timeout(), Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_upstream_error() {
        // Port 1 on loopback is never served in the test environment.
        let client = OrderClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let result = client.get_orders(1).await;
        assert!(matches!(result, Err(OrderError::Upstream(_))), "got {result:?}");
    }
}
