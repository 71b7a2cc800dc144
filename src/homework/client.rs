use crate::{config::AppConfig, errors::PollError};
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;
use std::future::Future;

/// Source of homework statuses.
pub trait HomeworkApi {
    /// Fetch everything that changed since `from_date` (unix seconds).
    ///
    /// A single attempt: retrying is up to the caller.
    fn fetch_statuses(&self, from_date: i64)
        -> impl Future<Output = Result<Value, PollError>> + Send;
}

impl<T: HomeworkApi> HomeworkApi for &T {
    fn fetch_statuses(
        &self,
        from_date: i64,
    ) -> impl Future<Output = Result<Value, PollError>> + Send {
        (**self).fetch_statuses(from_date)
    }
}

pub struct PracticumClient {
    client: Client,
    endpoint: String,
    authorization: String,
}

impl PracticumClient {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            authorization: format!("OAuth {}", config.credentials.api_token()),
        })
    }
}

impl HomeworkApi for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, PollError> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(endpoint = %self.endpoint, %status, "Got non-OK response from API");
            return Err(PollError::ServerAnswer {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
