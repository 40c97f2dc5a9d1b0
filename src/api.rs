//! HTTP client for the backend that owns the transactions.
//!
//! The backend is reached at a configurable base URL and exposes
//! `GET/POST /transactions` and `PUT/DELETE /transactions/{id}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::transaction::{Transaction, TransactionFields, TransactionId};

/// The ways a call to the backend can fail.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The request could not be completed, e.g. the backend is down or the
    /// response body could not be decoded.
    #[error("could not reach the transactions API: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `body` holds the response text, which the backend uses for
    /// validation messages.
    #[error("the transactions API responded with {status}: {body}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The response body as text.
        body: String,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

/// The operations the tracker needs from the backend.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Fetch every transaction, in the order the backend keeps them.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    /// Create a transaction, the backend assigns its ID and date.
    async fn create_transaction(&self, fields: &TransactionFields) -> Result<(), ApiError>;

    /// Replace the mutable fields of an existing transaction.
    async fn update_transaction(
        &self,
        id: &TransactionId,
        fields: &TransactionFields,
    ) -> Result<(), ApiError>;

    /// Delete a transaction.
    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), ApiError>;
}

/// [TransactionApi] backed by a real HTTP server.
#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    http_client: Client,
    base_url: String,
}

impl HttpTransactionApi {
    /// Create a client for the API at `base_url`, e.g. "http://127.0.0.1:5000".
    ///
    /// When `timeout` is `None` requests wait for as long as the backend takes.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/transactions", self.base_url)
    }

    fn item_url(&self, id: &TransactionId) -> String {
        format!("{}/transactions/{}", self.base_url, id)
    }
}

/// Turn a non-2xx response into [ApiError::Server] with its body text.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|error| format!("<could not read response body: {error}>"));

    Err(ApiError::Server {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl TransactionApi for HttpTransactionApi {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = self.collection_url();
        tracing::debug!("GET {url}");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .inspect_err(|error| tracing::warn!("Could not list transactions: {error}"))?;
        let response = check_status(response).await?;

        let transactions = response
            .json::<Vec<Transaction>>()
            .await
            .inspect_err(|error| tracing::warn!("Could not decode transaction list: {error}"))?;

        tracing::debug!("Fetched {} transactions", transactions.len());

        Ok(transactions)
    }

    async fn create_transaction(&self, fields: &TransactionFields) -> Result<(), ApiError> {
        let url = self.collection_url();
        tracing::debug!("POST {url}");

        let response = self
            .http_client
            .post(&url)
            .json(fields)
            .send()
            .await
            .inspect_err(|error| tracing::warn!("Could not create transaction: {error}"))?;
        check_status(response).await?;

        Ok(())
    }

    async fn update_transaction(
        &self,
        id: &TransactionId,
        fields: &TransactionFields,
    ) -> Result<(), ApiError> {
        let url = self.item_url(id);
        tracing::debug!("PUT {url}");

        let response = self
            .http_client
            .put(&url)
            .json(fields)
            .send()
            .await
            .inspect_err(|error| tracing::warn!("Could not update transaction {id}: {error}"))?;
        check_status(response).await?;

        Ok(())
    }

    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {url}");

        let response = self
            .http_client
            .delete(&url)
            .send()
            .await
            .inspect_err(|error| tracing::warn!("Could not delete transaction {id}: {error}"))?;
        check_status(response).await?;

        Ok(())
    }
}
