//! Defines the app level error type and conversions to rendered HTML pages and toasts.
use std::sync::{Mutex, PoisonError};

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};

use crate::{
    api::ApiError, internal_server_error::InternalServerError, not_found::NotFoundError,
    toast::ToastManager, transaction::TransactionId,
};

/// A change the user asked the backend to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    /// The verb used in messages, e.g. "add" in "Failed to add transaction".
    pub fn verb(self) -> &'static str {
        match self {
            Mutation::Create => "add",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A submitted form failed the client-side field checks.
    ///
    /// The string names the offending field for the logs, users only see a
    /// generic message.
    #[error("invalid transaction form: {0}")]
    Validation(String),

    /// The transaction list could not be fetched.
    #[error("could not load transactions: {0}")]
    LoadFailed(ApiError),

    /// The backend refused or never received a create, update or delete.
    #[error("could not {} transaction: {source}", .mutation.verb())]
    MutationFailed {
        /// What the user tried to do.
        mutation: Mutation,
        /// Why it failed.
        source: ApiError,
    },

    /// The requested transaction is not in the most recently fetched list.
    #[error("transaction {0} is not in the current list")]
    TransactionNotFound(TransactionId),

    /// A shared piece of state was poisoned by a panicking thread.
    #[error("could not acquire the lock for {0}")]
    LockError(&'static str),
}

impl Error {
    /// The status code to respond with when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::LoadFailed(source) | Error::MutationFailed { source, .. } => match source {
                ApiError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
                ApiError::Server { .. } => StatusCode::BAD_GATEWAY,
            },
            Error::TransactionNotFound(_) => StatusCode::NOT_FOUND,
            Error::LockError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the user in an error toast.
    pub fn toast_message(&self) -> String {
        match self {
            Error::Validation(_) => "Please fill in all fields correctly".to_owned(),
            Error::LoadFailed(_) => "Failed to load transactions".to_owned(),
            Error::MutationFailed {
                source: ApiError::Network(_),
                ..
            } => "Error connecting to server".to_owned(),
            Error::MutationFailed {
                mutation,
                source: ApiError::Server { body, .. },
            } => format!("Failed to {} transaction: {body}", mutation.verb()),
            Error::TransactionNotFound(_) => "Transaction not found".to_owned(),
            Error::LockError(_) => {
                "Something went wrong, check the server logs for more details.".to_owned()
            }
        }
    }

    /// Convert the error into an HTTP response that only shows an error toast.
    ///
    /// The response carries `HX-Reswap: none` so htmx leaves the element that
    /// triggered the request untouched and only applies the out-of-band toast.
    pub fn into_toast_response(self, toasts: &Mutex<ToastManager>) -> Response {
        match &self {
            Error::Validation(_) | Error::TransactionNotFound(_) => {
                tracing::debug!("Rejected request: {self}")
            }
            Error::LoadFailed(_) | Error::MutationFailed { .. } => tracing::warn!("{self}"),
            Error::LockError(_) => tracing::error!("An unexpected error occurred: {self}"),
        }

        let toast = toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .error(self.toast_message());

        (
            self.status_code(),
            HxReswap(SwapOption::None),
            Html(toast.into_html().into_string()),
        )
            .into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::TransactionNotFound(_) => NotFoundError.into_response(),
            Error::LoadFailed(_) => InternalServerError {
                description: "Failed to load transactions",
                fix: "Check that the transactions API is running and try again.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
