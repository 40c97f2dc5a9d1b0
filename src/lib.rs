//! A personal finance tracker.
//!
//! This library serves a single page that records income and expense
//! transactions against a remote transactions API. The page shows the
//! transactions in a table, the running totals and an income vs. expense
//! chart. It is rendered on the server and kept up to date with htmx.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod chart;
mod config;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod logging;
mod modal;
mod not_found;
mod routing;
mod toast;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{ApiError, HttpTransactionApi, TransactionApi};
pub use app_state::AppState;
pub use config::{Config, DEFAULT_API_URL};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use toast::DEFAULT_TOAST_DURATION;
pub use transaction::{Transaction, TransactionFields, TransactionId, TransactionType};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
