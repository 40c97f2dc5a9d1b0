//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{
    api::{ApiError, HttpTransactionApi, TransactionApi},
    chart::ChartAdapter,
    config::Config,
    modal::ModalManager,
    toast::ToastManager,
    transaction::TransactionStore,
};

/// The state of the web server.
///
/// The tracker serves a single user, so the snapshot, dialogs, toast and
/// chart are shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// The client for the backend that owns the transactions.
    pub api: Arc<dyn TransactionApi>,

    /// The most recently fetched transaction list.
    pub store: Arc<Mutex<TransactionStore>>,

    /// The open dialogs.
    pub modals: Arc<Mutex<ModalManager>>,

    /// The toast on screen.
    pub toasts: Arc<Mutex<ToastManager>>,

    /// The chart on screen.
    pub chart: Arc<Mutex<ChartAdapter>>,
}

impl AppState {
    /// Create a new [AppState] that talks to `api`.
    pub fn new(config: &Config, api: Arc<dyn TransactionApi>) -> Self {
        Self {
            api,
            store: Arc::new(Mutex::new(TransactionStore::new())),
            modals: Arc::new(Mutex::new(ModalManager::new())),
            toasts: Arc::new(Mutex::new(ToastManager::new(config.toast_duration))),
            chart: Arc::new(Mutex::new(ChartAdapter::new())),
        }
    }

    /// Create a new [AppState] with an HTTP client for the API at `config.api_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let api = HttpTransactionApi::new(&config.api_url, config.request_timeout)?;

        Ok(Self::new(config, Arc::new(api)))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("modals", &self.modals)
            .field("toasts", &self.toasts)
            .field("chart", &self.chart)
            .finish_non_exhaustive()
    }
}
