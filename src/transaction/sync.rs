//! Fetches the transaction list and re-renders everything derived from it.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, Render, html};

use crate::{
    AppState, Error,
    api::TransactionApi,
    chart::ChartAdapter,
    html::Placement,
    toast::{Toast, ToastManager},
    transaction::{
        Transaction, TransactionId,
        store::{ApplyOutcome, TransactionStore},
        summary::{Totals, summary_view},
        table::transactions_table_body,
    },
};

/// The state needed to fetch and render the transaction list.
#[derive(Clone)]
pub struct SyncState {
    /// The client for the backend that owns the transactions.
    pub api: Arc<dyn TransactionApi>,
    pub store: Arc<Mutex<TransactionStore>>,
    pub chart: Arc<Mutex<ChartAdapter>>,
    pub toasts: Arc<Mutex<ToastManager>>,
}

impl FromRef<AppState> for SyncState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            store: state.store.clone(),
            chart: state.chart.clone(),
            toasts: state.toasts.clone(),
        }
    }
}

/// The fragments derived from one snapshot of the list.
#[derive(Debug)]
pub struct TransactionsView {
    pub table_body: Markup,
    pub summary: Markup,
    pub chart: Markup,
}

impl Render for TransactionsView {
    fn render(&self) -> Markup {
        html! {
            (self.table_body)
            (self.summary)
            (self.chart)
        }
    }
}

impl SyncState {
    fn lock_store(&self) -> Result<std::sync::MutexGuard<'_, TransactionStore>, Error> {
        self.store
            .lock()
            .map_err(|_| Error::LockError("transaction store"))
    }

    /// Fetch the full list and make it the current snapshot.
    ///
    /// The response is dropped if a fetch that started later has already
    /// been applied, leaving the newer snapshot in place.
    ///
    /// # Errors
    /// Returns [Error::LoadFailed] if the fetch fails, in which case the
    /// current snapshot is kept.
    pub async fn reload(&self) -> Result<(), Error> {
        let ticket = self.lock_store()?.begin_reload();

        let transactions = self
            .api
            .list_transactions()
            .await
            .map_err(Error::LoadFailed)?;

        match self.lock_store()?.apply(ticket, transactions) {
            ApplyOutcome::Applied => tracing::debug!("Applied transaction list {ticket:?}"),
            ApplyOutcome::Stale => {
                tracing::debug!("Discarded transaction list {ticket:?}, a newer list is shown")
            }
        }

        Ok(())
    }

    /// Look up a transaction in the current snapshot.
    pub fn find_transaction(&self, id: &TransactionId) -> Result<Option<Transaction>, Error> {
        Ok(self.lock_store()?.find(id).cloned())
    }

    /// Render the table body, the summary and a new chart from the current
    /// snapshot.
    pub fn render(&self, placement: Placement) -> Result<TransactionsView, Error> {
        let (table_body, totals) = {
            let store = self.lock_store()?;
            let transactions = store.transactions();

            (
                transactions_table_body(transactions, placement),
                Totals::from_transactions(transactions),
            )
        };

        let chart = self
            .chart
            .lock()
            .map_err(|_| Error::LockError("chart"))?
            .render(totals.income, totals.expense, placement);

        Ok(TransactionsView {
            table_body,
            summary: summary_view(&totals, placement),
            chart,
        })
    }

    /// Reload after a create, update or delete went through and report it.
    ///
    /// The fragments are rendered out-of-band from whatever snapshot is
    /// current. If the reload fails, the error toast replaces the success
    /// toast.
    ///
    /// # Errors
    /// Returns an error if shared state is poisoned.
    pub async fn refresh_after_mutation(&self, success_message: &str) -> Result<Markup, Error> {
        let reload_result = self.reload().await;
        let toast = self.report(reload_result, success_message);
        let view = self.render(Placement::OutOfBand)?;

        Ok(html! {
            (view)
            (toast.into_html())
        })
    }

    fn report(&self, reload_result: Result<(), Error>, success_message: &str) -> Toast {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);

        match reload_result {
            Ok(()) => toasts.success(success_message),
            Err(error) => {
                tracing::warn!("Could not reload transactions: {error}");
                toasts.error(error.toast_message())
            }
        }
    }
}

/// A route handler that re-fetches the list and responds with the table
/// body, summary and chart as out-of-band swaps.
pub async fn get_transactions_table(State(state): State<SyncState>) -> Response {
    if let Err(error) = state.reload().await {
        return error.into_toast_response(&state.toasts);
    }

    match state.render(Placement::OutOfBand) {
        Ok(view) => view.render().into_response(),
        Err(error) => error.into_toast_response(&state.toasts),
    }
}
