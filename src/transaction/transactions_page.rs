//! Defines the route handler for the tracker page.

use std::sync::PoisonError;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    html::{PAGE_CONTAINER_STYLE, Placement, base_with_toast},
    modal::{DialogEndpointState, DialogState, ModalManager},
    transaction::{TransactionsView, form::create_transaction_form, table::transactions_table},
};

/// A route handler for the page with the summary, chart, create form and table.
///
/// The page is drawn with empty dialog and toast slots, so any dialog or
/// toast left over from an earlier page is forgotten first.
///
/// The list is fetched before rendering. If that fails the page still
/// renders from the last snapshot, with an error toast.
pub async fn get_transactions_page(State(state): State<DialogEndpointState>) -> Response {
    match state.with_modals(ModalManager::close_all) {
        Ok(DialogState::Closed) => {}
        Ok(previous) => tracing::debug!("Closed {previous:?} for a fresh page"),
        Err(error) => return error.into_response(),
    }

    let state = state.sync;
    state
        .toasts
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();

    let toast = match state.reload().await {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!("Could not load transactions for the page: {error}");
            let toast = state
                .toasts
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .error(error.toast_message());
            Some(toast.into_inline_html())
        }
    };

    match state.render(Placement::Inline) {
        Ok(view) => base_with_toast("Transactions", &transactions_view(view), toast).into_response(),
        Err(error) => error.into_response(),
    }
}

fn transactions_view(view: TransactionsView) -> Markup {
    html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="mb-6 text-3xl font-bold" { "💵 Personal Finance Tracker" }

            (view.summary)
            (view.chart)
            (create_transaction_form())
            (transactions_table(view.table_body))
        }
    }
}
