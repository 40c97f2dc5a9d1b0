//! Defines the endpoint for creating a new transaction.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    Error,
    error::Mutation,
    transaction::{
        SyncState,
        form::{TransactionForm, create_transaction_form},
    },
};

/// A route handler for creating a new transaction.
///
/// On success it responds with an empty create form, the reloaded table,
/// summary and chart, and a success toast. On failure it responds with an
/// error toast only, so the form keeps what the user typed.
pub async fn create_transaction_endpoint(
    State(state): State<SyncState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(error) => return error.into_toast_response(&state.toasts),
    };

    if let Err(error) = state.api.create_transaction(&fields).await {
        return Error::MutationFailed {
            mutation: Mutation::Create,
            source: error,
        }
        .into_toast_response(&state.toasts);
    }

    tracing::info!("Created transaction {:?}", fields.description);

    match state
        .refresh_after_mutation("Transaction added successfully")
        .await
    {
        Ok(fragments) => html! {
            (create_transaction_form())
            (fragments)
        }
        .into_response(),
        Err(error) => error.into_toast_response(&state.toasts),
    }
}
