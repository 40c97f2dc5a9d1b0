//! Defines the endpoint for saving the edit dialog.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    error::Mutation,
    modal::{DialogEndpointState, ModalManager},
    transaction::{TransactionId, form::TransactionForm},
};

/// A route handler for replacing the fields of a transaction.
///
/// On success the edit dialog is closed and the table, summary and chart are
/// reloaded. On failure only an error toast is sent, so the dialog stays open
/// with the user's changes.
pub async fn update_transaction_endpoint(
    State(state): State<DialogEndpointState>,
    Path(transaction_id): Path<String>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let toasts = &state.sync.toasts;
    let transaction_id = TransactionId::new(transaction_id);

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(error) => return error.into_toast_response(toasts),
    };

    if let Err(error) = state
        .sync
        .api
        .update_transaction(&transaction_id, &fields)
        .await
    {
        return Error::MutationFailed {
            mutation: Mutation::Update,
            source: error,
        }
        .into_toast_response(toasts);
    }

    tracing::info!("Updated transaction {transaction_id}");

    if let Err(error) = state.with_modals(ModalManager::close_dialog) {
        return error.into_toast_response(toasts);
    }

    // The primary swap empties the dialog slot.
    match state
        .sync
        .refresh_after_mutation("Transaction updated successfully")
        .await
    {
        Ok(fragments) => fragments.into_response(),
        Err(error) => error.into_toast_response(toasts),
    }
}
