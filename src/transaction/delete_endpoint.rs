//! Defines the endpoint for confirming a delete.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    error::Mutation,
    modal::{DialogEndpointState, ModalManager},
    transaction::TransactionId,
};

/// A route handler for deleting a transaction.
///
/// On success the delete confirmation is closed and the table, summary and
/// chart are reloaded. On failure only an error toast is sent, so the
/// confirmation stays open and the row stays in the table.
pub async fn delete_transaction_endpoint(
    State(state): State<DialogEndpointState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let toasts = &state.sync.toasts;
    let transaction_id = TransactionId::new(transaction_id);

    if let Err(error) = state.sync.api.delete_transaction(&transaction_id).await {
        return Error::MutationFailed {
            mutation: Mutation::Delete,
            source: error,
        }
        .into_toast_response(toasts);
    }

    tracing::info!("Deleted transaction {transaction_id}");

    if let Err(error) = state.with_modals(ModalManager::close_delete) {
        return error.into_toast_response(toasts);
    }

    match state
        .sync
        .refresh_after_mutation("Transaction deleted successfully")
        .await
    {
        Ok(fragments) => fragments.into_response(),
        Err(error) => error.into_toast_response(toasts),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        api::ApiError,
        modal::{DialogEndpointState, DialogState, ModalManager},
        test_utils::{FakeTransactionApi, must_get_toast_text, parse_html_fragment},
        transaction::{
            TransactionId, TransactionType,
            delete_endpoint::delete_transaction_endpoint,
            test_utils::{must_get_table_rows, sync_state, transaction},
        },
    };

    fn dialog_state(api: Arc<FakeTransactionApi>) -> DialogEndpointState {
        let mut modals = ModalManager::new();
        modals.open_delete(TransactionId::new("1"));

        DialogEndpointState {
            sync: sync_state(api),
            modals: Arc::new(Mutex::new(modals)),
        }
    }

    fn seeded_api() -> Arc<FakeTransactionApi> {
        Arc::new(FakeTransactionApi::with_transactions(vec![
            transaction("1", "Coffee", 4.5, TransactionType::Expense),
            transaction("2", "Pay", 1000.0, TransactionType::Income),
        ]))
    }

    #[tokio::test]
    async fn delete_removes_row_and_closes_confirmation() {
        let api = seeded_api();
        let state = dialog_state(api.clone());

        let response =
            delete_transaction_endpoint(State(state.clone()), Path("1".to_owned())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(api.transactions().len(), 1);
        assert_eq!(state.modals.lock().unwrap().state(), DialogState::Closed);

        let html = parse_html_fragment(response).await;
        let rows = must_get_table_rows(&html);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value().attr("data-transaction-id"), Some("2"));
        assert_eq!(
            must_get_toast_text(&html),
            "Transaction deleted successfully"
        );
    }

    #[tokio::test]
    async fn failed_delete_keeps_row_and_confirmation() {
        let api = seeded_api();
        let state = dialog_state(api.clone());
        state.sync.reload().await.unwrap();
        api.fail_next(ApiError::Server {
            status: 500,
            body: "database is locked".to_owned(),
        });

        let response =
            delete_transaction_endpoint(State(state.clone()), Path("1".to_owned())).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(api.transactions().len(), 2);
        assert!(
            state
                .sync
                .find_transaction(&TransactionId::new("1"))
                .unwrap()
                .is_some()
        );
        assert_eq!(
            state.modals.lock().unwrap().state(),
            DialogState::ConfirmingDelete(TransactionId::new("1"))
        );

        let html = parse_html_fragment(response).await;
        assert_eq!(
            must_get_toast_text(&html),
            "Failed to delete transaction: database is locked"
        );
    }
}
