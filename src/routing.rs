//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    modal::{
        close_delete_dialog_endpoint, close_dialog_endpoint, get_delete_dialog, get_edit_dialog,
        get_view_dialog,
    },
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_category_options,
        get_transactions_page, get_transactions_table, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .route(endpoints::TRANSACTIONS_TABLE, get(get_transactions_table))
        .route(endpoints::CATEGORY_OPTIONS, get(get_category_options))
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(endpoints::VIEW_TRANSACTION_DIALOG, get(get_view_dialog))
        .route(endpoints::EDIT_TRANSACTION_DIALOG, get(get_edit_dialog))
        .route(endpoints::DELETE_TRANSACTION_DIALOG, get(get_delete_dialog))
        .route(endpoints::CLOSE_DIALOG, post(close_dialog_endpoint))
        .route(
            endpoints::CLOSE_DELETE_DIALOG,
            post(close_delete_dialog_endpoint),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
