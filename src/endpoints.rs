//! The endpoint URIs served to the browser.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

use crate::transaction::TransactionId;

/// The tracker page.
pub const ROOT: &str = "/";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a transaction (POST).
pub const TRANSACTIONS: &str = "/transactions";
/// The route that re-fetches the list and re-renders the table, summary and chart.
pub const TRANSACTIONS_TABLE: &str = "/transactions/table";
/// The route for the category select filtered by transaction type.
pub const CATEGORY_OPTIONS: &str = "/transactions/categories";
/// The route to update (PUT) or delete (DELETE) a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route for the read-only transaction dialog.
pub const VIEW_TRANSACTION_DIALOG: &str = "/transactions/{transaction_id}/view";
/// The route for the edit transaction dialog.
pub const EDIT_TRANSACTION_DIALOG: &str = "/transactions/{transaction_id}/edit";
/// The route for the delete confirmation dialog.
pub const DELETE_TRANSACTION_DIALOG: &str = "/transactions/{transaction_id}/delete";
/// The route that closes the view/edit dialog.
pub const CLOSE_DIALOG: &str = "/dialogs/close";
/// The route that closes the delete confirmation dialog.
pub const CLOSE_DELETE_DIALOG: &str = "/dialogs/delete/close";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// Transaction IDs are opaque, so `id` is percent-encoded before it is
/// inserted.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &TransactionId) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        urlencoding::encode(id.as_str()),
        &endpoint_path[param_end..]
    )
}
