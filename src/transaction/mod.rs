//! Transactions and everything rendered from them.
//!
//! This module contains:
//! - The `Transaction` model as exchanged with the backend
//! - The local snapshot of the list and the reload loop that refreshes it
//! - The table, summary and create form, and the route handlers that serve them

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod store;
mod summary;
mod sync;
mod table;
mod transactions_page;

#[cfg(test)]
pub(crate) mod test_utils;

pub use core::{Transaction, TransactionFields, TransactionId, TransactionType, format_amount};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::update_transaction_endpoint;
pub use form::{CATEGORIES, Category, TransactionForm, categories_for, get_category_options};
pub use store::{ApplyOutcome, ReloadTicket, TransactionStore};
pub use summary::Totals;
pub use sync::{SyncState, TransactionsView, get_transactions_table};
pub use transactions_page::get_transactions_page;
