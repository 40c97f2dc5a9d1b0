use std::sync::{Arc, Mutex};

use scraper::{ElementRef, Html, Selector};

use crate::{
    api::TransactionApi,
    chart::ChartAdapter,
    toast::ToastManager,
    transaction::{SyncState, Transaction, TransactionId, TransactionType, TransactionStore},
};

pub fn transaction(id: &str, description: &str, amount: f64, type_: TransactionType) -> Transaction {
    let category = match type_ {
        TransactionType::Income => "Salary",
        TransactionType::Expense => "Food",
    };

    Transaction {
        id: TransactionId::new(id),
        description: description.to_owned(),
        category: category.to_owned(),
        amount,
        type_,
        date: "2025-10-26T14:05:00".to_owned(),
    }
}

#[track_caller]
pub fn must_get_table_rows(html: &Html) -> Vec<ElementRef<'_>> {
    let table_selector = Selector::parse("tbody#transactions-table").unwrap();
    let table = html
        .select(&table_selector)
        .next()
        .expect("Could not find transactions table body");

    let row_selector = Selector::parse("tr").unwrap();
    table.select(&row_selector).collect()
}

/// The `value` attributes of the category options that are not hidden.
#[track_caller]
pub fn visible_category_options(html: &Html) -> Vec<String> {
    let selector = Selector::parse("select#category option").unwrap();

    html.select(&selector)
        .filter(|option| option.value().attr("hidden").is_none())
        .filter_map(|option| option.value().attr("value"))
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect()
}

#[track_caller]
pub fn assert_placeholder_selected(html: &Html) {
    let selector = Selector::parse("select#category option[selected]").unwrap();
    let selected = html.select(&selector).collect::<Vec<_>>();

    assert_eq!(
        selected.len(),
        1,
        "want exactly one selected category option, got {}",
        selected.len()
    );
    assert_eq!(
        selected[0].value().attr("value"),
        Some(""),
        "want the empty placeholder to be selected"
    );
}

/// A [SyncState] with empty local state in front of `api`.
pub fn sync_state(api: Arc<dyn TransactionApi>) -> SyncState {
    SyncState {
        api,
        store: Arc::new(Mutex::new(TransactionStore::new())),
        chart: Arc::new(Mutex::new(ChartAdapter::new())),
        toasts: Arc::new(Mutex::new(ToastManager::default())),
    }
}
