//! The transactions table.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{ACTION_BUTTON_STYLE, Placement, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
    modal::{DialogAction, action_button},
    transaction::Transaction,
};

/// The ID of the table body, which is replaced on every reload.
pub const TABLE_BODY_ID: &str = "transactions-table";

const COLUMN_COUNT: usize = 6;

/// The table section around an inline body from [transactions_table_body].
pub fn transactions_table(table_body: Markup) -> Markup {
    html! {
        section class="w-full max-w-3xl"
        {
            div class="flex items-center justify-between mb-2"
            {
                h2 class="text-xl font-semibold" { "Transactions" }

                button
                    type="button"
                    class="px-3 py-1 text-sm rounded border border-gray-300 \
                        hover:bg-gray-100 dark:border-gray-600 dark:hover:bg-gray-700"
                    hx-get=(endpoints::TRANSACTIONS_TABLE)
                    hx-swap="none"
                {
                    "Refresh"
                }
            }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            @for heading in ["Description", "Category", "Amount", "Type", "Date", "Actions"] {
                                th scope="col" class=(TABLE_CELL_STYLE) { (heading) }
                            }
                        }
                    }

                    (table_body)
                }
            }
        }
    }
}

/// One row per transaction, in the order given.
///
/// Out-of-band bodies are wrapped in a `template` since a `tbody` cannot
/// stand on its own.
pub fn transactions_table_body(transactions: &[Transaction], placement: Placement) -> Markup {
    let body = table_body(transactions, placement);

    match placement {
        Placement::Inline => body,
        Placement::OutOfBand => html! { template { (body) } },
    }
}

fn table_body(transactions: &[Transaction], placement: Placement) -> Markup {
    html! {
        tbody id=(TABLE_BODY_ID) hx-swap-oob=[placement.swap_oob()]
        {
            @for transaction in transactions {
                (transaction_row(transaction))
            }

            @if transactions.is_empty() {
                tr class=(TABLE_ROW_STYLE)
                {
                    td colspan=(COLUMN_COUNT) class={ (TABLE_CELL_STYLE) " text-center" }
                    {
                        "No transactions yet"
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let id = &transaction.id;

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(id)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class={ (TABLE_CELL_STYLE) " tabular-nums" } { (format!("{:.2}", transaction.amount)) }
            td
                class={ (TABLE_CELL_STYLE) " font-bold" }
                style={ "color: " (transaction.type_.colour()) ";" }
            {
                (transaction.type_.badge())
            }
            td class=(TABLE_CELL_STYLE) { (transaction.display_date()) }
            td class={ (TABLE_CELL_STYLE) " actions whitespace-nowrap" }
            {
                (action_button(
                    &DialogAction::View(id.clone()),
                    &format!("{ACTION_BUTTON_STYLE} view-btn"),
                    "View",
                    html! { span style="color: green;" { "👁" } },
                ))
                (action_button(
                    &DialogAction::Edit(id.clone()),
                    &format!("{ACTION_BUTTON_STYLE} edit-btn"),
                    "Edit",
                    html! { span style="color: blue;" { "✏️" } },
                ))
                (action_button(
                    &DialogAction::Delete(id.clone()),
                    &format!("{ACTION_BUTTON_STYLE} delete-btn"),
                    "Delete",
                    html! { span style="color: red;" { "🗑️" } },
                ))
            }
        }
    }
}
