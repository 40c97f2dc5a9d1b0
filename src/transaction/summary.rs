//! Income, expense and balance totals for the summary cards.

use maud::{Markup, html};

use crate::{
    html::Placement,
    transaction::{Transaction, TransactionType, format_amount},
};

/// The ID of the summary section, used for out-of-band swaps.
pub const SUMMARY_ID: &str = "summary";

/// Sums of the transaction amounts, partitioned by type.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    /// Compute the totals for `transactions`.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Totals::default(), |mut totals, transaction| {
                match transaction.type_ {
                    TransactionType::Income => totals.income += transaction.amount,
                    TransactionType::Expense => totals.expense += transaction.amount,
                }

                totals
            })
    }

    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

pub fn summary_view(totals: &Totals, placement: Placement) -> Markup {
    let card = |id: &str, label: &str, amount: f64, colour: &str| {
        html! {
            div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm \
                dark:border-gray-700 dark:bg-gray-800"
            {
                p class="text-sm text-gray-600 dark:text-gray-400" { (label) }
                p id=(id) class={ "text-2xl font-semibold tabular-nums " (colour) }
                {
                    (format_amount(amount))
                }
            }
        }
    };

    html! {
        section
            id=(SUMMARY_ID)
            hx-swap-oob=[placement.swap_oob()]
            class="grid w-full max-w-3xl grid-cols-1 gap-4 mb-4 sm:grid-cols-3"
        {
            (card("income", "Income", totals.income, "text-green-600"))
            (card("expense", "Expense", totals.expense, "text-red-600"))
            (card("balance", "Balance", totals.balance(), ""))
        }
    }
}
