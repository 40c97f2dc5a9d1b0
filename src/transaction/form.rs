//! The create transaction form, its category filtering and the field checks
//! shared with the edit dialog.

use axum::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, id_selector},
    transaction::{TransactionFields, TransactionType},
};

/// The ID of the create transaction form.
pub const CREATE_FORM_ID: &str = "transaction-form";
/// The ID of the category select in the create form.
pub const CATEGORY_SELECT_ID: &str = "category";

/// A category users can pick in the create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// The transaction type the category belongs to.
    pub type_: TransactionType,
}

const fn income(name: &'static str) -> Category {
    Category {
        name,
        type_: TransactionType::Income,
    }
}

const fn expense(name: &'static str) -> Category {
    Category {
        name,
        type_: TransactionType::Expense,
    }
}

/// Every category offered in the create form, in display order.
pub const CATEGORIES: [Category; 13] = [
    income("Salary"),
    income("Freelance"),
    income("Investment"),
    income("Gift"),
    income("Other Income"),
    expense("Food"),
    expense("Rent"),
    expense("Transport"),
    expense("Utilities"),
    expense("Entertainment"),
    expense("Health"),
    expense("Shopping"),
    expense("Other Expense"),
];

/// The categories that belong to `type_`.
pub fn categories_for(type_: TransactionType) -> impl Iterator<Item = &'static Category> {
    CATEGORIES
        .iter()
        .filter(move |category| category.type_ == type_)
}

/// The category select with only the categories for `selected_type` visible.
///
/// Every category is rendered and tagged with its type, the others are
/// hidden and disabled. The empty placeholder is always the selection, so
/// switching types clears whatever was picked before.
pub fn category_select(selected_type: TransactionType) -> Markup {
    html! {
        select
            id=(CATEGORY_SELECT_ID)
            name="category"
            required
            class=(FORM_TEXT_INPUT_STYLE)
        {
            option value="" selected { "Select category" }

            @for category in &CATEGORIES {
                @let hidden = category.type_ != selected_type;

                option
                    value=(category.name)
                    data-type=(category.type_.as_str())
                    hidden[hidden]
                    disabled[hidden]
                {
                    (category.name)
                }
            }
        }
    }
}

/// The create form with empty fields and the categories for the default type.
pub fn create_transaction_form() -> Markup {
    let selected_type = TransactionType::default();

    html! {
        form
            id=(CREATE_FORM_ID)
            hx-post=(endpoints::TRANSACTIONS)
            hx-target="this"
            hx-swap="outerHTML"
            class="w-full max-w-3xl mb-4 p-4 space-y-4 rounded-lg border border-gray-200 \
                bg-white shadow-sm dark:border-gray-700 dark:bg-gray-800"
        {
            h2 class="text-xl font-semibold" { "Add Transaction" }

            div class="grid grid-cols-1 gap-4 sm:grid-cols-2"
            {
                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    input
                        id="description"
                        name="description"
                        type="text"
                        placeholder="e.g. Coffee"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                    input
                        id="amount"
                        name="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="type" class=(FORM_LABEL_STYLE) { "Type" }
                    select
                        id="type"
                        name="type"
                        required
                        hx-get=(endpoints::CATEGORY_OPTIONS)
                        hx-trigger="change"
                        hx-target=(id_selector(CATEGORY_SELECT_ID))
                        hx-swap="outerHTML"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for type_ in TransactionType::ALL {
                            option value=(type_.as_str()) selected[type_ == selected_type]
                            {
                                (type_.label())
                            }
                        }
                    }
                }

                div
                {
                    label for=(CATEGORY_SELECT_ID) class=(FORM_LABEL_STYLE) { "Category" }
                    (category_select(selected_type))
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}

/// The fields of the create form or the edit dialog as submitted.
///
/// Everything is kept as text so that missing or malformed fields end up in
/// [TransactionForm::validate] rather than in an extractor rejection.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default, rename = "type")]
    pub type_: String,
}

impl TransactionForm {
    /// Check the submitted fields and convert them into [TransactionFields].
    ///
    /// The description must be non-empty after trimming, a category must be
    /// picked, the amount must be a finite number and the type must be
    /// "income" or "expense". Whether the category belongs to the type is
    /// not checked.
    ///
    /// # Errors
    /// Returns [Error::Validation] naming the first offending field.
    pub fn validate(&self) -> Result<TransactionFields, Error> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::Validation("description is empty".to_owned()));
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(Error::Validation("category is empty".to_owned()));
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| Error::Validation(format!("amount {:?} is not a number", self.amount)))?;

        let type_ = TransactionType::parse(self.type_.trim())
            .ok_or_else(|| Error::Validation(format!("unknown type {:?}", self.type_)))?;

        Ok(TransactionFields {
            description: description.to_owned(),
            category: category.to_owned(),
            amount,
            type_,
        })
    }
}

/// The query string sent when the type select changes.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    /// The wire name of the selected type, e.g. "expense".
    #[serde(default, rename = "type")]
    pub type_: String,
}

impl CategoryQuery {
    /// The selected type, or the default type if the query names no known type.
    pub fn transaction_type(&self) -> TransactionType {
        TransactionType::parse(self.type_.trim()).unwrap_or_else(|| {
            tracing::debug!(
                "Unknown transaction type {:?}, showing default categories",
                self.type_
            );
            TransactionType::default()
        })
    }
}

/// A route handler that returns the category select filtered for a transaction type.
pub async fn get_category_options(Query(query): Query<CategoryQuery>) -> Markup {
    category_select(query.transaction_type())
}
