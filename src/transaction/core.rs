//! The transaction model as exchanged with the backend API.

use std::fmt::{self, Display};

use serde::{Deserialize, Deserializer, Serialize};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

/// The backend's identifier for a transaction.
///
/// The backend may send either a JSON number or a string. The client never
/// interprets the value, it only echoes it back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create an ID from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as it appears in a URL path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Integer(i64),
            Unsigned(u64),
            Float(f64),
            Text(String),
        }

        let id = match RawId::deserialize(deserializer)? {
            RawId::Integer(id) => id.to_string(),
            RawId::Unsigned(id) => id.to_string(),
            RawId::Float(id) => id.to_string(),
            RawId::Text(id) => id,
        };

        Ok(Self(id))
    }
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, adds to the balance.
    #[default]
    Income,
    /// Money going out, subtracts from the balance.
    Expense,
}

impl TransactionType {
    /// Both variants in the order they appear in forms.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The lowercase wire name, e.g. "income".
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The capitalised name shown in select options.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    /// The label used in the transactions table, including an icon.
    pub fn badge(self) -> &'static str {
        match self {
            TransactionType::Income => "💰 Income",
            TransactionType::Expense => "💸 Expense",
        }
    }

    /// The text colour for amounts and badges of this type.
    pub fn colour(self) -> &'static str {
        match self {
            TransactionType::Income => "green",
            TransactionType::Expense => "red",
        }
    }

    /// Parse the wire name of a type, returning `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned by the backend on creation.
    pub id: TransactionId,
    /// What the transaction was for, e.g. "Coffee".
    pub description: String,
    /// One of the categories for the transaction's type, e.g. "Food".
    pub category: String,
    /// Always positive, the sign comes from `type_`.
    pub amount: f64,
    /// Whether money came in or went out.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// Assigned by the backend on creation, kept as sent for display.
    ///
    /// A missing or null date is kept as an empty string and shown as
    /// [INVALID_DATE].
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: String,
}

impl Transaction {
    /// The date part of [Transaction::date], e.g. "2025-10-26".
    pub fn display_date(&self) -> String {
        format_date(&self.date)
    }

    /// The date and time of [Transaction::date], e.g. "2025-10-26 14:05".
    pub fn display_date_time(&self) -> String {
        format_date_time(&self.date)
    }

    /// The fields that the client may change.
    pub fn fields(&self) -> TransactionFields {
        TransactionFields {
            description: self.description.clone(),
            category: self.category.clone(),
            amount: self.amount,
            type_: self.type_,
        }
    }
}

/// The mutable fields of a transaction, sent when creating or updating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFields {
    /// What the transaction was for.
    pub description: String,
    /// The category the user picked or typed.
    pub category: String,
    /// The amount of money, expected to be positive.
    pub amount: f64,
    /// Whether money came in or went out.
    #[serde(rename = "type")]
    pub type_: TransactionType,
}

/// Shown in place of a date that is missing.
pub const INVALID_DATE: &str = "Invalid Date";

fn deserialize_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Format an amount the way the summary and dialogs show it, e.g. "4.50 USD".
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2} USD")
}

enum ParsedDate {
    DateTime(PrimitiveDateTime),
    Date(Date),
}

fn parse_backend_date(text: &str) -> Option<ParsedDate> {
    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(ParsedDate::DateTime(PrimitiveDateTime::new(
            date_time.date(),
            date_time.time(),
        )));
    }

    let with_fraction =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    let without_fraction = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let space_separated = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    for format in [with_fraction, without_fraction, space_separated] {
        if let Ok(date_time) = PrimitiveDateTime::parse(text, format) {
            return Some(ParsedDate::DateTime(date_time));
        }
    }

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(ParsedDate::Date)
}

fn format_date(text: &str) -> String {
    let date_format = format_description!("[year]-[month]-[day]");

    let formatted = match parse_backend_date(text) {
        Some(ParsedDate::DateTime(date_time)) => date_time.date().format(date_format),
        Some(ParsedDate::Date(date)) => date.format(date_format),
        None => return unparsed_date(text),
    };

    formatted.unwrap_or_else(|_| text.to_owned())
}

fn format_date_time(text: &str) -> String {
    let formatted = match parse_backend_date(text) {
        Some(ParsedDate::DateTime(date_time)) => {
            date_time.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        }
        Some(ParsedDate::Date(date)) => date.format(format_description!("[year]-[month]-[day]")),
        None => return unparsed_date(text),
    };

    formatted.unwrap_or_else(|_| text.to_owned())
}

fn unparsed_date(text: &str) -> String {
    if text.trim().is_empty() {
        INVALID_DATE.to_owned()
    } else {
        text.to_owned()
    }
}
