//! The client-side copy of the most recently fetched transaction list.

use crate::transaction::{Transaction, TransactionId};

/// A ticket handed out before a list fetch starts.
///
/// Tickets are ordered by when they were issued, so a response can be
/// checked against the newest snapshot that has already been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReloadTicket(u64);

/// The outcome of offering a fetched list to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The list replaced the previous snapshot.
    Applied,
    /// A newer fetch had already been applied, the list was dropped.
    Stale,
}

/// Holds the list returned by the last applied fetch.
///
/// The list is replaced wholesale, never merged.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_ticket: u64,
    applied: Option<ReloadTicket>,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the ticket for a fetch that is about to start.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.next_ticket += 1;
        ReloadTicket(self.next_ticket)
    }

    /// Replace the snapshot with `transactions` unless a fetch that started
    /// later has already been applied.
    pub fn apply(&mut self, ticket: ReloadTicket, transactions: Vec<Transaction>) -> ApplyOutcome {
        if self.applied.is_some_and(|applied| applied > ticket) {
            return ApplyOutcome::Stale;
        }

        self.transactions = transactions;
        self.applied = Some(ticket);
        ApplyOutcome::Applied
    }

    /// The current snapshot in the order the backend returned it.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction in the current snapshot.
    pub fn find(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| &transaction.id == id)
    }
}
