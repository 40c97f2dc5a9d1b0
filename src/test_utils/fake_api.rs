use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    api::{ApiError, TransactionApi},
    transaction::{Transaction, TransactionFields, TransactionId},
};

/// The number of times each [TransactionApi] method was called.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CallCounts {
    pub list: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
}

impl CallCounts {
    pub fn mutations(&self) -> usize {
        self.create + self.update + self.delete
    }
}

#[derive(Debug, Default)]
struct FakeBackend {
    transactions: Vec<Transaction>,
    next_id: u64,
    fail_next: Option<ApiError>,
    calls: CallCounts,
}

/// An in-memory [TransactionApi] that behaves like the real backend.
#[derive(Debug, Default)]
pub(crate) struct FakeTransactionApi {
    backend: Mutex<FakeBackend>,
}

impl FakeTransactionApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `transactions` already stored. IDs assigned by the fake
    /// continue after the number of seeded transactions.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions.len() as u64;

        Self {
            backend: Mutex::new(FakeBackend {
                transactions,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Make the next call, whichever method it is, fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        self.backend.lock().unwrap().fail_next = Some(error);
    }

    pub fn calls(&self) -> CallCounts {
        self.backend.lock().unwrap().calls
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.backend.lock().unwrap().transactions.clone()
    }
}

fn not_found(id: &TransactionId) -> ApiError {
    ApiError::Server {
        status: 404,
        body: format!("Transaction {id} not found"),
    }
}

#[async_trait]
impl TransactionApi for FakeTransactionApi {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let mut backend = self.backend.lock().unwrap();
        backend.calls.list += 1;

        if let Some(error) = backend.fail_next.take() {
            return Err(error);
        }

        Ok(backend.transactions.clone())
    }

    async fn create_transaction(&self, fields: &TransactionFields) -> Result<(), ApiError> {
        let mut backend = self.backend.lock().unwrap();
        backend.calls.create += 1;

        if let Some(error) = backend.fail_next.take() {
            return Err(error);
        }

        backend.next_id += 1;
        let transaction = Transaction {
            id: TransactionId::new(backend.next_id.to_string()),
            description: fields.description.clone(),
            category: fields.category.clone(),
            amount: fields.amount,
            type_: fields.type_,
            date: "2025-10-26T14:05:00".to_owned(),
        };
        backend.transactions.push(transaction);

        Ok(())
    }

    async fn update_transaction(
        &self,
        id: &TransactionId,
        fields: &TransactionFields,
    ) -> Result<(), ApiError> {
        let mut backend = self.backend.lock().unwrap();
        backend.calls.update += 1;

        if let Some(error) = backend.fail_next.take() {
            return Err(error);
        }

        let transaction = backend
            .transactions
            .iter_mut()
            .find(|transaction| &transaction.id == id)
            .ok_or_else(|| not_found(id))?;

        transaction.description = fields.description.clone();
        transaction.category = fields.category.clone();
        transaction.amount = fields.amount;
        transaction.type_ = fields.type_;

        Ok(())
    }

    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), ApiError> {
        let mut backend = self.backend.lock().unwrap();
        backend.calls.delete += 1;

        if let Some(error) = backend.fail_next.take() {
            return Err(error);
        }

        let before = backend.transactions.len();
        backend
            .transactions
            .retain(|transaction| &transaction.id != id);

        if backend.transactions.len() == before {
            return Err(not_found(id));
        }

        Ok(())
    }
}
