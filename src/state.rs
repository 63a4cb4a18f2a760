//! Shared application state
//!
//! The collaborators every request handler is built from.

use std::sync::Arc;

use sqlx::PgPool;

use crate::mapper::{CategoryMapper, ModelMapper, TransactionMapper};
use crate::store::{
    CategoryRepository, InMemoryStore, PgStore, TransactionRepository, WalletRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub wallets: Arc<dyn WalletRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub transaction_mapper: Arc<dyn TransactionMapper>,
    pub category_mapper: Arc<dyn CategoryMapper>,
}

impl AppState {
    /// Use one store for every repository and the default mapper
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: WalletRepository + CategoryRepository + TransactionRepository + 'static,
    {
        let mapper = Arc::new(ModelMapper);
        Self {
            wallets: store.clone(),
            categories: store.clone(),
            transactions: store,
            transaction_mapper: mapper.clone(),
            category_mapper: mapper,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::from_store(Arc::new(PgStore::new(pool)))
    }

    /// State over a fresh in-memory store, returned alongside for seeding
    pub fn in_memory() -> (Self, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (Self::from_store(store.clone()), store)
    }
}
