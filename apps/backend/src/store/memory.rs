use async_trait::async_trait;
use dashmap::DashMap;

use super::{AccountRecord, AccountStore, StoreError};

/// Concurrent in-process account table.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: DashMap<String, AccountRecord>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = AccountRecord>) -> Self {
        let store = Self::new();
        for account in accounts {
            store.insert(account);
        }
        store
    }

    /// Insert or replace the account keyed by its id.
    pub fn insert(&self, account: AccountRecord) {
        self.accounts.insert(account.id.clone(), account);
    }

    pub fn remove(&self, id: &str) -> Option<AccountRecord> {
        self.accounts.remove(id).map(|(_, account)| account)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_account_by_id(&self, id: &str) -> Result<Option<AccountRecord>, StoreError> {
        Ok(self.accounts.get(id).map(|entry| entry.value().clone()))
    }
}
