//! Account stores that misbehave on purpose

use async_trait::async_trait;
use campus_auth::store::{AccountRecord, AccountStore, StoreError};

/// Answers every lookup with the same error.
pub struct FailingStore(pub StoreError);

#[async_trait]
impl AccountStore for FailingStore {
    async fn find_account_by_id(&self, _id: &str) -> Result<Option<AccountRecord>, StoreError> {
        Err(self.0.clone())
    }
}
