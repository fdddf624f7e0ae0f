//! Account store: the external table the verification gates read from.
//!
//! The gates only need one query, an exact match on the account id. The
//! trait keeps the hosted client swappable for the in-memory store used in
//! tests and local runs.

pub mod memory;
pub mod supabase;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub use memory::InMemoryAccountStore;
pub use supabase::SupabaseClient;

/// Row of the `users` table as returned by the store.
///
/// Only `id` is assumed NOT NULL; a row with a null email or role still
/// resolves to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Failure reported by an account store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered, but with an error object.
    #[error("store query failed: {}", message.as_deref().unwrap_or("no message"))]
    Query { message: Option<String> },
    /// The store could not be reached or its reply could not be decoded.
    #[error("store transport failure: {0}")]
    Transport(String),
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetch at most one account whose id equals `id`.
    async fn find_account_by_id(&self, id: &str) -> Result<Option<AccountRecord>, StoreError>;
}

// PostgREST renders integer keys as JSON numbers and uuid keys as strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{AccountRecord, StoreError};

    #[test]
    fn decodes_numeric_and_string_ids() {
        let numeric: AccountRecord = serde_json::from_str(
            r#"{"id":42,"email":"a@fudan.edu.cn","name":"A","role":"student"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, "42");

        let uuid: AccountRecord = serde_json::from_str(
            r#"{"id":"7f1c","email":"b@fudan.edu.cn","name":null,"role":"merchant"}"#,
        )
        .unwrap();
        assert_eq!(uuid.id, "7f1c");
        assert_eq!(uuid.name, None);
    }

    #[test]
    fn nullable_columns_still_decode() {
        let sparse: AccountRecord =
            serde_json::from_str(r#"{"id":"21000002","email":null,"name":null,"role":null}"#)
                .unwrap();
        assert_eq!(sparse.id, "21000002");
        assert_eq!(sparse.email, None);
        assert_eq!(sparse.role, None);
    }

    #[test]
    fn query_error_display() {
        let err = StoreError::Query { message: None };
        assert_eq!(err.to_string(), "store query failed: no message");
        let err = StoreError::Query {
            message: Some("permission denied".into()),
        };
        assert_eq!(err.to_string(), "store query failed: permission denied");
    }
}
