use serde::{Deserialize, Serialize};

use crate::store::AccountRecord;

/// Authenticated caller, attached to a request by the verification gates.
///
/// Lives in request extensions for the duration of one request and is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl From<AccountRecord> for Identity {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            name: record.name,
            role: record.role,
        }
    }
}
