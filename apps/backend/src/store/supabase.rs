//! Thin typed client for the hosted Postgres REST endpoint (Supabase/PostgREST).

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{AccountRecord, AccountStore, StoreError};
use crate::config::StoreConfig;
use crate::error::AppError;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Table holding registered accounts.
pub const USERS_TABLE: &str = "users";
/// Columns the gates project out of `USERS_TABLE`.
pub const ACCOUNT_COLUMNS: &str = "id,email,name,role";

/// Error object PostgREST returns on non-2xx replies.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
}

#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    rest_url: String,
    service_key: String,
}

impl SupabaseClient {
    /// Build a client; fails if the URL or service key is empty.
    pub fn new(config: &StoreConfig) -> Result<Self, AppError> {
        let base = config.url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(AppError::config("SUPABASE_URL must be set"));
        }
        if config.service_key.trim().is_empty() {
            return Err(AppError::config("SUPABASE_SERVICE_KEY must be set"));
        }

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build store client: {e}")))?;

        Ok(Self {
            http,
            rest_url: format!("{base}/rest/v1"),
            service_key: config.service_key.clone(),
        })
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    /// `SELECT columns FROM table WHERE column = value LIMIT limit`.
    #[instrument(skip(self, columns, value))]
    pub async fn select_eq<T>(
        &self,
        table: &str,
        columns: &str,
        column: &str,
        value: &str,
        limit: usize,
    ) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{table}", self.rest_url);
        let filter = format!("eq.{value}");
        let limit = limit.to_string();

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("select", columns), (column, filter.as_str()), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<PostgrestError>(&body)
                .ok()
                .and_then(|e| e.message);
            debug!(%status, ?message, "store query rejected");
            return Err(StoreError::Query { message });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Transport(format!("undecodable store reply: {e}")))
    }
}

#[async_trait]
impl AccountStore for SupabaseClient {
    async fn find_account_by_id(&self, id: &str) -> Result<Option<AccountRecord>, StoreError> {
        let rows: Vec<AccountRecord> = self
            .select_eq(USERS_TABLE, ACCOUNT_COLUMNS, "id", id, 1)
            .await?;
        Ok(rows.into_iter().next())
    }
}
