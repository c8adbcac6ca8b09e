use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::{RecordQuery, RecordStoreConfig};
use crate::common::{StorageError, StorageResult};

/// Client for the hosted tabular record-store API
///
/// Tables are addressed by name; every operation is a single request. The
/// per-record result envelope of mutation responses is folded into one
/// [`StorageResult`]: a batch with any failed record fails the call as a
/// whole (succeeded records are not rolled back).
#[derive(Clone)]
pub struct RecordStoreClient {
    config: RecordStoreConfig,
    client: Client,
}

// Record-store API request/response structures

#[derive(Debug, Serialize)]
struct RecordsBody {
    records: Vec<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordIdsBody {
    record_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    success: bool,
    #[serde(default)]
    data: Vec<Value>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FetchResponse {
    success: bool,
    data: Option<Value>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    success: bool,
    #[serde(default)]
    results: Vec<RecordResult>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecordResult {
    success: bool,
    data: Option<Value>,
    message: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(alias = "fieldLabel")]
    field: Option<String>,
    message: String,
}

impl RecordResult {
    fn failure_message(&self) -> String {
        if !self.errors.is_empty() {
            return self
                .errors
                .iter()
                .map(|e| match &e.field {
                    Some(field) => format!("{}: {}", field, e.message),
                    None => e.message.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ");
        }
        self.message
            .clone()
            .unwrap_or_else(|| "record rejected".to_string())
    }
}

impl RecordStoreClient {
    pub fn new(config: RecordStoreConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// List records of `table` matching a declarative query.
    pub async fn query(&self, table: &str, query: &RecordQuery) -> StorageResult<Vec<Value>> {
        let url = format!("{}/tables/{}/query", self.config.base_url, table);

        debug!(table, "Querying record store");

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(query)
            .send()
            .await?;

        let body: QueryResponse = Self::read_body(response).await?;
        if !body.success {
            return Err(StorageError::Unavailable(
                body.message.unwrap_or_else(|| "query failed".to_string()),
            ));
        }

        Ok(body.data)
    }

    /// Fetch one record by its integer record id. `Ok(None)` when the record
    /// does not exist.
    pub async fn fetch(
        &self,
        table: &str,
        record_id: i64,
        fields: &[&str],
    ) -> StorageResult<Option<Value>> {
        let url = format!(
            "{}/tables/{}/records/{}",
            self.config.base_url, table, record_id
        );

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .query(&[("fields", fields.join(","))])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: FetchResponse = Self::read_body(response).await?;
        if !body.success {
            return Err(StorageError::Unavailable(
                body.message.unwrap_or_else(|| "fetch failed".to_string()),
            ));
        }

        Ok(body.data)
    }

    /// Insert records into `table`; returns the created records as the
    /// storage tier sees them (with assigned ids and system columns).
    pub async fn create(&self, table: &str, records: Vec<Value>) -> StorageResult<Vec<Value>> {
        debug!(table, count = records.len(), "Creating records");
        self.mutate(reqwest::Method::POST, table, RecordsBody { records })
            .await
    }

    /// Patch records in `table`. Each record value must carry its `Id` and
    /// only the columns to change, so unrelated columns are left untouched.
    pub async fn update(&self, table: &str, records: Vec<Value>) -> StorageResult<Vec<Value>> {
        debug!(table, count = records.len(), "Updating records");
        self.mutate(reqwest::Method::PATCH, table, RecordsBody { records })
            .await
    }

    /// Delete records by id. Succeeds only if every requested id was
    /// deleted.
    pub async fn delete(&self, table: &str, record_ids: Vec<i64>) -> StorageResult<()> {
        debug!(table, count = record_ids.len(), "Deleting records");

        let url = format!("{}/tables/{}/records", self.config.base_url, table);
        let response = self
            .client
            .delete(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&RecordIdsBody { record_ids })
            .send()
            .await?;

        let body: MutationResponse = Self::read_body(response).await?;
        Self::unwrap_results(body)?;
        Ok(())
    }

    async fn mutate(
        &self,
        method: reqwest::Method,
        table: &str,
        body: RecordsBody,
    ) -> StorageResult<Vec<Value>> {
        let url = format!("{}/tables/{}/records", self.config.base_url, table);

        let response = self
            .client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await?;

        let body: MutationResponse = Self::read_body(response).await?;
        Self::unwrap_results(body)
    }

    async fn read_body<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> StorageResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "Record store returned an error response");
            return Err(StorageError::Unavailable(format!("{status}: {body}")));
        }

        Ok(response.json::<T>().await?)
    }

    /// Fold a per-record result envelope into one result.
    ///
    /// A transport-level success with zero successful records is still a
    /// hard failure; a mixed batch fails the call without rolling back the
    /// records that succeeded.
    fn unwrap_results(body: MutationResponse) -> StorageResult<Vec<Value>> {
        if !body.success && body.results.is_empty() {
            return Err(StorageError::Unavailable(
                body.message.unwrap_or_else(|| "request failed".to_string()),
            ));
        }

        let total = body.results.len();
        let mut succeeded = Vec::new();
        let mut failures = Vec::new();

        for result in body.results {
            if result.success {
                succeeded.extend(result.data);
            } else {
                failures.push(result.failure_message());
            }
        }

        if failures.is_empty() {
            if succeeded.is_empty() && total == 0 {
                return Err(StorageError::Unavailable(
                    "response contained no record results".to_string(),
                ));
            }
            return Ok(succeeded);
        }

        warn!(
            succeeded = total - failures.len(),
            failed = failures.len(),
            "Record store rejected records"
        );

        if succeeded.is_empty() {
            Err(StorageError::Rejected(failures.join("; ")))
        } else {
            Err(StorageError::PartialFailure {
                succeeded: total - failures.len(),
                failed: failures.len(),
                message: failures.join("; "),
            })
        }
    }
}
