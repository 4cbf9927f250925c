//! HTTP calls and response decoding.

use scolaris_core::models::category::{Category, CreateCategoryPayload, UpdateCategoryPayload};
use scolaris_core::models::expense::{CreateExpensePayload, Expense, UpdateExpensePayload};
use scolaris_core::models::reason::{CreateReasonPayload, Reason, UpdateReasonPayload};
use scolaris_core::models::stock_item::{
    CreateStockItemPayload, StockItem, UpdateStockItemPayload,
};
use scolaris_core::models::subject::{CreateSubjectPayload, Subject, UpdateSubjectPayload};
use scolaris_core::models::subject_group::{
    CreateSubjectGroupPayload, SubjectGroup, UpdateSubjectGroupPayload,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire-side view of the server envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    message: String,
    data: Option<T>,
    count: Option<usize>,
}

/// A decoded list response.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub count: usize,
}

/// Error surfaced to the dispatch layer.
///
/// The message prefers the response envelope's `message`; when the
/// body cannot be decoded, the transport-level description is used.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    pub message: String,
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError {
        message: err.to_string(),
    }
}

/// URL prefix and wire payloads for a resource kind exposed by the API.
pub trait ClientResource: DeserializeOwned + Send + 'static {
    /// Path prefix, e.g. `categories`.
    const PREFIX: &'static str;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;
}

impl ClientResource for Category {
    const PREFIX: &'static str = "categories";
    type Create = CreateCategoryPayload;
    type Update = UpdateCategoryPayload;
}

impl ClientResource for StockItem {
    const PREFIX: &'static str = "stock-items";
    type Create = CreateStockItemPayload;
    type Update = UpdateStockItemPayload;
}

impl ClientResource for SubjectGroup {
    const PREFIX: &'static str = "subject-groups";
    type Create = CreateSubjectGroupPayload;
    type Update = UpdateSubjectGroupPayload;
}

impl ClientResource for Subject {
    const PREFIX: &'static str = "subjects";
    type Create = CreateSubjectPayload;
    type Update = UpdateSubjectPayload;
}

impl ClientResource for Expense {
    const PREFIX: &'static str = "expenses";
    type Create = CreateExpensePayload;
    type Update = UpdateExpensePayload;
}

impl ClientResource for Reason {
    const PREFIX: &'static str = "reasons";
    type Create = CreateReasonPayload;
    type Update = UpdateReasonPayload;
}

/// Thin typed wrapper over the SCOLARIS HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn list<R: ClientResource>(&self, school_id: Uuid) -> Result<Listing<R>, ClientError> {
        let url = format!("{}/{}/{}", self.base_url, R::PREFIX, school_id);
        let response = self.http.get(url).send().await.map_err(transport)?;
        let envelope: Envelope<Vec<R>> = decode(response).await?;
        let items = envelope.data.unwrap_or_default();
        let count = envelope.count.unwrap_or(items.len());
        Ok(Listing { items, count })
    }

    pub async fn create<R: ClientResource>(&self, input: &R::Create) -> Result<R, ClientError> {
        let url = format!("{}/{}", self.base_url, R::PREFIX);
        let response = self
            .http
            .post(url)
            .json(input)
            .send()
            .await
            .map_err(transport)?;
        let envelope: Envelope<R> = decode(response).await?;
        envelope.data.ok_or_else(|| ClientError {
            message: "response carried no record".into(),
        })
    }

    pub async fn update<R: ClientResource>(
        &self,
        id: Uuid,
        input: &R::Update,
    ) -> Result<R, ClientError> {
        let url = format!("{}/{}/{}", self.base_url, R::PREFIX, id);
        let response = self
            .http
            .put(url)
            .json(input)
            .send()
            .await
            .map_err(transport)?;
        let envelope: Envelope<R> = decode(response).await?;
        envelope.data.ok_or_else(|| ClientError {
            message: "response carried no record".into(),
        })
    }

    /// Delete a record; resolves to the server's confirmation message.
    pub async fn delete<R: ClientResource>(
        &self,
        id: Uuid,
        school_id: Uuid,
    ) -> Result<String, ClientError> {
        let url = format!(
            "{}/{}/{}?school_id={}",
            self.base_url,
            R::PREFIX,
            id,
            school_id
        );
        let response = self.http.delete(url).send().await.map_err(transport)?;
        let envelope: Envelope<serde_json::Value> = decode(response).await?;
        Ok(envelope.message)
    }
}

/// Decode a response envelope, extracting the server's message from
/// failure bodies.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<Envelope<T>, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport)?;

    if status.is_success() {
        serde_json::from_slice(&bytes).map_err(|e| ClientError {
            message: e.to_string(),
        })
    } else {
        let message = serde_json::from_slice::<Envelope<serde_json::Value>>(&bytes)
            .map(|envelope| envelope.message)
            .unwrap_or_else(|_| status.to_string());
        Err(ClientError { message })
    }
}
