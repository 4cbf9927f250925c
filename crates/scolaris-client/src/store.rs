//! The per-resource dispatch store.
//!
//! A [`ResourceStore`] owns one school's view of one resource kind,
//! reproducing the frontend slice contract: every operation dispatches
//! Loading first, then Succeeded or Failed, and a successful mutation
//! is followed by a sequential refetch of the listing. A failed
//! mutation leaves the listing untouched.

use uuid::Uuid;

use crate::api::{ApiClient, ClientError, ClientResource};
use crate::state::FetchState;

pub struct ResourceStore<R: ClientResource> {
    client: ApiClient,
    school_id: Uuid,
    items: FetchState<Vec<R>>,
    last_mutation: FetchState<()>,
}

impl<R: ClientResource> ResourceStore<R> {
    pub fn new(client: ApiClient, school_id: Uuid) -> Self {
        Self {
            client,
            school_id,
            items: FetchState::Idle,
            last_mutation: FetchState::Idle,
        }
    }

    pub fn items(&self) -> &FetchState<Vec<R>> {
        &self.items
    }

    /// State of the most recent create/update/delete.
    pub fn last_mutation(&self) -> &FetchState<()> {
        &self.last_mutation
    }

    /// Fetch the school's listing.
    pub async fn refresh(&mut self) {
        self.items = FetchState::Loading;
        self.items = match self.client.list::<R>(self.school_id).await {
            Ok(listing) => FetchState::Succeeded(listing.items),
            Err(err) => FetchState::Failed(err.message),
        };
    }

    /// Create a record, then refetch the listing.
    ///
    /// The refetch is issued only after the mutation response is
    /// observed.
    pub async fn create(&mut self, input: R::Create) -> Result<R, ClientError> {
        self.last_mutation = FetchState::Loading;
        match self.client.create::<R>(&input).await {
            Ok(record) => {
                self.last_mutation = FetchState::Succeeded(());
                self.refresh().await;
                Ok(record)
            }
            Err(err) => {
                self.last_mutation = FetchState::Failed(err.message.clone());
                Err(err)
            }
        }
    }

    /// Apply a merge-patch update, then refetch the listing.
    pub async fn update(&mut self, id: Uuid, input: R::Update) -> Result<R, ClientError> {
        self.last_mutation = FetchState::Loading;
        match self.client.update::<R>(id, &input).await {
            Ok(record) => {
                self.last_mutation = FetchState::Succeeded(());
                self.refresh().await;
                Ok(record)
            }
            Err(err) => {
                self.last_mutation = FetchState::Failed(err.message.clone());
                Err(err)
            }
        }
    }

    /// Delete a record, then refetch the listing.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.last_mutation = FetchState::Loading;
        match self.client.delete::<R>(id, self.school_id).await {
            Ok(_message) => {
                self.last_mutation = FetchState::Succeeded(());
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.last_mutation = FetchState::Failed(err.message.clone());
                Err(err)
            }
        }
    }
}
