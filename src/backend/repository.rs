use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    backend::ApiClient,
    error::ApiError,
    types::{Identified, RecordId},
    warning,
};

/// HTTP verb used for updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Patch,
    Put,
}

/// A backend resource exposed through list/create/update/delete endpoints.
pub trait Resource {
    type Record: DeserializeOwned + Identified + Clone;
    type Draft: Serialize;
    type Patch: Serialize;
    /// What a listing is narrowed by, e.g. the parent course of topics.
    type Scope: Copy + PartialEq;

    /// Singular name used in diagnostics.
    const NAME: &'static str;
    /// Collection path without the trailing slash, e.g. `/api/courses`.
    const BASE: &'static str;
    const UPDATE: UpdateMethod = UpdateMethod::Patch;

    fn list_path(scope: Self::Scope) -> String;

    /// The scope whose listing contains `record`.
    fn scope_of(record: &Self::Record) -> Self::Scope;

    fn collection_path() -> String {
        format!("{}/", Self::BASE)
    }

    fn item_path(id: RecordId) -> String {
        format!("{}/{}/", Self::BASE, id)
    }
}

/// Typed CRUD access to one resource.
///
/// Every mutation returns the record as the backend stored it, so callers can
/// merge it into their local state instead of re-listing. Failures are logged
/// and handed back unchanged.
#[derive(Debug, Clone)]
pub struct Repository<R: Resource> {
    client: ApiClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> Repository<R> {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            _resource: PhantomData,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn list(&self, scope: R::Scope) -> Result<Vec<R::Record>, ApiError> {
        self.client
            .get(&R::list_path(scope))
            .await
            .inspect_err(|e| warning!("Failed to fetch {} list: {}", R::NAME, e))
    }

    pub async fn create(&self, draft: &R::Draft) -> Result<R::Record, ApiError> {
        self.client
            .post(&R::collection_path(), draft)
            .await
            .inspect_err(|e| warning!("Failed to create {}: {}", R::NAME, e))
    }

    pub async fn update(&self, id: RecordId, patch: &R::Patch) -> Result<R::Record, ApiError> {
        let path = R::item_path(id);
        let result = match R::UPDATE {
            UpdateMethod::Patch => self.client.patch(&path, patch).await,
            UpdateMethod::Put => self.client.put(&path, patch).await,
        };
        result.inspect_err(|e| warning!("Failed to update {} {}: {}", R::NAME, id, e))
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        self.client
            .delete(&R::item_path(id))
            .await
            .inspect_err(|e| warning!("Failed to delete {} {}: {}", R::NAME, id, e))
    }
}
