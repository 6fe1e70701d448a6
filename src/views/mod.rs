//! # Views Module
//!
//! Screen state of the admin client, independent of how it is drawn.
//!
//! Each view owns the records it shows in a [`Collection`] and a
//! [`Repository`] to talk to the backend. A view lists once when loaded (and
//! again when its scope changes, e.g. another course is opened), then keeps
//! the collection in step with the backend by merging the record every
//! create or update returns, and by dropping a record only after its delete
//! succeeded. A returned record that belongs to another scope is not shown,
//! since the scope's listing would not contain it. A failed call leaves the
//! collection untouched.
//!
//! Calls are not coordinated with each other. When two updates of the same
//! record are in flight, whichever response is merged last is what the view
//! shows.

mod catalog;
mod dashboard;
mod materials;
mod qna;

pub use catalog::CourseCatalog;
pub use dashboard::DashboardTotals;
pub use materials::MaterialShelf;
pub use qna::QuestionBoard;

use std::cmp::Ordering;

use crate::{
    backend::{
        ApiClient, Repository, Resource, answers::Answers, categories::Categories, courses::Courses,
        topics::Topics,
    },
    error::ApiError,
    management::Collection,
    types::{Identified, RecordId},
};

pub type CourseList = ResourceView<Courses>;
pub type CategoryList = ResourceView<Categories>;
/// Topics of one course.
pub type TopicList = ResourceView<Topics>;
/// Answers of one question.
pub type AnswerList = ResourceView<Answers>;

/// Records of one resource within one scope, kept in step with the backend.
#[derive(Debug, Clone)]
pub struct ResourceView<R: Resource> {
    repository: Repository<R>,
    scope: R::Scope,
    records: Collection<R::Record>,
    loaded: bool,
}

impl<R: Resource> ResourceView<R> {
    pub fn new(client: &ApiClient, scope: R::Scope) -> Self {
        Self {
            repository: Repository::new(client),
            scope,
            records: Collection::new(),
            loaded: false,
        }
    }

    pub fn repository(&self) -> &Repository<R> {
        &self.repository
    }

    pub fn scope(&self) -> R::Scope {
        self.scope
    }

    pub fn records(&self) -> &Collection<R::Record> {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&R::Record> {
        self.records.get(id)
    }

    /// Whether a listing has completed since the view was created or rescoped.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replaces the local records with a fresh listing of the scope.
    pub async fn load(&mut self) -> Result<&Collection<R::Record>, ApiError> {
        let records = self.repository.list(self.scope).await?;
        self.records.replace_all(records);
        self.loaded = true;
        Ok(&self.records)
    }

    /// Switches to another scope and lists it.
    ///
    /// Records of the old scope are dropped before the listing, so a failed
    /// listing leaves an empty, unloaded view rather than stale records.
    pub async fn rescope(&mut self, scope: R::Scope) -> Result<&Collection<R::Record>, ApiError> {
        self.scope = scope;
        self.records.clear();
        self.loaded = false;
        self.load().await
    }

    pub async fn create(&mut self, draft: &R::Draft) -> Result<R::Record, ApiError> {
        let record = self.repository.create(draft).await?;
        self.apply(record.clone());
        Ok(record)
    }

    /// Updates a record. If the update moved it to another scope it leaves
    /// this view.
    pub async fn update(&mut self, id: RecordId, patch: &R::Patch) -> Result<R::Record, ApiError> {
        let record = self.repository.update(id, patch).await?;
        self.apply(record.clone());
        Ok(record)
    }

    pub async fn delete(&mut self, id: RecordId) -> Result<(), ApiError> {
        self.repository.delete(id).await?;
        self.records.remove(id);
        Ok(())
    }

    /// Merges a record obtained elsewhere, e.g. from a call made through a
    /// cloned repository. Returns `true` when it replaced a local record.
    ///
    /// A record of another scope is removed instead.
    pub fn apply(&mut self, record: R::Record) -> bool {
        if R::scope_of(&record) == self.scope {
            self.records.upsert(record)
        } else {
            self.records.remove(record.id());
            false
        }
    }

    pub(crate) fn discard(&mut self, id: RecordId) -> Option<R::Record> {
        self.records.remove(id)
    }

    pub(crate) fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&R::Record) -> bool,
    {
        self.records.retain(keep);
    }

    pub(crate) fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&R::Record, &R::Record) -> Ordering,
    {
        self.records.sort_by(compare);
    }
}
