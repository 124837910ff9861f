//! In-memory stores for entity collections and singleton documents.
//!
//! The process owns exactly one [`Repository`]; every consumer receives it by
//! reference. Stores never validate input and never observe each other.

mod document;
mod repository;
pub mod seed;

pub use document::*;
pub use repository::*;

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

/// Where a newly created record is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Head,
    Tail,
}

/// Values available to the per-entity default/derive hook.
#[derive(Debug, Clone, Copy)]
pub struct CreateContext {
    /// 1-based creation counter for this collection.
    pub seq: u64,
    pub today: NaiveDate,
}

/// A record kept in an [`EntityStore`].
///
/// `build` is the single place where an entity's creation defaults live;
/// `apply` merges a typed partial update over the stored record.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Create: DeserializeOwned + Send;
    type Patch: DeserializeOwned + Send;

    /// Human-readable collection name used in messages.
    const KIND: &'static str;
    const PLACEMENT: Placement;

    fn id(&self) -> &str;

    fn generate_id(_ctx: &CreateContext) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    fn build(id: String, request: Self::Create, ctx: &CreateContext) -> Self;

    /// Adjust a freshly built record against the records already stored.
    fn reconcile(&mut self, _existing: &[Self]) {}

    fn apply(&mut self, patch: Self::Patch);
}

/// Current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

struct Slots<T> {
    records: Vec<T>,
    /// Every id ever held, so deleted ids are never handed out again.
    issued: HashSet<String>,
    seq: u64,
}

/// Keyed collection of one entity type, kept in display order.
pub struct EntityStore<T: Record> {
    inner: RwLock<Slots<T>>,
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Slots {
                records: Vec::new(),
                issued: HashSet::new(),
                seq: 0,
            }),
        }
    }

    /// Snapshot of all records in current order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records.clone()
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        let inner = self.inner.read().await;
        inner.records.iter().find(|r| r.id() == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn create(&self, request: T::Create) -> T {
        self.create_on(request, today()).await
    }

    /// Create a record as if the current date were `today`.
    pub async fn create_on(&self, request: T::Create, today: NaiveDate) -> T {
        let mut inner = self.inner.write().await;

        let (id, ctx) = loop {
            inner.seq += 1;
            let ctx = CreateContext {
                seq: inner.seq,
                today,
            };
            let id = T::generate_id(&ctx);
            if !inner.issued.contains(&id) {
                break (id, ctx);
            }
        };

        inner.issued.insert(id.clone());
        let mut record = T::build(id, request, &ctx);
        record.reconcile(&inner.records);

        match T::PLACEMENT {
            Placement::Head => inner.records.insert(0, record.clone()),
            Placement::Tail => inner.records.push(record.clone()),
        }

        record
    }

    /// Append an already-built record, e.g. from the demo dataset.
    pub async fn insert(&self, record: T) {
        let mut inner = self.inner.write().await;
        inner.seq += 1;
        inner.issued.insert(record.id().to_string());
        inner.records.push(record);
    }

    /// Merge `patch` into the record. Returns `None` if the id is unknown.
    pub async fn update(&self, id: &str, patch: T::Patch) -> Option<T> {
        self.modify(id, |record| record.apply(patch)).await
    }

    /// Run `f` against the stored record in place.
    pub async fn modify<F>(&self, id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write().await;
        let record = inner.records.iter_mut().find(|r| r.id() == id)?;
        f(record);
        Some(record.clone())
    }

    /// Remove the record permanently. Returns `false` if it was not present.
    pub async fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;
        match inner.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                inner.records.remove(index);
                true
            }
            None => false,
        }
    }
}
