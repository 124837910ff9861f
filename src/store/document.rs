//! Singleton documents and their ordered sub-lists.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::errors::AppError;

/// A whole-document record replaced wholesale on save.
pub trait Document: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: &'static str;

    /// Renumber every ordered sub-list from array position.
    fn normalize(&mut self);
}

/// An item of a manually ordered sub-list.
///
/// Array position is authoritative; `order` always mirrors `position + 1`.
pub trait Ordered {
    fn item_id(&self) -> &str;
    fn set_item_id(&mut self, id: String);
    fn set_order(&mut self, order: u32);
}

pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32 + 1);
    }
}

/// Short identifier not yet used in `items`.
fn fresh_item_id<T: Ordered>(items: &[T]) -> String {
    loop {
        let candidate = uuid::Uuid::new_v4().simple().to_string()[..8].to_string();
        if items.iter().all(|item| item.item_id() != candidate) {
            return candidate;
        }
    }
}

fn position_of<T: Ordered>(items: &[T], id: &str) -> Result<usize, AppError> {
    items
        .iter()
        .position(|item| item.item_id() == id)
        .ok_or_else(|| AppError::not_found("Item", id))
}

/// One editing step on an ordered sub-list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ListEdit<T> {
    Add { item: T },
    Update { id: String, item: T },
    Remove { id: String },
    MoveUp { id: String },
    MoveDown { id: String },
}

/// Apply `edit` to `items` and renumber.
///
/// Moving past either end is a no-op; unknown ids are `NotFound`.
pub fn apply_edit<T: Ordered>(items: &mut Vec<T>, edit: ListEdit<T>) -> Result<(), AppError> {
    match edit {
        ListEdit::Add { mut item } => {
            item.set_item_id(fresh_item_id(items));
            items.push(item);
        }
        ListEdit::Update { id, mut item } => {
            let index = position_of(items, &id)?;
            item.set_item_id(id);
            items[index] = item;
        }
        ListEdit::Remove { id } => {
            let index = position_of(items, &id)?;
            items.remove(index);
        }
        ListEdit::MoveUp { id } => {
            let index = position_of(items, &id)?;
            if index > 0 {
                items.swap(index, index - 1);
            }
        }
        ListEdit::MoveDown { id } => {
            let index = position_of(items, &id)?;
            if index + 1 < items.len() {
                items.swap(index, index + 1);
            }
        }
    }

    renumber(items);
    Ok(())
}

/// Holder for one singleton document.
pub struct DocumentStore<D: Document> {
    inner: RwLock<D>,
}

impl<D: Document> Default for DocumentStore<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: Document> DocumentStore<D> {
    pub fn new(mut document: D) -> Self {
        document.normalize();
        Self {
            inner: RwLock::new(document),
        }
    }

    pub async fn get(&self) -> D {
        self.inner.read().await.clone()
    }

    /// Replace the whole document.
    pub async fn set(&self, mut document: D) {
        document.normalize();
        *self.inner.write().await = document;
    }

    /// Edit a copy and store it only if `f` succeeds.
    pub async fn edit<F>(&self, f: F) -> Result<D, AppError>
    where
        F: FnOnce(&mut D) -> Result<(), AppError>,
    {
        let mut inner = self.inner.write().await;
        let mut draft = inner.clone();
        f(&mut draft)?;
        draft.normalize();
        *inner = draft.clone();
        Ok(draft)
    }
}
