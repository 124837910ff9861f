//! Generic CRUD endpoints shared by every entity collection.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use super::{error, success, ApiJson, ApiQuery, ApiResult};
use crate::errors::AppError;
use crate::models::Validate;
use crate::query::{filter_and_sort, Queryable};
use crate::store::Collection;
use crate::AppState;

/// `GET|POST {base}` and `GET|PUT|DELETE {base}/{id}` for one collection.
pub fn collection_routes<T>(base: &str) -> Router<AppState>
where
    T: Collection + Queryable,
    T::Create: Validate,
    T::Patch: Validate,
{
    Router::new()
        .route(base, get(list_records::<T>).post(create_record::<T>))
        .route(
            &format!("{}/{{id}}", base),
            get(get_record::<T>)
                .put(update_record::<T>)
                .delete(delete_record::<T>),
        )
}

/// GET - List records matching the screen's search and filters.
pub async fn list_records<T>(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<T::Query>,
) -> ApiResult<Vec<T>>
where
    T: Collection + Queryable,
{
    let revision_id = state.repo.revision_id();
    let records = state.repo.list::<T>().await;
    success(filter_and_sort(&records, &query), revision_id)
}

/// GET /{id} - Get a single record.
pub async fn get_record<T>(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<T>
where
    T: Collection,
{
    let revision_id = state.repo.revision_id();

    match state.repo.get::<T>(&id).await {
        Some(record) => success(record, revision_id),
        None => error(AppError::not_found(T::KIND, &id), revision_id),
    }
}

/// POST - Create a record.
pub async fn create_record<T>(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<T::Create>,
) -> ApiResult<T>
where
    T: Collection,
    T::Create: Validate,
{
    let revision_id = state.repo.revision_id();

    if let Err(e) = request.validate() {
        return error(e, revision_id);
    }

    let record = state.repo.create::<T>(request).await;
    success(record, state.repo.revision_id())
}

/// PUT /{id} - Merge supplied fields into a record.
pub async fn update_record<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<T::Patch>,
) -> ApiResult<T>
where
    T: Collection,
    T::Patch: Validate,
{
    let revision_id = state.repo.revision_id();

    if let Err(e) = request.validate() {
        return error(e, revision_id);
    }

    match state.repo.update::<T>(&id, request).await {
        Some(record) => success(record, state.repo.revision_id()),
        None => error(AppError::not_found(T::KIND, &id), revision_id),
    }
}

/// DELETE /{id} - Remove a record permanently.
pub async fn delete_record<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()>
where
    T: Collection,
{
    let revision_id = state.repo.revision_id();

    if state.repo.delete::<T>(&id).await {
        success((), state.repo.revision_id())
    } else {
        error(AppError::not_found(T::KIND, &id), revision_id)
    }
}
