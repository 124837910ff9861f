//! Status workflow and newsletter endpoints.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::{error, success, ApiJson, ApiQuery, ApiResult};
use crate::errors::AppError;
use crate::export::{subscribers_csv, subscribers_filename};
use crate::models::{BlogPost, Devis, Lead, LeadStatus, Subscriber, User};
use crate::query::{filter_and_sort, subscriber_stats, SubscriberQuery, SubscriberStats};
use crate::store::{today, Record};
use crate::workflow;
use crate::AppState;

/// Request body for a lead status change.
#[derive(Debug, Deserialize)]
pub struct LeadStatusRequest {
    pub status: LeadStatus,
}

fn not_found<T: Record, R>(id: &str, revision_id: i64) -> ApiResult<R>
where
    R: serde::Serialize,
{
    error(AppError::not_found(T::KIND, id), revision_id)
}

/// PUT /api/leads/{id}/status - Move a lead to any pipeline status.
pub async fn set_lead_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<LeadStatusRequest>,
) -> ApiResult<Lead> {
    let revision_id = state.repo.revision_id();

    match workflow::set_lead_status(&state.repo, &id, request.status).await {
        Some(lead) => success(lead, state.repo.revision_id()),
        None => not_found::<Lead, _>(&id, revision_id),
    }
}

/// POST /api/blog-posts/{id}/toggle-publish - Flip draft/published.
pub async fn toggle_publish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BlogPost> {
    let revision_id = state.repo.revision_id();

    match workflow::toggle_publish(&state.repo, &id).await {
        Some(post) => success(post, state.repo.revision_id()),
        None => not_found::<BlogPost, _>(&id, revision_id),
    }
}

/// POST /api/devis/{id}/send - Send a quote to its client.
pub async fn send_devis(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Devis> {
    let revision_id = state.repo.revision_id();

    match workflow::send_devis(&state.repo, &id).await {
        Some(devis) => success(devis, state.repo.revision_id()),
        None => not_found::<Devis, _>(&id, revision_id),
    }
}

/// POST /api/subscribers/{id}/unsubscribe
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Subscriber> {
    let revision_id = state.repo.revision_id();

    match workflow::unsubscribe(&state.repo, &id).await {
        Some(subscriber) => success(subscriber, state.repo.revision_id()),
        None => not_found::<Subscriber, _>(&id, revision_id),
    }
}

/// POST /api/users/{id}/reset-password - Fire-and-forget reset e-mail.
pub async fn reset_password(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let revision_id = state.repo.revision_id();

    match workflow::reset_password(&state.repo, &id).await {
        Some(_) => success((), revision_id),
        None => not_found::<User, _>(&id, revision_id),
    }
}

/// GET /api/subscribers/stats - Newsletter headline counts.
pub async fn get_subscriber_stats(State(state): State<AppState>) -> ApiResult<SubscriberStats> {
    let revision_id = state.repo.revision_id();
    let subscribers = state.repo.list::<Subscriber>().await;
    success(subscriber_stats(&subscribers, today()), revision_id)
}

/// GET /api/subscribers/export - Filtered, sorted subscriber list as CSV.
pub async fn export_subscribers(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SubscriberQuery>,
) -> Response {
    let subscribers = state.repo.list::<Subscriber>().await;
    let selected = filter_and_sort(&subscribers, &query);
    tracing::info!(rows = selected.len(), "Exporting subscribers");

    let disposition = format!("attachment; filename=\"{}\"", subscribers_filename(today()));
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        subscribers_csv(&selected),
    )
        .into_response()
}
