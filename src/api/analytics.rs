//! Dashboard and report endpoints.

use axum::extract::State;
use serde::Deserialize;

use super::{error, success, ApiQuery, ApiResult};
use crate::analytics::{
    self, AnalyticsOverview, ChartSlice, ContentPerformance, DashboardStats, LeadAnalytics,
    MonthlyPoint, PageMetric, Range, TrafficSource, UserBehavior,
};
use crate::models::{BlogPost, Lead, Project};
use crate::store::today;
use crate::AppState;

/// Report window parameter.
#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub range: Option<String>,
}

/// GET /api/analytics/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let revision_id = state.repo.revision_id();
    let projects = state.repo.list::<Project>().await;
    let leads = state.repo.list::<Lead>().await;
    let posts = state.repo.list::<BlogPost>().await;

    success(
        analytics::dashboard_stats(&projects, &leads, &posts, &state.config.revenue_display),
        revision_id,
    )
}

/// GET /api/analytics/trend - Monthly leads and projects.
pub async fn get_trend(State(state): State<AppState>) -> ApiResult<Vec<MonthlyPoint>> {
    let revision_id = state.repo.revision_id();
    let leads = state.repo.list::<Lead>().await;
    let projects = state.repo.list::<Project>().await;
    success(analytics::monthly_trend(&leads, &projects, today()), revision_id)
}

/// GET /api/analytics/divisions - Project share per division.
pub async fn get_divisions(State(state): State<AppState>) -> ApiResult<Vec<ChartSlice>> {
    let revision_id = state.repo.revision_id();
    let projects = state.repo.list::<Project>().await;
    success(analytics::division_distribution(&projects), revision_id)
}

macro_rules! ranged {
    ($params:expr, $revision_id:expr) => {
        match Range::parse_param($params.range.as_deref()) {
            Ok(range) => range,
            Err(e) => return error(e, $revision_id),
        }
    };
}

/// GET /api/analytics/overview?range=
pub async fn get_overview(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> ApiResult<AnalyticsOverview> {
    let revision_id = state.repo.revision_id();
    let range = ranged!(params, revision_id);
    success(analytics::overview(range, today()), revision_id)
}

/// GET /api/analytics/traffic-sources?range=
pub async fn get_traffic_sources(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> ApiResult<Vec<TrafficSource>> {
    let revision_id = state.repo.revision_id();
    let range = ranged!(params, revision_id);
    success(analytics::traffic_sources(range), revision_id)
}

/// GET /api/analytics/pages?range=
pub async fn get_pages(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> ApiResult<Vec<PageMetric>> {
    let revision_id = state.repo.revision_id();
    let range = ranged!(params, revision_id);
    success(analytics::page_performance(range), revision_id)
}

/// GET /api/analytics/behavior?range=
pub async fn get_behavior(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> ApiResult<UserBehavior> {
    let revision_id = state.repo.revision_id();
    let range = ranged!(params, revision_id);
    let posts = state.repo.list::<BlogPost>().await;
    let projects = state.repo.list::<Project>().await;
    success(analytics::user_behavior(range, &posts, &projects), revision_id)
}

/// GET /api/analytics/leads?range=
pub async fn get_lead_analytics(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> ApiResult<LeadAnalytics> {
    let revision_id = state.repo.revision_id();
    let range = ranged!(params, revision_id);
    let leads = state.repo.list::<Lead>().await;
    success(analytics::lead_analytics(range, &leads), revision_id)
}

/// GET /api/analytics/content?range=
pub async fn get_content_performance(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> ApiResult<ContentPerformance> {
    let revision_id = state.repo.revision_id();
    let range = ranged!(params, revision_id);
    success(analytics::content_performance(range), revision_id)
}
