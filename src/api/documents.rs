//! Home page content and site settings endpoints.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use super::{error, success, ApiJson, ApiResult};
use crate::errors::{AppError, AppErrorWithRevision};
use crate::export::{
    export_settings as render_settings, import_settings as parse_settings, write_settings_file,
};
use crate::models::{FooterGroup, FooterLink, HomePageContent, MethodologyStep, MetricItem, SiteSettings, WhyUsItem};
use crate::store::{apply_edit, ListEdit};
use crate::AppState;

/// GET /api/content/home
pub async fn get_home_content(State(state): State<AppState>) -> ApiResult<HomePageContent> {
    let revision_id = state.repo.revision_id();
    success(state.repo.document::<HomePageContent>().await, revision_id)
}

/// PUT /api/content/home - Replace the whole document.
pub async fn put_home_content(
    State(state): State<AppState>,
    ApiJson(content): ApiJson<HomePageContent>,
) -> ApiResult<HomePageContent> {
    let saved = state.repo.save_document(content).await;
    success(saved, state.repo.revision_id())
}

async fn edit_home<F>(state: &AppState, f: F) -> ApiResult<HomePageContent>
where
    F: FnOnce(&mut HomePageContent) -> Result<(), AppError>,
{
    let revision_id = state.repo.revision_id();
    match state.repo.edit_document(f).await {
        Ok(content) => success(content, state.repo.revision_id()),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/content/home/metrics/edit
pub async fn edit_metrics(
    State(state): State<AppState>,
    ApiJson(edit): ApiJson<ListEdit<MetricItem>>,
) -> ApiResult<HomePageContent> {
    edit_home(&state, |doc| apply_edit(&mut doc.metrics, edit)).await
}

/// POST /api/content/home/steps/edit
pub async fn edit_methodology_steps(
    State(state): State<AppState>,
    ApiJson(edit): ApiJson<ListEdit<MethodologyStep>>,
) -> ApiResult<HomePageContent> {
    edit_home(&state, |doc| apply_edit(&mut doc.methodology.steps, edit)).await
}

/// POST /api/content/home/why-us/edit
pub async fn edit_why_us(
    State(state): State<AppState>,
    ApiJson(edit): ApiJson<ListEdit<WhyUsItem>>,
) -> ApiResult<HomePageContent> {
    edit_home(&state, |doc| apply_edit(&mut doc.why_us.items, edit)).await
}

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<SiteSettings> {
    let revision_id = state.repo.revision_id();
    success(state.repo.document::<SiteSettings>().await, revision_id)
}

/// Mirror saved settings to the configured settings file.
async fn persist_settings(state: &AppState, settings: &SiteSettings) {
    let Some(path) = &state.config.settings_file else {
        return;
    };
    if let Err(e) = write_settings_file(path, settings).await {
        tracing::warn!("Failed to write settings file {}: {}", path.display(), e);
    }
}

/// PUT /api/settings - Replace the whole document.
pub async fn put_settings(
    State(state): State<AppState>,
    ApiJson(settings): ApiJson<SiteSettings>,
) -> ApiResult<SiteSettings> {
    let saved = state.repo.save_document(settings).await;
    persist_settings(&state, &saved).await;
    success(saved, state.repo.revision_id())
}

/// POST /api/settings/footer/{group}/edit - Edit one footer link group.
pub async fn edit_footer_links(
    State(state): State<AppState>,
    Path(group): Path<String>,
    ApiJson(edit): ApiJson<ListEdit<FooterLink>>,
) -> ApiResult<SiteSettings> {
    let revision_id = state.repo.revision_id();

    let group: FooterGroup = match group.parse() {
        Ok(group) => group,
        Err(e) => return error(AppError::BadRequest(e), revision_id),
    };

    let result = state
        .repo
        .edit_document(|settings: &mut SiteSettings| {
            apply_edit(settings.footer.group_mut(group), edit)
        })
        .await;

    match result {
        Ok(settings) => {
            persist_settings(&state, &settings).await;
            success(settings, state.repo.revision_id())
        }
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/settings/export - Download the settings as a JSON file.
pub async fn export_settings(State(state): State<AppState>) -> Result<Response, AppErrorWithRevision> {
    let revision_id = state.repo.revision_id();
    let settings = state.repo.document::<SiteSettings>().await;

    let body = render_settings(&settings).map_err(|error| AppErrorWithRevision {
        error,
        revision_id,
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"site-settings.json\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// POST /api/settings/import - Replace the settings with an exported file.
pub async fn import_settings(State(state): State<AppState>, body: String) -> ApiResult<SiteSettings> {
    let revision_id = state.repo.revision_id();

    match parse_settings(&body) {
        Ok(settings) => {
            let saved = state.repo.save_document(settings).await;
            persist_settings(&state, &saved).await;
            tracing::info!("Settings imported");
            success(saved, state.repo.revision_id())
        }
        Err(e) => {
            tracing::warn!("Rejected settings import: {}", e);
            error(e, revision_id)
        }
    }
}
