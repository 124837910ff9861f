//! Text-generation endpoints. These always succeed; failures degrade to
//! placeholder text.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::{error, success, ApiJson, ApiResult};
use crate::ai;
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptionRequest {
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImproveTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratedText {
    pub text: String,
}

/// POST /api/ai/project-description
pub async fn project_description(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ProjectDescriptionRequest>,
) -> ApiResult<GeneratedText> {
    let revision_id = state.repo.revision_id();

    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            revision_id,
        );
    }

    let text = ai::generate_project_description(
        state.ai.as_deref(),
        &request.title,
        &request.client,
        &request.keywords,
    )
    .await;
    success(GeneratedText { text }, revision_id)
}

/// POST /api/ai/improve-text
pub async fn improve_text(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ImproveTextRequest>,
) -> ApiResult<GeneratedText> {
    let revision_id = state.repo.revision_id();
    let text = ai::improve_text(state.ai.as_deref(), &request.text).await;
    success(GeneratedText { text }, revision_id)
}
