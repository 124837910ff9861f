//! Portfolio project model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{non_blank, placeholder_image, require, require_if_present, slugify, Division, Validate};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

/// A case study shown in the public portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client: String,
    pub division: Division,
    pub tags: Vec<String>,
    pub description: String,
    pub image_url: String,
    pub created_at: NaiveDate,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

/// Request body for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub client: String,
    pub division: Division,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
}

/// Request body for updating an existing project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub additional_images: Option<Vec<String>>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub results: Option<Vec<String>>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
}

fn check_division(division: Division) -> Result<(), AppError> {
    if division == Division::General {
        return Err(AppError::Validation(
            "Projects must belong to TECH, STUDIO or BRAND".to_string(),
        ));
    }
    Ok(())
}

impl Validate for CreateProjectRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.title, "Title")?;
        check_division(self.division)
    }
}

impl Validate for UpdateProjectRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.title.as_ref(), "Title")?;
        match self.division {
            Some(division) => check_division(division),
            None => Ok(()),
        }
    }
}

impl Record for Project {
    type Create = CreateProjectRequest;
    type Patch = UpdateProjectRequest;

    const KIND: &'static str = "Project";
    const PLACEMENT: Placement = Placement::Head;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreateProjectRequest, ctx: &CreateContext) -> Self {
        let slug = non_blank(request.slug).unwrap_or_else(|| slugify(&request.title));
        Project {
            id,
            image_url: non_blank(request.image_url).unwrap_or_else(|| placeholder_image(ctx.seq)),
            slug,
            title: request.title,
            client: request.client,
            division: request.division,
            tags: request.tags,
            description: request.description,
            created_at: ctx.today,
            featured: request.featured,
            full_description: request.full_description,
            additional_images: request.additional_images,
            video_url: request.video_url,
            technologies: request.technologies,
            results: request.results,
            meta_title: request.meta_title,
            meta_description: request.meta_description,
        }
    }

    fn apply(&mut self, patch: UpdateProjectRequest) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.client {
            self.client = v;
        }
        if let Some(v) = patch.division {
            self.division = v;
        }
        if let Some(v) = patch.tags {
            self.tags = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.image_url {
            self.image_url = v;
        }
        if let Some(v) = patch.featured {
            self.featured = v;
        }
        if let Some(v) = patch.full_description {
            self.full_description = Some(v);
        }
        if let Some(v) = patch.additional_images {
            self.additional_images = v;
        }
        if let Some(v) = patch.video_url {
            self.video_url = Some(v);
        }
        if let Some(v) = patch.technologies {
            self.technologies = v;
        }
        if let Some(v) = patch.results {
            self.results = v;
        }
        if let Some(v) = patch.slug {
            self.slug = v;
        }
        if let Some(v) = patch.meta_title {
            self.meta_title = Some(v);
        }
        if let Some(v) = patch.meta_description {
            self.meta_description = Some(v);
        }
        // A cleared slug falls back to the title-derived one.
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        }
    }
}
