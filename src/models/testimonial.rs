//! Client testimonial model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{max_chars, require, require_if_present, Division, Validate};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

/// Maximum quote length.
pub const TESTIMONIAL_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub content: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub division: Division,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub created_at: NaiveDate,
}

/// Request body for creating a new testimonial.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub company_logo_url: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default = "default_division")]
    pub division: Division,
    #[serde(default)]
    pub video_url: Option<String>,
}

fn default_rating() -> u8 {
    5
}

fn default_division() -> Division {
    Division::General
}

/// Request body for updating an existing testimonial.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub company_logo_url: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub video_url: Option<String>,
}

fn check_rating(rating: u8) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

impl Validate for CreateTestimonialRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.name, "Name")?;
        require(&self.content, "Content")?;
        max_chars(&self.content, TESTIMONIAL_MAX_CHARS, "Content")?;
        check_rating(self.rating)
    }
}

impl Validate for UpdateTestimonialRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.name.as_ref(), "Name")?;
        if let Some(content) = &self.content {
            require(content, "Content")?;
            max_chars(content, TESTIMONIAL_MAX_CHARS, "Content")?;
        }
        match self.rating {
            Some(rating) => check_rating(rating),
            None => Ok(()),
        }
    }
}

impl Record for Testimonial {
    type Create = CreateTestimonialRequest;
    type Patch = UpdateTestimonialRequest;

    const KIND: &'static str = "Testimonial";
    const PLACEMENT: Placement = Placement::Tail;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreateTestimonialRequest, ctx: &CreateContext) -> Self {
        Testimonial {
            id,
            name: request.name,
            role: request.role,
            company: request.company,
            company_logo_url: request.company_logo_url,
            photo_url: request.photo_url,
            content: request.content,
            rating: request.rating,
            division: request.division,
            video_url: request.video_url,
            created_at: ctx.today,
        }
    }

    fn apply(&mut self, patch: UpdateTestimonialRequest) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.company {
            self.company = v;
        }
        if let Some(v) = patch.company_logo_url {
            self.company_logo_url = Some(v);
        }
        if let Some(v) = patch.photo_url {
            self.photo_url = Some(v);
        }
        if let Some(v) = patch.content {
            self.content = v;
        }
        if let Some(v) = patch.rating {
            self.rating = v;
        }
        if let Some(v) = patch.division {
            self.division = v;
        }
        if let Some(v) = patch.video_url {
            self.video_url = Some(v);
        }
    }
}
