//! Blog post model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    max_chars, non_blank, placeholder_image, reading_time, require, require_if_present, slugify,
    Validate, DEFAULT_READING_TIME,
};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

/// Maximum excerpt length shown on listing cards.
pub const EXCERPT_MAX_CHARS: usize = 200;

string_enum! {
    pub enum BlogCategory {
        Insights => "Insights",
        Engineering => "Engineering",
        Design => "Design",
        Branding => "Branding",
        CompanyNews => "Company News",
    }
}

string_enum! {
    pub enum PostStatus {
        Draft => "DRAFT",
        Published => "PUBLISHED",
    }
}

impl PostStatus {
    /// The other publication state.
    pub fn toggled(self) -> Self {
        match self {
            PostStatus::Draft => PostStatus::Published,
            PostStatus::Published => PostStatus::Draft,
        }
    }
}

/// An article on the agency blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: BlogCategory,
    pub image_url: String,
    pub status: PostStatus,
    pub published_date: NaiveDate,
    pub reading_time: String,
    pub featured: bool,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Vec<String>,
}

/// Request body for creating a new post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<BlogCategory>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Vec<String>,
}

/// Request body for updating an existing post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<BlogCategory>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub reading_time: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<Vec<String>>,
}

impl Validate for CreateBlogPostRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.title, "Title")?;
        max_chars(&self.excerpt, EXCERPT_MAX_CHARS, "Excerpt")
    }
}

impl Validate for UpdateBlogPostRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.title.as_ref(), "Title")?;
        match &self.excerpt {
            Some(excerpt) => max_chars(excerpt, EXCERPT_MAX_CHARS, "Excerpt"),
            None => Ok(()),
        }
    }
}

impl Record for BlogPost {
    type Create = CreateBlogPostRequest;
    type Patch = UpdateBlogPostRequest;

    const KIND: &'static str = "Blog post";
    const PLACEMENT: Placement = Placement::Head;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreateBlogPostRequest, ctx: &CreateContext) -> Self {
        let slug = non_blank(request.slug).unwrap_or_else(|| slugify(&request.title));
        let reading_time =
            reading_time(&request.content).unwrap_or_else(|| DEFAULT_READING_TIME.to_string());

        BlogPost {
            id,
            slug,
            reading_time,
            image_url: non_blank(request.image_url).unwrap_or_else(|| placeholder_image(ctx.seq)),
            title: request.title,
            excerpt: request.excerpt,
            content: request.content,
            category: request.category.unwrap_or(BlogCategory::Insights),
            status: request.status.unwrap_or(PostStatus::Draft),
            published_date: request.published_date.unwrap_or(ctx.today),
            featured: request.featured,
            author: non_blank(request.author).unwrap_or_else(|| "Admin".to_string()),
            tags: request.tags,
            meta_title: request.meta_title,
            meta_description: request.meta_description,
            meta_keywords: request.meta_keywords,
        }
    }

    /// Slugs are unique: a taken slug gets the first free `-2`, `-3`, ... suffix.
    fn reconcile(&mut self, existing: &[Self]) {
        let taken = |slug: &str| existing.iter().any(|post| post.slug == slug);
        if !taken(&self.slug) {
            return;
        }

        let base = self.slug.clone();
        let mut n = 2;
        while taken(&format!("{}-{}", base, n)) {
            n += 1;
        }
        self.slug = format!("{}-{}", base, n);
    }

    fn apply(&mut self, patch: UpdateBlogPostRequest) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.slug {
            self.slug = v;
        }
        if let Some(v) = patch.excerpt {
            self.excerpt = v;
        }
        if let Some(v) = patch.reading_time {
            self.reading_time = v;
        }
        if let Some(v) = patch.content {
            // Blank content keeps the previous estimate.
            if let Some(minutes) = reading_time(&v) {
                self.reading_time = minutes;
            }
            self.content = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.image_url {
            self.image_url = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.published_date {
            self.published_date = v;
        }
        if let Some(v) = patch.featured {
            self.featured = v;
        }
        if let Some(v) = patch.author {
            self.author = v;
        }
        if let Some(v) = patch.tags {
            self.tags = v;
        }
        if let Some(v) = patch.meta_title {
            self.meta_title = Some(v);
        }
        if let Some(v) = patch.meta_description {
            self.meta_description = Some(v);
        }
        if let Some(v) = patch.meta_keywords {
            self.meta_keywords = v;
        }
    }
}
