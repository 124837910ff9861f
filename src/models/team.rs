//! Team member model.

use serde::{Deserialize, Serialize};

use super::{
    email_if_present, max_chars, non_blank, require, require_if_present, Division, Validate,
};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

/// Maximum biography length.
pub const BIO_MAX_CHARS: usize = 500;

/// A person shown on the public team page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub division: Division,
    pub bio: String,
    pub photo_url: String,
    pub expertise: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    pub featured: bool,
    /// Lower sorts first.
    pub display_order: i32,
}

/// Request body for creating a new team member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub role: String,
    #[serde(default = "default_division")]
    pub division: Division,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

fn default_division() -> Division {
    Division::General
}

/// Request body for updating an existing team member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub expertise: Option<Vec<String>>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

impl Validate for CreateTeamMemberRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.name, "Name")?;
        require(&self.role, "Role")?;
        max_chars(&self.bio, BIO_MAX_CHARS, "Bio")?;
        email_if_present(self.email.as_ref(), "Email")
    }
}

impl Validate for UpdateTeamMemberRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.name.as_ref(), "Name")?;
        require_if_present(self.role.as_ref(), "Role")?;
        if let Some(bio) = &self.bio {
            max_chars(bio, BIO_MAX_CHARS, "Bio")?;
        }
        email_if_present(self.email.as_ref(), "Email")
    }
}

impl Record for TeamMember {
    type Create = CreateTeamMemberRequest;
    type Patch = UpdateTeamMemberRequest;

    const KIND: &'static str = "Team member";
    const PLACEMENT: Placement = Placement::Tail;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreateTeamMemberRequest, ctx: &CreateContext) -> Self {
        TeamMember {
            id,
            photo_url: non_blank(request.photo_url)
                .unwrap_or_else(|| format!("https://picsum.photos/200/200?random={}", ctx.seq % 100)),
            name: request.name,
            role: request.role,
            division: request.division,
            bio: request.bio,
            expertise: request.expertise,
            linkedin_url: request.linkedin_url,
            email: request.email,
            twitter_url: request.twitter_url,
            featured: request.featured,
            display_order: request.display_order,
        }
    }

    fn apply(&mut self, patch: UpdateTeamMemberRequest) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.division {
            self.division = v;
        }
        if let Some(v) = patch.bio {
            self.bio = v;
        }
        if let Some(v) = patch.photo_url {
            self.photo_url = v;
        }
        if let Some(v) = patch.expertise {
            self.expertise = v;
        }
        if let Some(v) = patch.linkedin_url {
            self.linkedin_url = Some(v);
        }
        if let Some(v) = patch.email {
            self.email = Some(v);
        }
        if let Some(v) = patch.twitter_url {
            self.twitter_url = Some(v);
        }
        if let Some(v) = patch.featured {
            self.featured = v;
        }
        if let Some(v) = patch.display_order {
            self.display_order = v;
        }
    }
}
