//! Admin console user model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{email_if_present, non_blank, require, require_email, require_if_present, Validate};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

string_enum! {
    /// Listed from least to most privileged. The ranking is informational only.
    pub enum UserRole {
        Viewer => "VIEWER",
        Editor => "EDITOR",
        Admin => "ADMIN",
        SuperAdmin => "SUPER_ADMIN",
    }
}

string_enum! {
    pub enum UserStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<NaiveDateTime>,
    pub created_at: NaiveDate,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.username, "Username")?;
        require_email(&self.email, "Email")
    }
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.username.as_ref(), "Username")?;
        email_if_present(self.email.as_ref(), "Email")
    }
}

/// Generated initials avatar for a username.
pub fn avatar_for(username: &str) -> String {
    let name: String = url::form_urlencoded::byte_serialize(username.as_bytes()).collect();
    format!("https://ui-avatars.com/api/?name={}&background=random", name)
}

impl Record for User {
    type Create = CreateUserRequest;
    type Patch = UpdateUserRequest;

    const KIND: &'static str = "User";
    const PLACEMENT: Placement = Placement::Tail;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreateUserRequest, ctx: &CreateContext) -> Self {
        let avatar_url =
            non_blank(request.avatar_url).unwrap_or_else(|| avatar_for(&request.username));

        User {
            id,
            avatar_url,
            username: request.username,
            email: request.email,
            role: request.role.unwrap_or(UserRole::Viewer),
            status: request.status.unwrap_or(UserStatus::Active),
            last_login: None,
            created_at: ctx.today,
        }
    }

    fn apply(&mut self, patch: UpdateUserRequest) {
        if let Some(v) = patch.username {
            self.username = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.avatar_url {
            self.avatar_url = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_encodes_username() {
        assert_eq!(
            avatar_for("Jean Dupont"),
            "https://ui-avatars.com/api/?name=Jean+Dupont&background=random"
        );
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(UserRole::SuperAdmin.as_str(), "SUPER_ADMIN");
        assert_eq!("EDITOR".parse::<UserRole>().unwrap(), UserRole::Editor);
    }
}
