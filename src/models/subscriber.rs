//! Newsletter subscriber model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{email_if_present, require_email, Validate};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

string_enum! {
    /// There is no transition back to `Active` once unsubscribed.
    pub enum SubscriberStatus {
        Active => "ACTIVE",
        Unsubscribed => "UNSUBSCRIBED",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    /// Where the sign-up came from, e.g. `Footer` or `Modal`.
    pub source: String,
    pub status: SubscriberStatus,
    pub subscribed_at: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriberRequest {
    pub email: String,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "Admin".to_string()
}

/// Status changes go through the unsubscribe action, not through updates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriberRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl Validate for CreateSubscriberRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_email(&self.email, "Email")
    }
}

impl Validate for UpdateSubscriberRequest {
    fn validate(&self) -> Result<(), AppError> {
        email_if_present(self.email.as_ref(), "Email")
    }
}

impl Record for Subscriber {
    type Create = CreateSubscriberRequest;
    type Patch = UpdateSubscriberRequest;

    const KIND: &'static str = "Subscriber";
    const PLACEMENT: Placement = Placement::Tail;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreateSubscriberRequest, ctx: &CreateContext) -> Self {
        Subscriber {
            id,
            email: request.email,
            source: request.source,
            status: SubscriberStatus::Active,
            subscribed_at: ctx.today,
            unsubscribed_at: None,
        }
    }

    fn apply(&mut self, patch: UpdateSubscriberRequest) {
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.source {
            self.source = v;
        }
    }
}
