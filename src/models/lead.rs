//! Inbound lead model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{email_if_present, require, require_email, require_if_present, Division, Validate};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

string_enum! {
    /// Lead pipeline state. Any state may follow any other.
    pub enum LeadStatus {
        New => "NEW",
        Contacted => "CONTACTED",
        Closed => "CLOSED",
    }
}

/// A contact request received through the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub division: Division,
    pub status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    pub received_at: NaiveDate,
    /// Private to the admin console.
    #[serde(default)]
    pub internal_notes: String,
}

/// Request body for recording a new lead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default = "default_division")]
    pub division: Division,
    #[serde(default)]
    pub status: Option<LeadStatus>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub received_at: Option<NaiveDate>,
    #[serde(default)]
    pub internal_notes: String,
}

fn default_division() -> Division {
    Division::General
}

/// Request body for updating an existing lead.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub status: Option<LeadStatus>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub internal_notes: Option<String>,
}

impl Validate for CreateLeadRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.name, "Name")?;
        require_email(&self.email, "Email")
    }
}

impl Validate for UpdateLeadRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.name.as_ref(), "Name")?;
        email_if_present(self.email.as_ref(), "Email")
    }
}

impl Record for Lead {
    type Create = CreateLeadRequest;
    type Patch = UpdateLeadRequest;

    const KIND: &'static str = "Lead";
    const PLACEMENT: Placement = Placement::Tail;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreateLeadRequest, ctx: &CreateContext) -> Self {
        Lead {
            id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            company: request.company,
            division: request.division,
            status: request.status.unwrap_or(LeadStatus::New),
            budget: request.budget,
            message: request.message,
            event_date: request.event_date,
            received_at: request.received_at.unwrap_or(ctx.today),
            internal_notes: request.internal_notes,
        }
    }

    fn apply(&mut self, patch: UpdateLeadRequest) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = Some(v);
        }
        if let Some(v) = patch.company {
            self.company = Some(v);
        }
        if let Some(v) = patch.division {
            self.division = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.budget {
            self.budget = Some(v);
        }
        if let Some(v) = patch.message {
            self.message = v;
        }
        if let Some(v) = patch.event_date {
            self.event_date = Some(v);
        }
        if let Some(v) = patch.internal_notes {
            self.internal_notes = v;
        }
    }
}
