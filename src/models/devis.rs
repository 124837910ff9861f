//! Quote ("devis") model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{email_if_present, require, require_email, require_if_present, Division, Validate};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

string_enum! {
    pub enum DevisStatus {
        Draft => "DRAFT",
        Sent => "SENT",
        Accepted => "ACCEPTED",
        Rejected => "REJECTED",
    }
}

/// A formal price quote prepared for a prospective client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Devis {
    /// Human-readable quote number, e.g. `DEVIS-2024-001`.
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub division: Division,
    pub project_description: String,
    pub budget: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_requirements: Option<String>,
    pub generated_content: String,
    pub created_at: NaiveDate,
    pub status: DevisStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDevisRequest {
    pub client_name: String,
    pub client_email: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default = "default_division")]
    pub division: Division,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub additional_requirements: Option<String>,
    #[serde(default)]
    pub generated_content: String,
    #[serde(default)]
    pub status: Option<DevisStatus>,
}

fn default_division() -> Division {
    Division::General
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDevisRequest {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub additional_requirements: Option<String>,
    #[serde(default)]
    pub generated_content: Option<String>,
    #[serde(default)]
    pub status: Option<DevisStatus>,
}

impl Validate for CreateDevisRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.client_name, "Client name")?;
        require_email(&self.client_email, "Client email")
    }
}

impl Validate for UpdateDevisRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.client_name.as_ref(), "Client name")?;
        email_if_present(self.client_email.as_ref(), "Client email")
    }
}

impl Record for Devis {
    type Create = CreateDevisRequest;
    type Patch = UpdateDevisRequest;

    const KIND: &'static str = "Devis";
    const PLACEMENT: Placement = Placement::Tail;

    fn id(&self) -> &str {
        &self.id
    }

    fn generate_id(ctx: &CreateContext) -> String {
        format!("DEVIS-{}-{:03}", ctx.today.year(), ctx.seq)
    }

    fn build(id: String, request: CreateDevisRequest, ctx: &CreateContext) -> Self {
        Devis {
            id,
            client_name: request.client_name,
            client_email: request.client_email,
            company_name: request.company_name,
            division: request.division,
            project_description: request.project_description,
            budget: request.budget,
            deadline: request.deadline,
            additional_requirements: request.additional_requirements,
            generated_content: request.generated_content,
            created_at: ctx.today,
            status: request.status.unwrap_or(DevisStatus::Draft),
        }
    }

    fn apply(&mut self, patch: UpdateDevisRequest) {
        if let Some(v) = patch.client_name {
            self.client_name = v;
        }
        if let Some(v) = patch.client_email {
            self.client_email = v;
        }
        if let Some(v) = patch.company_name {
            self.company_name = Some(v);
        }
        if let Some(v) = patch.division {
            self.division = v;
        }
        if let Some(v) = patch.project_description {
            self.project_description = v;
        }
        if let Some(v) = patch.budget {
            self.budget = v;
        }
        if let Some(v) = patch.deadline {
            self.deadline = Some(v);
        }
        if let Some(v) = patch.additional_requirements {
            self.additional_requirements = Some(v);
        }
        if let Some(v) = patch.generated_content {
            self.generated_content = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
    }
}
