//! FAQ entry model.

use serde::{Deserialize, Serialize};

use super::{require, require_if_present, Validate};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

string_enum! {
    pub enum FaqCategory {
        General => "General",
        Services => "Services",
        Process => "Process",
        Billing => "Billing",
        Support => "Support",
        Technical => "Technical",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    pub display_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
    #[serde(default = "default_category")]
    pub category: FaqCategory,
    #[serde(default)]
    pub display_order: i32,
}

fn default_category() -> FaqCategory {
    FaqCategory::General
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<FaqCategory>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

impl Validate for CreateFaqRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.question, "Question")?;
        require(&self.answer, "Answer")
    }
}

impl Validate for UpdateFaqRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.question.as_ref(), "Question")?;
        require_if_present(self.answer.as_ref(), "Answer")
    }
}

impl Record for Faq {
    type Create = CreateFaqRequest;
    type Patch = UpdateFaqRequest;

    const KIND: &'static str = "FAQ";
    const PLACEMENT: Placement = Placement::Tail;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreateFaqRequest, _ctx: &CreateContext) -> Self {
        Faq {
            id,
            question: request.question,
            answer: request.answer,
            category: request.category,
            display_order: request.display_order,
        }
    }

    fn apply(&mut self, patch: UpdateFaqRequest) {
        if let Some(v) = patch.question {
            self.question = v;
        }
        if let Some(v) = patch.answer {
            self.answer = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.display_order {
            self.display_order = v;
        }
    }
}
