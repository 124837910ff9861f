//! Pricing package model.

use serde::{Deserialize, Serialize};

use super::{require, require_if_present, Division, Validate};
use crate::errors::AppError;
use crate::store::{CreateContext, Placement, Record};

/// A priced service offering displayed on the pricing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPackage {
    pub id: String,
    pub title: String,
    pub division: Division,
    /// Display string, never parsed.
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_note: Option<String>,
    pub description: String,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_highlight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revisions: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePricingPackageRequest {
    pub title: String,
    #[serde(default = "default_division")]
    pub division: Division,
    pub price: String,
    #[serde(default)]
    pub price_note: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_highlight: bool,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub revisions: Option<String>,
}

fn default_division() -> Division {
    Division::General
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricingPackageRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub price_note: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub is_popular: Option<bool>,
    #[serde(default)]
    pub is_highlight: Option<bool>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub revisions: Option<String>,
}

impl Validate for CreatePricingPackageRequest {
    fn validate(&self) -> Result<(), AppError> {
        require(&self.title, "Title")?;
        require(&self.price, "Price")
    }
}

impl Validate for UpdatePricingPackageRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_if_present(self.title.as_ref(), "Title")?;
        require_if_present(self.price.as_ref(), "Price")
    }
}

impl Record for PricingPackage {
    type Create = CreatePricingPackageRequest;
    type Patch = UpdatePricingPackageRequest;

    const KIND: &'static str = "Pricing package";
    const PLACEMENT: Placement = Placement::Tail;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, request: CreatePricingPackageRequest, _ctx: &CreateContext) -> Self {
        PricingPackage {
            id,
            title: request.title,
            division: request.division,
            price: request.price,
            price_note: request.price_note,
            description: request.description,
            features: request.features,
            is_popular: request.is_popular,
            is_highlight: request.is_highlight,
            delivery_time: request.delivery_time,
            revisions: request.revisions,
        }
    }

    fn apply(&mut self, patch: UpdatePricingPackageRequest) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.division {
            self.division = v;
        }
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.price_note {
            self.price_note = Some(v);
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.features {
            self.features = v;
        }
        if let Some(v) = patch.is_popular {
            self.is_popular = v;
        }
        if let Some(v) = patch.is_highlight {
            self.is_highlight = v;
        }
        if let Some(v) = patch.delivery_time {
            self.delivery_time = Some(v);
        }
        if let Some(v) = patch.revisions {
            self.revisions = Some(v);
        }
    }
}
