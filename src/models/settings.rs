//! Site-wide settings document.

use serde::{Deserialize, Serialize};

use crate::store::{renumber, Document, Ordered};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub site_name: String,
    pub site_description: String,
    pub footer_description: String,
    pub contact_email: String,
    pub careers_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    #[serde(default)]
    pub id: String,
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub order: u32,
}

impl Ordered for FooterLink {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn set_item_id(&mut self, id: String) {
        self.id = id;
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

string_enum! {
    /// The three named footer link groups.
    pub enum FooterGroup {
        Division => "division",
        Company => "company",
        Other => "other",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSettings {
    #[serde(default)]
    pub division_links: Vec<FooterLink>,
    #[serde(default)]
    pub company_links: Vec<FooterLink>,
    #[serde(default)]
    pub other_links: Vec<FooterLink>,
}

impl FooterSettings {
    pub fn group_mut(&mut self, group: FooterGroup) -> &mut Vec<FooterLink> {
        match group {
            FooterGroup::Division => &mut self.division_links,
            FooterGroup::Company => &mut self.company_links,
            FooterGroup::Other => &mut self.other_links,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialSettings {
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
    pub instagram: String,
    pub youtube: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoSettings {
    pub keywords: Vec<String>,
    pub default_meta_title: String,
    pub default_meta_description: String,
    pub google_analytics_id: String,
    pub facebook_pixel_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureToggles {
    pub enable_chat_assistant: bool,
    pub enable_newsletter: bool,
    pub enable_quiz_tools: bool,
    pub maintenance_mode: bool,
}

/// Site settings. `general` and `footer` are mandatory in imported files;
/// the remaining sections fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub general: GeneralSettings,
    pub footer: FooterSettings,
    #[serde(default)]
    pub social: SocialSettings,
    #[serde(default)]
    pub seo: SeoSettings,
    #[serde(default)]
    pub features: FeatureToggles,
}

impl Document for SiteSettings {
    const KIND: &'static str = "Site settings";

    fn normalize(&mut self) {
        renumber(&mut self.footer.division_links);
        renumber(&mut self.footer.company_links);
        renumber(&mut self.footer.other_links);
    }
}
