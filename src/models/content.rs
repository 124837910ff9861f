//! Home page content document.

use serde::{Deserialize, Deserializer, Serialize};

use crate::store::{renumber, Document, Ordered};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub badge_text: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub highlight: String,
}

/// A headline figure card, e.g. "200+ Projects Shipped".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricItem {
    #[serde(default)]
    pub id: String,
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyStep {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub step_number: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologySection {
    pub title: String,
    pub description: String,
    pub steps: Vec<MethodologyStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackSection {
    pub title: String,
    /// Accepts either a JSON array or a comma-separated string.
    #[serde(deserialize_with = "word_list")]
    pub tech_items: Vec<String>,
    #[serde(deserialize_with = "word_list")]
    pub creative_items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsItem {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsSection {
    pub title: String,
    pub items: Vec<WhyUsItem>,
}

/// Title and blurb for a teaser block (team, blog).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeaserSection {
    pub title: String,
    pub description: String,
}

/// Everything editable on the public home page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageContent {
    pub hero: HeroSection,
    pub metrics: Vec<MetricItem>,
    pub methodology: MethodologySection,
    pub tech_stack: TechStackSection,
    pub why_us: WhyUsSection,
    pub team_teaser: TeaserSection,
    pub blog: TeaserSection,
}

/// Split comma-separated input into trimmed, non-empty words.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn word_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Words {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Words::deserialize(deserializer)? {
        Words::List(words) => words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect(),
        Words::Text(raw) => parse_word_list(&raw),
    })
}

macro_rules! ordered_item {
    ($($ty:ty),+) => {
        $(
            impl Ordered for $ty {
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
        )+
    };
}

ordered_item!(MetricItem, MethodologyStep, WhyUsItem);

impl Document for HomePageContent {
    const KIND: &'static str = "Home page content";

    fn normalize(&mut self) {
        renumber(&mut self.metrics);
        renumber(&mut self.methodology.steps);
        renumber(&mut self.why_us.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_accepts_comma_string() {
        let json = r#"{"title":"Tools","techItems":" React, ,Rust ,","creativeItems":["Figma"," "]}"#;
        let section: TechStackSection = serde_json::from_str(json).unwrap();
        assert_eq!(section.tech_items, vec!["React", "Rust"]);
        assert_eq!(section.creative_items, vec!["Figma"]);
    }

    #[test]
    fn test_normalize_renumbers_every_list() {
        let mut content = HomePageContent::default();
        content.metrics = vec![
            MetricItem { id: "a".into(), order: 9, ..Default::default() },
            MetricItem { id: "b".into(), order: 1, ..Default::default() },
        ];
        content.why_us.items = vec![WhyUsItem { id: "w".into(), ..Default::default() }];

        content.normalize();

        let orders: Vec<u32> = content.metrics.iter().map(|m| m.order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert_eq!(content.why_us.items[0].order, 1);
    }
}
