//! Stateless filter and sort pipeline for list screens.
//!
//! A list query combines a case-insensitive search term, matched against a
//! fixed set of text fields per entity, with categorical selectors. Sorting
//! is stable, so records that compare equal keep their input order.

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    BlogCategory, BlogPost, Devis, DevisStatus, Division, Faq, FaqCategory, Lead, LeadStatus,
    PostStatus, PricingPackage, Project, Subscriber, SubscriberStatus, TeamMember, Testimonial,
    User, UserRole, UserStatus,
};

/// A categorical filter value. `ALL` disables the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<'de, T> Deserialize<'de> for Selector<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() || raw == "ALL" {
            return Ok(Selector::All);
        }
        raw.parse().map(Selector::Only).map_err(serde::de::Error::custom)
    }
}

/// Per-entity search, filter and sort configuration.
pub trait Queryable: Clone {
    type Query: ListQuery;

    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, query: &Self::Query) -> bool;

    /// Display order. Defaults to insertion order.
    fn compare(_a: &Self, _b: &Self) -> Ordering {
        Ordering::Equal
    }
}

/// Query-string parameters of one list screen.
pub trait ListQuery: Default + DeserializeOwned + Send {
    fn search(&self) -> &str;
}

/// Whether any configured field contains `term`, ignoring case.
pub fn search_matches<T: Queryable>(record: &T, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Filter a snapshot and return the matches in display order.
pub fn filter_and_sort<T: Queryable>(records: &[T], query: &T::Query) -> Vec<T> {
    let mut selected: Vec<T> = records
        .iter()
        .filter(|r| search_matches(*r, query.search()) && r.matches(query))
        .cloned()
        .collect();
    selected.sort_by(T::compare);

    debug!(total = records.len(), selected = selected.len(), "list query");
    selected
}

macro_rules! list_query {
    ($name:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Debug, Clone, Default, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $name {
            pub search: String,
            $(pub $field: Selector<$ty>,)*
        }

        impl ListQuery for $name {
            fn search(&self) -> &str {
                &self.search
            }
        }
    };
}

list_query!(ProjectQuery { division: Division, featured: bool });
list_query!(LeadQuery { division: Division, status: LeadStatus });
list_query!(BlogPostQuery { status: PostStatus, category: BlogCategory });
list_query!(TeamMemberQuery { division: Division, featured: bool });
list_query!(TestimonialQuery { division: Division, rating: RatingFilter });
list_query!(PricingPackageQuery { division: Division, kind: PackageKind });
list_query!(FaqQuery { category: FaqCategory });
list_query!(DevisQuery { division: Division, status: DevisStatus });
list_query!(SubscriberQuery { status: SubscriberStatus });
list_query!(UserQuery { role: UserRole, status: UserStatus });

/// Testimonial rating filter: exactly five stars, or four and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFilter {
    Five,
    FourPlus,
}

impl RatingFilter {
    pub fn accepts(&self, rating: u8) -> bool {
        match self {
            RatingFilter::Five => rating == 5,
            RatingFilter::FourPlus => rating >= 4,
        }
    }
}

impl FromStr for RatingFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5" => Ok(RatingFilter::Five),
            "4+" => Ok(RatingFilter::FourPlus),
            other => Err(format!("unknown rating filter: {}", other)),
        }
    }
}

string_enum! {
    /// Pricing package badge filter.
    pub enum PackageKind {
        Popular => "POPULAR",
        Highlight => "HIGHLIGHT",
    }
}

impl Queryable for Project {
    type Query = ProjectQuery;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.client.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn matches(&self, q: &ProjectQuery) -> bool {
        q.division.matches(&self.division) && q.featured.matches(&self.featured)
    }
}

impl Queryable for Lead {
    type Query = LeadQuery;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.company.as_deref());
        fields
    }

    fn matches(&self, q: &LeadQuery) -> bool {
        q.division.matches(&self.division) && q.status.matches(&self.status)
    }
}

impl Queryable for BlogPost {
    type Query = BlogPostQuery;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.category.as_str(), self.author.as_str()]
    }

    fn matches(&self, q: &BlogPostQuery) -> bool {
        q.status.matches(&self.status) && q.category.matches(&self.category)
    }
}

impl Queryable for TeamMember {
    type Query = TeamMemberQuery;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.role.as_str()]
    }

    fn matches(&self, q: &TeamMemberQuery) -> bool {
        q.division.matches(&self.division) && q.featured.matches(&self.featured)
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        b.featured
            .cmp(&a.featured)
            .then(a.display_order.cmp(&b.display_order))
            .then_with(|| a.name.cmp(&b.name))
    }
}

impl Queryable for Testimonial {
    type Query = TestimonialQuery;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.company.as_str(), self.content.as_str()]
    }

    fn matches(&self, q: &TestimonialQuery) -> bool {
        let rating = match q.rating {
            Selector::All => true,
            Selector::Only(filter) => filter.accepts(self.rating),
        };
        q.division.matches(&self.division) && rating
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        b.rating
            .cmp(&a.rating)
            .then(b.created_at.cmp(&a.created_at))
    }
}

impl Queryable for PricingPackage {
    type Query = PricingPackageQuery;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn matches(&self, q: &PricingPackageQuery) -> bool {
        let kind = match q.kind {
            Selector::All => true,
            Selector::Only(PackageKind::Popular) => self.is_popular,
            Selector::Only(PackageKind::Highlight) => self.is_highlight,
        };
        q.division.matches(&self.division) && kind
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        a.division
            .as_str()
            .cmp(b.division.as_str())
            .then_with(|| a.title.cmp(&b.title))
    }
}

impl Queryable for Faq {
    type Query = FaqQuery;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }

    fn matches(&self, q: &FaqQuery) -> bool {
        q.category.matches(&self.category)
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        a.display_order.cmp(&b.display_order)
    }
}

impl Queryable for Devis {
    type Query = DevisQuery;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.client_name.as_str(), self.client_email.as_str()];
        fields.extend(self.company_name.as_deref());
        fields.push(self.id.as_str());
        fields
    }

    fn matches(&self, q: &DevisQuery) -> bool {
        q.division.matches(&self.division) && q.status.matches(&self.status)
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

impl Queryable for Subscriber {
    type Query = SubscriberQuery;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.email.as_str()]
    }

    fn matches(&self, q: &SubscriberQuery) -> bool {
        q.status.matches(&self.status)
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        b.subscribed_at.cmp(&a.subscribed_at)
    }
}

impl Queryable for User {
    type Query = UserQuery;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.username.as_str(), self.email.as_str()]
    }

    fn matches(&self, q: &UserQuery) -> bool {
        q.role.matches(&self.role) && q.status.matches(&self.status)
    }
}

/// Newsletter headline counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberStats {
    pub total: usize,
    pub active: usize,
    pub unsubscribed: usize,
    pub new_this_month: usize,
}

pub fn subscriber_stats(subscribers: &[Subscriber], today: NaiveDate) -> SubscriberStats {
    let count = |status: SubscriberStatus| subscribers.iter().filter(|s| s.status == status).count();
    let new_this_month = subscribers
        .iter()
        .filter(|s| {
            s.subscribed_at.year() == today.year() && s.subscribed_at.month() == today.month()
        })
        .count();

    SubscriberStats {
        total: subscribers.len(),
        active: count(SubscriberStatus::Active),
        unsubscribed: count(SubscriberStatus::Unsubscribed),
        new_this_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_demo;
    use crate::store::Repository;

    fn query<Q: ListQuery>(json: serde_json::Value) -> Q {
        serde_json::from_value(json).unwrap()
    }

    async fn seeded() -> Repository {
        let repo = Repository::new();
        seed_demo(&repo).await;
        repo
    }

    #[test]
    fn test_selector_parsing() {
        let q: LeadQuery = query(serde_json::json!({"division": "ALL", "status": "NEW"}));
        assert_eq!(q.division, Selector::All);
        assert_eq!(q.status, Selector::Only(LeadStatus::New));

        let q: ProjectQuery = query(serde_json::json!({"featured": "true"}));
        assert_eq!(q.featured, Selector::Only(true));

        let bad = serde_json::from_value::<LeadQuery>(serde_json::json!({"status": "LOST"}));
        assert!(bad.is_err());
    }

    #[tokio::test]
    async fn test_empty_search_still_applies_filters() {
        let repo = seeded().await;
        let leads = repo.list::<Lead>().await;

        let all = filter_and_sort(&leads, &LeadQuery::default());
        assert_eq!(all.len(), leads.len());

        let q: LeadQuery = query(serde_json::json!({"search": "", "division": "STUDIO"}));
        let studio = filter_and_sort(&leads, &q);
        assert_eq!(studio.len(), 1);
        assert_eq!(studio[0].name, "Bob Smith");
    }

    #[tokio::test]
    async fn test_search_matches_any_field() {
        let repo = seeded().await;
        let mut leads = repo.list::<Lead>().await;
        leads[2].company = Some("ACME Retail".to_string());

        let q: LeadQuery = query(serde_json::json!({"search": "acme"}));
        let found = filter_and_sort(&leads, &q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "103");
    }

    #[tokio::test]
    async fn test_devis_search_covers_id_and_sorts_newest_first() {
        let repo = seeded().await;
        let devis = repo.list::<Devis>().await;

        let q: DevisQuery = query(serde_json::json!({"search": "2024-002"}));
        let found = filter_and_sort(&devis, &q);
        assert_eq!(found.len(), 1);

        let sorted = filter_and_sort(&devis, &DevisQuery::default());
        let ids: Vec<&str> = sorted.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["DEVIS-2024-003", "DEVIS-2024-002", "DEVIS-2024-001"]);
    }

    #[tokio::test]
    async fn test_team_sort_chain() {
        let repo = seeded().await;
        let mut members = repo.list::<TeamMember>().await;
        members[0].display_order = 5;
        members[2].featured = true;
        members[2].display_order = 5;
        members[2].name = "Aaron".to_string();

        let sorted = filter_and_sort(&members, &TeamMemberQuery::default());
        let names: Vec<&str> = sorted.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Chen", "Aaron", "Alex Rivera"]);
    }

    #[tokio::test]
    async fn test_testimonial_rating_filter_and_sort() {
        let repo = seeded().await;
        let testimonials = repo.list::<Testimonial>().await;

        let q: TestimonialQuery = query(serde_json::json!({"rating": "5"}));
        assert_eq!(filter_and_sort(&testimonials, &q).len(), 2);

        let q: TestimonialQuery = query(serde_json::json!({"rating": "4+"}));
        let sorted = filter_and_sort(&testimonials, &q);
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_pricing_sort_is_stable() {
        let repo = seeded().await;
        let mut packages = repo.list::<PricingPackage>().await;
        let mut twin = packages[0].clone();
        twin.id = "twin".to_string();
        packages.insert(0, twin);

        let sorted = filter_and_sort(&packages, &PricingPackageQuery::default());
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        // BRAND < STUDIO < TECH; the two TECH twins keep input order.
        assert_eq!(ids, vec!["2", "3", "twin", "1"]);

        let q: PricingPackageQuery = query(serde_json::json!({"kind": "HIGHLIGHT"}));
        assert_eq!(filter_and_sort(&packages, &q)[0].id, "3");
    }

    #[tokio::test]
    async fn test_faqs_follow_display_order() {
        let repo = seeded().await;
        let mut faqs = repo.list::<Faq>().await;
        faqs.reverse();

        let q: FaqQuery = query(serde_json::json!({"category": "Services"}));
        let sorted = filter_and_sort(&faqs, &q);
        let ids: Vec<&str> = sorted.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[tokio::test]
    async fn test_subscriber_stats() {
        let repo = seeded().await;
        let subscribers = repo.list::<Subscriber>().await;
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

        let stats = subscriber_stats(&subscribers, today);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.unsubscribed, 1);
        assert_eq!(stats.new_this_month, 2);
    }
}
