//! Read-only aggregation over store snapshots for dashboards and reports.
//!
//! Store-backed views (dashboard stats, monthly trend, division and status
//! breakdowns) are computed from whatever the caller passes in. Traffic and
//! behaviour views have no backing data in this system, so they come from a
//! synthetic series seeded per range: repeated calls for the same range and
//! day agree.

use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::{BlogPost, Division, Lead, LeadStatus, PostStatus, Project};

string_enum! {
    /// Reporting window selected on the analytics screen.
    pub enum Range {
        Week => "7d",
        Month => "30d",
        Quarter => "3m",
        Year => "1y",
    }
}

impl Default for Range {
    fn default() -> Self {
        Range::Month
    }
}

impl Range {
    pub fn days(&self) -> i64 {
        match self {
            Range::Week => 7,
            Range::Month => 30,
            Range::Quarter => 90,
            Range::Year => 365,
        }
    }

    /// Parse an optional query value; absent means the default window.
    pub fn parse_param(raw: Option<&str>) -> Result<Self, AppError> {
        match raw {
            None | Some("") => Ok(Range::default()),
            Some(value) => Range::from_str(value).map_err(AppError::BadRequest),
        }
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(0xA0_2E05 ^ self.days() as u64)
    }

    /// Scale a 30-day reference figure to this window.
    fn scale(&self, value: u64) -> u64 {
        (value * self.days() as u64 + 15) / 30
    }
}

/// Split `counts` into whole percentages that sum to exactly 100 when any
/// count is non-zero (largest-remainder method).
pub fn percentages(counts: &[u64]) -> Vec<u64> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut shares: Vec<u64> = counts.iter().map(|c| c * 100 / total).collect();
    let mut remainders: Vec<(usize, u64)> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c * 100 % total))
        .collect();
    remainders.sort_by(|a, b| b.1.cmp(&a.1));

    let missing = 100 - shares.iter().sum::<u64>();
    for (index, _) in remainders.into_iter().take(missing as usize) {
        shares[index] += 1;
    }
    shares
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub active_leads: usize,
    pub blog_posts: usize,
    pub revenue: String,
}

pub fn dashboard_stats(
    projects: &[Project],
    leads: &[Lead],
    posts: &[BlogPost],
    revenue: &str,
) -> DashboardStats {
    DashboardStats {
        total_projects: projects.len(),
        active_leads: leads.iter().filter(|l| l.status != LeadStatus::Closed).count(),
        blog_posts: posts.len(),
        revenue: revenue.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub leads: usize,
    pub projects: usize,
}

/// Leads received and projects created per month, over the six months
/// ending with the most recent record (or `fallback` when both are empty).
pub fn monthly_trend(leads: &[Lead], projects: &[Project], fallback: NaiveDate) -> Vec<MonthlyPoint> {
    let latest = leads
        .iter()
        .map(|l| l.received_at)
        .chain(projects.iter().map(|p| p.created_at))
        .max()
        .unwrap_or(fallback);
    let last_month = first_of_month(latest);

    (0..6)
        .rev()
        .map(|back| {
            let start = last_month - Months::new(back);
            let in_month = |d: &NaiveDate| d.year() == start.year() && d.month() == start.month();
            MonthlyPoint {
                month: start.format("%b").to_string(),
                leads: leads.iter().filter(|l| in_month(&l.received_at)).count(),
                projects: projects.iter().filter(|p| in_month(&p.created_at)).count(),
            }
        })
        .collect()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `{name, value, fill}` slice of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: u64,
    pub fill: String,
}

/// Share of projects per division, in whole percent.
pub fn division_distribution(projects: &[Project]) -> Vec<ChartSlice> {
    let divisions: Vec<Division> = Division::ALL
        .iter()
        .copied()
        .filter(|d| *d != Division::General || projects.iter().any(|p| p.division == *d))
        .collect();
    let counts: Vec<u64> = divisions
        .iter()
        .map(|d| projects.iter().filter(|p| p.division == *d).count() as u64)
        .collect();

    divisions
        .iter()
        .zip(percentages(&counts))
        .map(|(division, value)| ChartSlice {
            name: division.to_string(),
            value,
            fill: division.color().to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub views: u64,
    pub visitors: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_page_views: u64,
    pub unique_visitors: u64,
    pub bounce_rate: f64,
    pub avg_session_duration: String,
    pub conversion_rate: f64,
    pub trend_data: Vec<TrendPoint>,
}

/// Daily traffic for the window ending `today`, one point per day inclusive.
pub fn overview(range: Range, today: NaiveDate) -> AnalyticsOverview {
    let mut rng = range.rng();
    let trend_data: Vec<TrendPoint> = (0..=range.days())
        .rev()
        .map(|back| TrendPoint {
            date: (today - Duration::days(back)).format("%m-%d").to_string(),
            views: rng.random_range(200..700),
            visitors: rng.random_range(100..400),
        })
        .collect();

    debug!(range = %range, points = trend_data.len(), "overview series");

    AnalyticsOverview {
        total_page_views: trend_data.iter().map(|p| p.views).sum(),
        unique_visitors: trend_data.iter().map(|p| p.visitors).sum(),
        bounce_rate: 42.5,
        avg_session_duration: "2m 45s".to_string(),
        conversion_rate: 3.2,
        trend_data,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficSource {
    pub source: String,
    pub visitors: u64,
    pub percentage: u64,
    pub fill: String,
}

const TRAFFIC_SOURCES: [(&str, u64, &str); 5] = [
    ("Direct", 1250, "#6366f1"),
    ("Organic Search", 980, "#06b6d4"),
    ("Social Media", 750, "#d946ef"),
    ("Referrals", 320, "#10b981"),
    ("Paid Ads", 150, "#f59e0b"),
];

pub fn traffic_sources(range: Range) -> Vec<TrafficSource> {
    let visitors: Vec<u64> = TRAFFIC_SOURCES
        .iter()
        .map(|(_, base, _)| range.scale(*base))
        .collect();

    TRAFFIC_SOURCES
        .iter()
        .zip(visitors.iter())
        .zip(percentages(&visitors))
        .map(|(((source, _, fill), visitors), percentage)| TrafficSource {
            source: source.to_string(),
            visitors: *visitors,
            percentage,
            fill: fill.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetric {
    pub path: String,
    pub views: u64,
    pub unique_views: u64,
    pub avg_time: String,
    pub bounce_rate: f64,
}

const PAGES: [(&str, u64, u64, &str, f64); 5] = [
    ("/", 5430, 3200, "1m 20s", 35.0),
    ("/projects", 2100, 1500, "3m 10s", 25.0),
    ("/blog", 1800, 1200, "2m 45s", 40.0),
    ("/contact", 950, 800, "1m 05s", 20.0),
    ("/about", 800, 650, "1m 50s", 30.0),
];

pub fn page_performance(range: Range) -> Vec<PageMetric> {
    PAGES
        .iter()
        .map(|(path, views, unique, avg_time, bounce)| PageMetric {
            path: path.to_string(),
            views: range.scale(*views),
            unique_views: range.scale(*unique),
            avg_time: avg_time.to_string(),
            bounce_rate: *bounce,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryCount {
    pub query: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleViews {
    pub title: String,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionShare {
    pub division: String,
    pub percentage: u64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBehavior {
    pub top_queries: Vec<QueryCount>,
    pub top_blog_posts: Vec<TitleViews>,
    pub top_projects: Vec<TitleViews>,
    pub division_interest: Vec<DivisionShare>,
}

const TOP_QUERIES: [(&str, u64); 4] = [
    ("web development", 120),
    ("branding agency", 95),
    ("3d design", 80),
    ("app development", 65),
];

const DIVISION_INTEREST: [(Division, u64); 3] =
    [(Division::Tech, 45), (Division::Studio, 30), (Division::Brand, 25)];

/// Top three titles by synthetic view count.
fn top_titles<'a>(titles: impl Iterator<Item = &'a str>, rng: &mut StdRng) -> Vec<TitleViews> {
    let mut ranked: Vec<TitleViews> = titles
        .map(|title| TitleViews {
            title: title.to_string(),
            views: rng.random_range(100..600),
        })
        .collect();
    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked.truncate(3);
    ranked
}

pub fn user_behavior(range: Range, posts: &[BlogPost], projects: &[Project]) -> UserBehavior {
    let mut rng = range.rng();

    let weights: Vec<u64> = DIVISION_INTEREST.iter().map(|(_, w)| *w).collect();
    let division_interest = DIVISION_INTEREST
        .iter()
        .zip(percentages(&weights))
        .map(|((division, _), percentage)| DivisionShare {
            division: division.to_string(),
            percentage,
            fill: division.color().to_string(),
        })
        .collect();

    UserBehavior {
        top_queries: TOP_QUERIES
            .iter()
            .map(|(query, count)| QueryCount {
                query: query.to_string(),
                count: range.scale(*count),
            })
            .collect(),
        top_blog_posts: top_titles(
            posts
                .iter()
                .filter(|p| p.status == PostStatus::Published)
                .map(|p| p.title.as_str()),
            &mut rng,
        ),
        top_projects: top_titles(projects.iter().map(|p| p.title.as_str()), &mut rng),
        division_interest,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceCount {
    pub source: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionCount {
    pub division: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAnalytics {
    pub leads_by_source: Vec<SourceCount>,
    pub leads_by_division: Vec<DivisionCount>,
    pub funnel: Vec<FunnelStage>,
    pub status_distribution: Vec<StatusCount>,
}

const LEAD_SOURCES: [(&str, u64); 3] = [("Contact Form", 45), ("Email", 20), ("LinkedIn", 15)];

/// Reference conversion funnel.
pub const FUNNEL: [(&str, u64, &str); 5] = [
    ("Visitors", 5000, "#6366f1"),
    ("Leads", 80, "#06b6d4"),
    ("Qualified", 40, "#10b981"),
    ("Proposals", 25, "#f59e0b"),
    ("Closed", 10, "#d946ef"),
];

/// Build funnel stages, clamping each count to the one before it.
pub fn funnel(stages: &[(&str, u64, &str)]) -> Vec<FunnelStage> {
    let mut ceiling = u64::MAX;
    stages
        .iter()
        .map(|(stage, count, fill)| {
            ceiling = ceiling.min(*count);
            FunnelStage {
                stage: stage.to_string(),
                count: ceiling,
                fill: fill.to_string(),
            }
        })
        .collect()
}

pub fn lead_analytics(range: Range, leads: &[Lead]) -> LeadAnalytics {
    let leads_by_division = Division::ALL
        .iter()
        .map(|d| DivisionCount {
            division: d.to_string(),
            count: leads.iter().filter(|l| l.division == *d).count() as u64,
        })
        .collect();

    let status_distribution = LeadStatus::ALL
        .iter()
        .map(|s| StatusCount {
            status: s.to_string(),
            count: leads.iter().filter(|l| l.status == *s).count() as u64,
        })
        .collect();

    LeadAnalytics {
        leads_by_source: LEAD_SOURCES
            .iter()
            .map(|(source, count)| SourceCount {
                source: source.to_string(),
                count: range.scale(*count),
            })
            .collect(),
        leads_by_division,
        funnel: funnel(&FUNNEL),
        status_distribution,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPerformance {
    pub blog_total_views: u64,
    pub project_total_views: u64,
    pub newsletter_open_rate: f64,
    pub chat_interactions: u64,
}

pub fn content_performance(range: Range) -> ContentPerformance {
    ContentPerformance {
        blog_total_views: range.scale(5400),
        project_total_views: range.scale(8200),
        newsletter_open_rate: 24.5,
        chat_interactions: range.scale(350),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_demo;
    use crate::store::Repository;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_parsing() {
        assert_eq!(Range::parse_param(None).unwrap(), Range::Month);
        assert_eq!(Range::parse_param(Some("1y")).unwrap().days(), 365);
        assert!(matches!(
            Range::parse_param(Some("2w")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_percentages_sum_to_100() {
        assert_eq!(percentages(&[1, 1, 1]), vec![34, 33, 33]);
        assert_eq!(percentages(&[2, 1, 1]), vec![50, 25, 25]);
        assert_eq!(percentages(&[0, 0]), vec![0, 0]);
        let p = percentages(&[1250, 980, 750, 320, 150]);
        assert_eq!(p.iter().sum::<u64>(), 100);
    }

    #[test]
    fn test_reference_funnel_is_non_increasing() {
        let stages = funnel(&FUNNEL);
        let counts: Vec<u64> = stages.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![5000, 80, 40, 25, 10]);
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_funnel_clamps_out_of_order_counts() {
        let stages = funnel(&[("A", 10, "#000"), ("B", 12, "#000"), ("C", 3, "#000")]);
        let counts: Vec<u64> = stages.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![10, 10, 3]);
    }

    #[test]
    fn test_overview_is_deterministic_per_range() {
        let today = day(2024, 3, 15);
        let a = overview(Range::Week, today);
        let b = overview(Range::Week, today);
        assert_eq!(a, b);
        assert_eq!(a.trend_data.len(), 8);
        assert_eq!(a.trend_data[0].date, "03-08");
        assert_eq!(a.trend_data[7].date, "03-15");
        assert!(a
            .trend_data
            .iter()
            .all(|p| (200..700).contains(&p.views) && (100..400).contains(&p.visitors)));
        assert_eq!(
            a.total_page_views,
            a.trend_data.iter().map(|p| p.views).sum::<u64>()
        );
        assert_eq!(overview(Range::Year, today).trend_data.len(), 366);
    }

    #[test]
    fn test_traffic_sources_scale_with_range() {
        let month = traffic_sources(Range::Month);
        assert_eq!(month[0].visitors, 1250);
        assert_eq!(month.iter().map(|s| s.percentage).sum::<u64>(), 100);

        let week = traffic_sources(Range::Week);
        assert!(week[0].visitors < month[0].visitors);
    }

    #[tokio::test]
    async fn test_store_backed_views_follow_mutations() {
        let repo = Repository::new();
        seed_demo(&repo).await;

        let projects = repo.list::<Project>().await;
        let leads = repo.list::<Lead>().await;
        let posts = repo.list::<BlogPost>().await;

        let stats = dashboard_stats(&projects, &leads, &posts, "€1.2M");
        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.active_leads, 2);
        assert_eq!(stats.blog_posts, 3);

        let slices = division_distribution(&projects);
        let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["TECH", "STUDIO", "BRAND"]);
        assert_eq!(slices[0].value, 50);
        assert_eq!(slices.iter().map(|s| s.value).sum::<u64>(), 100);

        repo.delete::<Lead>("101").await;
        let leads = repo.list::<Lead>().await;
        let analytics = lead_analytics(Range::Month, &leads);
        let tech = &analytics.leads_by_division[0];
        assert_eq!((tech.division.as_str(), tech.count), ("TECH", 0));
        let closed = &analytics.status_distribution[2];
        assert_eq!((closed.status.as_str(), closed.count), ("CLOSED", 1));
    }

    #[tokio::test]
    async fn test_monthly_trend_window() {
        let repo = Repository::new();
        seed_demo(&repo).await;
        let leads = repo.list::<Lead>().await;
        let projects = repo.list::<Project>().await;

        let trend = monthly_trend(&leads, &projects, day(2024, 1, 1));
        let months: Vec<&str> = trend.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]);
        assert_eq!(trend[4].leads, 2);
        assert_eq!(trend[4].projects, 2);
        assert_eq!(trend[5].leads, 1);
        assert_eq!(trend[5].projects, 1);

        let empty = monthly_trend(&[], &[], day(2024, 2, 10));
        assert_eq!(empty.last().unwrap().month, "Feb");
        assert!(empty.iter().all(|p| p.leads == 0 && p.projects == 0));
    }

    #[tokio::test]
    async fn test_user_behavior_uses_published_posts() {
        let repo = Repository::new();
        seed_demo(&repo).await;
        let posts = repo.list::<BlogPost>().await;
        let projects = repo.list::<Project>().await;

        let behavior = user_behavior(Range::Month, &posts, &projects);
        assert_eq!(behavior.top_blog_posts.len(), 2);
        assert!(behavior
            .top_blog_posts
            .iter()
            .all(|p| p.title != "Optimizing React Performance"));
        assert_eq!(behavior.top_projects.len(), 3);
        assert_eq!(
            behavior
                .division_interest
                .iter()
                .map(|d| d.percentage)
                .sum::<u64>(),
            100
        );
    }
}
