//! Integration tests for the admin backend.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Datelike;
use reqwest::Client;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::ai::{TextGenerator, GENERATION_FAILED_PLACEHOLDER, MISSING_KEY_PLACEHOLDER};
use crate::config::Config;
use crate::errors::AppError;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    /// Server over the demo dataset.
    async fn new() -> Self {
        Self::with_state(test_state(true).await).await
    }

    async fn empty() -> Self {
        Self::with_state(test_state(false).await).await
    }

    async fn with_state(state: AppState) -> Self {
        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn send_json(&self, method: reqwest::Method, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .request(method, self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn post_json(&self, path: &str, body: Value) -> (u16, Value) {
        self.send_json(reqwest::Method::POST, path, body).await
    }

    async fn put_json(&self, path: &str, body: Value) -> (u16, Value) {
        self.send_json(reqwest::Method::PUT, path, body).await
    }

    async fn delete(&self, path: &str) -> (u16, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}

fn test_config(seed_demo: bool) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        log_level: "warn".to_string(),
        seed_demo,
        ..Config::default()
    }
}

async fn test_state(seed_demo: bool) -> AppState {
    AppState::new(test_config(seed_demo)).await
}

fn ids(data: &Value) -> Vec<String> {
    data.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_router_serves_without_network() {
    let app = create_router(test_state(true).await);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["revisionId"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_list_delete_lifecycle() {
    let fixture = TestFixture::empty().await;

    let (status, body) = fixture
        .post_json(
            "/api/leads",
            json!({"name": "Dana", "email": "dana@example.com", "message": "Hi"}),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["revisionId"], 1);
    assert_eq!(body["data"]["status"], "NEW");
    assert_eq!(body["data"]["division"], "GENERAL");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = fixture.get_json("/api/leads").await;
    let listed = ids(&body["data"]);
    assert_eq!(listed.iter().filter(|l| **l == id).count(), 1);

    let (status, body) = fixture.delete(&format!("/api/leads/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["revisionId"], 2);

    let (status, body) = fixture.delete(&format!("/api/leads/{}", id)).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["revisionId"], 2);

    let (status, _) = fixture
        .put_json(&format!("/api/leads/{}", id), json!({"name": "Again"}))
        .await;
    assert_eq!(status, 404);

    let (status, _) = fixture.get_json(&format!("/api/leads/{}", id)).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_partial_update_preserves_other_fields() {
    let fixture = TestFixture::new().await;

    let (_, before) = fixture.get_json("/api/team-members/2").await;
    let (status, after) = fixture
        .put_json("/api/team-members/2", json!({"role": "CTO"}))
        .await;
    assert_eq!(status, 200);

    let mut expected = before["data"].clone();
    expected["role"] = json!("CTO");
    assert_eq!(after["data"], expected);
}

#[tokio::test]
async fn test_new_projects_prepend_and_members_append() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture
        .post_json("/api/projects", json!({"title": "Solar Grid Portal", "division": "TECH"}))
        .await;
    let project = &body["data"];
    assert_eq!(project["slug"], "solar-grid-portal");
    let (_, list) = fixture.get_json("/api/projects").await;
    assert_eq!(ids(&list["data"])[0], project["id"].as_str().unwrap());

    let (_, body) = fixture
        .post_json(
            "/api/faqs",
            json!({"question": "Where are you based?", "answer": "Paris.", "displayOrder": 9}),
        )
        .await;
    let faq_id = body["data"]["id"].as_str().unwrap().to_string();
    let (_, list) = fixture.get_json("/api/faqs").await;
    assert_eq!(ids(&list["data"]).last().unwrap(), &faq_id);
}

#[tokio::test]
async fn test_validation_failures() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post_json(
            "/api/testimonials",
            json!({"name": "Ann", "content": "Great", "rating": 6}),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = fixture
        .post_json(
            "/api/blog-posts",
            json!({"title": "Long", "excerpt": "x".repeat(201)}),
        )
        .await;
    assert_eq!(status, 400);

    let (status, _) = fixture
        .put_json("/api/team-members/1", json!({"bio": "b".repeat(501)}))
        .await;
    assert_eq!(status, 400);

    let (status, _) = fixture
        .post_json("/api/subscribers", json!({"email": "not-an-email"}))
        .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_list_query_search_and_filters() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture.get_json("/api/leads?search=&division=STUDIO").await;
    assert_eq!(ids(&body["data"]), vec!["102"]);

    let (_, body) = fixture.get_json("/api/leads?search=STARTUPLAB").await;
    assert_eq!(ids(&body["data"]), vec!["101"]);

    let (_, body) = fixture.get_json("/api/leads?division=ALL&status=ALL").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, body) = fixture.get_json("/api/testimonials?rating=4%2B").await;
    assert_eq!(ids(&body["data"]), vec!["1", "2", "3"]);

    let (_, body) = fixture.get_json("/api/pricing-packages?kind=POPULAR").await;
    assert_eq!(ids(&body["data"]), vec!["1"]);

    let (status, body) = fixture.get_json("/api/leads?status=LOST").await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["revisionId"], 0);
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/leads"))
        .header("content-type", "application/json")
        .body(r#"{"name": "Dana", "email":"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["revisionId"], 0);

    let (status, body) = fixture
        .put_json("/api/leads/101/status", json!({"status": "LOST"}))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (_, body) = fixture.get_json("/api/leads/101").await;
    assert_eq!(body["data"]["status"], "NEW");
}

#[tokio::test]
async fn test_blog_posts_with_same_title_get_unique_slugs() {
    let fixture = TestFixture::empty().await;

    let mut slugs = Vec::new();
    for _ in 0..2 {
        let (status, body) = fixture
            .post_json("/api/blog-posts", json!({"title": "Same Title"}))
            .await;
        assert_eq!(status, 200);
        slugs.push(body["data"]["slug"].as_str().unwrap().to_string());
    }
    assert_eq!(slugs, vec!["same-title", "same-title-2"]);
}

#[tokio::test]
async fn test_blog_reading_time_via_api() {
    let fixture = TestFixture::empty().await;

    let content = vec!["word"; 400].join(" ");
    let (_, body) = fixture
        .post_json("/api/blog-posts", json!({"title": "Deep Dive", "content": content}))
        .await;
    assert_eq!(body["data"]["readingTime"], "2 min");
    assert_eq!(body["data"]["status"], "DRAFT");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = fixture
        .put_json(&format!("/api/blog-posts/{}", id), json!({"content": ""}))
        .await;
    assert_eq!(body["data"]["readingTime"], "2 min");

    let (_, body) = fixture
        .post_json(&format!("/api/blog-posts/{}/toggle-publish", id), json!({}))
        .await;
    assert_eq!(body["data"]["status"], "PUBLISHED");
}

#[tokio::test]
async fn test_status_workflows() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .put_json("/api/leads/103/status", json!({"status": "NEW"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["status"], "NEW");

    let (_, body) = fixture
        .post_json("/api/devis/DEVIS-2024-003/send", json!({}))
        .await;
    assert_eq!(body["data"]["status"], "SENT");

    let (_, body) = fixture
        .post_json("/api/subscribers/2/unsubscribe", json!({}))
        .await;
    assert_eq!(body["data"]["status"], "UNSUBSCRIBED");
    let stamped = body["data"]["unsubscribedAt"].clone();
    let revision = body["revisionId"].clone();
    assert_eq!(stamped, json!(crate::store::today().to_string()));

    let (status, body) = fixture
        .post_json("/api/subscribers/2/unsubscribe", json!({}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["unsubscribedAt"], stamped);
    assert_eq!(body["revisionId"], revision);

    let (status, _) = fixture
        .post_json("/api/users/1/reset-password", json!({}))
        .await;
    assert_eq!(status, 200);
    let (status, _) = fixture
        .post_json("/api/users/404/reset-password", json!({}))
        .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_devis_numbers_continue_sequence() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture
        .post_json(
            "/api/devis",
            json!({"clientName": "Nina", "clientEmail": "nina@example.com", "budget": "9,000€"}),
        )
        .await;
    let year = chrono::Utc::now().year();
    assert_eq!(body["data"]["id"], format!("DEVIS-{}-004", year));
    assert_eq!(body["data"]["status"], "DRAFT");

    let (_, body) = fixture.get_json("/api/devis?search=nina").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_subscriber_export_and_stats() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/subscribers/export?status=ACTIVE"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let csv = resp.text().await.unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ID,Email,Source,Status,Subscribed At,Unsubscribed At");
    assert_eq!(lines.len(), 5);
    // Newest subscription first.
    assert!(lines[1].starts_with("5,designer@studio.art,Footer,ACTIVE,2024-01-12"));

    let (_, body) = fixture.get_json("/api/subscribers/stats").await;
    assert_eq!(body["data"]["total"], 5);
    assert_eq!(body["data"]["active"], 4);
    assert_eq!(body["data"]["unsubscribed"], 1);
}

#[tokio::test]
async fn test_home_content_lists_are_renumbered() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture.get_json("/api/content/home").await;
    let mut content = body["data"].clone();
    let metrics = content["metrics"].as_array_mut().unwrap();
    metrics.reverse();
    content["techStack"]["techItems"] = json!("Rust, Axum, ,Tokio");

    let (status, body) = fixture.put_json("/api/content/home", content).await;
    assert_eq!(status, 200);
    let metrics = body["data"]["metrics"].as_array().unwrap();
    assert_eq!(metrics[0]["id"], "4");
    assert_eq!(metrics[0]["order"], 1);
    assert_eq!(metrics[3]["order"], 4);
    assert_eq!(body["data"]["techStack"]["techItems"], json!(["Rust", "Axum", "Tokio"]));

    let (_, body) = fixture
        .post_json(
            "/api/content/home/steps/edit",
            json!({"op": "moveUp", "id": "2"}),
        )
        .await;
    let steps = body["data"]["methodology"]["steps"].as_array().unwrap();
    assert_eq!(steps[0]["id"], "2");
    assert_eq!(steps[0]["order"], 1);
    assert_eq!(steps[1]["id"], "1");

    let (status, body) = fixture
        .post_json(
            "/api/content/home/why-us/edit",
            json!({"op": "remove", "id": "missing"}),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_settings_export_import() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/settings/export"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let exported = resp.text().await.unwrap();

    let mut edited: Value = serde_json::from_str(&exported).unwrap();
    edited["general"]["siteName"] = json!("Aureus Labs");
    edited.as_object_mut().unwrap().remove("features");

    let resp = fixture
        .client
        .post(fixture.url("/api/settings/import"))
        .body(edited.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let (_, body) = fixture.get_json("/api/settings").await;
    assert_eq!(body["data"]["general"]["siteName"], "Aureus Labs");
    assert_eq!(body["data"]["features"]["enableNewsletter"], false);

    let resp = fixture
        .client
        .post(fixture.url("/api/settings/import"))
        .body(json!({"general": {}}).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_footer_link_editing() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post_json(
            "/api/settings/footer/other/edit",
            json!({"op": "add", "item": {"label": "Cookies", "url": "/cookies"}}),
        )
        .await;
    assert_eq!(status, 200);
    let links = body["data"]["footer"]["otherLinks"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[2]["label"], "Cookies");
    assert_eq!(links[2]["order"], 3);

    let (status, _) = fixture
        .post_json(
            "/api/settings/footer/legal/edit",
            json!({"op": "remove", "id": "1"}),
        )
        .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_analytics_reflect_store() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture.get_json("/api/analytics/dashboard").await;
    assert_eq!(body["data"]["totalProjects"], 4);
    assert_eq!(body["data"]["activeLeads"], 2);
    assert_eq!(body["data"]["revenue"], "€1.2M");

    fixture
        .put_json("/api/leads/101/status", json!({"status": "CLOSED"}))
        .await;
    let (_, body) = fixture.get_json("/api/analytics/dashboard").await;
    assert_eq!(body["data"]["activeLeads"], 1);

    let (_, body) = fixture.get_json("/api/analytics/leads?range=30d").await;
    let funnel: Vec<u64> = body["data"]["funnel"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["count"].as_u64().unwrap())
        .collect();
    assert_eq!(funnel, vec![5000, 80, 40, 25, 10]);

    let (_, body) = fixture.get_json("/api/analytics/divisions").await;
    let total: u64 = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["value"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 100);

    let (_, body) = fixture.get_json("/api/analytics/overview?range=7d").await;
    assert_eq!(body["data"]["trendData"].as_array().unwrap().len(), 8);
    assert_eq!(body["data"]["avgSessionDuration"], "2m 45s");

    let (status, body) = fixture.get_json("/api/analytics/pages?range=2w").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_ai_without_key_returns_placeholder() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post_json(
            "/api/ai/project-description",
            json!({"title": "Neon", "client": "NeoBank", "keywords": ["React"]}),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["text"], MISSING_KEY_PLACEHOLDER);

    let (_, body) = fixture
        .post_json("/api/ai/improve-text", json!({"text": "Fast sites."}))
        .await;
    assert_eq!(body["data"]["text"], "Fast sites.");
}

struct Unreachable;

#[async_trait]
impl TextGenerator for Unreachable {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::Collaborator("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_ai_failure_degrades() {
    let mut state = test_state(false).await;
    state.ai = Some(Arc::new(Unreachable));
    let fixture = TestFixture::with_state(state).await;

    let (status, body) = fixture
        .post_json("/api/ai/project-description", json!({"title": "Neon"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["text"], GENERATION_FAILED_PLACEHOLDER);
}

#[tokio::test]
async fn test_login_always_succeeds() {
    let fixture = TestFixture::empty().await;

    let (status, body) = fixture
        .post_json("/api/login", json!({"username": "anyone", "password": "wrong"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["redirect"], "/");
}

#[tokio::test]
async fn test_settings_file_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let config = Config {
        settings_file: Some(path.clone()),
        ..test_config(true)
    };

    let fixture = TestFixture::with_state(AppState::new(config.clone()).await).await;
    let (_, body) = fixture.get_json("/api/settings").await;
    let mut settings = body["data"].clone();
    settings["general"]["siteName"] = json!("Aureus Studio");
    let (status, _) = fixture.put_json("/api/settings", settings).await;
    assert_eq!(status, 200);

    fixture
        .post_json(
            "/api/settings/footer/company/edit",
            json!({"op": "remove", "id": "2"}),
        )
        .await;

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["general"]["siteName"], "Aureus Studio");
    assert_eq!(saved["footer"]["companyLinks"].as_array().unwrap().len(), 2);

    let restarted = AppState::new(config).await;
    let settings = restarted.repo.document::<crate::models::SiteSettings>().await;
    assert_eq!(settings.general.site_name, "Aureus Studio");
    assert_eq!(settings.footer.company_links.len(), 2);
    assert_eq!(restarted.repo.revision_id(), 0);
}
