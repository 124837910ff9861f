//! Text-generation collaborator used by the project and content editors.
//!
//! Failures never reach the caller: the wrappers fall back to fixed
//! placeholder text (or the original input) and log a warning.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;

const GENERATIVE_LANGUAGE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const MISSING_KEY_PLACEHOLDER: &str =
    "This is a mock description because the API key is missing. Please configure the environment variable.";
pub const GENERATION_FAILED_PLACEHOLDER: &str = "Error generating content. Please try again.";
pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "Failed to generate description.";

/// Something that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Client for the Generative Language `generateContent` endpoint.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("")
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/{}:generateContent", GENERATIVE_LANGUAGE_URL, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::Collaborator(format!(
                "Generation API error {}: {}",
                status, text
            )));
        }

        let parsed: GenerateResponse = resp.json().await?;
        Ok(parsed.text())
    }
}

/// Build the configured generator, if any.
pub fn generator_from_config(config: &Config) -> Option<Arc<dyn TextGenerator>> {
    config
        .ai_api_key
        .as_deref()
        .map(|key| Arc::new(GeminiGenerator::new(key, &config.ai_model)) as Arc<dyn TextGenerator>)
}

fn project_prompt(title: &str, client: &str, keywords: &[String]) -> String {
    format!(
        "Write a professional, compelling project description for a digital agency portfolio case study.\n\
         Project Title: {}\n\
         Client: {}\n\
         Keywords/Tech Stack: {}\n\n\
         The tone should be innovative, professional, and result-oriented. Keep it under 100 words.",
        title,
        client,
        keywords.join(", ")
    )
}

pub async fn generate_project_description(
    generator: Option<&dyn TextGenerator>,
    title: &str,
    client: &str,
    keywords: &[String],
) -> String {
    let Some(generator) = generator else {
        warn!("No text generator configured, returning placeholder description");
        return MISSING_KEY_PLACEHOLDER.to_string();
    };

    match generator.generate(&project_prompt(title, client, keywords)).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_RESPONSE_PLACEHOLDER.to_string(),
        Err(e) => {
            warn!("Project description generation failed: {}", e);
            GENERATION_FAILED_PLACEHOLDER.to_string()
        }
    }
}

/// Punch up marketing copy. Returns `text` unchanged if generation fails.
pub async fn improve_text(generator: Option<&dyn TextGenerator>, text: &str) -> String {
    let Some(generator) = generator else {
        return text.to_string();
    };

    let prompt = format!(
        "Improve the following text for SEO and readability, keeping the same meaning but \
         making it more punchy for a marketing website:\n\n\"{}\"",
        text
    );
    match generator.generate(&prompt).await {
        Ok(improved) if !improved.trim().is_empty() => improved,
        Ok(_) => text.to_string(),
        Err(e) => {
            warn!("Text improvement failed: {}", e);
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<&'static str, &'static str>);

    #[async_trait]
    impl TextGenerator for Fixed {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            self.0
                .map(str::to_string)
                .map_err(|e| AppError::Collaborator(e.to_string()))
        }
    }

    #[tokio::test]
    async fn test_missing_generator_uses_placeholder() {
        let text = generate_project_description(None, "Neon", "NeoBank", &[]).await;
        assert_eq!(text, MISSING_KEY_PLACEHOLDER);
        assert_eq!(improve_text(None, "keep me").await, "keep me");
    }

    #[tokio::test]
    async fn test_failure_degrades_to_fallback() {
        let failing = Fixed(Err("timeout"));
        let text = generate_project_description(Some(&failing as &dyn TextGenerator), "Neon", "NeoBank", &[]).await;
        assert_eq!(text, GENERATION_FAILED_PLACEHOLDER);
        assert_eq!(improve_text(Some(&failing as &dyn TextGenerator), "keep me").await, "keep me");
    }

    #[tokio::test]
    async fn test_success_passes_text_through() {
        let ok = Fixed(Ok("A bold new platform."));
        let keywords = vec!["React".to_string()];
        let text = generate_project_description(Some(&ok as &dyn TextGenerator), "Neon", "NeoBank", &keywords).await;
        assert_eq!(text, "A bold new platform.");
    }

    #[test]
    fn test_prompt_mentions_inputs() {
        let prompt = project_prompt("Neon", "NeoBank", &["React".into(), "Node.js".into()]);
        assert!(prompt.contains("Project Title: Neon"));
        assert!(prompt.contains("Keywords/Tech Stack: React, Node.js"));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text(), "Hello world");
    }
}
