//! Subscriber CSV export and settings file export/import.

use std::path::Path;

use crate::errors::AppError;
use crate::models::{SiteSettings, Subscriber};

pub const SUBSCRIBER_CSV_HEADER: [&str; 6] = [
    "ID",
    "Email",
    "Source",
    "Status",
    "Subscribed At",
    "Unsubscribed At",
];

/// Quote a field when it contains a separator, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let row: Vec<String> = fields.into_iter().map(escape_field).collect();
    out.push_str(&row.join(","));
    out.push_str("\r\n");
}

/// Render subscribers, in the given order, as CSV with a header row.
pub fn subscribers_csv(subscribers: &[Subscriber]) -> String {
    let mut out = String::new();
    push_row(&mut out, SUBSCRIBER_CSV_HEADER);

    for s in subscribers {
        let subscribed = s.subscribed_at.to_string();
        let unsubscribed = s.unsubscribed_at.map(|d| d.to_string()).unwrap_or_default();
        push_row(
            &mut out,
            [
                s.id.as_str(),
                s.email.as_str(),
                s.source.as_str(),
                s.status.as_str(),
                subscribed.as_str(),
                unsubscribed.as_str(),
            ],
        );
    }

    out
}

/// Suggested download name for a subscriber export.
pub fn subscribers_filename(date: chrono::NaiveDate) -> String {
    format!("subscribers-{}.csv", date)
}

pub fn export_settings(settings: &SiteSettings) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(settings)?)
}

/// Parse an exported settings file.
///
/// The file is accepted wholesale once `general` and `footer` are present;
/// any other missing section takes its default.
pub fn import_settings(raw: &str) -> Result<SiteSettings, AppError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| AppError::BadRequest(format!("Settings file is not valid JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| AppError::BadRequest("Settings file must be a JSON object".to_string()))?;
    for key in ["general", "footer"] {
        if !object.contains_key(key) {
            return Err(AppError::BadRequest(format!(
                "Invalid settings file: missing \"{}\" section",
                key
            )));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("Invalid settings file: {}", e)))
}

pub async fn write_settings_file(path: &Path, settings: &SiteSettings) -> Result<(), AppError> {
    tokio::fs::write(path, export_settings(settings)?).await?;
    Ok(())
}

pub async fn read_settings_file(path: &Path) -> Result<SiteSettings, AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    import_settings(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriberStatus;
    use chrono::NaiveDate;

    fn subscriber(id: &str, email: &str, source: &str, unsubscribed: Option<NaiveDate>) -> Subscriber {
        Subscriber {
            id: id.to_string(),
            email: email.to_string(),
            source: source.to_string(),
            status: if unsubscribed.is_some() {
                SubscriberStatus::Unsubscribed
            } else {
                SubscriberStatus::Active
            },
            subscribed_at: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            unsubscribed_at: unsubscribed,
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = subscribers_csv(&[
            subscriber("1", "a@example.com", "Footer", None),
            subscriber("2", "b@example.com", "Blog", NaiveDate::from_ymd_opt(2024, 2, 1)),
        ]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Email,Source,Status,Subscribed At,Unsubscribed At");
        assert_eq!(lines[1], "1,a@example.com,Footer,ACTIVE,2024-01-05,");
        assert_eq!(lines[2], "2,b@example.com,Blog,UNSUBSCRIBED,2024-01-05,2024-02-01");
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        let csv = subscribers_csv(&[subscriber("1", "a@example.com", "Ads, \"Q1\"", None)]);
        assert!(csv.contains("a@example.com,\"Ads, \"\"Q1\"\"\",ACTIVE"));
    }

    #[test]
    fn test_import_requires_general_and_footer() {
        let err = import_settings(r#"{"general": {}}"#).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m.contains("footer")));
        assert!(import_settings("not json").is_err());
        assert!(import_settings("[]").is_err());
    }

    #[test]
    fn test_import_defaults_optional_sections() {
        let raw = r#"{
            "general": {
                "siteName": "Aureus", "siteDescription": "", "footerDescription": "",
                "contactEmail": "hello@aureus.agency", "careersEmail": ""
            },
            "footer": {"divisionLinks": [{"id": "1", "label": "Tech", "url": "/tech", "order": 9}]}
        }"#;
        let settings = import_settings(raw).unwrap();
        assert_eq!(settings.general.site_name, "Aureus");
        assert_eq!(settings.footer.division_links.len(), 1);
        assert!(settings.footer.company_links.is_empty());
        assert!(!settings.features.maintenance_mode);
    }

    #[tokio::test]
    async fn test_settings_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = SiteSettings::default();
        settings.general.site_name = "Aureus Digital".to_string();
        settings.seo.keywords = vec!["branding".to_string()];

        write_settings_file(&path, &settings).await.unwrap();
        let loaded = read_settings_file(&path).await.unwrap();
        assert_eq!(loaded, settings);
    }
}
