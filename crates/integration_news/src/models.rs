//! NewsAPI.org wire models

use serde::{Deserialize, Serialize};

/// Response of `/top-headlines`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlinesResponse {
    /// Provider status string, "ok" on success
    pub status: String,
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// One news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub content: Option<String>,
}

/// Publication the article came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// Error body the provider attaches to non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct NewsErrorBody {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headlines_parse_provider_field_names() {
        let json = serde_json::json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": { "id": null, "name": "Example News" },
                "author": "A. Reporter",
                "title": "Headline",
                "description": "Summary",
                "url": "https://news.example/story",
                "urlToImage": null,
                "publishedAt": "2026-08-30T08:00:00Z",
                "content": null
            }]
        });

        let response: HeadlinesResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.total_results, 1);
        assert_eq!(response.articles[0].source.name, "Example News");
        assert!(response.articles[0].url_to_image.is_none());
    }

    #[test]
    fn headlines_serialize_back_to_wire_names() {
        let response = HeadlinesResponse {
            status: "ok".to_string(),
            total_results: 0,
            articles: Vec::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("totalResults").is_some());
    }

    #[test]
    fn error_body_parses_with_missing_fields() {
        let body: NewsErrorBody =
            serde_json::from_str(r#"{"status": "error", "code": "apiKeyInvalid"}"#).unwrap();
        assert_eq!(body.code.as_deref(), Some("apiKeyInvalid"));
        assert!(body.message.is_none());
    }
}
