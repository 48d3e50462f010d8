//! Data models for Programmable Search responses.

use serde::{Deserialize, Serialize};

/// A single titled, linked snippet returned by a web search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result title, if the engine sent one
    pub title: Option<String>,
    /// Result link
    pub url: Option<String>,
    /// Short text excerpt
    pub snippet: String,
}

impl SearchHit {
    /// Creates a hit with all parts present.
    pub fn new(title: impl Into<String>, url: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self { title: Some(title.into()), url: Some(url.into()), snippet: snippet.into() }
    }
}

/// Wire body of a `customsearch/v1` response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CseResponse {
    #[serde(default)]
    pub items: Option<Vec<CseItem>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CseItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl From<CseItem> for SearchHit {
    fn from(item: CseItem) -> Self {
        Self { title: item.title, url: item.link, snippet: item.snippet.unwrap_or_default() }
    }
}

impl CseResponse {
    pub fn into_hits(self) -> Vec<SearchHit> {
        self.items.unwrap_or_default().into_iter().map(SearchHit::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_items() {
        let body = r#"{
            "kind": "customsearch#search",
            "items": [
                {"title": "IKEA POÄNG chair - $40", "link": "https://example.com/a", "snippet": "Good shape"},
                {"link": "https://example.com/b"}
            ]
        }"#;

        let hits = serde_json::from_str::<CseResponse>(body).unwrap().into_hits();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title.as_deref(), Some("IKEA POÄNG chair - $40"));
        assert_eq!(hits[0].url.as_deref(), Some("https://example.com/a"));
        assert_eq!(hits[0].snippet, "Good shape");
        assert!(hits[1].title.is_none());
        assert_eq!(hits[1].snippet, "");
    }

    #[test]
    fn test_decode_missing_items() {
        let hits = serde_json::from_str::<CseResponse>(r#"{"kind": "x"}"#).unwrap().into_hits();
        assert!(hits.is_empty());

        let hits = serde_json::from_str::<CseResponse>(r#"{"items": null}"#).unwrap().into_hits();
        assert!(hits.is_empty());
    }
}
