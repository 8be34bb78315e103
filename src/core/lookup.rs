use crate::domain::ports::ImageLookup;
use crate::utils::error::LookupFailure;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Page id the MediaWiki API uses for titles that resolve to no page.
const MISSING_PAGE_ID: &str = "-1";

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

/// Resolves a title to its `pageimages` thumbnail URL on one Wikipedia
/// language edition. One GET per lookup, no retries.
pub struct WikipediaClient {
    client: Client,
    endpoint: String,
    thumb_size: u32,
}

impl WikipediaClient {
    pub fn new(language: &str, thumb_size: u32) -> Self {
        Self::with_endpoint(Self::endpoint_for(language), thumb_size)
    }

    /// The API endpoint of one Wikipedia language edition. Config
    /// validation checks this composed URL before a client is built.
    pub fn endpoint_for(language: &str) -> String {
        format!("https://{}.wikipedia.org/w/api.php", language)
    }

    /// Points the client at an explicit endpoint URL instead of a
    /// wikipedia.org subdomain. Tests use this with a mock server.
    pub fn with_endpoint(endpoint: String, thumb_size: u32) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            thumb_size,
        }
    }
}

#[async_trait::async_trait]
impl ImageLookup for WikipediaClient {
    async fn lookup(&self, name: &str) -> std::result::Result<String, LookupFailure> {
        tracing::debug!("Querying {} for '{}'", self.endpoint, name);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("titles", name),
                ("prop", "pageimages"),
                ("format", "json"),
                ("pithumbsize", &self.thumb_size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| LookupFailure::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(LookupFailure::Status(status.as_u16()));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| LookupFailure::MalformedResponse(e.to_string()))?;

        let pages = match body.query {
            Some(query) => query.pages,
            None => {
                return Err(LookupFailure::MalformedResponse(
                    "response has no `query` object".to_string(),
                ))
            }
        };

        // A single-title query yields a single page entry. Should the API
        // ever return several, the first one in document order wins
        // (`pages` keeps document order via preserve_order).
        for (page_id, page_data) in &pages {
            if page_id == MISSING_PAGE_ID {
                return Err(LookupFailure::NotFound);
            }

            let page: PageEntry = serde_json::from_value(page_data.clone())
                .map_err(|e| LookupFailure::MalformedResponse(e.to_string()))?;

            return match page.thumbnail {
                Some(thumbnail) => Ok(thumbnail.source),
                None => Err(LookupFailure::NoThumbnail),
            };
        }

        Err(LookupFailure::MalformedResponse(
            "response contained no page entries".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> WikipediaClient {
        WikipediaClient::with_endpoint(server.url("/w/api.php"), 500)
    }

    #[tokio::test]
    async fn test_lookup_returns_thumbnail_source() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/w/api.php")
                .query_param("action", "query")
                .query_param("titles", "Ada Lovelace")
                .query_param("prop", "pageimages")
                .query_param("format", "json")
                .query_param("pithumbsize", "500");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "query": {
                        "pages": {
                            "171": {
                                "pageid": 171,
                                "title": "Ada Lovelace",
                                "thumbnail": {
                                    "source": "https://upload.example.org/ada.jpg",
                                    "width": 500,
                                    "height": 600
                                }
                            }
                        }
                    }
                }));
        });

        let result = client_for(&server).lookup("Ada Lovelace").await;

        api_mock.assert();
        assert_eq!(result.unwrap(), "https://upload.example.org/ada.jpg");
    }

    #[tokio::test]
    async fn test_lookup_missing_page_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "query": {
                        "pages": {
                            "-1": { "title": "Unknown Entity XYZ", "missing": "" }
                        }
                    }
                }));
        });

        let result = client_for(&server).lookup("Unknown Entity XYZ").await;

        assert!(matches!(result, Err(LookupFailure::NotFound)));
    }

    #[tokio::test]
    async fn test_lookup_page_without_thumbnail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "query": {
                        "pages": {
                            "42": { "pageid": 42, "title": "Obscure Topic" }
                        }
                    }
                }));
        });

        let result = client_for(&server).lookup("Obscure Topic").await;

        assert!(matches!(result, Err(LookupFailure::NoThumbnail)));
    }

    #[tokio::test]
    async fn test_lookup_first_page_entry_wins() {
        // Undefined by the API contract for a single-title query; the
        // documented choice is the first entry in document order.
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(
                    r#"{"query":{"pages":{
                        "900":{"pageid":900,"thumbnail":{"source":"https://upload.example.org/first.jpg"}},
                        "100":{"pageid":100,"thumbnail":{"source":"https://upload.example.org/second.jpg"}}
                    }}}"#,
                );
        });

        let result = client_for(&server).lookup("Ambiguous").await;

        assert_eq!(result.unwrap(), "https://upload.example.org/first.jpg");
    }

    #[tokio::test]
    async fn test_lookup_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(503);
        });

        let result = client_for(&server).lookup("Anyone").await;

        assert!(matches!(result, Err(LookupFailure::Status(503))));
    }

    #[tokio::test]
    async fn test_lookup_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json at all");
        });

        let result = client_for(&server).lookup("Anyone").await;

        assert!(matches!(result, Err(LookupFailure::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_lookup_missing_query_object() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "batchcomplete": "" }));
        });

        let result = client_for(&server).lookup("Anyone").await;

        assert!(matches!(result, Err(LookupFailure::MalformedResponse(_))));
    }
}
