//! HTTP client for the Notion REST API

use futures::future::join_all;
use serde_json::{Value, json};

use crate::config::ContentConfig;
use crate::error::{ContentError, ContentResult};

use super::types::PaginatedList;

/// Client holding the shared HTTP connection pool and credentials.
///
/// List operations absorb upstream failures: they log and return whatever
/// was accumulated so far, so a transient outage degrades a page to "no
/// content yet" instead of a hard error. Single-record operations return
/// errors and let the caller decide.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    version: String,
}

impl NotionClient {
    /// Build a client from the service configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ContentConfig) -> ContentResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            api_token: config.api_token().to_string(),
            version: config.notion_version().to_string(),
        })
    }

    async fn get_json(&self, path: &str) -> ContentResult<Value> {
        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .bearer_auth(&self.api_token)
            .header("Notion-Version", &self.version)
            .send()
            .await?;
        Self::into_json(response, path).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> ContentResult<Value> {
        let response = self
            .http
            .post(format!("{}/{path}", self.base_url))
            .bearer_auth(&self.api_token)
            .header("Notion-Version", &self.version)
            .json(body)
            .send()
            .await?;
        Self::into_json(response, path).await
    }

    async fn into_json(response: reqwest::Response, path: &str) -> ContentResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            match status.as_u16() {
                401 => log::error!(
                    "Notion API auth failed for {path}: check the API token and that \
                     the integration is connected to the source"
                ),
                404 => log::error!("Notion API object not found for {path}: check the source id"),
                _ => log::error!("Notion API error {status} for {path}"),
            }
            return Err(ContentError::Upstream(format!(
                "{status}: {}",
                crate::utils::truncate_chars(&body, 500)
            )));
        }
        Ok(response.json::<Value>().await?)
    }

    /// Fetch every published page of a database, following pagination
    /// cursors sequentially until exhausted.
    ///
    /// A failure mid-listing logs and returns the pages accumulated so
    /// far; an empty vec is a valid "nothing available" answer, not an
    /// error.
    pub async fn query_database_pages(&self, database_id: &str) -> Vec<Value> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({
                "filter": {
                    "property": "Published",
                    "checkbox": { "equals": true }
                },
                "sorts": [
                    { "property": "Published Date", "direction": "descending" }
                ]
            });
            if let Some(ref c) = cursor {
                body["start_cursor"] = json!(c);
            }

            let value = match self
                .post_json(&format!("databases/{database_id}/query"), &body)
                .await
            {
                Ok(value) => value,
                Err(e) => {
                    log::error!("database query failed for {database_id}: {e}");
                    break;
                }
            };

            let list: PaginatedList = match serde_json::from_value(value) {
                Ok(list) => list,
                Err(e) => {
                    log::error!("unexpected database query payload for {database_id}: {e}");
                    break;
                }
            };

            pages.extend(list.results);
            match list.next_cursor {
                Some(next) if !next.is_empty() => cursor = Some(next),
                _ => break,
            }
        }

        pages
    }

    /// Fetch the complete block list of a page, strictly in cursor order.
    ///
    /// Document order is significant, so cursor-following fetches are
    /// sequential — never fanned out — and each page of results is
    /// appended exactly as returned.
    pub async fn list_all_blocks(&self, page_id: &str) -> Vec<Value> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let path = match cursor {
                Some(ref c) => format!("blocks/{page_id}/children?start_cursor={c}"),
                None => format!("blocks/{page_id}/children"),
            };

            let value = match self.get_json(&path).await {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("block listing failed for {page_id}: {e}");
                    break;
                }
            };

            let list: PaginatedList = match serde_json::from_value(value) {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("unexpected block payload for {page_id}: {e}");
                    break;
                }
            };

            blocks.extend(list.results);
            match list.next_cursor {
                Some(next) if !next.is_empty() => cursor = Some(next),
                _ => break,
            }
        }

        blocks
    }

    /// Resolve one page's full property set by id.
    ///
    /// # Errors
    /// Propagates transport and upstream errors; callers that hold a
    /// lighter stub decide whether to fall back to it.
    pub async fn retrieve_page(&self, page_id: &str) -> ContentResult<Value> {
        self.get_json(&format!("pages/{page_id}")).await
    }

    /// List the child pages of a parent page, upgraded to full records.
    ///
    /// Child-page stubs carry only an inline title, so each one is
    /// upgraded via `retrieve_page`. The upgrades are independent
    /// documents with no ordering relationship, so they run concurrently;
    /// results are re-assembled by position, not completion order. A
    /// failed upgrade falls back to the stub — its inline title still
    /// normalizes.
    pub async fn list_child_pages(&self, parent_page_id: &str) -> Vec<Value> {
        let stubs: Vec<Value> = self
            .list_all_blocks(parent_page_id)
            .await
            .into_iter()
            .filter(|b| b.get("type").and_then(Value::as_str) == Some("child_page"))
            .collect();

        let upgrades = stubs.iter().map(|stub| async move {
            let id = stub.get("id").and_then(Value::as_str).unwrap_or_default();
            if id.is_empty() {
                return stub.clone();
            }
            match self.retrieve_page(id).await {
                Ok(page) => page,
                Err(e) => {
                    log::warn!("failed to retrieve child page {id}, using stub: {e}");
                    stub.clone()
                }
            }
        });

        join_all(upgrades).await
    }
}
