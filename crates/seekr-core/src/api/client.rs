use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;
use url::form_urlencoded::byte_serialize;

use super::error::{SearchError, SearchErrorKind, SearchResult, classify_reqwest_error};
use super::types::{DocumentId, SearchResults, parse_search_response};

/// Splits console input into search terms. Blank input yields no terms.
pub fn normalize_terms(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// HTTP client for the search service.
///
/// `GET {base}/{t1+t2+...}` runs a query, `GET {base}/id/{id}` fetches a full
/// document body as plain text.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Url::parse(base_url).with_context(|| format!("Invalid server URL '{base_url}'"))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query URL for `terms`. Each term is percent-encoded, then joined with `+`.
    pub fn query_url(&self, terms: &[String]) -> Result<Url> {
        let joined = terms
            .iter()
            .map(|term| byte_serialize(term.as_bytes()).collect::<String>())
            .collect::<Vec<_>>()
            .join("+");
        let raw = format!("{}/{joined}", self.base_url);
        Url::parse(&raw).with_context(|| format!("Invalid query URL '{raw}'"))
    }

    pub fn document_url(&self, id: &DocumentId) -> Result<Url> {
        let encoded: String = byte_serialize(id.as_str().as_bytes()).collect();
        let raw = format!("{}/id/{encoded}", self.base_url);
        Url::parse(&raw).with_context(|| format!("Invalid document URL '{raw}'"))
    }

    /// Runs a query. An empty term list short-circuits to zero results.
    pub async fn search(&self, terms: &[String]) -> SearchResult<SearchResults> {
        if terms.is_empty() {
            return Ok(SearchResults::default());
        }
        let url = self
            .query_url(terms)
            .map_err(|e| SearchError::new(SearchErrorKind::Network, format!("{e:#}")))?;

        tracing::debug!(%url, "search request");
        let body = self.get_text(url).await?;
        let results = parse_search_response(&body)?;
        tracing::debug!(hits = results.len(), "search response");
        Ok(results)
    }

    /// Fetches the full plain-text body of one document.
    pub async fn fetch_document(&self, id: &DocumentId) -> SearchResult<String> {
        let url = self
            .document_url(id)
            .map_err(|e| SearchError::new(SearchErrorKind::Network, format!("{e:#}")))?;

        tracing::debug!(%url, "document request");
        let body = self.get_text(url).await?;
        tracing::debug!(%id, bytes = body.len(), "document response");
        Ok(body)
    }

    async fn get_text(&self, url: Url) -> SearchResult<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::http_status(status.as_u16(), &body));
        }

        response.text().await.map_err(|e| classify_reqwest_error(&e))
    }
}
