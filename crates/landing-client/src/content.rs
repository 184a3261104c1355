//! Headless CMS client.

use landing_core::cover::resolve_hero;
use landing_core::media::{MediaResolver, NormalizedImage};
use landing_core::preview::{InsightPreview, PreviewAssembler};
use landing_core::raw::{
    RawArticleResponse, RawArticlesResponse, RawContentItem, RawCoverResponse,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ContentError;
use crate::{ContentConfig, PAGE_SIZE, http_client, query};

/// One article: the normalized preview plus the untouched payload.
#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub preview: InsightPreview,
    /// The `data` object exactly as the CMS returned it.
    pub raw: serde_json::Value,
}

/// Client for the CMS article and cover endpoints.
#[derive(Debug, Clone)]
pub struct ContentClient {
    base_url: String,
    client: reqwest::Client,
    assembler: PreviewAssembler,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

impl ContentClient {
    /// Create a client for the given CMS origin with default settings.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Config` if the origin is empty or the HTTP
    /// client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ContentError> {
        Self::with_config(ContentConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    /// Create a client with full configuration.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Config` if the origin is empty or the HTTP
    /// client cannot be built.
    #[allow(clippy::needless_pass_by_value)]
    pub fn with_config(cfg: ContentConfig) -> Result<Self, ContentError> {
        let base_url = cfg.base_url.trim().trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(ContentError::Config("missing content base URL".to_owned()));
        }

        let client = http_client(cfg.timeout)
            .map_err(|e| ContentError::Config(format!("failed to build HTTP client: {e}")))?;
        let assembler = PreviewAssembler::new(MediaResolver::new(base_url.clone()));

        Ok(Self {
            base_url,
            client,
            assembler,
        })
    }

    /// CMS origin without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn assembler(&self) -> &PreviewAssembler {
        &self.assembler
    }

    /// Fetch the newest articles, raw.
    ///
    /// A non-success status means "no content" and yields an empty list, as
    /// does a body without a `data` array.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or an undecodable body.
    pub async fn fetch_articles(&self) -> Result<Vec<RawContentItem>, ContentError> {
        let url = format!(
            "{}/api/articles?{}",
            self.base_url,
            query::encode(&query::article_list_params(PAGE_SIZE))
        );
        debug!(%url, "fetching articles");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ContentError::from_send)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "article listing failed, treating as empty");
            return Ok(Vec::new());
        }

        let text = resp.text().await.map_err(ContentError::from_send)?;
        let body: RawArticlesResponse = serde_json::from_str(&text)?;
        Ok(body.data.unwrap_or_default())
    }

    /// Fetch the newest articles and normalize them for display.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_articles`](Self::fetch_articles).
    pub async fn fetch_insights(&self) -> Result<Vec<InsightPreview>, ContentError> {
        let items = self.fetch_articles().await?;
        Ok(self.assembler.assemble_all(&items))
    }

    /// Fetch one article by document id with every relation populated.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` for a 404 or a body without `data`,
    /// `ContentError::Api` for any other non-success status, and network or
    /// decode errors as they occur.
    pub async fn fetch_article(&self, document_id: &str) -> Result<ArticleDetail, ContentError> {
        let url = format!(
            "{}/api/articles/{}?populate=*",
            self.base_url,
            urlencoding::encode(document_id)
        );
        debug!(%url, "fetching article");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ContentError::from_send)?;

        let status = resp.status();
        let text = resp.text().await.map_err(ContentError::from_send)?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ContentError::NotFound {
                document_id: document_id.to_owned(),
            });
        }
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(ContentError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed: RawArticleResponse = serde_json::from_str(&text)?;
        let Some(item) = parsed.data else {
            return Err(ContentError::NotFound {
                document_id: document_id.to_owned(),
            });
        };
        let mut envelope: serde_json::Value = serde_json::from_str(&text)?;
        let raw = envelope
            .get_mut("data")
            .map(serde_json::Value::take)
            .unwrap_or_default();

        Ok(ArticleDetail {
            preview: self.assembler.assemble(&item),
            raw,
        })
    }

    /// Fetch the hero cover image. Any failure yields `None`.
    pub async fn fetch_cover(&self) -> Option<NormalizedImage> {
        let url = format!("{}/api/cover?populate=image", self.base_url);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "cover request failed");
                return None;
            }
        };
        if !resp.status().is_success() {
            debug!(status = resp.status().as_u16(), "no cover available");
            return None;
        }

        let body: RawCoverResponse = match resp.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "cover response undecodable");
                return None;
            }
        };
        resolve_hero(self.assembler.media(), &body.data?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_is_rejected() {
        let err = ContentClient::new("  ").unwrap_err();
        assert!(matches!(err, ContentError::Config(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ContentClient::new("http://cms.local/").unwrap();
        assert_eq!(client.base_url(), "http://cms.local");
        assert_eq!(client.assembler().media().origin(), "http://cms.local");
    }
}
