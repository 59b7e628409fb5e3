//! HTTP client for the Webflow CMS.

use tracing::debug;
use url::Url;

use crate::error::{Result, WebflowError};
use crate::models::{ApiErrorBody, BlogPost, ItemsResponse};

const WEBFLOW_API_BASE: &str = "https://api.webflow.com/v2";

/// CMS field the post body lives in.
pub const DEFAULT_CONTENT_FIELD: &str = "post-body";

/// Last non-empty path segment of a public blog URL.
///
/// `https://example.webflow.io/blog/my-post` -> `my-post`.
pub fn extract_slug(blog_url: &str) -> Result<String> {
    let url = Url::parse(blog_url).map_err(|_| WebflowError::InvalidUrl(blog_url.to_string()))?;
    url.path_segments()
        .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
        .map(|s| s.to_string())
        .ok_or_else(|| WebflowError::InvalidUrl(blog_url.to_string()))
}

/// Client for one collection on the Webflow Data API v2.
pub struct WebflowClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    collection_id: String,
}

impl WebflowClient {
    pub fn new(api_token: impl Into<String>, collection_id: impl Into<String>) -> Result<Self> {
        Self::with_base_url(WEBFLOW_API_BASE, api_token, collection_id)
    }

    /// Point the client at a different API root (tests, local proxies).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Result<Self> {
        let api_token = api_token.into();
        let collection_id = collection_id.into();
        if api_token.is_empty() || collection_id.is_empty() {
            return Err(WebflowError::MissingCredentials);
        }

        let base = base_url.into();
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
            api_token,
            collection_id,
        })
    }

    /// Resolve a public blog URL to the CMS item behind it.
    ///
    /// The Data API has no lookup-by-slug endpoint, so this lists the
    /// collection's items and matches on the slug field.
    pub async fn fetch_by_url(&self, blog_url: &str) -> Result<BlogPost> {
        let slug = extract_slug(blog_url)?;
        debug!("fetching collection {} for slug {:?}", self.collection_id, slug);

        let url = format!("{}/collections/{}/items", self.base_url, self.collection_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .header("accept", "application/json")
            .send()
            .await?;
        let response = Self::check_status(response, "Collection not found").await?;

        let data: ItemsResponse = response.json().await?;
        let item = data
            .items
            .into_iter()
            .find(|item| item.slug() == Some(slug.as_str()))
            .ok_or_else(|| {
                WebflowError::NotFound(format!(
                    "blog post with slug {:?} not found in collection",
                    slug
                ))
            })?;

        Ok(item.into_blog_post())
    }

    /// Patch one field of a CMS item.
    pub async fn update_item(&self, item_id: &str, content: &str, field: &str) -> Result<()> {
        let url = format!(
            "{}/collections/{}/items/{}",
            self.base_url, self.collection_id, item_id
        );

        let mut field_data = serde_json::Map::new();
        field_data.insert(
            field.to_string(),
            serde_json::Value::String(content.to_string()),
        );
        let body = serde_json::json!({ "fieldData": field_data });

        let response = self
            .http
            .patch(&url)
            .bearer_auth(&self.api_token)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await?;
        Self::check_status(response, "Blog post not found").await?;

        debug!("updated item {}", item_id);
        Ok(())
    }

    /// Publish a CMS item (clears its draft state on the live site).
    pub async fn publish_item(&self, item_id: &str) -> Result<()> {
        let url = format!(
            "{}/collections/{}/items/{}/publish",
            self.base_url, self.collection_id, item_id
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .header("accept", "application/json")
            .send()
            .await?;
        Self::check_status(response, "Blog post not found").await?;

        debug!("published item {}", item_id);
        Ok(())
    }

    async fn check_status(
        response: reqwest::Response,
        not_found: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            401 => Err(WebflowError::Unauthorized),
            404 => Err(WebflowError::NotFound(not_found.to_string())),
            code => {
                let body: ApiErrorBody = response.json().await.unwrap_or_default();
                Err(WebflowError::Api {
                    status: code,
                    message: body.message.unwrap_or_else(|| status.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_slug() {
        assert_eq!(
            extract_slug("https://example.webflow.io/blog/my-post").unwrap(),
            "my-post"
        );
    }

    #[test]
    fn test_extract_slug_ignores_trailing_slash() {
        assert_eq!(
            extract_slug("https://example.webflow.io/blog/my-post/").unwrap(),
            "my-post"
        );
    }

    #[test]
    fn test_extract_slug_single_segment() {
        assert_eq!(extract_slug("https://example.com/about").unwrap(), "about");
    }

    #[test]
    fn test_extract_slug_rejects_invalid_url() {
        assert!(matches!(
            extract_slug("not a url"),
            Err(WebflowError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_client_requires_credentials() {
        assert!(matches!(
            WebflowClient::new("", "collection"),
            Err(WebflowError::MissingCredentials)
        ));
        assert!(matches!(
            WebflowClient::new("token", ""),
            Err(WebflowError::MissingCredentials)
        ));
        assert!(WebflowClient::new("token", "collection").is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WebflowClient::with_base_url("http://localhost:3000/", "t", "c").unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
