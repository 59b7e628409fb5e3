//! Wire types for the Webflow CMS Data API v2.

use serde::Deserialize;

/// A blog post as the workflow consumes it, flattened from the CMS item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Rich-text body HTML.
    pub content: String,
    pub is_draft: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Item {
    pub id: String,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub field_data: FieldData,
    /// Older API shapes carried slug/name at the top level.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FieldData {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// The body lives in `post-body` on blog collections; `content` is the
    /// fallback field name.
    #[serde(rename = "post-body", default)]
    pub post_body: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl Item {
    pub(crate) fn slug(&self) -> Option<&str> {
        self.field_data.slug.as_deref().or(self.slug.as_deref())
    }

    pub(crate) fn into_blog_post(self) -> BlogPost {
        BlogPost {
            id: self.id,
            slug: self.field_data.slug.or(self.slug).unwrap_or_default(),
            name: self.field_data.name.or(self.name).unwrap_or_default(),
            content: self
                .field_data
                .post_body
                .or(self.field_data.content)
                .unwrap_or_default(),
            is_draft: self.is_draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_maps_field_data() {
        let json = r#"{
            "items": [{
                "id": "item-1",
                "isDraft": true,
                "fieldData": {
                    "slug": "my-post",
                    "name": "My Post",
                    "post-body": "<p>Body</p>"
                }
            }]
        }"#;
        let response: ItemsResponse = serde_json::from_str(json).unwrap();
        let post = response.items.into_iter().next().unwrap().into_blog_post();

        assert_eq!(
            post,
            BlogPost {
                id: "item-1".to_string(),
                slug: "my-post".to_string(),
                name: "My Post".to_string(),
                content: "<p>Body</p>".to_string(),
                is_draft: true,
            }
        );
    }

    #[test]
    fn test_post_body_preferred_over_content() {
        let json = r#"{"id":"i","fieldData":{"post-body":"<p>a</p>","content":"<p>b</p>"}}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.into_blog_post().content, "<p>a</p>");
    }

    #[test]
    fn test_content_fallback_when_post_body_missing() {
        let json = r#"{"id":"i","fieldData":{"content":"<p>b</p>"}}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.into_blog_post().content, "<p>b</p>");
    }

    #[test]
    fn test_top_level_slug_fallback() {
        let json = r#"{"id":"i","slug":"legacy-slug","name":"Legacy"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.slug(), Some("legacy-slug"));

        let post = item.into_blog_post();
        assert_eq!(post.slug, "legacy-slug");
        assert_eq!(post.name, "Legacy");
        assert_eq!(post.content, "");
        assert!(!post.is_draft);
    }

    #[test]
    fn test_field_data_slug_preferred_over_top_level() {
        let json = r#"{"id":"i","slug":"old","fieldData":{"slug":"new"}}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.slug(), Some("new"));
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
    }
}
