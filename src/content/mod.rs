//! Read-only client for the headless content store backing the blog.
//!
//! The store is an opaque external query API; this module issues the two
//! fixed queries the site uses (recent posts for the listing, a trimmed
//! title/id set for the "popular posts" sidebar) and decodes the `result`
//! wrapper. Fetch errors are retryable — the caller simply re-runs the
//! fetch.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ContentError;

/// Recent posts for the listing page: first ten, card fields only.
pub const RECENT_POSTS_QUERY: &str =
    r#"*[_type == "blogPost"][0..9]{_id, title, publishedAt, shortDescription, author->{name}}"#;

/// Popular posts for the sidebar: first six, title and id only.
pub const POPULAR_POSTS_QUERY: &str = r#"*[_type == "blogPost"][0..5]{_id, title}"#;

/// Connection settings for the content store.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: "s89ti6cn".to_string(),
            dataset: "production".to_string(),
            api_version: "2022-03-07".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostAuthor {
    pub name: String,
}

/// Blog post card as the listing renders it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub short_description: String,
    pub author: PostAuthor,
}

/// Sidebar entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PopularPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct QueryReply<T> {
    result: T,
}

/// Client for the content store's HTTP query endpoint.
pub struct ContentClient {
    config: ContentConfig,
    client: reqwest::Client,
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn query_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/data/query/{}",
            self.config.project_id, self.config.api_version, self.config.dataset
        )
    }

    async fn run_query<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<T, ContentError> {
        let response = self
            .client
            .get(self.query_url())
            .query(&[("query", query), ("perspective", "published")])
            .send()
            .await
            .map_err(|e| ContentError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(ContentError::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ContentError::Request(e.to_string()))?;
        let reply: QueryReply<T> = serde_json::from_str(&body)?;
        Ok(reply.result)
    }

    pub async fn recent_posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        self.run_query(RECENT_POSTS_QUERY).await
    }

    pub async fn popular_posts(&self) -> Result<Vec<PopularPost>, ContentError> {
        self.run_query(POPULAR_POSTS_QUERY).await
    }

    /// Both listing queries at once, as the blog page loads them.
    pub async fn front_page(&self) -> Result<(Vec<BlogPost>, Vec<PopularPost>), ContentError> {
        futures::try_join!(self.recent_posts(), self.popular_posts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_post_decodes_from_query_result() {
        let json = r#"{
            "_id": "p1",
            "title": "Learning by speaking",
            "publishedAt": "2024-06-01T12:00:00Z",
            "shortDescription": "Why output beats input",
            "author": {"name": "Priya"}
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "p1");
        assert_eq!(post.author.name, "Priya");
    }

    #[test]
    fn popular_post_is_trimmed_to_title_and_id() {
        let posts: Vec<PopularPost> =
            serde_json::from_str(r#"[{"_id":"p1","title":"A"},{"_id":"p2","title":"B"}]"#).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].id, "p2");
    }

    #[test]
    fn query_url_includes_project_and_dataset() {
        let client = ContentClient::new(ContentConfig::default());
        let url = client.query_url();
        assert!(url.contains("s89ti6cn"));
        assert!(url.ends_with("/data/query/production"));
    }

    #[test]
    fn wrapper_unwraps_result() {
        let reply: QueryReply<Vec<PopularPost>> =
            serde_json::from_str(r#"{"result":[{"_id":"p1","title":"A"}]}"#).unwrap();
        assert_eq!(reply.result.len(), 1);
    }
}
