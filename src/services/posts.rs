use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::{
    models::posts::{NewPost, Post, PostResponse},
    repositories::posts_repo::PostsRepository,
    Error, Result,
};

#[derive(Clone)]
pub struct PostsService {
    repo: Arc<dyn PostsRepository>,
}

impl PostsService {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_posts(&self) -> Result<Vec<PostResponse>> {
        let posts = self.repo.get_posts().await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn get_post(&self, slug: &str) -> Result<PostResponse> {
        let post = self
            .repo
            .get_post_by_slug(slug)
            .await?
            .ok_or_else(|| Error::post_not_found(slug))?;

        Ok(post.into())
    }

    /// Validates every post up front, then swaps the table contents.
    pub async fn reseed(&self, posts: &[NewPost]) -> Result<Vec<Post>> {
        for post in posts {
            post.validate()?;
        }

        let created = self.repo.replace_posts(posts).await?;
        info!(count = created.len(), "Artigos substituídos");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryRepo;

    fn post(id: i32, slug: &str, publish_date: &str) -> Post {
        Post {
            id,
            slug: slug.to_string(),
            title: format!("Title {}", id),
            summary: format!("Summary {}", id),
            content: format!("<p>Content {}</p>", id),
            author: format!("Author {}", id),
            publish_date: publish_date.to_string(),
            category: "Tech".to_string(),
            image_url: format!("https://example.com/image{}.jpg", id),
        }
    }

    fn service(posts: Vec<Post>) -> PostsService {
        PostsService::new(Arc::new(MemoryRepo::with_posts(posts)))
    }

    #[tokio::test]
    async fn get_posts_maps_every_row() {
        let service = service(vec![
            post(1, "test-post-1", "2024-12-27"),
            post(2, "test-post-2", "2024-12-28"),
        ]);

        let posts = service.get_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(
            posts[0],
            PostResponse {
                id: "2".to_string(),
                slug: "test-post-2".to_string(),
                title: "Title 2".to_string(),
                summary: "Summary 2".to_string(),
                content: "<p>Content 2</p>".to_string(),
                author: "Author 2".to_string(),
                publish_date: "2024-12-28".to_string(),
                category: "Tech".to_string(),
                image_url: "https://example.com/image2.jpg".to_string(),
            }
        );
        assert_eq!(posts[1].id, "1");
    }

    #[tokio::test]
    async fn get_posts_on_empty_table_is_empty() {
        let posts = service(Vec::new()).get_posts().await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn get_posts_sorts_by_date_string_descending() {
        let service = service(vec![
            post(1, "sustentabilidade", "26 de Dezembro de 2025"),
            post(2, "economia", "28 de Dezembro de 2025"),
            post(3, "ia", "27 de Dezembro de 2025"),
            post(4, "malta", "29 de Dezembro de 2025"),
        ]);

        let posts = service.get_posts().await.unwrap();
        let dates: Vec<&str> = posts.iter().map(|p| p.publish_date.as_str()).collect();

        assert_eq!(
            dates,
            [
                "29 de Dezembro de 2025",
                "28 de Dezembro de 2025",
                "27 de Dezembro de 2025",
                "26 de Dezembro de 2025",
            ]
        );
        assert!(posts
            .windows(2)
            .all(|pair| pair[0].publish_date >= pair[1].publish_date));
    }

    #[tokio::test]
    async fn get_post_returns_the_matching_slug() {
        let service = service(vec![
            post(1, "test-post", "2024-12-27"),
            post(2, "other-post", "2024-12-28"),
        ]);

        let found = service.get_post("test-post").await.unwrap();

        assert_eq!(found.slug, "test-post");
        assert_eq!(found.id, "1");
    }

    #[tokio::test]
    async fn get_post_is_case_sensitive() {
        let service = service(vec![post(1, "test-post", "2024-12-27")]);

        let err = service.get_post("Test-Post").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn get_post_reports_missing_slug() {
        let err = service(Vec::new())
            .get_post("non-existent-slug")
            .await
            .unwrap_err();

        match err {
            Error::NotFound(message) => assert_eq!(
                message,
                "Artigo com slug \"non-existent-slug\" não encontrado"
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn reseed_rejects_invalid_posts_before_touching_the_table() {
        let service = service(vec![post(1, "kept", "2024-12-27")]);
        let invalid = NewPost {
            slug: String::new(),
            title: "Title".to_string(),
            summary: "Summary".to_string(),
            content: "Content".to_string(),
            author: "Author".to_string(),
            publish_date: "2024-12-27".to_string(),
            category: "Tech".to_string(),
            image_url: "https://example.com/image.jpg".to_string(),
        };

        let err = service.reseed(&[invalid]).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(service.get_post("kept").await.unwrap().slug, "kept");
    }
}
