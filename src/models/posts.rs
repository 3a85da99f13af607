use serde::{Deserialize, Serialize};
use validator::Validate;

/// Row as stored in the `posts` table.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub publish_date: String,
    pub category: String,
    pub image_url: String,
}

/// Shape returned by the HTTP API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PostResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            slug: post.slug,
            title: post.title,
            summary: post.summary,
            content: post.content,
            author: post.author,
            publish_date: post.publish_date,
            category: post.category,
            image_url: post.image_url,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct NewPost {
    #[validate(length(min = 1, message = "Slug is required."))]
    pub slug: String,
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,
    #[validate(length(min = 1, message = "Summary is required."))]
    pub summary: String,
    #[validate(length(min = 1, message = "Content is required."))]
    pub content: String,
    #[validate(length(min = 1, message = "Author is required."))]
    pub author: String,
    #[validate(length(min = 1, message = "Publish date is required."))]
    pub publish_date: String,
    #[validate(length(min = 1, message = "Category is required."))]
    pub category: String,
    #[validate(url(message = "Image URL must be a valid URL."))]
    pub image_url: String,
}
