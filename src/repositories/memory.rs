use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    models::posts::{NewPost, Post},
    Result,
};

use super::posts_repo::PostsRepository;

/// In-process stand-in for the `posts` table.
#[derive(Default)]
pub struct MemoryRepo {
    posts: Mutex<Vec<Post>>,
}

impl MemoryRepo {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
        }
    }
}

#[async_trait]
impl PostsRepository for MemoryRepo {
    async fn get_posts(&self) -> Result<Vec<Post>> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| {
            b.publish_date
                .as_bytes()
                .cmp(a.publish_date.as_bytes())
                .then(a.id.cmp(&b.id))
        });
        Ok(posts)
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|post| post.slug == slug).cloned())
    }

    async fn replace_posts(&self, posts: &[NewPost]) -> Result<Vec<Post>> {
        let mut stored = self.posts.lock().unwrap();
        let next_id = stored.iter().map(|post| post.id).max().unwrap_or(0) + 1;

        let created: Vec<Post> = posts
            .iter()
            .zip(next_id..)
            .map(|(post, id)| Post {
                id,
                slug: post.slug.clone(),
                title: post.title.clone(),
                summary: post.summary.clone(),
                content: post.content.clone(),
                author: post.author.clone(),
                publish_date: post.publish_date.clone(),
                category: post.category.clone(),
                image_url: post.image_url.clone(),
            })
            .collect();

        *stored = created.clone();
        Ok(created)
    }
}
