use async_trait::async_trait;
use tracing::instrument;

use crate::{
    models::posts::{NewPost, Post},
    Result,
};

use super::PostgresRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    /// Every post, newest `publish_date` first. The date is compared as a
    /// plain string, byte by byte.
    async fn get_posts(&self) -> Result<Vec<Post>>;
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>>;
    /// Clears the table and inserts `posts`, all or nothing.
    async fn replace_posts(&self, posts: &[NewPost]) -> Result<Vec<Post>>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    #[instrument(skip(self))]
    async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, slug, title, summary, content, author, publish_date, category, image_url
            FROM posts
            ORDER BY publish_date COLLATE "C" DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = posts.len(), "Artigos carregados");
        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, slug, title, summary, content, author, publish_date, category, image_url
            FROM posts
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        tracing::debug!(post_found = post.is_some(), "Consulta por slug concluída");
        Ok(post)
    }

    #[instrument(skip(self, posts), fields(count = posts.len()))]
    async fn replace_posts(&self, posts: &[NewPost]) -> Result<Vec<Post>> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM posts").execute(&mut *tx).await?;
        tracing::debug!(deleted = deleted.rows_affected(), "Artigos removidos");

        let mut created = Vec::with_capacity(posts.len());
        for post in posts {
            let row = sqlx::query_as::<_, Post>(
                r#"
                INSERT INTO posts (slug, title, summary, content, author, publish_date, category, image_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id, slug, title, summary, content, author, publish_date, category, image_url
                "#,
            )
            .bind(&post.slug)
            .bind(&post.title)
            .bind(&post.summary)
            .bind(&post.content)
            .bind(&post.author)
            .bind(&post.publish_date)
            .bind(&post.category)
            .bind(&post.image_url)
            .fetch_one(&mut *tx)
            .await?;
            created.push(row);
        }

        tx.commit().await?;
        Ok(created)
    }
}
