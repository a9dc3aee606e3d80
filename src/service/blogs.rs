//! Blog post storage.

use crate::error::AppError;
use crate::models::{Blog, NewBlog};
use sqlx::PgPool;

const SELECT_BLOG: &str =
    "SELECT blogs_id, blogs_title, blogs_content, blogs_author, blogs_date, blogs_image_url FROM blogs";

pub struct BlogService;

impl BlogService {
    pub async fn create(pool: &PgPool, blog: &NewBlog) -> Result<i32, AppError> {
        let (blogs_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO blogs (blogs_title, blogs_content, blogs_author, blogs_date, blogs_image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING blogs_id
            "#,
        )
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.author)
        .bind(blog.date)
        .bind(&blog.image_url)
        .fetch_one(pool)
        .await?;
        tracing::info!(blogs_id, has_image = blog.image_url.is_some(), "blog added");
        Ok(blogs_id)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Blog>, AppError> {
        let sql = format!("{} ORDER BY blogs_id", SELECT_BLOG);
        Ok(sqlx::query_as::<_, Blog>(&sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &PgPool, blogs_id: i32) -> Result<Option<Blog>, AppError> {
        let sql = format!("{} WHERE blogs_id = $1", SELECT_BLOG);
        Ok(sqlx::query_as::<_, Blog>(&sql).bind(blogs_id).fetch_optional(pool).await?)
    }
}
