//! Blog posts: create with optional image, list, fetch by id.

use crate::error::AppError;
use crate::extractors::{AdminGuard, FormData};
use crate::models::{Blog, BlogForm, NewBlog};
use crate::response::message_with;
use crate::service::BlogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::SubsecRound;
use serde::Serialize;

#[derive(Serialize)]
struct BlogCreated {
    blogs_id: i32,
}

/// Add a blog post.
///
/// Multipart form: `blogs_title`, `blogs_content`, `blogs_author`, optional file `blogs_image`.
/// The image is uploaded to the image host first; if the host refuses it, its status and body
/// are returned and no post is stored.
#[utoipa::path(
    post,
    path = "/blogs",
    tag = "blogs",
    responses(
        (status = 201, description = "Blog added, body carries `blogs_id`"),
        (status = 400, description = "Missing blog details")
    )
)]
pub async fn add_blog(
    _guard: AdminGuard,
    State(state): State<AppState>,
    form: FormData,
) -> Result<impl IntoResponse, AppError> {
    let form = BlogForm::from_form(form)?;
    let image_url = match form.image {
        Some(bytes) => Some(state.image_host.upload(bytes).await?),
        None => None,
    };
    let blog = NewBlog {
        title: form.title,
        content: form.content,
        author: form.author,
        date: chrono::Local::now().naive_local().trunc_subsecs(0),
        image_url,
    };
    let blogs_id = BlogService::create(&state.pool, &blog).await?;
    Ok(message_with(StatusCode::CREATED, "Blog added", BlogCreated { blogs_id }))
}

#[utoipa::path(
    get,
    path = "/blogs",
    tag = "blogs",
    responses((status = 200, description = "All blog posts", body = Vec<Blog>))
)]
pub async fn get_blogs(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, AppError> {
    Ok(Json(BlogService::list(&state.pool).await?))
}

#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "blogs",
    params(("id" = i32, Path, description = "Blog id")),
    responses(
        (status = 200, description = "The blog post", body = Blog),
        (status = 404, description = "Blog not found")
    )
)]
pub async fn get_blog_by_id(
    State(state): State<AppState>,
    Path(blogs_id): Path<i32>,
) -> Result<Json<Blog>, AppError> {
    let blog = BlogService::get(&state.pool, blogs_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))?;
    Ok(Json(blog))
}
