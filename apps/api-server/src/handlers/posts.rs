//! Post handlers.
//!
//! Bodies arrive as raw bytes and ids as raw path segments: decoding and
//! parsing failures are classified by the post service, not by extractors.

use actix_web::{HttpResponse, web};

use quill_core::services::posts;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let post = posts::create(state.posts.as_ref(), &identity.requester(), &body).await?;
    tracing::debug!(post_id = post.id, author_id = post.author_id, "Post created");

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    identity: Identity,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = posts::get_one(state.posts.as_ref(), &identity.requester(), id.as_str()).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts
pub async fn get_posts(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let posts = posts::get_list(state.posts.as_ref(), &identity.requester()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// PUT /api/posts
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let post = posts::update(state.posts.as_ref(), &identity.requester(), &body).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    posts::delete(state.posts.as_ref(), &identity.requester(), id.as_str()).await?;
    tracing::debug!(post_id = %id, user_id = identity.user_id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
