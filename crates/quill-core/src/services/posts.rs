//! Post access controller.
//!
//! Every operation runs the same pipeline: check that the requester is
//! active, validate the raw request input, then make exactly one repository
//! call whose result is returned unchanged. Nothing is written for a request
//! that fails a check.

use crate::domain::{Post, Requester};
use crate::error::DomainError;
use crate::ports::PostRepository;

fn ensure_active(requester: &Requester) -> Result<(), DomainError> {
    if requester.status.is_active() {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

fn decode_post(body: &[u8]) -> Result<Post, DomainError> {
    serde_json::from_slice(body).map_err(|e| DomainError::InvalidBody(e.to_string()))
}

/// Route ids that do not parse as a base-10 `i64` are treated as missing routes.
fn parse_id(raw_id: &str) -> Result<i64, DomainError> {
    raw_id.parse().map_err(|_| DomainError::NotFound)
}

/// Create a post authored by the requester.
///
/// Any `author_id` supplied in the body is discarded.
pub async fn create(
    repo: &dyn PostRepository,
    requester: &Requester,
    body: &[u8],
) -> Result<Post, DomainError> {
    ensure_active(requester)?;

    let mut post = decode_post(body)?;
    post.author_id = requester.id;

    Ok(repo.create(post).await?)
}

/// Fetch one of the requester's posts by its raw route id.
pub async fn get_one(
    repo: &dyn PostRepository,
    requester: &Requester,
    raw_id: &str,
) -> Result<Post, DomainError> {
    ensure_active(requester)?;

    let id = parse_id(raw_id)?;
    Ok(repo.get_for_user_by_id(requester.id, id).await?)
}

/// List every post owned by the requester.
pub async fn get_list(
    repo: &dyn PostRepository,
    requester: &Requester,
) -> Result<Vec<Post>, DomainError> {
    ensure_active(requester)?;

    Ok(repo.get_for_user(requester.id).await?)
}

/// Update a post. The body's `author_id` must name the requester; the post is
/// handed to the repository exactly as decoded.
pub async fn update(
    repo: &dyn PostRepository,
    requester: &Requester,
    body: &[u8],
) -> Result<Post, DomainError> {
    ensure_active(requester)?;

    let post = decode_post(body)?;
    if post.author_id != requester.id {
        return Err(DomainError::Unauthorized);
    }

    Ok(repo.update(post).await?)
}

/// Delete one of the requester's posts by its raw route id.
pub async fn delete(
    repo: &dyn PostRepository,
    requester: &Requester,
    raw_id: &str,
) -> Result<(), DomainError> {
    ensure_active(requester)?;

    let id = parse_id(raw_id)?;
    Ok(repo.delete_for_user(requester.id, id).await?)
}
