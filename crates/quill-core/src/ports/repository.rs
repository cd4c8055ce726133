use async_trait::async_trait;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository. Reads and deletes are scoped to the owning user.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post. The incoming id is ignored; storage assigns one.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Fetch one of `user_id`'s posts. Posts owned by anyone else are `NotFound`.
    async fn get_for_user_by_id(&self, user_id: i64, post_id: i64) -> Result<Post, RepoError>;

    /// All posts owned by `user_id`, oldest first.
    async fn get_for_user(&self, user_id: i64) -> Result<Vec<Post>, RepoError>;

    /// Update title and body of the post matching both `id` and `author_id`.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    async fn delete_for_user(&self, user_id: i64, post_id: i64) -> Result<(), RepoError>;
}
