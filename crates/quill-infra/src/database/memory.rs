//! In-memory repositories - used when no database is configured.
//!
//! Data is lost on process restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory post repository keyed by post id.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let now = Utc::now();
        let post = Post {
            id: table.allocate_id(),
            created_at: now,
            updated_at: now,
            ..post
        };
        table.rows.insert(post.id, post.clone());

        Ok(post)
    }

    async fn get_for_user_by_id(&self, user_id: i64, post_id: i64) -> Result<Post, RepoError> {
        let table = self.table.read().await;

        table
            .rows
            .get(&post_id)
            .filter(|p| p.author_id == user_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn get_for_user(&self, user_id: i64) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;

        Ok(table
            .rows
            .values()
            .filter(|p| p.author_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let stored = table
            .rows
            .get_mut(&post.id)
            .filter(|p| p.author_id == post.author_id)
            .ok_or(RepoError::NotFound)?;

        stored.title = post.title;
        stored.body = post.body;
        stored.updated_at = Utc::now();

        Ok(stored.clone())
    }

    async fn delete_for_user(&self, user_id: i64, post_id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;

        let owned = table
            .rows
            .get(&post_id)
            .is_some_and(|p| p.author_id == user_id);
        if !owned {
            return Err(RepoError::NotFound);
        }

        table.rows.remove(&post_id);
        Ok(())
    }
}

/// In-memory user repository keyed by user id.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, i64> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut table = self.table.write().await;

        let email_taken = table
            .rows
            .values()
            .any(|u| u.id != user.id && u.email == user.email);
        if email_taken {
            return Err(RepoError::Constraint("Email already registered".to_string()));
        }

        let user = if user.id == 0 {
            User {
                id: table.allocate_id(),
                ..user
            }
        } else if table.rows.contains_key(&user.id) {
            User {
                updated_at: Utc::now(),
                ..user
            }
        } else {
            return Err(RepoError::NotFound);
        };
        table.rows.insert(user.id, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;

        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use quill_core::domain::UserStatus;

    use super::*;

    fn draft(author_id: i64, title: &str) -> Post {
        Post::new(author_id, title.to_string(), "body".to_string())
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create(draft(7, "a")).await.unwrap();
        let second = repo.create(Post { id: 99, ..draft(7, "b") }).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_reads_are_scoped_to_owner() {
        let repo = InMemoryPostRepository::new();
        let mine = repo.create(draft(7, "mine")).await.unwrap();
        let theirs = repo.create(draft(8, "theirs")).await.unwrap();

        assert_eq!(repo.get_for_user_by_id(7, mine.id).await.unwrap(), mine);
        assert!(matches!(
            repo.get_for_user_by_id(7, theirs.id).await,
            Err(RepoError::NotFound)
        ));

        let listed = repo.get_for_user(7).await.unwrap();
        assert_eq!(listed, vec![mine]);
    }

    #[tokio::test]
    async fn test_update_keeps_owner_and_creation_time() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(draft(7, "before")).await.unwrap();

        let updated = repo
            .update(Post {
                title: "after".to_string(),
                ..created.clone()
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "after");
        assert_eq!(updated.author_id, 7);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_of_foreign_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(draft(7, "before")).await.unwrap();

        let result = repo
            .update(Post {
                author_id: 8,
                ..created
            })
            .await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_is_scoped_to_owner() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(draft(7, "doomed")).await.unwrap();

        assert!(matches!(
            repo.delete_for_user(8, created.id).await,
            Err(RepoError::NotFound)
        ));
        repo.delete_for_user(7, created.id).await.unwrap();
        assert!(matches!(
            repo.delete_for_user(7, created.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_user_save_and_lookup() {
        let repo = InMemoryUserRepository::new();

        let saved = repo
            .save(User::new(
                "jane@example.com".to_string(),
                "hash".to_string(),
                UserStatus::Active,
            ))
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        let found = repo.find_by_email("jane@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(1));
        assert!(repo.find_by_id(1).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_user_duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        let user = User::new(
            "jane@example.com".to_string(),
            "hash".to_string(),
            UserStatus::Active,
        );

        repo.save(user.clone()).await.unwrap();

        assert!(matches!(
            repo.save(user).await,
            Err(RepoError::Constraint(_))
        ));
    }
}
