use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use quill_core::domain::{Post, User, UserStatus};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::{post, user};
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn post_model(id: i64, author_id: i64, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        author_id,
        title: title.to_owned(),
        body: "Content".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_get_for_user_by_id_returns_owned_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(42, 7, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo.get_for_user_by_id(7, 42).await.unwrap();

    assert_eq!(post.id, 42);
    assert_eq!(post.author_id, 7);
    assert_eq!(post.title, "Test Post");
}

#[tokio::test]
async fn test_get_for_user_by_id_missing_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo.get_for_user_by_id(7, 42).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_get_for_user_lists_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(1, 7, "first"), post_model(2, 7, "second")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.get_for_user(7).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "first");
    assert_eq!(posts[1].title, "second");
}

#[tokio::test]
async fn test_create_returns_stored_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(10, 7, "Fresh")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let created = repo
        .create(Post::new(7, "Fresh".to_string(), "Content".to_string()))
        .await
        .unwrap();

    assert_eq!(created.id, 10);
    assert_eq!(created.author_id, 7);
}

#[tokio::test]
async fn test_update_of_foreign_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo
        .update(Post {
            id: 42,
            ..Post::new(7, "Edited".to_string(), String::new())
        })
        .await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_for_user() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.delete_for_user(7, 42).await.is_ok());
    assert!(matches!(
        repo.delete_for_user(7, 42).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_find_user_by_id_maps_status() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: 7,
            email: "jane@example.com".to_owned(),
            password_hash: "hash".to_owned(),
            status: -1,
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let user: Option<User> = repo.find_by_id(7).await.unwrap();

    let user = user.unwrap();
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.status, UserStatus::Disabled);
}
