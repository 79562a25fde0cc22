mod common;

use chrono::Utc;
use shortlink::AppError;
use shortlink::domain::entities::NewLink;
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::SqliteLinkRepository;

#[tokio::test]
async fn test_create_and_find_link() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(pool.clone());

    let created = repo
        .create(NewLink {
            code: "abc123".to_string(),
            long_url: "https://example.com/a/b".to_string(),
            created_at: Utc::now(),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.code, "abc123");

    let found = repo.find_by_code("abc123").await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_find_missing_code_returns_none() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    let result = repo.find_by_code("zzzzzz").await;

    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_codes_are_case_sensitive() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(pool.clone());

    common::create_test_link(&pool, "AbCdEf", "https://example.com/upper").await;

    assert!(repo.find_by_code("AbCdEf").await.unwrap().is_some());
    assert!(repo.find_by_code("abcdef").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_code_is_store_error() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(pool.clone());

    common::create_test_link(&pool, "dup123", "https://example.com/1").await;

    let result = repo
        .create(NewLink {
            code: "dup123".to_string(),
            long_url: "https://example.com/2".to_string(),
            created_at: Utc::now(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Store(_))));

    let existing = repo.find_by_code("dup123").await.unwrap().unwrap();
    assert_eq!(existing.long_url, "https://example.com/1");
}
