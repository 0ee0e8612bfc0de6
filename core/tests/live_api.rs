//! Live calls against the public JSONPlaceholder API.
//!
//! These need network access and are ignored by default:
//! `cargo test -p posts-core --test live_api -- --ignored`.
//! `POSTS_API_BASE_URL` / `POSTS_API_TIMEOUT_SECS` override the target.

use std::collections::HashSet;

use posts_core::{ClientConfig, Post, PostsService, UreqTransport};

fn service() -> PostsService<UreqTransport> {
    let config = ClientConfig::from_env().unwrap();
    PostsService::live(&config)
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access"]
async fn get_all_posts() {
    let posts = service().list_posts().await.unwrap();

    assert_eq!(posts.len(), 100, "the API has exactly 100 posts");
    let ids: HashSet<u32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), posts.len());
    assert!(posts.iter().all(|p| p.id > 0), "all posts should have ids");
    assert!(posts.iter().all(|p| p.user_id > 0), "all posts should have user ids");
    assert!(posts.iter().all(|p| !p.title.is_empty()), "all posts should have titles");
    assert!(posts.iter().all(|p| !p.body.is_empty()), "all posts should have bodies");
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access"]
async fn get_post() {
    let post = service().get_post(1).await.unwrap();

    assert_eq!(post.user_id, 1);
    assert_eq!(post.id, 1);
    assert_eq!(
        post.title,
        "sunt aut facere repellat provident occaecati excepturi optio reprehenderit"
    );
    assert_eq!(
        post.body,
        "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum\nreprehenderit molestiae ut ut quas totam\nnostrum rerum est autem sunt rem eveniet architecto"
    );
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access"]
async fn create_post() {
    let draft = Post::draft(
        1,
        "new post test",
        "this is a test post targeting the POST /posts endpoint",
    );

    let created = service().create_post(&draft).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.user_id, 1);
    assert_eq!(created.title, "new post test");
    assert_eq!(created.body, "this is a test post targeting the POST /posts endpoint");
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access"]
async fn update_post() {
    let draft = Post::draft(
        1,
        "updated post title",
        "this is a test put targeting the PUT /posts/{id} endpoint",
    );

    let updated = service().update_post(1, &draft).await.unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.user_id, 1);
    assert_eq!(updated.title, "updated post title");
    assert_eq!(updated.body, "this is a test put targeting the PUT /posts/{id} endpoint");
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access"]
async fn delete_post() {
    assert!(service().delete_post(1).await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access"]
async fn get_invalid_post() {
    let err = service().get_post(101).await.unwrap_err();

    assert!(err.is_not_found(), "{err:?}");
}
