//! End-to-end service tests against a mock content API

mod common;

use common::*;
use mockito::{Matcher, Server, ServerGuard};
use pressfeed::{ContentConfig, ContentService};
use serde_json::json;

async fn service_for(server: &ServerGuard) -> ContentService {
    let config = ContentConfig::builder()
        .api_token("secret_test_token")
        .base_url(server.url())
        .blog_page_id("parent-1")
        .news_database_id("db-1")
        .build()
        .expect("test config builds");
    ContentService::new(config).expect("service builds")
}

#[tokio::test]
async fn test_news_list_follows_cursors_and_sorts_newest_first() {
    let mut server = Server::new_async().await;

    let row = |id: &str, title: &str, date: &str| {
        page(
            id,
            "2024-01-01T00:00:00.000Z",
            json!({
                "Name": title_property(title),
                "Published Date": date_property(date)
            }),
        )
    };

    // First page of results; also asserts the published-only filter and
    // descending date sort ride along in the request body.
    let first = server
        .mock("POST", "/databases/db-1/query")
        .match_body(Matcher::PartialJson(json!({
            "filter": { "property": "Published", "checkbox": { "equals": true } }
        })))
        .with_status(200)
        .with_body(
            paginated(vec![row("r1", "January Story", "2024-01-10")], Some("cursor-2"))
                .to_string(),
        )
        .create_async()
        .await;

    // Follow-up request carrying the cursor; registered last so it takes
    // priority when both mocks match.
    let second = server
        .mock("POST", "/databases/db-1/query")
        .match_body(Matcher::PartialJson(json!({ "start_cursor": "cursor-2" })))
        .with_status(200)
        .with_body(
            paginated(
                vec![
                    row("r2", "February Story", "2024-02-10"),
                    row("r3", "March Story", "2024-03-10"),
                ],
                None,
            )
            .to_string(),
        )
        .create_async()
        .await;

    let service = service_for(&server).await;
    let articles = service.get_news_list().await.expect("list succeeds");

    first.assert_async().await;
    second.assert_async().await;

    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["March Story", "February Story", "January Story"]);
    // List views carry metadata only
    assert!(articles.iter().all(|a| a.content.is_none()));
}

#[tokio::test]
async fn test_news_list_is_served_from_cache_on_second_call() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/databases/db-1/query")
        .with_status(200)
        .with_body(
            paginated(
                vec![page("r1", "2024-01-01T00:00:00.000Z", json!({ "Name": title_property("Only Story") }))],
                None,
            )
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let service = service_for(&server).await;
    let first = service.get_news_list().await.expect("first call");
    let second = service.get_news_list().await.expect("second call");

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].title, second[0].title);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_news_article_attaches_blocks_and_derives_excerpt() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/databases/db-1/query")
        .with_status(200)
        .with_body(
            paginated(
                vec![page("row-1", "2024-01-01T00:00:00.000Z", json!({ "Name": title_property("Hello World") }))],
                None,
            )
            .to_string(),
        )
        .create_async()
        .await;

    // Block listing spans three cursor pages. Cursor-specific mocks are
    // registered after the generic one so they win for their requests.
    server
        .mock("GET", "/blocks/row-1/children")
        .with_status(200)
        .with_body(paginated(vec![paragraph("b1", "Body text.")], Some("c2")).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/blocks/row-1/children")
        .match_query(Matcher::UrlEncoded("start_cursor".into(), "c2".into()))
        .with_status(200)
        .with_body(paginated(vec![paragraph("b2", "More text.")], Some("c3")).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/blocks/row-1/children")
        .match_query(Matcher::UrlEncoded("start_cursor".into(), "c3".into()))
        .with_status(200)
        .with_body(paginated(vec![paragraph("b3", "Final text.")], None).to_string())
        .create_async()
        .await;

    let service = service_for(&server).await;
    let article = service.get_news_article("hello-world").await.expect("article found");

    assert_eq!(article.title, "Hello World");
    assert_eq!(article.slug, "hello-world");
    assert_eq!(article.excerpt, "Body text.");

    // Document order survives pagination exactly
    let block_ids: Vec<&str> = article
        .content
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|b| b.get("id").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(block_ids, vec!["b1", "b2", "b3"]);
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/databases/db-1/query")
        .with_status(200)
        .with_body(
            paginated(
                vec![page("row-1", "2024-01-01T00:00:00.000Z", json!({ "Name": title_property("Hello World") }))],
                None,
            )
            .to_string(),
        )
        .create_async()
        .await;

    let service = service_for(&server).await;
    let err = service.get_news_article("no-such-slug").await.expect_err("should miss");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_missing_source_ids_are_configuration_errors() {
    let server = Server::new_async().await;

    let config = ContentConfig::builder()
        .api_token("secret_test_token")
        .base_url(server.url())
        .build()
        .expect("config builds");
    let service = ContentService::new(config).expect("service builds");

    let err = service.get_posts().await.expect_err("no blog page id");
    assert!(err.is_configuration());

    let err = service.get_news_list().await.expect_err("no news database id");
    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_upstream_failure_degrades_list_to_empty() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/databases/db-1/query")
        .with_status(500)
        .with_body(r#"{"object":"error","message":"boom"}"#)
        .create_async()
        .await;

    let service = service_for(&server).await;
    let articles = service.get_news_list().await.expect("degrades, not errors");
    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_blog_posts_upgrade_child_pages_with_stub_fallback() {
    let mut server = Server::new_async().await;

    let stub = |id: &str, title: &str| {
        json!({
            "object": "block",
            "id": id,
            "type": "child_page",
            "child_page": { "title": title }
        })
    };

    // Parent listing: two child-page stubs plus an unrelated block that
    // must not become a post
    server
        .mock("GET", "/blocks/parent-1/children")
        .with_status(200)
        .with_body(
            paginated(
                vec![
                    stub("child-1", "Upgraded Post"),
                    paragraph("b1", "intro text on the parent page"),
                    stub("child-2", "Stubborn Post"),
                ],
                None,
            )
            .to_string(),
        )
        .create_async()
        .await;

    // child-1 upgrades to a full record with richer properties
    server
        .mock("GET", "/pages/child-1")
        .with_status(200)
        .with_body(
            page(
                "child-1",
                "2024-05-01T00:00:00.000Z",
                json!({
                    "title": title_property("Upgraded Post"),
                    "Published Date": date_property("2024-05-02"),
                    "Tags": multi_select_property(&["rust"])
                }),
            )
            .to_string(),
        )
        .create_async()
        .await;

    // child-2 fails to upgrade; its stub title must still normalize
    server
        .mock("GET", "/pages/child-2")
        .with_status(404)
        .with_body(r#"{"object":"error","status":404}"#)
        .create_async()
        .await;

    let service = service_for(&server).await;
    let posts = service.get_posts().await.expect("posts list");

    assert_eq!(posts.len(), 2);
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert!(titles.contains(&"Upgraded Post"));
    assert!(titles.contains(&"Stubborn Post"));

    let upgraded = posts.iter().find(|p| p.title == "Upgraded Post").expect("upgraded present");
    assert_eq!(upgraded.published_at, "2024-05-02");
    assert_eq!(upgraded.tags, vec!["rust"]);
}

#[tokio::test]
async fn test_single_post_is_cached_after_first_fetch() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/blocks/parent-1/children")
        .with_status(200)
        .with_body(
            paginated(
                vec![json!({
                    "object": "block",
                    "id": "child-1",
                    "type": "child_page",
                    "child_page": { "title": "Hello World" }
                })],
                None,
            )
            .to_string(),
        )
        .create_async()
        .await;

    server
        .mock("GET", "/pages/child-1")
        .with_status(200)
        .with_body(
            page("child-1", "2024-05-01T00:00:00.000Z", json!({ "title": title_property("Hello World") }))
                .to_string(),
        )
        .create_async()
        .await;

    // Full content fetched exactly once; the second call must come from
    // the cache.
    let blocks_mock = server
        .mock("GET", "/blocks/child-1/children")
        .with_status(200)
        .with_body(paginated(vec![paragraph("b1", "Post body.")], None).to_string())
        .expect(1)
        .create_async()
        .await;

    let service = service_for(&server).await;
    let first = service.get_post("hello-world").await.expect("first fetch");
    let second = service.get_post("hello-world").await.expect("cache hit");

    assert_eq!(first.slug, "hello-world");
    assert_eq!(first.excerpt, second.excerpt);
    blocks_mock.assert_async().await;
}
