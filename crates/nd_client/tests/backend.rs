use chrono::{Duration, NaiveDate, TimeZone, Utc};
use nd_client::{NewsClient, NewsSource, Session};
use nd_core::shell::{render, Screen};
use nd_core::{Action, Article, Config, Media, PageRequest};
use nd_web::{create_app, AppState, ArticleStore};
use std::sync::Arc;

fn fixture(count: usize) -> Vec<Article> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| Article {
            guid: format!("g{}", i),
            title: format!("Headline {}", i),
            description: format!("Summary {}", i),
            pub_date: start + Duration::hours(i as i64),
            link: format!("https://news.example.com/{}", i),
            creator: (i == 0).then(|| "Kashmir Hill".to_string()),
            categories: vec![],
            media: (i % 3 == 0).then(|| Media {
                url: format!("https://img.example.com/{}.jpg", i),
                width: Some(151),
                height: Some(151),
            }),
        })
        .collect()
}

async fn start_backend(count: usize) -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_app(AppState::new(ArticleStore::new(fixture(count))));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Config::new(&format!("http://{}", addr)).unwrap()
}

#[tokio::test]
async fn test_client_reads_backend_pages() {
    let config = start_backend(23).await;
    let client = NewsClient::new(&config).unwrap();

    let first = client.fetch_page(&PageRequest::for_page(0)).await.unwrap();
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.content.len(), 10);
    assert_eq!(first.content[0].guid, "g22");

    let last = client.fetch_page(&PageRequest::for_page(2)).await.unwrap();
    assert_eq!(last.content.len(), 3);
    assert_eq!(last.content[2].guid, "g0");
    assert_eq!(last.content[2].creator.as_deref(), Some("Kashmir Hill"));
}

#[tokio::test]
async fn test_session_pages_through_backend() {
    let config = start_backend(15).await;
    let client = Arc::new(NewsClient::new(&config).unwrap());
    let mut session = Session::new(client);
    let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

    session.dispatch(Action::Mount);
    session.settle().await;

    match render(session.state(), today) {
        Screen::Ready { pagination, articles, .. } => {
            assert_eq!(pagination.label, "Page 1 of 2");
            assert!(!pagination.previous_enabled);
            assert!(pagination.next_enabled);
            assert_eq!(articles.len(), 10);
        }
        other => panic!("unexpected screen: {:?}", other),
    }

    session.dispatch(Action::Next);
    session.settle().await;

    match render(session.state(), today) {
        Screen::Ready { pagination, articles, .. } => {
            assert_eq!(pagination.label, "Page 2 of 2");
            assert!(pagination.previous_enabled);
            assert!(!pagination.next_enabled);
            assert_eq!(articles.len(), 5);
            assert_eq!(articles[4].byline, "BY Kashmir Hill");
            assert!(articles[4].thumbnail.is_some());
            assert_eq!(articles[3].byline, "BY STAFF WRITER");
        }
        other => panic!("unexpected screen: {:?}", other),
    }
}
