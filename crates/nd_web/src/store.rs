use nd_core::{Article, Error, PageRequest, PageResult, Result, SortDirection, SortSpec};
use std::cmp::Ordering;
use std::path::Path;
use tokio::sync::RwLock;

pub struct ArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }

    /// Loads a JSON array of articles.
    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read(path).await?;
        let articles: Vec<Article> = serde_json::from_slice(&raw)
            .map_err(|e| Error::Config(format!("Invalid fixture {}: {}", path.display(), e)))?;
        tracing::info!("Loaded {} articles from {}", articles.len(), path.display());
        Ok(Self::new(articles))
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn find(&self, guid: &str) -> Option<Article> {
        self.articles
            .read()
            .await
            .iter()
            .find(|a| a.guid == guid)
            .cloned()
    }

    pub async fn page(&self, request: &PageRequest) -> PageResult {
        let mut articles = self.articles.read().await.clone();
        articles.sort_by(|a, b| compare(a, b, &request.sort));

        let total = articles.len() as u64;
        let size = request.size.max(1) as u64;
        let total_pages = total.div_ceil(size) as u32;
        let offset = request.page as u64 * size;

        let content = if offset >= total {
            if total > 0 {
                tracing::info!("Requested page {} exceeds available articles", request.page);
            }
            Vec::new()
        } else {
            articles
                .into_iter()
                .skip(offset as usize)
                .take(size as usize)
                .collect()
        };

        tracing::debug!("Returning page {} with {} articles", request.page, content.len());
        PageResult {
            content,
            total_pages,
            total_elements: Some(total),
            number: Some(request.page),
            size: Some(request.size),
        }
    }
}

/// Unknown sort fields order by publication date.
fn compare(a: &Article, b: &Article, sort: &SortSpec) -> Ordering {
    let ordering = match sort.field.as_str() {
        "title" => a.title.cmp(&b.title),
        "creator" => a
            .creator
            .as_deref()
            .unwrap_or_default()
            .cmp(b.creator.as_deref().unwrap_or_default()),
        _ => a.pub_date.cmp(&b.pub_date),
    };
    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use std::io::Write;

    /// `count` articles, `n0` oldest, one day apart.
    pub(crate) fn articles(count: usize) -> Vec<Article> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        (0..count)
            .map(|i| Article {
                guid: format!("n{}", i),
                title: format!("Title {:02}", count - i),
                description: format!("Story {}", i),
                pub_date: start + Duration::days(i as i64),
                link: format!("https://news.example.com/{}", i),
                creator: if i % 2 == 0 { Some(format!("Writer {}", i)) } else { None },
                categories: vec!["Technology".to_string()],
                media: None,
            })
            .collect()
    }

    fn guids(page: &PageResult) -> Vec<&str> {
        page.content.iter().map(|a| a.guid.as_str()).collect()
    }

    #[tokio::test]
    async fn test_default_page_is_newest_first() {
        let store = ArticleStore::new(articles(25));
        let page = store.page(&PageRequest::for_page(0)).await;

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, Some(25));
        assert_eq!(page.content.len(), 10);
        assert_eq!(page.content[0].guid, "n24");
        assert_eq!(page.content[9].guid, "n15");
    }

    #[tokio::test]
    async fn test_last_and_past_end_pages() {
        let store = ArticleStore::new(articles(25));

        let last = store.page(&PageRequest::for_page(2)).await;
        assert_eq!(guids(&last), vec!["n4", "n3", "n2", "n1", "n0"]);

        let past = store.page(&PageRequest::for_page(9)).await;
        assert!(past.content.is_empty());
        assert_eq!(past.total_pages, 3);
    }

    #[tokio::test]
    async fn test_sort_fields() {
        let store = ArticleStore::new(articles(3));

        let by_title = PageRequest::new(0, 10, "title,asc".parse().unwrap()).unwrap();
        assert_eq!(guids(&store.page(&by_title).await), vec!["n2", "n1", "n0"]);

        let by_creator = PageRequest::new(0, 10, "creator,desc".parse().unwrap()).unwrap();
        assert_eq!(guids(&store.page(&by_creator).await), vec!["n2", "n0", "n1"]);

        let unknown = PageRequest::new(0, 10, "popularity,asc".parse().unwrap()).unwrap();
        assert_eq!(guids(&store.page(&unknown).await), vec!["n0", "n1", "n2"]);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let page = ArticleStore::new(vec![]).page(&PageRequest::default()).await;
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_find() {
        let store = ArticleStore::new(articles(2));

        assert_eq!(store.len().await, 2);
        assert_eq!(store.find("n1").await.unwrap().guid, "n1");
        assert!(store.find("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_load_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&articles(4)).unwrap().as_bytes())
            .unwrap();

        let store = ArticleStore::from_json_file(file.path()).await.unwrap();
        assert_eq!(store.len().await, 4);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"{not json").unwrap();
        assert!(matches!(
            ArticleStore::from_json_file(broken.path()).await,
            Err(Error::Config(_))
        ));
    }
}
