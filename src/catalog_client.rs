use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::configuration::{Locale, Settings};
use crate::content_api::wire::{ChapterResponse, DetailResponse, SearchResponse};
use crate::content_api::{self, HttpTransport, Transport};
use crate::error::{CatalogError, InputKind, NetworkError, Result};
use crate::messages::{Messages, UNKNOWN_CREATOR};
use crate::models::{ChapterContent, ChapterRef, ComicDetail, ComicSummary};

pub const PLACEHOLDER_PAGE_COUNT: usize = 4;

/// Page images shown when a chapter cannot be fetched.
pub fn placeholder_pages() -> Vec<String> {
    (1..=PLACEHOLDER_PAGE_COUNT)
        .map(|i| format!("https://picsum.photos/800/1200?random={i}"))
        .collect()
}

/// A value that is always usable, plus the failure that forced a fallback if there was one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub value: T,
    pub error: Option<NetworkError>,
}

impl<T> Fetched<T> {
    fn fresh(value: T) -> Self {
        Self { value, error: None }
    }

    fn degraded(value: T, error: NetworkError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

pub struct CatalogClient<T> {
    transport: T,
    messages: &'static Messages,
}

impl CatalogClient<HttpTransport> {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            HttpTransport::new(settings.api_base_url.clone()),
            settings.locale,
        )
    }
}

impl<T: Transport> CatalogClient<T> {
    pub fn new(transport: T, locale: Locale) -> Self {
        Self {
            transport,
            messages: Messages::for_locale(locale),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    /// Search the catalog. Blank queries are rejected without a request.
    pub async fn search(&self, query: &str) -> Result<Vec<ComicSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::InvalidInput(InputKind::SearchQuery));
        }

        let response: SearchResponse = self
            .get(content_api::SEARCH_PATH, &[("q", query)])
            .await?;
        let total = response.data.len();
        let results: Vec<ComicSummary> = response
            .data
            .into_iter()
            .filter_map(ComicSummary::from_raw)
            .collect();
        debug!("search {:?}: {} results, {} kept", query, total, results.len());

        Ok(results)
    }

    /// Fetch the detail page of a comic.
    ///
    /// Only a missing link is an `Err`. Network failures yield a placeholder detail
    /// with the error attached so the screen stays usable.
    pub async fn fetch_detail(&self, processed_link: &str) -> Result<Fetched<ComicDetail>> {
        let link = processed_link.strip_prefix('/').unwrap_or(processed_link);
        if link.trim().is_empty() {
            return Err(CatalogError::InvalidInput(InputKind::ComicLink));
        }

        let detail = match self
            .get::<DetailResponse>(&content_api::detail_path(link), &[])
            .await
        {
            Ok(response) => Fetched::fresh(ComicDetail {
                synopsis: response
                    .synopsis
                    .unwrap_or_else(|| self.messages.synopsis_unavailable.to_owned()),
                creator: response
                    .creator
                    .unwrap_or_else(|| UNKNOWN_CREATOR.to_owned()),
                chapters: ChapterRef::collect(response.chapters),
            }),
            Err(e) => {
                warn!("Detail for {} unavailable, using placeholder: {}", link, e);
                Fetched::degraded(self.degraded_detail(), e)
            }
        };

        Ok(detail)
    }

    /// Fetch the pages of a chapter, falling back to placeholder pages on network failure.
    pub async fn fetch_chapter_content(&self, chapter_link: &str) -> Result<Fetched<ChapterContent>> {
        if chapter_link.trim().is_empty() {
            return Err(CatalogError::InvalidInput(InputKind::ChapterLink));
        }

        let content = match self
            .get::<ChapterResponse>(&content_api::chapter_path(chapter_link), &[])
            .await
        {
            Ok(response) => Fetched::fresh(ChapterContent {
                images: response.images,
                chapters: ChapterRef::collect(response.chapters),
            }),
            Err(e) => {
                warn!("Pages for {} unavailable, using placeholders: {}", chapter_link, e);
                Fetched::degraded(
                    ChapterContent {
                        images: placeholder_pages(),
                        chapters: Vec::new(),
                    },
                    e,
                )
            }
        };

        Ok(content)
    }

    fn degraded_detail(&self) -> ComicDetail {
        ComicDetail {
            synopsis: self.messages.synopsis_unavailable.to_owned(),
            creator: UNKNOWN_CREATOR.to_owned(),
            chapters: Vec::new(),
        }
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<R, NetworkError> {
        let body: Value = self.transport.get_json(path, query).await?;
        serde_json::from_value(body).map_err(|e| NetworkError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_api::transport::fake::FakeTransport;
    use serde_json::json;

    fn client(transport: FakeTransport) -> CatalogClient<FakeTransport> {
        CatalogClient::new(transport, Locale::En)
    }

    #[tokio::test]
    async fn search_slugs_every_result() {
        let transport = FakeTransport::new().respond(
            "comic/search?q=naruto",
            json!({ "data": [
                { "title": "Naruto", "thumbnail": "https://img.test/n.jpg", "type": "Manga",
                  "genre": "Action", "href": "/detail-komik/naruto/" },
                { "title": "Naruto: Shippuden", "href": "/detail-komik/naruto-shippuden/" },
                { "thumbnail": "https://img.test/untitled.jpg" }
            ]}),
        );
        let client = client(transport);

        let results = client.search("  naruto ").await.unwrap();

        let slugs: Vec<&str> = results.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(vec!["naruto", "naruto-shippuden"], slugs);
        assert_eq!(Some("Manga".to_string()), results[0].type_label);
        assert_eq!("/detail-komik/naruto/", results[0].source_href);
    }

    #[tokio::test]
    async fn blank_search_issues_no_request() {
        let client = client(FakeTransport::new());

        assert_eq!(
            Err(CatalogError::InvalidInput(InputKind::SearchQuery)),
            client.search(" \t ").await
        );
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn search_failure_is_a_network_error() {
        let transport = FakeTransport::new().fail(
            "comic/search?q=x",
            NetworkError::Transport("connection refused".into()),
        );
        let client = client(transport);

        assert!(matches!(
            client.search("x").await,
            Err(CatalogError::Network(NetworkError::Transport(_)))
        ));
    }

    #[tokio::test]
    async fn empty_processed_link_issues_no_request() {
        let client = client(FakeTransport::new());

        assert_eq!(
            Err(CatalogError::InvalidInput(InputKind::ComicLink)),
            client.fetch_detail("").await
        );
        assert_eq!(
            Err(CatalogError::InvalidInput(InputKind::ComicLink)),
            client.fetch_detail("/").await
        );
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn detail_strips_leading_separator_and_fills_defaults() {
        let transport = FakeTransport::new().respond(
            "comic/comic/naruto/",
            json!({ "chapters": [{ "chapter": 2, "link": "naruto-2" }, { "chapter": "1", "link": "naruto-1" }] }),
        );
        let client = client(transport);

        let detail = client.fetch_detail("/naruto/").await.unwrap();

        assert!(!detail.is_degraded());
        assert_eq!("Synopsis not available.", detail.value.synopsis);
        assert_eq!("Unknown", detail.value.creator);
        assert_eq!("2", detail.value.chapters[0].chapter_number);
        assert_eq!(vec!["comic/comic/naruto/"], client.transport().requests());
    }

    #[tokio::test]
    async fn detail_degrades_on_transport_failure() {
        let client = client(FakeTransport::new().fail(
            "comic/comic/naruto",
            NetworkError::Transport("timed out".into()),
        ));

        let detail = client.fetch_detail("naruto").await.unwrap();

        assert_eq!(
            ComicDetail {
                synopsis: "Synopsis not available.".into(),
                creator: "Unknown".into(),
                chapters: vec![],
            },
            detail.value
        );
        assert_eq!(Some(NetworkError::Transport("timed out".into())), detail.error);
    }

    #[tokio::test]
    async fn chapter_failure_yields_four_placeholder_pages() {
        let client = client(FakeTransport::new());

        let content = client.fetch_chapter_content("naruto-1").await.unwrap();

        assert!(content.is_degraded());
        assert_eq!(PLACEHOLDER_PAGE_COUNT, content.value.images.len());
        assert_eq!("https://picsum.photos/800/1200?random=4", content.value.images[3]);
        assert!(content.value.chapters.is_empty());
    }

    #[tokio::test]
    async fn chapter_content_keeps_page_order() {
        let transport = FakeTransport::new().respond(
            "comic/chapter/naruto-1",
            json!({ "images": ["p1", "p2", "p3"], "chapters": [{ "chapter": "1", "link": "naruto-1" }] }),
        );
        let client = client(transport);

        let content = client.fetch_chapter_content("naruto-1").await.unwrap();

        assert_eq!(vec!["p1", "p2", "p3"], content.value.images);
        assert_eq!(1, content.value.chapters.len());
    }

    #[tokio::test]
    async fn missing_chapter_link_is_invalid_input() {
        let client = client(FakeTransport::new());

        assert_eq!(
            Err(CatalogError::InvalidInput(InputKind::ChapterLink)),
            client.fetch_chapter_content("").await
        );
        assert!(client.transport().requests().is_empty());
    }
}
