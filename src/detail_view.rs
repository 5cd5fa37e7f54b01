use log::info;

use crate::catalog_client::CatalogClient;
use crate::chapter_resolver::resolve_index;
use crate::content_api::Transport;
use crate::error::{CatalogError, Result};
use crate::models::{ComicDetail, ComicSummary};
use crate::navigation::{DetailHandoff, ReadHandoff, Route};

/// Detail screen of one comic, built from the search handoff plus a detail fetch.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub comic: ComicSummary,
    pub detail: ComicDetail,
    /// Message for a degraded detail.
    pub notice: Option<String>,
}

impl DetailView {
    /// Fails with `InvalidInput` before any request when the handoff is missing.
    pub async fn open<T: Transport>(
        client: &CatalogClient<T>,
        handoff: Option<DetailHandoff>,
    ) -> Result<Self> {
        let handoff = DetailHandoff::accept(handoff)?;
        info!("Opening {}", handoff.route());

        let fetched = client.fetch_detail(&handoff.processed_link).await?;
        Ok(Self {
            comic: handoff.comic,
            detail: fetched.value,
            notice: fetched.error.map(|e| e.user_message()),
        })
    }

    pub fn chapter_handoff(&self, index: usize) -> Option<(Route, ReadHandoff)> {
        let chapter = self.detail.chapters.get(index)?;
        let route = Route::Read {
            slug: self.comic.slug.clone(),
            chapter_number: chapter.chapter_number.clone(),
        };
        Some((route, ReadHandoff::for_chapter(&self.comic.title, chapter)))
    }

    /// The "read" action: first chapter of the list.
    pub fn read_first(&self) -> Result<(Route, ReadHandoff)> {
        self.chapter_handoff(0).ok_or(CatalogError::NoChapters)
    }

    /// Handoff for a chapter picked by number, or the first chapter when it is not listed.
    pub fn read_chapter(&self, chapter_number: &str) -> Result<(Route, ReadHandoff)> {
        let index = resolve_index(&self.detail.chapters, chapter_number);
        self.chapter_handoff(index).ok_or(CatalogError::NoChapters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Locale;
    use crate::content_api::transport::fake::FakeTransport;
    use crate::error::{InputKind, NetworkError};
    use serde_json::json;

    fn summary() -> ComicSummary {
        ComicSummary {
            title: "Naruto".into(),
            thumbnail_url: None,
            type_label: Some("Manga".into()),
            description: None,
            genre_label: None,
            source_href: "/detail-komik/naruto/".into(),
            slug: "naruto".into(),
        }
    }

    #[tokio::test]
    async fn missing_handoff_stops_before_request() {
        let client = CatalogClient::new(FakeTransport::new(), Locale::En);

        let err = DetailView::open(&client, None).await.unwrap_err();

        assert_eq!(CatalogError::InvalidInput(InputKind::ComicLink), err);
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn read_first_hands_off_first_chapter() {
        let client = CatalogClient::new(
            FakeTransport::new().respond(
                "comic/comic/naruto/",
                json!({
                    "synopsis": "A ninja.",
                    "creator": "Kishimoto",
                    "chapters": [{ "chapter": "700", "link": "naruto-700" }, { "chapter": "699", "link": "naruto-699" }]
                }),
            ),
            Locale::En,
        );
        let handoff = DetailHandoff::from_summary(summary());

        let view = DetailView::open(&client, Some(handoff)).await.unwrap();
        let (route, read) = view.read_first().unwrap();

        assert_eq!("/read-comic/naruto/chapter-700", route.to_string());
        assert_eq!("naruto-700", read.chapter_link);
        assert_eq!("Naruto", read.comic_title);
        assert_eq!(Some("700".to_string()), read.chapter_number);
        assert_eq!("naruto-699", view.read_chapter("699").unwrap().1.chapter_link);
    }

    #[tokio::test]
    async fn degraded_detail_has_nothing_to_read() {
        let client = CatalogClient::new(
            FakeTransport::new().fail("comic/comic/naruto/", NetworkError::Empty),
            Locale::Id,
        );

        let view = DetailView::open(&client, Some(DetailHandoff::from_summary(summary())))
            .await
            .unwrap();

        assert_eq!("Synopsis tidak tersedia.", view.detail.synopsis);
        assert_eq!(Some("response contained no data".to_string()), view.notice);
        assert_eq!(Err(CatalogError::NoChapters), view.read_first());
    }
}
