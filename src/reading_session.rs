use log::{info, warn};

use crate::catalog_client::CatalogClient;
use crate::chapter_resolver::resolve_index;
use crate::content_api::Transport;
use crate::error::CatalogError;
use crate::models::ChapterRef;
use crate::navigation::{ReadHandoff, Route};
use crate::progress::{ProgressSubscription, ReadingProgress, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Ready(ReadyChapter),
    /// Terminal. Only reached when the chapter link never arrived.
    Failed(CatalogError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyChapter {
    /// Page images in reading order; placeholders when the fetch failed.
    pub images: Vec<String>,
    pub chapters: Vec<ChapterRef>,
    pub current_chapter_index: usize,
    pub progress: ReadingProgress,
    /// Set when the pages are placeholders standing in for a failed fetch.
    pub notice: Option<String>,
}

/// An in-progress read of one chapter.
///
/// Created in `Loading`; `load` settles it into `Ready` or `Failed` exactly once.
/// Dropping an unfinished `load` future leaves the session untouched.
#[derive(Debug)]
pub struct ReadingSession {
    handoff: Option<ReadHandoff>,
    state: SessionState,
}

impl ReadingSession {
    pub fn new(handoff: Option<ReadHandoff>) -> Self {
        Self {
            handoff,
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub async fn load<T: Transport>(&mut self, client: &CatalogClient<T>) -> &SessionState {
        if !matches!(self.state, SessionState::Loading) {
            return &self.state;
        }

        let handoff = match ReadHandoff::accept(self.handoff.clone()) {
            Ok(handoff) => handoff,
            Err(e) => {
                warn!("Cannot open chapter: {}", e);
                self.state = SessionState::Failed(e);
                return &self.state;
            }
        };

        self.state = match client.fetch_chapter_content(&handoff.chapter_link).await {
            Ok(fetched) => {
                let target = handoff.chapter_number.as_deref().unwrap_or_default();
                let current_chapter_index = resolve_index(&fetched.value.chapters, target);
                info!(
                    "Reading {} ({} pages)",
                    handoff.chapter_link,
                    fetched.value.images.len()
                );
                SessionState::Ready(ReadyChapter {
                    images: fetched.value.images,
                    chapters: fetched.value.chapters,
                    current_chapter_index,
                    progress: ReadingProgress::default(),
                    notice: fetched.error.map(|e| e.user_message()),
                })
            }
            Err(e) => SessionState::Failed(e),
        };
        &self.state
    }

    /// Recompute read progress. Ignored unless the chapter is `Ready`.
    pub fn on_scroll(&mut self, viewport: &Viewport) -> Option<ReadingProgress> {
        self.set_progress(ReadingProgress::from_viewport(viewport))
    }

    /// Wait for the next scroll change on `subscription` and apply it.
    pub async fn follow(
        &mut self,
        subscription: &mut ProgressSubscription,
    ) -> Option<ReadingProgress> {
        let progress = subscription.changed().await?;
        self.set_progress(progress)
    }

    fn set_progress(&mut self, progress: ReadingProgress) -> Option<ReadingProgress> {
        match &mut self.state {
            SessionState::Ready(ready) => {
                ready.progress = progress;
                Some(progress)
            }
            _ => None,
        }
    }

    /// `"{title} - Chapter {number}"`, or `None` without a handoff.
    pub fn heading(&self) -> Option<String> {
        let handoff = self.handoff.as_ref()?;
        Some(format!(
            "{} - Chapter {}",
            handoff.comic_title,
            handoff.chapter_number.as_deref().unwrap_or("Unknown")
        ))
    }

    /// Leave the reader for the detail screen of the same comic.
    pub fn handle_back(slug: &str) -> Route {
        Route::Detail {
            slug: slug.to_owned(),
        }
    }
}
