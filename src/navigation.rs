//! Typed snapshots handed from one screen to the next.
//!
//! A handoff is taken at navigation time and consumed once by the destination.
//! Destinations validate it on entry; a missing handoff means the screen was
//! reached some other way and is rejected as invalid input.

use std::fmt;

use crate::error::{CatalogError, InputKind, Result};
use crate::models::{ChapterRef, ComicSummary};

/// Search result to detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailHandoff {
    pub comic: ComicSummary,
    pub processed_link: String,
}

impl DetailHandoff {
    pub fn from_summary(comic: ComicSummary) -> Self {
        Self {
            processed_link: comic.processed_link(),
            comic,
        }
    }

    pub fn route(&self) -> Route {
        Route::Detail {
            slug: self.comic.slug.clone(),
        }
    }

    pub fn accept(handoff: Option<Self>) -> Result<Self> {
        match handoff {
            Some(h) if !h.processed_link.trim().is_empty() => Ok(h),
            _ => Err(CatalogError::InvalidInput(InputKind::ComicLink)),
        }
    }
}

/// Detail screen to read screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadHandoff {
    pub chapter_link: String,
    pub comic_title: String,
    pub chapter_number: Option<String>,
}

impl ReadHandoff {
    pub fn for_chapter(comic_title: &str, chapter: &ChapterRef) -> Self {
        Self {
            chapter_link: chapter.link.clone(),
            comic_title: comic_title.to_owned(),
            chapter_number: Some(chapter.chapter_number.clone()),
        }
    }

    pub fn accept(handoff: Option<Self>) -> Result<Self> {
        match handoff {
            Some(h) if !h.chapter_link.trim().is_empty() => Ok(h),
            _ => Err(CatalogError::InvalidInput(InputKind::ChapterLink)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Detail { slug: String },
    Read { slug: String, chapter_number: String },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Detail { slug } => write!(f, "/detail-comic/{slug}"),
            Route::Read {
                slug,
                chapter_number,
            } => write!(f, "/read-comic/{slug}/chapter-{chapter_number}"),
        }
    }
}
