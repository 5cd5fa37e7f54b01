use crate::content_api::wire::{RawChapter, RawComic};
use crate::messages::{Messages, COVER_PLACEHOLDER_URL};
use crate::slug::slugify;

/// One search hit. Identity is `slug`; titles that normalize identically collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicSummary {
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub type_label: Option<String>,
    pub description: Option<String>,
    pub genre_label: Option<String>,
    /// API-relative path, opaque to this crate.
    pub source_href: String,
    pub slug: String,
}

impl ComicSummary {
    /// Returns `None` for results without a title.
    pub fn from_raw(raw: RawComic) -> Option<Self> {
        let title = raw.title?;
        Some(Self {
            slug: slugify(&title),
            title,
            thumbnail_url: raw.thumbnail,
            type_label: raw.kind,
            description: raw.description,
            genre_label: raw.genre,
            source_href: raw.href.unwrap_or_default(),
        })
    }

    /// Link used to fetch the detail page: the href without its `/detail-komik/` segment.
    pub fn processed_link(&self) -> String {
        self.source_href.replacen("/detail-komik/", "", 1)
    }

    pub fn cover_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(COVER_PLACEHOLDER_URL)
    }

    pub fn chapter_label<'a>(&'a self, messages: &'a Messages) -> &'a str {
        self.description.as_deref().unwrap_or(messages.latest_chapter)
    }

    pub fn genre_or_dash(&self) -> &str {
        self.genre_label.as_deref().unwrap_or("-")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicDetail {
    pub synopsis: String,
    pub creator: String,
    pub chapters: Vec<ChapterRef>,
}

/// Chapter numbers are compared as strings, `"10"` and `"10.0"` are different chapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRef {
    pub chapter_number: String,
    pub link: String,
}

impl ChapterRef {
    pub fn from_raw(raw: RawChapter) -> Option<Self> {
        Some(Self {
            chapter_number: raw.chapter?,
            link: raw.link.unwrap_or_default(),
        })
    }

    pub(crate) fn collect(raw: Vec<RawChapter>) -> Vec<Self> {
        raw.into_iter().filter_map(Self::from_raw).collect()
    }
}

/// Pages of one chapter plus the chapter list the API returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterContent {
    pub images: Vec<String>,
    pub chapters: Vec<ChapterRef>,
}
