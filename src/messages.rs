//! User-facing text per locale.

use crate::configuration::Locale;
use crate::error::{CatalogError, InputKind};

/// Creator shown when the API does not name one. Not localized.
pub const UNKNOWN_CREATOR: &str = "Unknown";

pub const COVER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/300x450?text=Comic+Cover";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub search_failed: &'static str,
    pub invalid_comic_link: &'static str,
    pub missing_chapter_link: &'static str,
    pub synopsis_unavailable: &'static str,
    pub latest_chapter: &'static str,
    pub no_chapters: &'static str,
    pub error_heading: &'static str,
    pub end_of_chapter: &'static str,
}

static EN: Messages = Messages {
    search_failed: "Something went wrong while searching for comics",
    invalid_comic_link: "Invalid comic link",
    missing_chapter_link: "No chapter link provided",
    synopsis_unavailable: "Synopsis not available.",
    latest_chapter: "Latest Chapter",
    no_chapters: "No chapters available",
    error_heading: "Something went wrong",
    end_of_chapter: "End of chapter",
};

static ID: Messages = Messages {
    search_failed: "Terjadi kesalahan saat mencari komik",
    invalid_comic_link: "Link komik tidak valid",
    missing_chapter_link: "Link chapter tidak tersedia",
    synopsis_unavailable: "Synopsis tidak tersedia.",
    latest_chapter: "Chapter Terbaru",
    no_chapters: "Chapter tidak tersedia",
    error_heading: "Terjadi Kesalahan",
    end_of_chapter: "Akhir Chapter",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::Id => &ID,
        }
    }
}

impl Messages {
    /// Text shown for a failed step.
    pub fn describe(&self, error: &CatalogError) -> String {
        match error {
            CatalogError::InvalidInput(InputKind::ComicLink) => {
                self.invalid_comic_link.to_owned()
            }
            CatalogError::InvalidInput(InputKind::ChapterLink) => {
                self.missing_chapter_link.to_owned()
            }
            CatalogError::InvalidInput(InputKind::SearchQuery) => error.to_string(),
            CatalogError::Network(e) => e.user_message(),
            CatalogError::NoChapters => self.no_chapters.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn describe_uses_locale_table() {
        let id = Messages::for_locale(Locale::Id);

        assert_eq!(
            "Link komik tidak valid",
            id.describe(&CatalogError::InvalidInput(InputKind::ComicLink))
        );
        assert_eq!(
            "No chapter link provided",
            Messages::for_locale(Locale::En)
                .describe(&CatalogError::InvalidInput(InputKind::ChapterLink))
        );
        assert_eq!("Chapter tidak tersedia", id.describe(&CatalogError::NoChapters));
        assert_eq!(
            "response contained no data",
            id.describe(&CatalogError::Network(NetworkError::Empty))
        );
    }
}
