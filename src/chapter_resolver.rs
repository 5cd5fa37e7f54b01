use log::debug;

use crate::models::ChapterRef;

/// Index of the chapter being read, or `0` when nothing matches.
///
/// Chapter numbers are compared as strings. Callers must not assume the chapter
/// at the returned index carries the requested number.
pub fn resolve_index(chapters: &[ChapterRef], target_chapter_number: &str) -> usize {
    find_index(chapters, target_chapter_number).unwrap_or_else(|| {
        debug!(
            "chapter {:?} not among {} chapters, defaulting to first",
            target_chapter_number,
            chapters.len()
        );
        0
    })
}

fn find_index(chapters: &[ChapterRef], target_chapter_number: &str) -> Option<usize> {
    chapters
        .iter()
        .position(|c| c.chapter_number == target_chapter_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapters(numbers: &[&str]) -> Vec<ChapterRef> {
        numbers
            .iter()
            .map(|n| ChapterRef {
                chapter_number: n.to_string(),
                link: format!("link-{n}"),
            })
            .collect()
    }

    #[test]
    fn empty_list_resolves_to_first() {
        assert_eq!(0, resolve_index(&[], "1"));
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(1, resolve_index(&chapters(&["1", "2"]), "2"));
    }

    #[test]
    fn first_of_duplicates_wins() {
        assert_eq!(1, resolve_index(&chapters(&["3", "2", "2"]), "2"));
    }

    #[test]
    fn unknown_chapter_defaults_to_first() {
        assert_eq!(0, resolve_index(&chapters(&["1"]), "99"));
    }

    #[test]
    fn numbers_compare_as_strings() {
        let list = chapters(&["10.0", "10"]);

        assert_eq!(1, resolve_index(&list, "10"));
        assert_eq!(None, find_index(&list, "010"));
    }
}
