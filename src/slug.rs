/// Derive the URL-safe identifier of a comic from its title.
///
/// Lower-cases the title, collapses every run of characters outside `[a-z0-9]`
/// into a single `-` and trims separators from both ends. Titles that normalize
/// identically share a slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}
