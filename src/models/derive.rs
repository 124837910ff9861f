//! Default/derive rules applied when records are created or updated.

/// Average reading speed used for blog reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Reading time used when a new post has no content yet.
pub const DEFAULT_READING_TIME: &str = "5 min";

/// Derive a URL slug: lowercase, runs of non-alphanumerics collapse to `-`,
/// no leading or trailing `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Reading time label for a body of text, or `None` when the text is blank.
pub fn reading_time(content: &str) -> Option<String> {
    let words = content.split_whitespace().count();
    if words == 0 {
        return None;
    }
    Some(format!("{} min", words.div_ceil(WORDS_PER_MINUTE)))
}

/// Placeholder cover image for records created without one.
pub fn placeholder_image(seed: u64) -> String {
    format!("https://picsum.photos/400/300?random={}", seed % 100)
}

/// Use `value` unless it is missing or blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
