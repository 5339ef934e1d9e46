//! Image URL cleanup and selection for the quick-view hero image.

/// Strips the backticks and double quotes catalog editors paste around URLs and
/// trims whitespace. Returns `None` when nothing usable is left.
#[must_use]
pub fn sanitize_image_url(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '`' | '"'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_owned())
    }
}

/// A candidate is usable when it is an absolute `http(s)` URL or a
/// root-relative path and does not point at a placeholder asset.
#[must_use]
pub fn is_usable_image(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    let well_formed = lower.starts_with("https://")
        || lower.starts_with("http://")
        || (lower.starts_with('/') && !lower.starts_with("//"));
    well_formed && !lower.contains("placeholder")
}

/// First candidate that survives sanitizing and [`is_usable_image`].
pub fn first_usable<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .filter_map(sanitize_image_url)
        .find(|url| is_usable_image(url))
}
