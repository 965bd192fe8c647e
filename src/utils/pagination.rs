pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parses a `page` query value. Missing, non-numeric and non-positive values
/// all fall back to the first page.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .and_then(|page| usize::try_from(page).ok())
        .unwrap_or(1)
}

/// Returns the 1-based `page` of `items`, [`QUESTIONS_PER_PAGE`] at a time.
/// Pages past the end are empty. Callers supply the ordering.
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
