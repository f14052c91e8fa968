/// Number of questions in one page of the listing endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-indexed fixed-size window over `items`.
///
/// Pages before the first one and pages past the end both come back empty;
/// the listing handler treats an empty window as not found.
pub fn page_window<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
