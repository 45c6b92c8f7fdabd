use axum::http::header::{CONTENT_RANGE, HeaderMap, HeaderValue};

/// Compute the `[from, to)` window of a page over `full` rows.
///
/// A non-positive `page_size` means no pagination and yields `(0, full)`.
///
/// When the page starts past the end, the start becomes `full - from`,
/// which is negative and therefore clamps to `0`. A page beyond the last one
/// returns the first page rather than an empty window:
///
/// ```
/// use filteroption::pagination::slice_range;
///
/// assert_eq!(slice_range(1, 10, 20), (10, 20));
/// assert_eq!(slice_range(2, 10, 15), (0, 10));
/// ```
///
/// The result always satisfies `from <= to <= full`.
#[must_use]
pub fn slice_range(page_number: i64, page_size: i64, full: usize) -> (usize, usize) {
    if page_size <= 0 {
        return (0, full);
    }

    let total = i64::try_from(full).unwrap_or(i64::MAX);

    let mut from = page_number.saturating_mul(page_size);
    if from > total {
        from = total - from;
    }
    if from < 0 {
        from = 0;
    }

    let to = from.saturating_add(page_size).min(total);

    (to_index(from, full), to_index(to, full))
}

fn to_index(value: i64, full: usize) -> usize {
    usize::try_from(value).map_or(0, |index| index.min(full))
}

/// Slice `items` with a range produced by [`slice_range`].
#[must_use]
pub fn page_slice<T>(items: &[T], (from, to): (usize, usize)) -> &[T] {
    let to = to.min(items.len());
    let from = from.min(to);
    &items[from..to]
}

/// Remove control characters so the name is safe inside an HTTP header.
fn sanitize_resource_name(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii() && !c.is_ascii_control()).collect()
}

/// Build the `Content-Range` header for a page of results.
///
/// # Arguments
///
/// * `offset` - The index of the first row on the page.
/// * `limit` - The number of rows on the page.
/// * `total_count` - The total number of rows available.
/// * `resource_name` - The name of the resource being paginated.
///
/// # Returns
///
/// A `HeaderMap` containing `Content-Range: {resource} {first}-{last}/{total}`,
/// or `{resource} */{total}` when the page holds no rows. Invalid header characters in `resource_name` are stripped.
#[must_use]
pub fn calculate_content_range(
    offset: u64,
    limit: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    // An empty page has no first/last row: use the unsatisfied form
    let range = if limit == 0 {
        format!("*/{total_count}")
    } else {
        let last = offset
            .saturating_add(limit)
            .saturating_sub(1)
            .min(total_count);
        format!("{offset}-{last}/{total_count}")
    };

    let safe_name = sanitize_resource_name(resource_name);
    let content_range = format!("{safe_name} {range}");

    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&content_range).unwrap_or_else(|_| {
        HeaderValue::from_str(&format!("items {range}"))
            .unwrap_or(HeaderValue::from_static("items */0"))
    });
    headers.insert(CONTENT_RANGE, value);

    headers
}
