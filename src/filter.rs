use axum::http::HeaderMap;
use serde::Serialize;
use std::cmp::Ordering;

use crate::config::FilterConfig;
use crate::models::{FilterOption, ShowDeletedRule};
use crate::pagination::{calculate_content_range, page_slice, slice_range};
use crate::sort::{SortDirection, sort_by_key_with_direction, sort_with_direction};

impl FilterOption {
    /// Normalize the decoded parameters into a [`NormalizedFilter`].
    ///
    /// - `download=true` disables pagination (`page_number = page_size = 0`)
    /// - otherwise a zero `page_size` becomes `config.default_page_size`
    /// - a leading `-` on `sort_by` selects descending order and is stripped
    ///
    /// Consumes `self`, so defaults are applied exactly once.
    #[must_use]
    pub fn apply_defaults(self, config: &FilterConfig) -> NormalizedFilter {
        let (page_number, page_size) = if self.download {
            (0, 0)
        } else if self.page_size == 0 {
            (self.page_number, config.default_page_size)
        } else {
            (self.page_number, self.page_size)
        };

        let (sort_direction, sort_by) = SortDirection::from_prefixed(&self.sort_by);
        let sort_by = sort_by.to_string();

        tracing::debug!(
            page_number,
            page_size,
            sort_by = %sort_by,
            ?sort_direction,
            show = %self.show,
            download = self.download,
            "Normalized list query"
        );

        NormalizedFilter {
            page_number,
            page_size,
            sort_by,
            sort_direction,
            show: self.show,
            download: self.download,
            lang: self.lang,
            ids: Vec::new(),
        }
    }
}

/// List-query parameters after defaults have been applied.
///
/// Besides the normalized parameters it carries the pre-resultset: the
/// candidate IDs a handler collects with [`NormalizedFilter::add`] before
/// cutting out the requested page with [`NormalizedFilter::page_range`].
///
/// ```
/// use filteroption::{FilterConfig, FilterOption};
///
/// let option = FilterOption { sort_by: "-name".into(), page_number: 1, ..Default::default() };
/// let mut filter = option.apply_defaults(&FilterConfig::default());
///
/// for id in 1..=25 {
///     filter.add(id);
/// }
///
/// assert_eq!(filter.page_size(), 10);
/// assert_eq!(filter.sort_attr(), "name");
/// assert!(filter.is_sort_desc());
/// assert_eq!(filter.page_range(), (10, 20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFilter {
    page_number: i64,
    page_size: i64,
    sort_by: String,
    sort_direction: SortDirection,
    show: ShowDeletedRule,
    download: bool,
    lang: String,
    #[serde(skip)]
    ids: Vec<i64>,
}

impl NormalizedFilter {
    #[must_use]
    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    /// Rows per page, `0` when pagination is disabled.
    #[must_use]
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    #[must_use]
    pub fn show(&self) -> &ShowDeletedRule {
        &self.show
    }

    #[must_use]
    pub fn is_download(&self) -> bool {
        self.download
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Assign the language, e.g. one negotiated from request headers.
    #[must_use]
    pub fn set_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    // Pre-resultset

    /// Append an object ID to the pre-resultset. Duplicates are kept.
    pub fn add(&mut self, id: i64) {
        self.ids.push(id);
    }

    /// The pre-resultset in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    // Pagination

    /// `[from, to)` of the requested page within the pre-resultset.
    #[must_use]
    pub fn page_range(&self) -> (usize, usize) {
        self.calc_range(self.ids.len())
    }

    /// `[from, to)` of the requested page within a result set of `length`
    /// rows, e.g. a count returned by the data store.
    ///
    /// See [`slice_range`] for how out-of-range pages are handled.
    #[must_use]
    pub fn calc_range(&self, length: usize) -> (usize, usize) {
        slice_range(self.page_number, self.page_size, length)
    }

    /// The requested page of `items`.
    #[must_use]
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.calc_range(items.len()))
    }

    /// The requested page of the pre-resultset.
    #[must_use]
    pub fn page_ids(&self) -> &[i64] {
        page_slice(&self.ids, self.page_range())
    }

    /// `(offset, limit)` for a store query, `None` when unpaginated.
    ///
    /// Without the total row count the past-the-end wrap of [`slice_range`]
    /// cannot be applied; a page beyond the end simply comes back empty.
    #[must_use]
    pub fn limit_offset(&self) -> Option<(u64, u64)> {
        let limit = u64::try_from(self.page_size).ok().filter(|&size| size > 0)?;
        let page = u64::try_from(self.page_number).unwrap_or(0);
        Some((page.saturating_mul(limit), limit))
    }

    /// `Content-Range` header describing the requested page out of `total`.
    #[must_use]
    pub fn content_range(&self, resource_name: &str, total: usize) -> HeaderMap {
        let (from, to) = self.calc_range(total);
        calculate_content_range(
            from as u64,
            (to - from) as u64,
            total as u64,
            resource_name,
        )
    }

    // Sorting

    /// True if the request named a sort field.
    #[must_use]
    pub fn is_sort_required(&self) -> bool {
        !self.sort_by.is_empty()
    }

    /// Field to sort on, without the `-` prefix.
    #[must_use]
    pub fn sort_attr(&self) -> &str {
        &self.sort_by
    }

    /// True if `sortBy` carried the `-` prefix.
    #[must_use]
    pub fn is_sort_desc(&self) -> bool {
        self.sort_direction.is_desc()
    }

    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Sort `items` with an ascending comparator, reversed when descending
    /// order was requested.
    ///
    /// ```
    /// use filteroption::{FilterConfig, FilterOption};
    ///
    /// let option = FilterOption { sort_by: "-n".into(), ..Default::default() };
    /// let filter = option.apply_defaults(&FilterConfig::default());
    ///
    /// let mut values = vec![3, 1, 2];
    /// filter.sort_slice(&mut values, |a, b| a.cmp(b));
    /// assert_eq!(values, vec![3, 2, 1]);
    /// ```
    pub fn sort_slice<T, F>(&self, items: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort_with_direction(items, self.sort_direction, compare);
    }

    /// Sort `items` by a key, reversed when descending order was requested.
    pub fn sort_slice_by_key<T, K, F>(&self, items: &mut [T], key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        sort_by_key_with_direction(items, self.sort_direction, key);
    }

    // Visibility

    /// True if a row with the given deleted flag must be left out under the
    /// `show` rule.
    #[must_use]
    pub fn is_ignored_row(&self, row_deleted: bool) -> bool {
        match self.show {
            ShowDeletedRule::HideDeleted => row_deleted,
            ShowDeletedRule::DeletedOnly => !row_deleted,
            ShowDeletedRule::All | ShowDeletedRule::Other(_) => false,
        }
    }

    /// Drop the rows excluded by the `show` rule.
    pub fn retain_visible<T, F>(&self, rows: &mut Vec<T>, mut is_deleted: F)
    where
        F: FnMut(&T) -> bool,
    {
        rows.retain(|row| !self.is_ignored_row(is_deleted(row)));
    }
}
