use sea_orm::sea_query::Order;
use serde::Serialize;
use std::cmp::Ordering;

/// Prefix marking a descending sort field, as in `sortBy=-name`.
const DESC_PREFIX: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Split a raw `sortBy` value into its direction and field name.
    ///
    /// `"-name"` gives `(Desc, "name")`, anything else is ascending and
    /// returned unchanged. Only the first character is inspected.
    #[must_use]
    pub fn from_prefixed(raw: &str) -> (Self, &str) {
        match raw.strip_prefix(DESC_PREFIX) {
            Some(field) => (Self::Desc, field),
            None => (Self::Asc, raw),
        }
    }

    /// Apply this direction to an ascending comparison result.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    #[must_use]
    pub fn is_desc(self) -> bool {
        self == Self::Desc
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// Sort `items` in place with an ascending comparator, reversed for `Desc`.
///
/// The sort is stable and equal elements stay equal in both directions.
pub fn sort_with_direction<T, F>(items: &mut [T], direction: SortDirection, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.sort_by(|a, b| direction.apply(compare(a, b)));
}

/// Sort `items` in place by a key, reversed for `Desc`.
pub fn sort_by_key_with_direction<T, K, F>(items: &mut [T], direction: SortDirection, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    items.sort_by(|a, b| direction.apply(key(a).cmp(&key(b))));
}
