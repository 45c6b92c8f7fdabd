use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Visibility rule for soft-deleted rows, decoded from the `show` parameter.
///
/// - `""` (or absent): hide deleted rows
/// - `"deleted"`: deleted rows only
/// - `"all"`: every row
///
/// Any other value is kept verbatim in [`ShowDeletedRule::Other`]. It matches
/// neither excluding rule, so rows are never hidden because of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShowDeletedRule {
    #[default]
    HideDeleted,
    DeletedOnly,
    All,
    Other(String),
}

impl ShowDeletedRule {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HideDeleted => "",
            Self::DeletedOnly => "deleted",
            Self::All => "all",
            Self::Other(raw) => raw,
        }
    }

    /// False for values outside the documented set.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ShowDeletedRule {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => Self::HideDeleted,
            "deleted" => Self::DeletedOnly,
            "all" => Self::All,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ShowDeletedRule {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ShowDeletedRule> for String {
    fn from(rule: ShowDeletedRule) -> Self {
        match rule {
            ShowDeletedRule::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ShowDeletedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for listing resources, as decoded from the URL.
///
/// Example: `/customers?sortBy=-name&pageSize=20&pageNumber=1`
///
/// # Pagination
/// `pageNumber` is zero-based. `pageSize=0` (or absent) means the configured
/// default is used, unless `download=true`, which disables pagination.
///
/// # Sorting
/// `sortBy` names the field to sort on. A leading `-` sorts descending:
/// `sortBy=-created_at`.
///
/// # Visibility
/// `show` selects soft-deleted rows: empty hides them, `deleted` shows only
/// them, `all` shows everything.
///
/// The raw value is turned into a [`crate::NormalizedFilter`] with
/// [`FilterOption::apply_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOption {
    /// Zero-based page index.
    #[param(example = 0)]
    pub page_number: i64,
    /// Rows per page. `0` falls back to the configured default.
    #[param(example = 10)]
    pub page_size: i64,
    /// Sort field, prefixed with `-` for descending order.
    #[param(example = "-name")]
    pub sort_by: String,
    /// Soft-deleted row visibility: `""`, `"deleted"` or `"all"`.
    #[param(value_type = String, example = "all")]
    #[schema(value_type = String)]
    pub show: ShowDeletedRule,
    /// Export mode. Disables pagination when set.
    pub download: bool,
    /// Requested locale, e.g. `en` or `fr`.
    #[param(example = "en")]
    pub lang: String,
}

impl FilterOption {
    /// Assign the requested language.
    #[must_use]
    pub fn set_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}
