//! Axum extractor for [`NormalizedFilter`].
//!
//! ```rust,ignore
//! async fn list_customers(
//!     State(db): State<DatabaseConnection>,
//!     filter: NormalizedFilter,
//! ) -> Result<(HeaderMap, Json<Vec<Customer>>), ApiError> {
//!     let mut rows = load_customers(&db).await?;
//!     filter.retain_visible(&mut rows, |c| c.deleted_at.is_some());
//!     if filter.is_sort_required() {
//!         filter.sort_slice(&mut rows, |a, b| a.sort_key(filter.sort_attr()).cmp(&b.sort_key(filter.sort_attr())));
//!     }
//!     let headers = filter.content_range("customers", rows.len());
//!     Ok((headers, Json(filter.page_slice(&rows).to_vec())))
//! }
//! ```
//!
//! The [`FilterConfig`] is taken from the router state through `FromRef`, so
//! any state that can hand one out works, including `FilterConfig` itself.

use axum::{
    extract::{FromRef, FromRequestParts, Query},
    http::{HeaderMap, header::ACCEPT_LANGUAGE, request::Parts},
};

use crate::config::FilterConfig;
use crate::errors::ApiError;
use crate::filter::NormalizedFilter;
use crate::models::FilterOption;

impl<S> FromRequestParts<S> for NormalizedFilter
where
    FilterConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(option) = Query::<FilterOption>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        let config = FilterConfig::from_ref(state);
        if config.strict {
            option.validate(&config)?;
        }

        let option = if option.lang.is_empty() {
            match preferred_language(&parts.headers) {
                Some(lang) => option.set_lang(lang),
                None => option,
            }
        } else {
            option
        };

        Ok(option.apply_defaults(&config))
    }
}

/// Highest-quality tag of the `Accept-Language` header, lowercased.
///
/// Ties keep header order. Wildcards, `q=0` and malformed weights are skipped.
fn preferred_language(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;

    let mut best: Option<(String, f32)> = None;
    for part in header.split(',') {
        let mut segments = part.trim().split(';');
        let lang = segments.next()?.trim().to_lowercase();
        if lang.is_empty() || lang == "*" {
            continue;
        }

        // Weights outside 0..=1 (including nan and inf) drop the entry
        let quality = match segments.find_map(|s| s.trim().strip_prefix("q=")) {
            Some(q) => match q.trim().parse::<f32>() {
                Ok(q) if (0.0..=1.0).contains(&q) => q,
                _ => continue,
            },
            None => 1.0,
        };
        if quality <= 0.0 {
            continue;
        }

        if best.as_ref().is_none_or(|(_, q)| quality > *q) {
            best = Some((lang, quality));
        }
    }

    best.map(|(lang, _)| lang)
}
