//! Normalization of HTTP list-query parameters.
//!
//! A request like `/customers?sortBy=-name&pageSize=20&show=all` is decoded
//! into a [`FilterOption`], then turned into a [`NormalizedFilter`] with
//! [`FilterOption::apply_defaults`]. The normalized value answers the
//! questions a list handler has: which page window to cut, which field to sort
//! on and in which direction, and whether a soft-deleted row is visible.
//!
//! In an Axum handler, take a [`NormalizedFilter`] argument directly; the
//! extractor reads the [`FilterConfig`] from the router state.
//!
//! This crate computes parameters and ranges only. Querying the data store is
//! left to the caller.

pub mod config;
pub mod errors;
pub mod extract;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod sort;
pub mod validation;

pub use config::{DEFAULT_PAGE_SIZE, FilterConfig};
pub use errors::ApiError;
pub use filter::NormalizedFilter;
pub use models::{FilterOption, ShowDeletedRule};
pub use sort::SortDirection;
pub use validation::{ValidationError, ValidationErrors};
