use axum::{
    Json, Router,
    body::Body,
    http::{HeaderMap, Request},
    response::Response,
    routing::get,
};
use filteroption::{FilterConfig, NormalizedFilter};
use serde::{Deserialize, Serialize};
use tower::ServiceExt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub deleted: bool,
}

/// 12 customers; every third one is soft-deleted.
pub fn customers() -> Vec<Customer> {
    let names = [
        "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India",
        "Juliet", "Kilo", "Lima",
    ];
    names
        .iter()
        .zip(1..)
        .map(|(name, id)| Customer {
            id,
            name: (*name).to_string(),
            deleted: id % 3 == 0,
        })
        .collect()
}

async fn list_customers(mut filter: NormalizedFilter) -> (HeaderMap, Json<Vec<Customer>>) {
    let mut rows = customers();
    filter.retain_visible(&mut rows, |c| c.deleted);

    if filter.is_sort_required() {
        match filter.sort_attr() {
            "name" => filter.sort_slice(&mut rows, |a, b| a.name.cmp(&b.name)),
            _ => filter.sort_slice_by_key(&mut rows, |c| c.id),
        }
    }

    for row in &rows {
        filter.add(row.id);
    }

    let headers = filter.content_range("customers", filter.len());
    let (from, to) = filter.page_range();
    (headers, Json(rows[from..to].to_vec()))
}

async fn echo_filter(filter: NormalizedFilter) -> Json<NormalizedFilter> {
    Json(filter)
}

pub fn setup_test_app(config: FilterConfig) -> Router {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/filter", get(echo_filter))
        .with_state(config)
}

pub async fn send(app: &Router, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut request = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    let request = request.body(Body::empty()).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
