use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nd_core::{Article, PageRequest, PageResult, SortSpec};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::AppState;

pub const MAX_PAGE_SIZE: u32 = 2000;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl PageQuery {
    pub fn into_request(self) -> nd_core::Result<PageRequest> {
        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => SortSpec::newest_first(),
            Some(raw) => raw.parse()?,
        };
        let size = self.size.unwrap_or(nd_core::types::DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
        PageRequest::new(self.page.unwrap_or(0), size, sort)
    }
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn list_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResult>, ApiError> {
    let request = query
        .into_request()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok(Json(state.store.page(&request).await))
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(guid): Path<String>,
) -> Result<Json<Article>, ApiError> {
    state
        .store
        .find(&guid)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("No article with guid {}", guid)))
}
