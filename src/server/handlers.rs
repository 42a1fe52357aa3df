//! Route handlers.

use axum::extract::{Query, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::{HeaderMap, Uri};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::i18n::{Locale, LocaleContext};
use crate::page;
use crate::server::error::SiteError;
use crate::server::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

fn negotiate(state: &AppState, query: &LangQuery, headers: &HeaderMap) -> Locale {
    let accept = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
    state.catalog().negotiate(query.lang.as_deref(), accept)
}

/// Landing page.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, SiteError> {
    let locale = negotiate(&state, &query, &headers);
    let ctx = LocaleContext::new(&locale, state.catalog());
    Ok(Html(page::render_index_page(&ctx)?))
}

/// Drop page. Takes one fresh feed snapshot per view.
pub async fn nft_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, SiteError> {
    let locale = negotiate(&state, &query, &headers);
    let feed = state.feed().snapshot().await;
    let today = chrono::Local::now().date_naive();

    let ctx = LocaleContext::new(&locale, state.catalog());
    let html = page::render_nft_page(&ctx, &feed, today)?;
    tracing::debug!(%locale, rows = feed.rows().len(), "Rendered drop page");
    Ok(Html(html))
}

/// Buyers list read fresh from the configured file. No file means `[]`.
pub async fn buyers(State(state): State<AppState>) -> Result<Json<Vec<Value>>, SiteError> {
    let Some(path) = state.config().site.buyers_file.clone() else {
        return Ok(Json(Vec::new()));
    };

    let content = match tokio::fs::read(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Buyers file missing, serving empty list");
            return Ok(Json(Vec::new()));
        }
        Err(e) => {
            return Err(SiteError::BuyersFile {
                path,
                reason: e.to_string(),
            })
        }
    };

    let buyers: Vec<Value> =
        serde_json::from_slice(&content).map_err(|e| SiteError::BuyersFile {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    Ok(Json(buyers))
}

pub async fn not_found(uri: Uri) -> SiteError {
    SiteError::NotFound {
        path: uri.path().to_string(),
    }
}
