//! HTTP surface: article pages for crawlers, redirects for people, and the
//! oEmbed endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::adapters::{build_client, HttpRangeFetcher, StoryApiClient};
use crate::config::Settings;
use crate::core::agent::is_unfurl_bot;
use crate::core::path::parse_article_path;
use crate::core::unfurl::UnfurlService;
use crate::utils::error::{Result, UnfurlError};

pub type DefaultService = UnfurlService<StoryApiClient, HttpRangeFetcher>;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DefaultService>,
}

#[derive(Debug, Deserialize)]
pub struct OEmbedQuery {
    pub url: Option<String>,
}

pub fn build_service(settings: Settings) -> Result<DefaultService> {
    let client = build_client(&settings)?;
    let stories = StoryApiClient::new(client.clone(), settings.api_base.clone());
    Ok(UnfurlService::new(stories, HttpRangeFetcher::new(client), settings))
}

pub fn router(service: Arc<DefaultService>) -> Router {
    Router::new()
        .route("/oembed", get(oembed_handler))
        .fallback(article_handler)
        .with_state(AppState { service })
}

/// Binds `settings.bind_address` and serves until Ctrl+C.
pub async fn serve(settings: Settings) -> Result<()> {
    let addr: SocketAddr =
        settings
            .bind_address
            .parse()
            .map_err(|e| UnfurlError::InvalidConfigValueError {
                field: "bind".to_string(),
                value: settings.bind_address.clone(),
                reason: format!("{}", e),
            })?;

    let app = router(Arc::new(build_service(settings)?));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Origin for links back to this proxy.
fn request_origin(settings: &Settings, headers: &HeaderMap) -> String {
    if let Some(origin) = &settings.public_origin {
        return origin.clone();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{}", host)
}

fn oembed_href(origin: &str, story_url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(story_url.as_bytes()).collect();
    format!("{}/oembed?url={}", origin, encoded)
}

async fn article_handler(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let settings = state.service.settings();

    let Some(path) = parse_article_path(uri.path()) else {
        tracing::debug!("Not an article path: {}", uri.path());
        return found(&settings.fallback_url);
    };
    let canonical = path.canonical_url(&settings.site_origin);

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok());
    if !is_unfurl_bot(user_agent) {
        tracing::debug!("Redirecting visitor to {}", canonical);
        return found(&canonical);
    }

    let href = oembed_href(&request_origin(settings, &headers), &canonical);
    match state.service.story_page(&path, &href).await {
        Ok(html) => {
            tracing::info!(
                "Served preview for story {} to {}",
                path.id,
                user_agent.unwrap_or("-")
            );
            Html(html).into_response()
        }
        Err(e) => {
            tracing::warn!(
                "Story {} unavailable ({}), redirecting crawler to {}",
                path.id,
                e,
                canonical
            );
            found(&canonical)
        }
    }
}

async fn oembed_handler(
    State(state): State<AppState>,
    Query(query): Query<OEmbedQuery>,
) -> Response {
    let Some(story_url) = query.url else {
        return (StatusCode::BAD_REQUEST, "Missing url parameter").into_response();
    };

    let Some(path) = url::Url::parse(&story_url)
        .ok()
        .and_then(|u| parse_article_path(u.path()))
    else {
        return (StatusCode::BAD_REQUEST, "Invalid URL format").into_response();
    };

    match state.service.oembed_for(&path).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            tracing::warn!("oEmbed for story {} failed: {}", path.id, e);
            (StatusCode::BAD_GATEWAY, "Story unavailable").into_response()
        }
    }
}
