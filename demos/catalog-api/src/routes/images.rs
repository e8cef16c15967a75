use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Redirect, Response};
use optcg_catalog::image;
use optcg_catalog::ImageMode;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ImageParams {
    pub url: Option<String>,
    /// Target width, only honoured by the relay.
    pub w: Option<u32>,
    /// `proxy` or `relay`; defaults to the server's configured mode.
    pub mode: Option<String>,
}

/// GET /image-proxy?url=https://...&w=300&mode=relay
///
/// Serve a card image either by streaming the bytes from the original host
/// or by redirecting to the resize/transcode relay.
pub async fn image_proxy(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ImageParams>,
) -> Result<Response, AppError> {
    let url = params
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("Missing required query parameter: url"))?;

    let mode = match params.mode.as_deref() {
        Some(m) => m.parse::<ImageMode>()?,
        None => state.image_mode,
    };

    match mode {
        ImageMode::Relay => {
            let target = image::relay_url(&url, params.w)?;
            Ok(Redirect::temporary(&target).into_response())
        }
        ImageMode::Proxy => {
            let data = state
                .catalog
                .run(move |c| c.images().fetch(&url))
                .await?;
            Ok((
                [
                    (CONTENT_TYPE, data.content_type),
                    (CACHE_CONTROL, image::CACHE_CONTROL.to_string()),
                ],
                data.bytes,
            )
                .into_response())
        }
    }
}
