//! Catalog API routes.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::Error;
use crate::server::AppContext;

/// One catalog entry as returned by `GET /videos`.
#[derive(Debug, Serialize)]
pub struct VideoEntry {
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub url: String,
}

/// GET /videos
///
/// List all assets in the storage root with their stream URLs.
pub async fn list_videos(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<VideoEntry>>, Error> {
    let assets = ctx.store.list().await?;

    let entries = assets
        .into_iter()
        .map(|asset| VideoEntry {
            url: format!("/stream/{}", asset.id),
            name: asset.id,
            size: asset.size,
            content_type: asset.content_type.to_string(),
        })
        .collect();

    Ok(Json(entries))
}
