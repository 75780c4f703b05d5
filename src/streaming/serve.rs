//! The streaming request handler: locate, parse, plan, frame, stream.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::response::Response;

use super::chunk::ChunkStreamer;
use super::{plan, range, respond};
use crate::error::Error;
use crate::server::AppContext;

/// GET /stream/:id
///
/// Serve an asset with HTTP range request support. The response mode (200
/// full body, 206 partial content, 416 unsatisfiable) is decided before any
/// body byte is written.
pub async fn stream_asset(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, Error> {
    let asset = ctx.store.locate(&id).await?;

    let range_header = headers.get(header::RANGE).and_then(|v| v.to_str().ok());
    let parsed = range::parse(range_header, asset.size);
    let plan = plan::plan(parsed, asset.size);

    tracing::debug!(
        asset = %asset.id,
        size = asset.size,
        ?plan,
        "Streaming request planned"
    );

    let framing = respond::frame(&plan, &asset);
    let streamer = ChunkStreamer::new(ctx.config.stream.chunk_size_bytes);
    let body = streamer.body(&asset, &plan).await?;

    let mut builder = Response::builder().status(framing.status);
    for (name, value) in framing.headers {
        builder = builder.header(name, value);
    }
    builder
        .body(body)
        .map_err(|e| Error::Internal(format!("Failed to build response: {e}")))
}
