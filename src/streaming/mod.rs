//! Range-request streaming engine.
//!
//! The pipeline for one request:
//!
//! 1. [`crate::catalog::AssetStore::locate`] resolves the id to a file and
//!    its size.
//! 2. [`range::parse`] turns the `Range` header into a concrete interval.
//! 3. [`plan::plan`] picks the response mode (full body, partial content,
//!    unsatisfiable).
//! 4. [`respond::frame`] emits status and headers for that mode.
//! 5. [`chunk::ChunkStreamer`] forwards the selected bytes in bounded chunks.
//!
//! # Routes
//!
//! - `GET /stream/{id}` - stream an asset, honoring `Range: bytes=<spec>`

pub mod chunk;
pub mod plan;
pub mod range;
pub mod respond;
mod serve;

pub use chunk::ChunkStreamer;
pub use plan::{plan, StreamPlan};
pub use range::{parse, ByteRange, Parsed};
pub use respond::{frame, Framing};
pub use serve::stream_asset;

use axum::{routing::get, Router};

use crate::server::AppContext;

/// Create the streaming router.
pub fn router() -> Router<AppContext> {
    Router::new().route("/:id", get(stream_asset))
}
