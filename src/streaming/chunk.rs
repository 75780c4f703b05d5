//! Bounded chunked file-to-body streaming.
//!
//! The sole place doing bulk I/O: opens the file, seeks to the plan's start
//! offset, and forwards exactly the planned number of bytes in fixed-size
//! chunks. Memory per in-flight response is bounded by the chunk size, never
//! by file size. Backpressure comes for free from the poll-driven body
//! stream: a chunk is only read when the connection can accept it. Dropping
//! the body (client disconnect) drops the stream and closes the file handle.

use std::io::SeekFrom;
use std::path::Path;

use axum::body::Body;
use futures::TryStreamExt;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, Take};
use tokio_util::io::ReaderStream;

use super::plan::StreamPlan;
use crate::catalog::MediaAsset;
use crate::error::{Error, Result};

/// Streams a planned byte interval of a file into a response body.
#[derive(Debug, Clone, Copy)]
pub struct ChunkStreamer {
    chunk_size: usize,
}

impl ChunkStreamer {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Build the response body for `plan`.
    ///
    /// An unsatisfiable plan yields an empty body without touching the file.
    /// A read error mid-stream is logged and terminates the connection; it is
    /// never retried, since bytes already sent cannot be unsent.
    pub async fn body(&self, asset: &MediaAsset, plan: &StreamPlan) -> Result<Body> {
        if let StreamPlan::Unsatisfiable = plan {
            return Ok(Body::empty());
        }

        let offset = plan.offset();
        let length = plan.length(asset.size);
        let stream = self
            .open_range(&asset.path, offset, length)
            .await
            .map_err(|_| Error::not_found("asset", &asset.id))?;

        let id = asset.id.clone();
        let stream = stream.inspect_err(move |e| {
            tracing::warn!(asset = %id, error = %e, "Read failed mid-stream, terminating response");
        });

        Ok(Body::from_stream(stream))
    }

    /// Open the file, seek to `offset`, and return a chunked stream over the
    /// next `length` bytes.
    async fn open_range(
        &self,
        path: &Path,
        offset: u64,
        length: u64,
    ) -> std::io::Result<ReaderStream<Take<File>>> {
        let mut file = File::open(path).await?;
        if offset > 0 {
            file.seek(SeekFrom::Start(offset)).await?;
        }
        Ok(ReaderStream::with_capacity(file.take(length), self.chunk_size))
    }
}
