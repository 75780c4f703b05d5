//! Reelserve - media streaming server with HTTP range request support.
//!
//! Serves media files from a storage root with partial, resumable, seekable
//! delivery via byte-range requests. Files are streamed in bounded chunks;
//! a full file is never held in memory.

pub mod catalog;
pub mod config;
pub mod error;
pub mod server;
pub mod streaming;

pub use error::{Error, Result};
