//! Response mode selection for a parsed range request.

use super::range::{ByteRange, Parsed};

/// The response mode for one request, derived deterministically from the
/// parsed range and the asset size. Consumed exactly once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPlan {
    /// Serve the whole file with a 200.
    FullBody,
    /// Serve the given interval with a 206.
    PartialContent(ByteRange),
    /// Respond 416; no body bytes are streamed.
    Unsatisfiable,
}

impl StreamPlan {
    /// Byte offset at which streaming starts.
    pub fn offset(&self) -> u64 {
        match self {
            StreamPlan::FullBody | StreamPlan::Unsatisfiable => 0,
            StreamPlan::PartialContent(r) => r.start,
        }
    }

    /// Number of body bytes to stream for an asset of `total_size` bytes.
    pub fn length(&self, total_size: u64) -> u64 {
        match self {
            StreamPlan::FullBody => total_size,
            StreamPlan::PartialContent(r) => r.len(),
            StreamPlan::Unsatisfiable => 0,
        }
    }
}

/// Pick the response mode.
///
/// Malformed headers are treated leniently: the client gets the full body,
/// exactly as if it had sent no `Range` header. A syntactically valid range
/// that misses the file entirely is a hard 416.
pub fn plan(parsed: Parsed, total_size: u64) -> StreamPlan {
    match parsed {
        Parsed::None => StreamPlan::FullBody,
        Parsed::Malformed => {
            tracing::debug!(total_size, "Malformed Range header, serving full body");
            StreamPlan::FullBody
        }
        Parsed::Range(r) => StreamPlan::PartialContent(r),
        Parsed::Unsatisfiable => StreamPlan::Unsatisfiable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_header_serves_full_body() {
        assert_eq!(plan(Parsed::None, 100), StreamPlan::FullBody);
    }

    #[test]
    fn malformed_header_is_lenient() {
        assert_eq!(plan(Parsed::Malformed, 100), StreamPlan::FullBody);
    }

    #[test]
    fn valid_range_is_partial_content() {
        let r = ByteRange { start: 10, end: 19 };
        assert_eq!(plan(Parsed::Range(r), 100), StreamPlan::PartialContent(r));
    }

    #[test]
    fn zero_length_range_is_satisfiable() {
        let r = ByteRange { start: 5, end: 5 };
        let p = plan(Parsed::Range(r), 100);
        assert_eq!(p, StreamPlan::PartialContent(r));
        assert_eq!(p.length(100), 1);
        assert_eq!(p.offset(), 5);
    }

    #[test]
    fn unsatisfiable_passes_through() {
        assert_eq!(plan(Parsed::Unsatisfiable, 100), StreamPlan::Unsatisfiable);
    }

    #[test]
    fn plan_geometry() {
        assert_eq!(StreamPlan::FullBody.offset(), 0);
        assert_eq!(StreamPlan::FullBody.length(100), 100);
        let p = StreamPlan::PartialContent(ByteRange { start: 20, end: 79 });
        assert_eq!(p.offset(), 20);
        assert_eq!(p.length(100), 60);
        assert_eq!(StreamPlan::Unsatisfiable.length(100), 0);
    }
}
