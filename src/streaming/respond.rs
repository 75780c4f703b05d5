//! Response framing: status line and header set for each stream plan.

use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;

use super::plan::StreamPlan;
use crate::catalog::MediaAsset;

/// Status code and headers for one response, computed before any body byte
/// is written.
#[derive(Debug)]
pub struct Framing {
    pub status: StatusCode,
    pub headers: Vec<(HeaderName, String)>,
}

/// Build the framing for a plan.
///
/// Full bodies get a 200 with the asset size; partial content gets a 206
/// with `Content-Range`; unsatisfiable ranges get a 416 carrying only
/// `Content-Range: bytes */size` so the client learns the real size.
pub fn frame(plan: &StreamPlan, asset: &MediaAsset) -> Framing {
    match plan {
        StreamPlan::FullBody => Framing {
            status: StatusCode::OK,
            headers: vec![
                (header::CONTENT_TYPE, asset.content_type.to_string()),
                (header::CONTENT_LENGTH, asset.size.to_string()),
                (header::ACCEPT_RANGES, "bytes".to_string()),
            ],
        },
        StreamPlan::PartialContent(r) => Framing {
            status: StatusCode::PARTIAL_CONTENT,
            headers: vec![
                (header::CONTENT_TYPE, asset.content_type.to_string()),
                (
                    header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", r.start, r.end, asset.size),
                ),
                (header::CONTENT_LENGTH, r.len().to_string()),
                (header::ACCEPT_RANGES, "bytes".to_string()),
            ],
        },
        StreamPlan::Unsatisfiable => Framing {
            status: StatusCode::RANGE_NOT_SATISFIABLE,
            headers: vec![(header::CONTENT_RANGE, format!("bytes */{}", asset.size))],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::range::ByteRange;

    fn asset(size: u64) -> MediaAsset {
        MediaAsset {
            id: "clip.mp4".into(),
            path: "/media/clip.mp4".into(),
            size,
            content_type: "video/mp4",
        }
    }

    fn header_value<'a>(framing: &'a Framing, name: &HeaderName) -> Option<&'a str> {
        framing
            .headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn full_body_framing() {
        let f = frame(&StreamPlan::FullBody, &asset(2048));
        assert_eq!(f.status, StatusCode::OK);
        assert_eq!(header_value(&f, &header::CONTENT_LENGTH), Some("2048"));
        assert_eq!(header_value(&f, &header::CONTENT_TYPE), Some("video/mp4"));
        assert_eq!(header_value(&f, &header::ACCEPT_RANGES), Some("bytes"));
        assert_eq!(header_value(&f, &header::CONTENT_RANGE), None);
    }

    #[test]
    fn partial_content_framing() {
        let plan = StreamPlan::PartialContent(ByteRange { start: 100, end: 199 });
        let f = frame(&plan, &asset(2048));
        assert_eq!(f.status, StatusCode::PARTIAL_CONTENT);
        assert_eq!(
            header_value(&f, &header::CONTENT_RANGE),
            Some("bytes 100-199/2048")
        );
        assert_eq!(header_value(&f, &header::CONTENT_LENGTH), Some("100"));
        assert_eq!(header_value(&f, &header::ACCEPT_RANGES), Some("bytes"));
    }

    #[test]
    fn unsatisfiable_framing() {
        let f = frame(&StreamPlan::Unsatisfiable, &asset(100));
        assert_eq!(f.status, StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(header_value(&f, &header::CONTENT_RANGE), Some("bytes */100"));
        assert_eq!(header_value(&f, &header::CONTENT_LENGTH), None);
    }
}
