//! HTTP `Range` header parsing.
//!
//! Supports the `bytes` unit with specs of the form `start-end`, `start-`
//! (through end of file), and `-N` (last N bytes). Specs are resolved to
//! concrete inclusive intervals against the asset's total size.

/// An inclusive byte interval, resolved against a file size.
///
/// Invariants once constructed: `start <= end` and `end < total size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered by the interval. Always at least 1, since the
    /// interval is inclusive.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Outcome of parsing a `Range` header against a file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// No `Range` header was present.
    None,
    /// A single resolved, satisfiable interval.
    Range(ByteRange),
    /// Syntactically valid but entirely outside the file.
    Unsatisfiable,
    /// Unrecognized unit or bad syntax.
    Malformed,
}

/// Parse a `Range` header value, resolving the first spec against
/// `total_size`.
///
/// Only the `bytes` unit is recognized. When the header carries several
/// comma-separated specs, the first one is honored and the rest are ignored;
/// multipart/byteranges responses are not produced.
pub fn parse(header: Option<&str>, total_size: u64) -> Parsed {
    let Some(value) = header else {
        return Parsed::None;
    };

    let Some(spec_list) = value.trim().strip_prefix("bytes=") else {
        return Parsed::Malformed;
    };

    let spec = spec_list.split(',').next().unwrap_or("").trim();
    if spec.is_empty() {
        return Parsed::Malformed;
    }

    let Some((start_str, end_str)) = spec.split_once('-') else {
        return Parsed::Malformed;
    };
    let start_str = start_str.trim();
    let end_str = end_str.trim();

    match (start_str.is_empty(), end_str.is_empty()) {
        // -N: last N bytes
        (true, false) => {
            let Ok(suffix_len) = end_str.parse::<u64>() else {
                return Parsed::Malformed;
            };
            if suffix_len == 0 || total_size == 0 {
                return Parsed::Unsatisfiable;
            }
            resolve(total_size.saturating_sub(suffix_len), total_size - 1, total_size)
        }
        // start-: from start through end of file
        (false, true) => {
            let Ok(start) = start_str.parse::<u64>() else {
                return Parsed::Malformed;
            };
            if total_size == 0 {
                return Parsed::Unsatisfiable;
            }
            resolve(start, total_size - 1, total_size)
        }
        // start-end
        (false, false) => {
            let (Ok(start), Ok(end)) = (start_str.parse::<u64>(), end_str.parse::<u64>())
            else {
                return Parsed::Malformed;
            };
            if start > end {
                return Parsed::Unsatisfiable;
            }
            if total_size == 0 {
                return Parsed::Unsatisfiable;
            }
            resolve(start, end.min(total_size - 1), total_size)
        }
        // bare "-"
        (true, true) => Parsed::Malformed,
    }
}

/// Final satisfiability check on a resolved interval.
fn resolve(start: u64, end: u64, total_size: u64) -> Parsed {
    if start > end || start >= total_size {
        return Parsed::Unsatisfiable;
    }
    Parsed::Range(ByteRange { start, end })
}
