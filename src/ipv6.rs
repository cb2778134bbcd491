//! Textual rendering of 16-entry IPv6 segment arrays.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AddrError;

/// Number of 16-bit entries in the segment arrays this crate produces.
pub const SEGMENTS: usize = 16;

/// An interior run of zero segments, each followed by its separator.
static ZERO_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(?:[0+]:)+").expect("zero-run pattern"));

/// Renders a segment array as colon-joined lowercase hex without padding.
///
/// The slice must have exactly [`SEGMENTS`] entries, else this fails with
/// [`AddrError::SegmentCount`]. When `shorten` is set, the *leftmost* run of
/// zero segments collapses to `::` in a single substitution.
///
/// Known limitation, kept on purpose: the substitution takes the first
/// matching run, not the longest one, so an address with several zero runs
/// may compress a shorter leading run and leave a longer one spelled out.
/// The result is still a valid address, just not the canonical form. A zero
/// in the final segment has no trailing separator and never joins the run,
/// so a fully zero tail renders as `…::0`.
pub fn format_segments(segments: &[u16], shorten: bool) -> Result<String, AddrError> {
    if segments.len() != SEGMENTS {
        return Err(AddrError::SegmentCount);
    }

    let text = segments
        .iter()
        .map(|v| format!("{v:x}"))
        .collect::<Vec<_>>()
        .join(":");
    if shorten {
        return Ok(ZERO_RUN.replace(&text, "::").into_owned());
    }
    Ok(text)
}
