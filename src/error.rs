use thiserror::Error;

/// Errors reported by the conversion routines.
///
/// Every fallible operation fails before producing any output; there is no
/// partial result to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddrError {
    /// The value is not a sequence of exactly 6 octets in `[0, 255]`.
    #[error("not a valid MAC address array")]
    InvalidMac,

    /// An IPv6 segment slice does not have exactly 16 entries.
    #[error("must have 16 entries")]
    SegmentCount,

    /// More forced-zero segments requested than the generator allows.
    ///
    /// The message understates the enforced threshold of 13; the text is
    /// kept verbatim for output compatibility.
    #[error("cannot have more than 11 leading zero segments")]
    TooManyZeros,
}
