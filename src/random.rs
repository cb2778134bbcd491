//! Generation of random documentation-range IPv6 addresses.

use log::trace;
use rand::Rng;

use crate::error::AddrError;
use crate::ipv6;

/// Fixed prefix of every generated address: `2001:db8:4159:5241`.
pub const DOC_PREFIX: [u16; 4] = [0x2001, 0x0DB8, 0x4159, 0x5241];

/// Highest number of forced-zero segments the generator accepts.
const MAX_ZERO_SEGMENTS: i32 = 13;

/// A generated documentation-range address in both textual forms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocAddress {
    /// Compressed (`::`) form.
    pub short: String,
    /// Uncompressed form.
    pub long: String,
    /// The 16 segments the strings were rendered from.
    pub raw: [u16; 16],
}

/// Generates a random address under the [`DOC_PREFIX`] prefix.
///
/// The first `zero_count` of the 12 variable segments are forced to zero,
/// simulating a truncated address; the rest draw uniformly from the 12-bit
/// range `[0, 4095]`. A `zero_count` of zero or less forces nothing. Values
/// above 13 fail with [`AddrError::TooManyZeros`].
pub fn random_doc_ipv6(zero_count: i32) -> Result<DocAddress, AddrError> {
    if zero_count > MAX_ZERO_SEGMENTS {
        return Err(AddrError::TooManyZeros);
    }

    let mut rng = rand::rng();
    let mut zeros = zero_count;
    let mut raw = [0u16; 16];
    for (i, seg) in raw.iter_mut().enumerate() {
        *seg = if i < DOC_PREFIX.len() {
            DOC_PREFIX[i]
        } else if zeros > 0 {
            zeros -= 1;
            0
        } else {
            rng.random_range(0..0x1000)
        };
    }
    trace!("generated documentation address segments {:x?}", raw);

    Ok(DocAddress {
        short: ipv6::format_segments(&raw, true)?,
        long: ipv6::format_segments(&raw, false)?,
        raw,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_more_than_thirteen_zeros() {
        assert_eq!(random_doc_ipv6(14), Err(AddrError::TooManyZeros));
        assert_eq!(
            random_doc_ipv6(i32::MAX).unwrap_err().to_string(),
            "cannot have more than 11 leading zero segments"
        );
    }

    #[test]
    fn thirteen_zeros_blanks_the_whole_tail() {
        let addr = random_doc_ipv6(13).unwrap();
        assert_eq!(addr.raw[..4], DOC_PREFIX);
        assert!(addr.raw[4..].iter().all(|&v| v == 0));
        assert_eq!(addr.short, "2001:db8:4159:5241::0");
        assert_eq!(addr.long, "2001:db8:4159:5241:0:0:0:0:0:0:0:0:0:0:0:0");
    }

    #[test]
    fn partial_budget_zeroes_leading_tail_segments() {
        let addr = random_doc_ipv6(5).unwrap();
        assert!(addr.raw[4..9].iter().all(|&v| v == 0));
        assert!(addr.raw[9..].iter().all(|&v| v <= 0xfff));
    }

    #[test]
    fn default_fill_stays_in_twelve_bit_range() {
        for _ in 0..64 {
            let addr = random_doc_ipv6(0).unwrap();
            assert_eq!(addr.raw[..4], DOC_PREFIX);
            assert!(addr.raw[4..].iter().all(|&v| v <= 0xfff));
            assert!(addr.long.starts_with("2001:db8:4159:5241"));
        }
    }

    #[test]
    fn random_fill_is_not_all_zero_across_calls() {
        // One all-zero tail happens with probability 4096^-12 per call.
        let any_nonzero =
            (0..32).any(|_| random_doc_ipv6(0).unwrap().raw[4..].iter().any(|&v| v != 0));
        assert!(any_nonzero);
    }

    #[test]
    fn negative_budget_behaves_like_zero() {
        let addr = random_doc_ipv6(-3).unwrap();
        assert_eq!(addr.raw[..4], DOC_PREFIX);
        assert_eq!(ipv6::format_segments(&addr.raw, false).unwrap(), addr.long);
        assert_eq!(ipv6::format_segments(&addr.raw, true).unwrap(), addr.short);
    }
}
