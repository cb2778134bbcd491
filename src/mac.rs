//! MAC address parsing, validation and formatting, and derivation of
//! documentation-range IPv6 addresses from a MAC.

use core::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::error::AddrError;
use crate::ipv6;

/// A run of the delimiter characters accepted in MAC address text.
static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_.\-:\s]+").expect("delimiter pattern"));

/// A maximal run of one or two hex digits.
static HEX_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Fa-f]{1,2}").expect("hex group pattern"));

/// Returns whether the slice is a valid MAC in loose numeric form: exactly 6
/// entries, each in `[0, 255]`.
///
/// This is the gate the fallible constructors use to decide whether to fail;
/// it never fails itself.
pub fn is_mac(octets: &[i32]) -> bool {
    octets.len() == 6 && octets.iter().all(|v| (0..=255).contains(v))
}

/// A MAC address.
///
/// Holds its 6 octets in transmission order. Values are immutable after
/// construction and carry no identity beyond their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Creates a new MAC address from its 6 octets in transmission order.
    ///
    /// Each parameter represents one byte of the MAC address in the standard
    /// format `xx:xx:xx:xx:xx:xx`.
    #[inline]
    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> MacAddress {
        Self([a, b, c, d, e, f])
    }

    /// Validates a loose octet sequence and narrows it to a [`MacAddress`].
    ///
    /// Fails with [`AddrError::InvalidMac`] when the slice does not satisfy
    /// [`is_mac`].
    pub fn from_octets(octets: &[i32]) -> Result<MacAddress, AddrError> {
        if !is_mac(octets) {
            return Err(AddrError::InvalidMac);
        }
        let mut out = [0u8; 6];
        for (byte, v) in out.iter_mut().zip(octets) {
            *byte = *v as u8;
        }
        Ok(Self(out))
    }

    /// Returns the 6 octets in transmission order.
    #[inline]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Parses a MAC address from free-form text.
    ///
    /// Surrounding whitespace is trimmed, every run of delimiters
    /// (underscore, period, hyphen, colon, whitespace) collapses to a single
    /// `:`, and each maximal run of 1-2 hex digits becomes one token. The
    /// text is accepted iff exactly 6 tokens result. One-digit tokens are
    /// single hex digits (`"a"` parses as `0x0A`), and undelimited 12-digit
    /// strings tokenize into six pairs.
    ///
    /// Malformed input is an ordinary outcome for free-form text, so this
    /// returns `None` instead of an error.
    pub fn parse(s: &str) -> Option<MacAddress> {
        let normalized = DELIMITERS.replace_all(s.trim(), ":");
        let tokens = HEX_GROUP
            .find_iter(&normalized)
            .map(|m| m.as_str())
            .collect::<Vec<_>>();
        if tokens.len() != 6 {
            trace!("expected 6 hex groups, found {} in {:?}", tokens.len(), s);
            return None;
        }

        let mut octets = [0u8; 6];
        for (byte, token) in octets.iter_mut().zip(&tokens) {
            *byte = u8::from_str_radix(token, 16).ok()?;
        }
        Some(Self(octets))
    }

    /// Builds the 16-entry documentation-range segment array for this MAC.
    ///
    /// Segment 0 is `0x2001` and segment 1 is `0x0DB8` (the RFC 3849
    /// prefix); segments 2-12 stay zero; segments 13-15 each pack two
    /// consecutive octets big-endian.
    pub fn to_doc_segments(&self) -> [u16; 16] {
        let [a, b, c, d, e, f] = self.0;

        let mut seg = [0u16; 16];
        seg[0] = 0x2001;
        seg[1] = 0x0DB8;
        seg[13] = (a as u16) << 8 | b as u16;
        seg[14] = (c as u16) << 8 | d as u16;
        seg[15] = (e as u16) << 8 | f as u16;
        seg
    }
}

impl From<[u8; 6]> for MacAddress {
    #[inline]
    fn from(octets: [u8; 6]) -> MacAddress {
        MacAddress(octets)
    }
}

impl Display for MacAddress {
    /// Formats as the canonical uppercase colon-hex form, e.g.
    /// `00:1B:2B:D5:AB:CD`.
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let [a, b, c, d, e, f] = self.0;

        write!(fmt, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{f:02X}")
    }
}

/// Formats a loose octet sequence as the canonical uppercase colon-hex form.
///
/// Fails with [`AddrError::InvalidMac`] when the slice does not satisfy
/// [`is_mac`].
pub fn format(octets: &[i32]) -> Result<String, AddrError> {
    Ok(MacAddress::from_octets(octets)?.to_string())
}

/// A MAC given either as text or as an already-parsed address.
#[derive(Debug, Clone, Copy)]
pub enum MacInput<'a> {
    /// Free-form text, run through [`MacAddress::parse`] first.
    Text(&'a str),
    /// An already-validated address.
    Addr(MacAddress),
}

impl<'a> From<&'a str> for MacInput<'a> {
    fn from(s: &'a str) -> MacInput<'a> {
        MacInput::Text(s)
    }
}

impl<'a> From<MacAddress> for MacInput<'a> {
    fn from(addr: MacAddress) -> MacInput<'a> {
        MacInput::Addr(addr)
    }
}

/// Derives the documentation-range IPv6 address of a MAC and renders it.
///
/// Text input that does not parse fails with [`AddrError::InvalidMac`].
/// Rendering delegates to [`ipv6::format_segments`], including its
/// first-match `::` shortening when `shorten` is set.
pub fn to_doc_ipv6<'a>(mac: impl Into<MacInput<'a>>, shorten: bool) -> Result<String, AddrError> {
    let addr = match mac.into() {
        MacInput::Text(s) => MacAddress::parse(s).ok_or(AddrError::InvalidMac)?,
        MacInput::Addr(addr) => addr,
    };

    ipv6::format_segments(&addr.to_doc_segments(), shorten)
}
