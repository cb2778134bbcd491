//! Conversion between IEEE MAC addresses and documentation-range IPv6
//! addresses (RFC 3849, `2001:db8::/32`).
//!
//! The crate offers three things: a MAC address codec ([`mac`]), a textual
//! renderer for 16-entry segment arrays with optional `::` shortening
//! ([`ipv6`]), and a generator of random documentation-range addresses
//! ([`random`]). Everything is a pure computation over small fixed-size
//! values; the generator is the only non-deterministic operation.
//!
//! ```
//! use docaddr::mac::{self, MacAddress};
//!
//! let mac = MacAddress::parse("00-1b-2b-d5-ab-cd").unwrap();
//! assert_eq!(mac.to_string(), "00:1B:2B:D5:AB:CD");
//! assert_eq!(mac::to_doc_ipv6(mac, true)?, "2001:db8::1b:2bd5:abcd");
//! # Ok::<(), docaddr::AddrError>(())
//! ```

pub mod error;
pub mod ipv6;
pub mod mac;
pub mod random;

pub use error::AddrError;
pub use mac::{MacAddress, MacInput};
pub use random::{DocAddress, random_doc_ipv6};
