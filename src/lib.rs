//! # RFC 822 address validation
//!
//! rfc822-address decides whether a string is a syntactically valid [RFC 822] address.
//! The grammar of RFC 822, section 6.1, is implemented with [nom], one parser per production.
//!
//! The main entry point is [`is_valid_address`], which accepts exactly the strings matched in
//! full by the RFC 822 `mailbox` production, i.e., a bare `addr-spec` (`user@example.com`) or a
//! `phrase route-addr` (`Display Name <user@example.com>`). Comments, quoted strings, domain
//! literals, and source routes are supported.
//!
//! This crate does not extract the parts of an address. It is a yes/no acceptor.
//!
//! ## Example
//!
//! ```rust
//! use rfc822_address::{is_valid_address, validate_address, error::ValidationErrorKind};
//!
//! assert!(is_valid_address("user@example.com"));
//! assert!(is_valid_address("\"quoted user\"@example.com"));
//! assert!(is_valid_address("Display Name <user@example.com>"));
//! assert!(is_valid_address("user (comment) @[192.168.0.1]"));
//!
//! assert!(!is_valid_address("user@"));
//! assert!(!is_valid_address("plainaddress"));
//!
//! // The whole input must match.
//! assert_eq!(
//!     validate_address("user@example.com EXTRA TEXT").unwrap_err().kind(),
//!     ValidationErrorKind::TrailingData { at: 17 },
//! );
//! ```
//!
//! ## Validators
//!
//! Besides `mailbox`, the other top-level productions of RFC 822, section 6.1, can be validated
//! through the [`Validator`](validate::Validator) trait:
//!
//! | Validator              | Production                           |
//! |------------------------|--------------------------------------|
//! | `MailboxValidator`     | `mailbox = addr-spec / phrase route-addr` |
//! | `AddrSpecValidator`    | `addr-spec = local-part "@" domain`  |
//! | `AddressValidator`     | `address = mailbox / group`          |
//! | `MailboxListValidator` | `1#mailbox`                          |
//!
//! ## Limits
//!
//! Comments may be nested up to a depth of 8, e.g., `(a (b (c)))` has a depth of 3. Deeper
//! nesting is rejected. All validators run in linear time and never panic.
//!
//! ## Features
//!
//! | Feature                  | Description                                          | Default |
//! |--------------------------|------------------------------------------------------|---------|
//! | quirk_dot_in_phrase      | Accept `.` in a display name, e.g., `John Q. Public` | No      |
//! | quirk_folding_whitespace | Accept `CRLF` followed by SP or HTAB between tokens  | No      |
//! | quirk                    | Enable all `quirk_*` features                        | No      |
//! | fuzz                     | Expose internal parsers for fuzzing                  | No      |
//!
//! ## Quirks
//!
//! Features starting with `quirk_` accept input that is *almost* correct.
//! Every accepted quirk is logged through [log] with level `warn`.
//!
//! [RFC 822]: https://datatracker.ietf.org/doc/html/rfc822

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod address;
mod core;
mod domain;
#[cfg(test)]
mod testing;

pub mod error;
pub mod indicators;
pub mod utils;
pub mod validate;

#[cfg(feature = "fuzz")]
pub mod fuzz {
    pub use crate::address::fuzz_mailbox;
}

pub use validate::{is_valid_address, is_valid_address_bytes, validate_address};
