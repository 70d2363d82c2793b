//! Validation of RFC 822 addresses.
//!
//! A validator takes a complete candidate (`&[u8]`) and decides whether it is matched *in full*
//! by one of the top-level productions of RFC 822, section 6.1. A candidate that starts with a
//! valid address but carries trailing data is rejected.
//!
//! # Example
//!
//! ```rust
//! use rfc822_address::{
//!     error::ValidationErrorKind,
//!     validate::{MailboxValidator, Validator},
//! };
//!
//! let validator = MailboxValidator::new();
//!
//! assert!(validator.is_valid(b"Alice <alice@example.org>"));
//!
//! let error = validator.validate(b"alice@example.org ???").unwrap_err();
//! assert_eq!(error.kind(), ValidationErrorKind::TrailingData { at: 18 });
//! ```

use nom::error::{ErrorKind, ParseError};

use crate::{
    address::{addr_spec, address, mailbox, mailbox_list},
    core::MAX_COMMENT_DEPTH,
    error::{ValidationError, ValidationErrorKind},
};

/// An extended version of [`nom::IResult`].
pub(crate) type Rfc822Result<I, O> = Result<(I, O), nom::Err<Rfc822ParseError<I>>>;

/// An extended version of [`nom::error::Error`].
#[derive(Debug)]
pub(crate) struct Rfc822ParseError<I> {
    pub input: I,
    pub kind: Rfc822ErrorKind,
}

/// An extended version of [`nom::error::ErrorKind`].
#[derive(Debug)]
pub(crate) enum Rfc822ErrorKind {
    RecursionLimitExceeded,
    Nom(ErrorKind),
}

// On alternation, the error that got furthest into the input is kept.
impl<'a> ParseError<&'a [u8]> for Rfc822ParseError<&'a [u8]> {
    fn from_error_kind(input: &'a [u8], kind: ErrorKind) -> Self {
        Self {
            input,
            kind: Rfc822ErrorKind::Nom(kind),
        }
    }

    fn append(_: &'a [u8], _: ErrorKind, other: Self) -> Self {
        other
    }

    fn or(self, other: Self) -> Self {
        if other.input.len() < self.input.len() {
            other
        } else {
            self
        }
    }
}

pub trait Validator {
    /// Validate a complete candidate.
    fn validate(&self, input: &[u8]) -> Result<(), ValidationError>;

    fn is_valid(&self, input: &[u8]) -> bool {
        self.validate(input).is_ok()
    }
}

/// Validator for `mailbox = addr-spec / phrase route-addr`.
#[derive(Clone, Copy, Debug, Default)]
// We use `#[non_exhaustive]` to prevent users from using struct literal syntax.
//
// This allows to add configuration options later.
#[non_exhaustive]
pub struct MailboxValidator;

/// Validator for `addr-spec = local-part "@" domain`.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct AddrSpecValidator;

/// Validator for `address = mailbox / group`.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct AddressValidator;

/// Validator for `1#mailbox`, i.e., a comma-separated list of at least one mailbox.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct MailboxListValidator;

macro_rules! impl_validator_new {
    ($validator:ty) => {
        impl $validator {
            /// Create validator with default configuration.
            pub fn new() -> Self {
                Self::default()
            }
        }
    };
}

impl_validator_new!(MailboxValidator);
impl_validator_new!(AddrSpecValidator);
impl_validator_new!(AddressValidator);
impl_validator_new!(MailboxListValidator);

// -------------------------------------------------------------------------------------------------

fn validate_with<'a, O, P>(input: &'a [u8], parser: P) -> Result<(), ValidationError>
where
    P: FnOnce(&'a [u8]) -> Rfc822Result<&'a [u8], O>,
{
    if input.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::Empty));
    }

    let index = |remaining: &[u8]| input.len() - remaining.len();

    match parser(input) {
        Ok((remaining, _)) if remaining.is_empty() => Ok(()),
        Ok((remaining, _)) => Err(ValidationError::new(ValidationErrorKind::TrailingData {
            at: index(remaining),
        })),
        Err(nom::Err::Error(error) | nom::Err::Failure(error)) => match error.kind {
            Rfc822ErrorKind::RecursionLimitExceeded => {
                log::debug!(
                    "Comment at index {} exceeds nesting depth of {MAX_COMMENT_DEPTH}",
                    index(error.input)
                );

                Err(ValidationError::new(
                    ValidationErrorKind::RecursionLimitExceeded,
                ))
            }
            Rfc822ErrorKind::Nom(kind) => {
                let at = index(error.input);

                log::debug!("Invalid syntax at index {at} ({kind:?})");

                Err(ValidationError::new(ValidationErrorKind::Invalid { at }))
            }
        },
        // Parsers are complete, i.e., they never ask for more data.
        Err(nom::Err::Incomplete(_)) => Err(ValidationError::new(ValidationErrorKind::Invalid {
            at: input.len(),
        })),
    }
}

macro_rules! impl_validate_for_object {
    ($validator:ident, $parser:ident) => {
        impl Validator for $validator {
            fn validate(&self, input: &[u8]) -> Result<(), ValidationError> {
                validate_with(input, $parser)
            }
        }
    };
}

impl_validate_for_object!(MailboxValidator, mailbox);
impl_validate_for_object!(AddrSpecValidator, addr_spec);
impl_validate_for_object!(AddressValidator, address);
impl_validate_for_object!(MailboxListValidator, mailbox_list);

// -------------------------------------------------------------------------------------------------

/// Check if `candidate` is a syntactically valid RFC 822 `mailbox`.
///
/// Both the bare form (`user@example.com`) and the display form (`Name <user@example.com>`)
/// are accepted. The whole candidate must match.
pub fn is_valid_address(candidate: &str) -> bool {
    is_valid_address_bytes(candidate.as_bytes())
}

/// Same as [`is_valid_address`] but for candidates that may not be UTF-8.
pub fn is_valid_address_bytes(candidate: &[u8]) -> bool {
    MailboxValidator.is_valid(candidate)
}

/// Same as [`is_valid_address`] but returns the reason for a rejection.
pub fn validate_address(candidate: &str) -> Result<(), ValidationError> {
    MailboxValidator.validate(candidate.as_bytes())
}
