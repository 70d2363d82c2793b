#![no_main]

use libfuzzer_sys::fuzz_target;
use rfc822_address::{
    fuzz::fuzz_mailbox,
    is_valid_address, is_valid_address_bytes,
    validate::{MailboxValidator, Validator},
};

fuzz_target!(|input: &[u8]| {
    let valid = is_valid_address_bytes(input);

    assert_eq!(valid, MailboxValidator::new().is_valid(input));
    assert_eq!(valid, is_valid_address_bytes(input));

    if let Ok(input) = std::str::from_utf8(input) {
        assert_eq!(valid, is_valid_address(input));
    }

    // Validity means that the parser consumes everything.
    let consumed = matches!(fuzz_mailbox(input), Ok((remaining, _)) if remaining.is_empty());
    assert_eq!(valid, consumed);
});
