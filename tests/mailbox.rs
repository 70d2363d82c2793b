use rfc822_address::{
    error::ValidationErrorKind,
    is_valid_address, is_valid_address_bytes, validate_address,
    validate::{
        AddrSpecValidator, AddressValidator, MailboxListValidator, MailboxValidator, Validator,
    },
};

#[test]
fn test_valid_addresses() {
    let tests = [
        "user@example.com",
        "user.name+tag@sub.example.com",
        "\"quoted user\"@example.com",
        "Display Name <user@example.com>",
        "user@[192.168.0.1]",
        "user (comment) @example.com",
        "user(comment)@example.com",
        "(leading) user@example.com",
        "user@example.com (trailing)",
        "user@example.com ",
        "\t user@example.com",
        "user . name @ example . com",
        "user@(nested (comment)) example.com",
        "\"a\\\"b\"@example.com",
        "\"@\"@example.com",
        "user@[IPv6:2001:db8::1]",
        "user@[a\\]b]",
        "user@localhost",
        "!#$%&'*+-/=?^_`{|}~@example.com",
        "\"Doe, John\" <john@example.com>",
        "Name <@relay.example:user@example.com>",
        "Name <@a.example,@b.example:user@example.com>",
        "Name (nickname) <user@example.com>",
        "\"\" <user@example.com>",
        "\"\"@example.com",
    ];

    for test in tests {
        assert!(is_valid_address(test), "{test:?} should be valid");
        assert_eq!(validate_address(test), Ok(()));
    }
}

#[test]
fn test_invalid_addresses() {
    let tests = [
        "",
        " ",
        "\t\t",
        "user@",
        "@example.com",
        "user@@example.com",
        "plainaddress",
        "user (unbalanced@example.com",
        "user@example.com EXTRA TEXT",
        "user@example.com.",
        ".user@example.com",
        "user.@example.com",
        "user..name@example.com",
        "user@.example.com",
        "user@example..com",
        "user name@example.com",
        "<user@example.com>",
        "Display Name user@example.com",
        "Display Name <user@example.com",
        "Display Name <user@example.com>>",
        "Name <@relay:>",
        "Name <@relay,:user@example.com>",
        "user@[192.168.0.1",
        "user@[a[b]",
        "\"unterminated@example.com",
        "\"line\nbreak\"@example.com",
        "user@example.com\r\n",
        "us\u{a0}er@example.com",
        "us\u{2003}er@example.com",
        "üser@example.com",
        "user@exämple.com",
        "user\u{0}@example.com",
        "user\u{7f}@example.com",
        "user@example.com\u{0}",
        "Friends: a@example.com;",
        "a@example.com, b@example.com",
    ];

    for test in tests {
        assert!(!is_valid_address(test), "{test:?} should be invalid");
        assert!(validate_address(test).is_err());
    }
}

#[test]
fn test_error_kinds() {
    let tests = [
        ("", ValidationErrorKind::Empty),
        ("user@", ValidationErrorKind::Invalid { at: 5 }),
        (
            "user@example.com EXTRA TEXT",
            ValidationErrorKind::TrailingData { at: 17 },
        ),
        (
            "((((((((((deep))))))))))user@example.com",
            ValidationErrorKind::RecursionLimitExceeded,
        ),
    ];

    for (test, expected) in tests {
        assert_eq!(validate_address(test).unwrap_err().kind(), expected);
    }
}

#[test]
fn test_comment_nesting() {
    // One level of nesting must be accepted.
    assert!(is_valid_address("user (a (b)) @example.com"));

    let nested = |depth: usize| {
        format!(
            "user {}c{} @example.com",
            str::repeat("(", depth),
            str::repeat(")", depth)
        )
    };

    for depth in 1..=8 {
        assert!(is_valid_address(&nested(depth)), "depth {depth}");
    }

    assert!(!is_valid_address(&nested(9)));

    // Unbalanced nesting is never accepted.
    assert!(!is_valid_address("user (a (b) @example.com"));
    assert!(!is_valid_address("user (a) b) @example.com"));
}

#[test]
fn test_non_utf8() {
    assert!(is_valid_address_bytes(b"user@example.com"));
    assert!(!is_valid_address_bytes(b"user\xff@example.com"));
    assert!(!is_valid_address_bytes(b"\"user\xc0\"@example.com"));
    assert!(!is_valid_address_bytes(b"user@[\x80]"));
    assert!(!is_valid_address_bytes(b"(\xfe) user@example.com"));
}

#[test]
fn test_idempotence() {
    let tests = [
        "user@example.com",
        "user@",
        "Display Name <user@example.com>",
        "user (unbalanced@example.com",
    ];

    for test in tests {
        let first = validate_address(test);
        let second = validate_address(test);
        assert_eq!(first, second);
        assert_eq!(is_valid_address(test), is_valid_address(test));
    }
}

#[test]
fn test_validators() {
    let tests: [(&[u8], bool, bool, bool, bool); 8] = [
        // (input, addr-spec, mailbox, address, 1#mailbox)
        (b"user@example.com", true, true, true, true),
        (b"Name <user@example.com>", false, true, true, true),
        (b"Friends: a@example.com, b@example.com;", false, false, true, false),
        (b"Undisclosed recipients:;", false, false, true, false),
        (b"a@example.com, Name <b@example.com>", false, false, false, true),
        (b"a@example.com,,b@example.com,", false, false, false, true),
        (b",", false, false, false, false),
        (b"", false, false, false, false),
    ];

    for (test, addr_spec, mailbox, address, mailbox_list) in tests {
        assert_eq!(AddrSpecValidator::new().is_valid(test), addr_spec);
        assert_eq!(MailboxValidator::new().is_valid(test), mailbox);
        assert_eq!(AddressValidator::new().is_valid(test), address);
        assert_eq!(MailboxListValidator::new().is_valid(test), mailbox_list);
    }
}

#[test]
fn test_validators_are_shareable() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let validator = MailboxValidator::new();
    assert_send_sync(&validator);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let candidate = format!("user{i}@example.com");
                validator.is_valid(candidate.as_bytes())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_pathological_inputs() {
    const LENGTH: usize = 1 << 20;

    let tests = [
        str::repeat("(", LENGTH),
        str::repeat(")", LENGTH),
        str::repeat("\\", LENGTH),
        str::repeat("\"", LENGTH),
        str::repeat(" ", LENGTH),
        str::repeat("a", LENGTH),
        str::repeat("a.", LENGTH),
        str::repeat("a ", LENGTH),
        str::repeat("@", LENGTH),
        str::repeat("<", LENGTH),
        str::repeat("[", LENGTH),
        str::repeat("(a", LENGTH),
        str::repeat("() ", LENGTH),
        format!("\"{}", str::repeat("\\\"", LENGTH)),
        format!("({}", str::repeat("\\(", LENGTH)),
        format!("user@{}", str::repeat("a.", LENGTH)),
        format!("{}<", str::repeat("word ", LENGTH)),
    ];

    for test in tests {
        assert!(!is_valid_address(&test));
    }

    // Long, but valid.
    assert!(is_valid_address(&format!(
        "{}@example.com",
        str::repeat("a", LENGTH)
    )));
    assert!(is_valid_address(&format!(
        "user@{}com",
        str::repeat("a.", LENGTH)
    )));
    assert!(is_valid_address(&format!(
        "\"{}\"@example.com",
        str::repeat("\\a", LENGTH)
    )));
    assert!(is_valid_address(&format!(
        "user ({}) @example.com",
        str::repeat("\\(", LENGTH)
    )));
}
