#[macro_export]
macro_rules! impl_validate_target {
    ($validator:ty) => {
        use libfuzzer_sys::fuzz_target;

        fuzz_target!(|input: &[u8]| {
            use rfc822_address::validate::Validator;
            #[cfg(feature = "debug")]
            use rfc822_address::utils::escape_byte_string;

            #[cfg(feature = "debug")]
            println!("[!] Input: {}", escape_byte_string(input));

            let validator = <$validator>::new();
            let got = validator.validate(input);

            #[cfg(feature = "debug")]
            println!("[!] Result: {got:?}");

            // Validation is pure.
            assert_eq!(got, validator.validate(input));
            assert_eq!(got.is_ok(), validator.is_valid(input));

            // Every valid address is ASCII.
            if got.is_ok() {
                assert!(input.is_ascii());
            }

            #[cfg(feature = "debug")]
            println!("\n\n\n");
        });
    };
}
