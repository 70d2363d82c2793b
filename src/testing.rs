use crate::{utils::escape_byte_string, validate::Rfc822Result};

pub(crate) fn known_answer_test_parse<'a, P>(
    (test, expected_remainder, expected_object): (&'a [u8], &[u8], &[u8]),
    parser: P,
) where
    P: Fn(&'a [u8]) -> Rfc822Result<&'a [u8], &'a [u8]>,
{
    let (got_remainder, got_object) = parser(test).unwrap();

    if expected_remainder != got_remainder || expected_object != got_object {
        println!("# Debug (`escape_byte_string`, encapsulated by `<<<` and `>>>`)");
        println!(
            "Input:     <<<{}>>>\nLeft:      <<<{}>>> <<<{}>>>\nRight:     <<<{}>>> <<<{}>>>",
            escape_byte_string(test),
            escape_byte_string(expected_object),
            escape_byte_string(expected_remainder),
            escape_byte_string(got_object),
            escape_byte_string(got_remainder),
        );
        panic!("Parser did not produce the expected (object, remainder)");
    }
}

pub(crate) fn known_answer_test_reject<'a, O, P>(tests: &[&'a [u8]], parser: P)
where
    O: std::fmt::Debug,
    P: Fn(&'a [u8]) -> Rfc822Result<&'a [u8], O>,
{
    for test in tests {
        if let Ok((remainder, object)) = parser(*test) {
            panic!(
                "Parser accepted <<<{}>>> as {object:?} (remainder: <<<{}>>>)",
                escape_byte_string(test),
                escape_byte_string(remainder),
            );
        }
    }
}
