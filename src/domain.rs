use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::recognize,
    multi::many0_count,
    sequence::{delimited, pair, terminated, tuple},
};

use crate::{
    core::{atom, lwsp, quoted_pair, x},
    indicators::is_dtext,
    validate::Rfc822Result,
};

/// `domain-ref = atom`
#[inline]
pub(crate) fn domain_ref(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    atom(input)
}

/// `domain-literal = "[" *(dtext / quoted-pair) "]"`
pub(crate) fn domain_literal(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(delimited(
        char('['),
        many0_count(alt((take_while1(is_dtext), lwsp, quoted_pair))),
        char(']'),
    ))(input)
}

/// `sub-domain = domain-ref / domain-literal`
///
/// Trailing `x` is consumed.
pub(crate) fn sub_domain(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(terminated(alt((domain_ref, domain_literal)), x))(input)
}

/// `domain = sub-domain *("." sub-domain)`
pub(crate) fn domain(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(pair(
        sub_domain,
        many0_count(tuple((char('.'), x, sub_domain))),
    ))(input)
}
