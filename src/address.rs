#[cfg(feature = "fuzz")]
use nom::IResult;
#[cfg(feature = "quirk_dot_in_phrase")]
use nom::bytes::complete::tag;
#[cfg(not(feature = "quirk_dot_in_phrase"))]
use nom::multi::many1_count;
use nom::{
    branch::alt,
    character::complete::char,
    combinator::{map, opt, recognize, verify},
    multi::{many0, many0_count},
    sequence::{pair, preceded, terminated, tuple},
};

use crate::{
    core::{word, x},
    domain::domain,
    validate::Rfc822Result,
};

// ----- addr-spec -----

/// `local-part = word *("." word)`
pub(crate) fn local_part(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(pair(
        terminated(word, x),
        many0_count(tuple((char('.'), x, word, x))),
    ))(input)
}

/// `addr-spec = local-part "@" domain`
pub(crate) fn addr_spec(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(tuple((local_part, char('@'), x, domain)))(input)
}

// ----- route-addr -----

/// `route = 1#("@" domain) ":"`
pub(crate) fn route(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(tuple((
        char('@'),
        x,
        domain,
        many0_count(tuple((char(','), x, char('@'), x, domain))),
        char(':'),
        x,
    )))(input)
}

/// `route-addr = "<" [route] addr-spec ">"`
pub(crate) fn route_addr(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(tuple((char('<'), x, opt(route), addr_spec, char('>'), x)))(input)
}

/// `phrase = 1*word`
#[cfg(not(feature = "quirk_dot_in_phrase"))]
pub(crate) fn phrase(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(many1_count(terminated(word, x)))(input)
}

/// `phrase = word *(word / ".")`
///
/// RFC 822 doesn't allow `.` in a phrase, but `John Q. Public` is common.
#[cfg(feature = "quirk_dot_in_phrase")]
pub(crate) fn phrase(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(pair(
        terminated(word, x),
        many0_count(terminated(alt((word, dot_in_phrase)), x)),
    ))(input)
}

#[cfg(feature = "quirk_dot_in_phrase")]
fn dot_in_phrase(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    let (remaining, dot) = tag(b".")(input)?;

    log::warn!("Accepted `.` in phrase");

    Ok((remaining, dot))
}

// ----- mailbox -----

/// `mailbox = addr-spec / phrase route-addr`
///
/// Leading and trailing `x` is consumed.
pub(crate) fn mailbox(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(preceded(
        x,
        alt((addr_spec, recognize(pair(phrase, route_addr)))),
    ))(input)
}

/// `#mailbox`
///
/// Elements are separated by ",". Null elements are allowed, i.e., `a@b,,c@d` contains two
/// mailboxes (RFC 822, section 2.7). Returns the number of (non-null) mailboxes.
pub(crate) fn mailboxes(input: &[u8]) -> Rfc822Result<&[u8], usize> {
    map(
        pair(
            preceded(x, opt(mailbox)),
            many0(preceded(pair(char(','), x), opt(mailbox))),
        ),
        |(first, rest)| first.into_iter().chain(rest.into_iter().flatten()).count(),
    )(input)
}

/// `1#mailbox`
pub(crate) fn mailbox_list(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(verify(mailboxes, |count: &usize| *count > 0))(input)
}

// ----- address -----

/// `group = phrase ":" [#mailbox] ";"`
pub(crate) fn group(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(tuple((x, phrase, char(':'), mailboxes, char(';'), x)))(input)
}

/// `address = mailbox / group`
pub(crate) fn address(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    alt((mailbox, group))(input)
}

#[cfg(feature = "fuzz")]
/// `mailbox = addr-spec / phrase route-addr`
pub fn fuzz_mailbox(input: &[u8]) -> IResult<&[u8], &[u8]> {
    match mailbox(input) {
        Ok((rem, out)) => Ok((rem, out)),
        Err(e) => match e {
            nom::Err::Incomplete(needed) => Err(nom::Err::Incomplete(needed)),
            nom::Err::Error(e) => Err(nom::Err::Error(nom::error::Error::new(
                e.input,
                nom::error::ErrorKind::Verify,
            ))),
            nom::Err::Failure(e) => Err(nom::Err::Failure(nom::error::Error::new(
                e.input,
                nom::error::ErrorKind::TooLarge,
            ))),
        },
    }
}
