#[cfg(feature = "quirk_folding_whitespace")]
use nom::{bytes::complete::tag, multi::many1_count, sequence::pair};
use nom::{
    branch::alt,
    bytes::complete::{take, take_while1},
    character::complete::char,
    combinator::{recognize, verify},
    multi::many0_count,
    sequence::{preceded, terminated},
};

use crate::{
    indicators::{is_CHAR, is_atom_char, is_ctext, is_lwsp_char, is_qtext},
    validate::{Rfc822ErrorKind, Rfc822ParseError, Rfc822Result},
};

/// How deep comments may be nested, e.g., `(a (b (c)))` has a depth of 3.
///
/// Deeper nesting is rejected. (8 should suffice.)
pub(crate) const MAX_COMMENT_DEPTH: usize = 8;

// ----- atom -----

/// `atom = 1*<any CHAR except specials, SPACE and CTLs>`
///
/// An atom is always a maximal run, i.e., it is never followed by another atom char.
pub(crate) fn atom(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    take_while1(is_atom_char)(input)
}

// ----- quoted-string -----

/// `quoted-pair = "\" CHAR`
///
/// Exactly one byte is inspected after the backslash.
pub(crate) fn quoted_pair(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(preceded(
        char('\\'),
        verify(take(1usize), |byte: &[u8]| is_CHAR(byte[0])),
    ))(input)
}

/// `quoted-string = <"> *(qtext/quoted-pair) <">`
pub(crate) fn quoted_string(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(preceded(
        char('"'),
        terminated(
            // Note: `qtext` includes linear-white-space.
            many0_count(alt((take_while1(is_qtext), lwsp, quoted_pair))),
            char('"'),
        ),
    ))(input)
}

// ----- word -----

/// `word = atom / quoted-string`
pub(crate) fn word(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    alt((atom, quoted_string))(input)
}

// ----- whitespace and comments -----

/// `LWSP-char = SPACE / HTAB`
///
/// RFC 822 allows folding, i.e., `linear-white-space = 1*([CRLF] LWSP-char)`. We don't.
#[cfg(not(feature = "quirk_folding_whitespace"))]
pub(crate) fn lwsp(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    take_while1(is_lwsp_char)(input)
}

/// `linear-white-space = 1*([CRLF] LWSP-char)`
#[cfg(feature = "quirk_folding_whitespace")]
pub(crate) fn lwsp(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(many1_count(alt((take_while1(is_lwsp_char), folding))))(input)
}

#[cfg(feature = "quirk_folding_whitespace")]
fn folding(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    let (remaining, folding) = recognize(pair(tag(b"\r\n"), take_while1(is_lwsp_char)))(input)?;

    log::warn!("Accepted folded whitespace");

    Ok((remaining, folding))
}

pub(crate) fn comment(
    remaining_recursions: usize,
) -> impl Fn(&[u8]) -> Rfc822Result<&[u8], &[u8]> {
    move |input: &[u8]| comment_limited(input, remaining_recursions)
}

/// `comment = "(" *(ctext / quoted-pair / comment) ")"`
fn comment_limited(input: &[u8], remaining_recursions: usize) -> Rfc822Result<&[u8], &[u8]> {
    let (body, _) = char('(')(input)?;

    if remaining_recursions == 0 {
        return Err(nom::Err::Failure(Rfc822ParseError {
            input,
            kind: Rfc822ErrorKind::RecursionLimitExceeded,
        }));
    }

    let (remaining, _) = terminated(
        many0_count(alt((
            take_while1(is_ctext),
            lwsp,
            quoted_pair,
            comment(remaining_recursions - 1),
        ))),
        char(')'),
    )(body)?;

    Ok((remaining, &input[..input.len() - remaining.len()]))
}

/// `x = *(linear-white-space / comment)`
///
/// RFC 822 allows linear-white-space and comments between any two lexical tokens.
pub(crate) fn x(input: &[u8]) -> Rfc822Result<&[u8], &[u8]> {
    recognize(many0_count(alt((lwsp, comment(MAX_COMMENT_DEPTH)))))(input)
}
