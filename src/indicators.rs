//! Character classes of the RFC 822 lexical grammar.
//!
//! RFC 822 defines `CHAR` as any 7-bit ASCII character including NUL. All classes below are
//! subsets of `CHAR`, i.e., every byte >= 0x80 is rejected.

use abnf_core::{is_cr, is_ctl, is_lf, is_wsp};

/// `CHAR = <any ASCII character>`
#[allow(non_snake_case)]
pub fn is_CHAR(byte: u8) -> bool {
    byte.is_ascii()
}

/// `LWSP-char = SPACE / HTAB`
pub fn is_lwsp_char(byte: u8) -> bool {
    is_wsp(byte)
}

/// ```abnf
/// specials = "(" / ")" / "<" / ">" / "@" /
///            "," / ";" / ":" / "\" / <"> /
///            "." / "[" / "]"
/// ```
pub fn is_specials(byte: u8) -> bool {
    matches!(
        byte,
        b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'.' | b'[' | b']'
    )
}

/// `atom = 1*<any CHAR except specials, SPACE and CTLs>`
///
/// Note: `CTL` includes DEL (0x7f).
pub fn is_atom_char(byte: u8) -> bool {
    is_CHAR(byte) && !is_specials(byte) && byte != b' ' && !is_ctl(byte)
}

/// `qtext = <any CHAR excepting <">, "\" & CR, and including linear-white-space>`
///
/// LF is excluded as well: a line break is only meaningful as part of folding.
pub fn is_qtext(byte: u8) -> bool {
    is_CHAR(byte) && !matches!(byte, b'"' | b'\\') && !is_cr(byte) && !is_lf(byte)
}

/// `ctext = <any CHAR excluding "(", ")", "\" & CR, & including linear-white-space>`
///
/// LF is excluded as well.
pub fn is_ctext(byte: u8) -> bool {
    is_CHAR(byte) && !matches!(byte, b'(' | b')' | b'\\') && !is_cr(byte) && !is_lf(byte)
}

/// `dtext = <any CHAR excluding "[", "]", "\" & CR, & including linear-white-space>`
///
/// LF and `"` are excluded as well.
pub fn is_dtext(byte: u8) -> bool {
    is_CHAR(byte) && !matches!(byte, b'[' | b']' | b'\\' | b'"') && !is_cr(byte) && !is_lf(byte)
}
