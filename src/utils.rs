/// Escape a byte string for printing, e.g., in logs.
///
/// Printable ASCII is kept as is, everything else is hex-escaped.
pub fn escape_byte_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| match byte {
            0x09 => String::from("\\t"),
            0x0A => String::from("\\n"),
            0x0D => String::from("\\r"),
            0x5C => String::from("\\\\"),
            0x20..=0x7E => format!("{}", *byte as char),
            _ => format!("\\x{:02x}", byte),
        })
        .collect::<Vec<String>>()
        .join("")
}
