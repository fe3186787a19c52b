use itertools::Itertools;

pub mod decode;
pub mod transmit;

/// Parse a decimal or `0x` hexadecimal number.
pub fn parse_number(s: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };

    parsed.map_err(|_| format!("invalid number ‘{}’", s))
}

/// The protocol names with an encoder, for error messages.
pub fn encodable_protocols() -> String {
    [
        "nec",
        "sony",
        "rc5",
        "rc6",
        "dish",
        "sharp",
        "panasonic",
        "jvc",
        "lg",
        "samsung",
        "whynter",
        "magiquest",
    ]
    .iter()
    .join(", ")
}
