pub mod commands;
pub mod tracing;

pub const PROBE_DECODE_VERSION_MESSAGE: &str = env!("CARGO_PKG_VERSION");

/// Parses an instruction word given in hex, with or without a `0x` prefix
pub fn parse_word(s: &str) -> Result<u32, String> {
    let digits = s.trim().trim_start_matches("0x").trim_start_matches("0X").replace('_', "");
    u32::from_str_radix(&digits, 16)
        .map_err(|e| format!("'{}' is not a 32-bit hex instruction word: {}", s, e))
}
