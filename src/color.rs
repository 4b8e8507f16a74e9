use std::str::FromStr;

use palette::Srgb;

// ---------------------------------------------------------------------------
// Hex colour helpers for the catalog "Hex Color" column
// ---------------------------------------------------------------------------

/// Trim and make sure the colour starts with `#`.
pub fn normalize_hex(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    }
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional).
pub fn parse_hex(hex: &str) -> Option<Srgb<u8>> {
    Srgb::<u8>::from_str(hex.trim()).ok()
}
