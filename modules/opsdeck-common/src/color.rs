//! Accent-color helpers for the readiness panels. Inputs are 6-digit hex
//! strings; malformed values are rejected rather than producing garbage CSS.

/// Parse a `#RRGGBB` string into channels.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert a hex color to an `rgba(...)` string with the given opacity.
pub fn hex_to_rgba(hex: &str, opacity: f64) -> Option<String> {
    let (r, g, b) = parse_hex(hex)?;
    Some(format!("rgba({r}, {g}, {b}, {opacity})"))
}

/// Darken a hex color by `percent`, flooring each channel.
pub fn darken_color(hex: &str, percent: u32) -> Option<String> {
    let (r, g, b) = parse_hex(hex)?;
    let factor = 1.0 - f64::from(percent) / 100.0;
    let scale = |c: u8| (f64::from(c) * factor).floor().clamp(0.0, 255.0) as u8;
    Some(format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgba_known_value() {
        assert_eq!(
            hex_to_rgba("#D6407D", 0.08).as_deref(),
            Some("rgba(214, 64, 125, 0.08)")
        );
    }

    #[test]
    fn darken_reduces_each_channel_floored() {
        // 214 * 0.7 = 149.8 -> 149, 64 * 0.7 = 44.8 -> 44, 125 * 0.7 = 87.5 -> 87
        assert_eq!(darken_color("#D6407D", 30).as_deref(), Some("#952c57"));
    }

    #[test]
    fn darken_by_zero_is_identity() {
        assert_eq!(darken_color("#10b981", 0).as_deref(), Some("#10b981"));
    }

    #[test]
    fn over_darkening_clamps_to_black() {
        assert_eq!(darken_color("#D6407D", 150).as_deref(), Some("#000000"));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(parse_hex("D6407D"), None);
        assert_eq!(parse_hex("#D6407"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(hex_to_rgba("not-a-color", 0.5), None);
        assert_eq!(darken_color("", 20), None);
    }
}
