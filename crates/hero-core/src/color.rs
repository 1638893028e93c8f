use crate::error::ContentError;
use glam::Vec3;

/// Parse `#rrggbb` (or `rrggbb`, or the short `#rgb` form) into linear RGB.
///
/// Hex colours are authored in sRGB; lighting happens in linear space.
pub fn parse_hex(hex: &str) -> Result<Vec3, ContentError> {
    let digits = hex.trim().trim_start_matches('#');
    let bad = || ContentError::BadColor(hex.to_string());
    if !digits.is_ascii() {
        return Err(bad());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
    let (r, g, b) = match digits.len() {
        6 => (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ),
        3 => {
            let expand = |c: u8| c * 17;
            (
                expand(channel(&digits[0..1])?),
                expand(channel(&digits[1..2])?),
                expand(channel(&digits[2..3])?),
            )
        }
        _ => return Err(bad()),
    };
    Ok(Vec3::new(
        srgb_to_linear(r as f32 / 255.0),
        srgb_to_linear(g as f32 / 255.0),
        srgb_to_linear(b as f32 / 255.0),
    ))
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        let white = parse_hex("#ffffff").unwrap();
        assert!((white - Vec3::ONE).abs().max_element() < 1e-5);
        let short = parse_hex("#fff").unwrap();
        assert_eq!(short, white);
        let cyan = parse_hex("00d4ff").unwrap();
        assert_eq!(cyan.x, 0.0);
        assert!(cyan.y > 0.6 && cyan.y < 0.7);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_hex("").is_err());
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#gg0000").is_err());
        assert!(parse_hex("#ééé").is_err());
    }
}
