//! Hue rotation for recoloring the shared marker asset.
//!
//! Every marker on the map is the same blue image. To draw it in an
//! arbitrary color we compute how far the target hue is from the asset's
//! own hue and apply that as a CSS `hue-rotate` filter.

/// Hue of the stock marker image in degrees. If the asset changes, this
/// has to change with it.
pub const REFERENCE_MARKER_HUE: f64 = 240.0;

/// Returns the `hue-rotate` degrees that turn the stock blue marker into
/// `color` (`#RRGGBB`).
///
/// `None` or an empty string yields `0.0`. The result is not normalized
/// to [0, 360); CSS treats it modulo 360 anyway. Malformed hex digits are
/// not rejected: they become NaN and the result is NaN.
pub fn hue_rotation_degrees(color: Option<&str>) -> f64 {
    hue_rotation_from(color, REFERENCE_MARKER_HUE)
}

/// Same as [`hue_rotation_degrees`] against a custom asset hue.
pub fn hue_rotation_from(color: Option<&str>, reference_hue: f64) -> f64 {
    match color {
        None | Some("") => 0.0,
        Some(hex) => hue(hex) - reference_hue,
    }
}

/// HSL hue in degrees of a `#RRGGBB` string.
pub fn hue(hex: &str) -> f64 {
    let r = channel(hex, 1);
    let g = channel(hex, 3);
    let b = channel(hex, 5);

    // f64::max/min skip NaN, which would hide a bad channel.
    if r.is_nan() || g.is_nan() || b.is_nan() {
        return f64::NAN;
    }

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0.0;
    }

    let delta = max - min;
    if max == r {
        let h = 60.0 * ((g - b) / delta);
        if g < b {
            h + 360.0
        } else {
            h
        }
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    }
}

/// Normalized value of the hex pair starting at byte `start`, or NaN.
fn channel(hex: &str, start: usize) -> f64 {
    hex.get(start..start + 2)
        .filter(|pair| pair.chars().all(|c| c.is_ascii_hexdigit()))
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .map_or(f64::NAN, |byte| f64::from(byte) / 255.0)
}
