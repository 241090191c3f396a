// PixelPicker
// copyright zipxing@hotmail.com 2022~2024

use crate::color::*;

#[inline(always)]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let k = 1.0 - r.max(g.max(b));
    if (k - 1.0).abs() < EPSILON {
        // pure black, the chromatic components are undefined
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k,
        };
    }

    Cmyk {
        c: (1.0 - r - k) / (1.0 - k),
        m: (1.0 - g - k) / (1.0 - k),
        y: (1.0 - b - k) / (1.0 - k),
        k,
    }
}

/// Inputs are trusted to lie in [0, 1]; out of range values propagate into
/// the arithmetic unchecked, picker fields are clamped before they get here.
#[inline(always)]
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    debug_assert!(
        [cmyk.c, cmyk.m, cmyk.y, cmyk.k]
            .iter()
            .all(|v| (0.0..=1.0).contains(v)),
        "cmyk components out of [0, 1]: {:?}",
        cmyk
    );

    Rgb {
        r: to_channel((1.0 - cmyk.c) * (1.0 - cmyk.k)),
        g: to_channel((1.0 - cmyk.m) * (1.0 - cmyk.k)),
        b: to_channel((1.0 - cmyk.y) * (1.0 - cmyk.k)),
    }
}

#[inline(always)]
fn to_channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
