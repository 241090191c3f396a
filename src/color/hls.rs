// PixelPicker
// copyright zipxing@hotmail.com 2022～2025

use crate::color::*;
use crate::error::{ColorError, Result};

/// Computes lightness from the channel extrema and hue from whichever
/// channel dominates. The range check on the way out is unreachable under
/// correct arithmetic on valid 8 bit input; it stays because frontends rely
/// on never seeing an out of range tuple.
#[inline(always)]
pub fn rgb_to_hls(rgb: Rgb) -> Result<Hls> {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let l = (max + min) / 2.0;

    let (h, s) = if max - min < EPSILON {
        // achromatic
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h * 60.0, s)
    };

    check_hls(h, l, s)?;
    Ok(Hls { h, l, s })
}

/// Fails up front when a component is out of range; callers clamp field
/// input before converting or handle the error themselves.
#[inline(always)]
pub fn hls_to_rgb(hls: Hls) -> Result<Rgb> {
    check_hls(hls.h, hls.l, hls.s)?;
    let Hls { h, l, s } = hls;

    if l <= 0.0 {
        return Ok(Rgb::new(0, 0, 0));
    }
    if s <= 0.0 {
        let gray = (l * 255.0).round() as u8;
        return Ok(Rgb::new(gray, gray, gray));
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hk = h / 360.0;

    let mut t = [hk + 1.0 / 3.0, hk, hk - 1.0 / 3.0];
    let mut rgb = [0.0f64; 3];
    for i in 0..3 {
        if t[i] < 0.0 {
            t[i] += 1.0;
        }
        if t[i] > 1.0 {
            t[i] -= 1.0;
        }
        rgb[i] = if t[i] < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t[i]
        } else if t[i] < 0.5 {
            q
        } else if t[i] < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t[i]) * 6.0
        } else {
            p
        };
    }
    for v in rgb.iter_mut() {
        if *v < EPSILON {
            *v = 0.0;
        }
        if *v > 1.0 {
            *v = 1.0;
        }
    }

    Ok(Rgb::new(
        (rgb[0] * 255.0).round() as u8,
        (rgb[1] * 255.0).round() as u8,
        (rgb[2] * 255.0).round() as u8,
    ))
}

#[inline(always)]
fn check_hls(h: f64, l: f64, s: f64) -> Result<()> {
    if !(0.0..=360.0).contains(&h) {
        return Err(ColorError::RangeViolation("hue", h, 0.0, 360.0));
    }
    if !(0.0..=1.0).contains(&l) {
        return Err(ColorError::RangeViolation("lightness", l, 0.0, 1.0));
    }
    if !(0.0..=1.0).contains(&s) {
        return Err(ColorError::RangeViolation("saturation", s, 0.0, 1.0));
    }
    Ok(())
}
