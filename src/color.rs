// PixelPicker
// copyright zipxing@hotmail.com 2022～2025

//! Defines picker color types
///
/// Value ranges:
///   RGB  r: 0 - 255      g: 0 - 255     b: 0 - 255
///   CMYK c: 0.0 - 1.0    m: 0.0 - 1.0   y: 0.0 - 1.0   k: 0.0 - 1.0
///   HLS  h: 0.0 - 360.0 (degrees)       l: 0.0 - 1.0   s: 0.0 - 1.0
///
/// CMYK is not a bijective inverse of RGB: any tuple with non minimal k maps
/// to the same RGB. [`rgb_to_cmyk`] always produces the maximal k form, and
/// that form is the only guaranteed round trip pair with [`cmyk_to_rgb`].
/// HLS round trips with RGB up to 8 bit quantization, within one count per
/// channel.
///
/// The `Display` impls format values the way the picker text fields show
/// them: RGB as integers, CMYK and L/S as percentages, H as degrees.
use serde::{Deserialize, Serialize};
use std::fmt;

/// rgb <-> cmyk
mod cmyk;
pub use cmyk::*;

/// rgb <-> hls
mod hls;
pub use hls::*;

/// tolerance for the achromatic and pure black guards
pub const EPSILON: f64 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    Rgb,
    Cmyk,
    Hls,
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let css = ["rgb", "cmyk", "hls"];
        write!(f, "{}", css[*self as usize])
    }
}

/// additive color, 8 bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// subtractive print model, fractional components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:.1} {:.1} {:.1} {:.1}",
            self.c * 100.0,
            self.m * 100.0,
            self.y * 100.0,
            self.k * 100.0
        )
    }
}

/// perceptual hue / lightness / saturation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hls {
    pub h: f64,
    pub l: f64,
    pub s: f64,
}

impl Hls {
    /// fallback value frontends substitute after a range violation
    pub const ZERO: Hls = Hls {
        h: 0.0,
        l: 0.0,
        s: 0.0,
    };

    pub fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }
}

impl fmt::Display for Hls {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:.1} {:.2} {:.2}",
            self.h,
            self.l * 100.0,
            self.s * 100.0
        )
    }
}
