// PixelPicker
// copyright zipxing@hotmail.com 2022～2025

//! PixelPicker is the conversion core of an interactive color picker tool.
//! A frontend binds sliders and text fields for RGB, CMYK and HLS controls
//! and keeps them synchronized through the pairwise conversions offered here.
//!
//! The crate is frontend agnostic: terminal, SDL and web frontends all drive
//! it the same way, passing raw channel values in and reading the other two
//! encodings back. No rendering or event handling lives here.
//!
//! Conversions are pure functions. The two HLS operations are fallible and
//! report a range violation instead of returning a bad value; frontends are
//! expected to substitute [`color::Hls::ZERO`] and warn the user.

/// color types and conversions: rgb, cmyk, hls
pub mod color;

/// range violation error
pub mod error;

/// log
#[cfg(feature = "log4rs")]
pub mod log;

/// synchronized picker state driven by frontends
pub mod picker;

pub use color::{
    cmyk_to_rgb, hls_to_rgb, rgb_to_cmyk, rgb_to_hls, Cmyk, ColorSpace, Hls, Rgb, EPSILON,
};
pub use error::{ColorError, Result};
pub use picker::{parse_byte, parse_double, Picker};
