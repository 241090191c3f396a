// PixelPicker
// copyright zipxing@hotmail.com 2022～2025

//! Synchronized picker state.
//!
//! Frontends bind three control groups (rgb, cmyk, hls sliders plus text
//! fields) to one [`Picker`]. An edit in any one encoding recomputes the
//! other two; the edited values stay on their controls verbatim. When an
//! rgb edit cannot be expressed in hls the picker keeps [`Hls::ZERO`],
//! raises `hls_warning` and logs, the frontend shows a warning dialog.

use crate::color::{cmyk_to_rgb, hls_to_rgb, rgb_to_cmyk, rgb_to_hls, Cmyk, ColorSpace, Hls, Rgb};
use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Picker {
    pub rgb: Rgb,
    pub cmyk: Cmyk,
    pub hls: Hls,
    /// set when the last rgb edit could not be expressed in hls
    pub hls_warning: bool,
}

impl Picker {
    /// starts at black with all three encodings consistent
    pub fn new() -> Self {
        let rgb = Rgb::new(0, 0, 0);
        let mut picker = Self {
            rgb,
            cmyk: rgb_to_cmyk(rgb),
            hls: Hls::ZERO,
            hls_warning: false,
        };
        picker.sync_hls();
        picker
    }

    /// rgb controls moved, or a platform color dialog seeded a color
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb;
        self.cmyk = rgb_to_cmyk(rgb);
        self.sync_hls();
    }

    /// cmyk controls moved, the given components stay on the controls
    /// even when non minimal k would normalize differently
    pub fn set_cmyk(&mut self, cmyk: Cmyk) {
        self.cmyk = cmyk;
        self.rgb = cmyk_to_rgb(cmyk);
        self.sync_hls();
    }

    /// hls controls moved, fails without touching state when a component
    /// is out of range
    pub fn set_hls(&mut self, hls: Hls) -> Result<()> {
        let rgb = hls_to_rgb(hls)?;
        self.hls = hls;
        self.hls_warning = false;
        self.rgb = rgb;
        self.cmyk = rgb_to_cmyk(rgb);
        Ok(())
    }

    fn sync_hls(&mut self) {
        match rgb_to_hls(self.rgb) {
            Ok(hls) => {
                self.hls = hls;
                self.hls_warning = false;
            }
            Err(e) => {
                warn!(
                    "{} {} cannot be expressed as {}: {}",
                    ColorSpace::Rgb,
                    self.rgb,
                    ColorSpace::Hls,
                    e
                );
                self.hls = Hls::ZERO;
                self.hls_warning = true;
            }
        }
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

/// parse an 8 bit channel field, clamping into min..=max and falling back
/// to min when the text does not parse
pub fn parse_byte(text: &str, min: u8, max: u8) -> u8 {
    match text.trim().parse::<u8>() {
        Ok(v) => v.clamp(min, max),
        Err(_) => min,
    }
}

/// parse a fractional field (percent or degrees), clamping into min..=max
/// and falling back to min when the text does not parse
pub fn parse_double(text: &str, min: f64, max: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) => v.clamp(min, max),
        Err(_) => min,
    }
}
