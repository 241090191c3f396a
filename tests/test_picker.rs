use pixel_picker::{parse_byte, parse_double, Cmyk, Hls, Picker, Rgb};

#[test]
fn test_new_starts_black_and_consistent() {
    let picker = Picker::new();
    assert_eq!(picker.rgb, Rgb::new(0, 0, 0));
    assert_eq!(
        (picker.cmyk.c, picker.cmyk.m, picker.cmyk.y, picker.cmyk.k),
        (0.0, 0.0, 0.0, 1.0)
    );
    assert_eq!(picker.hls, Hls::ZERO);
    assert!(!picker.hls_warning);
}

#[test]
fn test_set_rgb_syncs_cmyk_and_hls() {
    let mut picker = Picker::new();
    picker.set_rgb(Rgb::new(255, 0, 0));
    assert_eq!(
        (picker.cmyk.c, picker.cmyk.m, picker.cmyk.y, picker.cmyk.k),
        (0.0, 1.0, 1.0, 0.0)
    );
    assert_eq!((picker.hls.h, picker.hls.l, picker.hls.s), (0.0, 0.5, 1.0));
    assert!(!picker.hls_warning);
}

#[test]
fn test_set_cmyk_keeps_given_components() {
    let mut picker = Picker::new();
    // non minimal k: maps to mid gray but must stay on the controls as given
    let cmyk = Cmyk::new(0.0, 0.0, 0.0, 0.5);
    picker.set_cmyk(cmyk);
    assert_eq!(picker.cmyk, cmyk);
    assert_eq!(picker.rgb, Rgb::new(128, 128, 128));
    assert_eq!((picker.hls.h, picker.hls.s), (0.0, 0.0));
    assert!((picker.hls.l - 0.502).abs() < 1e-3);
}

#[test]
fn test_set_hls_syncs_rgb_and_cmyk() {
    let mut picker = Picker::new();
    picker.set_hls(Hls::new(120.0, 0.5, 1.0)).unwrap();
    assert_eq!(picker.rgb, Rgb::new(0, 255, 0));
    assert_eq!(
        (picker.cmyk.c, picker.cmyk.m, picker.cmyk.y, picker.cmyk.k),
        (1.0, 0.0, 1.0, 0.0)
    );
    assert_eq!(picker.hls, Hls::new(120.0, 0.5, 1.0));
}

#[test]
fn test_set_hls_out_of_range_leaves_state_untouched() {
    let mut picker = Picker::new();
    picker.set_rgb(Rgb::new(40, 80, 120));
    let before = picker;
    assert!(picker.set_hls(Hls::new(400.0, 0.5, 0.5)).is_err());
    assert_eq!(picker, before);
}

#[test]
fn test_field_parsing_clamps_and_defaults() {
    assert_eq!(parse_byte("128", 0, 255), 128);
    assert_eq!(parse_byte(" 255 ", 0, 255), 255);
    // u8 overflow and garbage both fall back to min
    assert_eq!(parse_byte("300", 0, 255), 0);
    assert_eq!(parse_byte("abc", 0, 255), 0);

    assert_eq!(parse_double("37.5", 0.0, 100.0), 37.5);
    assert_eq!(parse_double("150", 0.0, 100.0), 100.0);
    assert_eq!(parse_double("-3", 0.0, 100.0), 0.0);
    assert_eq!(parse_double("", 0.0, 100.0), 0.0);
    assert_eq!(parse_double("361", 0.0, 360.0), 360.0);
}

#[test]
fn test_state_survives_serde() {
    let mut picker = Picker::new();
    picker.set_rgb(Rgb::new(10, 200, 30));
    let json = serde_json::to_string(&picker).unwrap();
    let restored: Picker = serde_json::from_str(&json).unwrap();
    assert_eq!(picker, restored);
}
