use super::*;

#[test]
fn canvas_rejects_zero_and_unions_to_max() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());

    let a = Canvas::new(40, 10).unwrap();
    let b = Canvas::new(12, 30).unwrap();
    assert_eq!(a.union(b), Canvas::new(40, 30).unwrap());
    assert_eq!(a.pixel_count(), 400);
}

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(
        "#ff3366".parse::<Rgba8>().unwrap(),
        Rgba8::new(255, 0x33, 0x66, 255)
    );
    assert_eq!(
        "00FF0080".parse::<Rgba8>().unwrap(),
        Rgba8::new(0, 255, 0, 128)
    );
    assert!("#fff".parse::<Rgba8>().is_err());
    assert!("#gg0000".parse::<Rgba8>().is_err());
}

#[test]
fn color_display_roundtrips_through_parse() {
    let c = Rgba8::new(1, 2, 254, 7);
    assert_eq!(c.to_string(), "#0102fe07");
    assert_eq!(c.to_string().parse::<Rgba8>().unwrap(), c);
}

#[test]
fn color_deserializes_from_hex_or_array() {
    let c: Rgba8 = serde_json::from_str("\"#102030\"").unwrap();
    assert_eq!(c, Rgba8::new(0x10, 0x20, 0x30, 255));

    let c: Rgba8 = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(c, Rgba8::new(1, 2, 3, 255));

    assert!(serde_json::from_str::<Rgba8>("[1, 2]").is_err());
}

#[test]
fn color_lerp_endpoints() {
    let a = Rgba8::new(0, 100, 200, 255);
    let b = Rgba8::new(200, 100, 0, 255);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::new(100, 100, 100, 255));
}
