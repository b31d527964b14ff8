use std::io::Cursor;
use std::path::PathBuf;

use super::*;

fn png_bytes(img: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let img = RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let decoded = decode_image(&png_bytes(img)).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.as_raw().as_slice(), &[100u8, 50, 200, 128]);
}

#[test]
fn garbage_is_a_decode_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, MorphError::Decode(_)));
}

#[test]
fn load_image_reports_missing_and_corrupt_files() {
    let dir = PathBuf::from("target").join("unit_decode");
    std::fs::create_dir_all(&dir).unwrap();

    let missing = dir.join("missing.png");
    let _ = std::fs::remove_file(&missing);
    let err = load_image(&missing).unwrap_err();
    assert!(matches!(err, MorphError::Decode(_)));
    assert!(err.to_string().contains("missing.png"));

    let corrupt = dir.join("corrupt.png");
    std::fs::write(&corrupt, b"\x89PNG broken").unwrap();
    assert!(matches!(
        load_image(&corrupt).unwrap_err(),
        MorphError::Decode(_)
    ));

    let ok = dir.join("ok.png");
    std::fs::write(&ok, png_bytes(RgbaImage::new(3, 2))).unwrap();
    assert_eq!(load_image(&ok).unwrap().dimensions(), (3, 2));
}
