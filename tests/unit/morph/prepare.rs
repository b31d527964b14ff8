use super::*;
use crate::foundation::error::MorphError;
use crate::shape::components::RegionPolicy;

fn canvas_with_rects(w: u32, h: u32, rects: &[(u32, u32, u32, u32, [u8; 4])]) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    for &(x0, y0, x1, y1, c) in rects {
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, image::Rgba(c));
            }
        }
    }
    img
}

#[test]
fn samples_color_of_first_foreground_pixel() {
    // Top-left pixel of the blob is green, the rest is red.
    let mut img = canvas_with_rects(16, 16, &[(4, 4, 12, 12, [255, 0, 0, 255])]);
    img.put_pixel(4, 4, image::Rgba([0, 255, 0, 255]));

    let shape = prepare_shape(&img, &MorphConfig::default()).unwrap();
    assert_eq!(shape.color, Rgba8::new(0, 255, 0, 255));
    assert_eq!(shape.area, 64);
    assert_eq!(shape.size, Canvas { width: 16, height: 16 });
    assert_eq!(shape.contour.len(), MorphConfig::default().points);
    assert_eq!(shape.contour.points()[0], kurbo::Point::new(4.0, 4.0));
}

#[test]
fn honors_point_count_and_region_policy() {
    let img = canvas_with_rects(
        20,
        10,
        &[
            (1, 1, 3, 3, [0, 0, 255, 255]),
            (8, 2, 16, 8, [255, 0, 0, 255]),
        ],
    );
    let single = MorphConfig {
        points: 32,
        ..MorphConfig::default()
    };
    assert!(matches!(
        prepare_shape(&img, &single).unwrap_err(),
        MorphError::MultipleRegions { count: 2 }
    ));

    let largest = MorphConfig {
        region_policy: RegionPolicy::Largest,
        ..single
    };
    let shape = prepare_shape(&img, &largest).unwrap();
    assert_eq!(shape.contour.len(), 32);
    assert_eq!(shape.area, 48);
    assert_eq!(shape.color, Rgba8::new(255, 0, 0, 255));
}

#[test]
fn blank_image_is_empty_shape() {
    let img = RgbaImage::new(8, 8);
    assert!(matches!(
        prepare_shape(&img, &MorphConfig::default()).unwrap_err(),
        MorphError::EmptyShape
    ));
}
