use super::*;

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(3.0, 9.0, 0.0), 3.0);
    assert_eq!(lerp(3.0, 9.0, 1.0), 9.0);
    assert_eq!(lerp(3.0, 9.0, 0.5), 6.0);
}

#[test]
fn lerp_u8_truncates_and_clamps() {
    assert_eq!(lerp_u8(0, 255, 0.5), 127);
    assert_eq!(lerp_u8(10, 20, 0.0), 10);
    assert_eq!(lerp_u8(10, 20, 1.0), 20);
    assert_eq!(lerp_u8(200, 255, 2.0), 255);
}

#[test]
fn dist2_is_squared_euclidean() {
    assert_eq!(dist2(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 25.0);
    let p = Point::new(1.5, -2.0);
    assert_eq!(dist2(p, p), 0.0);
}

#[test]
fn lerp_point_midpoint() {
    let m = lerp_point(Point::new(0.0, 10.0), Point::new(4.0, 0.0), 0.25);
    assert_eq!(m, Point::new(1.0, 7.5));
}
