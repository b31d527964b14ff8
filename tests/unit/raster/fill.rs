use kurbo::Point;

use super::*;

const INK: Rgba8 = Rgba8::BLACK;
const PAPER: Rgba8 = Rgba8::WHITE;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

fn poly(pts: &[(f64, f64)]) -> Contour {
    Contour::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
}

fn render(c: &Contour, w: u32, h: u32, rule: FillRule) -> Frame {
    rasterize(c, canvas(w, h), INK, PAPER, rule, FrameIndex(0), 0.0)
}

#[test]
fn square_fills_exact_ten_by_ten_block() {
    let sq = poly(&[(10.0, 10.0), (10.0, 20.0), (20.0, 20.0), (20.0, 10.0)]);
    let f = render(&sq, 32, 32, FillRule::NonZero);
    for y in 0..32 {
        for x in 0..32 {
            let inside = (10..20).contains(&x) && (10..20).contains(&y);
            let expected = if inside { INK } else { PAPER };
            assert_eq!(f.pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
    assert_eq!(f.count_color(INK), 100);
}

#[test]
fn winding_direction_does_not_matter_for_simple_polygons() {
    let cw = poly(&[(2.0, 3.0), (14.0, 3.0), (14.0, 9.0), (2.0, 9.0)]);
    let ccw = cw.reversed();
    for rule in [FillRule::NonZero, FillRule::EvenOdd] {
        assert_eq!(render(&cw, 16, 16, rule).data, render(&ccw, 16, 16, rule).data);
    }
    assert_eq!(render(&cw, 16, 16, FillRule::NonZero).count_color(INK), 72);
}

#[test]
fn fills_pixels_whose_centers_are_inside_a_triangle() {
    let tri = poly(&[(0.0, 0.0), (8.0, 0.0), (0.0, 8.0)]);
    let f = render(&tri, 8, 8, FillRule::NonZero);
    for y in 0..8u32 {
        for x in 0..8u32 {
            let (cx, cy) = (f64::from(x) + 0.5, f64::from(y) + 0.5);
            let inside = cx + cy < 8.0;
            assert_eq!(f.pixel(x, y) == INK, inside, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn pentagram_center_depends_on_rule() {
    let pts: Vec<(f64, f64)> = (0..5)
        .map(|i| {
            let a = -std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * (2 * i) as f64 / 5.0;
            (50.0 + 40.0 * a.cos(), 50.0 + 40.0 * a.sin())
        })
        .collect();
    let star = poly(&pts);

    let nz = render(&star, 100, 100, FillRule::NonZero);
    let eo = render(&star, 100, 100, FillRule::EvenOdd);
    assert_eq!(nz.pixel(50, 50), INK);
    assert_eq!(eo.pixel(50, 50), PAPER);
    // Star points are inside under both rules.
    assert_eq!(nz.pixel(50, 15), INK);
    assert_eq!(eo.pixel(50, 15), INK);
    assert!(nz.count_color(INK) > eo.count_color(INK));
}

#[test]
fn shape_is_clipped_to_canvas() {
    let big = poly(&[(-5.0, -5.0), (50.0, -5.0), (50.0, 50.0), (-5.0, 50.0)]);
    let f = render(&big, 10, 6, FillRule::NonZero);
    assert_eq!(f.count_color(INK), 60);

    let off = poly(&[(20.0, 20.0), (30.0, 20.0), (30.0, 30.0)]);
    assert_eq!(render(&off, 10, 10, FillRule::NonZero).count_color(INK), 0);
}

#[test]
fn degenerate_polygons_do_not_panic() {
    let flat = Contour::from_points_unchecked(vec![
        Point::new(1.0, 1.0),
        Point::new(5.0, 5.0),
        Point::new(9.0, 9.0),
    ]);
    assert_eq!(render(&flat, 10, 10, FillRule::NonZero).count_color(INK), 0);

    let nan = Contour::from_points_unchecked(vec![
        Point::new(f64::NAN, 1.0),
        Point::new(5.0, f64::INFINITY),
        Point::new(9.0, 9.0),
    ]);
    let _ = render(&nan, 10, 10, FillRule::EvenOdd);

    let empty = Contour::from_points_unchecked(vec![]);
    assert_eq!(render(&empty, 4, 4, FillRule::NonZero).count_color(PAPER), 16);
}
