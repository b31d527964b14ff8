use kurbo::Point;

/// `(1 - t) * a + t * b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    lerp(f64::from(a), f64::from(b), t).clamp(0.0, 255.0) as u8
}

pub(crate) fn dist2(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
