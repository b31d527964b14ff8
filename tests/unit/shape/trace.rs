use super::*;

fn mask_from_rows(rows: &[&str]) -> RasterMask {
    let h = rows.len() as u32;
    let w = rows[0].len() as u32;
    let bits = rows
        .iter()
        .flat_map(|r| r.chars().map(|c| c == '#'))
        .collect();
    RasterMask::from_bits(w, h, bits)
}

fn pts(c: &Contour) -> Vec<(f64, f64)> {
    c.points().iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn single_pixel_traces_unit_square() {
    let mask = mask_from_rows(&["...", ".#.", "..."]);
    let c = extract_contour(&mask, RegionPolicy::Single).unwrap();
    assert_eq!(
        pts(&c),
        vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]
    );
    assert_eq!(c.signed_area(), 1.0);
}

#[test]
fn rectangle_collapses_to_four_corners() {
    let mask = mask_from_rows(&["......", ".####.", ".####.", ".####.", "......"]);
    let c = extract_contour(&mask, RegionPolicy::Single).unwrap();
    assert_eq!(
        pts(&c),
        vec![(1.0, 1.0), (5.0, 1.0), (5.0, 4.0), (1.0, 4.0)]
    );
    assert_eq!(c.signed_area(), 12.0);
    assert_eq!(c.perimeter(), 14.0);
}

#[test]
fn area_matches_pixel_count_for_concave_shape() {
    let mask = mask_from_rows(&[
        "#####", //
        "#...#", //
        "#.###", //
        "#....", //
        "#####",
    ]);
    // No holes: the inner background is open to the right on row 3.
    let c = extract_contour(&mask, RegionPolicy::Single).unwrap();
    assert_eq!(c.signed_area(), mask.count() as f64);
    assert_eq!(c.points()[0], Point::new(0.0, 0.0));
}

#[test]
fn diagonal_neighbors_stay_in_one_loop() {
    let mask = mask_from_rows(&["#..", ".#.", "..."]);
    let c = extract_contour(&mask, RegionPolicy::Single).unwrap();
    assert_eq!(c.signed_area(), 2.0);
    // The pinch corner is visited twice.
    let pinch = c
        .points()
        .iter()
        .filter(|p| **p == Point::new(1.0, 1.0))
        .count();
    assert_eq!(pinch, 2);
}

#[test]
fn shape_touching_the_border_is_traced() {
    let mask = mask_from_rows(&["##", "##"]);
    let c = extract_contour(&mask, RegionPolicy::Single).unwrap();
    assert_eq!(
        pts(&c),
        vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]
    );
}

#[test]
fn empty_and_multiple_regions_are_reported() {
    let empty = mask_from_rows(&["...", "..."]);
    assert!(matches!(
        extract_contour(&empty, RegionPolicy::Single).unwrap_err(),
        MorphError::EmptyShape
    ));

    let two = mask_from_rows(&["#..", "...", "..#"]);
    assert!(matches!(
        extract_contour(&two, RegionPolicy::Single).unwrap_err(),
        MorphError::MultipleRegions { count: 2 }
    ));
}

#[test]
fn largest_policy_traces_the_bigger_blob() {
    let mask = mask_from_rows(&["#.....", "......", "...###", "...###"]);
    let c = extract_contour(&mask, RegionPolicy::Largest).unwrap();
    assert_eq!(
        pts(&c),
        vec![(3.0, 2.0), (6.0, 2.0), (6.0, 4.0), (3.0, 4.0)]
    );
}
