use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::OutQuad.apply(3.0), 1.0);
}

#[test]
fn names_parse_back() {
    for ease in Ease::ALL {
        assert_eq!(ease.name().parse::<Ease>().unwrap(), ease);
    }
    assert_eq!("In-Out-Cubic".parse::<Ease>().unwrap(), Ease::InOutCubic);
    assert!("bounce".parse::<Ease>().is_err());
}

#[test]
fn serde_uses_snake_case_names() {
    let json = serde_json::to_string(&Ease::SmoothStep).unwrap();
    assert_eq!(json, "\"smooth_step\"");
    let back: Ease = serde_json::from_str("\"in_out_quad\"").unwrap();
    assert_eq!(back, Ease::InOutQuad);
}
