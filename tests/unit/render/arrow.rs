use super::*;

fn approx(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn wings_of_rightward_arrow_point_back_left() {
    let [l, r] = arrowhead_wings(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 10.0, 30.0);
    let dx = 10.0 - 10.0 * 30f64.to_radians().cos();
    assert!(approx(l, Point::new(dx, 5.0)), "{l:?}");
    assert!(approx(r, Point::new(dx, -5.0)), "{r:?}");
}

#[test]
fn wings_of_downward_arrow_are_mirrored_about_shaft() {
    let end = Point::new(50.0, 80.0);
    let [l, r] = arrowhead_wings(Point::new(50.0, 20.0), end, 10.0, 30.0);
    assert!((l.y - r.y).abs() < 1e-9);
    assert!(l.y < end.y);
    assert!(((l.x - end.x) + (r.x - end.x)).abs() < 1e-9);
}

#[test]
fn wings_have_requested_length() {
    let end = Point::new(3.0, 7.0);
    for w in arrowhead_wings(Point::new(-20.0, 40.0), end, 12.5, 45.0) {
        assert!(((w - end).hypot() - 12.5).abs() < 1e-9);
    }
}

#[test]
fn degenerate_arrow_uses_zero_direction() {
    let p = Point::new(5.0, 5.0);
    let [l, r] = arrowhead_wings(p, p, 10.0, 30.0);
    assert!(l.x < p.x && r.x < p.x);
}

#[test]
fn arrow_path_has_three_segments() {
    let style = ArrowStyle::default();
    let path = arrow_path(Point::new(0.0, 0.0), Point::new(20.0, 0.0), &style);
    let moves = path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    let lines = path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::LineTo(_)))
        .count();
    assert_eq!((moves, lines), (3, 3));
}

#[test]
fn default_style_matches_overlay_constants() {
    let s = ArrowStyle::default();
    assert_eq!(s.line_width, 4.0);
    assert_eq!(s.head_size, 10.0);
    assert_eq!(s.head_angle_deg, 30.0);
}
