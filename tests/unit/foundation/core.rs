use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(
        Canvas::new(3, 4).unwrap(),
        Canvas {
            width: 3,
            height: 4
        }
    );
}

#[test]
fn canvas_u16_conversion_bounds() {
    assert_eq!(Canvas::new(640, 480).unwrap().to_u16().unwrap(), (640, 480));
    assert!(Canvas::new(70_000, 10).unwrap().to_u16().is_err());
}

#[test]
fn pixel_point_converts_to_tuple_and_point() {
    let p = PixelPoint::new(12, 34);
    assert_eq!(<(u32, u32)>::from(p), (12, 34));
    assert_eq!(p.to_point(), Point::new(12.0, 34.0));
}
