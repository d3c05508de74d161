use super::*;

#[test]
fn corner_squares_on_800px_board() {
    assert_eq!(
        square_to_pixel("a8", 800, 800).unwrap(),
        PixelPoint::new(50, 50)
    );
    assert_eq!(
        square_to_pixel("h1", 800, 800).unwrap(),
        PixelPoint::new(750, 750)
    );
    assert_eq!(
        square_to_pixel("a1", 800, 800).unwrap(),
        PixelPoint::new(50, 750)
    );
    assert_eq!(
        square_to_pixel("h8", 800, 800).unwrap(),
        PixelPoint::new(750, 50)
    );
}

#[test]
fn non_square_images_scale_each_axis() {
    // Cell is 100x50; e4 is column 4, row 4.
    assert_eq!(
        square_to_pixel("e4", 800, 400).unwrap(),
        PixelPoint::new(450, 225)
    );
}

#[test]
fn coordinates_are_truncated() {
    // 0.5 * 100 / 8 = 6.25
    assert_eq!(square_to_pixel("a8", 100, 100).unwrap(), PixelPoint::new(6, 6));
    // 7.5 * 101 / 8 = 94.6875
    assert_eq!(
        square_to_pixel("h1", 101, 101).unwrap(),
        PixelPoint::new(94, 94)
    );
}

#[test]
fn every_square_maps_inside_the_image() {
    for (w, h) in [(8, 8), (9, 17), (100, 37), (800, 800), (1023, 511)] {
        for sq in Square::all() {
            let p = sq.center_px(w, h);
            assert!(p.x < w, "{sq} x={} w={w}", p.x);
            assert!(p.y < h, "{sq} y={} h={h}", p.y);
        }
    }
}

#[test]
fn all_yields_64_distinct_squares() {
    let all: Vec<Square> = Square::all().collect();
    assert_eq!(all.len(), 64);
    assert_eq!(all.first().unwrap().to_string(), "a1");
    assert_eq!(all.last().unwrap().to_string(), "h8");
    let unique: std::collections::HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), 64);
}

#[test]
fn parsing_is_case_insensitive_on_file() {
    let sq: Square = "E2".parse().unwrap();
    assert_eq!(sq, "e2".parse().unwrap());
    assert_eq!(sq.file(), 4);
    assert_eq!(sq.rank(), 2);
    assert_eq!(sq.row(), 6);
    assert_eq!(sq.to_string(), "e2");
}

#[test]
fn malformed_squares_are_rejected() {
    for bad in ["", "e", "e22", "z9", "i1", "a0", "a9", "1a", "é4", "e-"] {
        assert!(bad.parse::<Square>().is_err(), "accepted '{bad}'");
    }
    assert!(square_to_pixel("z9", 800, 800).is_err());
}

#[test]
fn new_validates_ranges() {
    assert!(Square::new(0, 1).is_ok());
    assert!(Square::new(7, 8).is_ok());
    assert!(Square::new(8, 1).is_err());
    assert!(Square::new(0, 0).is_err());
    assert!(Square::new(0, 9).is_err());
}
