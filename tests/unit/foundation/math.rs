use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u8(100, 128), 50);
    assert_eq!(mul_div255_u8(0, 200), 0);
}

#[test]
fn premultiply_opaque_is_identity() {
    assert_eq!(premultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(unpremultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
}

#[test]
fn premultiply_transparent_clears_color() {
    assert_eq!(premultiply([10, 20, 30, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([10, 20, 30, 0]), [0, 0, 0, 0]);
}

#[test]
fn unpremultiply_recovers_half_alpha_within_one() {
    let straight = [200, 100, 50, 128];
    let back = unpremultiply(premultiply(straight));
    for i in 0..3 {
        assert!(back[i].abs_diff(straight[i]) <= 1, "channel {i}: {back:?}");
    }
    assert_eq!(back[3], 128);
}
