use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn round_u8_saturates() {
    assert_eq!(round_u8(-12.0), 0);
    assert_eq!(round_u8(300.0), 255);
    assert_eq!(round_u8(127.5), 128);
    assert_eq!(round_u8(f64::NAN), 0);
}

#[test]
fn lerp_endpoints_are_exact() {
    assert_eq!(lerp_u8(10, 200, 0.0), 10);
    assert_eq!(lerp_u8(10, 200, 1.0), 200);
    assert_eq!(lerp_u8(0, 255, 0.5), 128);
}

#[test]
fn luma_of_white_and_black() {
    assert!((luma(255, 255, 255) - 255.0).abs() < 1e-9);
    assert_eq!(luma(0, 0, 0), 0.0);
}
