use super::*;
use crate::foundation::core::Canvas;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 255];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn half_alpha_white_over_black_is_mid_gray() {
    let src = premultiply([255, 255, 255, 128]);
    let out = over([0, 0, 0, 255], src);
    assert_eq!(out[3], 255);
    assert!((i32::from(out[0]) - 128).abs() <= 1);
}

#[test]
fn premultiply_roundtrip_is_close() {
    let px = [200, 100, 50, 128];
    let back = unpremultiply(premultiply(px));
    for i in 0..3 {
        assert!((i32::from(back[i]) - i32::from(px[i])).abs() <= 2);
    }
    assert_eq!(back[3], 128);
}

#[test]
fn over_in_place_keeps_opaque_background_opaque() {
    let mut dst = Raster::filled(Canvas::new(2, 1).unwrap(), [0, 0, 255, 255]);
    let layer = [0, 0, 0, 0, 100, 0, 0, 100];
    over_in_place(&mut dst, &layer).unwrap();
    assert_eq!(dst.pixel(0, 0), [0, 0, 255, 255]);
    let px = dst.pixel(1, 0);
    assert_eq!(px[3], 255);
    assert!(px[0] > 0 && px[2] < 255);

    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
}
