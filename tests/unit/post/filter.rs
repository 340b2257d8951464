use super::*;
use crate::foundation::core::Canvas;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> Raster {
    Raster::filled(Canvas::new(w, h).unwrap(), rgba)
}

#[test]
fn parse_falls_back_to_blur() {
    assert_eq!(FilterKind::parse("edge"), FilterKind::Edge);
    assert_eq!(FilterKind::parse("Emboss"), FilterKind::Emboss);
    assert_eq!(FilterKind::parse("sharpen"), FilterKind::Sharpen);
    assert_eq!(FilterKind::parse("smooth"), FilterKind::Smooth);
    assert_eq!(FilterKind::parse("gaussian"), FilterKind::Blur);
}

#[test]
fn kernel_sizes_match_weights() {
    for k in [BLUR, SHARPEN, EDGE, EMBOSS, SMOOTH] {
        assert_eq!(k.weights.len(), k.size * k.size);
    }
    assert_eq!(BLUR.weights.iter().sum::<i32>(), BLUR.scale);
    assert_eq!(SMOOTH.weights.iter().sum::<i32>(), SMOOTH.scale);
    assert_eq!(SHARPEN.weights.iter().sum::<i32>(), SHARPEN.scale);
}

#[test]
fn normalized_kernels_keep_constant_images() {
    let src = solid(9, 7, [37, 150, 220, 255]);
    for kind in [FilterKind::Blur, FilterKind::Sharpen, FilterKind::Smooth] {
        assert_eq!(filter(&src, kind), src, "{kind:?}");
    }
}

#[test]
fn edges_of_constant_image_are_black() {
    let src = solid(6, 6, [90, 90, 90, 255]);
    let out = filter(&src, FilterKind::Edge);
    assert!(out.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn emboss_of_constant_image_is_mid_gray() {
    let src = solid(4, 4, [10, 200, 77, 255]);
    let out = filter(&src, FilterKind::Emboss);
    assert!(out.data.chunks_exact(4).all(|px| px == [128, 128, 128, 255]));
}

#[test]
fn alpha_is_copied_through() {
    let mut src = solid(5, 5, [255, 0, 0, 40]);
    src.put_pixel(2, 2, [0, 0, 255, 200]);
    let out = filter(&src, FilterKind::Edge);
    assert_eq!(out.pixel(2, 2)[3], 200);
    assert_eq!(out.pixel(0, 0)[3], 40);
}

#[test]
fn edge_detects_a_single_bright_pixel() {
    let mut src = solid(5, 5, [0, 0, 0, 255]);
    src.put_pixel(2, 2, [10, 10, 10, 255]);
    let out = filter(&src, FilterKind::Edge);
    assert_eq!(out.pixel(2, 2), [80, 80, 80, 255]);
    // Neighbors go negative and clamp
    assert_eq!(out.pixel(1, 2), [0, 0, 0, 255]);
}

#[test]
fn blur_spreads_from_the_ring_only() {
    let mut src = solid(5, 5, [0, 0, 0, 255]);
    src.put_pixel(2, 2, [160, 160, 160, 255]);
    let out = filter(&src, FilterKind::Blur);
    // The center weight is zero and the ring is two pixels away
    assert_eq!(out.pixel(2, 2)[0], 0);
    assert_eq!(out.pixel(0, 0)[0], 10);
    assert_eq!(out.pixel(1, 1)[0], 0);
}

#[test]
fn input_is_not_mutated() {
    let mut src = solid(3, 3, [0, 0, 0, 255]);
    src.put_pixel(1, 1, [255, 255, 255, 255]);
    let before = src.clone();
    let _ = filter(&src, FilterKind::Sharpen);
    assert_eq!(src, before);
}
