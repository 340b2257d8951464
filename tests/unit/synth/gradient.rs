use super::*;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn horizontal_endpoints_match_colors() {
    let c1 = Rgb8::new(255, 0, 0);
    let c2 = Rgb8::new(0, 0, 255);
    for (w, h) in [(2u32, 2u32), (10, 3), (800, 4)] {
        let r = gradient(Canvas::new(w, h).unwrap(), c1, c2, Direction::Horizontal);
        for y in 0..h {
            assert_eq!(r.pixel(0, y), [255, 0, 0, 255]);
            assert_eq!(r.pixel(w - 1, y), [0, 0, 255, 255]);
        }
    }
}

#[test]
fn vertical_endpoints_match_colors() {
    let c1 = Rgb8::new(10, 20, 30);
    let c2 = Rgb8::new(200, 100, 0);
    let r = gradient(Canvas::new(3, 7).unwrap(), c1, c2, Direction::Vertical);
    for x in 0..3 {
        assert_eq!(r.pixel(x, 0), [10, 20, 30, 255]);
        assert_eq!(r.pixel(x, 6), [200, 100, 0, 255]);
    }
}

#[test]
fn single_pixel_axis_does_not_divide_by_zero() {
    let c1 = Rgb8::new(1, 2, 3);
    let r = gradient(Canvas::new(1, 1).unwrap(), c1, Rgb8::WHITE, Direction::Horizontal);
    assert_eq!(r.pixel(0, 0), [1, 2, 3, 255]);
    let r = gradient(Canvas::new(4, 1).unwrap(), c1, Rgb8::WHITE, Direction::Vertical);
    assert_eq!(r.pixel(3, 0), [1, 2, 3, 255]);
}

#[test]
fn midpoint_rounds_to_nearest() {
    let r = gradient(
        Canvas::new(3, 1).unwrap(),
        Rgb8::BLACK,
        Rgb8::WHITE,
        Direction::Horizontal,
    );
    assert_eq!(r.pixel(1, 0), [128, 128, 128, 255]);
}

#[test]
fn direction_parse_defaults_to_horizontal() {
    assert_eq!(Direction::parse("vertical"), Direction::Vertical);
    assert_eq!(Direction::parse(" VERTICAL "), Direction::Vertical);
    assert_eq!(Direction::parse("diagonal"), Direction::Horizontal);
    assert_eq!(Direction::parse(""), Direction::Horizontal);
}

#[test]
fn random_direction_is_reproducible_with_seed() {
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    let da: Vec<_> = (0..16).map(|_| Direction::random(&mut a)).collect();
    let db: Vec<_> = (0..16).map(|_| Direction::random(&mut b)).collect();
    assert_eq!(da, db);
}
