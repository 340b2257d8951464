use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn ring_layout_follows_layer_formulas() {
    let rings = ring_layouts(canvas(800, 600), 8);
    assert_eq!(rings.len(), 8);
    // base radius = 600 / 3
    assert_eq!(rings[0].radius, 200);
    assert_eq!(rings[1].radius, 175);
    assert_eq!(rings[7].radius, 25);
    assert_eq!(rings[0].motif_half_size, 20);
    assert_eq!(rings[7].motif_half_size, 5);
    for (i, r) in rings.iter().enumerate() {
        assert_eq!(r.motif_count, 6 + 2 * i as u32);
        assert_eq!(r.is_circle(), i % 2 == 0);
    }
    assert_eq!(rings[6].color(), palette::MANDALA[0]);
}

#[test]
fn layer_count_is_capped() {
    assert_eq!(ring_layouts(canvas(400, 400), 1_000).len(), MAX_LAYERS as usize);
}

#[test]
fn layered_plan_counts_motifs_and_ends_with_center_disc() {
    let plan = mandala_plan(canvas(300, 300), MandalaStyle::Layered { complexity: 3 });
    // 6 + 8 + 10 motifs plus the center disc
    assert_eq!(plan.len(), 25);
    let last = plan.last().unwrap();
    assert_eq!(last.paint, Paint::opaque(Rgb8::WHITE));
    assert_eq!(last.outline.map(|o| o.color), Some(Rgb8::GOLD));
    assert_eq!(
        last.kind,
        ShapeKind::Circle {
            center: Point::new(150.0, 150.0),
            radius: 20.0
        }
    );
    assert!(
        plan[..24]
            .iter()
            .all(|s| s.outline.map(|o| o.color) == Some(Rgb8::WHITE))
    );
}

#[test]
fn zero_complexity_draws_only_the_center() {
    let plan = mandala_plan(canvas(100, 100), MandalaStyle::Layered { complexity: 0 });
    assert_eq!(plan.len(), 1);
}

#[test]
fn simple_plan_has_rings_then_spokes() {
    let plan = mandala_plan(canvas(400, 300), MandalaStyle::Simple);
    assert_eq!(plan.len(), 17);
    for (i, s) in plan[..5].iter().enumerate() {
        match s.kind {
            ShapeKind::Ring { radius, width, .. } => {
                assert_eq!(radius, 30.0 + 20.0 * i as f64);
                assert_eq!(width, 3.0);
            }
            other => panic!("expected ring, got {other:?}"),
        }
    }
    for s in &plan[5..] {
        let ShapeKind::Line { from, to, width } = s.kind else {
            panic!("expected spoke");
        };
        assert_eq!(from, Point::new(200.0, 150.0));
        assert!((from.distance(to) - 80.0).abs() < 1e-9);
        assert_eq!(width, 2.0);
    }
}

#[test]
fn rendered_mandala_has_white_center_on_black() {
    let c = canvas(120, 90);
    let out = mandala(c, MandalaStyle::Layered { complexity: 4 }).unwrap();
    assert_eq!(out.pixel(60, 45), [255, 255, 255, 255]);
    assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
    assert!(out.is_opaque());
}

#[test]
fn simple_mandala_renders_spokes() {
    let out = mandala(canvas(200, 200), MandalaStyle::Simple).unwrap();
    assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
    // Horizontal spoke to the right of center, inside the first ring
    assert_eq!(out.pixel(110, 100), [255, 255, 255, 255]);
}
