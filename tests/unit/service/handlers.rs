use super::*;

fn config() -> ServiceConfig {
    ServiceConfig::default()
}

fn gradient_req(width: i64, height: i64) -> GradientRequest {
    serde_json::from_value(serde_json::json!({ "width": width, "height": height })).unwrap()
}

#[test]
fn gradient_dimensions_are_clamped() {
    let small = ServiceConfig {
        max_dimension: 16,
        ..config()
    };
    let r = gradient_image(gradient_req(5000, 3), &small).unwrap();
    assert_eq!((r.width, r.height), (16, 3));
}

#[test]
fn non_positive_dimensions_are_validation_errors() {
    for (w, h) in [(0, 10), (10, 0), (-4, 10)] {
        let err = gradient_image(gradient_req(w, h), &config()).unwrap_err();
        assert!(matches!(err, ProcimgError::Validation(_)), "{w}x{h}: {err}");
    }
}

#[test]
fn negative_complexity_is_rejected_and_huge_is_capped() {
    let req = |c: i64| MandalaRequest {
        width: 60,
        height: 60,
        complexity: c,
    };
    assert!(matches!(
        mandala_image(req(-1), &config()),
        Err(ProcimgError::Validation(_))
    ));
    assert_eq!(parse_complexity(i64::MAX, 64).unwrap(), 64);
    assert_eq!(parse_complexity(0, 64).unwrap(), 0);
    assert!(mandala_image(req(0), &config()).is_ok());
}

#[test]
fn simple_endpoint_uses_its_own_limit_and_rejects_unknown_types() {
    let req: SimpleRequest =
        serde_json::from_value(serde_json::json!({ "width": 5000, "height": 20 })).unwrap();
    let r = simple_image(req, &config()).unwrap();
    assert_eq!((r.width, r.height), (1000, 20));

    let req: SimpleRequest =
        serde_json::from_value(serde_json::json!({ "type": "fractal" })).unwrap();
    let err = simple_image(req, &config()).unwrap_err();
    assert!(err.to_string().contains("unknown image type 'fractal'"));
}

#[test]
fn seeded_abstract_requests_are_reproducible() {
    let body = br#"{"width":48,"height":32,"complexity":25,"seed":7}"#;
    let a = process(body, &config(), abstract_image).unwrap();
    let b = process(body, &config(), abstract_image).unwrap();
    assert_eq!(a, b);
}

#[test]
fn process_reports_malformed_json_as_serde_error() {
    let err = process(b"{not json", &config(), gradient_image).unwrap_err();
    assert!(matches!(err, ProcimgError::Serde(_)));
    let err = process(b"", &config(), filter_image).unwrap_err();
    assert!(matches!(err, ProcimgError::Serde(_)));
}

#[test]
fn missing_image_data_is_a_validation_error() {
    let err = process(b"{}", &config(), enhance_image).unwrap_err();
    assert!(err.to_string().contains("image_data is required"));
}

#[test]
fn enhance_and_filter_operate_on_decoded_input() {
    let src = Raster::filled(Canvas::new(6, 4).unwrap(), [100, 50, 25, 255]);
    let uri = codec::to_data_uri(&src).unwrap();

    let req = EnhanceRequest {
        image_data: Some(uri.clone()),
        kind: "brightness".into(),
        factor: 2.0,
    };
    let out = enhance_image(req, &config()).unwrap();
    assert_eq!(out.pixel(3, 2), [200, 100, 50, 255]);

    let req = FilterRequest {
        image_data: Some(uri),
        kind: "smooth".into(),
    };
    assert_eq!(filter_image(req, &config()).unwrap(), src);
}

#[test]
fn decoded_pixel_budget_is_enforced() {
    let src = Raster::filled(Canvas::new(10, 10).unwrap(), [0, 0, 0, 255]);
    let tight = ServiceConfig {
        max_decoded_pixels: 99,
        ..config()
    };
    let req = FilterRequest {
        image_data: Some(codec::to_data_uri(&src).unwrap()),
        kind: "blur".into(),
    };
    assert!(matches!(
        filter_image(req, &tight),
        Err(ProcimgError::Validation(_))
    ));
}

#[test]
fn simple_type_is_case_and_whitespace_insensitive() {
    for kind in ["Gradient", " MANDALA ", "Pattern"] {
        let req: SimpleRequest = serde_json::from_value(
            serde_json::json!({ "type": kind, "width": 40, "height": 30, "seed": 1 }),
        )
        .unwrap();
        let r = simple_image(req, &config()).unwrap();
        assert_eq!((r.width, r.height), (40, 30), "{kind}");
    }
}
