use vizij_curve_core::{parse_stored_curve_json, CurveError, StoredCurve};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn load(name: &str) -> StoredCurve {
    let json = vizij_test_fixtures::curves::json(name)
        .unwrap_or_else(|e| panic!("load {name} fixture: {e}"));
    parse_stored_curve_json(&json).unwrap_or_else(|e| panic!("parse {name}: {e}"))
}

#[test]
fn every_fixture_parses_and_validates() {
    for name in vizij_test_fixtures::curves::keys() {
        let curve = load(&name);
        assert_eq!(curve.name, name);
        assert!(curve.snapshot.validate().is_ok());
    }
}

#[test]
fn two_second_ramp_midpoint() {
    let curve = load("two-second-ramp");
    let eval = curve.evaluator();
    assert_eq!(eval.evaluate(1.0), 5.0);
    assert_eq!(eval.evaluate(-1.0), 0.0);
    assert_eq!(eval.evaluate(2.0), 10.0);
}

#[test]
fn ease_in_out_is_symmetric() {
    let eval = load("ease-in-out").evaluator();
    approx(eval.evaluate(0.5), 0.5, 1e-6);
    for i in 1..10 {
        let t = i as f32 * 0.1;
        approx(eval.evaluate(t) + eval.evaluate(1.0 - t), 1.0, 1e-5);
    }
}

#[test]
fn bounce_hits_each_key() {
    let curve = load("bounce");
    let eval = curve.evaluator();
    assert_eq!(curve.snapshot.len(), 6);
    for k in curve.snapshot.keyframes() {
        assert_eq!(eval.evaluate(k.time), k.value);
    }
    assert_eq!(curve.snapshot.time_range(), Some((0.0, 1.4)));
}

#[test]
fn non_finite_keys_are_rejected() {
    // JSON cannot spell NaN, but 1e39 overflows f32.
    let err = parse_stored_curve_json(r#"{ "keys": [ { "time": 0, "value": 1e39 } ] }"#)
        .unwrap_err();
    assert_eq!(
        err,
        CurveError::NonFiniteKeyframe {
            index: 0,
            field: "value".into(),
        }
    );
}

#[test]
fn fixture_path_and_raw_json_agree_with_parsed_curve() {
    let path = vizij_test_fixtures::curves::path("bounce").expect("bounce fixture path");
    let text = std::fs::read_to_string(&path).expect("read bounce fixture");
    let from_path = parse_stored_curve_json(&text).expect("parse bounce from path");
    assert_eq!(from_path, load("bounce"));

    let raw: serde_json::Value =
        vizij_test_fixtures::curves::load("bounce").expect("bounce fixture as json");
    let raw_keys = raw["keys"].as_array().expect("keys array");
    assert_eq!(raw_keys.len(), from_path.snapshot.len());
    for (raw_key, key) in raw_keys.iter().zip(from_path.snapshot.keyframes()) {
        assert_eq!(raw_key["time"].as_f64().map(|t| t as f32), Some(key.time));
        assert_eq!(
            raw_key["outTangent"].as_f64().map(|t| t as f32),
            Some(key.out_tangent)
        );
    }
}
