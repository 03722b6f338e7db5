use super::rand::{draw_points, draw_steps, ReplayToken, StepCfg};
use super::*;
use crate::Point;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn close(a: Point, b: Point) -> bool {
    (a - b).norm() < 1e-9
}

#[test]
fn rotate_sign_pattern_quarter_turn() {
    // (x cosθ + y sinθ, y cosθ − x sinθ) at θ=π/2: (1,0) -> (0,-1), (0,1) -> (1,0)
    let f = rotate(&TransferParams::theta(FRAC_PI_2));
    assert!(close(f(Point::new(1.0, 0.0)), Point::new(0.0, -1.0)));
    assert!(close(f(Point::new(0.0, 1.0)), Point::new(1.0, 0.0)));
}

#[test]
fn full_rotation_is_identity() {
    let f = rotate(&TransferParams::theta(TAU));
    for p in [
        Point::new(0.0, 0.0),
        Point::new(3.5, -2.0),
        Point::new(-1e3, 7.25),
    ] {
        assert!((f(p) - p).norm() < 1e-9 * p.coords.norm().max(1.0));
    }
}

#[test]
fn translate_and_reverse() {
    let params = TransferParams::offset(1.5, -2.0);
    let f = translate(&params);
    let g = reverse_translate(&params);
    let p = Point::new(4.0, 4.0);
    assert_eq!(f(p), Point::new(5.5, 2.0));
    assert_eq!(g(f(p)), p);
}

#[test]
fn reverse_rotate_undoes_rotate() {
    for theta in [0.0, 0.3, PI, 4.0, -1.2] {
        let params = TransferParams::theta(theta);
        let f = rotate(&params);
        let g = reverse_rotate(&params);
        let p = Point::new(2.0, -0.75);
        assert!(close(g(f(p)), p), "theta={theta}");
        assert!(close(f(g(p)), p), "theta={theta}");
    }
}

#[test]
fn missing_params_are_identity() {
    let p = Point::new(1.25, -3.0);
    let empty = TransferParams::default();
    let only_x = TransferParams {
        x: Some(5.0),
        ..TransferParams::default()
    };
    // theta alone does not make a trace step
    let only_theta = TransferParams::theta(1.0);
    assert_eq!(rotate(&empty)(p), p);
    assert_eq!(reverse_rotate(&empty)(p), p);
    assert_eq!(translate(&only_x)(p), p);
    assert_eq!(reverse_translate(&only_x)(p), p);
    assert_eq!(translate(&only_theta)(p), p);
    // x/y are ignored by rotation
    assert_eq!(rotate(&TransferParams::offset(1.0, 1.0))(p), p);
}

#[test]
fn kind_resolves_builders() {
    let p = Point::new(1.0, 2.0);
    let step = TransferStep::trace(1.0, 1.0);
    assert_eq!((TransferKind::Trace.forward_builder())(&step.params)(p), Point::new(2.0, 3.0));
    assert_eq!((TransferKind::Trace.reverse_builder())(&step.params)(p), Point::new(0.0, 1.0));
    let rot = TransferStep::angle(PI);
    assert!(close(rot.forward()(p), Point::new(-1.0, -2.0)));
    assert!(close(rot.reverse()(p), Point::new(-1.0, -2.0)));
}

#[test]
fn completeness_reports_missing_fields() {
    let p = TransferParams {
        y: Some(1.0),
        ..TransferParams::default()
    };
    assert_eq!(p.missing_fields(TransferKind::Trace), vec![MissingField::X]);
    assert_eq!(
        p.missing_fields(TransferKind::Angle),
        vec![MissingField::Theta]
    );
    assert!(TransferStep::angle(0.0).is_complete());
    assert!(!TransferStep::new(TransferKind::Angle, p).is_complete());
}

#[test]
fn steps_parse_from_json_tags() {
    let raw = r#"[
        {"kind": "angle", "params": {"theta": 3.0}},
        {"kind": "trace", "params": {"x": 1, "y": 2}},
        {"kind": "angle"}
    ]"#;
    let steps: Vec<TransferStep> = serde_json::from_str(raw).unwrap();
    assert_eq!(steps[0], TransferStep::angle(3.0));
    assert_eq!(steps[1], TransferStep::trace(1.0, 2.0));
    assert_eq!(steps[2].kind, TransferKind::Angle);
    assert!(!steps[2].is_complete());
    let back = serde_json::to_string(&steps[1]).unwrap();
    assert_eq!(back, r#"{"kind":"trace","params":{"x":1.0,"y":2.0}}"#);
}

#[test]
fn sampler_is_deterministic_and_complete() {
    let cfg = StepCfg {
        len: 16,
        ..StepCfg::default()
    };
    let a = draw_steps(cfg, ReplayToken::new(7, 0));
    let b = draw_steps(cfg, ReplayToken::new(7, 0));
    let c = draw_steps(cfg, ReplayToken::new(7, 1));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 16);
    assert!(a.iter().all(TransferStep::is_complete));

    let only_angles = draw_steps(
        StepCfg {
            angle_prob: 1.0,
            ..cfg
        },
        ReplayToken::new(1, 2),
    );
    assert!(only_angles.iter().all(|s| s.kind == TransferKind::Angle));
}

#[test]
fn sampler_tolerates_non_finite_widths() {
    for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let pts = draw_points(3, bad, ReplayToken::new(0, 0));
        assert_eq!(pts.len(), 3);
        assert!(pts.iter().all(|p| p.x.abs() <= 1.0 && p.y.abs() <= 1.0));

        let steps = draw_steps(
            StepCfg {
                len: 3,
                angle_prob: 0.0,
                max_offset: bad,
            },
            ReplayToken::new(0, 0),
        );
        let limit = StepCfg::default().max_offset;
        assert!(steps.iter().all(|s| {
            s.kind == TransferKind::Trace
                && s.params.x.is_some_and(|x| x.abs() <= limit)
                && s.params.y.is_some_and(|y| y.abs() <= limit)
        }));
    }
    // finite but huge widths stay within the sampler's range
    let pts = draw_points(2, f64::MAX, ReplayToken::new(1, 0));
    assert!(pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}
