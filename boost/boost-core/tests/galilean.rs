#![allow(unused_doc_comments)]
use boost_core::*;
use proptest::prelude::*;

// Golden: v = 0 is the identity for both models on every registry event.
#[test]
fn golden_zero_velocity_is_identity() {
    for model in Model::ALL {
        for e in EVENTS.iter() {
            let (xp, ctp) = model.apply(Velocity::ZERO, e.x, e.ct);
            assert_eq!((xp, ctp), (e.x, e.ct), "{model} moved {:?} at v=0", e.label);
        }
        assert_eq!(model.gamma(Velocity::ZERO), 1.0);
    }
}

// Golden: event B slides to x' = -v under a Galilean boost, time untouched.
#[test]
fn golden_event_b_drift() {
    let (xp, ctp) = galilean_transform(0.0, 1.0, 0.6).unwrap();
    assert!((xp + 0.6).abs() < 1e-15);
    assert_eq!(ctp, 1.0);
}

// Golden: the origin is fixed by both models.
#[test]
fn golden_origin_fixed() {
    assert_eq!(galilean_transform(0.0, 0.0, 0.7).unwrap(), (0.0, 0.0));
    let (x, ct) = lorentz_transform(0.0, 0.0, 0.7).unwrap();
    assert!(x.abs() < 1e-15 && ct.abs() < 1e-15);
}

// Golden: at low velocity Lorentz approaches Galilean on the time axis.
#[test]
fn golden_low_velocity_limit() {
    let (xg, ctg) = galilean_transform(0.0, 2.0, 0.001).unwrap();
    let (xl, ctl) = lorentz_transform(0.0, 2.0, 0.001).unwrap();
    assert!((xl - xg).abs() < 1e-5);
    assert!((ctl - ctg).abs() < 1e-5);
}

// Property: time is absolute under Galilean boosts.
proptest! {
    #[test]
    fn prop_galilean_time_absolute(
        v in -0.99_f64..0.99_f64,
        x in -10.0_f64..10.0,
        ct in -10.0_f64..10.0
    ) {
        let (_, ctp) = galilean_transform(x, ct, v).unwrap();
        prop_assert_eq!(ctp, ct);
    }
}

// Property: Galilean boosts keep time differences but shift space differences.
proptest! {
    #[test]
    fn prop_galilean_dct_invariant(
        v in 0.05_f64..0.95_f64,
        x1 in -5.0_f64..5.0, ct1 in -5.0_f64..5.0,
        x2 in -5.0_f64..5.0, dct in 0.5_f64..5.0
    ) {
        let ct2 = ct1 + dct;
        let (x1p, ct1p) = galilean_transform(x1, ct1, v).unwrap();
        let (x2p, ct2p) = galilean_transform(x2, ct2, v).unwrap();
        prop_assert!(((ct2p - ct1p) - (ct2 - ct1)).abs() < 1e-12);
        let shift = (x2p - x1p) - (x2 - x1);
        prop_assert!((shift + v * dct).abs() < 1e-9, "shift={shift}");
    }
}
