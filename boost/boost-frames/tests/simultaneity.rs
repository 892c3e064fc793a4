#![allow(unused_doc_comments)]
use boost_core::{Label, Model, Velocity};
use boost_frames::*;
use proptest::prelude::*;

fn single(model: Model, v: f64) -> Frame {
    let ts = TimeSamples::new(vec![0.0]).unwrap();
    generate_frames(model, v, &ts).unwrap().next().unwrap()
}

// Golden: Lorentz tilt equals v, not gamma·v.
#[test]
fn golden_lorentz_tilt() {
    for &v in &[0.1, 0.6, 0.9, 0.99, -0.4] {
        let f = single(Model::Lorentz, v);
        assert_eq!(f.boosted_line.slope, v);
        assert_eq!(f.rest_line.slope, 0.0);
    }
}

// Golden: Galilean simultaneity stays horizontal in both frames.
#[test]
fn golden_galilean_flat() {
    for &v in &[0.1, 0.6, 0.99] {
        let f = single(Model::Galilean, v);
        assert_eq!(f.boosted_line.slope, 0.0);
        assert_eq!(f.rest_line.slope, 0.0);
    }
}

// Both lines pass through the transformed origin.
#[test]
fn lines_pass_through_origin() {
    for model in Model::ALL {
        let f = single(model, 0.7);
        let o = f.event(Label::O).coords();
        assert!(f.rest_line.contains(o, 1e-12));
        assert!(f.boosted_line.contains(o, 1e-12));
    }
}

// Endpoints span the requested extent.
#[test]
fn lines_span_extent() {
    let ts = TimeSamples::new(vec![0.0]).unwrap();
    let extent = Extent::new(-3.0, 5.0).unwrap();
    let sched = Schedule::constant(0.5).unwrap();
    let f = generate_scheduled(Model::Lorentz, sched, &ts, extent).unwrap().next().unwrap();
    assert_eq!(f.boosted_line.from, (-3.0, -1.5));
    assert_eq!(f.boosted_line.to, (5.0, 2.5));
    assert_eq!(f.rest_line.segment().from, (-3.0, 0.0));
}

// Property: S′ simultaneous points land on the boosted line when mapped back to S.
proptest! {
    #[test]
    fn prop_boosted_line_is_rest_line_in_s(
        v in -0.99_f64..0.99_f64,
        xp in -10.0_f64..10.0
    ) {
        let vel = Velocity::new(v).unwrap();
        for model in Model::ALL {
            let f = single(model, v);
            let ctp = f.rest_line.ct_at(xp);
            let p = model.invert(vel, xp, ctp);
            prop_assert!(f.boosted_line.contains(p, 1e-9), "{model}: {p:?} off line");
        }
    }
}

// Property: Lorentz slope equals v exactly over the whole range.
proptest! {
    #[test]
    fn prop_lorentz_slope_is_v(v in -0.999_f64..0.999_f64) {
        let f = single(Model::Lorentz, v);
        prop_assert_eq!(f.boosted_line.slope, v);
    }
}
